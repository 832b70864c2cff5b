use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::state::data_model::{self, TableRow};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    #[default]
    Text,
    #[serde(rename = "select")]
    Choice,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

impl ChoiceOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Option whose label is its value.
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }
}

/// Display strategy for a column: raw cell value plus the whole row in, text out.
pub struct CellRender<T>(Rc<dyn Fn(Option<&Value>, &T) -> String>);

impl<T> CellRender<T> {
    pub fn new(render: impl Fn(Option<&Value>, &T) -> String + 'static) -> Self {
        Self(Rc::new(render))
    }

    pub fn call(&self, value: Option<&Value>, row: &T) -> String {
        (self.0)(value, row)
    }
}

impl<T> Clone for CellRender<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> PartialEq for CellRender<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> fmt::Debug for CellRender<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CellRender(..)")
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ColumnError {
    #[error("column key must not be empty")]
    EmptyKey,

    #[error("column '{key}' is declared more than once")]
    DuplicateKey { key: String },

    #[error("editable choice column '{key}' has no options")]
    EmptyChoices { key: String },
}

/// Describes one field of the row type as a table column.
pub struct Column<T> {
    pub key: String,
    pub label: String,
    pub sortable: bool,
    pub filterable: bool,
    pub editable: bool,
    pub kind: ColumnKind,
    pub options: Vec<ChoiceOption>,
    pub render: Option<CellRender<T>>,
    /// Field name shown in the edit dialog title; the lowercased label when unset.
    pub edit_title: Option<String>,
}

impl<T> Column<T> {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: false,
            filterable: false,
            editable: false,
            kind: ColumnKind::Text,
            options: Vec::new(),
            render: None,
            edit_title: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    pub fn editable(mut self) -> Self {
        self.editable = true;
        self
    }

    /// Turns the column into an enumerated-choice column.
    pub fn choices(mut self, options: Vec<ChoiceOption>) -> Self {
        self.kind = ColumnKind::Choice;
        self.options = options;
        self
    }

    pub fn edit_title(mut self, field: impl Into<String>) -> Self {
        self.edit_title = Some(field.into());
        self
    }

    /// How the column is named in "Editar <campo> - <nome>".
    pub fn title_field(&self) -> String {
        self.edit_title
            .clone()
            .unwrap_or_else(|| self.label.to_lowercase())
    }

    pub fn render(mut self, render: impl Fn(Option<&Value>, &T) -> String + 'static) -> Self {
        self.render = Some(CellRender::new(render));
        self
    }

    /// True when the edit dialog should show the choice list instead of a text field.
    pub fn uses_choice_editor(&self) -> bool {
        self.kind == ColumnKind::Choice && !self.options.is_empty()
    }

    pub fn validate(&self) -> Result<(), ColumnError> {
        if self.key.is_empty() {
            return Err(ColumnError::EmptyKey);
        }
        if self.editable && self.kind == ColumnKind::Choice && self.options.is_empty() {
            return Err(ColumnError::EmptyChoices {
                key: self.key.clone(),
            });
        }
        Ok(())
    }
}

impl<T: TableRow> Column<T> {
    /// Text shown in the cell: the render strategy when present, plain stringification otherwise.
    pub fn display(&self, row: &T) -> String {
        let value = row.cell(&self.key);
        match &self.render {
            Some(render) => render.call(value.as_ref(), row),
            None => value.as_ref().map(data_model::display_value).unwrap_or_default(),
        }
    }
}

pub fn validate_columns<T>(columns: &[Column<T>]) -> Result<(), ColumnError> {
    let mut seen = BTreeSet::new();
    for column in columns {
        column.validate()?;
        if !seen.insert(column.key.as_str()) {
            return Err(ColumnError::DuplicateKey {
                key: column.key.clone(),
            });
        }
    }
    Ok(())
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            label: self.label.clone(),
            sortable: self.sortable,
            filterable: self.filterable,
            editable: self.editable,
            kind: self.kind,
            options: self.options.clone(),
            render: self.render.clone(),
            edit_title: self.edit_title.clone(),
        }
    }
}

impl<T> PartialEq for Column<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && self.label == other.label
            && self.sortable == other.sortable
            && self.filterable == other.filterable
            && self.editable == other.editable
            && self.kind == other.kind
            && self.options == other.options
            && self.render == other.render
            && self.edit_title == other.edit_title
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("filterable", &self.filterable)
            .field("editable", &self.editable)
            .field("kind", &self.kind)
            .field("options", &self.options)
            .field("render", &self.render)
            .field("edit_title", &self.edit_title)
            .finish()
    }
}
