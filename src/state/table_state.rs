use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use serde_json::{Number, Value};

use crate::state::cell_editor::{CellEditor, EditTarget};
use crate::state::column::{self, Column, ColumnError};
use crate::state::data_model::{self, TableRow};
use crate::state::edit_modal::{self, EditSession, EditorKind, ModalAction};
use crate::state::labels;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// The active sort. No spec means insertion order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortSpec {
    pub column: String,
    pub order: SortOrder,
}

/// Footer figures: rows in the derived view against rows supplied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordCount {
    pub shown: usize,
    pub total: usize,
}

impl fmt::Display for RecordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = self.shown.to_string();
        let total = self.total.to_string();
        f.write_str(&labels::fill(
            "table.records",
            &[("exibidos", shown.as_str()), ("total", total.as_str())],
        ))
    }
}

/// An edit committed by the table, as handed to the page that owns the rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellUpdate<T> {
    pub row: T,
    pub field: String,
    pub value: String,
}

/// Sort, filter and edit state for one table.
///
/// The rows themselves are never stored here. Every query takes the caller's
/// current `data` and derives the view from it, and edits leave through the
/// caller's update callback.
pub struct TableState<T> {
    columns: Vec<Column<T>>,
    sort_spec: Option<SortSpec>,
    filters: BTreeMap<String, String>,
    editor: CellEditor,
}

impl<T: TableRow> TableState<T> {
    pub fn new(columns: Vec<Column<T>>) -> Result<Self, ColumnError> {
        column::validate_columns(&columns)?;
        Ok(Self {
            columns,
            sort_spec: None,
            filters: BTreeMap::new(),
            editor: CellEditor::default(),
        })
    }

    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    pub fn column(&self, key: &str) -> Option<&Column<T>> {
        self.columns.iter().find(|column| column.key == key)
    }

    pub fn sort_spec(&self) -> Option<&SortSpec> {
        self.sort_spec.as_ref()
    }

    pub fn sort_order_for(&self, key: &str) -> Option<SortOrder> {
        self.sort_spec
            .as_ref()
            .filter(|spec| spec.column == key)
            .map(|spec| spec.order.clone())
    }

    pub fn filters(&self) -> &BTreeMap<String, String> {
        &self.filters
    }

    pub fn filter_text(&self, key: &str) -> &str {
        self.filters.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn editor(&self) -> &CellEditor {
        &self.editor
    }

    /// Cycles `key` through ascending, descending and unsorted. A different
    /// key always starts at ascending.
    pub fn sort_by_column_toggle(&mut self, key: &str) -> bool {
        let Some(column) = self.column(key) else {
            tracing::warn!("sort requested for unknown column '{}'", key);
            return false;
        };
        if !column.sortable {
            return false;
        }

        self.sort_spec = match self.sort_spec.take() {
            Some(spec) if spec.column == key => match spec.order {
                SortOrder::Asc => Some(SortSpec {
                    column: spec.column,
                    order: SortOrder::Desc,
                }),
                SortOrder::Desc => None,
            },
            _ => Some(SortSpec {
                column: key.to_string(),
                order: SortOrder::Asc,
            }),
        };
        tracing::debug!(column = key, sort = ?self.sort_spec, "sort changed");
        self.close_editor_for_view_change();
        true
    }

    /// Replaces the filter text of `key`. Empty text drops the constraint.
    pub fn set_filter(&mut self, key: &str, text: impl Into<String>) -> bool {
        let Some(column) = self.column(key) else {
            tracing::warn!("filter requested for unknown column '{}'", key);
            return false;
        };
        if !column.filterable {
            return false;
        }

        let text = text.into();
        if self.filter_text(key) == text {
            return false;
        }
        if text.is_empty() {
            self.filters.remove(key);
        } else {
            self.filters.insert(key.to_string(), text);
        }
        tracing::debug!(column = key, filter = self.filter_text(key), "filter changed");
        self.close_editor_for_view_change();
        true
    }

    pub fn clear_filters(&mut self) -> bool {
        if self.filters.is_empty() {
            return false;
        }
        self.filters.clear();
        self.close_editor_for_view_change();
        true
    }

    /// Indices into `data` in display order: the whole set sorted first, then filtered.
    pub fn visible_row_indices(&self, data: &[T]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..data.len()).collect();

        if let Some(spec) = &self.sort_spec {
            let keys: Vec<Option<Value>> = data.iter().map(|row| row.cell(&spec.column)).collect();
            // `sort_by` is stable, so equal keys keep their input order in both directions.
            indices.sort_by(|&a, &b| compare_values(keys[a].as_ref(), keys[b].as_ref(), spec.order));
        }

        if self.filters.is_empty() {
            return indices;
        }

        let needles: Vec<(&str, String)> = self
            .filters
            .iter()
            .map(|(key, text)| (key.as_str(), text.to_lowercase()))
            .collect();
        indices
            .into_iter()
            .filter(|&idx| {
                needles.iter().all(|(key, needle)| {
                    data_model::cell_text(&data[idx], key)
                        .to_lowercase()
                        .contains(needle.as_str())
                })
            })
            .collect()
    }

    pub fn visible_rows<'a>(&self, data: &'a [T]) -> Vec<&'a T> {
        self.visible_row_indices(data)
            .into_iter()
            .map(|idx| &data[idx])
            .collect()
    }

    pub fn record_count(&self, data: &[T]) -> RecordCount {
        RecordCount {
            shown: self.visible_row_indices(data).len(),
            total: data.len(),
        }
    }

    pub fn display_cell(&self, row: &T, key: &str) -> String {
        self.column(key)
            .map(|column| column.display(row))
            .unwrap_or_default()
    }

    /// Opens the editor on a cell of the derived view, seeded with its current value.
    pub fn open_editor(&mut self, data: &[T], view_row: usize, key: &str) -> bool {
        let Some(column) = self.column(key) else {
            return false;
        };
        if !column.editable {
            return false;
        }

        let Some(row) = self.view_row(data, view_row) else {
            tracing::debug!(view_row, "edit requested outside the current view");
            return false;
        };

        let kind = if column.uses_choice_editor() {
            EditorKind::Choice(column.options.clone())
        } else {
            EditorKind::Text
        };
        let session = EditSession::new(
            EditTarget {
                view_row,
                column: key.to_string(),
            },
            column.label.clone(),
            edit_modal::modal_title(&column.title_field(), row.display_name().as_deref()),
            kind,
            data_model::cell_text(row, key),
        );

        tracing::debug!(view_row, column = key, "editor opened");
        self.editor.open(session);
        true
    }

    pub fn stage_edit(&mut self, value: impl Into<String>) -> bool {
        self.editor
            .session_mut()
            .map(|session| session.stage(value))
            .unwrap_or(false)
    }

    /// Commits `new_value` for the open cell and closes the editor.
    ///
    /// `on_update` receives the row found at the target's position in the
    /// current view. It is not called when no editor is open, when the target
    /// fell out of the view, or when a choice column gets a value outside its
    /// options.
    pub fn commit_edit<F>(&mut self, data: &[T], new_value: impl Into<String>, on_update: F) -> bool
    where
        F: FnOnce(&T, &str, String),
    {
        let Some(mut session) = self.editor.take() else {
            return false;
        };
        let new_value = new_value.into();
        if !session.stage(new_value.clone()) {
            tracing::warn!(value = %new_value, "rejected value outside the column's choices");
            return false;
        }
        self.deliver(data, session, on_update)
    }

    /// Commits whatever value is currently staged in the editor.
    pub fn commit_staged<F>(&mut self, data: &[T], on_update: F) -> bool
    where
        F: FnOnce(&T, &str, String),
    {
        match self.editor.take() {
            Some(session) => self.deliver(data, session, on_update),
            None => false,
        }
    }

    pub fn cancel_edit(&mut self) -> bool {
        let closed = self.editor.close();
        if closed {
            tracing::debug!("editor cancelled");
        }
        closed
    }

    /// Resolves a dialog decision (Save/Enter or Cancel/Escape/outside click).
    /// Returns whether an open editor was closed by it.
    pub fn apply_modal_action<F>(&mut self, data: &[T], action: ModalAction, on_update: F) -> bool
    where
        F: FnOnce(&T, &str, String),
    {
        if !self.editor.is_open() {
            return false;
        }
        match action {
            ModalAction::Commit => {
                self.commit_staged(data, on_update);
                true
            }
            ModalAction::Cancel => self.cancel_edit(),
        }
    }

    fn deliver<F>(&self, data: &[T], session: EditSession, on_update: F) -> bool
    where
        F: FnOnce(&T, &str, String),
    {
        let (target, value) = session.into_draft();
        let Some(row) = self.view_row(data, target.view_row) else {
            tracing::warn!(view_row = target.view_row, "edit target no longer in view, dropping commit");
            return false;
        };

        tracing::debug!(view_row = target.view_row, column = %target.column, "editor committed");
        on_update(row, &target.column, value);
        true
    }

    fn view_row<'a>(&self, data: &'a [T], view_row: usize) -> Option<&'a T> {
        self.visible_row_indices(data)
            .get(view_row)
            .and_then(|&idx| data.get(idx))
    }

    fn close_editor_for_view_change(&mut self) {
        if self.editor.close() {
            tracing::debug!("editor closed because the view changed");
        }
    }
}

impl<T> Clone for TableState<T> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
            sort_spec: self.sort_spec.clone(),
            filters: self.filters.clone(),
            editor: self.editor.clone(),
        }
    }
}

impl<T> fmt::Debug for TableState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableState")
            .field("columns", &self.columns)
            .field("sort_spec", &self.sort_spec)
            .field("filters", &self.filters)
            .field("editor", &self.editor)
            .finish()
    }
}

/// Missing and null cells order before every present value in either
/// direction; only present values are reversed for descending order.
fn compare_values(a: Option<&Value>, b: Option<&Value>, order: SortOrder) -> Ordering {
    let a = a.filter(|value| !value.is_null());
    let b = b.filter(|value| !value.is_null());
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(left), Some(right)) => match order {
            SortOrder::Asc => compare_value_pair(left, right),
            SortOrder::Desc => compare_value_pair(left, right).reverse(),
        },
    }
}

fn compare_value_pair(left: &Value, right: &Value) -> Ordering {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => compare_numbers(a, b),
        (Value::String(a), Value::String(b)) => a.cmp(b),
        _ => type_rank(left)
            .cmp(&type_rank(right))
            .then_with(|| data_model::display_value(left).cmp(&data_model::display_value(right))),
    }
}

fn compare_numbers(left: &Number, right: &Number) -> Ordering {
    match (left.as_i64(), left.as_u64(), right.as_i64(), right.as_u64()) {
        (Some(a), _, Some(b), _) => a.cmp(&b),
        (Some(a), _, _, Some(b)) => {
            if a < 0 {
                Ordering::Less
            } else {
                (a as u64).cmp(&b)
            }
        }
        (_, Some(a), Some(b), _) => {
            if b < 0 {
                Ordering::Greater
            } else {
                a.cmp(&(b as u64))
            }
        }
        (_, Some(a), _, Some(b)) => a.cmp(&b),
        _ => {
            let left = left.as_f64().unwrap_or(f64::NAN);
            let right = right.as_f64().unwrap_or(f64::NAN);
            left.partial_cmp(&right).unwrap_or(Ordering::Equal)
        }
    }
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}
