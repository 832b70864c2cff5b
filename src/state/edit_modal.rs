//! Edit dialog state: one seeded session per open, closed by commit or cancel.

use crate::state::cell_editor::EditTarget;
use crate::state::column::ChoiceOption;
use crate::state::labels;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditorKind {
    Text,
    Choice(Vec<ChoiceOption>),
}

impl EditorKind {
    /// Text editors take anything; choice editors only their option values.
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            EditorKind::Text => true,
            EditorKind::Choice(options) => options.iter().any(|option| option.value == value),
        }
    }
}

/// Keys the dialog reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKey {
    Enter,
    Escape,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalAction {
    Commit,
    Cancel,
}

impl ModalKey {
    pub fn action(self) -> Option<ModalAction> {
        match self {
            ModalKey::Enter => Some(ModalAction::Commit),
            ModalKey::Escape => Some(ModalAction::Cancel),
            ModalKey::Other => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditSession {
    target: EditTarget,
    title: String,
    column_label: String,
    kind: EditorKind,
    draft: String,
}

impl EditSession {
    pub fn new(
        target: EditTarget,
        column_label: impl Into<String>,
        title: impl Into<String>,
        kind: EditorKind,
        seed: String,
    ) -> Self {
        Self {
            target,
            title: title.into(),
            column_label: column_label.into(),
            kind,
            draft: seed,
        }
    }

    pub fn target(&self) -> &EditTarget {
        &self.target
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn column_label(&self) -> &str {
        &self.column_label
    }

    pub fn kind(&self) -> &EditorKind {
        &self.kind
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_text(&self) -> bool {
        matches!(self.kind, EditorKind::Text)
    }

    /// Replaces the staged value. Choice sessions only accept one of their option values.
    pub fn stage(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if !self.kind.accepts(&value) {
            return false;
        }
        self.draft = value;
        true
    }

    pub(crate) fn into_draft(self) -> (EditTarget, String) {
        (self.target, self.draft)
    }
}

/// `"Editar <campo> - <nome>"`, or the generic title when either part is empty.
pub fn modal_title(field: &str, row_name: Option<&str>) -> String {
    match row_name {
        Some(name) if !name.is_empty() && !field.is_empty() => {
            labels::fill("modal.title", &[("campo", field), ("nome", name)])
        }
        _ => labels::tr("modal.title_generic").to_string(),
    }
}
