use crate::state::edit_modal::EditSession;

/// A cell addressed by its position in the derived view, not in the raw data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditTarget {
    pub view_row: usize,
    pub column: String,
}

/// Holds at most one open edit session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellEditor {
    session: Option<EditSession>,
}

impl CellEditor {
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn target(&self) -> Option<&EditTarget> {
        self.session.as_ref().map(EditSession::target)
    }

    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    pub fn is_editing(&self, view_row: usize, column: &str) -> bool {
        self.target()
            .map(|target| target.view_row == view_row && target.column == column)
            .unwrap_or(false)
    }

    pub(crate) fn open(&mut self, session: EditSession) {
        self.session = Some(session);
    }

    pub(crate) fn session_mut(&mut self) -> Option<&mut EditSession> {
        self.session.as_mut()
    }

    /// Empties the slot; whoever takes the session is the only one that may commit it.
    pub(crate) fn take(&mut self) -> Option<EditSession> {
        self.session.take()
    }

    pub fn close(&mut self) -> bool {
        self.session.take().is_some()
    }
}
