//! Results of page flows, returned to the caller after the surface has been
//! updated.

use shared::{domain::FormField, error::FieldError};

/// Which backend call a submit performs. Picks the user-facing failure text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Create,
    Update,
    Delete,
}

impl Flow {
    pub fn name(self) -> &'static str {
        match self {
            Flow::Create => "create",
            Flow::Update => "update",
            Flow::Delete => "delete",
        }
    }

    /// Alert shown when the server refuses without a message.
    pub fn rejected_message(self) -> &'static str {
        match self {
            Flow::Create => "Erro ao cadastrar empresa",
            Flow::Update => "Erro ao atualizar empresa",
            Flow::Delete => "Erro ao excluir empresa",
        }
    }

    /// Alert shown on network or parse failures.
    pub fn transport_message(self) -> String {
        format!("{}. Tente novamente.", self.rejected_message())
    }
}

/// Where a server error message ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorRoute {
    Slot(FormField),
    Alert(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    /// Nothing to act on: missing element, empty id or no selection.
    Skipped,
    /// Local validation failed; no request was sent.
    Blocked(FieldError),
    /// The server refused the request.
    Rejected(ErrorRoute),
    /// The flow could not complete and the user was alerted.
    Failed,
    Navigated(String),
    Reloaded,
    Opened,
    Closed,
}

impl FlowOutcome {
    /// True when the page is gone and its in-memory state should be dropped.
    pub fn leaves_page(&self) -> bool {
        matches!(self, FlowOutcome::Navigated(_) | FlowOutcome::Reloaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_message_extends_rejection_text() {
        assert_eq!(
            Flow::Create.transport_message(),
            "Erro ao cadastrar empresa. Tente novamente."
        );
        assert_eq!(
            Flow::Delete.transport_message(),
            "Erro ao excluir empresa. Tente novamente."
        );
    }

    #[test]
    fn only_navigation_and_reload_leave_the_page() {
        assert!(FlowOutcome::Reloaded.leaves_page());
        assert!(FlowOutcome::Navigated("/empresas".into()).leaves_page());
        assert!(!FlowOutcome::Failed.leaves_page());
        assert!(!FlowOutcome::Skipped.leaves_page());
    }
}
