/// The interaction flow shared by all admin panels
///
/// ```text
/// Idle -> ListShown -> DetailOpen -> EditOpen -> Submitting -> ListShown
///                                       ^                         |
///                                       +----- submit_failed -----+
/// ```
///
/// Transitions are driven by user actions (open/close/edit/submit) and by
/// gateway promise resolution (`submit_succeeded` / `submit_failed`). A
/// failed submit keeps the editor open with an inline message; illegal
/// transitions are ignored and the current state is retained.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PanelFlow {
    /// Nothing loaded yet
    #[default]
    Idle,
    /// The collection list is on screen
    ListShown,
    /// A detail drawer is open for one resource
    DetailOpen {
        /// Name of the resource shown
        target: String,
    },
    /// The edit form is open for one resource
    EditOpen {
        /// Name of the resource being edited
        target: String,
        /// Inline message from the last failed submit, if any
        error: Option<String>,
    },
    /// An edit has been submitted and the gateway call is in flight
    Submitting {
        /// Name of the resource being written
        target: String,
    },
}

impl PanelFlow {
    /// The watched collection finished its initial load
    pub fn list_loaded(&mut self) {
        if *self == PanelFlow::Idle {
            *self = PanelFlow::ListShown;
        }
    }

    /// The user opened (or switched) the detail drawer
    pub fn open_detail(&mut self, target: &str) {
        match self {
            PanelFlow::ListShown | PanelFlow::DetailOpen { .. } => {
                *self = PanelFlow::DetailOpen {
                    target: target.to_string(),
                };
            }
            _ => {}
        }
    }

    /// The user opened the edit form
    pub fn open_edit(&mut self, target: &str) {
        match self {
            PanelFlow::ListShown | PanelFlow::DetailOpen { .. } => {
                *self = PanelFlow::EditOpen {
                    target: target.to_string(),
                    error: None,
                };
            }
            _ => {}
        }
    }

    /// The user closed the open drawer or form
    pub fn close(&mut self) {
        match self {
            PanelFlow::DetailOpen { .. } | PanelFlow::EditOpen { .. } => {
                *self = PanelFlow::ListShown;
            }
            _ => {}
        }
    }

    /// The user submitted the edit form
    pub fn submit(&mut self) {
        if let PanelFlow::EditOpen { target, .. } = self {
            *self = PanelFlow::Submitting {
                target: std::mem::take(target),
            };
        }
    }

    /// The gateway accepted the write
    pub fn submit_succeeded(&mut self) {
        if let PanelFlow::Submitting { .. } = self {
            *self = PanelFlow::ListShown;
        }
    }

    /// The gateway rejected the write; the editor stays open with the message
    pub fn submit_failed(&mut self, message: &str) {
        if let PanelFlow::Submitting { target } = self {
            *self = PanelFlow::EditOpen {
                target: std::mem::take(target),
                error: Some(message.to_string()),
            };
        }
    }

    /// The inline error message to render, if any
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            PanelFlow::EditOpen { error, .. } => error.as_deref(),
            _ => None,
        }
    }
}
