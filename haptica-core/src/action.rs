/// Selection-cursor movement within the effect list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Up,
    Down,
    First,
    Last,
}

/// Actions represent user intentions; panes produce them, dispatch applies
/// them to state.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Nav(NavAction),
    /// Fire the effect at a row.
    ActivateRow(usize),
    /// Arm the selected row's generator ahead of an imminent trigger.
    PrepareSelected,
    /// Flip whether a fired effect immediately re-arms.
    TogglePrepareAfter,
    /// Switch the active pane (handled by the UI shell, not dispatch).
    SwitchPane(&'static str),
    Quit,
    None,
}

/// Outcome of dispatching one action.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DispatchResult {
    pub quit: bool,
    pub status: Option<String>,
}

impl DispatchResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_quit() -> Self {
        Self {
            quit: true,
            status: None,
        }
    }

    pub fn with_status(status: impl Into<String>) -> Self {
        Self {
            quit: false,
            status: Some(status.into()),
        }
    }
}
