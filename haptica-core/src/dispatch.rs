//! Applies actions to state. Catalog errors are programmer errors: they are
//! logged, demoted to status-line text, and the call stays a no-op. Nothing
//! here panics and nothing retries.

use crate::action::{Action, DispatchResult, NavAction};
use crate::state::AppState;

/// Dispatch an action. Returns a `DispatchResult` describing what the UI
/// shell should do (quit, show a status line).
pub fn dispatch_action(action: &Action, state: &mut AppState) -> DispatchResult {
    match action {
        Action::Quit => DispatchResult::with_quit(),
        Action::Nav(nav) => dispatch_nav(*nav, state),
        Action::ActivateRow(row) => activate(*row, state),
        Action::PrepareSelected => prepare(state.selected, state),
        Action::TogglePrepareAfter => {
            state.prepare_after = !state.prepare_after;
            DispatchResult::with_status(if state.prepare_after {
                "Re-arm after fire: on"
            } else {
                "Re-arm after fire: off"
            })
        }
        // Pane switching is handled by the UI shell before dispatch.
        Action::SwitchPane(_) => DispatchResult::none(),
        Action::None => DispatchResult::none(),
    }
}

fn dispatch_nav(nav: NavAction, state: &mut AppState) -> DispatchResult {
    match nav {
        NavAction::Up => state.select_up(),
        NavAction::Down => state.select_down(),
        NavAction::First => state.select_first(),
        NavAction::Last => state.select_last(),
    }
    // The cursor resting on a row means its trigger is imminent: arm it.
    prepare(state.selected, state)
}

fn prepare(row: usize, state: &mut AppState) -> DispatchResult {
    if let Err(e) = state.catalog.prepare_row(row) {
        log::error!("prepare row {}: {}", row, e);
        return DispatchResult::with_status(format!("prepare failed: {}", e));
    }
    DispatchResult::none()
}

fn activate(row: usize, state: &mut AppState) -> DispatchResult {
    let prepare_after = state.prepare_after;
    match state.catalog.activate_row(row, prepare_after) {
        Ok(()) => {
            state.fired_count += 1;
            // Row is in bounds here, so the label lookup cannot fail.
            let label = state.catalog.label_for_row(row).unwrap_or("?");
            DispatchResult::with_status(format!("Fired: {}", label))
        }
        Err(e) => {
            log::error!("activate row {}: {}", row, e);
            DispatchResult::with_status(format!("activate failed: {}", e))
        }
    }
}
