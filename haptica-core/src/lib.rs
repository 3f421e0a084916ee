//! Core library for haptica: the haptic effect catalog, the capability
//! backends it binds against, and the action/dispatch layer the UI drives.
//!
//! The binary crate owns the terminal; everything here is testable without
//! one.

pub mod action;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod haptics;
pub mod state;

pub use action::{Action, DispatchResult, NavAction};
pub use config::{BackendKind, Config};
pub use dispatch::dispatch_action;
pub use error::HapticError;
pub use haptics::backend::{
    BackendError, BackendResult, Generator, HapticBackend, NullBackend, SimBackend, TestBackend,
    TestOp,
};
pub use haptics::catalog::Catalog;
pub use haptics::effect::{Effect, EffectKind, ImpactStrength, NotificationOutcome, Phase};
pub use state::AppState;
