//! The haptic effect catalog and the capability backends it binds against.
//!
//! Layers:
//! - `backend` — the capability provider: three independent generator kinds
//!   (selection, impact, notification), each with `prepare()` and `fire()`.
//! - `effect` — one catalog entry: a kind plus the generator bound to it at
//!   construction, never rebound.
//! - `catalog` — the fixed nine-entry list the presenter works against.

pub mod backend;
pub mod catalog;
pub mod effect;
