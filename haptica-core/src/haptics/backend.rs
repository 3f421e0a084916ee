//! Haptic backend trait: a semantic-level abstraction over the platform's
//! feedback generators.
//!
//! `HapticBackend` captures what the catalog *means* to do (bind a selection
//! generator, bind an impact generator of a given strength) independently of
//! how feedback is produced. This enables unit testing of catalog and
//! dispatch logic without any vibration hardware.
//!
//! A bound [`Generator`] is owned exclusively by one effect; backends hand
//! out a fresh generator per bind and never see it again.

use std::fmt;

use crate::haptics::effect::{ImpactStrength, NotificationOutcome};

/// Result type for backend operations.
pub type BackendResult<T = ()> = Result<T, BackendError>;

/// Error from a backend operation.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendError(pub String);

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for BackendError {}

impl From<String> for BackendError {
    fn from(s: String) -> Self {
        BackendError(s)
    }
}

impl From<&str> for BackendError {
    fn from(s: &str) -> Self {
        BackendError(s.to_string())
    }
}

/// One bound platform generator.
///
/// `prepare` hints that a `fire` is imminent so the effect plays with
/// minimal latency; it is safe to call repeatedly while still imminent.
/// `fire` produces the feedback. Neither call blocks on the physical effect.
pub trait Generator: Send {
    fn prepare(&mut self) -> BackendResult;
    fn fire(&mut self) -> BackendResult;
}

/// The capability provider: binds one generator per capability.
///
/// Implementations translate binds into platform handles (or record them
/// for testing). Parameter validation happens here: a strength or outcome
/// whose raw code falls outside the provider's recognized range is a bind
/// error, not a silent downgrade.
pub trait HapticBackend: Send {
    /// Bind a selection-feedback generator.
    fn bind_selection(&self) -> BackendResult<Box<dyn Generator>>;

    /// Bind an impact generator parameterized by strength.
    fn bind_impact(&self, strength: ImpactStrength) -> BackendResult<Box<dyn Generator>>;

    /// Bind a notification generator parameterized by outcome.
    fn bind_notification(&self, outcome: NotificationOutcome)
        -> BackendResult<Box<dyn Generator>>;
}

// ─── Sim Backend ────────────────────────────────────────────────────

/// Raw impact codes the simulated platform recognizes.
const IMPACT_RAW_RANGE: std::ops::RangeInclusive<u8> = 0..=4;
/// Raw notification codes the simulated platform recognizes.
const NOTIFICATION_RAW_RANGE: std::ops::RangeInclusive<u8> = 0..=2;

/// The shipped provider: plays effects as structured log lines.
///
/// Stands in front of real vibration hardware the way an audio backend
/// stands in front of an audio server; the log file is the "device".
pub struct SimBackend;

impl SimBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SimBackend {
    fn default() -> Self {
        Self::new()
    }
}

struct SimGenerator {
    desc: String,
}

impl Generator for SimGenerator {
    fn prepare(&mut self) -> BackendResult {
        log::debug!("haptic armed: {}", self.desc);
        Ok(())
    }

    fn fire(&mut self) -> BackendResult {
        log::info!("haptic fired: {}", self.desc);
        Ok(())
    }
}

impl HapticBackend for SimBackend {
    fn bind_selection(&self) -> BackendResult<Box<dyn Generator>> {
        Ok(Box::new(SimGenerator {
            desc: "selection".to_string(),
        }))
    }

    fn bind_impact(&self, strength: ImpactStrength) -> BackendResult<Box<dyn Generator>> {
        let raw = strength.to_raw();
        if !IMPACT_RAW_RANGE.contains(&raw) {
            return Err(BackendError(format!(
                "unrecognized impact code {}",
                raw
            )));
        }
        Ok(Box::new(SimGenerator {
            desc: format!("impact/{}", strength.name()),
        }))
    }

    fn bind_notification(
        &self,
        outcome: NotificationOutcome,
    ) -> BackendResult<Box<dyn Generator>> {
        let raw = outcome.to_raw();
        if !NOTIFICATION_RAW_RANGE.contains(&raw) {
            return Err(BackendError(format!(
                "unrecognized notification code {}",
                raw
            )));
        }
        Ok(Box::new(SimGenerator {
            desc: format!("notification/{}", outcome.name()),
        }))
    }
}

// ─── Test Backend ───────────────────────────────────────────────────

use std::sync::{Arc, Mutex};

/// An operation recorded by `TestBackend` for assertion in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum TestOp {
    BindSelection,
    BindImpact(ImpactStrength),
    BindNotification(NotificationOutcome),
    PrepareSelection,
    PrepareImpact(ImpactStrength),
    PrepareNotification(NotificationOutcome),
    FireSelection,
    FireImpact(ImpactStrength),
    FireNotification(NotificationOutcome),
}

/// A test backend that records all operations into a vector for assertions.
/// All operations succeed. Generators hold an `Arc` to the shared op log so
/// the test keeps the backend and inspects what its bound handles did.
pub struct TestBackend {
    ops: Arc<Mutex<Vec<TestOp>>>,
}

impl TestBackend {
    pub fn new() -> Self {
        Self {
            ops: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Return all recorded operations.
    pub fn operations(&self) -> Vec<TestOp> {
        self.ops.lock().unwrap().clone()
    }

    /// Clear recorded operations.
    pub fn clear(&self) {
        self.ops.lock().unwrap().clear();
    }

    /// Count operations matching a predicate.
    pub fn count<F: Fn(&TestOp) -> bool>(&self, f: F) -> usize {
        self.ops.lock().unwrap().iter().filter(|op| f(op)).count()
    }

    fn record(&self, op: TestOp) {
        self.ops.lock().unwrap().push(op);
    }
}

impl Default for TestBackend {
    fn default() -> Self {
        Self::new()
    }
}

struct TestGenerator {
    ops: Arc<Mutex<Vec<TestOp>>>,
    prepare_op: TestOp,
    fire_op: TestOp,
}

impl Generator for TestGenerator {
    fn prepare(&mut self) -> BackendResult {
        self.ops.lock().unwrap().push(self.prepare_op.clone());
        Ok(())
    }

    fn fire(&mut self) -> BackendResult {
        self.ops.lock().unwrap().push(self.fire_op.clone());
        Ok(())
    }
}

impl HapticBackend for TestBackend {
    fn bind_selection(&self) -> BackendResult<Box<dyn Generator>> {
        self.record(TestOp::BindSelection);
        Ok(Box::new(TestGenerator {
            ops: Arc::clone(&self.ops),
            prepare_op: TestOp::PrepareSelection,
            fire_op: TestOp::FireSelection,
        }))
    }

    fn bind_impact(&self, strength: ImpactStrength) -> BackendResult<Box<dyn Generator>> {
        self.record(TestOp::BindImpact(strength));
        Ok(Box::new(TestGenerator {
            ops: Arc::clone(&self.ops),
            prepare_op: TestOp::PrepareImpact(strength),
            fire_op: TestOp::FireImpact(strength),
        }))
    }

    fn bind_notification(
        &self,
        outcome: NotificationOutcome,
    ) -> BackendResult<Box<dyn Generator>> {
        self.record(TestOp::BindNotification(outcome));
        Ok(Box::new(TestGenerator {
            ops: Arc::clone(&self.ops),
            prepare_op: TestOp::PrepareNotification(outcome),
            fire_op: TestOp::FireNotification(outcome),
        }))
    }
}

// ─── Null Backend ───────────────────────────────────────────────────

/// A backend whose generators silently do nothing.
///
/// The "no feedback support, every call no-ops" platform behavior as an
/// explicit opt-in (`backend = "null"` in the config) rather than an
/// implicit capability gate.
pub struct NullBackend;

struct NullGenerator;

impl Generator for NullGenerator {
    fn prepare(&mut self) -> BackendResult {
        Ok(())
    }

    fn fire(&mut self) -> BackendResult {
        Ok(())
    }
}

impl HapticBackend for NullBackend {
    fn bind_selection(&self) -> BackendResult<Box<dyn Generator>> {
        Ok(Box::new(NullGenerator))
    }

    fn bind_impact(&self, _strength: ImpactStrength) -> BackendResult<Box<dyn Generator>> {
        Ok(Box::new(NullGenerator))
    }

    fn bind_notification(
        &self,
        _outcome: NotificationOutcome,
    ) -> BackendResult<Box<dyn Generator>> {
        Ok(Box::new(NullGenerator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_records_bind_and_fire() {
        let backend = TestBackend::new();
        let mut gen = backend.bind_impact(ImpactStrength::Heavy).unwrap();
        gen.prepare().unwrap();
        gen.fire().unwrap();

        assert_eq!(
            backend.operations(),
            vec![
                TestOp::BindImpact(ImpactStrength::Heavy),
                TestOp::PrepareImpact(ImpactStrength::Heavy),
                TestOp::FireImpact(ImpactStrength::Heavy),
            ]
        );
    }

    #[test]
    fn sim_backend_binds_every_catalog_parameter() {
        let backend = SimBackend::new();
        assert!(backend.bind_selection().is_ok());
        for strength in ImpactStrength::all() {
            assert!(backend.bind_impact(strength).is_ok());
        }
        for outcome in NotificationOutcome::all() {
            assert!(backend.bind_notification(outcome).is_ok());
        }
    }

    #[test]
    fn null_backend_is_silent_and_infallible() {
        let backend = NullBackend;
        let mut gen = backend.bind_notification(NotificationOutcome::Success).unwrap();
        for _ in 0..3 {
            gen.prepare().unwrap();
            gen.fire().unwrap();
        }
    }
}
