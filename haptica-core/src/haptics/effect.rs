//! One catalog entry: an effect kind plus the generator bound to it.

use std::thread::{self, ThreadId};

use serde::{Deserialize, Serialize};

use crate::error::HapticError;
use crate::haptics::backend::{Generator, HapticBackend};

/// Impact feedback strength. Raw codes match the platform's 0-based scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactStrength {
    Light,
    Medium,
    Heavy,
    Soft,
    Rigid,
}

impl ImpactStrength {
    /// All strengths in raw-code order.
    pub fn all() -> [ImpactStrength; 5] {
        [
            ImpactStrength::Light,
            ImpactStrength::Medium,
            ImpactStrength::Heavy,
            ImpactStrength::Soft,
            ImpactStrength::Rigid,
        ]
    }

    pub fn to_raw(self) -> u8 {
        match self {
            ImpactStrength::Light => 0,
            ImpactStrength::Medium => 1,
            ImpactStrength::Heavy => 2,
            ImpactStrength::Soft => 3,
            ImpactStrength::Rigid => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ImpactStrength::Light => "light",
            ImpactStrength::Medium => "medium",
            ImpactStrength::Heavy => "heavy",
            ImpactStrength::Soft => "soft",
            ImpactStrength::Rigid => "rigid",
        }
    }
}

/// Notification feedback outcome. Raw codes match the platform's scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationOutcome {
    Error,
    Success,
    Warning,
}

impl NotificationOutcome {
    /// All outcomes in raw-code order.
    pub fn all() -> [NotificationOutcome; 3] {
        [
            NotificationOutcome::Error,
            NotificationOutcome::Success,
            NotificationOutcome::Warning,
        ]
    }

    pub fn to_raw(self) -> u8 {
        match self {
            NotificationOutcome::Error => 0,
            NotificationOutcome::Success => 1,
            NotificationOutcome::Warning => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            NotificationOutcome::Error => "error",
            NotificationOutcome::Success => "success",
            NotificationOutcome::Warning => "warning",
        }
    }
}

/// The closed set of effect kinds. Behavior is a flat switch over this set;
/// there are no extension points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    Selection,
    Impact(ImpactStrength),
    Notification(NotificationOutcome),
}

impl EffectKind {
    /// Display label. Pure function of the kind.
    pub fn label(self) -> &'static str {
        match self {
            EffectKind::Selection => "Selection",
            EffectKind::Impact(ImpactStrength::Light) => "Impact light",
            EffectKind::Impact(ImpactStrength::Medium) => "Impact medium",
            EffectKind::Impact(ImpactStrength::Heavy) => "Impact heavy",
            EffectKind::Impact(ImpactStrength::Soft) => "Impact soft",
            EffectKind::Impact(ImpactStrength::Rigid) => "Impact rigid",
            EffectKind::Notification(NotificationOutcome::Error) => "Notification error",
            EffectKind::Notification(NotificationOutcome::Warning) => "Notification warning",
            EffectKind::Notification(NotificationOutcome::Success) => "Notification success",
        }
    }
}

/// Where an effect's handle is in its lifecycle. Handles are reusable
/// indefinitely; there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Generator bound, not armed.
    Bound,
    /// `prepare` called; the next fire is low-latency.
    Armed,
    /// Fired since the last prepare.
    Fired,
}

/// One immutable catalog entry owning its bound generator.
///
/// The generator is bound once at construction and never rebound; each
/// generator is used by exactly one effect, so no shared ownership is
/// needed. `prepare` and `trigger` only run on the thread that built the
/// effect (the UI-owning thread); off-thread calls are rejected before the
/// generator is touched.
pub struct Effect {
    kind: EffectKind,
    generator: Box<dyn Generator>,
    phase: Phase,
    owner: ThreadId,
}

impl Effect {
    /// Bind a generator for `kind` from the backend. Must be called on the
    /// UI-owning thread; the constructing thread becomes the owner.
    pub fn bind(kind: EffectKind, backend: &dyn HapticBackend) -> Result<Self, HapticError> {
        let generator = match kind {
            EffectKind::Selection => backend.bind_selection()?,
            EffectKind::Impact(strength) => backend.bind_impact(strength)?,
            EffectKind::Notification(outcome) => backend.bind_notification(outcome)?,
        };
        Ok(Self {
            kind,
            generator,
            phase: Phase::Bound,
            owner: thread::current().id(),
        })
    }

    pub fn kind(&self) -> EffectKind {
        self.kind
    }

    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn check_thread(&self) -> Result<(), HapticError> {
        if thread::current().id() != self.owner {
            return Err(HapticError::WrongThread);
        }
        Ok(())
    }

    /// Hint that a trigger is imminent so it plays with minimal latency.
    /// Idempotent; safe to call repeatedly while still imminent.
    pub fn prepare(&mut self) -> Result<(), HapticError> {
        self.check_thread()?;
        self.generator.prepare()?;
        self.phase = Phase::Armed;
        Ok(())
    }

    /// Fire the effect. With `prepare_after`, immediately re-arm so the
    /// next trigger is low-latency.
    pub fn trigger(&mut self, prepare_after: bool) -> Result<(), HapticError> {
        self.check_thread()?;
        self.generator.fire()?;
        self.phase = Phase::Fired;
        if prepare_after {
            self.prepare()?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Effect")
            .field("kind", &self.kind)
            .field("phase", &self.phase)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::haptics::backend::{TestBackend, TestOp};

    #[test]
    fn label_is_pure_and_stable() {
        let kind = EffectKind::Impact(ImpactStrength::Soft);
        assert_eq!(kind.label(), "Impact soft");
        assert_eq!(kind.label(), "Impact soft");
    }

    #[test]
    fn phase_walks_bound_armed_fired() {
        let backend = TestBackend::new();
        let mut effect = Effect::bind(EffectKind::Selection, &backend).unwrap();
        assert_eq!(effect.phase(), Phase::Bound);

        effect.prepare().unwrap();
        assert_eq!(effect.phase(), Phase::Armed);

        effect.trigger(false).unwrap();
        assert_eq!(effect.phase(), Phase::Fired);

        effect.prepare().unwrap();
        assert_eq!(effect.phase(), Phase::Armed);
    }

    #[test]
    fn trigger_with_prepare_after_rearms() {
        let backend = TestBackend::new();
        let mut effect = Effect::bind(EffectKind::Impact(ImpactStrength::Light), &backend).unwrap();
        effect.trigger(true).unwrap();
        assert_eq!(effect.phase(), Phase::Armed);
        assert_eq!(
            backend.operations(),
            vec![
                TestOp::BindImpact(ImpactStrength::Light),
                TestOp::FireImpact(ImpactStrength::Light),
                TestOp::PrepareImpact(ImpactStrength::Light),
            ]
        );
    }

    #[test]
    fn prepare_is_idempotent_for_label_and_kind() {
        let backend = TestBackend::new();
        let mut effect =
            Effect::bind(EffectKind::Notification(NotificationOutcome::Warning), &backend)
                .unwrap();
        effect.prepare().unwrap();
        effect.trigger(false).unwrap();
        effect.prepare().unwrap();
        assert_eq!(effect.label(), "Notification warning");
        assert_eq!(
            effect.kind(),
            EffectKind::Notification(NotificationOutcome::Warning)
        );
    }

    #[test]
    fn off_thread_trigger_is_rejected_without_touching_generator() {
        let backend = TestBackend::new();
        let mut effect = Effect::bind(EffectKind::Impact(ImpactStrength::Heavy), &backend).unwrap();
        backend.clear();

        let effect = std::thread::spawn(move || {
            assert_eq!(effect.trigger(false), Err(HapticError::WrongThread));
            assert_eq!(effect.prepare(), Err(HapticError::WrongThread));
            effect
        })
        .join()
        .unwrap();

        assert!(backend.operations().is_empty());
        assert_eq!(effect.phase(), Phase::Bound);
    }
}
