//! The fixed nine-entry effect catalog the list presenter works against.

use crate::error::HapticError;
use crate::haptics::backend::HapticBackend;
use crate::haptics::effect::{Effect, EffectKind, ImpactStrength, NotificationOutcome, Phase};

/// Display order of the catalog. Fixed; every build yields exactly this.
pub const CATALOG_ORDER: [EffectKind; 9] = [
    EffectKind::Selection,
    EffectKind::Impact(ImpactStrength::Light),
    EffectKind::Impact(ImpactStrength::Medium),
    EffectKind::Impact(ImpactStrength::Heavy),
    EffectKind::Impact(ImpactStrength::Soft),
    EffectKind::Impact(ImpactStrength::Rigid),
    EffectKind::Notification(NotificationOutcome::Error),
    EffectKind::Notification(NotificationOutcome::Warning),
    EffectKind::Notification(NotificationOutcome::Success),
];

/// The built catalog: nine effects in display order, each owning its bound
/// generator. Built once at startup on the UI-owning thread and kept for
/// the presenter's lifetime; rows are never added, removed, or reordered.
pub struct Catalog {
    effects: Vec<Effect>,
}

impl Catalog {
    /// Bind all nine effects in display order.
    pub fn build(backend: &dyn HapticBackend) -> Result<Self, HapticError> {
        let effects = CATALOG_ORDER
            .iter()
            .map(|&kind| Effect::bind(kind, backend))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { effects })
    }

    pub fn row_count(&self) -> usize {
        self.effects.len()
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    fn row(&mut self, row: usize) -> Result<&mut Effect, HapticError> {
        self.effects
            .get_mut(row)
            .ok_or(HapticError::RowOutOfBounds(row))
    }

    /// Label for a row. Out of bounds is a precondition violation.
    pub fn label_for_row(&self, row: usize) -> Result<&'static str, HapticError> {
        self.effects
            .get(row)
            .map(Effect::label)
            .ok_or(HapticError::RowOutOfBounds(row))
    }

    /// Phase of a row's handle, for display.
    pub fn phase_for_row(&self, row: usize) -> Option<Phase> {
        self.effects.get(row).map(Effect::phase)
    }

    /// Arm a row's generator so an imminent trigger is low-latency.
    pub fn prepare_row(&mut self, row: usize) -> Result<(), HapticError> {
        self.row(row)?.prepare()
    }

    /// Fire a row's effect. Out of bounds is a precondition violation,
    /// reported to the caller rather than silently ignored.
    pub fn activate_row(&mut self, row: usize, prepare_after: bool) -> Result<(), HapticError> {
        self.row(row)?.trigger(prepare_after)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::haptics::backend::{TestBackend, TestOp};

    const EXPECTED_LABELS: [&str; 9] = [
        "Selection",
        "Impact light",
        "Impact medium",
        "Impact heavy",
        "Impact soft",
        "Impact rigid",
        "Notification error",
        "Notification warning",
        "Notification success",
    ];

    #[test]
    fn labels_match_table_in_order() {
        let backend = TestBackend::new();
        let catalog = Catalog::build(&backend).unwrap();
        assert_eq!(catalog.row_count(), 9);
        for (row, expected) in EXPECTED_LABELS.iter().enumerate() {
            assert_eq!(catalog.label_for_row(row).unwrap(), *expected);
        }
    }

    #[test]
    fn rebuild_is_deterministic_even_after_use() {
        let backend = TestBackend::new();
        let mut first = Catalog::build(&backend).unwrap();
        first.prepare_row(0).unwrap();
        first.activate_row(3, true).unwrap();

        let second = Catalog::build(&backend).unwrap();
        assert_eq!(first.row_count(), second.row_count());
        for row in 0..first.row_count() {
            assert_eq!(
                first.effects()[row].kind(),
                second.effects()[row].kind()
            );
            assert_eq!(
                first.label_for_row(row).unwrap(),
                second.label_for_row(row).unwrap()
            );
        }
    }

    #[test]
    fn every_row_activates_on_the_owning_thread() {
        let backend = TestBackend::new();
        let mut catalog = Catalog::build(&backend).unwrap();
        for row in 0..9 {
            catalog.activate_row(row, false).unwrap();
        }
    }

    #[test]
    fn out_of_bounds_rows_are_rejected() {
        let backend = TestBackend::new();
        let mut catalog = Catalog::build(&backend).unwrap();
        assert_eq!(
            catalog.activate_row(9, false),
            Err(HapticError::RowOutOfBounds(9))
        );
        assert_eq!(
            catalog.label_for_row(100),
            Err(HapticError::RowOutOfBounds(100))
        );
        assert_eq!(
            catalog.prepare_row(usize::MAX),
            Err(HapticError::RowOutOfBounds(usize::MAX))
        );
    }

    #[test]
    fn prepare_trigger_prepare_leaves_catalog_unchanged() {
        let backend = TestBackend::new();
        let mut catalog = Catalog::build(&backend).unwrap();
        catalog.prepare_row(4).unwrap();
        catalog.activate_row(4, false).unwrap();
        catalog.prepare_row(4).unwrap();
        assert_eq!(catalog.label_for_row(4).unwrap(), "Impact soft");
        assert_eq!(catalog.row_count(), 9);
    }

    #[test]
    fn heavy_impact_scenario_fires_exactly_once() {
        let backend = TestBackend::new();
        let mut catalog = Catalog::build(&backend).unwrap();
        backend.clear();

        assert_eq!(catalog.label_for_row(3).unwrap(), "Impact heavy");
        catalog.activate_row(3, false).unwrap();

        let fires = backend.count(|op| matches!(op, TestOp::FireImpact(ImpactStrength::Heavy)));
        assert_eq!(fires, 1);
        assert_eq!(backend.operations().len(), 1);
        assert_eq!(catalog.row_count(), 9);
    }
}
