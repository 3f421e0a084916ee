//! Presenter state: the built catalog plus the selection cursor.

use crate::config::Config;
use crate::haptics::catalog::Catalog;

pub struct AppState {
    pub catalog: Catalog,
    pub selected: usize,
    /// Re-arm an effect immediately after it fires.
    pub prepare_after: bool,
    /// One-line status shown in the pane footer.
    pub status: Option<String>,
    pub fired_count: u64,
}

impl AppState {
    pub fn new(catalog: Catalog, config: &Config) -> Self {
        Self {
            catalog,
            selected: 0,
            prepare_after: config.prepare_after,
            status: None,
            fired_count: 0,
        }
    }

    /// Move the selection, clamped to the catalog.
    pub fn select_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn select_down(&mut self) {
        if self.selected + 1 < self.catalog.row_count() {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.catalog.row_count().saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::haptics::backend::TestBackend;

    fn state() -> AppState {
        let backend = TestBackend::new();
        let catalog = Catalog::build(&backend).unwrap();
        AppState::new(catalog, &Config::default())
    }

    #[test]
    fn selection_clamps_at_both_ends() {
        let mut s = state();
        s.select_up();
        assert_eq!(s.selected, 0);

        s.select_last();
        assert_eq!(s.selected, 8);
        s.select_down();
        assert_eq!(s.selected, 8);

        s.select_first();
        assert_eq!(s.selected, 0);
    }
}
