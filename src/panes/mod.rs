mod effect_list_pane;
mod help_pane;

pub use effect_list_pane::EffectListPane;
pub use help_pane::HelpPane;
