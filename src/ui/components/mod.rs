pub mod add_word_form;
pub mod badge_meter;
pub mod quiz_panel;
pub mod stats_panel;
pub mod word_vault;
