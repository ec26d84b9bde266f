pub mod activities;
pub mod analyzer;
pub mod classifier;
pub mod config;
pub mod emotion;
pub mod guided;
pub mod input;
pub mod journal_entry;
pub mod journal_state;
pub mod logging;
pub mod mood_history;
pub mod store;
pub mod ui;
