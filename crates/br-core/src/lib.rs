/// Types partagés pour braillify : cellules, table de symboles, mode,
/// configuration et traits de la frontière hôte.
///
/// This crate contains all shared types, traits, and configuration logic
/// used across the braillify workspace.

pub mod cell;
pub mod config;
pub mod error;
pub mod mode;
pub mod table;
pub mod traits;

pub use cell::Cell;
pub use config::TranslateConfig;
pub use error::CoreError;
pub use mode::TranslationMode;
pub use table::SymbolTable;
