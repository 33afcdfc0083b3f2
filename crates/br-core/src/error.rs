use thiserror::Error;

/// Errors originating from the core module.
///
/// L'encodage lui-même est total et ne produit jamais d'erreur ; seules la
/// configuration et la persistance du mode passent par ce type.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Invalid configuration value or structure.
    #[error("Configuration invalide : {0}")]
    Config(String),

    /// I/O failure while reading or writing a config/state file.
    #[error("Erreur d'entrée/sortie : {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse failure.
    #[error("Erreur de parsing TOML : {0}")]
    Toml(#[from] toml::de::Error),
}
