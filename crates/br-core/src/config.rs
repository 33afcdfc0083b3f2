use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::mode::TranslationMode;

/// Configuration de la translittération.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use br_core::config::TranslateConfig;
/// use br_core::mode::TranslationMode;
/// let config = TranslateConfig::default();
/// assert_eq!(config.mode, TranslationMode::Translate);
/// ```
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct TranslateConfig {
    /// Mode de translittération au démarrage.
    pub mode: TranslationMode,
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    translate: Option<TranslateSection>,
}

/// Translate section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct TranslateSection {
    mode: Option<String>,
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// Le mode est parsé de façon tolérante : une valeur inconnue retombe sur
/// `translate` au lieu d'échouer.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use br_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<TranslateConfig, CoreError> {
    let content = std::fs::read_to_string(path)?;

    let file: ConfigFile = toml::from_str(&content)?;

    let mut config = TranslateConfig::default();

    if let Some(t) = file.translate {
        if let Some(v) = t.mode {
            config.mode = TranslationMode::parse_lenient(&v);
        }
    }

    Ok(config)
}
