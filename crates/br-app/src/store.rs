use std::path::{Path, PathBuf};

use br_core::error::CoreError;
use br_core::mode::TranslationMode;
use br_core::traits::ModeStore;

/// Mode persisté dans un fichier à une seule valeur.
///
/// Un fichier absent, illisible ou au contenu inconnu se lit comme
/// `Translate`, jamais comme une erreur.
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use br_app::store::FileModeStore;
/// use br_core::traits::ModeStore;
///
/// let store = FileModeStore::new(Path::new("config/mode"));
/// let mode = store.current();
/// ```
pub struct FileModeStore {
    path: PathBuf,
}

impl FileModeStore {
    /// Store backed by the given file path. The file may not exist yet.
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Lit le mode courant, avec repli tolérant sur `Translate`.
    #[must_use]
    pub fn load(&self) -> TranslationMode {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => TranslationMode::parse_lenient(&content),
            Err(e) => {
                log::debug!("état du mode illisible ({e}), repli sur translate");
                TranslationMode::default()
            }
        }
    }

    /// Écrit le mode donné.
    ///
    /// # Errors
    /// Returns an error if the parent directory cannot be created or the
    /// file cannot be written.
    pub fn save(&self, mode: TranslationMode) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, mode.as_str())?;
        Ok(())
    }

    /// Fait tourner le mode persisté d'un cran et retourne le nouveau mode.
    ///
    /// # Errors
    /// Returns an error if the new mode cannot be written.
    pub fn cycle(&self) -> Result<TranslationMode, CoreError> {
        let next = self.load().next();
        self.save(next)?;
        Ok(next)
    }

    /// True if a mode has been persisted at this path.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl ModeStore for FileModeStore {
    fn current(&self) -> TranslationMode {
        self.load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FileModeStore {
        FileModeStore::new(&dir.path().join("mode"))
    }

    #[test]
    fn missing_file_reads_as_translate() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(store_in(&dir).load(), TranslationMode::Translate);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save(TranslationMode::Disabled).unwrap();
        assert_eq!(store.load(), TranslationMode::Disabled);
        assert_eq!(store.current(), TranslationMode::Disabled);
    }

    #[test]
    fn garbled_content_reads_as_translate() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(dir.path().join("mode"), "florb\n").unwrap();
        assert_eq!(store.load(), TranslationMode::Translate);
    }

    #[test]
    fn cycle_walks_the_rotation_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.cycle().unwrap(), TranslationMode::TranslateWithOriginal);
        assert_eq!(store.cycle().unwrap(), TranslationMode::Disabled);
        assert_eq!(store.cycle().unwrap(), TranslationMode::Translate);
    }
}
