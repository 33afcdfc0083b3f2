use std::path::PathBuf;

use clap::Parser;

/// braillify — Six-dot braille transliteration for plain text.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Fichier texte à encoder. Lit stdin si absent.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Fichier de sortie. Écrit sur stdout si absent.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Mode : translate, translateWithOriginal, disabled. Prioritaire sur
    /// l'état persisté et la config.
    #[arg(long)]
    pub mode: Option<String>,

    /// Fichier de configuration TOML. Défaut : config/default.toml.
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Fichier d'état du mode persisté.
    #[arg(long, default_value = "config/mode")]
    pub state: PathBuf,

    /// Faire tourner le mode persisté (translate → translateWithOriginal →
    /// disabled) puis quitter.
    #[arg(long, default_value_t = false)]
    pub cycle_mode: bool,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Validate flag combinations.
    ///
    /// # Errors
    /// Returns an error if `--cycle-mode` is combined with an encoding run.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.cycle_mode && (self.input.is_some() || self.output.is_some()) {
            anyhow::bail!(
                "--cycle-mode fait tourner le mode persisté puis quitte ; \
                 il ne se combine pas avec --input/--output."
            );
        }
        Ok(())
    }
}
