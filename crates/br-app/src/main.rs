use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

use anyhow::{Context, Result};
use br_core::mode::TranslationMode;
use br_core::table::SymbolTable;
use br_core::traits::ModeStore;
use clap::Parser;

pub mod cli;
pub mod pipeline;
pub mod store;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Valider les flags
    cli.validate()?;

    let mode_store = store::FileModeStore::new(&cli.state);

    // 3b. Rotation du mode persisté puis sortie
    if cli.cycle_mode {
        let new_mode = mode_store.cycle()?;
        println!("{}", new_mode.as_str());
        return Ok(());
    }

    // 4. Charger la config
    let config = resolve_config(&cli)?;

    // 5. Mode effectif : flag CLI > état persisté > config
    let mode = resolve_mode(&cli, &mode_store, config.mode);
    log::info!("mode : {}", mode.as_str());

    // 6. Construire la table une fois
    let table = SymbolTable::new();

    // 7. Brancher entrée et sortie, puis encoder
    let source: Box<dyn br_core::traits::SegmentSource> = match cli.input {
        Some(ref path) => {
            let file =
                File::open(path).with_context(|| format!("Impossible de lire {}", path.display()))?;
            Box::new(pipeline::LineSource::new(BufReader::new(file)))
        }
        None => Box::new(pipeline::LineSource::new(BufReader::new(std::io::stdin()))),
    };

    match cli.output {
        Some(ref path) => {
            let file = File::create(path)
                .with_context(|| format!("Impossible d'écrire {}", path.display()))?;
            let mut sink = pipeline::WriterSink::new(BufWriter::new(file));
            pipeline::run(source, &mut sink, &table, mode)?;
            sink.finish()?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut sink = pipeline::WriterSink::new(stdout.lock());
            pipeline::run(source, &mut sink, &table, mode)?;
            sink.finish()?.flush()?;
        }
    }

    Ok(())
}

/// Resolve config: missing file degrades to defaults with a warning.
fn resolve_config(cli: &cli::Cli) -> Result<br_core::config::TranslateConfig> {
    if cli.config.exists() {
        Ok(br_core::config::load_config(&cli.config)?)
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        Ok(br_core::config::TranslateConfig::default())
    }
}

/// Effective mode: CLI flag wins, then the persisted state file, then config.
fn resolve_mode(
    cli: &cli::Cli,
    store: &store::FileModeStore,
    config_mode: TranslationMode,
) -> TranslationMode {
    if let Some(ref flag) = cli.mode {
        TranslationMode::parse_lenient(flag)
    } else if store.exists() {
        store.current()
    } else {
        config_mode
    }
}
