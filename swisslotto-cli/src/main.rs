mod analysis;
mod display;
mod import;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::analysis::aggregate;
use crate::display::{display_draws, display_report_table, render_plain};
use crate::import::load_dataset;
use swisslotto_db::config::{ReportConfig, ReportFormat};
use swisslotto_db::source::{DEFAULT_SOURCE, source_path};

#[derive(Parser)]
#[command(name = "swisslotto", about = "Fréquences des numéros du Swiss Lotto")]
struct Cli {
    /// Fichier CSV des tirages
    #[arg(short, long, global = true, default_value = DEFAULT_SOURCE)]
    file: PathBuf,

    /// Les numéros au-delà de ce seuil sont annotés
    #[arg(long, default_value = "40")]
    tail_threshold: u32,

    /// Format du rapport
    #[arg(long, default_value = "plain")]
    format: ReportFormat,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Afficher le rapport de fréquences (par défaut)
    Report,

    /// Lister les derniers tirages lus
    List {
        /// Nombre de tirages à afficher
        #[arg(short, long, default_value = "10")]
        last: usize,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = ReportConfig {
        source: source_path(&cli.file),
        tail_threshold: cli.tail_threshold,
        format: cli.format,
    };

    match cli.command.unwrap_or(Command::Report) {
        Command::Report => cmd_report(&config),
        Command::List { last } => cmd_list(&config, last),
    }
}

fn cmd_report(config: &ReportConfig) -> Result<()> {
    let dataset = load_dataset(&config.source).context("Échec de la lecture des tirages")?;
    let report = aggregate(&dataset).context("Échec du calcul des fréquences")?;

    match config.format {
        ReportFormat::Plain => {
            let mut buffer = Vec::new();
            render_plain(&report, config.tail_threshold, &mut buffer)?;
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(&buffer)
                .and_then(|_| stdout.flush())
                .context("Échec de l'écriture du rapport")?;
        }
        ReportFormat::Table => display_report_table(&report, config.tail_threshold),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

fn cmd_list(config: &ReportConfig, last: usize) -> Result<()> {
    let dataset = load_dataset(&config.source).context("Échec de la lecture des tirages")?;
    let start = dataset.len().saturating_sub(last);
    display_draws(&dataset.records[start..]);
    Ok(())
}
