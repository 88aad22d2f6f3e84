use anyhow::Context;
use astrocarto::lines::{generate_lines, BirthData};
use astrocarto::map::{MapLayerReconciler, MemorySurface};
use astrocarto::rendering::Legend;
use astrocarto::service::{AstroService, BirthSubmission, MemoryStore};
use astrocarto_config::{load_config, load_config_from, AstroConfig};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Planetary lines for a birth, drawn over the globe
#[derive(Parser, Debug)]
#[command(name = "astrocarto")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Config file (default: configs/astrocarto.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print generated lines as JSON
    Lines {
        #[command(flatten)]
        birth: BirthArgs,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Print the map legend
    Legend {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Submit, calculate, fetch and draw onto an in-memory globe
    Preview {
        /// Name stored with the birth data
        #[arg(long, default_value = "Anonymous")]
        name: String,
        #[command(flatten)]
        birth: BirthArgs,
    },
}

#[derive(Args, Debug)]
struct BirthArgs {
    /// Birth date, YYYY-MM-DD
    #[arg(long)]
    date: String,
    /// Local birth time, HH:MM
    #[arg(long)]
    time: String,
    /// Latitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,
    /// Longitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    lng: f64,
}

impl BirthArgs {
    fn to_birth_data(&self) -> BirthData {
        BirthData {
            date: self.date.clone(),
            time: self.time.clone(),
            latitude: self.lat,
            longitude: self.lng,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = match &cli.config {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };
    if let Some(source) = &config.source {
        log::debug!("Using config {}", source.display());
    }

    match cli.command {
        Command::Lines { birth, pretty } => {
            let lines = generate_lines(&birth.to_birth_data());
            let json = if pretty {
                serde_json::to_string_pretty(&lines)?
            } else {
                serde_json::to_string(&lines)?
            };
            println!("{}", json);
        }
        Command::Legend { json } => {
            let legend = Legend::new();
            if json {
                println!("{}", serde_json::to_string_pretty(&legend)?);
            } else {
                print!("{}", legend.render_text());
            }
        }
        Command::Preview { name, birth } => preview(name, &birth, &config)?,
    }
    Ok(())
}

fn preview(name: String, birth: &BirthArgs, config: &AstroConfig) -> anyhow::Result<()> {
    let mut service = AstroService::new(MemoryStore::new());
    let submitted = service
        .submit_birth_data(BirthSubmission {
            name,
            date: birth.date.clone(),
            time: birth.time.clone(),
            latitude: birth.lat.to_string(),
            longitude: birth.lng.to_string(),
            user_id: None,
        })
        .context("submitting birth data")?;
    let count = service
        .calculate_and_store_lines(&submitted.id)
        .context("calculating lines")?;
    let lines: Vec<_> = service
        .get_lines(&submitted.id)
        .context("fetching lines")?
        .into_iter()
        .map(|record| record.line)
        .collect();
    log::info!("Fetched {} of {} lines", lines.len(), count.line_count);

    let mut reconciler = MapLayerReconciler::with_settings(config.layer_style);
    let mut surface = MemorySurface::new();
    surface.load_style();
    reconciler.mark_ready();
    let report = reconciler.reconcile(&lines, &mut surface);

    println!("birth data {}", submitted.id);
    for layer_id in surface.layer_ids() {
        if let Some(layer) = surface.layer(layer_id) {
            println!(
                "  {:<28} {} width={} opacity={} dash={:?}",
                layer_id,
                layer.style.color.to_hex(),
                layer.style.width,
                layer.style.opacity,
                layer.style.dash.lengths()
            );
        }
    }
    println!(
        "added={} removed={} skipped={} failed={}",
        report.added, report.removed, report.skipped, report.failed
    );
    if !report.is_clean() {
        anyhow::bail!("preview did not draw every line: {:?}", report);
    }

    if let Some(legend) = Legend::for_lines(!lines.is_empty()) {
        print!("\n{}", legend.render_text());
    }
    Ok(())
}
