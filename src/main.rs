//! DataViewer CLI
//!
//! Command-line access to the buffer:
//! - Fetch channel data over a GPS interval
//! - Stream consecutive strides
//! - List registered data sources
//! - Generate a config file

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use dataviewer::config::{generate_default_config, Config, LoggingConfig};
use dataviewer::{BufferData, DataBuffer, DataIterator, FetchOptions, Selection, SourceRegistry};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "dataviewer")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Buffered access to gravitational-wave detector data")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Data source, overriding the configured one
    #[arg(short, long, global = true)]
    pub source: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch data for one or more channels
    Get {
        /// Channel names, e.g. H1:GDS-CALIB_STRAIN
        #[arg(required = true)]
        channels: Vec<String>,
        /// Start time: GPS seconds, "now", or a UTC date
        #[arg(long)]
        start: String,
        /// End time: GPS seconds, "now", or a UTC date
        #[arg(long)]
        end: String,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Fetch consecutive strides, printing a summary of each
    Stream {
        #[arg(required = true)]
        channels: Vec<String>,
        #[arg(long)]
        start: String,
        /// Stride length in seconds
        #[arg(long, default_value = "1")]
        stride: f64,
        /// Number of strides to fetch
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },

    /// List registered data sources
    Sources,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(source) = &cli.source {
        config.buffer.source = source.clone();
    }

    init_logging(&config.logging);

    let registry = SourceRegistry::with_defaults(&config.simulated);

    match cli.command {
        Commands::Get {
            channels,
            start,
            end,
            format,
        } => {
            let selection = Selection::from_times(&start, &end)?;
            let mut buffer = DataBuffer::from_registry(channels, &registry, &config.buffer.source)?
                .with_label(config.buffer.label.as_str());

            let data = buffer.get(selection, true, &FetchOptions::new())?;

            match format {
                OutputFormat::Table => print_table(&data),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&data)?),
                OutputFormat::Csv => print_csv(&data)?,
            }
        }

        Commands::Stream {
            channels,
            start,
            stride,
            count,
        } => {
            let start = dataviewer::to_gps(&start)?;
            let buffer = DataBuffer::from_registry(channels, &registry, &config.buffer.source)?
                .with_label(config.buffer.label.as_str());

            for (i, slice) in DataIterator::new(buffer, start, stride)?.take(count).enumerate() {
                let slice = slice.with_context(|| format!("stride {} failed", i))?;
                println!("--- [{} ... {}) ---", start + i as f64 * stride, start + (i + 1) as f64 * stride);
                print_table(&slice);
            }
        }

        Commands::Sources => {
            println!("Registered data sources:");
            for name in registry.names() {
                let marker = if name == config.buffer.source { "*" } else { " " };
                println!(" {} {}", marker, name);
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    if path.exists() {
                        bail!("{:?} already exists", path);
                    }
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("dataviewer={}", config.level)));

    // Logs go to stderr so that data on stdout stays machine-readable
    if config.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn print_table(data: &BufferData) {
    let dict = data.clone().into_dict();
    if dict.values().all(|list| list.is_empty()) {
        println!("No data for the selected time range");
        return;
    }

    println!(
        "{:<32} | {:>16} | {:>16} | {:>8} | {:>12} | {:>12} | {:>12}",
        "Channel", "Start", "End", "Samples", "Mean", "Min", "Max"
    );
    println!("{}", "-".repeat(32 + 16 * 2 + 8 + 12 * 3 + 18));

    for (channel, list) in dict.iter() {
        for series in list.iter() {
            let stat = |v: Option<f64>| v.map(|v| format!("{:.4}", v)).unwrap_or_else(|| "-".to_string());
            println!(
                "{:<32} | {:>16.3} | {:>16.3} | {:>8} | {:>12} | {:>12} | {:>12}",
                channel.ndsname(),
                series.t0,
                series.end(),
                series.len(),
                stat(series.mean()),
                stat(series.min()),
                stat(series.max()),
            );
        }
    }
}

fn print_csv(data: &BufferData) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(std::io::stdout());
    writer.write_record(["channel", "gps", "value"])?;

    for (channel, list) in data.clone().into_dict().iter() {
        let name = channel.ndsname();
        for series in list.iter() {
            for (t, v) in series.times().zip(series.values.iter()) {
                let gps = format!("{:.6}", t);
                let value = v.to_string();
                writer.write_record([name.as_str(), gps.as_str(), value.as_str()])?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}
