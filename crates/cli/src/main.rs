//! plylabel - command-line front end for plywood labels.

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};
use label_core::tables::{
    FREQUENTLY_USED_DIMENSIONS, FREQUENTLY_USED_QUALITIES, PREDEFINED_THICKNESS_VALUES,
};
use label_core::{FormField, PlywoodType, ALL_DIMENSIONS, ALL_QUALITIES};
use label_session::{
    FileStore, GeminiClient, KeyValueStore, LopdfTextSource, Session, SessionConfig,
};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Generate and print plywood product labels.
#[derive(Parser, Debug)]
#[command(name = "plylabel")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Derive a product code
    Code {
        thickness: String,
        quality: String,
        dimension: String,
    },

    /// Generate one label and write its print HTML
    Label {
        #[arg(short, long)]
        thickness: String,

        #[arg(short, long)]
        quality: String,

        #[arg(short, long)]
        dimension: String,

        /// Quantity text, e.g. "50 pcs"
        #[arg(long, default_value = "")]
        quantity: String,

        #[arg(long = "type", value_enum, default_value = "ext")]
        plywood_type: TypeArg,

        /// Use this product code instead of the derived one
        #[arg(long)]
        code: Option<String>,

        /// Remember these values as a preset
        #[arg(long)]
        remember: bool,

        #[command(flatten)]
        print: PrintArgs,
    },

    /// Read an order PDF with the model and print every label in it
    Extract {
        /// Order PDF
        pdf: PathBuf,

        /// Type for rows that do not state one
        #[arg(long = "type", value_enum)]
        plywood_type: Option<TypeArg>,

        /// Print queued labels as JSON instead of HTML
        #[arg(long)]
        json: bool,

        /// Also write the queue verification list here
        #[arg(long)]
        list: Option<PathBuf>,

        #[command(flatten)]
        print: PrintArgs,
    },

    /// List reference tables
    Tables {
        #[arg(value_enum)]
        table: Table,

        /// Only the frequently used entries
        #[arg(long)]
        frequent: bool,
    },

    /// List saved layouts
    Layouts,
}

#[derive(clap::Args, Debug)]
struct PrintArgs {
    /// Print format name
    #[arg(long, default_value = "A5 Landscape")]
    format: String,

    /// Copies; 2 or more prints two labels per sheet
    #[arg(long, default_value_t = 2)]
    copies: u32,

    /// Saved layout id (default layout if omitted)
    #[arg(long)]
    layout: Option<String>,

    /// Output HTML file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum TypeArg {
    Ext,
    Mr,
}

impl From<TypeArg> for PlywoodType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Ext => PlywoodType::Ext,
            TypeArg::Mr => PlywoodType::Mr,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Table {
    Qualities,
    Dimensions,
    Thickness,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config_path = args.config.clone().or_else(SessionConfig::default_path);
    let config = SessionConfig::load(config_path.as_deref()).context("Failed to load config")?;

    match args.command {
        Command::Code {
            thickness,
            quality,
            dimension,
        } => {
            let dimension = label_core::normalize_dimension(&dimension);
            let code = label_core::derive_product_code(&thickness, &quality, &dimension);
            if code.is_empty() {
                anyhow::bail!("Thickness, quality and dimension are all required");
            }
            println!("{code}");
        }

        Command::Label {
            thickness,
            quality,
            dimension,
            quantity,
            plywood_type,
            code,
            remember,
            print,
        } => {
            let mut session = open_session(config)?;
            session.set_field(FormField::Thickness, &thickness);
            session.set_field(FormField::Quality, &quality);
            session.set_field(FormField::Dimension, &dimension);
            session.set_field(FormField::Quantity, &quantity);
            session.set_type(Some(plywood_type.into()));
            if let Some(code) = code {
                session.edit_code(&code);
            }

            apply_print_args(&mut session, &print)?;
            let label = session.generate_label(remember, Local::now().date_naive())?;
            info!("Generated label {}", label.product_code());

            let html = session.render_label()?;
            write_output(print.output.as_deref(), &html)?;
        }

        Command::Extract {
            pdf,
            plywood_type,
            json,
            list,
            print,
        } => {
            let bytes =
                std::fs::read(&pdf).with_context(|| format!("Failed to read {}", pdf.display()))?;
            let model = GeminiClient::from_config(&config)?;

            let mut session = open_session(config)?;
            if let Some(plywood_type) = plywood_type {
                session.set_type(Some(plywood_type.into()));
            }
            apply_print_args(&mut session, &print)?;

            info!("Analyzing: {}", pdf.display());
            let status = session
                .analyze_pdf(&bytes, &LopdfTextSource, &model, Local::now().date_naive())
                .await
                .with_context(|| format!("Failed to analyze {}", pdf.display()))?;
            info!("{status}");

            if session.queue().is_empty() {
                warn!("No labels to print");
                return Ok(());
            }

            let output = if json {
                serde_json::to_string_pretty(session.queue())?
            } else {
                session.render_queue()?
            };
            write_output(print.output.as_deref(), &output)?;

            if let Some(list) = list {
                let html = session.render_queue_list(Local::now().naive_local())?;
                std::fs::write(&list, html)
                    .with_context(|| format!("Failed to write {}", list.display()))?;
                info!("Generated: {}", list.display());
            }
        }

        Command::Tables { table, frequent } => print_table(table, frequent),

        Command::Layouts => {
            let session = open_session(config)?;
            let library = session.layouts();
            if library.layouts().is_empty() {
                println!("No saved layouts");
            }
            for saved in library.layouts() {
                let marker = if library.default_id() == Some(saved.id.as_str()) {
                    " (default)"
                } else {
                    ""
                };
                println!("{}\t{}{}", saved.id, saved.name, marker);
            }
        }
    }

    Ok(())
}

fn open_session(config: SessionConfig) -> Result<Session<FileStore>> {
    let dir = config.store_dir()?;
    info!("Using store: {}", dir.display());
    Ok(Session::open(FileStore::new(dir), config))
}

fn apply_print_args<S: KeyValueStore>(session: &mut Session<S>, print: &PrintArgs) -> Result<()> {
    session.set_print_format(&print.format)?;
    session.set_copies(print.copies);
    if let Some(id) = &print.layout {
        session.select_layout(id)?;
    }
    Ok(())
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Generated: {}", path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}

fn print_table(table: Table, frequent: bool) {
    match table {
        Table::Qualities => {
            let entries = if frequent {
                FREQUENTLY_USED_QUALITIES
            } else {
                ALL_QUALITIES
            };
            for entry in entries {
                println!("{}\t{}", entry.value, entry.display);
            }
        }
        Table::Dimensions => {
            let entries = if frequent {
                FREQUENTLY_USED_DIMENSIONS
            } else {
                ALL_DIMENSIONS
            };
            for entry in entries {
                println!("{}\t{}", entry.code, entry.value);
            }
        }
        Table::Thickness => {
            for value in PREDEFINED_THICKNESS_VALUES {
                println!("{value}");
            }
        }
    }
}
