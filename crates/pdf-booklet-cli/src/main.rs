mod page_range;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use pdf_booklet::filter::{self, FilterParams};
use pdf_booklet::{ImpositionConfig, Orientation, SheetSide};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pdfb", about = "Booklet page ordering tools", version)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the booklet print order of a set of pages
    Order {
        #[command(flatten)]
        booklet: BookletArgs,

        /// Pages to order, e.g. "1-4,7,9-12"
        #[arg(short, long, required_unless_present = "input")]
        pages: Option<String>,

        /// Take the pages from a PDF (restricted by --pages if given)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Print one sheet face per line
        #[arg(long)]
        by_sheet: bool,
    },

    /// Show sheet and signature statistics
    Stats {
        #[command(flatten)]
        booklet: BookletArgs,

        /// Number of pages
        #[arg(short, long, required_unless_present = "input", conflicts_with = "input")]
        count: Option<usize>,

        /// Count the pages of a PDF
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Run a stream filter over a file
    Filter {
        #[command(subcommand)]
        action: FilterAction,
    },
}

#[derive(Args)]
struct BookletArgs {
    /// Pages per sheet side (2, 4, 6 or 8)
    #[arg(short, long, default_value = "4")]
    nup: usize,

    /// Booklet descriptor, e.g. "papersize:A5L, btype:booklet, binding:short"
    #[arg(short, long, default_value = "")]
    desc: String,
}

impl BookletArgs {
    fn resolve(&self) -> Result<ImpositionConfig> {
        pdf_booklet::resolve(self.nup, &self.desc, None)
            .with_context(|| format!("invalid booklet descriptor {:?}", self.desc))
    }
}

#[derive(Subcommand)]
enum FilterAction {
    /// Compress a file
    Encode(FilterArgs),
    /// Decompress a file
    Decode(FilterArgs),
}

#[derive(Args)]
struct FilterArgs {
    /// Filter name (LZWDecode or FlateDecode)
    #[arg(long)]
    name: String,

    /// Input file
    #[arg(short, long)]
    input: PathBuf,

    /// Output file
    #[arg(short, long)]
    output: PathBuf,

    /// Integer filter parameter, e.g. EarlyChange=0 (repeatable)
    #[arg(long = "param", value_parser = parse_param)]
    params: Vec<(String, i64)>,
}

fn parse_param(s: &str) -> Result<(String, i64), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected Key=Value, got '{s}'"))?;
    let value = value
        .trim()
        .parse()
        .map_err(|_| format!("parameter {key} must be an integer, got '{value}'"))?;
    Ok((key.trim().to_string(), value))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Commands::Order {
            booklet,
            pages,
            input,
            by_sheet,
        } => {
            let config = booklet.resolve()?;
            let pages = select_pages(pages.as_deref(), input.as_deref()).await?;
            let slots = pdf_booklet::impose(pages, &config)?;

            if by_sheet {
                for face in pdf_booklet::faces(&slots) {
                    let side = match face[0].face {
                        SheetSide::Front => "front",
                        SheetSide::Back => "back",
                    };
                    println!(
                        "signature {} sheet {} {side}: {}",
                        face[0].signature_index + 1,
                        face[0].sheet_index + 1,
                        join(face.iter().map(|slot| slot.source))
                    );
                }
            } else {
                println!("{}", join(slots.iter().map(|slot| slot.source)));
            }
        }

        Commands::Stats {
            booklet,
            count,
            input,
        } => {
            let config = booklet.resolve()?;
            let count = match (count, input) {
                (Some(count), _) => count,
                (None, Some(path)) => load_pages(&path).await?.len(),
                (None, None) => bail!("either --count or --input is required"),
            };

            let stats = pdf_booklet::calculate_statistics(count, &config)?;
            println!("Booklet Statistics ({:?} {}-up):", config.style, config.nup);
            println!("  Sheet: {}", sheet_description(&config));
            println!("  Source pages: {}", stats.source_pages);
            println!("  Blank pages added: {}", stats.blank_pages_added);
            println!("  Output sheets: {}", stats.output_sheets);
            println!("  Output pages: {}", stats.output_pages);
            println!("  Signatures: {}", stats.signatures);
            if stats.signatures > 1 {
                println!("  Sheets per signature: {:?}", stats.sheets_per_signature);
            }
        }

        Commands::Filter { action } => {
            let (encoding, args) = match action {
                FilterAction::Encode(args) => (true, args),
                FilterAction::Decode(args) => (false, args),
            };
            run_filter(encoding, args).await?;
        }
    }

    Ok(())
}

async fn load_pages(path: &Path) -> Result<BTreeSet<u32>> {
    pdf_booklet::load_page_numbers(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))
}

async fn select_pages(range: Option<&str>, input: Option<&Path>) -> Result<BTreeSet<u32>> {
    let document_pages = match input {
        Some(path) => Some(load_pages(path).await?),
        None => None,
    };

    match (range, document_pages) {
        (Some(range), document) => {
            let page_count = document.map(|pages| pages.len() as u32);
            page_range::parse_page_range(range, page_count)
                .map_err(|e| anyhow::anyhow!(e))
                .with_context(|| format!("invalid page range {range:?}"))
        }
        (None, Some(pages)) => Ok(pages),
        (None, None) => bail!("either --pages or --input is required"),
    }
}

async fn run_filter(encoding: bool, args: FilterArgs) -> Result<()> {
    let params: FilterParams = args.params.into_iter().collect();
    let data = tokio::fs::read(&args.input)
        .await
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let output = if encoding {
        filter::encode(&args.name, &params, &data)?
    } else {
        filter::decode(&args.name, &params, &data)?
    };

    tokio::fs::write(&args.output, &output)
        .await
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    println!(
        "{} {} bytes → {} bytes ({})",
        if encoding { "Encoded" } else { "Decoded" },
        data.len(),
        output.len(),
        args.output.display()
    );
    Ok(())
}

/// Output sheet size, e.g. "A5 landscape (210 x 148 mm)"
fn sheet_description(config: &ImpositionConfig) -> String {
    let paper = config.paper_format();
    let (width, height) = paper.dimensions_mm();
    let orientation = match paper.orientation {
        Orientation::Portrait => "portrait",
        Orientation::Landscape => "landscape",
    };
    format!("{} {orientation} ({width} x {height} mm)", paper.size)
}

fn join<T: std::fmt::Display>(items: impl Iterator<Item = T>) -> String {
    items.map(|item| item.to_string()).collect::<Vec<_>>().join(" ")
}
