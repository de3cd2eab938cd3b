//! SAM Site Checker
//!
//! Loads the SAM site data file, validates it, and lists the sites.

use clap::Parser;
use std::path::PathBuf;
use strategic_sam_sites::core::config::MapGeometry;
use strategic_sam_sites::core::error::Result;
use strategic_sam_sites::strategic::{SamGraphicIndex, SamSiteLoader};

/// Validate a SAM site data file
#[derive(Parser, Debug)]
#[command(name = "sam_check")]
#[command(about = "Load and validate SAM site locations")]
struct Args {
    /// SAM site JSON file
    #[arg(long, default_value = "data/strategic/sam_sites.json")]
    sites: PathBuf,

    /// Optional TOML file overriding the tactical map dimensions
    #[arg(long)]
    map_config: Option<PathBuf>,

    /// Log every loaded record
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let filter = if args.verbose {
        "strategic_sam_sites=debug"
    } else {
        "strategic_sam_sites=info"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run(&args) {
        tracing::error!("SAM site check failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let geometry = match &args.map_config {
        Some(path) => MapGeometry::from_toml_file(path)?,
        None => MapGeometry::default(),
    };
    tracing::debug!("Map geometry: {:?}", geometry);

    let sites = SamSiteLoader::new(geometry).load_from_file(&args.sites)?;

    println!("{} SAM sites OK", sites.len());
    for (index, site) in sites.iter().enumerate() {
        let [first, second] = site.grid_nos();
        let orientation = match site.graphic_index() {
            SamGraphicIndex::NeSw => "NE/SW",
            SamGraphicIndex::NwSe => "NW/SE",
        };
        println!(
            "  #{} {:<4} tiles {:>5} {:>5}  {}",
            index,
            site.sector().to_string(),
            first,
            second,
            orientation
        );
    }

    Ok(())
}
