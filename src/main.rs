//! Paradigms Table - programming languages and their paradigms in the terminal
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::eyre;
use paradigms_table::launch::{self, LaunchOptions};

/// Paradigms Table - programming languages and the paradigms they support
#[derive(Parser, Debug)]
#[command(name = "ptable", version)]
#[command(about = "A terminal table of programming languages and their paradigms", long_about = None)]
struct Args {
    /// Directory with content tables replacing the built-in ones
    #[arg(long, value_name = "DIR")]
    content: Option<PathBuf>,

    /// Settings file (default: <config dir>/paradigms-table/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Fixed number of grid columns instead of picking from terminal width
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..=6))]
    columns: Option<u16>,

    /// Keep fact bubbles still
    #[arg(long)]
    no_animation: bool,

    /// Validate content, print a summary and exit
    #[arg(long)]
    check: bool,

    /// Write a default settings file and exit
    #[arg(long)]
    init_config: bool,
}

impl From<Args> for LaunchOptions {
    fn from(args: Args) -> Self {
        Self {
            content: args.content,
            config: args.config,
            columns: args.columns.map(usize::from),
            no_animation: args.no_animation,
        }
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let check = args.check;
    let init_config = args.init_config;
    let options = LaunchOptions::from(args);

    if init_config {
        let path = options
            .config_path()
            .ok_or_else(|| eyre!("No configuration directory on this platform; pass --config"))?;
        if launch::init_config(&path)? {
            println!("Wrote {}", path.display());
        } else {
            println!("{} already exists", path.display());
        }
        return Ok(());
    }

    if check {
        let settings = options.resolve_settings();
        println!("{}", launch::check(&settings)?);
        return Ok(());
    }

    if let Err(e) = launch::run(options).await {
        if let Ok(log) = ptable_core::logging::get_current_log_file() {
            eprintln!("Details in {}", log.display());
        }
        return Err(e.into());
    }
    Ok(())
}
