//! CLI entry point for tailblog

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tailblog")]
#[command(version)]
#[command(about = "Resolve blog content and generate static page payloads", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate page payloads for every post
    #[command(alias = "g")]
    Generate {
        /// Watch for content changes
        #[arg(short, long)]
        watch: bool,
    },

    /// Print every pre-rendered path
    Paths,

    /// List the ordered feed
    List {
        /// Only posts with this tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Show at most this many posts
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Print the page payload for a slug
    Show {
        /// Post slug, e.g. 2024/hello-world
        slug: String,
    },

    /// Clean the public folder
    Clean,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "tailblog=debug,info"
    } else {
        "tailblog=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Generate { watch } => {
            let site = tailblog::Site::new(&base_dir)?;
            tracing::info!("Generating pages...");
            site.generate()?;
            println!("Generated successfully!");

            if watch {
                tailblog::commands::generate::watch(&site)?;
            }
        }

        Commands::Paths => {
            let site = tailblog::Site::new(&base_dir)?;
            tailblog::commands::paths::run(&site)?;
        }

        Commands::List { tag, limit } => {
            let site = tailblog::Site::new(&base_dir)?;
            tailblog::commands::list::run(&site, tag.as_deref(), limit)?;
        }

        Commands::Show { slug } => {
            let site = tailblog::Site::new(&base_dir)?;
            tailblog::commands::show::run(&site, &slug)?;
        }

        Commands::Clean => {
            let site = tailblog::Site::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("tailblog version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
