//! CLI entry point for post-index

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use post_index::commands::generate::{self, GenerateOptions};
use post_index::Site;

#[derive(Parser)]
#[command(name = "post-index")]
#[command(version)]
#[command(about = "Render a blog post index from pre-parsed post records", long_about = None)]
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
    /// Create a sample config and post manifest
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Render the post index
    #[command(alias = "g")]
    Generate {
        /// Print the result instead of writing it to the destination
        #[arg(long)]
        stdout: bool,

        /// Wrap the listing in a complete HTML document
        #[arg(long)]
        standalone: bool,

        /// Heading to use instead of the configured one
        #[arg(short, long)]
        title: Option<String>,

        /// Date format to use instead of the configured one
        #[arg(long)]
        date_format: Option<String>,
    },

    /// List the posts in the manifest
    List {
        /// Print the posts as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove the output directory
    Clean,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "post_index=debug,info"
    } else {
        "post_index=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("reading the current directory")?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            post_index::commands::init::init_site(&target_dir)?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::Generate {
            stdout,
            standalone,
            title,
            date_format,
        } => {
            let site = Site::new(&base_dir)?;
            let options = GenerateOptions {
                title,
                date_format,
                standalone,
            };

            if stdout {
                print!("{}", generate::render(&site, &options)?);
            } else {
                let path = generate::run(&site, &options)?;
                println!("Generated {:?}", path);
            }
        }

        Commands::List { json } => {
            let site = Site::new(&base_dir)?;
            post_index::commands::list::run(&site, json)?;
        }

        Commands::Clean => {
            let site = Site::new(&base_dir)?;
            post_index::commands::clean::run(&site)?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("post-index version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
