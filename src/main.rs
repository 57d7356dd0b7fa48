use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

// Use the library modules
use svgsuite::commands;
use svgsuite::commands::init::InitOptions;
use svgsuite::core::suite::{self, SuiteLayout};

#[derive(Parser)]
#[clap(name = "svgsuite")]
#[clap(about = "W3C SVG 1.1 test suite bootstrapper")]
#[clap(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download, extract and prune the test suite
    Init {
        /// Re-create the suite even if the target directory exists
        #[clap(long)]
        force: bool,
        /// Target directory for the extracted suite
        #[clap(long, default_value = suite::SUITE_DIR)]
        dir: PathBuf,
        /// Local path the archive is cached under
        #[clap(long, default_value = suite::ARCHIVE_NAME)]
        archive: PathBuf,
        /// Upstream archive URL
        #[clap(long, default_value = suite::SUITE_URL)]
        url: String,
    },
    /// Report what is present on disk
    Status {
        /// Output format: text or json
        #[clap(short, long, default_value = "text")]
        format: String,
    },
    /// Remove the extracted suite
    Clean {
        /// Also remove the cached archive
        #[clap(long)]
        archive: bool,
        /// Skip the confirmation prompt
        #[clap(long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init {
            force,
            dir,
            archive,
            url,
        } => {
            let opts = InitOptions {
                layout: SuiteLayout { url, archive, dir },
                force,
            };
            commands::init::init_suite(&opts).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Status { format } => {
            commands::status::show_status(&SuiteLayout::default(), &format)
                .map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Clean { archive, yes } => {
            commands::clean::clean_suite(&SuiteLayout::default(), archive, yes)
                .map_err(|e| anyhow::anyhow!(e))
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}
