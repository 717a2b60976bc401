/*++

Licensed under the Apache-2.0 license.

File Name:

    main.rs

Abstract:

    Host tools for the matrix multiplication self-test firmware

--*/

use clap::{Parser, Subcommand};
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,

    /// Log debug output
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a raw firmware image into a testbench memory file
    Bin2data {
        /// Raw firmware image
        input: PathBuf,

        /// Output file [default: <INPUT> with a .data extension]
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the checksums the self-test is expected to report
    Expected {
        /// Dump every matrix ahead of the checksums
        #[arg(long)]
        verbose: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let level = if cli.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = SimpleLogger::new().with_level(level).init();

    let result = match &cli.cmd {
        Commands::Bin2data { input, out } => {
            ndsmd_tools::convert(input, out.as_deref()).map(|path| {
                log::debug!("output {}", path.display());
            })
        }
        Commands::Expected { verbose } => {
            print!("{}", ndsmd_tools::render_expected(*verbose));
            if !ndsmd_tools::expected_values().matches_firmware() {
                log::warn!("host values differ from the constants built into the firmware");
            }
            Ok(())
        }
    };
    result.unwrap_or_else(|e| {
        log::error!("Error: {:#}", e);
        std::process::exit(1);
    });
}
