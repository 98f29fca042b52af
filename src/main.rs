//! cachemap-xml CLI
//!
//! Entry point for the `cachemap-xml` command-line tool.

use clap::Parser;
use std::path::PathBuf;
use std::process;

use cachemap_xml::config::{base_dir, ConverterConfig};
use cachemap_xml::logging::init_logging;
use cachemap_xml::{Result, RunReport};

#[derive(Parser)]
#[command(name = "cachemap-xml")]
#[command(about = "Generate distributed cache map XML from a cache property file", version)]
struct Cli {
    /// Path to the cache property file (default: resources/caches.properties)
    #[arg(long, short = 's')]
    source: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    match execute(cli.source) {
        Ok(report) => {
            println!(
                "Wrote {} ({} map(s), {} skipped)",
                report.output.path.display(),
                report.maps.len(),
                report.skipped.len()
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn execute(source: Option<PathBuf>) -> Result<RunReport> {
    let config = ConverterConfig::resolve(base_dir(), source)?;
    cachemap_xml::run(&config)
}
