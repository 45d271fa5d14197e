//! # chromcols
//!
//! Command-line tool resolving the chromatographic columns selectable in an
//! LC-MS reference database, for the spectrum-matching tool's parameter UI.
//!
//! ## Usage
//!
//! ```bash
//! # Remote PeakForest instance
//! chromcols -d peakforest -u https://metabohub.peakforest.org/rest -t TOKEN
//!
//! # In-house reference table, column names in the "column_name" header
//! chromcols -d inhouse -u reference.tsv -f col=column_name
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    cli::init_logging(cli.verbosity());

    cli::dispatch(cli)
}
