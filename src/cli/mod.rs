use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use chromcols::resolver::BackendKind;

mod config;
mod list;

/// chromcols - Chromatographic Column Resolver
#[derive(Parser)]
#[command(name = "chromcols")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Reference database kind
    #[arg(short = 'd', long = "dbtype", value_enum)]
    dbtype: BackendArg,

    /// Base URL of the metadata service (peakforest) or path of the
    /// reference table (inhouse)
    #[arg(short = 'u', long = "dburl", value_name = "URL_OR_PATH")]
    dburl: String,

    /// Access token for the metadata service
    #[arg(short = 't', long = "dbtoken", value_name = "TOKEN")]
    dbtoken: Option<String>,

    /// Reference table header overrides as comma-separated key=value pairs
    /// (recognized key: col)
    #[arg(short = 'f', long = "dbfields", value_name = "KEY=VALUE,..")]
    dbfields: Option<String>,

    /// Load settings from a TOML config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Network timeout in seconds for the metadata request
    #[arg(long, value_name = "SECONDS")]
    timeout: Option<u64>,

    /// Sort entries by identifier instead of source order
    #[arg(long)]
    sorted: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

/// Reference database kind, as accepted on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum BackendArg {
    /// Remote PeakForest metadata service
    #[value(alias = "api")]
    Peakforest,
    /// Local tab-separated reference table
    #[value(alias = "file")]
    Inhouse,
}

impl From<BackendArg> for BackendKind {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Peakforest => BackendKind::PeakForest,
            BackendArg::Inhouse => BackendKind::InHouse,
        }
    }
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    list::run(cli)
}
