use anyhow::{Context, Result};
use log::info;
use std::time::Duration;

use chromcols::resolver::{ColumnResolver, FieldOverrides, ResolverConfig};

use super::config::Settings;
use super::Cli;

/// Resolve the column list and print it to stdout as a JSON array.
pub fn run(cli: Cli) -> Result<()> {
    let settings = match &cli.config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };

    let mut config = ResolverConfig::new(cli.dbtype.into(), cli.dburl);
    config.token = cli.dbtoken;

    if let Some(fields) = &cli.dbfields {
        config.fields = fields
            .parse::<FieldOverrides>()
            .context("Invalid -f/--dbfields value")?;
    }

    if let Some(secs) = cli.timeout.or(settings.network.timeout_secs) {
        config.timeout = Duration::from_secs(secs);
    }
    config.sorted = cli.sorted || settings.output.sorted.unwrap_or(false);
    let pretty = cli.pretty || settings.output.pretty.unwrap_or(false);

    let columns = ColumnResolver::new(config)
        .resolve()
        .context("Failed to resolve chromatographic columns")?;

    info!("Writing {} entries to stdout", columns.len());

    let json = if pretty {
        serde_json::to_string_pretty(&columns)
    } else {
        serde_json::to_string(&columns)
    }
    .context("Failed to serialize column list")?;

    println!("{json}");

    Ok(())
}
