//! In-house retrieval strategy.
//!
//! Streams a tab-separated reference table and collects the distinct values
//! of one header-selected column, in first-seen order. The table has no
//! separate code space, so each value serves as both label and identifier.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::debug;

use super::types::{ColumnEntry, ColumnList};
use super::{ResolverConfig, ResolverError};

/// Read and deduplicate the column values of an in-house reference table.
pub(crate) fn read_reference_table(config: &ResolverConfig) -> Result<ColumnList, ResolverError> {
    let path = Path::new(&config.location);
    let field = config.fields.column_field();
    debug!("Reading reference table {} (field: {})", path.display(), field);

    let file = File::open(path).map_err(|source| ResolverError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    columns_from_reader(BufReader::new(file), field)
}

/// Collect distinct column values from tab-separated input.
///
/// The first row is the header; `field` names the header whose values are
/// collected. Dedup is case-sensitive exact match, keeping the first
/// occurrence. Rows too short to reach the selected index are skipped.
pub(crate) fn columns_from_reader<R: Read>(
    reader: R,
    field: &str,
) -> Result<ColumnList, ResolverError> {
    let mut table = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .quote(b'"')
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let index = table
        .headers()?
        .iter()
        .position(|h| h == field)
        .ok_or_else(|| ResolverError::FieldNotFound(field.to_string()))?;

    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for record in table.records() {
        let record = record?;
        let Some(value) = record.get(index) else {
            continue;
        };
        if seen.insert(value.to_string()) {
            names.push(value.to_string());
        }
    }

    Ok(names
        .iter()
        .enumerate()
        .map(|(i, name)| ColumnEntry::from_name(name, i == 0))
        .collect())
}
