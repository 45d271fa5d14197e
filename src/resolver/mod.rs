//! # Column Resolver
//!
//! This module normalizes heterogeneous chromatographic-column sources into
//! one ordered list of selectable entries.
//!
//! ## Backend Kinds
//!
//! 1. **PeakForest**: a remote metadata service. One GET against its LC
//!    metadata endpoint returns a JSON object mapping column codes to
//!    descriptors; codes become identifiers, descriptor names become
//!    labels.
//!
//! 2. **In-house**: a local tab-separated reference table. The distinct
//!    values of one header-selected column become both label and
//!    identifier, in first-seen order.
//!
//! Either way the first entry encountered is flagged as the UI default,
//! and each invocation performs exactly one I/O operation.

mod api;
mod config;
mod error;
mod file;
mod types;


pub use config::{BackendKind, FieldOverrides, ResolverConfig, DEFAULT_COLUMN_FIELD, DEFAULT_TIMEOUT};
pub use error::ResolverError;
pub use types::{ColumnEntry, ColumnList};

use log::info;

/// Resolves the selectable chromatographic columns of a reference database.
///
/// Construct with a [`ResolverConfig`] and call [`resolve`](Self::resolve);
/// the configured backend kind selects the retrieval strategy.
pub struct ColumnResolver {
    config: ResolverConfig,
}

impl ColumnResolver {
    /// Create a resolver for the given configuration.
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Retrieve and normalize the column list.
    ///
    /// All-or-nothing: any failure yields a [`ResolverError`] and no
    /// partial list. Given an unchanged source, repeated calls return an
    /// identical list.
    pub fn resolve(&self) -> Result<ColumnList, ResolverError> {
        let mut columns = match self.config.backend {
            BackendKind::PeakForest => api::fetch_code_columns(&self.config)?,
            BackendKind::InHouse => file::read_reference_table(&self.config)?,
        };

        if self.config.sorted {
            columns.sort_by(|a, b| a.id.cmp(&b.id));
            for (i, col) in columns.iter_mut().enumerate() {
                col.is_default = i == 0;
            }
        }

        info!("Resolved {} chromatographic columns", columns.len());
        Ok(columns)
    }
}
