use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;

use super::ResolverError;

/// Header name holding the chromatographic-column value when no override
/// is supplied.
pub const DEFAULT_COLUMN_FIELD: &str = "col";

/// Network timeout applied to the metadata request when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Which reference database flavor to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Remote PeakForest metadata service, queried over HTTP
    PeakForest,
    /// Local tab-separated in-house reference table
    InHouse,
}

impl FromStr for BackendKind {
    type Err = ResolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "peakforest" | "api" => Ok(Self::PeakForest),
            "inhouse" | "file" => Ok(Self::InHouse),
            other => Err(ResolverError::UnsupportedBackend(other.to_string())),
        }
    }
}

/// Caller-supplied remapping of reference-table header names.
///
/// Parsed from comma-separated `key=value` pairs. The recognized key is
/// `col`, naming which header holds the chromatographic-column value.
/// Unrecognized keys are kept but have no effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldOverrides(HashMap<String, String>);

impl FieldOverrides {
    /// Header name to read column values from, falling back to
    /// [`DEFAULT_COLUMN_FIELD`].
    pub fn column_field(&self) -> &str {
        self.0
            .get("col")
            .map(String::as_str)
            .unwrap_or(DEFAULT_COLUMN_FIELD)
    }
}

impl FromStr for FieldOverrides {
    type Err = ResolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = HashMap::new();
        for pair in s.split(',') {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| ResolverError::InvalidFieldOverride(pair.to_string()))?;
            fields.insert(key.to_string(), value.to_string());
        }
        Ok(Self(fields))
    }
}

/// Typed resolver options.
///
/// Replaces the loose keyword wiring of earlier tooling with an explicit
/// structure: every recognized option is a field with a documented effect.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Backend kind to dispatch on
    pub backend: BackendKind,

    /// Base URL of the metadata service (PeakForest) or filesystem path of
    /// the reference table (in-house)
    pub location: String,

    /// Access token, appended as a `token` query parameter on the metadata
    /// request. PeakForest only.
    pub token: Option<String>,

    /// Header-name overrides for the reference table. In-house only.
    pub fields: FieldOverrides,

    /// Timeout for the metadata request, bounding an otherwise unbounded
    /// blocking call
    pub timeout: Duration,

    /// Order entries by identifier instead of source enumeration order.
    /// The default flag moves to the new first entry.
    pub sorted: bool,
}

impl ResolverConfig {
    /// Create a configuration for the given backend and source location,
    /// with no token, no field overrides, the default timeout, and
    /// as-received ordering.
    pub fn new(backend: BackendKind, location: impl Into<String>) -> Self {
        Self {
            backend,
            location: location.into(),
            token: None,
            fields: FieldOverrides::default(),
            timeout: DEFAULT_TIMEOUT,
            sorted: false,
        }
    }
}
