//! Typed view of the page's own query string.

use std::collections::HashSet;

use crate::errors::AppError;

/// Query parameter names that ask the server to bypass its cache.
pub const FORCE_PARAMS: [&str; 3] = ["force", "f", "update"];

/// Parameter names parsed once from the page query string.
///
/// A parameter counts as set when its name appears, with or without a value:
/// `?update`, `?f=1` and `?force=` all set their flag. Names are
/// percent-decoded, so `?%75pdate` is `update`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageQuery {
    raw: String,
    names: HashSet<String>,
}

impl PageQuery {
    pub fn parse(query: &str) -> Result<Self, AppError> {
        let raw = query.trim().trim_start_matches('?').to_string();
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(&raw).map_err(|err| {
            AppError::Config(format!("Invalid page query '{}': {}", raw, err))
        })?;

        let names = pairs
            .into_iter()
            .map(|(name, _)| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();

        Ok(Self { raw, names })
    }

    /// The query string as given, without the leading `?`.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Whether `name` was present in the query.
    pub fn get(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Whether any force-refresh parameter was present.
    pub fn force_refresh(&self) -> bool {
        FORCE_PARAMS.iter().any(|name| self.get(name))
    }
}
