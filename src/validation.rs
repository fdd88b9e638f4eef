//! Local pre-flight checks for documented request constraints.
//!
//! Only constraints the API documents as hard limits are checked here: batch
//! sizes, numeric ranges and identifier groups that may not be mixed. Rate
//! limits are enforced by the remote side and are not tracked locally.

use crate::{OzonError, OzonResult};

/// Largest page size accepted by list endpoints.
pub const MAX_PAGE_LIMIT: i64 = 1000;

/// Request parameters that can be checked before they are sent.
pub trait Validate {
    /// Returns `OzonError::InvalidParameters` describing the first violated
    /// constraint.
    fn validate(&self) -> OzonResult<()>;
}

pub(crate) fn max_items(field: &str, len: usize, max: usize) -> OzonResult<()> {
    if len > max {
        return Err(OzonError::InvalidParameters(format!(
            "{field}: at most {max} items per request, got {len}"
        )));
    }
    Ok(())
}

pub(crate) fn not_empty(field: &str, len: usize) -> OzonResult<()> {
    if len == 0 {
        return Err(OzonError::InvalidParameters(format!("{field}: must not be empty")));
    }
    Ok(())
}

pub(crate) fn in_range(field: &str, value: i64, min: i64, max: i64) -> OzonResult<()> {
    if !(min..=max).contains(&value) {
        return Err(OzonError::InvalidParameters(format!(
            "{field}: must be between {min} and {max}, got {value}"
        )));
    }
    Ok(())
}

pub(crate) fn page_limit(limit: Option<i64>) -> OzonResult<()> {
    match limit {
        Some(limit) => in_range("limit", limit, 1, MAX_PAGE_LIMIT),
        None => Ok(()),
    }
}

/// Fails if identifiers from more than one group are set.
pub(crate) fn single_identifier_group(groups: &[(&str, usize)]) -> OzonResult<()> {
    let used: Vec<&str> = groups
        .iter()
        .filter(|(_, len)| *len > 0)
        .map(|(name, _)| *name)
        .collect();

    if used.len() > 1 {
        return Err(OzonError::InvalidParameters(format!(
            "only one identifier group can be used per request, got {}",
            used.join(", ")
        )));
    }
    Ok(())
}
