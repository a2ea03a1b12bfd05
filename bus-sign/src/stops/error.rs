//! Stop catalog and picker error types.

use crate::metlink::MetlinkError;

/// Errors that can occur while listing or picking stops.
#[derive(Debug, thiserror::Error)]
pub enum StopError {
    /// Fetching the catalog failed
    #[error(transparent)]
    Metlink(#[from] MetlinkError),

    /// Catalog body was neither a list nor an object with a `data` list
    #[error("unexpected response shape from stop catalog: {0}")]
    UnexpectedShape(String),

    /// Filtering left nothing to choose from
    #[error("{}", no_match_message(.query))]
    NoMatch { query: Option<String> },

    /// Input ended before a valid choice was made
    #[error("no selection made")]
    NoSelection,

    /// Reading the selection or writing the list failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn no_match_message(query: &Option<String>) -> String {
    match query {
        Some(q) => format!("no stops matched: {q:?}"),
        None => "no stops returned from the stop catalog".to_string(),
    }
}
