//! Interactive stop selection.

use std::io::{self, BufRead, Write};

use crate::domain::StopRow;
use crate::metlink::MetlinkClient;

use super::catalog::{filter_stops, list_stops};
use super::error::StopError;

const PROMPT: &str = "Select stop number: ";

/// The stop chosen by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedStop {
    pub stop_id: String,
    /// Stop name, or "Stop {id}" if the catalog had none
    pub label: String,
}

/// Fetch the catalog and let the user choose a stop.
///
/// The prompt loop runs on the blocking thread pool.
pub async fn pick_interactive<R, W>(
    client: &MetlinkClient,
    query: Option<&str>,
    input: R,
    output: W,
) -> Result<PickedStop, StopError>
where
    R: BufRead + Send + 'static,
    W: Write + Send + 'static,
{
    let rows = list_stops(client).await?;
    let query = query.map(str::to_string);

    tokio::task::spawn_blocking(move || pick_from_rows(rows, query.as_deref(), input, output))
        .await
        .map_err(|e| StopError::Io(io::Error::other(e)))?
}

/// Filter `rows`, print them as a numbered list and read a choice.
///
/// Blank lines are ignored; non-numeric or out-of-range answers print a hint
/// and ask again. Running out of input is [`StopError::NoSelection`].
pub fn pick_from_rows<R: BufRead, W: Write>(
    rows: Vec<StopRow>,
    query: Option<&str>,
    mut input: R,
    mut output: W,
) -> Result<PickedStop, StopError> {
    let query = query.filter(|q| !q.is_empty());
    let rows = filter_stops(rows, query);

    if rows.is_empty() {
        return Err(StopError::NoMatch {
            query: query.map(str::to_string),
        });
    }

    for (i, row) in rows.iter().enumerate() {
        writeln!(output, "{:4}) {}", i + 1, row.listing())?;
    }

    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(StopError::NoSelection);
        }

        let choice = line.trim();
        if choice.is_empty() {
            continue;
        }
        if !choice.chars().all(|c| c.is_ascii_digit()) {
            writeln!(output, "Please enter a number.")?;
            continue;
        }

        match choice.parse::<usize>() {
            Ok(n) if (1..=rows.len()).contains(&n) => {
                let row = &rows[n - 1];
                return Ok(PickedStop {
                    stop_id: row.stop_id.clone(),
                    label: row.label(),
                });
            }
            _ => {
                writeln!(output, "Please enter a number between 1 and {}.", rows.len())?;
            }
        }
    }
}
