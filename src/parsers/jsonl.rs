use serde::de::DeserializeOwned;

use crate::error::LineError;

/// Deserialize every non-blank line of `source` as `T`.
///
/// Stops at the first line that fails; no partial result is returned. Line
/// numbers in the error are 1-based and count blank lines.
pub fn parse_lines<T: DeserializeOwned>(source: &str) -> Result<Vec<T>, LineError> {
    let mut records = Vec::new();

    for (line_num, line) in source.lines().enumerate() {
        // Skip empty lines
        if line.trim().is_empty() {
            continue;
        }

        let record = serde_json::from_str::<T>(line)
            .map_err(|source| LineError { line: line_num + 1, source })?;
        records.push(record);
    }

    Ok(records)
}
