// logtab - core/parser.rs
//
// Line-oriented extraction of solver results.
// Core layer: works on in-memory text, never touches the filesystem.
//
// A result line looks like:
//   INFO: [<alias>] Instance <path> - maxVal = Solution: cost=[-<objective>, ...
// Anything after the objective is ignored. Lines that do not contain this
// shape are skipped without error.

use crate::core::model::{InstanceKey, Measurement};
use crate::util::constants::INSTANCE_INDEX_OFFSET;
use crate::util::error::ParseError;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// Pattern for a result line. The `-` before the objective is outside the
/// capture, so the stored objective is the re-negated (positive) value.
pub const RESULT_LINE_PATTERN: &str = r"INFO: \[(?P<alias>[\w-]+)\] Instance (?P<instance>[\w\-/.]+) - maxVal = Solution: cost=\[-(?P<objective>[\d.]+)";

/// Result of parsing a whole log file.
#[derive(Debug, Default)]
pub struct ParseResult {
    /// Measurements in file order.
    pub measurements: Vec<Measurement>,
    /// Total lines processed.
    pub lines_processed: u64,
}

fn result_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // The pattern is a literal covered by the tests below.
    PATTERN.get_or_init(|| Regex::new(RESULT_LINE_PATTERN).expect("invalid result line pattern"))
}

/// Parse every line of `content`.
///
/// Stops at the first line whose instance number cannot be derived; no
/// partial result is returned in that case.
pub fn parse_content(content: &str, file_path: &Path) -> Result<ParseResult, ParseError> {
    let mut result = ParseResult::default();

    for (line_idx, line) in lines(content).enumerate() {
        result.lines_processed += 1;
        let line_number = (line_idx as u64) + 1;

        if let Some(m) = parse_line(line, file_path, line_number)? {
            tracing::trace!(
                line = line_number,
                alias = %m.alias,
                instance = m.instance,
                objective = %m.objective,
                "Result line matched"
            );
            result.measurements.push(m);
        }
    }

    tracing::debug!(
        file = %file_path.display(),
        lines = result.lines_processed,
        matched = result.measurements.len(),
        "Parsing complete"
    );

    Ok(result)
}

/// Split `content` into lines ending in `\n`, `\r\n` or a bare `\r`.
///
/// Like `str::lines`, a trailing terminator does not produce an extra empty
/// line.
pub fn lines(content: &str) -> impl Iterator<Item = &str> + '_ {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(|c: char| c == '\n' || c == '\r') {
            Some(end) => {
                let line = &rest[..end];
                let skip = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + skip..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}

/// Extract a measurement from a single line.
///
/// Returns `Ok(None)` when the line is not a result line. `file_path` and
/// `line_number` are only used for error context.
pub fn parse_line(
    line: &str,
    file_path: &Path,
    line_number: u64,
) -> Result<Option<Measurement>, ParseError> {
    let Some(caps) = result_pattern().captures(line) else {
        return Ok(None);
    };

    // All three groups are mandatory in the pattern.
    let instance = instance_key(&caps["instance"], file_path, line_number)?;

    Ok(Some(Measurement {
        alias: caps["alias"].to_string(),
        instance,
        objective: caps["objective"].to_string(),
        line_number,
    }))
}

/// The part of an instance path that should hold the zero-based number:
/// last `/` segment, cut at its first `.`, then whatever follows the last `_`.
///
/// `data/inst_7.txt` gives `7`; `7.txt` (no underscore) also gives `7`.
pub fn instance_token(instance_path: &str) -> &str {
    let file_name = instance_path.rsplit('/').next().unwrap_or(instance_path);
    let stem = file_name.split('.').next().unwrap_or(file_name);
    stem.rsplit('_').next().unwrap_or(stem)
}

/// Derive the one-based instance number from an instance path.
pub fn instance_key(
    instance_path: &str,
    file_path: &Path,
    line_number: u64,
) -> Result<InstanceKey, ParseError> {
    let token = instance_token(instance_path);
    let malformed = |source| ParseError::MalformedInstance {
        file: file_path.to_path_buf(),
        line_number,
        instance_path: instance_path.to_string(),
        token: token.to_string(),
        source,
    };

    let zero_based: InstanceKey = token.parse().map_err(|e| malformed(Some(e)))?;
    zero_based
        .checked_add(INSTANCE_INDEX_OFFSET)
        .ok_or_else(|| malformed(None))
}
