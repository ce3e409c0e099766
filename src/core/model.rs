// logtab - core/model.rs
//
// Core data model types. Pure data definitions with no I/O.
//
// These types are the shared vocabulary between parser, aggregation and
// export.

use std::collections::{BTreeMap, BTreeSet, HashMap};

// =============================================================================
// Measurement (normalised output of parsing)
// =============================================================================

/// One-based instance number derived from an instance file name.
pub type InstanceKey = i64;

/// A single objective value reported for one (instance, alias) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    /// Name of the algorithm variant that produced the result.
    pub alias: String,

    /// One-based instance number.
    pub instance: InstanceKey,

    /// Objective value exactly as it appears in the log, minus its sign.
    pub objective: String,

    /// Line number in the source file the measurement was read from.
    pub line_number: u64,
}

// =============================================================================
// Result table
// =============================================================================

/// Objective values keyed by instance, then by alias.
///
/// Instances iterate in ascending numeric order. A later insert for the same
/// (instance, alias) pair replaces the earlier value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultTable {
    rows: BTreeMap<InstanceKey, HashMap<String, String>>,
}

impl ResultTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `objective` for the pair, returning the value it replaced.
    pub fn insert(
        &mut self,
        instance: InstanceKey,
        alias: impl Into<String>,
        objective: impl Into<String>,
    ) -> Option<String> {
        self.rows
            .entry(instance)
            .or_default()
            .insert(alias.into(), objective.into())
    }

    /// Objective stored for the pair, if any.
    pub fn get(&self, instance: InstanceKey, alias: &str) -> Option<&str> {
        self.rows
            .get(&instance)
            .and_then(|row| row.get(alias))
            .map(String::as_str)
    }

    /// Rows in ascending instance order.
    pub fn rows(&self) -> impl Iterator<Item = (InstanceKey, &HashMap<String, String>)> {
        self.rows.iter().map(|(k, v)| (*k, v))
    }

    /// Every alias seen in any row, sorted.
    pub fn aliases(&self) -> BTreeSet<&str> {
        self.rows
            .values()
            .flat_map(|row| row.keys().map(String::as_str))
            .collect()
    }

    /// Number of distinct instances.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when no instance has been recorded.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Fold measurements into a table, in order. Duplicates are last-write-wins.
pub fn aggregate<I>(measurements: I) -> ResultTable
where
    I: IntoIterator<Item = Measurement>,
{
    let mut table = ResultTable::new();
    for m in measurements {
        if let Some(previous) = table.insert(m.instance, m.alias.as_str(), m.objective.as_str()) {
            tracing::debug!(
                instance = m.instance,
                alias = %m.alias,
                previous = %previous,
                current = %m.objective,
                line = m.line_number,
                "Duplicate result overwritten"
            );
        }
    }
    table
}

// =============================================================================
// Run summary
// =============================================================================

/// Statistics for one completed conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Total lines read from the input file.
    pub lines_processed: u64,

    /// Lines that matched the result pattern.
    pub measurements: usize,

    /// Distinct instances in the table.
    pub instances: usize,

    /// Data rows written to the CSV (header excluded).
    pub rows_written: usize,

    /// Aliases found in the log that are not output columns.
    pub unknown_aliases: Vec<String>,
}
