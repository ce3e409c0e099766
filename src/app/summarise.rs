// logtab - app/summarise.rs
//
// One-shot conversion of a solver log into the CSV summary.
//
// The CSV is rendered into memory first and written with a single call,
// so a failed run never leaves a half-written summary behind.

use crate::core::export;
use crate::core::model::{self, RunSummary};
use crate::core::parser;
use crate::util::error::{LogTabError, ParseError, Result};
use std::path::Path;

/// Read `input`, tabulate its result lines over `variant_order` and write the
/// CSV to `output`, replacing any existing file.
pub fn summarise_file(input: &Path, output: &Path, variant_order: &[&str]) -> Result<RunSummary> {
    tracing::debug!(
        input = %input.display(),
        output = %output.display(),
        "Summary run started"
    );

    let bytes = std::fs::read(input).map_err(|e| LogTabError::Io {
        path: input.to_path_buf(),
        operation: "read",
        source: e,
    })?;
    let content = String::from_utf8(bytes).map_err(|e| ParseError::InvalidEncoding {
        file: input.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(file = %input.display(), bytes = content.len(), "Log file read");

    let mut summary = RunSummary::default();
    let csv = summarise_content(&content, input, output, variant_order, &mut summary)?;

    std::fs::write(output, csv).map_err(|e| LogTabError::Io {
        path: output.to_path_buf(),
        operation: "write",
        source: e,
    })?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        lines = summary.lines_processed,
        measurements = summary.measurements,
        instances = summary.instances,
        rows = summary.rows_written,
        "Summary written"
    );

    Ok(summary)
}

/// Parse, aggregate and render already-loaded log text, returning CSV bytes.
/// `input` and `output` are used for error context only.
pub fn summarise_content(
    content: &str,
    input: &Path,
    output: &Path,
    variant_order: &[&str],
    summary: &mut RunSummary,
) -> Result<Vec<u8>> {
    let parsed = parser::parse_content(content, input)?;
    summary.lines_processed = parsed.lines_processed;
    summary.measurements = parsed.measurements.len();

    let table = model::aggregate(parsed.measurements);
    summary.instances = table.len();

    summary.unknown_aliases = table
        .aliases()
        .into_iter()
        .filter(|alias| !variant_order.contains(alias))
        .map(str::to_string)
        .collect();
    for alias in &summary.unknown_aliases {
        tracing::warn!(alias = %alias, "Alias is not a summary column; its results are omitted");
    }

    let mut buf = Vec::new();
    summary.rows_written = export::render_csv(&table, variant_order, &mut buf, output)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::constants::VARIANT_ORDER;
    use std::path::PathBuf;

    fn run(content: &str) -> (String, RunSummary) {
        let mut summary = RunSummary::default();
        let csv = summarise_content(
            content,
            &PathBuf::from("run.log"),
            &PathBuf::from("summary.csv"),
            &VARIANT_ORDER,
            &mut summary,
        )
        .unwrap();
        (String::from_utf8(csv).unwrap(), summary)
    }

    #[test]
    fn test_two_variants_one_instance() {
        let (csv, summary) = run(
            "INFO: [PADRAO] Instance data/inst_0.csv - maxVal = Solution: cost=[-10.0, ...\n\
             INFO: [PADRAO_MUT] Instance data/inst_0.csv - maxVal = Solution: cost=[-12.5, ...\n",
        );
        assert_eq!(
            csv,
            "Instance,PADRAO,PADRAO_POP,PADRAO_MUT,PADRAO_EVOL1,PADRAO_EVOL2\r\n\
             1,10.0,N/A,12.5,N/A,N/A\r\n"
        );
        assert_eq!(summary.lines_processed, 2);
        assert_eq!(summary.measurements, 2);
        assert_eq!(summary.instances, 1);
        assert_eq!(summary.rows_written, 1);
        assert!(summary.unknown_aliases.is_empty());
    }

    #[test]
    fn test_later_line_wins() {
        let (csv, _) = run(
            "INFO: [PADRAO] Instance inst_1.txt - maxVal = Solution: cost=[-1.0\n\
             INFO: [PADRAO] Instance inst_1.txt - maxVal = Solution: cost=[-2.0\n",
        );
        assert!(csv.contains("\r\n2,2.0,N/A,N/A,N/A,N/A\r\n"), "{csv:?}");
        assert!(!csv.contains("1.0"));
    }

    #[test]
    fn test_unknown_alias_reported() {
        let (_, summary) = run("INFO: [BASELINE] Instance inst_0.txt - maxVal = Solution: cost=[-3\n");
        assert_eq!(summary.unknown_aliases, vec!["BASELINE".to_string()]);
        assert_eq!(summary.rows_written, 1);
    }

    #[test]
    fn test_malformed_instance_aborts() {
        let mut summary = RunSummary::default();
        let err = summarise_content(
            "INFO: [PADRAO] Instance inst_x.txt - maxVal = Solution: cost=[-3\n",
            &PathBuf::from("run.log"),
            &PathBuf::from("summary.csv"),
            &VARIANT_ORDER,
            &mut summary,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            LogTabError::Parse(ParseError::MalformedInstance { .. })
        ));
    }
}
