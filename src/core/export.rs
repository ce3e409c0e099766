// logtab - core/export.rs
//
// CSV rendering of the result table.
// Core layer: writes to any Write trait object.
//
// Records are terminated with CRLF, the conventional CSV line ending.

use crate::core::model::ResultTable;
use crate::util::constants::{INSTANCE_COLUMN, MISSING_VALUE};
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Render `table` as CSV with one column per entry of `variant_order`.
///
/// Writes: Instance, then each variant in the given order. Rows follow
/// ascending instance order; absent values are written as `N/A`.
/// `export_path` is only used for error context. Returns the number of data
/// rows written.
pub fn render_csv<W: Write>(
    table: &ResultTable,
    variant_order: &[&str],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let csv_err = |source| ExportError::Csv {
        path: export_path.to_path_buf(),
        source,
    };

    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    let header = std::iter::once(INSTANCE_COLUMN).chain(variant_order.iter().copied());
    csv_writer.write_record(header).map_err(csv_err)?;

    let mut count = 0;
    for (instance, row) in table.rows() {
        let instance = instance.to_string();
        let cells = variant_order
            .iter()
            .map(|alias| row.get(*alias).map(String::as_str).unwrap_or(MISSING_VALUE));
        csv_writer
            .write_record(std::iter::once(instance.as_str()).chain(cells))
            .map_err(csv_err)?;
        count += 1;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::constants::VARIANT_ORDER;
    use std::path::PathBuf;

    fn render(table: &ResultTable) -> String {
        let mut buf = Vec::new();
        render_csv(table, &VARIANT_ORDER, &mut buf, &PathBuf::from("summary.csv")).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_header_only_for_empty_table() {
        let output = render(&ResultTable::new());
        assert_eq!(
            output,
            "Instance,PADRAO,PADRAO_POP,PADRAO_MUT,PADRAO_EVOL1,PADRAO_EVOL2\r\n"
        );
    }

    #[test]
    fn test_missing_variants_render_na() {
        let mut table = ResultTable::new();
        table.insert(1, "PADRAO", "10.0");
        table.insert(1, "PADRAO_MUT", "12.5");

        let output = render(&table);
        let rows: Vec<_> = output.split("\r\n").collect();
        assert_eq!(rows[1], "1,10.0,N/A,12.5,N/A,N/A");
        assert_eq!(rows[2], "");
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_column_order_ignores_insertion_order() {
        let mut table = ResultTable::new();
        table.insert(4, "PADRAO_EVOL2", "5");
        table.insert(4, "PADRAO_EVOL1", "4");
        table.insert(4, "PADRAO_MUT", "3");
        table.insert(4, "PADRAO_POP", "2");
        table.insert(4, "PADRAO", "1");

        let output = render(&table);
        assert!(output.ends_with("\r\n4,1,2,3,4,5\r\n"), "{output:?}");
    }

    #[test]
    fn test_rows_sorted_numerically_not_lexically() {
        let mut table = ResultTable::new();
        table.insert(10, "PADRAO", "a");
        table.insert(2, "PADRAO", "b");
        table.insert(1, "PADRAO", "c");

        let output = render(&table);
        let firsts: Vec<_> = output
            .lines()
            .skip(1)
            .map(|l| l.split(',').next().unwrap())
            .collect();
        assert_eq!(firsts, vec!["1", "2", "10"]);
    }

    #[test]
    fn test_unknown_aliases_not_rendered() {
        let mut table = ResultTable::new();
        table.insert(1, "EXPERIMENTAL", "7");
        let output = render(&table);
        assert!(!output.contains('7'));
        assert!(output.contains("1,N/A,N/A,N/A,N/A,N/A\r\n"));
    }

    #[test]
    fn test_returns_row_count_and_honours_custom_order() {
        let mut table = ResultTable::new();
        table.insert(1, "B", "2");
        table.insert(2, "A", "1");
        let mut buf = Vec::new();
        let count = render_csv(&table, &["B", "A"], &mut buf, &PathBuf::from("x.csv")).unwrap();
        assert_eq!(count, 2);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Instance,B,A\r\n1,2,N/A\r\n2,N/A,1\r\n"
        );
    }

    #[test]
    fn test_fields_needing_quotes_are_quoted() {
        let mut table = ResultTable::new();
        table.insert(1, "A", "1,5");
        let mut buf = Vec::new();
        render_csv(&table, &["A"], &mut buf, &PathBuf::from("x.csv")).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Instance,A\r\n1,\"1,5\"\r\n");
    }
}
