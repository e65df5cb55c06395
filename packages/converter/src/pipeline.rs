//! Conversion pipeline: tabular source -> row mapper -> record sink.
//!
//! The source and sink are traits so the pipeline can be exercised with
//! in-memory fixtures instead of real files. Execution is a single
//! synchronous batch: read fully, transform fully, write fully. A read
//! failure means nothing is ever written.

use crate::error::Result;
use crate::mapping::{header, is_empty_row, map_record};

/// A tabular data source that yields rows of raw text cells.
pub trait TableSource {
    /// Read all data rows in their original order.
    fn read_rows(&mut self) -> Result<Vec<Vec<String>>>;
}

/// A delimited-text destination that accepts rows of text fields.
pub trait RecordSink {
    /// Serialize the full ordered sequence of records.
    fn write_rows(&mut self, rows: &[Vec<String>]) -> Result<()>;
}

/// Counts reported after a successful conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionReport {
    /// Rows read from the source, including empty ones.
    pub rows_read: usize,

    /// Records written to the sink, including the header row.
    pub records_written: usize,
}

/// Transform input rows into the full output record sequence.
///
/// Rows where every field is empty are dropped; the fixed header is
/// prepended; every retained row is mapped in original encounter order.
/// Pure: no I/O happens here.
#[must_use]
pub fn convert_rows(input: Vec<Vec<String>>) -> Vec<Vec<String>> {
    let mut output = Vec::with_capacity(input.len() + 1);
    output.push(header());

    for row in input {
        if is_empty_row(&row) {
            continue;
        }
        output.push(map_record(&row));
    }

    output
}

/// Run the full conversion from source to sink.
///
/// # Arguments
/// * `source` - Tabular reader yielding rows of text cells
/// * `sink` - Delimited writer accepting rows of text fields
///
/// # Returns
/// A [`ConversionReport`] with row counts for the CLI summary.
pub fn run(source: &mut dyn TableSource, sink: &mut dyn RecordSink) -> Result<ConversionReport> {
    let rows = source.read_rows()?;
    let rows_read = rows.len();
    tracing::debug!(rows_read, "Read source rows");

    let output = convert_rows(rows);
    let records_written = output.len();

    sink.write_rows(&output)?;
    tracing::debug!(records_written, "Wrote output records");

    Ok(ConversionReport {
        rows_read,
        records_written,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::ConverterError;

    /// In-memory source fixture.
    struct VecSource(Vec<Vec<String>>);

    impl TableSource for VecSource {
        fn read_rows(&mut self) -> Result<Vec<Vec<String>>> {
            Ok(self.0.clone())
        }
    }

    /// Source fixture that always fails.
    struct FailingSource;

    impl TableSource for FailingSource {
        fn read_rows(&mut self) -> Result<Vec<Vec<String>>> {
            Err(ConverterError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no such workbook",
            )))
        }
    }

    /// In-memory sink fixture that records what was written.
    #[derive(Default)]
    struct VecSink {
        rows: Vec<Vec<String>>,
        write_calls: usize,
    }

    impl RecordSink for VecSink {
        fn write_rows(&mut self, rows: &[Vec<String>]) -> Result<()> {
            self.rows = rows.to_vec();
            self.write_calls += 1;
            Ok(())
        }
    }

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|f| (*f).to_string()).collect()
    }

    fn sample_row(name: &str, id: &str) -> Vec<String> {
        row(&[
            "Gruppe",
            name,
            id,
            "Musterstraße 12",
            "20095",
            "Hamburg",
            "040 - 1234",
            "x@example.de",
        ])
    }

    #[test]
    fn test_convert_rows_prepends_header() {
        let output = convert_rows(vec![sample_row("A", "1")]);
        assert_eq!(output.len(), 2);
        assert_eq!(output[0][0], "Filialnummer");
        assert_eq!(output[1][0], "1");
    }

    #[test]
    fn test_row_count_law() {
        // n non-empty input rows produce n + 1 output records.
        let input = vec![
            sample_row("A", "1"),
            sample_row("B", "2"),
            sample_row("C", "3"),
        ];
        let output = convert_rows(input);
        assert_eq!(output.len(), 4);
    }

    #[test]
    fn test_empty_rows_dropped_without_affecting_order() {
        let input = vec![
            sample_row("A", "1"),
            row(&["", "", "", "", "", "", "", ""]),
            sample_row("B", "2"),
        ];
        let output = convert_rows(input);

        assert_eq!(output.len(), 3);
        assert_eq!(output[1][0], "1");
        assert_eq!(output[2][0], "2");
    }

    #[test]
    fn test_field_count_law() {
        // Every output record has exactly 11 fields, even for rows that
        // are mostly empty.
        let input = vec![sample_row("A", "1"), row(&["", "x"]), row(&["y"])];
        let output = convert_rows(input);

        for record in &output {
            assert_eq!(record.len(), 11);
        }
    }

    #[test]
    fn test_header_emitted_for_empty_input() {
        let output = convert_rows(Vec::new());
        assert_eq!(output.len(), 1);
        assert_eq!(output[0], header());
    }

    #[test]
    fn test_run_reports_counts() {
        let mut source = VecSource(vec![
            sample_row("A", "1"),
            row(&["", "", "", "", "", "", "", ""]),
        ]);
        let mut sink = VecSink::default();

        let report = run(&mut source, &mut sink).unwrap();

        assert_eq!(report.rows_read, 2);
        assert_eq!(report.records_written, 2); // header + 1 record
        assert_eq!(sink.rows.len(), 2);
    }

    #[test]
    fn test_read_failure_writes_nothing() {
        let mut source = FailingSource;
        let mut sink = VecSink::default();

        let result = run(&mut source, &mut sink);

        assert!(result.is_err());
        assert_eq!(sink.write_calls, 0, "sink must not be touched on read failure");
    }
}
