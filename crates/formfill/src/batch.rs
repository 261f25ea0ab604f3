//! Sequential batch filling and export

use crate::compositor::{Compositor, RunConfig};
use crate::schema::{Field, Record};
use crate::{FillError, Result};
use chrono::Local;

/// A record that could not be rendered, with its batch position
#[derive(Debug)]
pub struct BatchFailure {
    /// Zero-based index of the record in the input sequence
    pub index: usize,
    /// The error that aborted the record
    pub error: FillError,
}

/// The result of a batch run: the exported document plus per-record counts
#[derive(Debug)]
pub struct BatchOutcome {
    /// Multi-page PDF over all successfully rendered records, in input order
    pub pdf_bytes: Vec<u8>,
    /// Number of records rendered and exported
    pub succeeded: usize,
    /// Records skipped after a render failure
    pub skipped: Vec<BatchFailure>,
}

impl BatchOutcome {
    /// Number of records that were skipped
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Fill every record and export the results as one multi-page PDF
///
/// Records are processed strictly in order. A record whose rendering fails
/// is skipped and reported in the outcome; the batch continues with the next
/// record. When no record succeeds the export fails with
/// [`pdf_export::ExportError::EmptyBatchError`].
pub fn run_batch(config: &RunConfig, records: &[Record]) -> Result<BatchOutcome> {
    run_batch_with_progress(config, records, |_, _| {})
}

/// Like [`run_batch`], reporting progress after each record
///
/// `progress` receives `(completed, total)` where completed counts both
/// rendered and skipped records.
pub fn run_batch_with_progress(
    config: &RunConfig,
    records: &[Record],
    mut progress: impl FnMut(usize, usize),
) -> Result<BatchOutcome> {
    let compositor = Compositor::new(config)?;
    let today = Local::now().format("%d/%m/%Y").to_string();

    let mut pages = Vec::with_capacity(records.len());
    let mut skipped = Vec::new();
    for (index, record) in records.iter().enumerate() {
        let record = with_defaults(record, &today);
        match compositor.fill(&record) {
            Ok(page) => pages.push(page),
            Err(error) => skipped.push(BatchFailure { index, error }),
        }
        progress(index + 1, records.len());
    }

    let pdf_bytes = pdf_export::export_multi(&pages)?;

    Ok(BatchOutcome {
        pdf_bytes,
        succeeded: pages.len(),
        skipped,
    })
}

/// Tabular default policy: absent text fields become empty strings and an
/// absent date becomes today's date
fn with_defaults(record: &Record, today: &str) -> Record {
    let mut filled = record.clone();
    for field in Field::ALL {
        if filled.get(field).is_some() {
            continue;
        }
        match field {
            Field::Date => filled.set(field, today),
            _ => filled.set(field, ""),
        };
    }
    filled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_defaults_fills_absent_fields() {
        let record = Record::new().with_name("Asha");

        let filled = with_defaults(&record, "25/08/2026");

        assert_eq!(filled.get(Field::Name), Some("Asha"));
        assert_eq!(filled.get(Field::Age), Some(""));
        assert_eq!(filled.get(Field::Sex), Some(""));
        assert_eq!(filled.get(Field::Disease), Some(""));
        assert_eq!(filled.get(Field::Date), Some("25/08/2026"));
    }

    #[test]
    fn test_with_defaults_keeps_present_values() {
        let record = Record::new().with_age("34").with_date("01/01/2020");

        let filled = with_defaults(&record, "25/08/2026");

        assert_eq!(filled.get(Field::Age), Some("34"));
        assert_eq!(filled.get(Field::Date), Some("01/01/2020"));
    }

    #[test]
    fn test_with_defaults_does_not_mutate_input() {
        let record = Record::new();

        let _ = with_defaults(&record, "25/08/2026");

        assert_eq!(record.get(Field::Date), None);
    }
}
