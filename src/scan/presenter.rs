//! Read-only view of the scan results for a grouped list
//!
//! Groups are the results of one scan each, rows are the messages of that
//! scan (a row is a message, not a record). A row's text is every record of
//! the message, one formatted block per record.

use itertools::Itertools as _;
use nfc_reader_ndef::NdefRecord;

use super::{error::ListError, store::ScanResultStore};

type Error = ListError;
type Result<T, E = Error> = std::result::Result<T, E>;

/// What a grouped list needs to render itself
pub trait ScanListDataSource {
    /// One group per successful scan
    fn group_count(&self) -> usize;

    /// Rows of a group, a row is one NDEF message of that scan (not a record)
    fn row_count(&self, group: usize) -> Result<usize>;

    /// Every record of the message at `row`, formatted and joined by newlines
    fn row_text(&self, group: usize, row: usize) -> Result<String>;

    fn group_title(&self, group: usize) -> String;
}

/// Index or count for the frontend, saturating instead of wrapping
pub(crate) fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[derive(Debug, Clone, Copy)]
pub struct ScanListPresenter<'a> {
    store: &'a ScanResultStore,
    title: &'a str,
}

impl<'a> ScanListPresenter<'a> {
    pub fn new(store: &'a ScanResultStore, title: &'a str) -> Self {
        Self { store, title }
    }

    fn group_out_of_range(&self, index: usize) -> Error {
        ListError::GroupOutOfRange {
            index: saturating_u32(index),
            count: saturating_u32(self.store.len()),
        }
    }
}

impl ScanListDataSource for ScanListPresenter<'_> {
    fn group_count(&self) -> usize {
        self.store.len()
    }

    fn row_count(&self, group: usize) -> Result<usize> {
        self.store
            .group(group)
            .map(<[_]>::len)
            .ok_or_else(|| self.group_out_of_range(group))
    }

    fn row_text(&self, group: usize, row: usize) -> Result<String> {
        let count = self.row_count(group)?;
        let message = self.store.message(group, row).ok_or(ListError::RowOutOfRange {
            group: saturating_u32(group),
            row: saturating_u32(row),
            count: saturating_u32(count),
        })?;

        Ok(message.iter().map(format_record).join("\n"))
    }

    fn group_title(&self, _group: usize) -> String {
        self.title.to_string()
    }
}

/// Render a record as four `Field: value` lines, byte fields as lowercase hex
pub fn format_record(record: &NdefRecord) -> String {
    format!(
        "TypeNameFormat: {}\nIdentifier: {}\nType: {}\nPayload: {}",
        record.type_name_format,
        record.identifier_hex(),
        record.type_hex(),
        record.payload_hex(),
    )
}

#[uniffi::export]
fn format_ndef_record(record: NdefRecord) -> String {
    format_record(&record)
}

#[cfg(test)]
mod tests {
    use nfc_reader_ndef::{NdefMessage, TypeNameFormat};
    use pretty_assertions::assert_eq;

    use super::*;

    fn text_record() -> NdefRecord {
        NdefRecord::new(TypeNameFormat::WellKnown, vec![], b"T".to_vec(), vec![0x01])
    }

    fn uri_record() -> NdefRecord {
        NdefRecord::new(
            TypeNameFormat::WellKnown,
            vec![0x0A],
            b"U".to_vec(),
            b"\x04example.com".to_vec(),
        )
    }

    fn mime_record() -> NdefRecord {
        NdefRecord::new(
            TypeNameFormat::Mime,
            b"id".to_vec(),
            b"application/json".to_vec(),
            b"{}".to_vec(),
        )
    }

    #[test]
    fn formats_fields_in_fixed_order() {
        let formatted = format_record(&text_record());
        assert_eq!(
            formatted,
            "TypeNameFormat: well-known\nIdentifier: \nType: 54\nPayload: 01"
        );
    }

    #[test]
    fn format_is_deterministic() {
        let record = mime_record();
        let copy = record.clone();

        assert_eq!(format_record(&record), format_record(&record));
        assert_eq!(format_record(&record), format_record(&copy));
    }

    #[test]
    fn row_text_joins_records_with_single_newline() {
        let (a, b, c) = (text_record(), uri_record(), mime_record());

        let mut store = ScanResultStore::new();
        store.append(vec![NdefMessage::new(vec![a.clone(), b.clone(), c.clone()])]);

        let presenter = ScanListPresenter::new(&store, "title");
        let expected = format!("{}\n{}\n{}", format_record(&a), format_record(&b), format_record(&c));

        assert_eq!(presenter.row_text(0, 0).unwrap(), expected);
        assert!(!presenter.row_text(0, 0).unwrap().ends_with('\n'));
    }

    #[test]
    fn counts_follow_the_store() {
        let mut store = ScanResultStore::new();
        store.append(vec![NdefMessage::new(vec![text_record()])]);
        store.append(vec![
            NdefMessage::new(vec![uri_record()]),
            NdefMessage::new(vec![mime_record(), text_record()]),
        ]);

        let presenter = ScanListPresenter::new(&store, "title");
        assert_eq!(presenter.group_count(), 2);
        assert_eq!(presenter.row_count(0).unwrap(), 1);
        assert_eq!(presenter.row_count(1).unwrap(), 2);
    }

    #[test]
    fn out_of_range_is_an_error() {
        let mut store = ScanResultStore::new();
        let presenter = ScanListPresenter::new(&store, "title");
        assert_eq!(
            presenter.row_count(0),
            Err(ListError::GroupOutOfRange { index: 0, count: 0 })
        );

        store.append(vec![NdefMessage::new(vec![text_record()])]);
        let presenter = ScanListPresenter::new(&store, "title");

        let one_past_end = presenter.group_count();
        assert_eq!(
            presenter.row_count(one_past_end),
            Err(ListError::GroupOutOfRange { index: 1, count: 1 })
        );

        assert_eq!(
            presenter.row_text(0, 1),
            Err(ListError::RowOutOfRange { group: 0, row: 1, count: 1 })
        );

        assert!(matches!(
            presenter.row_text(3, 0),
            Err(ListError::GroupOutOfRange { index: 3, .. })
        ));
    }

    #[test]
    fn large_indexes_saturate() {
        assert_eq!(saturating_u32(7), 7);
        assert_eq!(saturating_u32(u32::MAX as usize), u32::MAX);
        assert_eq!(saturating_u32(usize::MAX), u32::MAX);

        let store = ScanResultStore::new();
        let presenter = ScanListPresenter::new(&store, "title");
        assert_eq!(
            presenter.row_count(usize::MAX),
            Err(ListError::GroupOutOfRange { index: u32::MAX, count: 0 })
        );
    }

    #[test]
    fn group_title_is_constant() {
        let store = ScanResultStore::new();
        let presenter = ScanListPresenter::new(&store, "NFC tag messages");

        assert_eq!(presenter.group_title(0), "NFC tag messages");
        assert_eq!(presenter.group_title(42), "NFC tag messages");
    }
}
