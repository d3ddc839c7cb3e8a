//! From spreadsheet rows to searchable records.

use column_suggest::{column_values, CorpusIndex, Matcher, Normalization, RecordId, SearchError};

use super::common::approximate;

fn row(cells: &[Option<&str>]) -> Vec<Option<String>> {
    cells.iter().map(|c| c.map(str::to_string)).collect()
}

fn sheet() -> Vec<Vec<Option<String>>> {
    vec![
        row(&[Some("Id"), Some("Title")]),
        row(&[Some("1"), Some("Software Engineer")]),
        row(&[Some("2"), None]),
        row(&[Some("3")]),
        row(&[Some("4"), Some("Senior Engineer")]),
    ]
}

#[test]
fn test_missing_cells_keep_row_positions() {
    let values = column_values(&sheet(), 1, true).unwrap();
    assert_eq!(values.len(), 4);

    let index = CorpusIndex::build_optional(values, Normalization::Alphanumeric);
    assert_eq!(index.len(), 4);
    assert_eq!(index.get(RecordId(1)).unwrap().original, "");
    assert_eq!(index.get(RecordId(2)).unwrap().original, "");

    let results = Matcher::new(approximate()).unwrap().search(&index, "engineer");
    let ids: Vec<u32> = results.iter().map(|r| r.record.get()).collect();
    assert_eq!(ids, vec![0, 3]);
}

#[test]
fn test_header_kept_when_not_skipped() {
    let values = column_values(&sheet(), 1, false).unwrap();
    assert_eq!(values[0].as_deref(), Some("Title"));
    assert_eq!(values.len(), 5);
}

#[test]
fn test_column_out_of_bounds() {
    let err = column_values(&sheet(), 2, true).unwrap_err();
    assert!(matches!(err, SearchError::ColumnOutOfBounds { column: 2, width: 2 }));
    assert!(err.is_configuration());
}

#[test]
fn test_empty_sheet_is_empty_corpus() {
    let values = column_values(&[], 5, true).unwrap();
    assert!(values.is_empty());
    let index = CorpusIndex::build_optional(values, Normalization::Lowercase);
    assert!(index.is_empty());
}
