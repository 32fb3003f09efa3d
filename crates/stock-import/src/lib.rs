//! # stock-import
//!
//! CSV parsing and validation for bulk item import.
//!
//! The header row must contain at least the five required columns; extra
//! columns are ignored. Numeric fields are coerced leniently rather than
//! rejecting the row: `price` and `quantity` keep their leading integer
//! ("100abc" is 100) and fall back to 0 when there is none, with a warning
//! logged per coerced field so imports stay auditable.
//! Submission itself lives in `stock-client`; this crate never touches the
//! network.

mod error;

use std::io::Read;
use std::path::Path;

use stock_core::entities::NewItem;

pub use error::ImportError;

/// Columns every import file must provide, in validation-report order.
pub const REQUIRED_COLUMNS: [&str; 5] = ["title", "description", "price", "quantity", "category"];

/// A validated batch of import rows, ready for one bulk submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportBatch {
    rows: Vec<NewItem>,
}

impl ImportBatch {
    #[must_use]
    pub fn rows(&self) -> &[NewItem] {
        &self.rows
    }

    #[must_use]
    pub fn into_rows(self) -> Vec<NewItem> {
        self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First `n` rows, for the pre-submit preview table.
    #[must_use]
    pub fn preview(&self, n: usize) -> &[NewItem] {
        &self.rows[..self.rows.len().min(n)]
    }
}

/// Parse and validate a CSV stream into an import batch.
///
/// # Errors
///
/// `ImportError::MissingColumns` when the header lacks any required column
/// (naming exactly the missing ones — the file yields zero importable rows);
/// `ImportError::Csv` for a malformed stream.
pub fn parse<R: Read>(reader: R) -> Result<ImportBatch, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let positions: Vec<Option<usize>> = REQUIRED_COLUMNS
        .iter()
        .map(|column| headers.iter().position(|header| header == *column))
        .collect();

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .zip(&positions)
        .filter(|(_, position)| position.is_none())
        .map(|(column, _)| (*column).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ImportError::MissingColumns(missing));
    }

    // All five positions are present past the check above.
    let field = |record: &csv::StringRecord, slot: usize| -> String {
        positions[slot]
            .and_then(|index| record.get(index))
            .unwrap_or("")
            .to_string()
    };

    let mut rows = Vec::new();
    for (line, result) in csv_reader.records().enumerate() {
        let record = result?;
        let title = field(&record, 0);
        let description = field(&record, 1);
        let price = coerce_int(&field(&record, 2), "price", line + 2);
        let quantity = coerce_int(&field(&record, 3), "quantity", line + 2);
        let category = field(&record, 4);

        rows.push(NewItem {
            title,
            description: (!description.is_empty()).then_some(description),
            price,
            quantity,
            category,
        });
    }

    Ok(ImportBatch { rows })
}

/// Lenient integer coercion: the leading integer counts ("100abc" is 100,
/// "12.5" is 12), a value without one becomes 0. The row always survives;
/// every coercion that alters data is logged so imports stay auditable.
fn coerce_int(raw: &str, column: &str, line: usize) -> i64 {
    match leading_int(raw) {
        Some((value, rest)) => {
            if !rest.is_empty() {
                tracing::warn!(line, column, value = raw, "trailing characters dropped from numeric field");
            }
            value
        }
        None => {
            tracing::warn!(line, column, value = raw, "unparseable number coerced to 0");
            0
        }
    }
}

/// Prefix integer parse: an optional sign followed by digits, returned with
/// whatever trailed them. `None` when the value has no leading integer.
fn leading_int(raw: &str) -> Option<(i64, &str)> {
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let end = digits
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(digits.len());
    let value: i64 = digits[..end].parse().ok()?;
    Some((sign * value, &digits[end..]))
}

/// The downloadable starter file: header plus one example row, prefixed with
/// a UTF-8 BOM so spreadsheet apps detect the encoding. Pure serialization,
/// no network.
#[must_use]
pub fn template() -> String {
    let header = REQUIRED_COLUMNS.join(",");
    format!("\u{feff}{header}\nExample Item,Details here,100,50,Electronics\n")
}

/// Write the starter template to `path`.
///
/// # Errors
///
/// `ImportError::Io` when the file cannot be written.
pub fn write_template(path: &Path) -> Result<(), ImportError> {
    std::fs::write(path, template())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_a_well_formed_file() {
        let csv = "title,description,price,quantity,category\n\
                   Bolt M6,Steel hex bolt,3,140,Hardware\n\
                   Washer,,1,500,Hardware\n";

        let batch = parse(csv.as_bytes()).expect("should parse");
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.rows()[0].title, "Bolt M6");
        assert_eq!(batch.rows()[0].price, 3);
        assert_eq!(batch.rows()[1].description, None);
        assert_eq!(batch.rows()[1].quantity, 500);
    }

    #[test]
    fn missing_columns_are_named_exactly_and_in_order() {
        let csv = "title,price,category\nBolt,3,Hardware\n";

        let err = parse(csv.as_bytes()).expect_err("should fail");
        match err {
            ImportError::MissingColumns(missing) => {
                assert_eq!(missing, vec!["description".to_string(), "quantity".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_column_error_message_lists_names() {
        let err = parse("title\nBolt\n".as_bytes()).expect_err("should fail");
        assert_eq!(
            err.to_string(),
            "missing columns: description, price, quantity, category"
        );
    }

    #[test]
    fn non_numeric_fields_coerce_to_zero_without_dropping_the_row() {
        let csv = "title,description,price,quantity,category\n\
                   Bolt,Steel,abc,xyz,Hardware\n\
                   Nut,Steel,,7,Hardware\n";

        let batch = parse(csv.as_bytes()).expect("should parse");
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.rows()[0].price, 0);
        assert_eq!(batch.rows()[0].quantity, 0);
        assert_eq!(batch.rows()[1].price, 0);
        assert_eq!(batch.rows()[1].quantity, 7);
    }

    #[test]
    fn leading_digits_count_and_trailing_junk_is_dropped() {
        let csv = "title,description,price,quantity,category\n\
                   Bolt,Steel,100abc,12.5,Hardware\n\
                   Credit,Adjustment,-3kg,+40pcs,Hardware\n";

        let batch = parse(csv.as_bytes()).expect("should parse");
        assert_eq!(batch.rows()[0].price, 100);
        assert_eq!(batch.rows()[0].quantity, 12);
        assert_eq!(batch.rows()[1].price, -3);
        assert_eq!(batch.rows()[1].quantity, 40);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let csv = "sku,title,description,price,quantity,category,note\n\
                   B-1,Bolt,Steel,3,140,Hardware,keep dry\n";

        let batch = parse(csv.as_bytes()).expect("should parse");
        assert_eq!(batch.len(), 1);
        assert_eq!(batch.rows()[0].title, "Bolt");
        assert_eq!(batch.rows()[0].category, "Hardware");
    }

    #[test]
    fn header_only_file_yields_an_empty_batch() {
        let batch =
            parse("title,description,price,quantity,category\n".as_bytes()).expect("should parse");
        assert!(batch.is_empty());
        assert!(batch.preview(5).is_empty());
    }

    #[test]
    fn preview_is_bounded_by_batch_size() {
        let csv = "title,description,price,quantity,category\n\
                   A,,1,1,X\nB,,2,2,X\nC,,3,3,X\n";
        let batch = parse(csv.as_bytes()).expect("should parse");
        assert_eq!(batch.preview(2).len(), 2);
        assert_eq!(batch.preview(10).len(), 3);
    }

    #[test]
    fn template_round_trips_through_the_parser() {
        // The BOM must not break the header detection of our own parser.
        let rendered = template();
        assert!(rendered.starts_with('\u{feff}'));

        let without_bom = rendered.trim_start_matches('\u{feff}');
        let batch = parse(without_bom.as_bytes()).expect("template should parse");
        assert_eq!(batch.len(), 1);
        assert_eq!(batch.rows()[0].title, "Example Item");
        assert_eq!(batch.rows()[0].price, 100);
        assert_eq!(batch.rows()[0].quantity, 50);
    }

    #[test]
    fn template_file_is_written_to_disk() {
        let dir = tempfile::TempDir::new().expect("tmp dir");
        let path = dir.path().join("template.csv");

        write_template(&path).expect("should write");
        let content = std::fs::read_to_string(&path).expect("read back");
        assert!(content.contains("title,description,price,quantity,category"));
    }
}
