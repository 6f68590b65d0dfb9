//! In-memory tables of mixed-type cells.
//!
//! A [`Table`] is an immutable value: projection, filtering and union all build
//! a new table and leave the source untouched.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::DataError;

/// Cell strings read as missing values. `None` is deliberately absent: the
/// diaries use it as a literal mask type.
const NA_VALUES: &[&str] = &[
    "", "#N/A", "#NA", "<NA>", "N/A", "n/a", "NA", "NaN", "nan", "-nan", "NULL", "null",
];

/// A single table cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Number(f64),
    Text(String),
}

impl Value {
    /// Infer a cell from its CSV representation.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if NA_VALUES.contains(&trimmed) {
            return Self::Null;
        }
        match trimmed.parse::<f64>() {
            Ok(number) if number.is_finite() => Self::Number(number),
            _ => Self::Text(raw.to_string()),
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// How [`Table::concat`] treats tables whose headers differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaMode {
    /// Every table must have exactly the columns of the first one.
    Strict,
    /// Columns are aligned by name; cells a table lacks become `Null`.
    Permissive,
}

impl SchemaMode {
    #[must_use]
    pub const fn from_strict(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::Permissive }
    }
}

/// Borrowed view of one table row.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    columns: &'a [String],
    values: &'a [Value],
}

impl<'a> Row<'a> {
    /// Cell of the named column, `None` if the table has no such column.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&'a Value> {
        self.columns
            .iter()
            .position(|name| name == column)
            .map(|index| &self.values[index])
    }

    #[must_use]
    pub const fn values(&self) -> &'a [Value] {
        self.values
    }
}

/// Named columns over rows of [`Value`] cells, in source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Build a table, checking every row has one cell per column.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::RaggedRow`] for the first row of the wrong width.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self, DataError> {
        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != columns.len())
        {
            return Err(DataError::RaggedRow {
                row,
                expected: columns.len(),
                found: cells.len(),
            });
        }
        Ok(Self { columns, rows })
    }

    /// A table with the given header and no rows.
    #[must_use]
    pub const fn empty(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Iterate rows as name-addressable views.
    pub fn iter(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(|values| Row {
            columns: &self.columns,
            values,
        })
    }

    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Cells of one column, top to bottom.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::MissingColumn`] if the table has no such column.
    pub fn column(&self, name: &str) -> Result<Vec<&Value>, DataError> {
        let index = self.require_column(name)?;
        Ok(self.rows.iter().map(|row| &row[index]).collect())
    }

    /// Numeric cells of a column; text and missing cells are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::MissingColumn`] if the table has no such column.
    pub fn numbers(&self, name: &str) -> Result<Vec<f64>, DataError> {
        Ok(self
            .column(name)?
            .into_iter()
            .filter_map(Value::as_f64)
            .collect())
    }

    /// Non-missing cells of a column rendered as strings.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::MissingColumn`] if the table has no such column.
    pub fn texts(&self, name: &str) -> Result<Vec<String>, DataError> {
        Ok(self
            .column(name)?
            .into_iter()
            .filter(|value| !value.is_null())
            .map(ToString::to_string)
            .collect())
    }

    /// Keep only the requested columns that exist, in the table's column order.
    ///
    /// Unknown names are ignored rather than rejected; callers may ask for a
    /// superset of what a given file carries.
    #[must_use]
    pub fn project(&self, names: &[&str]) -> Self {
        let keep: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .filter(|(_, column)| names.contains(&column.as_str()))
            .map(|(index, _)| index)
            .collect();

        Self {
            columns: keep.iter().map(|&index| self.columns[index].clone()).collect(),
            rows: self
                .rows
                .iter()
                .map(|row| keep.iter().map(|&index| row[index].clone()).collect())
                .collect(),
        }
    }

    /// Rows for which `predicate` holds, in order.
    #[must_use]
    pub fn filter_rows<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(Row<'_>) -> bool,
    {
        let rows = self
            .iter()
            .filter(|row| predicate(*row))
            .map(|row| row.values.to_vec())
            .collect();
        Self {
            columns: self.columns.clone(),
            rows,
        }
    }

    /// Rows in `range`, clamped to the table length.
    #[must_use]
    pub fn slice(&self, range: Range<usize>) -> Self {
        let end = range.end.min(self.rows.len());
        let start = range.start.min(end);
        Self {
            columns: self.columns.clone(),
            rows: self.rows[start..end].to_vec(),
        }
    }

    /// Stack tables row-wise, in iteration order, without deduplication.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::SchemaMismatch`] in [`SchemaMode::Strict`] when a
    /// table's columns differ from the first table's.
    pub fn concat<I>(tables: I, mode: SchemaMode) -> Result<Self, DataError>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut tables = tables.into_iter();
        let Some(first) = tables.next() else {
            return Ok(Self::default());
        };

        let Self {
            mut columns,
            mut rows,
        } = first;

        for (offset, table) in tables.enumerate() {
            let block = offset + 2;
            if table.columns == columns {
                rows.extend(table.rows);
                continue;
            }

            if mode == SchemaMode::Strict {
                return Err(DataError::SchemaMismatch {
                    block,
                    expected: columns,
                    found: table.columns,
                });
            }

            tracing::warn!(
                block,
                expected = ?columns,
                found = ?table.columns,
                "aligning table with differing columns by name"
            );

            for name in &table.columns {
                if !columns.contains(name) {
                    columns.push(name.clone());
                    for row in &mut rows {
                        row.push(Value::Null);
                    }
                }
            }

            let positions: Vec<Option<usize>> = columns
                .iter()
                .map(|column| table.columns.iter().position(|name| name == column))
                .collect();

            for row in table.rows {
                let mut cells: Vec<Option<Value>> = row.into_iter().map(Some).collect();
                rows.push(
                    positions
                        .iter()
                        .map(|position| {
                            position
                                .and_then(|index| cells[index].take())
                                .unwrap_or(Value::Null)
                        })
                        .collect(),
                );
            }
        }

        Ok(Self { columns, rows })
    }

    fn require_column(&self, name: &str) -> Result<usize, DataError> {
        self.column_index(name)
            .ok_or_else(|| DataError::MissingColumn(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    fn species_table(rows: &[(&str, &str)]) -> Table {
        Table::new(
            cols(&["barcode", "species"]),
            rows.iter()
                .map(|(barcode, species)| vec![Value::from(*barcode), Value::from(*species)])
                .collect(),
        )
        .unwrap()
    }

    #[rstest]
    #[case("97.5", Value::Number(97.5))]
    #[case(" 12 ", Value::Number(12.0))]
    #[case("", Value::Null)]
    #[case("NaN", Value::Null)]
    #[case("None", Value::Text("None".into()))]
    #[case("inf", Value::Text("inf".into()))]
    #[case("Cutibacterium acnes", Value::Text("Cutibacterium acnes".into()))]
    fn values_are_inferred(#[case] raw: &str, #[case] expected: Value) {
        assert_eq!(Value::parse(raw), expected);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = Table::new(
            cols(&["a", "b"]),
            vec![vec![Value::Null, Value::Null], vec![Value::Null]],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DataError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn projection_keeps_table_order_and_drops_unknown_names() {
        let table = Table::new(
            cols(&["date", "masktype", "acne"]),
            vec![vec![
                Value::from("2021-05-01"),
                Value::from("None"),
                Value::Number(2.0),
            ]],
        )
        .unwrap();

        let projected = table.project(&["acne", "nope", "date"]);
        assert_eq!(projected.columns(), cols(&["date", "acne"]).as_slice());
        assert_eq!(
            projected.rows(),
            &[vec![Value::from("2021-05-01"), Value::Number(2.0)]]
        );
        assert_eq!(table.width(), 3, "source table is untouched");
    }

    #[test]
    fn projection_with_no_known_columns_keeps_row_count() {
        let table = species_table(&[("barcode01", "A"), ("barcode01", "B")]);
        let projected = table.project(&["missing"]);
        assert_eq!(projected.width(), 0);
        assert_eq!(projected.len(), 2);
    }

    #[test]
    fn numbers_skip_non_numeric_cells() {
        let table = Table::new(
            cols(&["sleep (h)"]),
            vec![
                vec![Value::Number(7.5)],
                vec![Value::Null],
                vec![Value::from("n.a.")],
                vec![Value::Number(6.0)],
            ],
        )
        .unwrap();
        assert_eq!(table.numbers("sleep (h)").unwrap(), vec![7.5, 6.0]);
        assert!(matches!(
            table.numbers("missing"),
            Err(DataError::MissingColumn(_))
        ));
    }

    #[test]
    fn filter_and_slice_preserve_order() {
        let table = species_table(&[
            ("barcode01", "A"),
            ("barcode02", "B"),
            ("barcode01", "C"),
        ]);
        let filtered = table.filter_rows(|row| {
            row.get("barcode").and_then(Value::as_str) == Some("barcode01")
        });
        assert_eq!(filtered.texts("species").unwrap(), vec!["A", "C"]);

        assert_eq!(table.slice(1..10).texts("species").unwrap(), vec!["B", "C"]);
        assert!(table.slice(5..8).is_empty());
    }

    #[test]
    fn concat_stacks_in_order() {
        let first = species_table(&[("barcode01", "A"), ("barcode01", "B")]);
        let second = species_table(&[("barcode02", "C")]);
        let stacked = Table::concat([first.clone(), second], SchemaMode::Strict).unwrap();

        assert_eq!(stacked.len(), 3);
        assert_eq!(stacked.slice(0..2), first);
        assert_eq!(stacked.texts("species").unwrap(), vec!["A", "B", "C"]);
    }

    #[test]
    fn concat_of_nothing_is_empty() {
        let stacked = Table::concat(Vec::new(), SchemaMode::Strict).unwrap();
        assert!(stacked.is_empty());
        assert_eq!(stacked.width(), 0);
    }

    #[test]
    fn strict_concat_rejects_differing_headers() {
        let first = species_table(&[("barcode01", "A")]);
        let second = Table::new(cols(&["species"]), vec![vec![Value::from("B")]]).unwrap();
        let err = Table::concat([first, second], SchemaMode::Strict).unwrap_err();
        assert!(matches!(err, DataError::SchemaMismatch { block: 2, .. }));
    }

    #[test]
    fn permissive_concat_aligns_by_name() {
        let first = species_table(&[("barcode01", "A")]);
        let second = Table::new(
            cols(&["species", "reads"]),
            vec![vec![Value::from("B"), Value::Number(10.0)]],
        )
        .unwrap();

        let stacked = Table::concat([first, second], SchemaMode::Permissive).unwrap();
        assert_eq!(
            stacked.columns(),
            cols(&["barcode", "species", "reads"]).as_slice()
        );
        assert_eq!(
            stacked.rows(),
            &[
                vec![Value::from("barcode01"), Value::from("A"), Value::Null],
                vec![Value::Null, Value::from("B"), Value::Number(10.0)],
            ]
        );
    }

    #[test]
    fn serializes_as_columns_and_rows() {
        let table = Table::new(
            cols(&["species", "reads"]),
            vec![vec![Value::from("A"), Value::Null]],
        )
        .unwrap();
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "columns": ["species", "reads"], "rows": [["A", null]] })
        );
    }
}
