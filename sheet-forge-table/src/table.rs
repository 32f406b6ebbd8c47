//! CSV table loading.
//!
//! Sheets are exported from a spreadsheet as UTF-8 CSV, often with a BOM.
//! The first row is the header; header cells are trimmed so that stray
//! spaces typed into a column title do not break lookups.

use std::path::Path;

use crate::error::TableError;
use crate::records::RecordMapper;

const BOM: char = '\u{feff}';

/// Trimmed column names in sheet order. Names may repeat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    names: Vec<String>,
}

impl Header {
    pub fn new<S: AsRef<str>>(names: &[S]) -> Self {
        Self {
            names: names.iter().map(|n| n.as_ref().trim().to_string()).collect(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Index of the first column called `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Indices of every column called `name`, in sheet order.
    pub fn indices_of(&self, name: &str) -> Vec<usize> {
        self.names
            .iter()
            .enumerate()
            .filter_map(|(i, n)| (n == name).then_some(i))
            .collect()
    }

    /// Names from `required` that do not appear in the header.
    pub fn missing<S: AsRef<str>>(&self, required: &[S]) -> Vec<String> {
        required
            .iter()
            .map(AsRef::as_ref)
            .filter(|name| !self.contains(name))
            .map(str::to_string)
            .collect()
    }
}

/// One data row, borrowed from its [`Table`].
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    line: usize,
    cells: &'a [String],
    header: &'a Header,
}

impl<'a> Row<'a> {
    /// 1-based row number in the sheet (the header is line 1).
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn header(&self) -> &'a Header {
        self.header
    }

    /// Untrimmed cells, padded to at least the header width.
    pub fn cells(&self) -> &'a [String] {
        self.cells
    }

    /// Trimmed value of the first column called `name`; empty if absent.
    pub fn get(&self, name: &str) -> &'a str {
        self.get_opt(name).unwrap_or("")
    }

    /// Trimmed value of `name`, or `None` if the sheet has no such column.
    pub fn get_opt(&self, name: &str) -> Option<&'a str> {
        self.header.index_of(name).map(|i| self.at(i))
    }

    /// Trimmed value at `index`; empty if out of range.
    pub fn at(&self, index: usize) -> &'a str {
        self.raw_at(index).trim()
    }

    /// Untrimmed value at `index`; empty if out of range.
    pub fn raw_at(&self, index: usize) -> &'a str {
        self.cells.get(index).map_or("", String::as_str)
    }
}

/// A loaded sheet: header plus data rows.
#[derive(Debug, Clone)]
pub struct Table {
    name: String,
    header: Header,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Load a table from a CSV file.
    ///
    /// The table is named after the file for error messages.
    pub fn open(path: &Path) -> Result<Self, TableError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| TableError::io(path.display().to_string(), e))?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("table")
            .to_string();
        Self::parse(name, &contents)
    }

    /// Parse CSV content. `name` is used in error messages.
    pub fn parse(name: impl Into<String>, content: &str) -> Result<Self, TableError> {
        let name = name.into();
        let content = content.strip_prefix(BOM).unwrap_or(content);

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(content.as_bytes());
        let mut records = reader.records();

        let header = match records.next() {
            Some(record) => {
                let record = record?;
                Header::new(&record.iter().collect::<Vec<_>>())
            }
            None => return Err(TableError::empty_table(name)),
        };

        let mut rows = Vec::new();
        for record in records {
            let record = record?;
            let mut cells: Vec<String> = record.iter().map(str::to_string).collect();
            if cells.len() < header.len() {
                cells.resize(header.len(), String::new());
            }
            rows.push(cells);
        }

        log::debug!("Loaded {name}: {} columns, {} rows", header.len(), rows.len());
        Ok(Self { name, header, rows })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().enumerate().map(|(i, cells)| Row {
            line: i + 2,
            cells,
            header: &self.header,
        })
    }

    /// Fail with [`TableError::MissingColumns`] unless every name is present.
    pub fn require<S: AsRef<str>>(&self, required: &[S]) -> Result<(), TableError> {
        let missing = self.header.missing(required);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(TableError::MissingColumns {
                table: self.name.clone(),
                missing,
                found: self.header.names().to_vec(),
            })
        }
    }

    /// Run `mapper` over every row, collecting the records it keeps.
    pub fn map_records<M: RecordMapper>(&self, mapper: &mut M) -> Result<Vec<M::Record>, TableError> {
        mapper.prepare(self)?;
        self.require(&mapper.required_columns())?;

        let mut records = Vec::new();
        for row in self.rows() {
            match mapper.map_row(self.name(), &row)? {
                Some(record) => records.push(record),
                None => log::debug!("{} line {}: skipped", self.name, row.line()),
            }
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strips_bom_and_trims_header() {
        let table = Table::parse("t", "\u{feff} 名字 ,ID\na,1\n").unwrap();
        assert_eq!(table.header().names(), &["名字", "ID"]);
        let row = table.rows().next().unwrap();
        assert_eq!(row.get("名字"), "a");
        assert_eq!(row.line(), 2);
    }

    #[test]
    fn test_short_rows_are_padded() {
        let table = Table::parse("t", "a,b,c\n1\n").unwrap();
        let row = table.rows().next().unwrap();
        assert_eq!(row.cells().len(), 3);
        assert_eq!(row.get("c"), "");
    }

    #[test]
    fn test_long_rows_keep_extra_cells() {
        let table = Table::parse("t", "a,b\n1,2,3,4\n").unwrap();
        let row = table.rows().next().unwrap();
        assert_eq!(row.raw_at(3), "4");
        assert_eq!(row.raw_at(9), "");
    }

    #[test]
    fn test_empty_input() {
        let err = Table::parse("empty.csv", "").unwrap_err();
        assert!(matches!(err, TableError::EmptyTable(ref n) if n == "empty.csv"));
    }

    #[test]
    fn test_repeated_columns() {
        let table = Table::parse("t", "ID,状态效果ID,x,状态效果ID\n").unwrap();
        assert_eq!(table.header().indices_of("状态效果ID"), vec![1, 3]);
        assert_eq!(table.header().index_of("状态效果ID"), Some(1));
        assert!(table.is_empty());
    }

    #[test]
    fn test_require_reports_missing() {
        let table = Table::parse("items.csv", "a,b\n").unwrap();
        let err = table.require(&["a", "c", "d"]).unwrap_err();
        match err {
            TableError::MissingColumns { table, missing, found } => {
                assert_eq!(table, "items.csv");
                assert_eq!(missing, vec!["c", "d"]);
                assert_eq!(found, vec!["a", "b"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_quoted_multiline_cell() {
        let table = Table::parse("t", "name,desc\nx,\"line1\nline2\"\n").unwrap();
        let row = table.rows().next().unwrap();
        assert_eq!(row.raw_at(1), "line1\nline2");
    }
}
