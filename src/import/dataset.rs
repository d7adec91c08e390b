use crate::import::error::ImportError;
use crate::import::error::ImportError::{NoSheet, SheetNotFound};
use crate::tools::log_message;
use calamine::{Data, Reader, Xlsx};
use derive_getters::Getters;
use dto::yes_no::YesNo;
use std::io::{Cursor, Read};

const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The content of a single cell of an imported sheet.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// A cell the source couldn't compute, e.g. `#DIV/0!`.
    Error(String),
}

impl CellValue {
    /// Text to store for this cell.
    ///
    /// Empty cells, blank text and NaN give `None`.
    /// A cell holding an error can't be converted: the reason is returned instead.
    pub fn to_text(&self) -> Result<Option<String>, String> {
        let text = match self {
            CellValue::Empty => None,
            CellValue::Text(text) => {
                let text = text.trim();
                if text.is_empty() || text.eq_ignore_ascii_case("nan") {
                    None
                } else {
                    Some(text.to_owned())
                }
            }
            CellValue::Int(value) => Some(value.to_string()),
            CellValue::Float(value) if value.is_nan() => None,
            CellValue::Float(value) if value.fract() == 0.0 && value.abs() < 1e15 => {
                Some(format!("{}", *value as i64))
            }
            CellValue::Float(value) => Some(value.to_string()),
            CellValue::Bool(value) => Some(YesNo::from(*value).to_string()),
            CellValue::Error(error) => {
                return Err(format!("The cell holds an error ({error})."));
            }
        };

        Ok(text)
    }
}

impl From<&Data> for CellValue {
    fn from(value: &Data) -> Self {
        match value {
            Data::Empty => CellValue::Empty,
            Data::String(text) => CellValue::Text(text.clone()),
            Data::Int(value) => CellValue::Int(*value),
            Data::Float(value) => CellValue::Float(*value),
            Data::Bool(value) => CellValue::Bool(*value),
            Data::Error(error) => CellValue::Error(format!("{error:?}")),
            Data::DateTime(date_time) => match date_time.as_datetime() {
                Some(date_time) => CellValue::Text(date_time.format(DATE_TIME_FORMAT).to_string()),
                None => CellValue::Text(date_time.to_string()),
            },
            Data::DateTimeIso(text) | Data::DurationIso(text) => CellValue::Text(text.clone()),
        }
    }
}

/// Rows read from a spreadsheet or a CSV file. The first line of the source holds the headers.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Dataset {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self { headers, rows }
    }

    /// Names of the sheets of an xlsx workbook, in workbook order.
    pub fn sheet_names(bytes: &[u8]) -> Result<Vec<String>, ImportError> {
        let workbook = Xlsx::new(Cursor::new(bytes))
            .map_err(log_message("Can't open the workbook."))?;
        Ok(workbook.sheet_names())
    }

    /// Read a sheet of an xlsx workbook, the first one when `sheet_name` is `None`.
    pub fn from_xlsx(bytes: &[u8], sheet_name: Option<&str>) -> Result<Self, ImportError> {
        let mut workbook = Xlsx::new(Cursor::new(bytes))
            .map_err(log_message("Can't open the workbook."))?;
        let sheet_names = workbook.sheet_names();
        let sheet_name = match sheet_name {
            Some(sheet_name) if sheet_names.iter().any(|name| name == sheet_name) => {
                sheet_name.to_owned()
            }
            Some(sheet_name) => Err(SheetNotFound(sheet_name.to_owned()))?,
            None => sheet_names.first().cloned().ok_or(NoSheet)?,
        };

        let range = workbook.worksheet_range(&sheet_name)?;
        let mut rows = range.rows();
        let headers = rows
            .next()
            .map(|header| header.iter().map(header_name).collect())
            .unwrap_or_default();
        let rows = rows
            .map(|row| row.iter().map(CellValue::from).collect())
            .collect::<Vec<_>>();

        debug!("Read {} rows from sheet `{sheet_name}`", rows.len());
        Ok(Self::new(headers, rows))
    }

    /// Read a CSV source. Blank fields become [CellValue::Empty], the others are text.
    /// Records that can't be read are logged and skipped.
    pub fn from_csv<R: Read>(reader: R, delimiter: u8) -> Result<Self, ImportError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .from_reader(reader);
        let headers = reader
            .headers()?
            .iter()
            .map(|header| header.trim().to_owned())
            .collect();

        let rows = reader
            .records()
            .filter_map(|result| match result {
                Ok(record) => Some(
                    record
                        .iter()
                        .map(|field| match field.trim() {
                            "" => CellValue::Empty,
                            field => CellValue::Text(field.to_owned()),
                        })
                        .collect::<Vec<_>>(),
                ),
                Err(e) => {
                    log_message("Error while reading a CSV record, skipped.")(e);
                    None
                }
            })
            .collect::<Vec<_>>();

        debug!("Read {} rows from CSV", rows.len());
        Ok(Self::new(headers, rows))
    }

    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|name| name == header)
    }
}

fn header_name(cell: &Data) -> String {
    match CellValue::from(cell).to_text() {
        Ok(Some(name)) => name,
        _ => String::new(),
    }
}
