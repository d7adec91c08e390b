use crate::export::error::ExportError;
use crate::tools::log_message;
use chrono::{Local, NaiveDateTime};
use derive_getters::Getters;
use dto::person::Person;
use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook};

pub mod error;

pub const SPREADSHEET_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

pub const DEFAULT_SHEET_LABEL: &str = "Μέλη";
pub const FILTERED_SHEET_LABEL: &str = "Φιλτραρισμένα";
pub const ALL_SHEET_LABEL: &str = "Όλα";

pub const FILTERED_DATA_PREFIX: &str = "filtered_data";
pub const ALL_DATA_PREFIX: &str = "all_data";

const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The value of an exported cell.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportValue {
    Empty,
    Text(String),
    Number(f64),
}

impl From<&Option<String>> for ExportValue {
    fn from(value: &Option<String>) -> Self {
        value
            .as_ref()
            .map_or(ExportValue::Empty, |value| ExportValue::Text(value.clone()))
    }
}

impl From<&Option<i32>> for ExportValue {
    fn from(value: &Option<i32>) -> Self {
        value.map_or(ExportValue::Empty, |value| ExportValue::Number(value.into()))
    }
}

impl<T: ToString> From<Option<T>> for ExportValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ExportValue::Empty, |value| ExportValue::Text(value.to_string()))
    }
}

/// Something that can be written as a line of a spreadsheet.
pub trait SpreadsheetRow {
    /// Header line, one name per column.
    fn columns() -> &'static [&'static str];

    /// One value per column, in the order of [SpreadsheetRow::columns].
    fn values(&self) -> Vec<ExportValue>;
}

/// People are exported with the columns of the `people` table, in table order.
impl SpreadsheetRow for Person {
    fn columns() -> &'static [&'static str] {
        &[
            "id",
            "last_name",
            "first_name",
            "phone",
            "email",
            "is_member",
            "member_month",
            "member_year",
            "subscription_year",
            "is_athlete",
            "eom_number",
            "athlete_from_year",
            "is_student",
            "student_period_month",
            "student_period_year",
            "student_university",
            "is_interested",
            "interested_from_month",
            "interested_from_year",
            "created_at",
        ]
    }

    fn values(&self) -> Vec<ExportValue> {
        let membership = self.membership();
        let athlete = self.athlete();
        let student = self.student();
        let prospect = self.prospect();

        vec![
            ExportValue::Number((*self.id()).into()),
            self.last_name().into(),
            self.first_name().into(),
            self.phone().into(),
            self.email().into(),
            (*membership.is_member()).into(),
            (*membership.member_month()).into(),
            membership.member_year().into(),
            membership.subscription_year().into(),
            (*athlete.is_athlete()).into(),
            athlete.eom_number().into(),
            athlete.athlete_from_year().into(),
            (*student.is_student()).into(),
            (*student.student_period_month()).into(),
            student.student_period_year().into(),
            (*student.student_university()).into(),
            (*prospect.is_interested()).into(),
            (*prospect.interested_from_month()).into(),
            prospect.interested_from_year().into(),
            ExportValue::Text(self.created_at().format(CREATED_AT_FORMAT).to_string()),
        ]
    }
}

/// Write `rows` to a single sheet workbook named `sheet_label`, below a bold header line.
pub fn to_spreadsheet<R: SpreadsheetRow>(
    rows: &[R],
    sheet_label: &str,
) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_label)?;

    for (column, name) in R::columns().iter().enumerate() {
        worksheet.write_string_with_format(0, column as ColNum, *name, &header_format)?;
    }
    for (index, row) in rows.iter().enumerate() {
        let line = (index + 1) as RowNum;
        for (column, value) in row.values().into_iter().enumerate() {
            let column = column as ColNum;
            match value {
                ExportValue::Empty => {}
                ExportValue::Text(text) => {
                    worksheet.write_string(line, column, text)?;
                }
                ExportValue::Number(number) => {
                    worksheet.write_number(line, column, number)?;
                }
            }
        }
    }

    let bytes = workbook
        .save_to_buffer()
        .map_err(log_message("Can't write the spreadsheet."))?;
    debug!("Exported {} rows to sheet `{sheet_label}`", rows.len());
    Ok(bytes)
}

/// A spreadsheet ready to be handed over to the operator.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct SpreadsheetFile {
    filename: String,
    bytes: Vec<u8>,
}

impl SpreadsheetFile {
    pub fn from_rows<R: SpreadsheetRow>(
        prefix: &str,
        sheet_label: &str,
        rows: &[R],
    ) -> Result<Self, ExportError> {
        Ok(Self {
            filename: timestamped_filename(prefix),
            bytes: to_spreadsheet(rows, sheet_label)?,
        })
    }

    pub fn mime_type(&self) -> &'static str {
        SPREADSHEET_MIME_TYPE
    }
}

/// `{prefix}_{YYYYMMDD_HHMMSS}.xlsx`, in local time.
pub fn timestamped_filename(prefix: &str) -> String {
    timestamped_filename_at(prefix, Local::now().naive_local())
}

fn timestamped_filename_at(prefix: &str, date_time: NaiveDateTime) -> String {
    format!("{prefix}_{}.xlsx", date_time.format("%Y%m%d_%H%M%S"))
}
