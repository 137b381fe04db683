//! CSV loading of the employee roster and the attendance log.
//!
//! Both files carry a header row. Column positions follow the exported
//! spreadsheets:
//!
//! ```text
//! employees.csv   0 employee #, 1 last name, 2 first name, 3 birthday,
//!                 14 rice subsidy, 15 phone allowance,
//!                 16 clothing allowance, 18 hourly rate
//! attendance.csv  0 employee #, 3 date, 4 log in, 5 log out
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{AttendanceRecord, EmployeeProfile};

/// Minimum number of fields in a roster row.
pub const EMPLOYEE_MIN_FIELDS: usize = 19;

/// Minimum number of fields in an attendance row.
pub const ATTENDANCE_MIN_FIELDS: usize = 6;

/// Date format of the roster's birthday column, e.g. `10/11/1983`.
pub const BIRTH_DATE_FORMAT: &str = "%m/%d/%Y";

mod employee_column {
    pub const ID: usize = 0;
    pub const LAST_NAME: usize = 1;
    pub const FIRST_NAME: usize = 2;
    pub const BIRTH_DATE: usize = 3;
    pub const RICE_SUBSIDY: usize = 14;
    pub const PHONE_ALLOWANCE: usize = 15;
    pub const CLOTHING_ALLOWANCE: usize = 16;
    pub const HOURLY_RATE: usize = 18;
}

mod attendance_column {
    pub const ID: usize = 0;
    pub const DATE: usize = 3;
    pub const TIME_IN: usize = 4;
    pub const TIME_OUT: usize = 5;
}

/// Loads the employee roster from a CSV file.
///
/// # Errors
///
/// Returns `DataSource` if the file cannot be read, a row has fewer than
/// [`EMPLOYEE_MIN_FIELDS`] fields, a birthday or amount does not parse, or
/// the row fails [`EmployeeProfile::validate`].
pub fn load_employees<P: AsRef<Path>>(path: P) -> PayrollResult<Vec<EmployeeProfile>> {
    let path = path.as_ref();
    let source_name = path.display().to_string();
    let file = File::open(path)
        .map_err(|e| data_source_error(&source_name, format!("cannot open file: {}", e)))?;
    read_employees(file, &source_name)
}

/// Loads the attendance log from a CSV file.
///
/// Dates and times are kept as text; they are parsed per row so that one
/// bad row does not invalidate the whole log.
///
/// # Errors
///
/// Returns `DataSource` if the file cannot be read or a row has fewer than
/// [`ATTENDANCE_MIN_FIELDS`] fields.
pub fn load_attendance<P: AsRef<Path>>(path: P) -> PayrollResult<Vec<AttendanceRecord>> {
    let path = path.as_ref();
    let source_name = path.display().to_string();
    let file = File::open(path)
        .map_err(|e| data_source_error(&source_name, format!("cannot open file: {}", e)))?;
    read_attendance(file, &source_name)
}

/// Reads an employee roster from any CSV source.
pub fn read_employees<R: Read>(reader: R, source_name: &str) -> PayrollResult<Vec<EmployeeProfile>> {
    let rows = read_rows(reader, source_name, EMPLOYEE_MIN_FIELDS)?;
    let employees = rows
        .iter()
        .map(|(line, row)| parse_employee(row, *line, source_name))
        .collect::<PayrollResult<Vec<_>>>()?;

    debug!(source = source_name, count = employees.len(), "Loaded employee roster");
    Ok(employees)
}

/// Reads an attendance log from any CSV source.
pub fn read_attendance<R: Read>(
    reader: R,
    source_name: &str,
) -> PayrollResult<Vec<AttendanceRecord>> {
    let rows = read_rows(reader, source_name, ATTENDANCE_MIN_FIELDS)?;
    let records: Vec<AttendanceRecord> = rows
        .iter()
        .map(|(line, row)| AttendanceRecord {
            employee_id: field(row, attendance_column::ID).to_string(),
            date: field(row, attendance_column::DATE).to_string(),
            time_in: field(row, attendance_column::TIME_IN).to_string(),
            time_out: field(row, attendance_column::TIME_OUT).to_string(),
            line: *line,
        })
        .collect();

    debug!(source = source_name, count = records.len(), "Loaded attendance log");
    Ok(records)
}

fn read_rows<R: Read>(
    reader: R,
    source_name: &str,
    min_fields: usize,
) -> PayrollResult<Vec<(usize, StringRecord)>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (index, result) in csv_reader.records().enumerate() {
        let row = result.map_err(|e| data_source_error(source_name, e.to_string()))?;
        // Header is line 1
        let line = row
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(index + 2);

        if row.len() < min_fields {
            return Err(data_source_error(
                source_name,
                format!(
                    "line {} has {} fields, expected at least {}",
                    line,
                    row.len(),
                    min_fields
                ),
            ));
        }
        rows.push((line, row));
    }
    Ok(rows)
}

fn parse_employee(row: &StringRecord, line: usize, source_name: &str) -> PayrollResult<EmployeeProfile> {
    let birth_text = field(row, employee_column::BIRTH_DATE);
    let birth_date = NaiveDate::parse_from_str(birth_text, BIRTH_DATE_FORMAT).map_err(|e| {
        data_source_error(
            source_name,
            format!("line {}: invalid birthday '{}': {}", line, birth_text, e),
        )
    })?;

    let amount = |index: usize, name: &str| -> PayrollResult<Decimal> {
        parse_amount(field(row, index)).map_err(|message| {
            data_source_error(source_name, format!("line {}: invalid {}: {}", line, name, message))
        })
    };

    let employee = EmployeeProfile {
        id: field(row, employee_column::ID).to_string(),
        last_name: field(row, employee_column::LAST_NAME).to_string(),
        first_name: field(row, employee_column::FIRST_NAME).to_string(),
        birth_date,
        hourly_rate: amount(employee_column::HOURLY_RATE, "hourly rate")?,
        rice_subsidy: amount(employee_column::RICE_SUBSIDY, "rice subsidy")?,
        phone_allowance: amount(employee_column::PHONE_ALLOWANCE, "phone allowance")?,
        clothing_allowance: amount(employee_column::CLOTHING_ALLOWANCE, "clothing allowance")?,
    };
    employee
        .validate()
        .map_err(|e| data_source_error(source_name, format!("line {}: {}", line, e)))?;
    Ok(employee)
}

/// Parses a money cell such as `"1,500"` or `535.71`.
fn parse_amount(value: &str) -> Result<Decimal, String> {
    let cleaned = value.replace(['"', ','], "");
    Decimal::from_str(cleaned.trim()).map_err(|e| format!("'{}' ({})", value, e))
}

fn field(row: &StringRecord, index: usize) -> &str {
    row.get(index).unwrap_or_default()
}

fn data_source_error(source_name: &str, message: String) -> PayrollError {
    PayrollError::DataSource {
        source_name: source_name.to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROSTER_HEADER: &str = "Employee #,Last Name,First Name,Birthday,Address,Phone Number,SSS #,Philhealth #,TIN #,Pag-ibig #,Status,Position,Immediate Supervisor,Basic Salary,Rice Subsidy,Phone Allowance,Clothing Allowance,Gross Semi-monthly Rate,Hourly Rate";

    fn roster(rows: &[&str]) -> String {
        let mut text = ROSTER_HEADER.to_string();
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text
    }

    #[test]
    fn test_reads_roster_row_with_quoted_amounts() {
        let csv = roster(&[
            r#"10001,Garcia,Manuel III,10/11/1983,"Valero Carpark Building, Makati",966-860-270,44-4506057-3,820126853951,442-605-657-000,691295330870,Regular,Chief Executive Officer,N/A,"90,000","1,500","2,000","1,000","45,000",535.71"#,
        ]);

        let employees = read_employees(csv.as_bytes(), "roster").unwrap();
        assert_eq!(employees.len(), 1);

        let employee = &employees[0];
        assert_eq!(employee.id, "10001");
        assert_eq!(employee.display_name(), "Garcia, Manuel III");
        assert_eq!(employee.birth_date, NaiveDate::from_ymd_opt(1983, 10, 11).unwrap());
        assert_eq!(employee.hourly_rate, Decimal::new(53571, 2));
        assert_eq!(employee.rice_subsidy, Decimal::from(1500));
        assert_eq!(employee.phone_allowance, Decimal::from(2000));
        assert_eq!(employee.clothing_allowance, Decimal::from(1000));
    }

    #[test]
    fn test_short_roster_row_is_data_source_error() {
        let csv = roster(&["10001,Garcia,Manuel III,10/11/1983"]);

        match read_employees(csv.as_bytes(), "roster") {
            Err(PayrollError::DataSource { source_name, message }) => {
                assert_eq!(source_name, "roster");
                assert!(message.contains("line 2 has 4 fields"), "{}", message);
            }
            other => panic!("Expected DataSource, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_hourly_rate_is_data_source_error() {
        let csv = roster(&[
            "10001,Garcia,Manuel III,10/11/1983,a,b,c,d,e,f,g,h,i,90000,1500,2000,1000,45000,n/a",
        ]);

        let error = read_employees(csv.as_bytes(), "roster").unwrap_err();
        assert!(error.to_string().contains("invalid hourly rate"));
    }

    #[test]
    fn test_out_of_range_hourly_rate_is_data_source_error() {
        let csv = roster(&[
            "10001,Garcia,Manuel III,10/11/1983,a,b,c,d,e,f,g,h,i,90000,1500,2000,1000,45000,79228162514264337593543950335",
        ]);

        let error = read_employees(csv.as_bytes(), "roster").unwrap_err();
        let message = error.to_string();
        assert!(message.contains("line 2"), "{}", message);
        assert!(message.contains("'hourly_rate': must not exceed"), "{}", message);
    }

    #[test]
    fn test_bad_birthday_is_data_source_error() {
        let csv = roster(&[
            "10001,Garcia,Manuel III,1983-10-11,a,b,c,d,e,f,g,h,i,90000,1500,2000,1000,45000,535.71",
        ]);

        let error = read_employees(csv.as_bytes(), "roster").unwrap_err();
        assert!(error.to_string().contains("invalid birthday"));
    }

    #[test]
    fn test_reads_attendance_rows_with_line_numbers() {
        let csv = "Employee #,Last Name,First Name,Date,Log In,Log Out\n\
                   10001,Garcia,Manuel III,06/03/2024,8:05,17:30\n\
                   10002,Lim,Antonio,06/03/2024,,\n";

        let records = read_attendance(csv.as_bytes(), "attendance").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].employee_id, "10001");
        assert_eq!(records[0].date, "06/03/2024");
        assert_eq!(records[0].time_in, "8:05");
        assert_eq!(records[0].time_out, "17:30");
        assert_eq!(records[0].line, 2);
        assert_eq!(records[1].time_in, "");
        assert_eq!(records[1].line, 3);
    }

    #[test]
    fn test_short_attendance_row_is_data_source_error() {
        let csv = "Employee #,Last Name,First Name,Date,Log In,Log Out\n10001,Garcia\n";
        let error = read_attendance(csv.as_bytes(), "attendance").unwrap_err();
        assert!(matches!(error, PayrollError::DataSource { .. }));
    }

    #[test]
    fn test_missing_file_is_data_source_error() {
        let error = load_attendance("./does/not/exist.csv").unwrap_err();
        match error {
            PayrollError::DataSource { source_name, message } => {
                assert!(source_name.contains("exist.csv"));
                assert!(message.starts_with("cannot open file"));
            }
            other => panic!("Expected DataSource, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_amount_strips_separators() {
        assert_eq!(parse_amount("\"1,500.50\"").unwrap(), Decimal::new(150050, 2));
        assert!(parse_amount("").is_err());
    }
}
