use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use crate::models::CustomerFields;

pub const CSV_HEADER: &str = "First Name,Last Name,Email,Phone,Street Address,Postcode,City";

/// Serializes the customer list to CSV. Every field is individually quoted,
/// embedded double quotes are doubled, missing values render as `""`.
pub fn customers_to_csv(customers: &[CustomerFields]) -> String {
    let mut lines = Vec::with_capacity(customers.len() + 1);
    lines.push(CSV_HEADER.to_string());

    for customer in customers {
        let fields = [
            &customer.firstname,
            &customer.lastname,
            &customer.email,
            &customer.phone,
            &customer.streetaddress,
            &customer.postcode,
            &customer.city,
        ];
        let row = fields
            .iter()
            .map(|value| quote(value))
            .collect::<Vec<_>>()
            .join(",");
        lines.push(row);
    }

    lines.join("\n")
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

pub fn export_filename(date: NaiveDate) -> String {
    format!("customers_{}.csv", date.format("%Y-%m-%d"))
}

/// Writes the export next to the given directory (or the working directory)
/// and returns the path written.
pub fn write_csv_export(
    customers: &[CustomerFields],
    target: Option<&Path>,
) -> io::Result<PathBuf> {
    let path = match target {
        Some(path) if path.is_dir() => path.join(export_filename(Local::now().date_naive())),
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(export_filename(Local::now().date_naive())),
    };
    fs::write(&path, customers_to_csv(customers))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer() -> CustomerFields {
        CustomerFields {
            firstname: "Jane".to_string(),
            lastname: "Doe".to_string(),
            email: "j@d.com".to_string(),
            phone: "123".to_string(),
            streetaddress: "1 St".to_string(),
            postcode: "00100".to_string(),
            city: "X".to_string(),
        }
    }

    #[test]
    fn header_plus_one_row_per_customer() {
        let csv = customers_to_csv(&[customer()]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines[1], r#""Jane","Doe","j@d.com","123","1 St","00100","X""#);
    }

    #[test]
    fn empty_list_is_header_only() {
        assert_eq!(customers_to_csv(&[]), CSV_HEADER);
    }

    #[test]
    fn doubles_embedded_quotes() {
        let mut fields = customer();
        fields.lastname = "O\"Brien".to_string();
        let csv = customers_to_csv(&[fields]);
        assert!(csv.contains(r#""O""Brien""#));
    }

    #[test]
    fn missing_field_renders_as_empty_quotes() {
        let mut fields = customer();
        fields.phone = String::new();
        let csv = customers_to_csv(&[fields]);
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(row, r#""Jane","Doe","j@d.com","","1 St","00100","X""#);
    }

    #[test]
    fn filename_embeds_the_date() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
        assert_eq!(export_filename(date), "customers_2026-08-29.csv");
    }

    #[test]
    fn writes_export_to_explicit_file() {
        let dir = std::env::temp_dir().join("trainerdesk-export-test");
        fs::create_dir_all(&dir).unwrap();
        let target = dir.join("out.csv");
        let path = write_csv_export(&[customer()], Some(&target)).unwrap();
        assert_eq!(path, target);
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with(CSV_HEADER));
        fs::remove_dir_all(&dir).unwrap();
    }
}
