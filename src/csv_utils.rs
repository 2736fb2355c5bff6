//! CSV serialization and deserialization utilities.
//!
//! Provides generic functions for reading and writing CSV data.

use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{Read, Write};

/// Creates an iterator that reads CSV records from a reader.
/// The first row is the header; each following record is deserialized into type T
/// by header name, so column order does not matter.
/// Header names are trimmed, field values are kept verbatim.
pub fn read_csv<T, R>(reader: R) -> impl Iterator<Item = csv::Result<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader)
        .into_deserialize()
}

/// Like [`read_csv`], but skips rows that fail to parse.
/// Only I/O errors are yielded; a malformed row never ends the scan.
pub fn read_records<T, R>(reader: R) -> impl Iterator<Item = csv::Result<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    read_csv(reader).filter(|row: &csv::Result<T>| match row {
        Err(err) if !matches!(err.kind(), csv::ErrorKind::Io(_)) => {
            warn!("Skipping malformed row: {}", err);
            false
        }
        _ => true,
    })
}

/// Writes an iterator of records to a CSV writer, header first.
/// Each record must implement Serialize.
pub fn write_csv<T, W>(writer: W, records: impl Iterator<Item = T>) -> csv::Result<()>
where
    T: Serialize,
    W: Write,
{
    append_csv(writer, records, true)
}

/// Writes records to a CSV writer, with the header row only when `with_header` is set.
/// Used to add rows to a file that already has its header.
pub fn append_csv<T, W>(
    writer: W,
    records: impl Iterator<Item = T>,
    with_header: bool,
) -> csv::Result<()>
where
    T: Serialize,
    W: Write,
{
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(with_header)
        .from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::{AccountRecord, CredentialRecord};
    use std::fs::File;

    #[test]
    fn test_read_csv() -> csv::Result<()> {
        let credentials: Vec<CredentialRecord> =
            read_csv(File::open("data/credentials.csv")?).collect::<Result<_, _>>()?;

        let expected_credentials = vec![
            CredentialRecord {
                username: "johndoe".to_string(),
                password: "secure123".to_string(),
            },
            CredentialRecord {
                username: "janedoe".to_string(),
                password: "abc123".to_string(),
            },
        ];
        assert_eq!(credentials, expected_credentials);

        Ok(())
    }

    #[test]
    fn test_read_csv_by_header_name() -> csv::Result<()> {
        let accounts: Vec<AccountRecord> =
            read_csv(File::open("data/reordered_accounts.csv")?).collect::<Result<_, _>>()?;

        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].username, "johndoe");
        assert_eq!(accounts[0].password, "pass123");
        assert_eq!(accounts[0].cheque_account_balance, "1500");
        assert_eq!(accounts[0].savings_account_balance, "3000");
        assert_eq!(accounts[0].investment_account_balance, "5000");
        Ok(())
    }

    #[test]
    fn test_read_csv_keeps_field_whitespace() -> csv::Result<()> {
        let text = "username,password\n johndoe ,secure123\n";
        let credentials: Vec<CredentialRecord> =
            read_csv(text.as_bytes()).collect::<Result<_, _>>()?;
        assert_eq!(credentials[0].username, " johndoe ");
        Ok(())
    }

    #[test]
    fn test_read_records_skips_malformed_rows() -> csv::Result<()> {
        let accounts: Vec<AccountRecord> =
            read_records(File::open("data/malformed_accounts.csv")?).collect::<Result<_, _>>()?;

        let usernames: Vec<_> = accounts.iter().map(|a| a.username.as_str()).collect();
        assert_eq!(usernames, vec!["JohnDoe", "johndoe"]);
        Ok(())
    }

    #[test]
    fn test_write_csv() -> csv::Result<()> {
        let mut output = Vec::new();
        let records = vec![CredentialRecord {
            username: "johndoe".to_string(),
            password: "secure123".to_string(),
        }];
        write_csv(&mut output, records.into_iter())?;
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "username,password\njohndoe,secure123\n"
        );
        Ok(())
    }

    #[test]
    fn test_append_csv_without_header() -> csv::Result<()> {
        let mut output = Vec::new();
        let records = vec![CredentialRecord {
            username: "janedoe".to_string(),
            password: "abc123".to_string(),
        }];
        append_csv(&mut output, records.into_iter(), false)?;
        assert_eq!(String::from_utf8(output).unwrap(), "janedoe,abc123\n");
        Ok(())
    }
}
