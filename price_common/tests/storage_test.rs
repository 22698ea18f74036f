use std::fs;

use chrono::{NaiveDate, NaiveDateTime};
use price_common::record::{PriceRecord, PriceValue};
use price_common::storage::{CsvStore, append_record};
use temp_dir::TempDir;

const HEADER: &str = "Timestamp,Current Price,Pre-market Price,Post-market Price,Last Update";

fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 4, 1)
        .and_then(|d| d.and_hms_opt(h, m, s))
        .unwrap()
}

fn sample_record() -> PriceRecord {
    PriceRecord {
        current_price: 2000.5,
        pre_market_price: PriceValue::NotAvailable,
        post_market_price: PriceValue::Available(2010.0),
        last_update: Some(at(15, 45, 30)),
    }
}

#[test]
fn new_file_gets_header_and_one_row() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("eth_prices.csv");

    CsvStore::new(&path)
        .append_at(&sample_record(), at(16, 0, 0))
        .unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            HEADER,
            "2023-04-01 16:00:00,2000.5,N/A,2010,2023-04-01 15:45:30"
        ]
    );
}

#[test]
fn repeated_appends_keep_single_header_in_call_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prices.csv");
    let store = CsvStore::new(&path);

    for (i, price) in [1800.0, 1801.25, 1799.75].into_iter().enumerate() {
        let record = PriceRecord {
            current_price: price,
            ..sample_record()
        };
        store.append_at(&record, at(16, i as u32, 0)).unwrap();
    }

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], HEADER);
    assert!(lines[1].starts_with("2023-04-01 16:00:00,1800,"));
    assert!(lines[2].starts_with("2023-04-01 16:01:00,1801.25,"));
    assert!(lines[3].starts_with("2023-04-01 16:02:00,1799.75,"));
}

#[test]
fn existing_rows_are_preserved() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prices.csv");
    fs::write(&path, format!("{}\nold,1,N/A,N/A,N/A\n", HEADER)).unwrap();

    CsvStore::new(&path)
        .append_at(&sample_record(), at(16, 0, 0))
        .unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "old,1,N/A,N/A,N/A");
    assert_eq!(lines.iter().filter(|l| **l == HEADER).count(), 1);
}

#[test]
fn absent_values_written_as_sentinel() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prices.csv");
    let record = PriceRecord {
        current_price: 3000.0,
        pre_market_price: PriceValue::NotAvailable,
        post_market_price: PriceValue::NotAvailable,
        last_update: None,
    };

    CsvStore::new(&path).append_at(&record, at(9, 30, 0)).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content.lines().nth(1),
        Some("2023-04-01 09:30:00,3000,N/A,N/A,N/A")
    );
}

#[test]
fn append_record_stamps_capture_time() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prices.csv");

    append_record(&sample_record(), &path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let row = content.lines().nth(1).unwrap();
    let (captured, rest) = row.split_once(',').unwrap();
    assert!(NaiveDateTime::parse_from_str(captured, "%Y-%m-%d %H:%M:%S").is_ok());
    assert_eq!(rest, "2000.5,N/A,2010,2023-04-01 15:45:30");
}

#[test]
fn missing_directory_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no_such_dir").join("prices.csv");

    let err = append_record(&sample_record(), &path).unwrap_err();
    assert!(matches!(err, price_common::ScraperError::Io(_)));
}
