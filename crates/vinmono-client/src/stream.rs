//! Readers for the retailer's bulk CSV exports.
//!
//! The exports are semicolon-separated with a header row; column sets have
//! drifted over the years, so the reader is flexible about row width and
//! the field-map tables carry rows for both spellings where the exports
//! disagree.

use std::io::Read;

use csv::ReaderBuilder;
use serde_json::{Map, Value};
use vinmono_core::{StreamProduct, StreamStore};

use crate::error::ClientError;
use crate::mappers;

fn read_rows<R: Read>(reader: R) -> Result<Vec<Map<String, Value>>, ClientError> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let mut row = Map::new();
        for (header, field) in headers.iter().zip(record.iter()) {
            row.insert(header.to_owned(), Value::String(field.to_owned()));
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Reads a product CSV export into [`StreamProduct`] rows.
///
/// # Errors
///
/// Returns [`ClientError::Csv`] when a row cannot be read.
pub fn read_products<R: Read>(reader: R) -> Result<Vec<StreamProduct>, ClientError> {
    Ok(read_rows(reader)?
        .iter()
        .map(mappers::map_product_stream_row)
        .collect())
}

/// Reads a store CSV export into [`StreamStore`] rows.
///
/// # Errors
///
/// Returns [`ClientError::Csv`] when a row cannot be read.
pub fn read_stores<R: Read>(reader: R) -> Result<Vec<StreamStore>, ClientError> {
    Ok(read_rows(reader)?
        .iter()
        .map(mappers::map_store_stream_row)
        .collect())
}
