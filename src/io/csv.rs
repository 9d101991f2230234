use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

use crate::error::{Error, Result};

/// One raw observation: date text plus an optional numeric reading
pub type RawRow = (String, Option<f64>);

/// Read raw (date, value) rows from a two-column CSV file
///
/// A thin adapter in front of the series builder: no date parsing happens
/// here, date text is passed through verbatim. Empty value fields and
/// NA/NaN/null markers become `None`; any other unparsable numeric is an
/// error.
pub fn read_raw_rows<P: AsRef<Path>>(path: P, has_header: bool) -> Result<Vec<RawRow>> {
    let file = File::open(path.as_ref()).map_err(Error::Io)?;

    // Set up the CSV reader
    let mut rdr = ReaderBuilder::new()
        .has_headers(has_header)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(Error::Csv)?;
        if record.len() == 1 && record[0].is_empty() {
            // Blank line
            continue;
        }
        if record.len() < 2 {
            return Err(Error::InvalidValue(format!(
                "expected (date, value) columns, found {} field(s) in row {:?}",
                record.len(),
                record
            )));
        }
        rows.push((record[0].to_string(), parse_value(&record[1])?));
    }

    Ok(rows)
}

fn parse_value(field: &str) -> Result<Option<f64>> {
    if field.is_empty() {
        return Ok(None);
    }
    match field.to_uppercase().as_str() {
        "NA" | "NAN" | "NULL" => Ok(None),
        _ => field
            .parse::<f64>()
            .map(Some)
            .map_err(|_| Error::InvalidValue(format!("'{}' is not a valid number", field))),
    }
}
