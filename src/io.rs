//! Plain-text city and tour formats.
//!
//! Cities are read one per line as `index x y` (or just `x y`); the index
//! column is informational and city identity is the line order. Tours are
//! written as city indices separated by spaces.

use crate::error::{AnnealError, Result};
use crate::tsp::{City, Tour};
use std::io::{BufRead, Write};

/// Parses city records from a string.
///
/// Blank lines are skipped.
///
/// # Examples
///
/// ```
/// use u_anneal::io::parse_cities;
///
/// let cities = parse_cities("1 0.0 0.0\n2 3.0 4.0\n").unwrap();
/// assert_eq!(cities.len(), 2);
/// assert_eq!(cities[1].y(), 4.0);
/// ```
pub fn parse_cities(text: &str) -> Result<Vec<City>> {
    let mut cities = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if let Some(city) = parse_line(line, i + 1)? {
            cities.push(city);
        }
    }
    Ok(cities)
}

/// Reads city records from a buffered reader.
pub fn read_cities<R: BufRead>(reader: R) -> Result<Vec<City>> {
    let mut cities = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        if let Some(city) = parse_line(&line?, i + 1)? {
            cities.push(city);
        }
    }
    Ok(cities)
}

fn parse_line(line: &str, line_no: usize) -> Result<Option<City>> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let (x, y) = match fields.as_slice() {
        [] => return Ok(None),
        [x, y] => (x, y),
        [index, x, y] => {
            index.parse::<u64>().map_err(|_| AnnealError::Parse {
                line: line_no,
                reason: format!("invalid city index `{index}`"),
            })?;
            (x, y)
        }
        _ => {
            return Err(AnnealError::Parse {
                line: line_no,
                reason: format!("expected `index x y`, found {} fields", fields.len()),
            })
        }
    };
    Ok(Some(City::new(
        parse_coord(x, line_no)?,
        parse_coord(y, line_no)?,
    )))
}

fn parse_coord(field: &str, line_no: usize) -> Result<f64> {
    match field.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(AnnealError::Parse {
            line: line_no,
            reason: format!("invalid coordinate `{field}`"),
        }),
    }
}

/// Formats a tour as space-separated indices followed by a newline.
pub fn format_tour(tour: &Tour) -> String {
    let mut out = String::with_capacity(tour.len() * 4 + 1);
    for index in tour.order() {
        out.push_str(&index.to_string());
        out.push(' ');
    }
    out.push('\n');
    out
}

/// Writes a tour in the format produced by [`format_tour`].
pub fn write_tour<W: Write>(mut writer: W, tour: &Tour) -> Result<()> {
    writer.write_all(format_tour(tour).as_bytes())?;
    writer.flush()?;
    Ok(())
}
