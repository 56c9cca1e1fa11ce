//! Convert CSV query results into the TRACE data file format.
//!
//! Each CSV row becomes a JSON object keyed by the header row; empty
//! fields become `null`. The output document wraps the rows in a
//! top-level `results` array, which is the shape the bundle's `data/`
//! files use.

use std::path::Path;

use anyhow::Context;
use serde_json::{Map, Value, json};

/// Convert `input` (CSV with a header row) to a JSON data file at
/// `output`. Returns the number of converted rows.
///
/// # Errors
///
/// Returns an error if the CSV cannot be read or parsed, or if the
/// output file cannot be written.
pub fn convert(input: &Path, output: &Path) -> anyhow::Result<usize> {
    let mut reader = csv::Reader::from_path(input)
        .with_context(|| format!("Failed to open {}", input.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("Failed to read CSV header from {}", input.display()))?
        .clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record =
            record.with_context(|| format!("Failed to parse CSV row in {}", input.display()))?;

        let mut row = Map::new();
        for (header, field) in headers.iter().zip(record.iter()) {
            let value = if field.is_empty() {
                Value::Null
            } else {
                Value::String(field.to_owned())
            };
            row.insert(header.to_owned(), value);
        }
        rows.push(Value::Object(row));
    }

    let count = rows.len();
    let document = json!({ "results": rows });
    let rendered = serde_json::to_string_pretty(&document)?;
    std::fs::write(output, rendered)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_rows_become_objects_keyed_by_header() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("in.csv");
        let output = tmp.path().join("out.json");
        std::fs::write(&input, "region,users\nemea,1842\namer,903\n").unwrap();

        let count = convert(&input, &output).unwrap();
        assert_eq!(count, 2);

        let doc: Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        let results = doc["results"].as_array().unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["region"], "emea");
        assert_eq!(results[1]["users"], "903");
    }

    #[test]
    fn test_empty_fields_become_null() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("in.csv");
        let output = tmp.path().join("out.json");
        std::fs::write(&input, "region,users\nemea,\n").unwrap();

        convert(&input, &output).unwrap();

        let doc: Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(doc["results"][0]["users"], Value::Null);
        assert_eq!(doc["results"][0]["region"], "emea");
    }

    #[test]
    fn test_header_only_input_yields_empty_results() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("in.csv");
        let output = tmp.path().join("out.json");
        std::fs::write(&input, "region,users\n").unwrap();

        let count = convert(&input, &output).unwrap();
        assert_eq!(count, 0);

        let doc: Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert!(doc["results"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_missing_input_errors() {
        let tmp = TempDir::new().unwrap();
        let result = convert(&tmp.path().join("nope.csv"), &tmp.path().join("out.json"));
        assert!(result.is_err());
    }
}
