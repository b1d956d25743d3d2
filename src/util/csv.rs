//! Minimal CSV assembly for the admin export.
//!
//! Fields containing commas, quotes or newlines are quoted with doubled
//! inner quotes; everything else passes through bare.

#[cfg(test)]
#[path = "csv_test.rs"]
mod csv_test;

/// Escapes one field for CSV output.
pub fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}

/// Joins fields into one CSV line.
pub fn csv_line<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(|field| csv_field(field.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Builds a CSV document from a header and rows, newline-terminated.
pub fn csv_document<S: AsRef<str>>(header: &[S], rows: &[Vec<String>]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(csv_line(header));
    for row in rows {
        lines.push(csv_line(row));
    }
    let mut document = lines.join("\n");
    document.push('\n');
    document
}
