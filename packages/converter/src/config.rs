//! Fixed values of the conversion and output-name derivation.
//!
//! The output schema is not configurable; every constant a reader might
//! want to check against the point-of-sale import format lives here.

use std::path::{Path, PathBuf};

/// Column labels of the output CSV, emitted as the first record.
pub const OUTPUT_COLUMNS: [&str; 11] = [
    "Filialnummer",
    "Filiale",
    "Strasse",
    "houseNumber",
    "Country",
    "Postleitzahl",
    "Ort",
    "Vorname",
    "Nachname",
    "Telefonnummer",
    "Email-Kasse",
];

/// Number of fields in an input record.
pub const INPUT_COLUMNS: usize = 8;

/// Country code written to every output record.
///
/// The source directory carries no country information; all branches
/// are German.
pub const COUNTRY_CODE: &str = "DE";

/// Placeholder first name for the branch contact.
pub const FIRST_NAME_PLACEHOLDER: &str = "Vorname";

/// Placeholder last name for the branch contact.
pub const LAST_NAME_PLACEHOLDER: &str = "Nachname";

/// Derive the output CSV path from the input file path.
///
/// The output name is `CSV-` plus the input file name up to its first
/// `.`, with a `.csv` extension, placed next to the input file.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use filialen_converter::config::derive_output_path;
///
/// let output = derive_output_path(Path::new("Filialverzeichnis.xlsx"));
/// assert_eq!(output, Path::new("CSV-Filialverzeichnis.csv"));
/// ```
#[must_use]
pub fn derive_output_path(input: &Path) -> PathBuf {
    let file_name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let base = file_name.split('.').next().unwrap_or("");

    let output_name = format!("CSV-{base}.csv");
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(output_name),
        _ => PathBuf::from(output_name),
    }
}
