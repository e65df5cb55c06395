//! Row mapper: one 8-field input record to one 11-field output record.
//!
//! The mapping is fixed and positional. Short rows never error; any
//! position beyond the available data reads as an empty string.

use crate::address::split_address;
use crate::config::{
    COUNTRY_CODE, FIRST_NAME_PLACEHOLDER, LAST_NAME_PLACEHOLDER, OUTPUT_COLUMNS,
};

/// Input field positions in the source sheet.
///
/// Field 0 is the superordinate group name, which has no counterpart in
/// the output schema.
mod input {
    pub const NAME: usize = 1;
    pub const EXTERNAL_ID: usize = 2;
    pub const STREET_AND_NUMBER: usize = 3;
    pub const POSTAL_CODE: usize = 4;
    pub const CITY: usize = 5;
    pub const PHONE: usize = 6;
    pub const EMAIL: usize = 7;
}

/// Build the fixed header record.
#[must_use]
pub fn header() -> Vec<String> {
    OUTPUT_COLUMNS.iter().map(|label| (*label).to_string()).collect()
}

/// Check whether a row is empty (every field is the empty string).
///
/// A row with no fields at all counts as empty too.
#[must_use]
pub fn is_empty_row(fields: &[String]) -> bool {
    fields.iter().all(|field| field.is_empty())
}

/// Map one input record to one output record.
///
/// The street-and-number field goes through the address tokenizer;
/// phone numbers have the literal `" - "` separator collapsed to a
/// single space. All other fields copy through positionally.
#[must_use]
pub fn map_record(fields: &[String]) -> Vec<String> {
    let tokenized = split_address(field(fields, input::STREET_AND_NUMBER));

    vec![
        field(fields, input::EXTERNAL_ID).to_string(),
        field(fields, input::NAME).to_string(),
        tokenized.street,
        tokenized.house_number,
        COUNTRY_CODE.to_string(),
        field(fields, input::POSTAL_CODE).to_string(),
        field(fields, input::CITY).to_string(),
        FIRST_NAME_PLACEHOLDER.to_string(),
        LAST_NAME_PLACEHOLDER.to_string(),
        normalize_phone(field(fields, input::PHONE)),
        field(fields, input::EMAIL).to_string(),
    ]
}

/// Read a field by position, treating absent positions as empty.
fn field(fields: &[String], index: usize) -> &str {
    fields.get(index).map(String::as_str).unwrap_or("")
}

/// Collapse the `" - "` separator some phone numbers carry.
fn normalize_phone(phone: &str) -> String {
    phone.replace(" - ", " ")
}
