//! Street / house-number tokenizer.
//!
//! Branch addresses arrive as a single free-text field like
//! `"Musterstraße 12"` or `"Am Markt 3-5"`. The point-of-sale schema
//! wants street and house number in separate columns, so the string has
//! to be split heuristically. The tricky part is street names that
//! themselves contain a numeric token (`"17. Stadtteilstraße 4"`): the
//! first space-digit boundary is not necessarily the right one.

/// Result of splitting an address into street and house number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedAddress {
    /// Street name with all commas removed.
    pub street: String,

    /// House number, verbatim from the source (may contain ranges like
    /// "3-5"). Empty when no number could be isolated.
    pub house_number: String,
}

/// Split a raw address into street and house-number parts.
///
/// The split point is a space immediately followed by an ASCII digit.
/// When a later space-digit boundary exists, the earlier one belonged
/// to the street name and the scan resumes there, so the *last* valid
/// boundary wins. A space immediately preceded by a hyphen never counts
/// as a boundary; that keeps ranges such as `"3-5 a"` inside the house
/// number instead of splitting them again.
///
/// No whitespace is trimmed. Commas are stripped from the street
/// segment only; the house-number segment is returned verbatim.
///
/// # Examples
/// ```
/// use filialen_converter::address::split_address;
///
/// let tokenized = split_address("Musterstraße 12");
/// assert_eq!(tokenized.street, "Musterstraße");
/// assert_eq!(tokenized.house_number, "12");
///
/// let tokenized = split_address("Ringstraße");
/// assert_eq!(tokenized.street, "Ringstraße");
/// assert_eq!(tokenized.house_number, "");
/// ```
#[must_use]
pub fn split_address(address: &str) -> TokenizedAddress {
    let chars: Vec<char> = address.chars().collect();

    let mut i = 0;
    while i < chars.len() {
        if chars[i] == ' ' && i + 1 < chars.len() && chars[i + 1].is_ascii_digit() {
            let next = i + 1;

            if let Some(later) = find_later_boundary(&chars, next + 1) {
                // The candidate was a numeric token inside the street
                // name. Resume the outer scan at the later boundary.
                i = later;
                continue;
            }

            let street: String = chars[..i].iter().filter(|&&c| c != ',').collect();
            let house_number: String = chars[next..].iter().collect();
            return TokenizedAddress {
                street,
                house_number,
            };
        }

        i += 1;
    }

    // No space-digit boundary anywhere: the whole input is the street.
    TokenizedAddress {
        street: address.to_string(),
        house_number: String::new(),
    }
}

/// Find the next space-digit boundary at or after `from`.
///
/// A space directly preceded by a hyphen is not a boundary, so
/// hyphen-joined numbers ("3-5 7" style ranges) stay together.
fn find_later_boundary(chars: &[char], from: usize) -> Option<usize> {
    let mut j = from;
    while j + 1 < chars.len() {
        if chars[j] == ' ' && chars[j - 1] != '-' && chars[j + 1].is_ascii_digit() {
            return Some(j);
        }
        j += 1;
    }
    None
}
