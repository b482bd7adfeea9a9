//! Language independent names.
//!
//! Every path carries a canonical name which is used to identify it
//! regardless of the language it is displayed in. A canonical name is
//! upper case and consists only of `A-Z`, `0-9` and `_`, and doesn't start
//! with a digit.

use crate::error::{PathError, Result};

/// Converts text to the canonical name form.
///
/// Surrounding whitespace is removed, the text is upper cased, and any
/// remaining spaces or hyphens become underscores. The result is not
/// guaranteed to be valid; see [valid_name].
pub fn to_name(text: &str) -> String {
    text.trim()
        .to_uppercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect()
}

/// Returns true if `text` is a valid canonical name.
pub fn is_valid_name(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_ascii_uppercase() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

/// Checks that `text` is a valid canonical name and returns it.
pub fn valid_name(text: &str) -> Result<&str> {
    if is_valid_name(text) {
        Ok(text)
    } else {
        Err(PathError::InvalidName(text.to_owned()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn canonical_form() {
        assert_eq!(to_name("myTrack"), "MYTRACK");
        assert_eq!(to_name("loop the loop"), "LOOP_THE_LOOP");
        assert_eq!(to_name("  roller-coaster \t"), "ROLLER_COASTER");
        assert_eq!(to_name("CIRCLE_PATH"), "CIRCLE_PATH");
    }

    #[test]
    fn validity() {
        assert!(is_valid_name("HUMP_PATH"));
        assert!(is_valid_name("_PRIVATE2"));
        assert!(is_valid_name("A1"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("2D_TRACK"));
        assert!(!is_valid_name("MY.TRACK"));
        assert!(!is_valid_name("lower"));
        assert!(!is_valid_name("ÉCLAIR"));
    }

    #[test]
    fn valid_name_reports_text() {
        assert_eq!(valid_name("FLAT"), Ok("FLAT"));
        assert_eq!(
            valid_name("!!!"),
            Err(PathError::InvalidName("!!!".to_owned()))
        );
    }

    #[test]
    fn whitespace_normalizes_to_empty() {
        let name = to_name("   \t ");
        assert_eq!(name, "");
        assert!(valid_name(&name).is_err());
    }
}
