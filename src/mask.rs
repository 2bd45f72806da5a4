//! Partial redaction of sensitive values for display and logging.

/// Literal returned for values too short to partially reveal.
const FULL_MASK: &str = "***";

/// Mask `data` for safe display: first two characters, `***`, last two.
///
/// Inputs shorter than 4 characters are fully masked — revealing any part of
/// them would leave too little hidden. Character-based, not byte-based, so
/// multi-byte input never splits a code point. Total over all inputs; never
/// fails.
pub fn mask(data: &str) -> String {
    let chars: Vec<char> = data.chars().collect();
    if chars.len() < 4 {
        return FULL_MASK.to_string();
    }
    let head: String = chars[..2].iter().collect();
    let tail: String = chars[chars.len() - 2..].iter().collect();
    format!("{head}{FULL_MASK}{tail}")
}

/// [`mask`] over an optional value; absent input is fully masked.
pub fn mask_opt(data: Option<&str>) -> String {
    data.map(mask).unwrap_or_else(|| FULL_MASK.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_values_are_fully_masked() {
        assert_eq!(mask(""), "***");
        assert_eq!(mask("a"), "***");
        assert_eq!(mask("ab"), "***");
        assert_eq!(mask("abc"), "***");
    }

    #[test]
    fn long_values_keep_first_and_last_two() {
        assert_eq!(mask("abcd"), "ab***cd");
        assert_eq!(mask("abcdefgh"), "ab***gh");
        assert_eq!(mask("+15558675309"), "+1***09");
    }

    #[test]
    fn absent_value_is_fully_masked() {
        assert_eq!(mask_opt(None), "***");
        assert_eq!(mask_opt(Some("abcdefgh")), "ab***gh");
    }

    #[test]
    fn multibyte_input_does_not_split_code_points() {
        assert_eq!(mask("ùüéè"), "ùü***éè");
        assert_eq!(mask("日本"), "***");
    }
}
