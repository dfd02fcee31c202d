use once_cell::sync::Lazy;
use regex::Regex;

static CUSA_TITLE_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^CUSA[0-9]{5}$").unwrap());
static PSN_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_-]{2,15}$").unwrap());
static INTEGER_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[+-]?[0-9]+(?:_[0-9]+)*\s*$").unwrap());

/// `CUSA` followed by exactly five digits, e.g. `CUSA12345`.
pub fn is_ps4_title_id(input: &str) -> bool {
    CUSA_TITLE_ID.is_match(input)
}

/// PSN online ids: a leading letter, 3 to 16 characters of letters, digits, `-` or `_`.
pub fn is_psn_name(input: &str) -> bool {
    PSN_NAME.is_match(input)
}

/// Accepts the same integer literals a user would type in a command argument:
/// optional surrounding whitespace and sign, digit groups separated by single underscores.
/// Magnitude is not limited.
pub fn is_str_int(input: &str) -> bool {
    INTEGER_LITERAL.is_match(input)
}
