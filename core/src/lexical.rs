//! Lexical classification of raw argument tokens.
//!
//! A token is classified purely by its shape:
//!
//! - `--name` — long option name (ASCII letter, then letters/digits)
//! - `-n` — short option name (one ASCII letter or digit)
//! - `--name=value` — long option name with an inline value
//! - `-nvalue` — short option name with an inline value
//!
//! Anything else (empty strings, bare dashes, `--.x`, `- -f`) is not an
//! option token. The parser only uses [`is_option_name`] for its lookahead;
//! the inline-value forms are exposed for callers that want to split them.

use regex::Regex;
use std::sync::LazyLock;

static LONG_OPTION_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^--[a-zA-Z][a-zA-Z0-9]*$").expect("static regex must compile"));
static SHORT_OPTION_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-[a-zA-Z0-9]$").expect("static regex must compile"));
static LONG_OPTION_WITH_VALUE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(--[a-zA-Z][a-zA-Z0-9]*)=(.+)$").expect("static regex must compile")
});
static SHORT_OPTION_WITH_VALUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^(-[a-zA-Z0-9])(.+)$").expect("static regex must compile"));

/// Returns `true` for `--name` tokens.
pub fn is_long_option_name(token: &str) -> bool {
    LONG_OPTION_NAME_RE.is_match(token)
}

/// Returns `true` for `-n` tokens.
pub fn is_short_option_name(token: &str) -> bool {
    SHORT_OPTION_NAME_RE.is_match(token)
}

/// Returns `true` if the token is a long or short option name.
///
/// # Examples
///
/// ```
/// use argfence_core::lexical::is_option_name;
///
/// assert!(is_option_name("--verbose"));
/// assert!(is_option_name("-v"));
/// assert!(!is_option_name("-"));
/// assert!(!is_option_name("--path=."));
/// assert!(!is_option_name("file.txt"));
/// ```
pub fn is_option_name(token: &str) -> bool {
    is_short_option_name(token) || is_long_option_name(token)
}

/// Returns `true` if the token carries an inline value in either form.
pub fn is_option_name_with_value(token: &str) -> bool {
    SHORT_OPTION_WITH_VALUE_RE.is_match(token) || LONG_OPTION_WITH_VALUE_RE.is_match(token)
}

/// Splits `--name=value` into `("--name", "value")`.
///
/// Only the first `=` separates; the value may contain further `=`.
pub fn long_option_with_value(token: &str) -> Option<(&str, &str)> {
    split_with(&LONG_OPTION_WITH_VALUE_RE, token)
}

/// Splits `-nvalue` into `("-n", "value")`.
pub fn short_option_with_value(token: &str) -> Option<(&str, &str)> {
    split_with(&SHORT_OPTION_WITH_VALUE_RE, token)
}

/// Splits a token with an inline value into its name and value parts.
///
/// The short form is tried first, then the long form.
///
/// # Examples
///
/// ```
/// use argfence_core::lexical::option_name_and_value;
///
/// assert_eq!(option_name_and_value("-f./VALUE"), Some(("-f", "./VALUE")));
/// assert_eq!(option_name_and_value("--path=./path"), Some(("--path", "./path")));
/// assert_eq!(option_name_and_value("--path"), None);
/// ```
pub fn option_name_and_value(token: &str) -> Option<(&str, &str)> {
    short_option_with_value(token).or_else(|| long_option_with_value(token))
}

fn split_with<'a>(re: &Regex, token: &'a str) -> Option<(&'a str, &'a str)> {
    let caps = re.captures(token)?;
    let name = caps.get(1)?.as_str();
    let value = caps.get(2)?.as_str();
    Some((name, value))
}
