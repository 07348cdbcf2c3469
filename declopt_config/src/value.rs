/// Parse a boolean using the configuration tree's grammar.
///
/// Accepts (case insensitive) `true`/`yes`/`on`/`1` and `false`/`no`/`off`/`0`.
///
/// ### Example
/// ```
/// use declopt_config::parse_bool;
///
/// assert_eq!(parse_bool("On"), Some(true));
/// assert_eq!(parse_bool("0"), Some(false));
/// assert_eq!(parse_bool("maybe"), None);
/// ```
pub fn parse_bool(text: &str) -> Option<bool> {
    match text.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Behaviour to read a typed value out of a node's raw text.
///
/// Implement this to use a custom type with [`Node::value_or`](crate::Node::value_or).
pub trait FromValue: Sized {
    /// Convert the raw text, or `None` if it does not represent a `Self`.
    fn from_value(text: &str) -> Option<Self>;
}

impl FromValue for bool {
    fn from_value(text: &str) -> Option<Self> {
        parse_bool(text)
    }
}

impl FromValue for String {
    fn from_value(text: &str) -> Option<Self> {
        Some(text.to_string())
    }
}

macro_rules! from_str_value {
    ($($t:ty),*) => {
        $(
            impl FromValue for $t {
                fn from_value(text: &str) -> Option<Self> {
                    text.trim().parse().ok()
                }
            }
        )*
    };
}

from_str_value!(i64, u64, usize, f64);
