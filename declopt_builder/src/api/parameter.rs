use thiserror::Error;

use crate::constant::DEFAULT_SLOT_NAME;

/// A slot value which failed validation.
///
/// The `index` is the 1-based position of the slot within the option's value list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidParameter {
    /// The value is not a boolean literal.
    #[error("Argument {index} to '{option}' must be a boolean value ('true' or 'false').")]
    NotBoolean {
        /// The option name as written on the command line.
        option: String,
        /// The 1-based slot index.
        index: usize,
    },
    /// The value is not a 64-bit signed integer.
    #[error("Argument {index} to '{option}' must be an integer.")]
    NotInteger {
        /// The option name as written on the command line.
        option: String,
        /// The 1-based slot index.
        index: usize,
    },
    /// The value is a numeral outside the slot's inclusive bounds.
    #[error("Argument {index} to '{option}' must be an integer within range [{lower},{upper}].")]
    OutOfRange {
        /// The option name as written on the command line.
        option: String,
        /// The 1-based slot index.
        index: usize,
        /// The inclusive lower bound.
        lower: i64,
        /// The inclusive upper bound.
        upper: i64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlotKind {
    String,
    Boolean,
    Integer(Option<(i64, i64)>),
}

/// One positional value taken by an option.
///
/// Multi-valued options take several slots, written on the command line separated by the option's delimiter.
/// Each slot validates its own text before the option's action runs.
///
/// ### Example
/// ```
/// # use declopt_builder as declopt;
/// use declopt::{InvalidParameter, Slot};
///
/// let slot = Slot::integer_range("percent", 0, 100);
/// assert_eq!(slot.validate("--level", "42", 1), Ok(()));
/// assert!(matches!(
///     slot.validate("--level", "101", 1),
///     Err(InvalidParameter::OutOfRange { index: 1, .. })
/// ));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    name: String,
    kind: SlotKind,
}

impl Default for Slot {
    /// A string slot called `value`.
    fn default() -> Self {
        Slot::string(DEFAULT_SLOT_NAME)
    }
}

impl Slot {
    /// A slot accepting any text.
    pub fn string(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: SlotKind::String,
        }
    }

    /// A slot accepting a boolean literal: `true`/`false`, `yes`/`no`, `on`/`off`, or `1`/`0` (case insensitive).
    pub fn boolean(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: SlotKind::Boolean,
        }
    }

    /// A slot accepting any 64-bit signed integer.
    pub fn integer(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: SlotKind::Integer(None),
        }
    }

    /// A slot accepting a 64-bit signed integer within `[lower, upper]`.
    /// The bounds are swapped if given in descending order.
    pub fn integer_range(name: impl Into<String>, lower: i64, upper: i64) -> Self {
        let bounds = if lower > upper {
            (upper, lower)
        } else {
            (lower, upper)
        };

        Self {
            name: name.into(),
            kind: SlotKind::Integer(Some(bounds)),
        }
    }

    /// The display name of this slot.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this slot takes a boolean.
    pub fn is_boolean(&self) -> bool {
        self.kind == SlotKind::Boolean
    }

    /// The inclusive bounds of an integer slot, if any were declared.
    pub fn bounds(&self) -> Option<(i64, i64)> {
        match self.kind {
            SlotKind::Integer(bounds) => bounds,
            _ => None,
        }
    }

    /// Validate `value` given to `option` at the 1-based position `index`.
    pub fn validate(&self, option: &str, value: &str, index: usize) -> Result<(), InvalidParameter> {
        match self.kind {
            SlotKind::String => Ok(()),
            SlotKind::Boolean => {
                if declopt_config::parse_bool(value).is_some() {
                    Ok(())
                } else {
                    Err(InvalidParameter::NotBoolean {
                        option: option.to_string(),
                        index,
                    })
                }
            }
            SlotKind::Integer(bounds) => match (value.parse::<i64>(), bounds) {
                (Ok(number), Some((lower, upper))) if number < lower || number > upper => {
                    Err(InvalidParameter::OutOfRange {
                        option: option.to_string(),
                        index,
                        lower,
                        upper,
                    })
                }
                (Ok(_), _) => Ok(()),
                // A numeral too large for i64 is still a number to the user.
                (Err(_), Some((lower, upper))) if is_numeral(value) => {
                    Err(InvalidParameter::OutOfRange {
                        option: option.to_string(),
                        index,
                        lower,
                        upper,
                    })
                }
                (Err(_), _) => Err(InvalidParameter::NotInteger {
                    option: option.to_string(),
                    index,
                }),
            },
        }
    }
}

fn is_numeral(value: &str) -> bool {
    let digits = value
        .strip_prefix('-')
        .or_else(|| value.strip_prefix('+'))
        .unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("anything")]
    #[case("a,b")]
    fn string_always_valid(#[case] value: &str) {
        assert_eq!(Slot::string("x").validate("--opt", value, 1), Ok(()));
    }

    #[rstest]
    #[case("true", true)]
    #[case("FALSE", true)]
    #[case("Yes", true)]
    #[case("no", true)]
    #[case("on", true)]
    #[case("Off", true)]
    #[case("1", true)]
    #[case("0", true)]
    #[case("", false)]
    #[case("2", false)]
    #[case("notabool", false)]
    fn boolean(#[case] value: &str, #[case] valid: bool) {
        // Setup
        let slot = Slot::boolean("flag");

        // Execute
        let result = slot.validate("--flag", value, 3);

        // Verify
        if valid {
            assert_eq!(result, Ok(()));
        } else {
            assert_eq!(
                result,
                Err(InvalidParameter::NotBoolean {
                    option: "--flag".to_string(),
                    index: 3,
                })
            );
        }
    }

    #[rstest]
    #[case("0")]
    #[case("-12")]
    #[case("+12")]
    #[case("9223372036854775807")]
    #[case("-9223372036854775808")]
    fn integer_valid(#[case] value: &str) {
        assert_eq!(Slot::integer("n").validate("--n", value, 1), Ok(()));
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("1.5")]
    #[case("12abc")]
    #[case(" 12")]
    #[case("9223372036854775808")]
    fn integer_invalid(#[case] value: &str) {
        assert_matches!(
            Slot::integer("n").validate("--n", value, 2),
            Err(InvalidParameter::NotInteger { index: 2, .. })
        );
    }

    #[rstest]
    #[case("0", true)]
    #[case("100", true)]
    #[case("42", true)]
    #[case("-1", false)]
    #[case("101", false)]
    #[case("200", false)]
    #[case("99999999999999999999", false)]
    fn integer_range(#[case] value: &str, #[case] valid: bool) {
        // Setup
        let slot = Slot::integer_range("percent", 0, 100);

        // Execute
        let result = slot.validate("--range", value, 1);

        // Verify
        if valid {
            assert_eq!(result, Ok(()));
        } else {
            assert_eq!(
                result,
                Err(InvalidParameter::OutOfRange {
                    option: "--range".to_string(),
                    index: 1,
                    lower: 0,
                    upper: 100,
                })
            );
        }
    }

    #[rstest]
    #[case("abc")]
    #[case("")]
    #[case("5x")]
    fn integer_range_not_a_number(#[case] value: &str) {
        // A value which isn't a numeral at all reports as such, even with bounds configured.
        assert_matches!(
            Slot::integer_range("percent", 0, 100).validate("--range", value, 1),
            Err(InvalidParameter::NotInteger { index: 1, .. })
        );
    }

    #[test]
    fn integer_range_swapped() {
        let slot = Slot::integer_range("n", 10, -10);

        assert_eq!(slot.bounds(), Some((-10, 10)));
        assert_eq!(slot.validate("--n", "-10", 1), Ok(()));
        assert_eq!(slot.validate("--n", "10", 1), Ok(()));
        assert_matches!(
            slot.validate("--n", "11", 1),
            Err(InvalidParameter::OutOfRange {
                lower: -10,
                upper: 10,
                ..
            })
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            Slot::integer_range("n", 0, 100)
                .validate("--range", "200", 1)
                .unwrap_err()
                .to_string(),
            "Argument 1 to '--range' must be an integer within range [0,100]."
        );
        assert_eq!(
            Slot::integer("n")
                .validate("--count", "x", 2)
                .unwrap_err()
                .to_string(),
            "Argument 2 to '--count' must be an integer."
        );
        assert_eq!(
            Slot::boolean("b")
                .validate("--verbose", "notabool", 1)
                .unwrap_err()
                .to_string(),
            "Argument 1 to '--verbose' must be a boolean value ('true' or 'false')."
        );
    }

    #[test]
    fn default_slot() {
        let slot = Slot::default();
        assert_eq!(slot.name(), "value");
        assert!(!slot.is_boolean());
        assert_eq!(slot.bounds(), None);
    }
}
