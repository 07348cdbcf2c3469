use std::collections::HashSet;
use thiserror::Error;

use crate::api::{InvalidParameter, Opt};
use crate::prelude::Destination;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A user input error found while parsing the command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No option goes by this name.
    #[error("Invalid option: {0}")]
    InvalidOption(String),
    /// A single-valued option was given without its value.
    #[error("'{option}' expects a parameter but none was given.")]
    MissingParameter {
        /// The option name as written on the command line.
        option: String,
    },
    /// A value was given to an option which takes none.
    #[error("'{option}' does not take a parameter but '{value}' was given.")]
    UnexpectedParameter {
        /// The option name as written on the command line.
        option: String,
        /// The value given.
        value: String,
    },
    /// A multi-valued option was given the wrong number of values.
    #[error("'{option}' expects {expected} parameters but {given} {verb} given.", verb = was_were(.given))]
    WrongParameterCount {
        /// The option name as written on the command line.
        option: String,
        /// The number of slots the option takes.
        expected: usize,
        /// The number of values given.
        given: usize,
    },
    /// A value failed its slot's validation.
    #[error(transparent)]
    InvalidParameter(#[from] InvalidParameter),
    /// A required option never appeared.
    #[error("Missing required option: {0}")]
    MissingRequired(String),
}

fn was_were(count: &usize) -> &'static str {
    if *count == 1 {
        "was"
    } else {
        "were"
    }
}

/// The result of consuming the command line tokens.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Consumed {
    pub(crate) help_requested: bool,
    /// In the order they were found.
    pub(crate) errors: Vec<ParseError>,
}

pub(crate) struct Parser {
    options: Vec<Opt>,
    help_key: String,
}

impl Parser {
    /// The options must already have passed `validate_definitions`.
    pub(crate) fn new(options: Vec<Opt>, help_key: impl Into<String>) -> Self {
        Self {
            options,
            help_key: help_key.into(),
        }
    }

    pub(crate) fn options(&self) -> &[Opt] {
        &self.options
    }

    pub(crate) fn has_required(&self) -> bool {
        self.options.iter().any(Opt::is_required)
    }

    /// Parse the `tokens` (excluding the program name) into the `destination`.
    pub(crate) fn consume<D: Destination>(&self, destination: &mut D, tokens: &[&str]) -> Consumed {
        // 1. Seed every key with its not-found action, so absent options leave their default behind.
        for option in &self.options {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Seeding '{}' with {:?}.", option.key(), option.if_not_found());
            }

            option
                .if_not_found()
                .perform(destination, option, "", &[]);
        }

        let mut seen: HashSet<usize> = HashSet::default();
        let mut errors = Vec::default();

        // 2. Match and apply each token, accumulating errors rather than stopping at the first.
        for token in tokens {
            let (name, mut values, separator) = match token.split_once('=') {
                Some((name, values)) => (name, values.to_string(), true),
                None => (*token, String::default(), false),
            };

            let (index, option) = match self
                .options
                .iter()
                .enumerate()
                .find(|(_, option)| option.matches(name))
            {
                Some(found) => found,
                None => {
                    errors.push(ParseError::InvalidOption(name.to_string()));
                    continue;
                }
            };

            let mut value_list = if values.is_empty() {
                Vec::default()
            } else if option.slots().len() == 1 {
                vec![values.clone()]
            } else if option.slots().len() > 1 {
                option.split(&values)
            } else {
                Vec::default()
            };

            let option_errors = if !separator && option.is_switch() {
                // `--switch` is shorthand for `--switch=true`.
                values = "true".to_string();
                value_list.push(values.clone());
                Vec::default()
            } else {
                validate_parameters(option, name, &values, &value_list)
            };

            if option_errors.is_empty() {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Matched '{name}' to '{}' with values '{values}'.", option.primary_name());
                }

                option
                    .if_found()
                    .perform(destination, option, &values, &value_list);
                seen.insert(index);
            } else {
                errors.extend(option_errors);
            }
        }

        // 3. Help takes precedence over any missing required options.
        let help_requested = destination.value_or(&self.help_key, false);

        if !help_requested {
            for (index, option) in self.options.iter().enumerate() {
                if option.is_required() && !seen.contains(&index) {
                    errors.push(ParseError::MissingRequired(
                        option.primary_name().to_string(),
                    ));
                }
            }
        }

        Consumed {
            help_requested,
            errors,
        }
    }
}

fn validate_parameters(
    option: &Opt,
    name: &str,
    values: &str,
    value_list: &[String],
) -> Vec<ParseError> {
    let expected = option.slots().len();

    if expected == 0 && !values.is_empty() {
        return vec![ParseError::UnexpectedParameter {
            option: name.to_string(),
            value: values.to_string(),
        }];
    }

    if expected != value_list.len() {
        let error = if expected == 1 {
            ParseError::MissingParameter {
                option: name.to_string(),
            }
        } else {
            ParseError::WrongParameterCount {
                option: name.to_string(),
                expected,
                given: value_list.len(),
            }
        };

        return vec![error];
    }

    option
        .slots()
        .iter()
        .zip(value_list)
        .enumerate()
        .filter_map(|(i, (slot, value))| slot.validate(name, value, i + 1).err())
        .map(ParseError::from)
        .collect()
}
