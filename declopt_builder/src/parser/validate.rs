use std::collections::BTreeMap;
use thiserror::Error;

use crate::api::{Action, Opt};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A mistake in the option declarations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclarationError {
    /// The same name is used more than once across all the options.
    #[error("Option name used multiple times: {0}")]
    DuplicateName(String),
    /// The option (1-based position in declaration order) has no non-empty long name.
    #[error("Option {0} must have at least one long name.")]
    MissingLongName(usize),
    /// The name contains `=`, which separates names from values on the command line.
    #[error("Option {0} contains forbidden character '='.")]
    ForbiddenCharacter(String),
    /// An inverted boolean action is attached to an option not taking precisely one slot.
    #[error("Option {name} stores an inverted boolean but takes {slots} parameters (must be 1).")]
    InvertedMultiSlot {
        /// The primary name of the option.
        name: String,
        /// The number of slots the option takes.
        slots: usize,
    },
}

/// The option declarations are ill-specified and cannot be parsed against.
///
/// This is a programming error: fix the declarations and recompile.
/// Every problem found is reported, not just the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(pub(crate) Vec<DeclarationError>);

impl ConfigError {
    /// The individual problems, in the order they were found.
    pub fn errors(&self) -> &[DeclarationError] {
        &self.0
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Config error: ill-specified command line options. Unable to parse. Fix and recompile."
        )?;

        for error in &self.0 {
            write!(f, "\n  {error}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ConfigError {}

pub(crate) fn validate_definitions(options: &[Opt]) -> Result<(), ConfigError> {
    let mut errors = Vec::default();
    validate_unique_names(options, &mut errors);
    validate_has_name(options, &mut errors);
    validate_actions(options, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Option declarations rejected with {} problem(s).", errors.len());
        }

        Err(ConfigError(errors))
    }
}

fn validate_unique_names(options: &[Opt], errors: &mut Vec<DeclarationError>) {
    let mut usages: BTreeMap<&str, usize> = BTreeMap::default();

    for name in options.iter().flat_map(Opt::names) {
        // Empty names are caught by `validate_has_name`.
        if !name.is_empty() {
            *usages.entry(name.as_str()).or_default() += 1;
        }
    }

    for (name, count) in usages {
        if count > 1 {
            errors.push(DeclarationError::DuplicateName(name.to_string()));
        }
    }
}

fn validate_has_name(options: &[Opt], errors: &mut Vec<DeclarationError>) {
    for (i, option) in options.iter().enumerate() {
        if !option.long_names().iter().any(|name| !name.is_empty()) {
            errors.push(DeclarationError::MissingLongName(i + 1));
        }

        for name in option.names() {
            if name.contains('=') {
                errors.push(DeclarationError::ForbiddenCharacter(name.clone()));
            }
        }
    }
}

fn validate_actions(options: &[Opt], errors: &mut Vec<DeclarationError>) {
    for option in options {
        let inverts = [option.if_found(), option.if_not_found()]
            .iter()
            .any(|action| **action == Action::StoreInvertedBool);

        if inverts && option.slots().len() != 1 {
            errors.push(DeclarationError::InvertedMultiSlot {
                name: option.primary_name().to_string(),
                slots: option.slots().len(),
            });
        }
    }
}
