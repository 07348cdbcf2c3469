use crate::api::{Action, Slot};
use crate::constant::*;
use crate::model::Requirement;

/// The declaration of one accepted command line option.
///
/// Names are matched literally, so they include their leading dashes (ex: `--verbose` or `-v`).
/// The first long name is the primary name; it is the one shown with full syntax in the help message.
///
/// Start from one of the factory constructors, then refine with the chainable modifiers.
///
/// ### Example
/// ```
/// # use declopt_builder as declopt;
/// use declopt::{Opt, Slot};
///
/// let verbose = Opt::switch("--verbose", "Verbose", "Print more output.").short("-v");
/// let port = Opt::default_valued(
///     "--port",
///     Slot::integer_range("port", 1, 65535),
///     "8080",
///     "Server.Port",
///     "Port to listen on.",
/// );
/// let model = Opt::valued("--model", Slot::string("path"), "Model", "Model weights.").required();
///
/// assert!(verbose.is_switch());
/// assert!(!port.is_switch());
/// assert!(model.is_required());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opt {
    long_names: Vec<String>,
    short_names: Vec<String>,
    slots: Vec<Slot>,
    delimiter: char,
    if_found: Action,
    if_not_found: Action,
    key: String,
    description: String,
    default_description: String,
    requirement: Requirement,
}

impl Opt {
    /// Create a pure flag taking no values.
    ///
    /// When found, the empty string is stored at `key`; when absent, nothing is stored.
    /// Use [`Opt::with_slots`], [`Opt::on_found`], and [`Opt::on_missing`] to build a custom option from here.
    pub fn new(
        long_name: impl Into<String>,
        key: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            long_names: vec![long_name.into()],
            short_names: Vec::default(),
            slots: Vec::default(),
            delimiter: DEFAULT_DELIMITER,
            if_found: Action::StoreValues,
            if_not_found: Action::Nothing,
            key: key.into(),
            description: description.into(),
            default_description: String::default(),
            requirement: Requirement::Optional,
        }
    }

    /// Create a boolean switch, defaulting to `false`.
    ///
    /// May be written bare (`--flag`, meaning `--flag=true`) or with an explicit boolean (`--flag=off`).
    pub fn switch(
        long_name: impl Into<String>,
        key: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(long_name, key, description)
            .with_slots(vec![Slot::boolean(DEFAULT_SLOT_NAME)])
            .on_missing(Action::StoreConstants("false".to_string()))
    }

    /// Create the complement of a [`Opt::switch`] sharing the same `key`.
    ///
    /// This stores the inverse of its boolean value, and has *no* default, so the switch's own default stands when it is absent.
    /// Use only alongside the switch it complements.
    pub fn complement_switch(
        long_name: impl Into<String>,
        key: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::switch(long_name, key, description)
            .on_found(Action::StoreInvertedBool)
            .on_missing(Action::Nothing)
    }

    /// Create an option taking a single value, with no default.
    pub fn valued(
        long_name: impl Into<String>,
        slot: Slot,
        key: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(long_name, key, description).with_slots(vec![slot])
    }

    /// Create an option taking a single value, storing `default` when absent.
    pub fn default_valued(
        long_name: impl Into<String>,
        slot: Slot,
        default: impl Into<String>,
        key: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let default = default.into();
        Self::valued(long_name, slot, key, description)
            .on_missing(Action::StoreConstants(default.clone()))
            .with_default_description(default)
    }

    /// Create an option taking one value per slot, with no default.
    pub fn multivalued(
        long_name: impl Into<String>,
        slots: Vec<Slot>,
        key: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(long_name, key, description).with_slots(slots)
    }

    /// Create an option taking one value per slot, storing `defaults` when absent.
    /// The `defaults` are written exactly as they would be on the command line (ex: `"1,2"`).
    pub fn default_multivalued(
        long_name: impl Into<String>,
        slots: Vec<Slot>,
        defaults: impl Into<String>,
        key: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let defaults = defaults.into();
        Self::multivalued(long_name, slots, key, description)
            .on_missing(Action::StoreConstants(defaults.clone()))
            .with_default_description(defaults)
    }

    /// Create the conventional `--help`/`-h` switch.
    ///
    /// It writes to the default help key (`ShowHelp`) watched by the parser.
    pub fn help() -> Self {
        Self::switch(HELP_NAME, HELP_KEY, HELP_MESSAGE).short(HELP_SHORT)
    }

    /// Add another long name.
    pub fn alias(mut self, long_name: impl Into<String>) -> Self {
        self.long_names.push(long_name.into());
        self
    }

    /// Add a short name.
    pub fn short(mut self, short_name: impl Into<String>) -> Self {
        self.short_names.push(short_name.into());
        self
    }

    /// Mark the option as required.
    pub fn required(mut self) -> Self {
        self.requirement = Requirement::Required;
        self
    }

    /// Set the character separating the values of a multi-valued option (default `,`).
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Replace the value slots.
    pub fn with_slots(mut self, slots: Vec<Slot>) -> Self {
        self.slots = slots;
        self
    }

    /// Replace the action run when the option is found.
    pub fn on_found(mut self, action: Action) -> Self {
        self.if_found = action;
        self
    }

    /// Replace the action seeded before parsing, standing for when the option is absent.
    pub fn on_missing(mut self, action: Action) -> Self {
        self.if_not_found = action;
        self
    }

    /// Document the default shown in the help message (empty shows none).
    pub fn with_default_description(mut self, description: impl Into<String>) -> Self {
        self.default_description = description.into();
        self
    }

    /// The long names, primary first.
    pub fn long_names(&self) -> &[String] {
        &self.long_names
    }

    /// The short names.
    pub fn short_names(&self) -> &[String] {
        &self.short_names
    }

    /// The primary (first long) name, or `""` if there is none.
    pub fn primary_name(&self) -> &str {
        self.long_names.first().map(String::as_str).unwrap_or("")
    }

    /// Every name: long names followed by short names.
    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.long_names.iter().chain(self.short_names.iter())
    }

    /// The value slots.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// The key in the destination written by this option.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The help description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The help default description.
    pub fn default_description(&self) -> &str {
        &self.default_description
    }

    /// The multi-value delimiter.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Whether the option is required.
    pub fn is_required(&self) -> bool {
        self.requirement == Requirement::Required
    }

    /// Whether this option is a switch: precisely one boolean slot.
    pub fn is_switch(&self) -> bool {
        matches!(&self.slots[..], [slot] if slot.is_boolean())
    }

    pub(crate) fn matches(&self, name: &str) -> bool {
        self.names().any(|n| n == name)
    }

    pub(crate) fn if_found(&self) -> &Action {
        &self.if_found
    }

    pub(crate) fn if_not_found(&self) -> &Action {
        &self.if_not_found
    }

    pub(crate) fn split(&self, values: &str) -> Vec<String> {
        values.split(self.delimiter).map(str::to_string).collect()
    }
}
