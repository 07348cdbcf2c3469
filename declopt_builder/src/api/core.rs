use crate::api::Opt;
use crate::constant::HELP_KEY;
use crate::parser::{validate_definitions, ConfigError, ConsoleInterface, OptionParser, UserInterface};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The base command line parser.
///
/// ### Example
/// ```
/// # use declopt_builder as declopt;
/// use declopt::{CommandLineParser, Opt};
///
/// let parser = CommandLineParser::new()
///     // Configure with CommandLineParser::add.
///     .add(Opt::help())
///     .build();
/// let result = parser.parse(&["program"]);
/// assert_eq!(result.state.exit_code(), None);
/// ```
#[derive(Debug, Clone)]
pub struct CommandLineParser {
    options: Vec<Opt>,
    help_key: String,
}

impl Default for CommandLineParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandLineParser {
    /// Create a command line parser.
    pub fn new() -> Self {
        Self {
            options: Vec::default(),
            help_key: HELP_KEY.to_string(),
        }
    }

    /// Add an option declaration.
    /// Options are matched, and listed in the help message, in the order they are added.
    ///
    /// ### Example
    /// ```
    /// # use declopt_builder as declopt;
    /// use declopt::{CommandLineParser, Opt, Slot};
    ///
    /// let parser = CommandLineParser::new()
    ///     .add(Opt::switch("--verbose", "Verbose", "Print more output.").short("-v"))
    ///     .add(Opt::complement_switch("--quiet", "Verbose", "Print less output."))
    ///     .add(Opt::valued("--model", Slot::string("path"), "Model", "Path to the model.").required())
    ///     .build();
    ///
    /// let result = parser.parse(&["program", "--model=a.bin", "-v"]);
    ///
    /// assert_eq!(result.state.exit_code(), None);
    /// assert_eq!(result.config.value_or("Verbose", false), true);
    /// assert_eq!(result.config.value_or("Model.path", String::default()), "a.bin");
    /// ```
    pub fn add(mut self, option: Opt) -> Self {
        self.options.push(option);
        self
    }

    /// Set the key read after parsing to decide whether help was requested (default `ShowHelp`).
    /// The value found there is interpreted as a boolean.
    pub fn help_key(mut self, key: impl Into<String>) -> Self {
        self.help_key = key.into();
        self
    }

    pub(crate) fn build_with_interface(
        self,
        user_interface: Box<dyn UserInterface>,
    ) -> Result<OptionParser, ConfigError> {
        validate_definitions(&self.options)?;

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Built parser over {} option(s), help key '{}'.", self.options.len(), self.help_key);
        }

        Ok(OptionParser::new(
            self.options,
            self.help_key,
            user_interface,
        ))
    }

    /// Build the command line parser as a Result.
    /// This finalizes the configuration and checks for errors (ex: a repeated option name).
    pub fn build_parser(self) -> Result<OptionParser, ConfigError> {
        self.build_with_interface(Box::new(ConsoleInterface::default()))
    }

    /// Build the command line parser.
    /// This finalizes the configuration and checks for errors (ex: a repeated option name).
    /// If an error is encountered, exits with error code `1` (via [`std::process::exit`]).
    pub fn build(self) -> OptionParser {
        match self.build_parser() {
            Ok(op) => op,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}
