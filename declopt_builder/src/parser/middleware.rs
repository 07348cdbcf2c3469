use std::env;
use std::path::Path;

use declopt_config::Node;

use crate::api::Opt;
use crate::constant::ROOT_NAME;
use crate::model::ParserState;
use crate::parser::base::Parser;
use crate::parser::interface::UserInterface;
use crate::parser::printer::Printer;
use crate::prelude::Destination;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The configured command line parser.
/// Built via [`CommandLineParser::build`](crate::CommandLineParser::build) or [`CommandLineParser::build_parser`](crate::CommandLineParser::build_parser).
pub struct OptionParser {
    parser: Parser,
    printer: Printer,
    user_interface: Box<dyn UserInterface>,
}

/// The configuration tree produced by [`OptionParser::parse`], along with the parse outcome.
#[derive(Debug)]
pub struct ParserResult {
    /// The tree of parsed (and defaulted) values, rooted at a node named `CommandLine`.
    pub config: Node,
    /// Whether the program should exit, and whether due to an error.
    pub state: ParserState,
}

impl OptionParser {
    pub(crate) fn new(
        options: Vec<Opt>,
        help_key: impl Into<String>,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        Self {
            parser: Parser::new(options, help_key),
            printer: Printer::standard(),
            user_interface,
        }
    }

    /// Run the command line parser against the argument vector, writing into the `destination`.
    ///
    /// The first argument is the program invocation (its file stem names the program in the help message); the rest are options.
    /// Every option not found on the command line first receives its default (if it has one).
    /// Each error found is reported on stderr, and parsing continues in order to surface all of them.
    ///
    /// If the help switch is given, the help message is printed on stdout and required options are not checked.
    /// If no options are given while at least one is required, the help message is printed and the state marks an error.
    ///
    /// The process is never exited here; see [`ParserState::exit_code`].
    pub fn parse_tokens<D: Destination, S: AsRef<str>>(
        &self,
        destination: &mut D,
        args: &[S],
    ) -> ParserState {
        let program = program_name(args);
        let tokens: Vec<&str> = args.iter().skip(1).map(AsRef::as_ref).collect();

        if tokens.is_empty() && self.parser.has_required() {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Empty invocation with required options; showing help.");
            }

            self.print_help(&program);
            return ParserState {
                should_exit: true,
                had_error: true,
            };
        }

        let consumed = self.parser.consume(destination, tokens.as_slice());
        let had_error = !consumed.errors.is_empty();

        for error in consumed.errors {
            self.user_interface.print_error(error);
        }

        if consumed.help_requested {
            self.print_help(&program);
        }

        ParserState {
            should_exit: had_error || consumed.help_requested,
            had_error,
        }
    }

    /// Run the command line parser against the argument vector, writing into a fresh configuration tree.
    /// See [`OptionParser::parse_tokens`].
    ///
    /// ### Example
    /// ```
    /// # use declopt_builder as declopt;
    /// use declopt::{CommandLineParser, Opt, Slot};
    ///
    /// let parser = CommandLineParser::new()
    ///     .add(Opt::switch("--verbose", "Verbose", "Print more output."))
    ///     .add(Opt::default_valued("--port", Slot::integer("port"), "8080", "Server.Port", "Port to listen on."))
    ///     .build_parser()
    ///     .unwrap();
    ///
    /// let result = parser.parse(&["server", "--verbose"]);
    ///
    /// assert_eq!(result.state.exit_code(), None);
    /// assert_eq!(result.config.value_or("Verbose", false), true);
    /// assert_eq!(result.config.value_or("Server.Port", 0i64), 8080);
    /// ```
    pub fn parse<S: AsRef<str>>(&self, args: &[S]) -> ParserResult {
        let mut config = Node::new(ROOT_NAME);
        let state = self.parse_tokens(&mut config, args);
        ParserResult { config, state }
    }

    /// Run the command line parser against the process' [`env::args`].
    /// See [`OptionParser::parse_tokens`].
    pub fn parse_env(&self) -> ParserResult {
        let args: Vec<String> = env::args().collect();
        self.parse(args.as_slice())
    }

    /// Print the help message for `program` on stdout.
    pub fn print_help(&self, program: &str) {
        self.printer
            .print_help(self.parser.options(), program, &*self.user_interface);
    }

    /// Render the help message for `program` as lines, without printing.
    pub fn help_lines(&self, program: &str) -> Vec<String> {
        self.printer.render(self.parser.options(), program)
    }
}

fn program_name<S: AsRef<str>>(args: &[S]) -> String {
    args.first()
        .and_then(|invocation| Path::new(invocation.as_ref()).file_stem())
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{InvalidParameter, Slot};
    use crate::constant::HELP_KEY;
    use crate::parser::util::channel_interface;
    use crate::parser::ParseError;
    use crate::test::assert_contains;
    use rstest::rstest;

    fn server_options() -> Vec<Opt> {
        vec![
            Opt::switch("--verbose", "Verbose", "Print more output.").short("-v"),
            Opt::complement_switch("--quiet", "Verbose", "Print less output."),
            Opt::valued("--model", Slot::string("path"), "Model", "Path to the model.").required(),
            Opt::default_multivalued(
                "--range",
                vec![Slot::integer_range("low", 0, 100), Slot::string("direction")],
                "1,west",
                "Range",
                "Range and direction.",
            ),
            Opt::help(),
        ]
    }

    #[rstest]
    #[case(vec![], "")]
    #[case(vec!["server"], "server")]
    #[case(vec!["./server"], "server")]
    #[case(vec!["/usr/local/bin/server.exe", "--verbose"], "server")]
    #[case(vec!["server.tar.gz"], "server.tar")]
    fn program(#[case] args: Vec<&str>, #[case] expected: &str) {
        assert_eq!(program_name(args.as_slice()), expected);
    }

    #[test]
    fn parse_complete() {
        // Setup
        let (sender, receiver) = channel_interface();
        let parser = OptionParser::new(server_options(), HELP_KEY, Box::new(sender));

        // Execute
        let result = parser.parse(&["server", "--model=a.bin", "-v", "--range=42,east"]);

        // Verify
        assert_eq!(
            result.state,
            ParserState {
                should_exit: false,
                had_error: false
            }
        );
        assert_eq!(result.config.name(), "CommandLine");
        assert_eq!(result.config.value_or("Model", String::default()), "a.bin");
        assert!(result.config.value_or("Verbose", false));
        assert_eq!(result.config.value_or("Range.low", 0i64), 42);
        assert_eq!(
            result.config.value_or("Range.direction", String::default()),
            "east"
        );
        assert!(!result.config.value_or(HELP_KEY, true));

        let (messages, errors) = receiver.consume();
        assert!(messages.is_empty());
        assert!(errors.is_empty());
    }

    #[test]
    fn parse_defaults() {
        let (sender, receiver) = channel_interface();
        let parser = OptionParser::new(server_options(), HELP_KEY, Box::new(sender));

        let result = parser.parse(&["server", "--model=a.bin"]);

        assert_eq!(result.state.exit_code(), None);
        assert!(!result.config.value_or("Verbose", true));
        assert_eq!(result.config.value_or("Range", String::default()), "1,west");
        assert_eq!(result.config.value_or("Range.low", 0i64), 1);
        assert_eq!(receiver.consume(), (vec![], vec![]));
    }

    #[test]
    fn parse_errors() {
        // Setup
        let (sender, receiver) = channel_interface();
        let parser = OptionParser::new(server_options(), HELP_KEY, Box::new(sender));

        // Execute
        let result = parser.parse(&["server", "--range=200,east", "--bogus"]);

        // Verify
        assert_eq!(
            result.state,
            ParserState {
                should_exit: true,
                had_error: true
            }
        );
        assert_eq!(result.config.value_or("Range", String::default()), "1,west");

        let (messages, errors) = receiver.consume();
        assert!(messages.is_empty());
        assert_eq!(
            errors,
            vec![
                ParseError::InvalidParameter(InvalidParameter::OutOfRange {
                    option: "--range".to_string(),
                    index: 1,
                    lower: 0,
                    upper: 100,
                }),
                ParseError::InvalidOption("--bogus".to_string()),
                ParseError::MissingRequired("--model".to_string()),
            ]
        );
    }

    #[rstest]
    #[case(vec!["server", "--help"])]
    #[case(vec!["server", "-h"])]
    #[case(vec!["server", "--verbose", "--help"])]
    fn parse_help(#[case] args: Vec<&str>) {
        // Setup
        let (sender, receiver) = channel_interface();
        let parser = OptionParser::new(server_options(), HELP_KEY, Box::new(sender));

        // Execute
        let result = parser.parse(args.as_slice());

        // Verify
        assert_eq!(
            result.state,
            ParserState {
                should_exit: true,
                had_error: false
            }
        );
        assert_eq!(result.state.exit_code(), Some(0));

        let message = receiver.consume_message();
        assert_eq!(message, parser.help_lines("server").join("\n"));
        assert_contains!(message, "Usage: server --model=<path> [options]");
    }

    #[test]
    fn parse_help_with_error() {
        let (sender, receiver) = channel_interface();
        let parser = OptionParser::new(server_options(), HELP_KEY, Box::new(sender));

        let result = parser.parse(&["server", "--help", "--range=1"]);

        assert_eq!(result.state.exit_code(), Some(1));
        let (messages, errors) = receiver.consume();
        assert_eq!(messages, parser.help_lines("server"));
        assert_matches!(
            errors.as_slice(),
            [ParseError::WrongParameterCount { expected: 2, given: 1, .. }]
        );
    }

    #[rstest]
    #[case(vec!["server"])]
    #[case(vec![])]
    fn parse_empty_with_required(#[case] args: Vec<&str>) {
        // Setup
        let (sender, receiver) = channel_interface();
        let parser = OptionParser::new(server_options(), HELP_KEY, Box::new(sender));
        let mut config = Node::new("root");

        // Execute
        let state = parser.parse_tokens(&mut config, args.as_slice());

        // Verify
        assert_eq!(
            state,
            ParserState {
                should_exit: true,
                had_error: true
            }
        );
        // Defaults are not seeded.
        assert_eq!(config, Node::new("root"));

        let (messages, errors) = receiver.consume();
        assert!(errors.is_empty());
        assert_eq!(messages[0].split_whitespace().next(), Some("Usage:"));
    }

    #[test]
    fn parse_empty_without_required() {
        let (sender, receiver) = channel_interface();
        let parser = OptionParser::new(
            vec![Opt::switch("--verbose", "Verbose", "")],
            HELP_KEY,
            Box::new(sender),
        );

        let result = parser.parse(&["server"]);

        assert_eq!(result.state.exit_code(), None);
        assert!(!result.config.value_or("Verbose", true));
        assert_eq!(receiver.consume(), (vec![], vec![]));
    }

    #[test]
    fn parse_custom_help_key() {
        let (sender, receiver) = channel_interface();
        let parser = OptionParser::new(
            vec![Opt::switch("--usage", "Usage", "Show usage.").short("-?")],
            "Usage",
            Box::new(sender),
        );

        let result = parser.parse(&["tool", "-?"]);

        assert_eq!(result.state.exit_code(), Some(0));
        assert_contains!(receiver.consume_message(), "Usage: tool [options]");
    }

    #[test]
    fn parse_into_existing() {
        // Setup
        let (sender, _receiver) = channel_interface();
        let parser = OptionParser::new(server_options(), HELP_KEY, Box::new(sender));
        let mut config = Node::new("root");
        config.set("Server.Host", "localhost");

        // Execute
        let state = parser.parse_tokens(&mut config, &["server".to_string(), "--model=b.bin".to_string()]);

        // Verify
        assert_eq!(state.exit_code(), None);
        assert_eq!(config.value_or("Server.Host", String::default()), "localhost");
        assert_eq!(config.value_or("Model.path", String::default()), "b.bin");
    }

    #[test]
    fn print_help() {
        let (sender, receiver) = channel_interface();
        let parser = OptionParser::new(server_options(), HELP_KEY, Box::new(sender));

        parser.print_help("server");

        assert_eq!(receiver.consume_message(), parser.help_lines("server").join("\n"));
    }
}
