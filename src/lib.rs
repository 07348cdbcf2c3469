//! `declopt` is a declarative command line option parser for Rust.
//!
//! Programs declare the options they accept as a table of [`Opt`]s, and `declopt` does the rest: it checks the declarations for consistency, parses the command line against them, reports every problem found, and renders an aligned, word-wrapped help message.
//! Parsed values are not written into program variables; instead they land in a hierarchical configuration tree ([`Node`]) under the keys the declarations name.
//! `declopt` attempts to prioritize the following design concerns:
//! * *Declarative*:
//! Adding an option is one entry in the declaration table, never a new branch in hand-written matching logic.
//! * *Validated at the boundary*:
//! Each value is checked against its slot (boolean, integer, integer within range) before anything is stored.
//! A declaration mistake (ex: a repeated name) is a programming error, caught when the parser is built.
//! * *All the errors at once*:
//! Parsing does not stop at the first bad option; every problem on the command line is reported in one pass.
//! * *Defaults in the tree*:
//! Every option which has a default writes it before parsing, so the tree is fully populated whether or not an option appears.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/demo_server.rs")]
//! ```
//!
//! ```console
//! $ demo_server --help
//! Usage: demo_server --model=<path> [options]
//!
//! Options:
//!   --model=<path>    Path to the model weights.
//!     -m
//!   --mmproj=<path>   Path to the multimodal projector weights.
//!   --host=<host>     Host to serve on. [Default: localhost]
//!   --port=<port>     Port to serve on. [Default: 8080]
//!   --threads=<count> Number of worker threads. [Default: 4]
//!     -t
//!   --verbose         Log every request.
//!     -v
//!   --quiet           Log nothing but errors.
//!     -q
//!   --help            Show this help message and exit.
//!     -h
//!
//! $ demo_server -m=llava.gguf --port=9090 -v
//! Serving 'llava.gguf' on localhost:9090 with 4 thread(s).
//! Verbose logging enabled.
//!
//! $ demo_server --port=99999 --bogus
//! Error: Argument 1 to '--port' must be an integer within range [1,65535].
//! Error: Invalid option: --bogus
//! Error: Missing required option: --model
//! ```
//!
//! # Declarations
//! Configure `declopt` by starting with a [`CommandLineParser`] and `add`ing options.
//! Each [`Opt`] declares:
//! * Its names, matched literally (dashes included): the long names, the first of which is primary, plus any short names.
//! * Its value slots ([`Slot`]), each with a name and validation rule.
//! * The tree key it writes to.
//! * What to do when it is found, and what to do (up front) in case it is not ([`Action`]).
//! * Whether it is required, and how it is described in the help message.
//!
//! The factory constructors cover the common shapes:
//! * [`Opt::switch`]: a boolean flag, defaulting to `false`.
//! * [`Opt::complement_switch`]: the negation of a switch, sharing its key (ex: `--quiet` against `--verbose`).
//! * [`Opt::valued`] & [`Opt::default_valued`]: a single value.
//! * [`Opt::multivalued`] & [`Opt::default_multivalued`]: several values, separated by a delimiter (default `,`).
//! * [`Opt::help`]: the conventional `--help`/`-h` switch.
//!
//! Anything else can be built from [`Opt::new`] with [`Opt::with_slots`], [`Opt::on_found`], and [`Opt::on_missing`].
//!
//! ```no_run
#![doc = include_str!("../demos/demo_geometry.rs")]
//! ```
//!
//! # Cli Semantics
//! `declopt` parses the Cli tokens according to the following rules.
//!
//! * Every token is an option: `--name`, `--name=value`, or `--name=v1,v2,..`.
//! There are no positional arguments, and a value is never taken from the following token.
//! * Only the first `=` separates the name from its values.
//! For example, `--key=a=b` gives `--key` the value `a=b`.
//! * A switch may be written bare; `--verbose` is equivalent to `--verbose=true`.
//! Booleans are any of `true`/`false`, `yes`/`no`, `on`/`off`, `1`/`0` (case insensitive).
//! * A multi-valued option is given all of its values in one token, split by the option's delimiter.
//! The number of values must match the number of slots exactly.
//! * A repeated option overwrites its earlier value.
//! * If help is requested, the help message is printed and missing required options are not reported.
//! * An invocation with no options, against a declaration with any required option, prints the help message and is treated as an error.
//!
//! ### Tree layout
//! An option with key `Server.Port` and slot `port`, given `--port=9090`, writes the following.
//!
//! ```console
//! CommandLine
//! └─ Server
//!    └─ Port = "9090"
//!       └─ port = "9090"
//! ```
//!
//! The option's node holds the raw text; one child per slot holds each split value.
//! Read values back with [`Node::value_or`], which converts via [`FromValue`].
//!
//! # Features
//! * `tracing_debug`: Emit `tracing` debug events for default seeding, option matching, and help layout.
pub use declopt_builder::*;
pub use declopt_config::{parse_bool, FromValue, Node};
