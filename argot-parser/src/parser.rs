//! The parse engine: token scan, value consumption, required-argument
//! tracking and help rendering.

use std::str::FromStr;

use log::{debug, trace};

use crate::registry::Registry;
use crate::value::DefaultValue;

/// Tokens intercepted before alias lookup while auto-help is enabled, so
/// they can never be matched as ordinary definitions.
const HELP_ALIASES: [&str; 2] = ["-h", "--help"];

/// Defines the possible errors that may occur while declaring and parsing
/// arguments.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The alias is already registered to another definition.
    #[error("duplicate definition: {0}")]
    DuplicateDefinition(String),

    /// A required definition was never matched during the scan. Carries the
    /// definition's alias list joined by spaces.
    #[error("missing required argument: {0}")]
    MissingRequiredArgument(String),

    /// The stored text cannot be converted to the requested type.
    #[error("incorrect argument type: cannot convert '{value}' for {alias}")]
    IncorrectArgumentType {
        /// The alias the retrieval went through.
        alias: String,

        /// The stored text that failed to convert.
        value: String,
    },

    /// An option token sat at the end of the input with no value to consume.
    #[error("expected value after {0}")]
    ExpectedValue(String),
}

/// An exact-token argument parser.
///
/// Callers declare flags and value-bearing options up front, run
/// [`Parser::parse`] over the raw token list, then query typed values back
/// through any declared alias. Tokens are matched verbatim against aliases;
/// there is no combined-short-flag or `--opt=value` splitting.
#[derive(Debug)]
pub struct Parser {
    registry: Registry,
    program_name: String,
    unmatched: Vec<String>,
    auto_help: bool,
    help_requested: bool,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Create a parser with automatic help enabled.
    pub fn new() -> Self {
        Parser {
            registry: Registry::default(),
            program_name: String::new(),
            unmatched: Vec::new(),
            auto_help: true,
            help_requested: false,
        }
    }

    /// Enable or disable interception of `-h`/`--help`. While disabled, the
    /// help tokens flow through alias lookup like any other token.
    pub fn set_auto_help(&mut self, enabled: bool) {
        self.auto_help = enabled;
    }

    /// Declare a value-bearing option: matching any alias consumes the next
    /// token as its value.
    ///
    /// Fails with [`Error::DuplicateDefinition`] if any alias is already
    /// taken, in which case none of the aliases are registered.
    pub fn register_argument(
        &mut self,
        aliases: &[&str],
        description: &str,
        default: impl Into<DefaultValue>,
        required: bool,
    ) -> Result<(), Error> {
        self.registry.register(
            aliases,
            description,
            default.into().to_string(),
            required,
            false,
        )
    }

    /// Declare a boolean flag: matching any alias stores `true` and consumes
    /// no further token.
    pub fn register_flag(
        &mut self,
        aliases: &[&str],
        description: &str,
        default: bool,
        required: bool,
    ) -> Result<(), Error> {
        self.registry.register(
            aliases,
            description,
            DefaultValue::Bool(default).to_string(),
            required,
            true,
        )
    }

    /// Scan the token list and update definition state.
    ///
    /// The first token names the program and is never matched. Remaining
    /// tokens, left to right: a flag alias stores `true`; an option alias
    /// consumes the following token verbatim as its value (the value itself
    /// is never looked up) or fails with [`Error::ExpectedValue`] when the
    /// input ends first; anything else accumulates as unmatched. After the
    /// scan, the first required definition still unmatched fails the parse
    /// with [`Error::MissingRequiredArgument`].
    ///
    /// Every call starts from a clean slate: stored values return to their
    /// defaults and required tracking returns to pending, so a corrected
    /// retry is never satisfied by stale state.
    pub fn parse<I>(&mut self, argv: I) -> Result<(), Error>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let args: Vec<String> = argv.into_iter().map(|s| s.as_ref().to_string()).collect();

        self.program_name.clear();
        self.unmatched.clear();
        self.help_requested = false;
        self.registry.reset_cells();

        debug!("scanning {} tokens", args.len());

        if let Some(name) = args.first() {
            self.program_name = name.clone();
        }

        // Slot 0 only names the program.
        let mut cursor = 1;
        while cursor < args.len() {
            let token = &args[cursor];
            cursor += 1;

            if self.auto_help && HELP_ALIASES.contains(&token.as_str()) {
                print!("{}", self.help_text());
                self.help_requested = true;
                continue;
            }

            let Some(slot) = self.registry.lookup(token) else {
                trace!("unmatched token: {token}");
                self.unmatched.push(token.clone());
                continue;
            };

            if self.registry.def(slot).is_flag() {
                self.registry.def_mut(slot).store("true".to_string());
                continue;
            }

            // An option consumes the next token verbatim; it is never itself
            // matched against the index.
            let Some(value) = args.get(cursor) else {
                return Err(Error::ExpectedValue(token.clone()));
            };
            self.registry.def_mut(slot).store(value.clone());
            cursor += 1;
        }

        for def in self.registry.iter() {
            if def.is_pending() {
                return Err(Error::MissingRequiredArgument(def.joined_aliases()));
            }
        }

        Ok(())
    }

    /// Retrieve the current value for `alias`, converted to `T`.
    ///
    /// Returns `Ok(None)` when the alias was never registered. Stored text
    /// that does not convert to `T` is an [`Error::IncorrectArgumentType`]
    /// rather than a silent type default.
    pub fn try_get<T>(&self, alias: &str) -> Result<Option<T>, Error>
    where
        T: FromStr,
    {
        let Some(slot) = self.registry.lookup(alias) else {
            return Ok(None);
        };

        let text = self.registry.def(slot).value_text();

        text.parse::<T>()
            .map(Some)
            .map_err(|_| Error::IncorrectArgumentType {
                alias: alias.to_string(),
                value: text.to_string(),
            })
    }

    /// Retrieve the current value for `alias`, panicking when the stored
    /// text does not convert. See [`Parser::try_get`] for the fallible
    /// variant.
    pub fn get<T>(&self, alias: &str) -> Option<T>
    where
        T: FromStr,
    {
        self.try_get(alias).expect("invalid argument value")
    }

    /// The program name captured by the most recent [`Parser::parse`] call,
    /// or the empty string before the first call.
    pub fn program_name(&self) -> &str {
        &self.program_name
    }

    /// Input tokens from the most recent parse that matched no alias, in
    /// input order.
    pub fn unmatched_args(&self) -> &[String] {
        &self.unmatched
    }

    /// Whether the most recent parse saw a help token while auto-help was
    /// enabled. Callers that want `--help` to stop the program check this
    /// after [`Parser::parse`] and decide for themselves.
    pub fn help_requested(&self) -> bool {
        self.help_requested
    }

    /// Render the help text: a usage banner, then one aligned row per
    /// definition in registration order. This is what [`Parser::parse`]
    /// prints to stdout on a help token.
    pub fn help_text(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("Usage: {} [options]\n", self.program_name));
        out.push_str("\nOptions:\n");

        let width = self
            .registry
            .iter()
            .map(|def| def.joined_aliases().len())
            .max()
            .unwrap_or(0);

        for def in self.registry.iter() {
            let default_text = if def.default_text().is_empty() {
                "<none>"
            } else {
                def.default_text()
            };
            let marker = if def.is_required() {
                "(required)"
            } else {
                "(optional)"
            };

            out.push_str(&format!(
                "  {:width$}  {}  [default: {}]  {}\n",
                def.joined_aliases(),
                def.description(),
                default_text,
                marker,
            ));
        }

        out
    }
}
