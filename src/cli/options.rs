//! Command-line option scanning
//!
//! The scan is deliberately lenient: unknown flags are skipped, flags that
//! need a value silently do nothing when the value is missing, and only the
//! first positional argument is kept. Parsing never fails.

use std::collections::BTreeMap;
use std::fmt;

/// Structured result of the argument scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Intent {
    /// First positional argument (file path or URL)
    pub file_path: Option<String>,
    /// `-` was given
    pub use_stdin: bool,
    /// `-s` / `--stream` was given
    pub stream: bool,
    /// `Some("")` refreshes the frontmost window, `Some("all")` every window
    pub refresh: Option<String>,
    /// `Some("")` opens the default preferences page
    pub pref_page: Option<String>,
    pub dingus: bool,
    pub paste: bool,
    pub raise: bool,
    pub show_help: bool,
    pub show_version: bool,
    pub preview: Option<String>,
    pub extract: Option<String>,
    /// `Some("")` opens Style Stealer without a target URL
    pub style_stealer: Option<String>,
    /// `Some("")` opens Import URL without a target URL
    pub import_url: Option<String>,
    pub style: Option<String>,
    pub add_style: Option<String>,
    pub defaults: BTreeMap<String, String>,
    pub dojs: Option<String>,
    /// Optional document target for `--dojs` (a path or `all`)
    pub dojs_file: Option<String>,
}

/// Non-fatal problems found while scanning
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    MalformedDefault(String),
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseWarning::MalformedDefault(pair) => {
                write!(f, "Invalid defaults format '{}', expected KEY=VALUE", pair)
            }
        }
    }
}

/// Intent plus any warnings produced along the way
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutput {
    pub intent: Intent,
    pub warnings: Vec<ParseWarning>,
}

/// Cursor over the raw tokens
struct Scanner {
    tokens: Vec<String>,
    pos: usize,
}

impl Scanner {
    fn peek(&self) -> Option<&str> {
        self.tokens.get(self.pos + 1).map(String::as_str)
    }

    /// Consume the next token unconditionally
    fn take_value(&mut self) -> Option<String> {
        let value = self.tokens.get(self.pos + 1).cloned()?;
        self.pos += 1;
        Some(value)
    }

    /// Consume the next token only when it does not look like a flag
    fn take_operand(&mut self) -> Option<String> {
        match self.peek() {
            Some(next) if !next.starts_with('-') => self.take_value(),
            _ => None,
        }
    }
}

/// Parse the argument list (without the program name) into an intent
pub fn parse_args<I, S>(args: I) -> ParseOutput
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut scanner = Scanner {
        tokens: args.into_iter().map(Into::into).collect(),
        pos: 0,
    };
    let mut intent = Intent::default();
    let mut warnings = Vec::new();

    while let Some(arg) = scanner.tokens.get(scanner.pos).cloned() {
        match arg.as_str() {
            "-h" | "--help" => intent.show_help = true,
            "-v" | "--version" => intent.show_version = true,
            "-s" | "--stream" => intent.stream = true,
            "--refresh" => {
                intent.refresh = Some(scanner.take_operand().unwrap_or_default());
            }
            "--pref" => {
                intent.pref_page = Some(scanner.take_operand().unwrap_or_default());
            }
            "--dingus" => intent.dingus = true,
            "--paste" => intent.paste = true,
            "--raise" => intent.raise = true,
            "--preview" => {
                intent.preview = required_value(&mut scanner, &arg).or(intent.preview);
            }
            "--extract" => {
                intent.extract = required_value(&mut scanner, &arg).or(intent.extract);
            }
            "--stylestealer" | "--steal" => {
                intent.style_stealer = Some(scanner.take_operand().unwrap_or_default());
            }
            "--importurl" | "--markdownify" => {
                intent.import_url = Some(scanner.take_operand().unwrap_or_default());
            }
            "--style" => {
                intent.style = required_value(&mut scanner, &arg).or(intent.style);
            }
            "--add-style" => {
                intent.add_style = required_value(&mut scanner, &arg).or(intent.add_style);
            }
            "--defaults" => {
                while let Some(pair) = scanner.take_operand() {
                    match pair.split_once('=') {
                        Some((key, value)) => {
                            intent.defaults.insert(key.to_string(), value.to_string());
                        }
                        None => warnings.push(ParseWarning::MalformedDefault(pair)),
                    }
                }
            }
            "--dojs" => {
                if let Some(script) = required_value(&mut scanner, &arg) {
                    intent.dojs = Some(script);
                    if let Some(target) = scanner.take_operand() {
                        intent.dojs_file = Some(target);
                    }
                }
            }
            "-" => intent.use_stdin = true,
            positional if !positional.starts_with('-') => {
                if intent.file_path.is_none() {
                    intent.file_path = Some(positional.to_string());
                }
            }
            unknown => log::debug!("Ignoring unknown option '{}'", unknown),
        }
        scanner.pos += 1;
    }

    log::debug!("Parsed intent: {:?}", intent);
    ParseOutput { intent, warnings }
}

fn required_value(scanner: &mut Scanner, flag: &str) -> Option<String> {
    let value = scanner.take_value();
    if value.is_none() {
        log::debug!("Option '{}' given without a value, ignoring", flag);
    }
    value
}
