//! Main CLI application

use crate::cli::{parse_args, usage_text, version_line, ParseWarning};
use crate::config::Config;
use crate::dispatch::{Dispatcher, Outcome};
use crate::error::MkError;
use crate::version::resolve_version;
use colored::Colorize;

/// CLI application
#[derive(Default)]
pub struct App {
    /// Explicit configuration; discovered on demand when absent
    config: Option<Config>,
}

impl App {
    /// Create a new app that discovers its configuration when it needs it
    pub fn new() -> Self {
        App { config: None }
    }

    /// Create an app with an explicit configuration
    pub fn with_config(config: Config) -> Self {
        App {
            config: Some(config),
        }
    }

    /// Run the application with the given arguments (program name excluded)
    pub fn run<I, S>(&self, args: I) -> Result<(), MkError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let parsed = parse_args(args);
        print_warnings(&parsed.warnings);

        let mut dispatcher = match &self.config {
            Some(config) => Dispatcher::new(config),
            None => Dispatcher::from_env(),
        };
        let outcome = dispatcher.dispatch(&parsed.intent)?;
        log::debug!("Outcome: {:?}", outcome);

        match outcome {
            Outcome::ShowVersion => println!("{}", version_line(&resolve_version())),
            Outcome::ShowUsage => println!("{}", usage_text()),
            Outcome::Sent(_) => {}
        }

        Ok(())
    }
}

fn print_warnings(warnings: &[ParseWarning]) {
    for warning in warnings {
        eprintln!("{} {}", "Warning:".yellow().bold(), warning);
    }
}

/// Run the CLI application with the process arguments
pub fn run() -> Result<(), MkError> {
    // Logs are off unless RUST_LOG is set, e.g. `RUST_LOG=debug mk file.md`
    env_logger::init();

    App::new().run(
        std::env::args_os()
            .skip(1)
            .map(|arg| arg.to_string_lossy().into_owned()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_runs_without_dispatch() {
        let app = App::with_config(Config::default());
        assert!(app.run(["--version"]).is_ok());
    }

    #[test]
    fn test_discovered_config_not_needed_for_version() {
        assert!(App::new().run(["-v"]).is_ok());
    }

    #[test]
    fn test_missing_stylesheet_is_error() {
        let app = App::with_config(Config::default());
        let result = app.run(["--add-style", "/nonexistent/mk-test/none.css"]);
        assert!(matches!(result, Err(MkError::StyleNotFound(_))));
    }
}
