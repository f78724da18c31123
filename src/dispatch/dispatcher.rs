//! Intent to request translation
//!
//! Exactly one action is taken per invocation. Version and help pre-empt
//! everything, remote commands pre-empt file and stdin handling, and the
//! first matching branch wins.

use crate::cli::Intent;
use crate::config::{load_config, Config};
use crate::dispatch::paths::{style_display_name, PathContext};
use crate::error::{ConfigResult, MkError, Result};
use crate::request::{build_locator, Command, Request};
use crate::system::{
    LocatorOpener, NamedClipboard, Pasteboard, ProcessStdin, StandardInput, SystemOpener,
};
use std::cell::OnceCell;

/// What the dispatcher did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the version line
    ShowVersion,
    /// Print usage text
    ShowUsage,
    /// A request was handed to the operating system
    Sent(Request),
}

/// Turns an intent into at most one dispatched request
///
/// Configuration is only consulted once a locator has to be built, so
/// version, help and missing-file outcomes never depend on it.
pub struct Dispatcher<'a> {
    config: OnceCell<Config>,
    load_config: Box<dyn Fn() -> ConfigResult<Config> + 'a>,
    paths: PathContext,
    opener: Box<dyn LocatorOpener + 'a>,
    clipboard: Box<dyn NamedClipboard + 'a>,
    input: Box<dyn StandardInput + 'a>,
}

impl<'a> Dispatcher<'a> {
    /// Create a dispatcher with a known configuration, wired to the real
    /// operating system
    pub fn new(config: &Config) -> Self {
        Dispatcher {
            config: OnceCell::from(config.clone()),
            ..Dispatcher::from_env()
        }
    }

    /// Create a dispatcher that loads configuration on first use
    pub fn from_env() -> Self {
        Dispatcher {
            config: OnceCell::new(),
            load_config: Box::new(load_config),
            paths: PathContext::from_env(),
            opener: Box::new(SystemOpener),
            clipboard: Box::new(Pasteboard),
            input: Box::new(ProcessStdin),
        }
    }

    /// Load configuration lazily with the given function
    pub fn with_config_loader(
        mut self,
        loader: impl Fn() -> ConfigResult<Config> + 'a,
    ) -> Self {
        self.config = OnceCell::new();
        self.load_config = Box::new(loader);
        self
    }

    /// Set the directories used for path resolution
    pub fn with_paths(mut self, paths: PathContext) -> Self {
        self.paths = paths;
        self
    }

    /// Set the locator opener
    pub fn with_opener(mut self, opener: impl LocatorOpener + 'a) -> Self {
        self.opener = Box::new(opener);
        self
    }

    /// Set the named clipboard
    pub fn with_clipboard(mut self, clipboard: impl NamedClipboard + 'a) -> Self {
        self.clipboard = Box::new(clipboard);
        self
    }

    /// Set the standard input source
    pub fn with_input(mut self, input: impl StandardInput + 'a) -> Self {
        self.input = Box::new(input);
        self
    }

    /// Perform the single action the intent asks for
    pub fn dispatch(&mut self, intent: &Intent) -> Result<Outcome> {
        if intent.show_version {
            return Ok(Outcome::ShowVersion);
        }
        if intent.show_help {
            return Ok(Outcome::ShowUsage);
        }

        if let Some(style) = &intent.style {
            log::debug!("--style '{}' is not forwarded to Marked", style);
        }

        if let Some(request) = command_request(intent, &self.paths)? {
            return self.send(request);
        }

        if let Some(file_path) = &intent.file_path {
            let resolved = self.paths.resolve(file_path);
            log::debug!("Resolved '{}' to {}", file_path, resolved.display());
            if !resolved.exists() {
                return Err(MkError::FileNotFound(resolved));
            }

            let mut request =
                Request::new(Command::Open).with_param("file", resolved.to_string_lossy());
            if intent.raise {
                request = request.with_param("raise", "true");
            }
            return self.send(request);
        }

        if intent.stream && !intent.use_stdin {
            return self.send(Request::new(Command::Stream));
        }

        if intent.use_stdin || !self.input.is_terminal() {
            return self.stream_stdin();
        }

        log::debug!("Nothing to do on an interactive terminal");
        Ok(Outcome::ShowUsage)
    }

    fn config(&self) -> Result<&Config> {
        if let Some(config) = self.config.get() {
            return Ok(config);
        }
        let loaded = (self.load_config)()?;
        Ok(self.config.get_or_init(|| loaded))
    }

    /// Copy all of stdin to the streaming pasteboard, then open the stream window
    fn stream_stdin(&mut self) -> Result<Outcome> {
        let request = Request::new(Command::Stream);
        let locator = self.locator(&request)?;
        let pasteboard = self.config()?.pasteboard.clone();

        let bytes = self.input.read_all().map_err(|e| {
            log::debug!("Reading stdin failed: {}", e);
            MkError::StdinUnreadable
        })?;
        let text = String::from_utf8(bytes).map_err(|_| MkError::StdinUnreadable)?;

        self.clipboard.write_text(&pasteboard, &text)?;
        self.opener.open(&locator)?;
        Ok(Outcome::Sent(request))
    }

    fn locator(&self, request: &Request) -> Result<String> {
        Ok(build_locator(&self.config()?.url_scheme, request)?)
    }

    fn send(&self, request: Request) -> Result<Outcome> {
        let locator = self.locator(&request)?;
        log::debug!("Dispatching {}", locator);
        self.opener.open(&locator)?;
        Ok(Outcome::Sent(request))
    }
}

/// Build the request for the first remote command the intent names, if any
pub fn command_request(intent: &Intent, paths: &PathContext) -> Result<Option<Request>> {
    if let Some(target) = &intent.refresh {
        return Ok(Some(
            Request::new(Command::Refresh).with_non_empty("file", Some(target.as_str())),
        ));
    }

    if let Some(page) = &intent.pref_page {
        return Ok(Some(
            Request::new(Command::Pref).with_non_empty("page", Some(page.as_str())),
        ));
    }

    if intent.dingus {
        return Ok(Some(Request::new(Command::Dingus)));
    }

    if intent.paste {
        return Ok(Some(Request::new(Command::Paste)));
    }

    if let Some(text) = &intent.preview {
        return Ok(Some(Request::new(Command::Preview).with_param("text", text)));
    }

    if let Some(url) = &intent.extract {
        return Ok(Some(Request::new(Command::Extract).with_param("url", url)));
    }

    if let Some(url) = &intent.style_stealer {
        return Ok(Some(
            Request::new(Command::StyleStealer).with_non_empty("url", Some(url.as_str())),
        ));
    }

    if let Some(url) = &intent.import_url {
        return Ok(Some(
            Request::new(Command::ImportUrl).with_non_empty("url", Some(url.as_str())),
        ));
    }

    if let Some(css) = &intent.add_style {
        let resolved = paths.resolve(css);
        log::debug!("Resolved stylesheet '{}' to {}", css, resolved.display());
        if !resolved.exists() {
            return Err(MkError::StyleNotFound(resolved));
        }

        let name = style_display_name(&resolved);
        return Ok(Some(
            Request::new(Command::AddStyle)
                .with_param("file", resolved.to_string_lossy())
                .with_param("name", name),
        ));
    }

    if !intent.defaults.is_empty() {
        return Ok(Some(
            Request::new(Command::Defaults).with_params(intent.defaults.clone()),
        ));
    }

    if let Some(script) = &intent.dojs {
        let mut request = Request::new(Command::Do).with_param("js", script);
        if let Some(target) = &intent.dojs_file {
            request = request.with_param("file", target);
        }
        return Ok(Some(request));
    }

    Ok(None)
}
