//! Help and version text
//!
//! The clap command here only describes the interface for rendering help;
//! argument scanning itself is done by [`crate::cli::options`].

use clap::{Arg, ArgAction, Command};

const ABOUT: &str = "Open files in Marked or stream content from STDIN.";

const EXAMPLES: &str = "\
Examples:
  mk file.md                            Open file.md in Marked
  echo \"# Hello\" | mk                   Stream from STDIN
  mk -                                  Stream from STDIN (explicit)
  mk --stream                           Open streaming preview
  mk --refresh                          Refresh the frontmost preview
  mk --refresh all                      Refresh all previews
  mk --pref                             Open preferences
  mk --dingus                           Open Markdown Dingus
  mk --preview \"Hello **world**\"        Preview text directly
  mk --extract https://example.com      Extract and preview URL
  mk --add-style ~/Styles/custom.css    Add custom style
  mk --defaults syntaxHighlight=1 includeMathJax=0
                                        Set preferences
  mk --dojs \"window.scrollTo(0,0)\"      Run JavaScript in frontmost window
  mk --dojs \"alert('Hello')\" all        Run JavaScript in all windows";

/// Build the clap command describing mk's interface
pub fn build_command() -> Command {
    Command::new("mk")
        .about(ABOUT)
        .override_usage("mk [options] [file|-]")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .after_help(EXAMPLES)
        .arg(
            Arg::new("file")
                .value_name("file|-")
                .help("Markdown file to open in Marked, or - to read from STDIN (default if no file is given)"),
        )
        .arg(flag("help", Some('h'), "Show this help message"))
        .arg(flag("version", Some('v'), "Show version information"))
        .arg(flag("stream", Some('s'), "Open streaming preview window"))
        .arg(
            optional_value("refresh", "file|all")
                .help("Refresh preview(s): frontmost window by default, \"all\" for every window, or the window showing a file"),
        )
        .arg(
            optional_value("pref", "page")
                .help("Open Marked preferences, on the General page unless a page name is given"),
        )
        .arg(flag("dingus", None, "Open Markdown Dingus"))
        .arg(flag("paste", None, "Create new document from clipboard"))
        .arg(flag("raise", None, "Raise window after opening (use with file argument)"))
        .arg(value("preview", "TEXT").help("Preview text directly in a new document"))
        .arg(value("extract", "URL").help("Extract content from URL and open in Marked"))
        .arg(
            optional_value("stylestealer", "URL")
                .visible_alias("steal")
                .help("Open Style Stealer HUD (optionally with URL)"),
        )
        .arg(
            optional_value("importurl", "URL")
                .visible_alias("markdownify")
                .help("Open Import URL window (optionally with URL)"),
        )
        .arg(
            value("style", "NAME")
                .help("Preview style name (accepted, not forwarded to Marked)"),
        )
        .arg(value("add-style", "FILE").help("Add a CSS file as a custom style to Marked"))
        .arg(
            Arg::new("defaults")
                .long("defaults")
                .value_name("KEY=VALUE")
                .num_args(1..)
                .help("Set user preferences (multiple pairs allowed)"),
        )
        .arg(
            Arg::new("dojs")
                .long("dojs")
                .value_names(["SCRIPT", "FILE"])
                .num_args(1..=2)
                .help("Run JavaScript in document(s); FILE targets specific document(s) or \"all\""),
        )
}

fn flag(name: &'static str, short: Option<char>, help: &'static str) -> Arg {
    let mut arg = Arg::new(name)
        .long(name)
        .action(ArgAction::SetTrue)
        .help(help);
    if let Some(c) = short {
        arg = arg.short(c);
    }
    arg
}

fn value(name: &'static str, value_name: &'static str) -> Arg {
    Arg::new(name).long(name).value_name(value_name)
}

fn optional_value(name: &'static str, value_name: &'static str) -> Arg {
    value(name, value_name).num_args(0..=1)
}

/// Full usage text
pub fn usage_text() -> String {
    build_command().render_help().to_string()
}

/// Version line printed by `--version`
pub fn version_line(version: &str) -> String {
    format!("mk version {}", version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_well_formed() {
        build_command().debug_assert();
    }

    #[test]
    fn test_usage_lists_options_and_examples() {
        let text = usage_text();
        assert!(text.contains("mk [options] [file|-]"));
        assert!(text.contains("--refresh"));
        assert!(text.contains("--defaults"));
        assert!(text.contains("--dojs"));
        assert!(text.contains("steal"));
        assert!(text.contains("Examples:"));
    }

    #[test]
    fn test_style_help_says_it_is_not_forwarded() {
        let help = build_command()
            .get_arguments()
            .find(|arg| arg.get_id() == "style")
            .and_then(|arg| arg.get_help())
            .map(|help| help.to_string())
            .unwrap();
        assert!(help.contains("not forwarded"));
    }

    #[test]
    fn test_version_line() {
        assert_eq!(version_line("3.0.0"), "mk version 3.0.0");
    }
}
