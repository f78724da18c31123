//! Named clipboard side channel
//!
//! Streamed text is not sent in the locator. It is placed on a dedicated
//! pasteboard that Marked reads when it receives the `stream` command.

use crate::error::{SystemError, SystemResult};
#[cfg(target_os = "macos")]
use std::io::Write;
#[cfg(target_os = "macos")]
use std::process::{Command as StdCommand, Stdio};

/// Writes text to a clipboard identified by name
pub trait NamedClipboard {
    /// Replace the clipboard's contents with `text`
    fn write_text(&self, name: &str, text: &str) -> SystemResult<()>;
}

/// JavaScript for Automation snippet: reads UTF-8 from stdin and stores it
/// on the pasteboard named by the first argument
#[cfg(target_os = "macos")]
const PASTEBOARD_SCRIPT: &str = r#"
ObjC.import('AppKit');
function run(argv) {
  var data = $.NSFileHandle.fileHandleWithStandardInput.readDataToEndOfFile;
  var text = $.NSString.alloc.initWithDataEncoding(data, $.NSUTF8StringEncoding);
  var pb = $.NSPasteboard.pasteboardWithName(argv[0]);
  pb.clearContents;
  pb.setStringForType(text, $.NSPasteboardTypeString);
}
"#;

/// macOS pasteboard accessed through `osascript`
#[derive(Debug, Default, Clone, Copy)]
pub struct Pasteboard;

impl NamedClipboard for Pasteboard {
    #[cfg(target_os = "macos")]
    fn write_text(&self, name: &str, text: &str) -> SystemResult<()> {
        let clipboard_error = |error: String| SystemError::Clipboard {
            name: name.to_string(),
            error,
        };

        log::debug!("Writing {} bytes to pasteboard '{}'", text.len(), name);

        let mut child = StdCommand::new("osascript")
            .args(["-l", "JavaScript", "-e", PASTEBOARD_SCRIPT, name])
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| clipboard_error(e.to_string()))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .map_err(|e| clipboard_error(e.to_string()))?;
        }

        let output = child
            .wait_with_output()
            .map_err(|e| clipboard_error(e.to_string()))?;

        if !output.status.success() {
            return Err(clipboard_error(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        Ok(())
    }

    #[cfg(not(target_os = "macos"))]
    fn write_text(&self, name: &str, _text: &str) -> SystemResult<()> {
        log::debug!("No pasteboard '{}' on this platform", name);
        Err(SystemError::ClipboardUnsupported)
    }
}
