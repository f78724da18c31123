//! Standard input access

use std::io::{self, IsTerminal, Read};

/// Standard input as seen by the dispatcher
pub trait StandardInput {
    /// Whether input is attached to an interactive terminal
    fn is_terminal(&self) -> bool;

    /// Read everything up to end-of-stream
    fn read_all(&mut self) -> io::Result<Vec<u8>>;
}

/// The process's real standard input
#[derive(Debug, Default)]
pub struct ProcessStdin;

impl StandardInput for ProcessStdin {
    fn is_terminal(&self) -> bool {
        io::stdin().is_terminal()
    }

    fn read_all(&mut self) -> io::Result<Vec<u8>> {
        let mut buffer = Vec::new();
        io::stdin().lock().read_to_end(&mut buffer)?;
        Ok(buffer)
    }
}
