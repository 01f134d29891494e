// In-memory sink for capturing printed output

use super::sink::CharSink;
use std::convert::Infallible;

/// Mock terminal that records every byte written to it
#[derive(Debug, Clone, Default)]
pub struct MockTerminal {
    bytes: Vec<u8>,
}

impl MockTerminal {
    pub fn new() -> Self {
        MockTerminal { bytes: Vec::new() }
    }

    /// Raw captured bytes
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Captured output as text
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }

    /// Captured output split into lines
    pub fn lines(&self) -> Vec<String> {
        let mut result: Vec<String> = self.output().split('\n').map(|s| s.to_string()).collect();
        // Remove trailing empty string if output ended with newline
        if result.last().is_some_and(|s| s.is_empty()) {
            result.pop();
        }
        result
    }
}

impl CharSink for MockTerminal {
    type Error = Infallible;

    fn put(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.bytes.push(byte);
        Ok(())
    }
}
