//! Shared input helpers.

use std::fs;
use std::io::{self, Read};

/// Read input from file path or stdin.
/// - `-` reads from stdin
/// - anything else is treated as a file path
pub fn read_input(file: &str) -> Result<String, String> {
    if file == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| format!("Error reading from stdin: {e}"))?;
        Ok(buffer)
    } else {
        fs::read_to_string(file).map_err(|e| format!("Error reading file '{file}': {e}"))
    }
}

/// Helper to get display path for error messages
pub fn display_path(file: &str) -> &str {
    if file == "-" { "<stdin>" } else { file }
}
