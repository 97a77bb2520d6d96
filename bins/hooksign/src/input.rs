//! Payload input from files or stdin

use hooksign_core::{Error, Result, ResultExt};
use std::io::Read;

/// Read the whole input; `-` means stdin
pub fn read_input(path: &str) -> Result<Vec<u8>> {
    if path == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .map_err(Error::from)
            .context("Failed to read payload from stdin")?;
        return Ok(buf);
    }

    std::fs::read(path)
        .map_err(Error::from)
        .context(format!("Failed to read payload file {}", path))
}

/// Read the input as UTF-8 text
pub fn read_text(path: &str) -> Result<String> {
    String::from_utf8(read_input(path)?)
        .map_err(|e| Error::invalid_payload(format!("Payload is not valid UTF-8: {}", e)))
}

/// Read the input as a JSON document
pub fn read_json(path: &str) -> Result<serde_json::Value> {
    let bytes = read_input(path)?;
    serde_json::from_slice(&bytes)
        .map_err(Error::from)
        .context(format!("Failed to parse {} as JSON", path))
}
