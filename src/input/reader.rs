use crate::error::TextSwapError;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Read text from stdin or a file
pub struct InputReader;

impl InputReader {
    /// Read UTF-8 text from a file path, or stdin when `path` is `None`
    ///
    /// # Returns
    /// * `Ok(String)` - The text
    /// * `Err(TextSwapError)` - If the bytes are not UTF-8 or an IO error occurs
    pub fn read_text(path: Option<&Path>) -> Result<String, TextSwapError> {
        let mut bytes = Vec::new();
        match path {
            Some(file_path) => {
                File::open(file_path)?.read_to_end(&mut bytes)?;
            }
            None => {
                io::stdin().read_to_end(&mut bytes)?;
            }
        }

        Self::decode(bytes)
    }

    /// Decode raw bytes, rejecting anything that is not UTF-8 text
    pub fn decode(bytes: Vec<u8>) -> Result<String, TextSwapError> {
        String::from_utf8(bytes).map_err(|e| TextSwapError::InvalidInput(e.to_string()))
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod reader_tests;
