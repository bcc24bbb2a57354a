use serde::Serialize;

/// One located occurrence of the search term
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    /// The matched slice of the original text (original casing)
    pub text: String,
    /// Byte offset into the original text where the match begins
    pub index: usize,
    /// Length of the match in bytes
    pub length: usize,
}

impl Match {
    /// Byte offset one past the end of the match
    pub fn end(&self) -> usize {
        self.index + self.length
    }
}
