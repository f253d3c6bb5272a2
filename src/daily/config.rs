// Key point:
// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SelectionConfig {
    /// Days before today whose targets may not be picked again.
    /// Zero disables the window.
    pub no_repeat_days: u32,
}

impl SelectionConfig {
    pub fn v0() -> Self {
        Self { no_repeat_days: 5 }
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self::v0()
    }
}
