/// Display formatting options
#[derive(Debug, Clone)]
pub struct FormatOptions {
    pub enable_color: bool,
    /// Character budget for one-line text fields (captions, excerpts).
    /// `None` leaves them untouched.
    pub truncate_text: Option<usize>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            enable_color: true,
            truncate_text: None,
        }
    }
}
