//! Hints for the common misconfigurations

use super::CoreError;

impl CoreError {
    /// Get a suggestion for resolving this error
    #[must_use]
    pub fn suggestion(&self) -> String {
        match self {
            Self::InvalidValue { field, .. } => match *field {
                "max_line_length" => {
                    "Set max_line_length to a positive width, e.g. 43 characters".to_string()
                }
                "lines_per_block" => {
                    "Set lines_per_block to 1 for single-line subtitles or 2 for the usual layout"
                        .to_string()
                }
                other => format!("Check the value supplied for '{other}'"),
            },
            Self::Config(_) => "Review the importer configuration".to_string(),
        }
    }
}
