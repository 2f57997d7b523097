use serde::{Deserialize, Serialize};
use tasklint_core::types::Declaration;

/// Attribute carrying a task's functional category, e.g. `[Category("Database")]`.
pub const CATEGORY_ATTRIBUTE: &str = "Category";

/// Functional classification of a task, driving extra result-shape requirements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskCategory {
    #[default]
    Generic,
    Converter,
    Database,
    File,
    Http,
}

impl TaskCategory {
    /// Case-insensitive; anything unrecognized is `Generic`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "converter" => TaskCategory::Converter,
            "database" => TaskCategory::Database,
            "file" => TaskCategory::File,
            "http" => TaskCategory::Http,
            _ => TaskCategory::Generic,
        }
    }

    /// Category tag of a method declaration.
    pub fn of(method: &Declaration) -> Self {
        method
            .attribute(CATEGORY_ATTRIBUTE)
            .and_then(|a| a.first_string_argument())
            .map(Self::parse)
            .unwrap_or_default()
    }

    /// Result properties required on top of `Success` and `Error`.
    pub fn required_result_properties(&self) -> &'static [&'static str] {
        match self {
            TaskCategory::Generic => &[],
            TaskCategory::Converter => &["TargetFormat"],
            TaskCategory::Database => &["Data"],
            TaskCategory::File => &["FilePath"],
            TaskCategory::Http => &["Body", "StatusCode"],
        }
    }
}
