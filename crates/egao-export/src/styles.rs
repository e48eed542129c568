use serde::{Deserialize, Serialize};

/// Styling configuration for the spreadsheet export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStyles {
    /// Cell font (the statutory forms use 游ゴシック).
    pub sheet_font: String,

    /// Cell font size in points.
    pub sheet_font_size: f64,

    /// Width of the label column (column A).
    pub label_column_width: f64,

    /// Width of the content columns.
    pub content_column_width: f64,

    /// Uniform row height.
    pub row_height: f64,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            sheet_font: "游ゴシック".to_string(),
            sheet_font_size: 10.0,
            label_column_width: 35.0,
            content_column_width: 15.0,
            row_height: 20.0,
        }
    }
}
