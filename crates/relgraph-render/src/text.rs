use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_family: Option<String>,
    pub font_size: f64,
    pub font_weight: Option<String>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: None,
            font_size: 16.0,
            font_weight: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TextMetrics {
    pub width: f64,
    pub height: f64,
}

/// Text-measurement collaborator. Hosts with a real canvas or font stack
/// implement this; headless callers use [`DeterministicTextMeasurer`].
pub trait TextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

/// Approximates glyph extents from display width alone, so layout output is
/// reproducible on any machine. Wide (CJK) characters count double via
/// `unicode-width`.
#[derive(Debug, Clone, Default)]
pub struct DeterministicTextMeasurer {
    pub char_width_factor: f64,
    pub line_height_factor: f64,
}

impl TextMeasurer for DeterministicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let char_width_factor = if self.char_width_factor == 0.0 {
            0.6
        } else {
            self.char_width_factor
        };
        let line_height_factor = if self.line_height_factor == 0.0 {
            1.2
        } else {
            self.line_height_factor
        };

        let font_size = style.font_size.max(1.0);
        let mut cells = 0usize;
        let mut lines = 0usize;
        for line in text.split('\n') {
            cells = cells.max(line.width());
            lines += 1;
        }

        TextMetrics {
            width: cells as f64 * font_size * char_width_factor,
            height: lines.max(1) as f64 * font_size * line_height_factor,
        }
    }
}
