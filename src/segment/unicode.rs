use crate::error::Result;
use crate::segment::{Segment, Segmenter};
use unicode_segmentation::UnicodeSegmentation;

/// Движок сегментации на основе границ слов UAX-29
pub struct UnicodeSegmenter;

impl UnicodeSegmenter {
    /// Создает новый движок сегментации
    pub fn new() -> Self {
        Self
    }
}

impl Default for UnicodeSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Segmenter for UnicodeSegmenter {
    fn segment(&self, text: &str, _locale: &str) -> Result<Vec<Segment>> {
        // Границы слов UAX-29 не зависят от локали
        let segments = text
            .split_word_bounds()
            .map(|value| Segment {
                is_word_like: value.chars().any(char::is_alphanumeric),
                value: value.to_string(),
            })
            .collect();

        Ok(segments)
    }

    fn name(&self) -> &str {
        "unicode"
    }
}
