use crate::error::Result;
use crate::segment::{Segment, Segmenter};

/// Запасной движок сегментации: один сегмент на символ.
///
/// Используется, когда основной движок вернул ошибку. Пунктуация помечается
/// словоподобной, пробельные символы — нет, чтобы они не становились
/// токенами.
pub struct CharSegmenter;

impl CharSegmenter {
    /// Создает новый посимвольный движок
    pub fn new() -> Self {
        Self
    }
}

impl Default for CharSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Segmenter for CharSegmenter {
    fn segment(&self, text: &str, _locale: &str) -> Result<Vec<Segment>> {
        let segments = text
            .chars()
            .map(|c| Segment {
                value: c.to_string(),
                is_word_like: !c.is_whitespace(),
            })
            .collect();

        Ok(segments)
    }

    fn name(&self) -> &str {
        "chars"
    }
}
