use crate::logging::log_warning;
use crate::script::Script;
use crate::segment::{default_segmenter, CharSegmenter, Segment, Segmenter};

/// Токенизатор строк с выбором стратегии по письменности
pub struct Tokenizer {
    /// Движок сегментации для письменностей без пробельного разделения слов
    segmenter: Box<dyn Segmenter>,
    /// Запасной движок на случай ошибки основного
    fallback: CharSegmenter,
    /// Локаль, передаваемая движку сегментации
    locale: String,
}

impl Tokenizer {
    /// Создает токенизатор с движком сегментации по умолчанию
    pub fn new() -> Self {
        Self::with_segmenter(default_segmenter())
    }

    /// Создает токенизатор с указанным движком сегментации
    pub fn with_segmenter(segmenter: Box<dyn Segmenter>) -> Self {
        Self {
            segmenter,
            fallback: CharSegmenter::new(),
            locale: "ja".to_string(),
        }
    }

    /// Устанавливает локаль движка сегментации
    pub fn with_locale(mut self, locale: &str) -> Self {
        self.locale = locale.to_string();
        self
    }

    /// Заменяет движок сегментации
    pub fn set_segmenter(&mut self, segmenter: Box<dyn Segmenter>) {
        self.segmenter = segmenter;
    }

    /// Разбивает текст на кликабельные токены по стратегии письменности.
    ///
    /// Пустой список токенов означает, что строка отображается единым
    /// блоком: так намеренно сделано для китайского текста.
    pub fn tokenize(&self, text: &str, script: Script) -> Vec<String> {
        match script {
            Script::Latin => tokenize_whitespace(text),
            Script::Chinese => Vec::new(),
            Script::Japanese => self.tokenize_words(text),
        }
    }

    /// Токенизация движком сегментации с посимвольным запасным путём.
    ///
    /// Ошибка движка не прерывает разбор: она логируется, и строка
    /// разбивается посимвольно.
    fn tokenize_words(&self, text: &str) -> Vec<String> {
        match self.segmenter.segment(text, &self.locale) {
            Ok(segments) => collect_word_like(segments),
            Err(e) => {
                log_warning(&format!(
                    "Движок сегментации '{}' вернул ошибку: {}. Строка разбита посимвольно",
                    self.segmenter.name(),
                    e
                ));
                self.fallback
                    .segment(text, &self.locale)
                    .map(collect_word_like)
                    .unwrap_or_default()
            }
        }
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Оставляет словоподобные сегменты, отбрасывая пунктуацию и пробелы
fn collect_word_like(segments: Vec<Segment>) -> Vec<String> {
    segments
        .into_iter()
        .filter(|s| s.is_word_like)
        .map(|s| s.value)
        .collect()
}

/// Разбиение по пробельным символам с отбрасыванием пустых фрагментов
fn tokenize_whitespace(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};

    // Мок движка сегментации, который всегда возвращает ошибку
    struct FailingSegmenter;

    impl Segmenter for FailingSegmenter {
        fn segment(&self, _text: &str, _locale: &str) -> Result<Vec<Segment>> {
            Err(Error::Segmentation("движок недоступен".to_string()))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    #[test]
    fn test_latin_splits_on_whitespace() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("Hello   world ", Script::Latin);
        assert_eq!(tokens, vec!["Hello", "world"]);
    }

    #[test]
    fn test_chinese_produces_no_tokens() {
        let tokenizer = Tokenizer::new();
        assert!(tokenizer.tokenize("你好世界", Script::Chinese).is_empty());
    }

    #[test]
    fn test_japanese_tokens_reconstruct_text() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("こんにちは", Script::Japanese);
        assert!(!tokens.is_empty());
        assert_eq!(tokens.concat(), "こんにちは");
    }

    #[test]
    fn test_japanese_drops_punctuation() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("こんにちは。", Script::Japanese);
        assert_eq!(tokens.concat(), "こんにちは");
    }

    #[test]
    fn test_failing_segmenter_falls_back_to_characters() {
        let tokenizer = Tokenizer::with_segmenter(Box::new(FailingSegmenter));
        let tokens = tokenizer.tokenize("こんにちは", Script::Japanese);
        assert_eq!(tokens, vec!["こ", "ん", "に", "ち", "は"]);
    }

    #[test]
    fn test_fallback_keeps_punctuation_but_not_whitespace() {
        let tokenizer = Tokenizer::with_segmenter(Box::new(FailingSegmenter));
        let tokens = tokenizer.tokenize("はい。 そう", Script::Japanese);
        assert_eq!(tokens, vec!["は", "い", "。", "そ", "う"]);
    }

    #[test]
    fn test_no_token_is_empty_or_whitespace() {
        let tokenizer = Tokenizer::new();
        for (text, script) in [
            ("Hello world", Script::Latin),
            ("こんにちは 世界", Script::Japanese),
            ("日本語のテスト", Script::Japanese),
        ] {
            for token in tokenizer.tokenize(text, script) {
                assert!(!token.trim().is_empty());
            }
        }
    }
}
