pub mod error;
pub mod logging;
pub mod lrc;
pub mod script;
pub mod segment;
pub mod tokenizer;

pub use error::{Error, ErrorType, Result};
pub use logging::{
    log_debug, log_error, log_info, log_trace, log_warning, setup_logging, setup_test_logging,
};
pub use lrc::{LrcParser, LyricLine, LyricMetadata, LyricTrack};
pub use script::Script;
pub use segment::{default_segmenter, CharSegmenter, Segment, Segmenter, UnicodeSegmenter};
pub use tokenizer::Tokenizer;

use std::path::Path;

/// Настройки разбора текста с временными метками
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Локаль, передаваемая движку сегментации слов
    pub locale: String,

    /// Уровень логирования
    pub log_level: log::LevelFilter,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            locale: "ja".to_string(),
            log_level: log::LevelFilter::Info,
        }
    }
}

/// Основной интерфейс разбора и токенизации текста с временными метками
pub struct LyricSync {
    options: ParseOptions,
    parser: LrcParser,
}

impl LyricSync {
    /// Создает новый экземпляр LyricSync с заданными настройками
    pub fn new(options: ParseOptions) -> Self {
        #[cfg(test)]
        {
            setup_test_logging(options.log_level);
        }
        #[cfg(not(test))]
        {
            setup_logging(options.log_level);
        }

        log_info(&format!(
            "Создан новый экземпляр LyricSync с настройками: {:?}",
            options
        ));

        let parser = LrcParser::new().with_locale(&options.locale);

        Self { options, parser }
    }

    /// Создает новый экземпляр LyricSync с настройками по умолчанию
    pub fn default() -> Self {
        Self::new(ParseOptions::default())
    }

    /// Заменяет движок сегментации слов
    pub fn with_segmenter(mut self, segmenter: Box<dyn Segmenter>) -> Self {
        log_debug("Установлен пользовательский движок сегментации");
        self.parser = self.parser.with_segmenter(segmenter);
        self
    }

    /// Устанавливает локаль движка сегментации
    pub fn with_locale(mut self, locale: &str) -> Self {
        log_debug(&format!("Установлена локаль сегментации: {}", locale));
        self.options.locale = locale.to_string();
        self.parser = self.parser.with_locale(locale);
        self
    }

    /// Разбирает LRC-текст и возвращает трек строк.
    ///
    /// Разбор никогда не завершается ошибкой: нераспознанные строки
    /// пропускаются, а результат может оказаться пустым.
    pub fn parse(&self, content: &str) -> LyricTrack {
        let track = self.parser.parse_str(content);

        log_debug(&format!(
            "Разобрано строк: {}, метатегов заголовка: {}",
            track.len(),
            track.metadata.len()
        ));

        track
    }

    /// Разбирает LRC-файл и возвращает трек строк
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<LyricTrack> {
        log_info(&format!("Разбор файла: {}", path.as_ref().display()));
        self.parser.parse_file(path)
    }

    /// Разбирает LRC-текст и возвращает трек в виде JSON для слоя отображения
    pub fn parse_to_json(&self, content: &str) -> Result<String> {
        let track = self.parse(content);
        serde_json::to_string(&track).map_err(|e| Error::Serialization(e.to_string()))
    }
}
