use crate::error::Result;
use crate::lrc::models::{LyricLine, LyricMetadata, LyricTrack};
use crate::script::Script;
use crate::segment::Segmenter;
use crate::tokenizer::Tokenizer;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::fs;
use std::path::Path;

/// Временная метка вида `[MM:SS]`, `[MM:SS.ff]` или `[MM:SS.fff]`
static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[(\d{2}):(\d{2})(?:\.(\d{1,3}))?\]")
        .expect("не удалось скомпилировать TIMESTAMP_REGEX")
});

/// Метатег заголовка вида `[ti:Название]`
static METADATA_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[(ti|ar|al|by|offset|length|re|ve):(.*?)\]$")
        .expect("не удалось скомпилировать METADATA_REGEX")
});

/// Парсер построчного LRC-текста.
///
/// Преобразует содержимое файла с временными метками в упорядоченный
/// `LyricTrack`. Разбор строки никогда не завершается ошибкой: строки без
/// распознанной метки и строки, пустые после удаления метки, молча
/// пропускаются.
pub struct LrcParser {
    /// Токенизатор строк
    tokenizer: Tokenizer,
}

impl LrcParser {
    /// Создает парсер с токенизатором по умолчанию
    pub fn new() -> Self {
        Self::with_tokenizer(Tokenizer::new())
    }

    /// Создает парсер с указанным токенизатором
    pub fn with_tokenizer(tokenizer: Tokenizer) -> Self {
        Self { tokenizer }
    }

    /// Заменяет движок сегментации токенизатора
    pub fn with_segmenter(mut self, segmenter: Box<dyn Segmenter>) -> Self {
        self.tokenizer.set_segmenter(segmenter);
        self
    }

    /// Устанавливает локаль движка сегментации
    pub fn with_locale(mut self, locale: &str) -> Self {
        self.tokenizer = self.tokenizer.with_locale(locale);
        self
    }

    /// Разбирает LRC-файл и возвращает трек
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<LyricTrack> {
        let content = fs::read_to_string(path)?;
        Ok(self.parse_str(&content))
    }

    /// Разбирает LRC-текст и возвращает трек.
    ///
    /// Учитывается только первая временная метка строки, и только она
    /// удаляется из текста. Строки результата отсортированы по времени
    /// активации.
    pub fn parse_str(&self, content: &str) -> LyricTrack {
        let mut track = LyricTrack::new();

        // Разделитель строк — только '\n'
        for line in content.split('\n') {
            let caps = match TIMESTAMP_REGEX.captures(line) {
                Some(caps) => caps,
                None => {
                    // Строка без метки: метатег заголовка или заголовочный
                    // мусор. Ни то ни другое не попадает в список строк.
                    if let Some(meta) = METADATA_REGEX.captures(line.trim()) {
                        track.add_metadata(LyricMetadata {
                            key: meta.get(1).map_or("", |m| m.as_str()).to_string(),
                            value: meta.get(2).map_or("", |m| m.as_str()).trim().to_string(),
                        });
                    }
                    continue;
                }
            };

            let time = timestamp_seconds(&caps);

            // Удаляем только распознанную (первую) метку; вторая и
            // последующие остаются частью текста
            let marker = caps.get(0).map_or(0..0, |m| m.range());
            let mut remainder = String::with_capacity(line.len());
            remainder.push_str(&line[..marker.start]);
            remainder.push_str(&line[marker.end..]);
            let text = remainder.trim();

            if text.is_empty() {
                continue;
            }

            let script = Script::classify(text);
            let tokens = self.tokenizer.tokenize(text, script);
            track.add(LyricLine::new(time, text.to_string(), tokens, script));
        }

        track.sort();
        track
    }
}

impl Default for LrcParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Вычисляет время в секундах из групп временной метки.
///
/// Дробная часть дополняется нулями справа до миллисекунд: `.5` — это
/// 500 мс, `.05` — 50 мс, `.500` — снова 500 мс.
fn timestamp_seconds(caps: &Captures) -> f64 {
    let minutes: f64 = caps
        .get(1)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0.0);
    let seconds: f64 = caps
        .get(2)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0.0);
    let millis = caps.get(3).map_or(0.0, |m| {
        let mut digits = m.as_str().to_string();
        while digits.len() < 3 {
            digits.push('0');
        }
        digits.parse::<f64>().unwrap_or(0.0)
    });

    minutes * 60.0 + seconds + millis / 1000.0
}
