use serde::{Deserialize, Serialize};

/// Письменность строки текста, определяющая стратегию токенизации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    /// Латиница и любые другие письменности с пробельным разделением слов
    Latin,
    /// Китайская письменность: иероглифы CJK без каны
    Chinese,
    /// Японская письменность: присутствует хирагана или катакана
    Japanese,
}

impl Script {
    /// Классифицирует текст по письменности.
    ///
    /// Приоритет строгий: наличие каны всегда означает японский текст,
    /// даже если рядом стоят иероглифы CJK. Кандзи вместе с каной — обычное
    /// дело для японского, а в китайском кана не встречается.
    pub fn classify(text: &str) -> Self {
        if text.chars().any(is_kana) {
            Script::Japanese
        } else if text.chars().any(is_cjk_ideograph) {
            Script::Chinese
        } else {
            Script::Latin
        }
    }
}

/// Хирагана: U+3040..U+309F
fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Катакана: U+30A0..U+30FF
fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

fn is_kana(c: char) -> bool {
    is_hiragana(c) || is_katakana(c)
}

/// Унифицированные иероглифы CJK: U+4E00..U+9FFF
fn is_cjk_ideograph(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
}
