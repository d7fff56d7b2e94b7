use crate::error::Result;

mod chars;
mod unicode;

pub use chars::CharSegmenter;
pub use unicode::UnicodeSegmenter;

/// Сегмент текста, полученный от движка сегментации
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Текст сегмента
    pub value: String,
    /// Является ли сегмент словом, а не пунктуацией или пробелом
    pub is_word_like: bool,
}

/// Интерфейс движков сегментации текста на слова.
///
/// Движок может вернуть ошибку: разбор при этом не прерывается, токенизатор
/// переходит на посимвольное разбиение для конкретной строки.
pub trait Segmenter: Send + Sync {
    /// Разбивает текст на сегменты с учётом локали
    fn segment(&self, text: &str, locale: &str) -> Result<Vec<Segment>>;

    /// Название движка для диагностических сообщений
    fn name(&self) -> &str;
}

/// Возвращает движок сегментации, доступный в текущей среде.
///
/// Движок границ слов UAX-29 встроен в библиотеку, поэтому выбор сводится
/// к нему. Посимвольный вариант остаётся запасным путём токенизатора, а
/// внешний движок можно подставить через `with_segmenter`.
pub fn default_segmenter() -> Box<dyn Segmenter> {
    Box::new(UnicodeSegmenter::new())
}
