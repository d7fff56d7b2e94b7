use crate::script::Script;
use serde::{Deserialize, Serialize};

/// Одна строка текста с временной меткой
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LyricLine {
    /// Время активации строки в секундах
    pub time: f64,
    /// Текст строки с удалённой временной меткой
    pub text: String,
    /// Кликабельные токены строки; пустой список означает, что строка
    /// отображается единым блоком
    pub tokens: Vec<String>,
    /// Письменность строки
    pub script: Script,
}

impl LyricLine {
    /// Создает новую строку
    pub fn new(time: f64, text: String, tokens: Vec<String>, script: Script) -> Self {
        Self {
            time,
            text,
            tokens,
            script,
        }
    }

    /// Нужно ли отображать строку единым блоком
    pub fn is_unsplit(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Метатег LRC-заголовка вида `[ti:Название]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LyricMetadata {
    /// Ключ тега: ti, ar, al, by, offset, length, re или ve
    pub key: String,
    /// Значение тега
    pub value: String,
}

/// Результат разбора одного LRC-текста
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LyricTrack {
    /// Строки, отсортированные по времени активации
    pub lines: Vec<LyricLine>,
    /// Метатеги заголовка в порядке появления
    pub metadata: Vec<LyricMetadata>,
}

impl LyricTrack {
    /// Создает новый пустой трек
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавляет строку в трек
    pub fn add(&mut self, line: LyricLine) {
        self.lines.push(line);
    }

    /// Добавляет метатег заголовка
    pub fn add_metadata(&mut self, metadata: LyricMetadata) {
        self.metadata.push(metadata);
    }

    /// Возвращает количество строк в треке
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Проверяет, пуст ли трек
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Возвращает итератор по строкам
    pub fn iter(&self) -> impl Iterator<Item = &LyricLine> {
        self.lines.iter()
    }

    /// Сортирует строки по времени активации (стабильно)
    pub fn sort(&mut self) {
        self.lines
            .sort_by(|a, b| a.time.partial_cmp(&b.time).unwrap());
    }

    /// Индекс строки, активной в указанной позиции воспроизведения.
    ///
    /// Возвращает строку с наибольшим временем активации, не превышающим
    /// позицию. Трек должен быть отсортирован по времени — парсер это
    /// гарантирует. До первой строки активной строки нет.
    pub fn active_line_index(&self, position: f64) -> Option<usize> {
        let mut active = None;
        for (index, line) in self.lines.iter().enumerate() {
            if line.time <= position {
                active = Some(index);
            } else {
                break;
            }
        }
        active
    }

    /// Строка, активная в указанной позиции воспроизведения
    pub fn active_line(&self, position: f64) -> Option<&LyricLine> {
        self.active_line_index(position).map(|i| &self.lines[i])
    }
}

impl std::ops::Index<usize> for LyricTrack {
    type Output = LyricLine;

    fn index(&self, index: usize) -> &Self::Output {
        &self.lines[index]
    }
}
