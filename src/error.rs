use thiserror::Error;

/// Типы ошибок, которые могут возникнуть при разборе и токенизации
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// Ошибка ввода/вывода
    Io,
    /// Ошибка разбора LRC
    LrcParsing,
    /// Ошибка сегментации текста
    Segmentation,
    /// Ошибка сериализации
    Serialization,
}

/// Ошибки, которые могут возникнуть при разборе и токенизации
#[derive(Debug, Error)]
pub enum Error {
    #[error("Ошибка ввода/вывода: {0}")]
    Io(#[from] std::io::Error),

    #[error("Ошибка разбора LRC: {0}")]
    LrcParsing(String),

    #[error("Ошибка сегментации текста: {0}")]
    Segmentation(String),

    #[error("Ошибка сериализации: {0}")]
    Serialization(String),

    #[error("Ошибка логирования: {0}")]
    LoggedError(String),
}

impl Error {
    /// Создает новую ошибку указанного типа с сообщением
    pub fn new(error_type: ErrorType, message: &str) -> Self {
        match error_type {
            ErrorType::Io => Self::Io(std::io::Error::new(std::io::ErrorKind::Other, message)),
            ErrorType::LrcParsing => Self::LrcParsing(message.to_string()),
            ErrorType::Segmentation => Self::Segmentation(message.to_string()),
            ErrorType::Serialization => Self::Serialization(message.to_string()),
        }
    }
}

/// Результат с обработкой ошибок
pub type Result<T> = std::result::Result<T, Error>;
