use thiserror::Error;

pub type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// В каталоге не нашлось ни одного .TLM файла
    #[error("No .TLM files found in \"{0}\"")]
    NoLogsFound(String),

    /// Некорректный выбор файла из списка
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    /// Ошибка записи файла
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка декодера TLM
    #[error("TLM error: {0}")]
    Tlm(#[from] tlm_types::TlmError),

    /// Ошибка сериализации JSON-отчёта
    #[error("Report error: {0}")]
    Report(#[from] serde_json::Error),
}
