use thiserror::Error;

/// Результат для операций TLM
pub type TlmResult<T> = std::result::Result<T, TlmError>;

/// Типы ошибок декодера TLM.
///
/// Усечённый хвост файла ошибкой НЕ является: итератор просто
/// завершает последовательность (см. `tlm-core`).
#[derive(Debug, Error)]
pub enum TlmError {
    /// Запрос метки времени у sentinel-блока (ffff ffff).
    /// Нарушение контракта вызывающим кодом, а не порча данных.
    #[error("Not a timestamped block (sentinel tag 0xffffffff)")]
    SentinelTimestamp,

    /// Ошибки ввода/вывода (автоконвертируются из std::io::Error)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
