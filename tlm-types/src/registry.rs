//! Таблицы соответствия: устройство по t1, схема payload по (t1, t2).
//!
//! Две явные таблицы с определённым fallback вместо неявных
//! словарных умолчаний.

/// Метка header-блока, открывающего новый полётный лог.
pub const FLIGHT_START_LABEL: &str = "flight start";

/// Схема 14-байтового data-payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSchema {
    /// 7 немаркированных слов u16 (big-endian).
    Generic,
    /// RPM, напряжение (÷100), температура °F + 4 резервных слова.
    RpmVoltTemp,
    /// Данные приёмника: A, B, L, R, frameloss, holds, rxvolts (÷100).
    RxData,
}

/// Схема 30-байтового header-payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderSchema {
    /// Начало полёта: 6 байт пропуска, 20 байт имени модели, 4 байта
    /// пропуска.
    Flight,
    /// Непрозрачный 30-байтовый блок, показывается hex-дампом.
    Generic,
}

/// Имя устройства по первому байту типа (t1).
///
/// Список неполный: подтверждены только типы, наблюдавшиеся в
/// реальных логах DX18.
pub fn device_name(t1: i8) -> Option<&'static str> {
    match t1 as u8 {
        // 0x03 — предположительно датчик тока, подтверждений нет
        0x17 => Some("speed"),
        0x18 => Some("altitude"),
        0x7e => Some("RPM-Volt-Temp"),
        0x7f => Some("Rxdata"),
        _ => None,
    }
}

/// Имя устройства либо синтезированная метка `unknown(0xNN)`.
///
/// t1 показывается как беззнаковый байт двумя hex-цифрами.
pub fn device_label(t1: i8) -> String {
    match device_name(t1) {
        Some(name) => name.to_string(),
        None => format!("unknown(0x{:02x})", t1 as u8),
    }
}

/// Схема data-payload по сигнатуре устройства (t1, t2).
///
/// Известные сигнатуры наблюдались только с t2 == 0; всё остальное
/// деградирует в [`DataSchema::Generic`], никогда не ошибка.
pub fn data_schema(
    t1: i8,
    t2: i8,
) -> DataSchema {
    match (t1 as u8, t2) {
        (0x7e, 0) => DataSchema::RpmVoltTemp,
        (0x7f, 0) => DataSchema::RxData,
        _ => DataSchema::Generic,
    }
}

/// Схема header-payload по паре (t1, t2).
pub fn header_schema(
    t1: i8,
    t2: i8,
) -> HeaderSchema {
    if t1 != t2 && t2 != 0 {
        HeaderSchema::Flight
    } else {
        HeaderSchema::Generic
    }
}
