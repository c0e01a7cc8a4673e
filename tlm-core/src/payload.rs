//! Декодирование окон payload.
//!
//! Все многобайтовые поля payload — big-endian; тег преамбулы при этом
//! little-endian. Асимметрия сохраняется как есть: так пишет приёмник.

use std::io::Cursor;

use byteorder::{BigEndian, ReadBytesExt};

use tlm_types::{
    data_schema, header_schema, DataSchema, FieldValue, HeaderSchema, TlmResult,
};

/// Начало и длина текстового окна имени модели внутри
/// 30-байтового flight-header payload.
const MODEL_NAME_OFFSET: usize = 6;
const MODEL_NAME_LEN: usize = 20;

/// Декодирует data-payload по сигнатуре (t1, t2).
///
/// Ожидает полное окно в [`DATA_PAYLOAD_LEN`](tlm_types::DATA_PAYLOAD_LEN)
/// байтов — усечённые окна до декодера не доходят.
/// Неизвестная сигнатура — не ошибка: поля декодируются по
/// обобщённой схеме из семи слов.
pub fn decode_data_payload(
    t1: i8,
    t2: i8,
    buf: &[u8],
) -> TlmResult<Vec<(String, FieldValue)>> {
    let mut rdr = Cursor::new(buf);

    match data_schema(t1, t2) {
        DataSchema::RpmVoltTemp => {
            let rpm = rdr.read_u16::<BigEndian>()?;
            let volt = rdr.read_u16::<BigEndian>()?;
            let temp_f = rdr.read_u16::<BigEndian>()?;
            // 4 резервных слова известной информации не несут

            Ok(vec![
                ("RPM".to_string(), FieldValue::Word(rpm)),
                (
                    "Volt".to_string(),
                    FieldValue::Scaled(volt as f64 / 100.0),
                ),
                ("TempF".to_string(), FieldValue::Word(temp_f)),
                ("TempC".to_string(), FieldValue::Scaled(temp_c(temp_f))),
            ])
        }

        DataSchema::RxData => {
            let mut fields = Vec::with_capacity(7);

            for name in ["A", "B", "L", "R", "frameloss", "holds"] {
                let word = rdr.read_u16::<BigEndian>()?;
                fields.push((name.to_string(), FieldValue::Word(word)));
            }

            let rxvolts = rdr.read_u16::<BigEndian>()?;
            fields.push((
                "rxvolts".to_string(),
                FieldValue::Scaled(rxvolts as f64 / 100.0),
            ));

            Ok(fields)
        }

        DataSchema::Generic => {
            let mut fields = Vec::with_capacity(7);

            for i in 0..7 {
                let word = rdr.read_u16::<BigEndian>()?;
                fields.push((format!("data{i}"), FieldValue::Word(word)));
            }

            Ok(fields)
        }
    }
}

/// Декодирует header-payload по паре (t1, t2).
///
/// Ожидает полное окно в
/// [`HEADER_PAYLOAD_LEN`](tlm_types::HEADER_PAYLOAD_LEN) байтов.
pub fn decode_header_payload(
    t1: i8,
    t2: i8,
    buf: &[u8],
) -> TlmResult<Vec<(String, FieldValue)>> {
    match header_schema(t1, t2) {
        HeaderSchema::Flight => {
            let window = &buf[MODEL_NAME_OFFSET..MODEL_NAME_OFFSET + MODEL_NAME_LEN];

            Ok(vec![(
                "model name".to_string(),
                FieldValue::Text(trim_at_nul(window)),
            )])
        }

        HeaderSchema::Generic => Ok(vec![(
            "data".to_string(),
            FieldValue::Text(hex_dump(buf)),
        )]),
    }
}

/// °F → °C одним преобразованием, без дополнительного масштаба.
fn temp_c(temp_f: u16) -> f64 {
    (temp_f as f64 - 32.0) * 5.0 / 9.0
}

/// Текст до первого NUL; валидность кодировки не гарантируется,
/// невалидные байты заменяются.
fn trim_at_nul(window: &[u8]) -> String {
    let end = window
        .iter()
        .position(|&b| b == 0)
        .unwrap_or(window.len());

    String::from_utf8_lossy(&window[..end]).into_owned()
}

/// Hex-дамп: беззнаковые байты парами hex-цифр через пробел.
fn hex_dump(buf: &[u8]) -> String {
    buf.iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}
