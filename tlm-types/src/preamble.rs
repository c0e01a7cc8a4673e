//! Преамбула блока TLM: 4-байтовый тег + два байта типа (t1, t2).
//!
//! Формат восстановлен по наблюдениям RC-энтузиастов за логами
//! передатчика DX18 (см. обсуждение на rcgroups, тред 1725173).
//! Официальной документации не существует.

use crate::{
    error::{TlmError, TlmResult},
    record::Category,
    registry::{device_label, FLIGHT_START_LABEL},
};

/// Размер преамбулы блока (байты).
pub const PREAMBLE_LEN: usize = 6;

/// Sentinel-тег: блок без метки времени (заголовочное обрамление).
pub const SENTINEL_TAG: u32 = 0xffff_ffff;

/// Размер data-payload (байты).
pub const DATA_PAYLOAD_LEN: usize = 14;

/// Размер header-payload (байты).
pub const HEADER_PAYLOAD_LEN: usize = 30;

/// Физическое обрамление блока, выведенное из тега.
///
/// Не путать с [`Category`]: категория выводится из пары (t1, t2),
/// обрамление — из тега. В наблюдаемых логах оси совпадают, но
/// декодер обязан считать их независимыми.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
    /// 14-байтовое окно payload (блок с меткой времени).
    Data,
    /// 30-байтовое окно payload (sentinel-блок).
    Header,
}

impl Framing {
    /// Размер окна payload для этого обрамления.
    pub fn payload_len(&self) -> usize {
        match self {
            Framing::Data => DATA_PAYLOAD_LEN,
            Framing::Header => HEADER_PAYLOAD_LEN,
        }
    }
}

/// Преамбула блока: сырой тег и два знаковых байта типа.
///
/// Тег хранится в little-endian — в отличие от big-endian полей
/// payload. Это реальное свойство захваченного формата, а не
/// недочёт, подлежащий «исправлению».
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockPreamble {
    /// Сырой тег: 0xffffffff либо сотые доли секунды
    pub tag: u32,
    /// Байт 5: тип устройства
    pub t1: i8,
    /// Байт 6
    pub t2: i8,
}

impl BlockPreamble {
    /// Декодирует преамбулу из 6 байтов потока.
    pub fn from_wire(buf: &[u8; PREAMBLE_LEN]) -> Self {
        let tag = u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);

        BlockPreamble {
            tag,
            t1: buf[4] as i8,
            t2: buf[5] as i8,
        }
    }

    /// Блок без метки времени (начинается с ffff ffff)?
    pub fn is_sentinel(&self) -> bool {
        self.tag == SENTINEL_TAG
    }

    /// Метка времени в секундах (`tag / 100.0`).
    ///
    /// Для sentinel-блока возвращает [`TlmError::SentinelTimestamp`].
    pub fn timestamp_seconds(&self) -> TlmResult<f64> {
        if self.is_sentinel() {
            Err(TlmError::SentinelTimestamp)
        } else {
            Ok(self.tag as f64 / 100.0)
        }
    }

    /// Физическое обрамление payload, выведенное только из тега.
    pub fn framing(&self) -> Framing {
        if self.is_sentinel() {
            Framing::Header
        } else {
            Framing::Data
        }
    }

    /// Классифицирует блок по паре (t1, t2).
    ///
    /// Замкнутое правило из трёх случаев, без «прочего»:
    /// 1. `t2 == 0` → Data, имя устройства по t1;
    /// 2. `t1 == t2` → Header, имя устройства по t1;
    /// 3. иначе → Header, метка "flight start" (начало нового
    ///    полётного лога, payload несёт имя модели).
    pub fn classify(&self) -> (Category, String) {
        if self.t2 == 0 {
            (Category::Data, device_label(self.t1))
        } else if self.t1 == self.t2 {
            (Category::Header, device_label(self.t1))
        } else {
            (Category::Header, FLIGHT_START_LABEL.to_string())
        }
    }
}
