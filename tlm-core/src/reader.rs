//! Потоковый читатель TLM файлов.

use std::io::Read;

use tlm_types::{
    BlockPreamble, Category, Framing, Record, TlmResult, FLIGHT_START_LABEL, PREAMBLE_LEN,
};

use crate::{
    payload::{decode_data_payload, decode_header_payload},
    source::ByteSource,
};

/// Ленивый однопроходный итератор блоков TLM.
///
/// Каждый шаг читает 6-байтовую преамбулу, классифицирует блок,
/// читает окно payload нужного размера и отдаёт готовую [`Record`].
/// Короткое чтение преамбулы или payload завершает
/// последовательность штатно, без ошибки.
pub struct TlmReader<R: Read> {
    source: ByteSource<R>,
    stats: ReadStats,
    done: bool,
}

/// Статистика, накопленная [`TlmReader`] в процессе чтения.
#[derive(Debug, Default, Clone)]
pub struct ReadStats {
    /// Успешно декодированных записей.
    pub records_ok: u64,
    /// Записей категории Data.
    pub data_records: u64,
    /// Записей категории Header.
    pub header_records: u64,
    /// Блоков "flight start" (границы полётных логов).
    pub flight_starts: u64,
    /// Всего потреблено байтов (преамбулы + payload).
    pub bytes_processed: u64,
}

impl<R: Read> TlmReader<R> {
    /// Создаёт читатель поверх произвольного потока байтов.
    ///
    /// Файлового заголовка у формата нет: поток начинается сразу
    /// с первого блока.
    pub fn new(inner: R) -> Self {
        Self {
            source: ByteSource::new(inner),
            stats: ReadStats::default(),
            done: false,
        }
    }

    /// Возвращает следующую запись или `None` по концу потока.
    pub fn next_record(&mut self) -> Option<TlmResult<Record>> {
        if self.done {
            return None;
        }

        let offset = self.source.position();

        // Преамбула; короткое чтение — штатный конец
        let mut pre_buf = [0u8; PREAMBLE_LEN];
        match self.source.fill(&mut pre_buf) {
            Ok(n) if n < PREAMBLE_LEN => {
                self.done = true;
                return None;
            }
            Ok(_) => {}
            Err(e) => {
                self.done = true;
                return Some(Err(e));
            }
        }

        let pre = BlockPreamble::from_wire(&pre_buf);
        let (category, label) = pre.classify();
        let framing = pre.framing();

        // Окно payload; короткое чтение — тоже штатный конец
        let mut payload = vec![0u8; framing.payload_len()];
        match self.source.fill(&mut payload) {
            Ok(n) if n < payload.len() => {
                self.done = true;
                return None;
            }
            Ok(_) => {}
            Err(e) => {
                self.done = true;
                return Some(Err(e));
            }
        }

        let fields = match framing {
            Framing::Data => decode_data_payload(pre.t1, pre.t2, &payload),
            Framing::Header => decode_header_payload(pre.t1, pre.t2, &payload),
        };

        let fields = match fields {
            Ok(f) => f,
            Err(e) => {
                self.done = true;
                return Some(Err(e));
            }
        };

        self.stats.records_ok += 1;
        self.stats.bytes_processed += (PREAMBLE_LEN + payload.len()) as u64;
        match category {
            Category::Data => self.stats.data_records += 1,
            Category::Header => self.stats.header_records += 1,
        }
        if label == FLIGHT_START_LABEL {
            self.stats.flight_starts += 1;
        }

        Some(Ok(Record {
            offset,
            timestamp: pre.timestamp_seconds().ok(),
            category,
            label,
            fields,
        }))
    }

    /// Накопленная статистика чтения.
    pub fn stats(&self) -> &ReadStats {
        &self.stats
    }
}

impl<R: Read> Iterator for TlmReader<R> {
    type Item = TlmResult<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record()
    }
}

/// Convenience: читает все записи потока в вектор.
pub fn read_all_records<R: Read>(reader: &mut TlmReader<R>) -> TlmResult<Vec<Record>> {
    let mut records = Vec::new();

    while let Some(result) = reader.next_record() {
        records.push(result?);
    }

    Ok(records)
}
