//! Экспорт декодированных записей: CSV, консоль, JSON-отчёт.
//!
//! Агрегация полётов (номер полёта, активная модель) живёт здесь,
//! на стороне потребителя: декодер отдаёт только записи.

use std::{
    fs::File,
    io::{BufWriter, Read, Write},
    path::Path,
};

use chrono::Local;
use serde::Serialize;

use tlm_core::{ReadStats, TlmReader};
use tlm_types::{Record, FLIGHT_START_LABEL};

use crate::error::CliResult;

/// Счётчик полётов и активное имя модели.
///
/// Блок "flight start" задаёт имя модели из поля `model name` и
/// инкрементирует номер полёта; все последующие записи относятся
/// к этому полёту.
#[derive(Debug, Default)]
pub struct FlightTracker {
    pub flight_no: u64,
    pub model_name: String,
}

impl FlightTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(
        &mut self,
        record: &Record,
    ) {
        if record.label == FLIGHT_START_LABEL {
            if let Some(model) = record.model_name() {
                self.model_name = model.to_string();
            }
            self.flight_no += 1;
        }
    }
}

/// Итог экспорта.
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Декодировано записей.
    pub records: u64,
    /// Записано строк (CSV: по одной на поле; консоль: на запись).
    pub rows: u64,
    /// Обнаружено полётов.
    pub flights: u64,
}

/// Пишет поток записей в CSV: одна строка на поле payload.
///
/// Формат строки:
/// `offset,flightno,timestamp,modelname,rectype,datatype,parameter,value`,
/// смещение — в hex. У записей без метки времени в колонке стоит `0`.
pub fn export_csv<R: Read, W: Write>(
    reader: &mut TlmReader<R>,
    out: W,
) -> CliResult<ExportSummary> {
    let mut writer = BufWriter::new(out);

    writeln!(
        writer,
        "offset,flightno,timestamp,modelname,rectype,datatype,parameter,value"
    )?;

    let mut tracker = FlightTracker::new();
    let mut records = 0u64;
    let mut rows = 0u64;

    while let Some(result) = reader.next_record() {
        let record = result?;
        tracker.observe(&record);
        records += 1;

        let timestamp = match record.timestamp {
            Some(t) => t.to_string(),
            None => "0".to_string(),
        };

        for (name, value) in &record.fields {
            writeln!(
                writer,
                "{:#x},{},{},{},{},{},{},{}",
                record.offset,
                tracker.flight_no,
                timestamp,
                tracker.model_name,
                record.category,
                record.label,
                name,
                value,
            )?;
            rows += 1;
        }
    }

    writer.flush()?;

    Ok(ExportSummary {
        records,
        rows,
        flights: tracker.flight_no,
    })
}

/// Печатает записи в консоль (режим `--print`).
pub fn print_records<R: Read, W: Write>(
    reader: &mut TlmReader<R>,
    out: W,
) -> CliResult<ExportSummary> {
    let mut writer = BufWriter::new(out);
    let mut tracker = FlightTracker::new();
    let mut records = 0u64;
    let mut rows = 0u64;

    while let Some(result) = reader.next_record() {
        let record = result?;
        tracker.observe(&record);
        records += 1;
        rows += 1;

        let timestamp = match record.timestamp {
            Some(t) => t.to_string(),
            None => "0".to_string(),
        };

        let fields = record
            .fields
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join(" ");

        writeln!(
            writer,
            "{:#x} {} {} {} {}",
            record.offset, timestamp, record.category, record.label, fields,
        )?;
    }

    writer.flush()?;

    Ok(ExportSummary {
        records,
        rows,
        flights: tracker.flight_no,
    })
}

/// JSON-отчёт сессии декодирования.
#[derive(Debug, Serialize)]
pub struct SessionReport {
    pub timestamp: String,
    pub input: String,
    pub flights: u64,
    pub records: u64,
    pub data_records: u64,
    pub header_records: u64,
    pub bytes_processed: u64,
}

impl SessionReport {
    pub fn new(
        input: &Path,
        stats: &ReadStats,
        flights: u64,
    ) -> Self {
        Self {
            timestamp: Local::now().to_rfc3339(),
            input: input.display().to_string(),
            flights,
            records: stats.records_ok,
            data_records: stats.data_records,
            header_records: stats.header_records,
            bytes_processed: stats.bytes_processed,
        }
    }

    /// Записывает отчёт в файл (pretty JSON).
    pub fn write_to(
        &self,
        path: &Path,
    ) -> CliResult<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    /// Мини-лог: flight start "Alpha" + один Rxdata блок.
    fn sample_log() -> Vec<u8> {
        let mut raw = Vec::new();

        raw.extend_from_slice(&[0xff, 0xff, 0xff, 0xff, 0x05, 0x01]);
        let mut payload = [0u8; 30];
        payload[6..11].copy_from_slice(b"Alpha");
        raw.extend_from_slice(&payload);

        raw.extend_from_slice(&10_000u32.to_le_bytes());
        raw.extend_from_slice(&[0x7f, 0x00]);
        for w in [1u16, 2, 3, 4, 5, 6, 700] {
            raw.extend_from_slice(&w.to_be_bytes());
        }

        raw
    }

    #[test]
    fn test_export_csv_rows() {
        let mut reader = TlmReader::new(Cursor::new(sample_log()));
        let mut out = Vec::new();

        let summary = export_csv(&mut reader, &mut out).unwrap();
        assert_eq!(summary.records, 2);
        assert_eq!(summary.flights, 1);
        // 1 поле flight start + 7 полей Rxdata
        assert_eq!(summary.rows, 8);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "offset,flightno,timestamp,modelname,rectype,datatype,parameter,value"
        );
        assert_eq!(lines[1], "0x0,1,0,Alpha,header,flight start,model name,Alpha");
        assert_eq!(lines[2], "0x24,1,100,Alpha,data,Rxdata,A,1");
        assert_eq!(lines[8], "0x24,1,100,Alpha,data,Rxdata,rxvolts,7");
    }

    #[test]
    fn test_flight_tracker_numbering() {
        let mut tracker = FlightTracker::new();
        assert_eq!(tracker.flight_no, 0);

        let flight = Record {
            offset: 0,
            timestamp: None,
            category: tlm_types::Category::Header,
            label: FLIGHT_START_LABEL.to_string(),
            fields: vec![(
                "model name".to_string(),
                tlm_types::FieldValue::Text("Beta".to_string()),
            )],
        };
        tracker.observe(&flight);
        assert_eq!(tracker.flight_no, 1);
        assert_eq!(tracker.model_name, "Beta");

        let data = Record {
            offset: 36,
            timestamp: Some(1.0),
            category: tlm_types::Category::Data,
            label: "Rxdata".to_string(),
            fields: vec![],
        };
        tracker.observe(&data);
        // Data-записи номер полёта не меняют
        assert_eq!(tracker.flight_no, 1);
        assert_eq!(tracker.model_name, "Beta");
    }

    #[test]
    fn test_print_records_format() {
        let mut reader = TlmReader::new(Cursor::new(sample_log()));
        let mut out = Vec::new();

        let summary = print_records(&mut reader, &mut out).unwrap();
        assert_eq!(summary.records, 2);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("0x0 0 header flight start"));
        assert!(lines[1].starts_with("0x24 100 data Rxdata A=1"));
        assert!(lines[1].ends_with("rxvolts=7"));
    }

    #[test]
    fn test_session_report_round_trip() {
        let tmp = tempfile::NamedTempFile::new().unwrap();

        let mut reader = TlmReader::new(Cursor::new(sample_log()));
        let summary = export_csv(&mut reader, Vec::new()).unwrap();

        let report =
            SessionReport::new(Path::new("flight.TLM"), reader.stats(), summary.flights);
        report.write_to(tmp.path()).unwrap();

        let parsed: serde_json::Value =
            serde_json::from_reader(File::open(tmp.path()).unwrap()).unwrap();

        assert_eq!(parsed["input"], "flight.TLM");
        assert_eq!(parsed["flights"], 1);
        assert_eq!(parsed["records"], 2);
        assert_eq!(parsed["data_records"], 1);
        assert_eq!(parsed["header_records"], 1);
        assert_eq!(parsed["bytes_processed"], 56);
    }
}
