//! Пример: чтение TLM-файла через TlmReader
//!
//! Демонстрирует:
//! - итерацию записей (усечённый хвост завершает поток штатно)
//! - доступ к меткам времени и полям
//! - итоговую статистику чтения

use std::fs::File;

use anyhow::Context;
use tlm_core::{Category, TlmReader};

fn main() -> anyhow::Result<()> {
    let input_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "flight.TLM".to_string());

    let file = File::open(&input_path).with_context(|| format!("open {input_path}"))?;
    let mut reader = TlmReader::new(file);

    println!("reading {input_path}");

    let mut shown = 0usize;

    while let Some(result) = reader.next_record() {
        let record = result?;

        // Показываем первые 10 записей
        if shown < 10 {
            let ts = match record.timestamp {
                Some(t) => format!("{t:10.2}s"),
                None => "         -".to_string(),
            };
            println!("  {:#08x} {} {:6} {}", record.offset, ts, record.category, record.label);
            shown += 1;
        }

        if record.category == Category::Header {
            if let Some(model) = record.model_name() {
                println!("  >> new flight: {model}");
            }
        }
    }

    let stats = reader.stats();
    println!("\n✓ Read complete");
    println!("  Records       : {}", stats.records_ok);
    println!("  Data records  : {}", stats.data_records);
    println!("  Header records: {}", stats.header_records);
    println!("  Flights       : {}", stats.flight_starts);
    println!("  Bytes         : {}", stats.bytes_processed);

    Ok(())
}
