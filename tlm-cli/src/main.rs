use std::{
    fs,
    path::{Path, PathBuf},
    process,
};

use chrono::Local;
use clap::Parser;
use log::{error, info, warn};

use tlm_cli::{
    archive_copy, export_csv, list_tlm_files, print_records, prompt_selection, CliResult,
    ExportSummary, NameMeta, SessionReport,
};
use tlm_core::TlmReader;

#[derive(Parser, Debug)]
#[command(
    name = "tlm-cli",
    version = env!("CARGO_PKG_VERSION"),
    about = "Decode Spektrum TLM flight logs to CSV",
    long_about = None,
)]
struct Cli {
    /// Каталог с .TLM файлами: показать список и выбрать интерактивно
    #[arg(short, long)]
    dir: Option<PathBuf>,
    /// Каталог для архивных копий и выходных CSV
    #[arg(short, long, default_value = "./logs")]
    logs: PathBuf,
    /// Путь к .TLM файлу (если --dir не задан)
    #[arg(short, long, default_value = "flight.TLM")]
    tlm: PathBuf,
    /// Шаблон имени CSV: {date} → yymmdd, {time} → hhmm, {tlm} → имя входа
    #[arg(short, long, default_value = "{date}{time}-{tlm}.csv")]
    csv: String,
    /// Печатать записи в консоль вместо CSV
    #[arg(short, long)]
    print: bool,
    /// Путь к JSON-отчёту сессии (опционально)
    #[arg(long)]
    report: Option<PathBuf>,
    /// Тихий режим (только ошибки)
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    let level = if cli.quiet { "error" } else { "info" };

    env_logger::Builder::new()
        .filter_level(level.parse().unwrap())
        .format_target(false)
        .format_timestamp_secs()
        .init();

    if let Err(e) = fs::create_dir_all(&cli.logs) {
        error!("Failed to create logs dir {:?}: {e}", cli.logs);
        process::exit(1);
    }

    // Выбор входного файла: интерактивно из каталога либо --tlm
    let tlm_path = match resolve_input(&cli) {
        Ok(path) => path,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    let meta = NameMeta::new(&Local::now(), &tlm_path);

    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    info!("  Input         : {:?}", tlm_path);
    info!("  Logs dir      : {:?}", cli.logs);
    info!(
        "  Output        : {}",
        if cli.print {
            "console".to_string()
        } else {
            meta.expand(&cli.csv)
        }
    );
    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    match run(&cli, &tlm_path, &meta) {
        Ok(summary) => {
            if summary.records == 0 {
                warn!("⚠ No records decoded — is {:?} a TLM log?", tlm_path);
            }

            info!(
                "✓ Decode complete: {} records, {} flights",
                summary.records, summary.flights
            );
        }
        Err(e) => {
            error!("Decode failed: {e}");
            process::exit(1);
        }
    }
}

/// Определяет входной файл: интерактивный выбор или путь из аргумента.
fn resolve_input(cli: &Cli) -> CliResult<PathBuf> {
    let dir = match &cli.dir {
        Some(dir) => dir,
        None => return Ok(cli.tlm.clone()),
    };

    let files = list_tlm_files(dir)?;
    let index = prompt_selection(&files)?;
    let selected = &files[index];
    info!("file selected: {:?}", selected);

    // Архивируем копию и дальше читаем её
    let stamp = NameMeta::new(&Local::now(), selected).stamp();
    let archived = archive_copy(selected, &cli.logs, &stamp)?;
    info!("archived to {:?}", archived);

    Ok(archived)
}

fn run(
    cli: &Cli,
    tlm_path: &Path,
    meta: &NameMeta,
) -> CliResult<ExportSummary> {
    let file = fs::File::open(tlm_path)?;
    let mut reader = TlmReader::new(file);

    let summary = if cli.print {
        print_records(&mut reader, std::io::stdout().lock())?
    } else {
        let csv_path = cli.logs.join(meta.expand(&cli.csv));
        info!("using {:?}", csv_path);

        let out = fs::File::create(&csv_path)?;
        export_csv(&mut reader, out)?
    };

    if let Some(report_path) = &cli.report {
        let report = SessionReport::new(tlm_path, reader.stats(), summary.flights);
        report.write_to(report_path)?;
        info!("report written to {:?}", report_path);
    }

    Ok(summary)
}
