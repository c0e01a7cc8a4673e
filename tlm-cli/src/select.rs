//! Интерактивный выбор .TLM файла и архивная копия.

use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use crate::error::{CliError, CliResult};

/// Все .TLM файлы каталога (регистр расширения не важен), сортированные.
pub fn list_tlm_files(dir: &Path) -> CliResult<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        let is_tlm = path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("tlm"));

        if is_tlm && path.is_file() {
            files.push(path);
        }
    }

    files.sort();

    if files.is_empty() {
        return Err(CliError::NoLogsFound(dir.display().to_string()));
    }

    Ok(files)
}

/// Парсит введённый индекс выбора.
pub fn parse_selection(
    input: &str,
    count: usize,
) -> CliResult<usize> {
    let trimmed = input.trim();

    let index: usize = trimmed
        .parse()
        .map_err(|_| CliError::InvalidSelection(trimmed.to_string()))?;

    if index >= count {
        return Err(CliError::InvalidSelection(format!(
            "{index} (expected 0..{})",
            count - 1
        )));
    }

    Ok(index)
}

/// Печатает нумерованный список и читает выбор со stdin.
pub fn prompt_selection(files: &[PathBuf]) -> CliResult<usize> {
    for (i, file) in files.iter().enumerate() {
        println!("{i:2}  {}", file.display());
    }

    print!("select file: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    parse_selection(&line, files.len())
}

/// Копирует выбранный лог в архивный каталог под штампованным именем.
pub fn archive_copy(
    src: &Path,
    logs_dir: &Path,
    stamp: &str,
) -> CliResult<PathBuf> {
    let basename = src
        .file_name()
        .ok_or_else(|| CliError::InvalidSelection(src.display().to_string()))?;

    let dest = logs_dir.join(format!("{stamp}-{}", basename.to_string_lossy()));

    fs::copy(src, &dest)?;

    Ok(dest)
}
