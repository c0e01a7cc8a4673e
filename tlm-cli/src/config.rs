use std::path::Path;

use chrono::{DateTime, Local};

/// Подстановки для шаблонов имён файлов.
///
/// `{date}` → yymmdd, `{time}` → hhmm (локальное время),
/// `{tlm}` → имя входного файла без расширения.
#[derive(Debug, Clone)]
pub struct NameMeta {
    pub date: String,
    pub time: String,
    pub tlm_stem: String,
}

impl NameMeta {
    pub fn new(
        now: &DateTime<Local>,
        tlm_path: &Path,
    ) -> Self {
        Self {
            date: now.format("%y%m%d").to_string(),
            time: now.format("%H%M").to_string(),
            tlm_stem: tlm_path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default(),
        }
    }

    /// Штамп для имени архивной копии: `yymmddhhmm`.
    pub fn stamp(&self) -> String {
        format!("{}{}", self.date, self.time)
    }

    /// Разворачивает шаблон имени выходного файла.
    pub fn expand(
        &self,
        template: &str,
    ) -> String {
        template
            .replace("{date}", &self.date)
            .replace("{time}", &self.time)
            .replace("{tlm}", &self.tlm_stem)
    }
}
