//! Итоговая запись, порождаемая итератором блоков.

use std::fmt;

/// Категория записи, выведенная из пары (t1, t2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Data,
    Header,
}

impl fmt::Display for Category {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Category::Data => write!(f, "data"),
            Category::Header => write!(f, "header"),
        }
    }
}

/// Значение поля payload.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Сырое слово u16.
    Word(u16),
    /// Уже отмасштабированное значение (напр. вольты ÷100).
    Scaled(f64),
    /// Текст (имя модели, hex-дамп).
    Text(String),
}

impl fmt::Display for FieldValue {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            FieldValue::Word(w) => write!(f, "{w}"),
            FieldValue::Scaled(v) => write!(f, "{v}"),
            FieldValue::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Одна декодированная запись потока.
///
/// Создаётся заново на каждом шаге итерации, неизменяема и
/// принадлежит потребителю. Идентичности за пределами позиции в
/// потоке не имеет.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Смещение преамбулы от начала потока (байты).
    pub offset: u64,
    /// Метка времени в секундах; отсутствует у sentinel-блоков.
    pub timestamp: Option<f64>,
    /// Категория по правилу классификации.
    pub category: Category,
    /// Имя устройства, "flight start" либо "unknown(0xNN)".
    pub label: String,
    /// Упорядоченные поля payload.
    pub fields: Vec<(String, FieldValue)>,
}

impl Record {
    /// Значение поля по имени.
    pub fn field(
        &self,
        name: &str,
    ) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Имя модели из блока "flight start" (если это он).
    pub fn model_name(&self) -> Option<&str> {
        match self.field("model name") {
            Some(FieldValue::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> Record {
        Record {
            offset: 36,
            timestamp: Some(1.5),
            category: Category::Data,
            label: "Rxdata".to_string(),
            fields: vec![
                ("A".to_string(), FieldValue::Word(1)),
                ("rxvolts".to_string(), FieldValue::Scaled(7.0)),
            ],
        }
    }

    #[test]
    fn test_field_lookup() {
        let rec = sample_record();
        assert_eq!(rec.field("A"), Some(&FieldValue::Word(1)));
        assert_eq!(rec.field("rxvolts"), Some(&FieldValue::Scaled(7.0)));
        assert_eq!(rec.field("nope"), None);
    }

    #[test]
    fn test_model_name_absent_on_data() {
        assert_eq!(sample_record().model_name(), None);
    }

    #[test]
    fn test_model_name_present() {
        let rec = Record {
            offset: 0,
            timestamp: None,
            category: Category::Header,
            label: "flight start".to_string(),
            fields: vec![(
                "model name".to_string(),
                FieldValue::Text("MyPlane".to_string()),
            )],
        };
        assert_eq!(rec.model_name(), Some("MyPlane"));
    }

    #[test]
    fn test_display_forms() {
        assert_eq!(Category::Data.to_string(), "data");
        assert_eq!(Category::Header.to_string(), "header");
        assert_eq!(FieldValue::Word(700).to_string(), "700");
        assert_eq!(FieldValue::Scaled(7.0).to_string(), "7");
        assert_eq!(FieldValue::Text("x".into()).to_string(), "x");
    }
}
