use serde::{Deserialize, Serialize};

/// Элемент справочника в том виде, в каком с ним работает интерфейс
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    /// Уникальное в пределах справочника значение
    pub value: String,
    pub label: String,
    /// Значение родительского элемента (для иерархических справочников)
    pub parent_value: Option<String>,
    /// Цвет отображения (CSS), если задан
    pub color: Option<String>,
}

impl DictionaryEntry {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            parent_value: None,
            color: None,
        }
    }

    pub fn with_parent(mut self, parent_value: impl Into<String>) -> Self {
        self.parent_value = Some(parent_value.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Запись справочника на проводе: `{dictValue, dictLabel, parentValue?, color?}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntryDto {
    pub dict_value: String,
    pub dict_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl From<DictionaryEntryDto> for DictionaryEntry {
    fn from(dto: DictionaryEntryDto) -> Self {
        // Пустой parentValue приходит от старых выгрузок вместо null
        let parent_value = dto.parent_value.filter(|p| !p.is_empty());
        let color = dto.color.filter(|c| !c.is_empty());
        Self {
            value: dto.dict_value,
            label: dto.dict_label,
            parent_value,
            color,
        }
    }
}

impl From<DictionaryEntry> for DictionaryEntryDto {
    fn from(entry: DictionaryEntry) -> Self {
        Self {
            dict_value: entry.value,
            dict_label: entry.label,
            parent_value: entry.parent_value,
            color: entry.color,
        }
    }
}

/// Краткие сведения о справочнике для списка справочников
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionarySummary {
    pub code: String,
    pub name: String,
    pub entry_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dto_wire_format() {
        let json = r##"[
            {"dictValue": "1", "dictLabel": "Да"},
            {"dictValue": "b", "dictLabel": "B", "parentValue": "a", "color": "#ff0000"}
        ]"##;
        let items: Vec<DictionaryEntryDto> = serde_json::from_str(json).unwrap();
        let entries: Vec<DictionaryEntry> = items.into_iter().map(Into::into).collect();

        assert_eq!(entries[0], DictionaryEntry::new("1", "Да"));
        assert_eq!(entries[1].parent_value.as_deref(), Some("a"));
        assert_eq!(entries[1].color.as_deref(), Some("#ff0000"));
    }

    #[test]
    fn test_empty_parent_is_treated_as_root() {
        let dto = DictionaryEntryDto {
            dict_value: "x".into(),
            dict_label: "X".into(),
            parent_value: Some(String::new()),
            color: None,
        };
        let entry: DictionaryEntry = dto.into();
        assert_eq!(entry.parent_value, None);
    }

    #[test]
    fn test_optional_fields_are_omitted() {
        let dto: DictionaryEntryDto = DictionaryEntry::new("0", "Нет").into();
        let json = serde_json::to_string(&dto).unwrap();
        assert_eq!(json, r#"{"dictValue":"0","dictLabel":"Нет"}"#);
    }
}
