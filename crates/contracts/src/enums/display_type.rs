use serde::{Deserialize, Serialize};

/// Способ отображения значения справочника
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayType {
    Select,
    Text,
    Tag,
    Checkbox,
    Tree,
    Radio,
}

impl DisplayType {
    /// Код типа отображения (как в разметке форм)
    pub fn code(&self) -> &'static str {
        match self {
            DisplayType::Select => "select",
            DisplayType::Text => "text",
            DisplayType::Tag => "tag",
            DisplayType::Checkbox => "checkbox",
            DisplayType::Tree => "tree",
            DisplayType::Radio => "radio",
        }
    }

    /// Человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            DisplayType::Select => "Выпадающий список",
            DisplayType::Text => "Текст",
            DisplayType::Tag => "Метки",
            DisplayType::Checkbox => "Флажки",
            DisplayType::Tree => "Дерево",
            DisplayType::Radio => "Переключатели",
        }
    }

    pub fn all() -> Vec<DisplayType> {
        vec![
            DisplayType::Select,
            DisplayType::Text,
            DisplayType::Tag,
            DisplayType::Checkbox,
            DisplayType::Tree,
            DisplayType::Radio,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "select" => Some(DisplayType::Select),
            "text" => Some(DisplayType::Text),
            "tag" => Some(DisplayType::Tag),
            "checkbox" => Some(DisplayType::Checkbox),
            "tree" => Some(DisplayType::Tree),
            "radio" => Some(DisplayType::Radio),
            _ => None,
        }
    }
}

impl std::fmt::Display for DisplayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        for display_type in DisplayType::all() {
            assert_eq!(DisplayType::from_code(display_type.code()), Some(display_type));
        }
        assert_eq!(DisplayType::from_code("grid"), None);
    }

    #[test]
    fn test_display_names_are_distinct() {
        let names: std::collections::HashSet<_> =
            DisplayType::all().iter().map(|t| t.display_name()).collect();
        assert_eq!(names.len(), DisplayType::all().len());
    }

    #[test]
    fn test_serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&DisplayType::Checkbox).unwrap();
        assert_eq!(json, "\"checkbox\"");
        let parsed: DisplayType = serde_json::from_str("\"tree\"").unwrap();
        assert_eq!(parsed, DisplayType::Tree);
    }
}
