use contracts::shared::dictionary::DictionaryEntry;
use std::collections::HashMap;

/// Разделитель по умолчанию для текстового отображения
pub const DEFAULT_SEPARATOR: &str = " ";

pub fn find_entry<'a>(entries: &'a [DictionaryEntry], value: &str) -> Option<&'a DictionaryEntry> {
    entries.iter().find(|e| e.value == value)
}

/// Label for a value; falls back to `default_text`, then to the raw value.
pub fn resolve_label(entries: &[DictionaryEntry], value: &str, default_text: Option<&str>) -> String {
    match find_entry(entries, value) {
        Some(entry) => entry.label.clone(),
        None => default_text.unwrap_or(value).to_string(),
    }
}

/// Текст для набора значений, склеенный разделителем
pub fn text_for(
    entries: &[DictionaryEntry],
    values: &[String],
    default_text: Option<&str>,
    separator: Option<&str>,
) -> String {
    values
        .iter()
        .map(|v| resolve_label(entries, v, default_text))
        .collect::<Vec<_>>()
        .join(separator.unwrap_or(DEFAULT_SEPARATOR))
}

/// Stable 32-bit string hash (`h = h * 31 + c`, wrapping) reduced to a hue.
pub fn hash_hue(value: &str) -> u32 {
    let hash = value
        .chars()
        .fold(0i32, |acc, ch| acc.wrapping_mul(31).wrapping_add(ch as i32));
    hash.unsigned_abs() % 360
}

/// Цвет метки: явная карта цветов > цвет элемента справочника > цвет по хешу
pub fn tag_color(
    value: &str,
    color_map: Option<&HashMap<String, String>>,
    entry: Option<&DictionaryEntry>,
) -> String {
    if let Some(color) = color_map.and_then(|m| m.get(value)) {
        return color.clone();
    }
    if let Some(color) = entry.and_then(|e| e.color.as_ref()) {
        return color.clone();
    }
    format!("hsl({}, 60%, 45%)", hash_hue(value))
}

/// Checkbox toggle: removes a selected value, appends an unselected one.
pub fn toggle_value(selected: &[String], value: &str) -> Vec<String> {
    if selected.iter().any(|v| v == value) {
        selected.iter().filter(|v| *v != value).cloned().collect()
    } else {
        let mut next = selected.to_vec();
        next.push(value.to_string());
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yes_no() -> Vec<DictionaryEntry> {
        vec![
            DictionaryEntry::new("1", "Yes"),
            DictionaryEntry::new("0", "No").with_color("#999"),
        ]
    }

    #[test]
    fn test_text_uses_default_separator() {
        let values = vec!["1".to_string(), "0".to_string()];
        assert_eq!(text_for(&yes_no(), &values, None, None), "Yes No");
        assert_eq!(text_for(&yes_no(), &values, None, Some(", ")), "Yes, No");
    }

    #[test]
    fn test_unmatched_value_fallbacks() {
        assert_eq!(resolve_label(&yes_no(), "7", None), "7");
        assert_eq!(resolve_label(&yes_no(), "7", Some("—")), "—");
        assert_eq!(resolve_label(&[], "1", None), "1");
    }

    #[test]
    fn test_tag_color_priority() {
        let entries = yes_no();
        let map = HashMap::from([("0".to_string(), "red".to_string())]);

        assert_eq!(tag_color("0", Some(&map), find_entry(&entries, "0")), "red");
        assert_eq!(tag_color("0", None, find_entry(&entries, "0")), "#999");

        let hashed = tag_color("1", None, find_entry(&entries, "1"));
        assert!(hashed.starts_with("hsl("));
        assert_eq!(hashed, tag_color("1", None, find_entry(&entries, "1")));
    }

    #[test]
    fn test_hash_hue_is_stable_and_bounded() {
        for value in ["", "a", "project_category", "очень длинное значение справочника"] {
            let hue = hash_hue(value);
            assert!(hue < 360);
            assert_eq!(hue, hash_hue(value));
        }
        assert_eq!(hash_hue(""), 0);
        assert_eq!(hash_hue("a"), 97);
    }

    #[test]
    fn test_toggle_value() {
        let selected = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(toggle_value(&selected, "b"), vec!["a", "c"]);
        assert_eq!(toggle_value(&selected, "d"), vec!["a", "b", "c", "d"]);
        assert_eq!(toggle_value(&[], "x"), vec!["x"]);
    }
}
