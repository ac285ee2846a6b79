//! Приведение значения поля к списку строковых значений справочника.
//!
//! Формы хранят выбранные значения по-разному: одиночным значением,
//! массивом или строкой через запятую. Все адаптеры сравнивают с элементами
//! справочника только результат [`normalize`].

use serde_json::Value;

/// Значение поля формы, переданное в компонент справочника
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionValue {
    #[default]
    Empty,
    /// Одиночное значение или строка через запятую
    Scalar(String),
    List(Vec<String>),
}

impl SelectionValue {
    pub fn is_empty(&self) -> bool {
        match self {
            SelectionValue::Empty => true,
            SelectionValue::Scalar(s) => s.is_empty(),
            SelectionValue::List(items) => items.is_empty(),
        }
    }

    /// JSON-представление для записи в состояние формы
    pub fn to_json(&self) -> Value {
        match self {
            SelectionValue::Empty => Value::Null,
            SelectionValue::Scalar(s) => Value::String(s.clone()),
            SelectionValue::List(items) => {
                Value::Array(items.iter().cloned().map(Value::String).collect())
            }
        }
    }
}

/// Canonical ordered list of selected values.
///
/// Lists are returned as-is (no dedup); comma strings are split, trimmed and
/// empty segments dropped.
pub fn normalize(value: &SelectionValue) -> Vec<String> {
    match value {
        SelectionValue::Empty => Vec::new(),
        SelectionValue::List(items) => items.clone(),
        SelectionValue::Scalar(s) if s.is_empty() => Vec::new(),
        SelectionValue::Scalar(s) if s.contains(',') => s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(String::from)
            .collect(),
        SelectionValue::Scalar(s) => vec![s.clone()],
    }
}

/// Первое выбранное значение (для адаптеров с одиночным выбором)
pub fn first_value(value: &SelectionValue) -> Option<String> {
    normalize(value).into_iter().next()
}

impl From<&str> for SelectionValue {
    fn from(s: &str) -> Self {
        SelectionValue::Scalar(s.to_string())
    }
}

impl From<String> for SelectionValue {
    fn from(s: String) -> Self {
        SelectionValue::Scalar(s)
    }
}

impl From<Vec<String>> for SelectionValue {
    fn from(items: Vec<String>) -> Self {
        SelectionValue::List(items)
    }
}

impl From<Vec<&str>> for SelectionValue {
    fn from(items: Vec<&str>) -> Self {
        SelectionValue::List(items.into_iter().map(String::from).collect())
    }
}

impl From<bool> for SelectionValue {
    fn from(b: bool) -> Self {
        SelectionValue::Scalar(b.to_string())
    }
}

macro_rules! scalar_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for SelectionValue {
                fn from(n: $t) -> Self {
                    SelectionValue::Scalar(n.to_string())
                }
            }
        )*
    };
}

scalar_from_number!(i32, i64, u32, u64, usize);

impl<T: Into<SelectionValue>> From<Option<T>> for SelectionValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

impl From<Value> for SelectionValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => SelectionValue::Empty,
            Value::String(s) => SelectionValue::Scalar(s),
            Value::Array(items) => {
                SelectionValue::List(items.into_iter().map(json_to_plain_string).collect())
            }
            other => SelectionValue::Scalar(json_to_plain_string(other)),
        }
    }
}

impl From<&Value> for SelectionValue {
    fn from(value: &Value) -> Self {
        value.clone().into()
    }
}

fn json_to_plain_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_inputs() {
        assert!(normalize(&SelectionValue::Empty).is_empty());
        assert!(normalize(&"".into()).is_empty());
        assert!(normalize(&SelectionValue::from(None::<String>)).is_empty());
        assert!(normalize(&json!(null).into()).is_empty());
    }

    #[test]
    fn test_comma_string_is_split_and_trimmed() {
        assert_eq!(normalize(&"a,b, c".into()), vec!["a", "b", "c"]);
        assert_eq!(normalize(&" a , ,b,".into()), vec!["a", "b"]);
    }

    #[test]
    fn test_list_is_returned_as_is() {
        assert_eq!(normalize(&vec!["x", "y"].into()), vec!["x", "y"]);
        assert_eq!(normalize(&vec!["x", "x"].into()), vec!["x", "x"]);
    }

    #[test]
    fn test_scalars_are_stringified() {
        assert_eq!(normalize(&5i32.into()), vec!["5"]);
        assert_eq!(normalize(&true.into()), vec!["true"]);
        assert_eq!(normalize(&json!(7).into()), vec!["7"]);
        assert_eq!(normalize(&json!([1, "b"]).into()), vec!["1", "b"]);
    }

    #[test]
    fn test_scalar_without_comma_is_not_trimmed() {
        assert_eq!(normalize(&" a ".into()), vec![" a "]);
    }

    #[test]
    fn test_first_value() {
        assert_eq!(first_value(&"b,c".into()), Some("b".to_string()));
        assert_eq!(first_value(&SelectionValue::Empty), None);
    }
}
