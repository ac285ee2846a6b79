use crate::shared::dict::facade::DictChange;
use crate::shared::dict::normalize::SelectionValue;
use serde_json::{Map, Value};

/// FormData holds the values of one form as a JSON object.
/// Dictionary fields write their changes here by field key.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormData {
    fields: Map<String, Value>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Построение из JSON-объекта; прочие значения дают пустую форму
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self { fields },
            _ => Self::default(),
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Значение поля в виде, понятном компонентам справочников
    pub fn selection(&self, field: &str) -> Option<SelectionValue> {
        self.fields.get(field).map(SelectionValue::from)
    }

    pub fn set_field(&mut self, field: impl Into<String>, value: Value) {
        self.fields.insert(field.into(), value);
    }

    pub fn remove_field(&mut self, field: &str) {
        self.fields.remove(field);
    }

    /// Запись изменения из поля справочника: одиночный выбор хранится
    /// строкой (или null при очистке), множественный массивом строк.
    pub fn apply_change(&mut self, field: &str, change: &DictChange) {
        self.set_field(field, change.to_selection().to_json());
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }
}
