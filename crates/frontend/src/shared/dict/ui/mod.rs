pub mod checkbox_group;
pub mod radio_group;
pub mod select;
pub mod tag;
pub mod text;
pub mod tree_select;

pub use checkbox_group::DictCheckboxGroup;
pub use radio_group::DictRadioGroup;
pub use select::DictSelect;
pub use tag::DictTag;
pub use text::DictText;
pub use tree_select::DictTreeSelect;

use crate::shared::dict::store::use_dictionary_store;
use contracts::shared::dictionary::DictionaryEntry;
use leptos::prelude::*;
use thaw::{Spinner, SpinnerSize};

/// Размер поля справочника
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FieldSize {
    pub fn modifier(&self) -> &'static str {
        match self {
            FieldSize::Small => "dict-field--small",
            FieldSize::Medium => "dict-field--medium",
            FieldSize::Large => "dict-field--large",
        }
    }
}

/// Entries and loading flag of one dictionary, as seen by an adapter.
#[derive(Clone, Copy)]
pub struct DictBinding {
    pub entries: Memo<Vec<DictionaryEntry>>,
    pub loading: Signal<bool>,
}

/// Подписка адаптера на справочник: запускает загрузку и отдаёт сигналы.
/// Явный `loading_override` важнее состояния загрузки в кэше.
pub fn use_dictionary(dict_code: &str, loading_override: MaybeProp<bool>) -> DictBinding {
    let store = use_dictionary_store();
    store.ensure(dict_code);

    let entries = {
        let store = store.clone();
        let code = dict_code.to_string();
        Memo::new(move |_| store.entries(&code))
    };
    let code = dict_code.to_string();
    let loading = Signal::derive(move || {
        loading_override
            .get()
            .unwrap_or_else(|| store.is_loading(&code))
    });

    DictBinding { entries, loading }
}

pub(crate) fn field_class(kind: &str, size: FieldSize, disabled: bool, extra: Option<String>) -> String {
    let mut class = format!("dict-field dict-{} {}", kind, size.modifier());
    if disabled {
        class.push_str(" dict-field--disabled");
    }
    if let Some(extra) = extra.filter(|c| !c.is_empty()) {
        class.push(' ');
        class.push_str(&extra);
    }
    class
}

#[component]
pub fn LoadingPlaceholder() -> impl IntoView {
    view! {
        <span class="dict-field__loading">
            <Spinner size=SpinnerSize::Small />
        </span>
    }
}

#[component]
pub fn EmptyOptions() -> impl IntoView {
    view! { <span class="dict-field__empty">"Нет вариантов"</span> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_class() {
        assert_eq!(
            field_class("select", FieldSize::Small, false, None),
            "dict-field dict-select dict-field--small"
        );
        assert_eq!(
            field_class("tag", FieldSize::default(), true, Some("wide".into())),
            "dict-field dict-tag dict-field--medium dict-field--disabled wide"
        );
        assert_eq!(
            field_class("text", FieldSize::Large, false, Some(String::new())),
            "dict-field dict-text dict-field--large"
        );
    }
}
