//! Единая точка входа для полей справочников: выбирает адаптер по
//! `DisplayType` и при необходимости пишет изменения прямо в форму.

use super::normalize::SelectionValue;
use super::ui::{
    DictCheckboxGroup, DictRadioGroup, DictSelect, DictTag, DictText, DictTreeSelect, FieldSize,
};
use crate::shared::state::form_data::FormData;
use contracts::enums::display_type::DisplayType;
use contracts::shared::dictionary::DictionaryEntry;
use leptos::prelude::*;
use std::collections::HashMap;

/// Изменение значения поля справочника
#[derive(Debug, Clone, PartialEq)]
pub enum DictChange {
    /// select / radio / tree
    Single {
        value: Option<String>,
        entry: Option<DictionaryEntry>,
    },
    /// checkbox
    Multi(Vec<String>),
}

impl DictChange {
    pub fn single(value: Option<String>, entry: Option<DictionaryEntry>) -> Self {
        DictChange::Single { value, entry }
    }

    /// Значение для локального зеркала состояния
    pub fn to_selection(&self) -> SelectionValue {
        match self {
            DictChange::Single { value, .. } => value.clone().into(),
            DictChange::Multi(values) => SelectionValue::List(values.clone()),
        }
    }
}

/// Новое значение локального зеркала. Поле, привязанное к форме,
/// сбрасывается, когда значение из формы пропало.
fn mirrored_selection(external: Option<SelectionValue>, form_bound: bool) -> Option<SelectionValue> {
    match external {
        Some(v) => Some(v),
        None if form_bound => Some(SelectionValue::Empty),
        None => None,
    }
}

/// Writes `change` into `form[field]` when both are present.
/// Returns whether the form was touched.
fn write_through(form: Option<RwSignal<FormData>>, field: Option<&str>, change: &DictChange) -> bool {
    let (Some(form), Some(field)) = (form, field) else {
        return false;
    };
    form.update(|data| data.apply_change(field, change));
    true
}

/// Поле справочника с выбором способа отображения.
///
/// Если заданы и `field`, и `form`, каждое изменение дополнительно
/// записывается в `form` по ключу `field`.
#[component]
pub fn Dict(
    #[prop(into)]
    dict_code: String,
    display_type: DisplayType,
    /// Внешнее значение; без него значение берётся из `form[field]`
    #[prop(optional, into)]
    value: MaybeProp<SelectionValue>,
    #[prop(optional)]
    on_change: Option<Callback<DictChange>>,
    #[prop(optional, into)]
    field: Option<String>,
    #[prop(optional)]
    form: Option<RwSignal<FormData>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional)]
    allow_clear: bool,
    #[prop(optional, into)]
    loading: MaybeProp<bool>,
    #[prop(optional, into)]
    class: MaybeProp<String>,
    #[prop(optional)]
    size: FieldSize,
    #[prop(optional)]
    disabled: bool,
    /// Только для tag
    #[prop(optional)]
    color_map: Option<HashMap<String, String>>,
    /// Только для text и tag
    #[prop(optional, into)]
    default_text: MaybeProp<String>,
    /// Только для text
    #[prop(optional, into)]
    separator: MaybeProp<String>,
    /// Только для tree
    #[prop(optional)]
    default_expand_all: bool,
) -> impl IntoView {
    let field = StoredValue::new(field);
    let color_map = StoredValue::new(color_map);
    let dict_code = StoredValue::new(dict_code);

    let external = move || {
        value.get().or_else(|| {
            let form = form?;
            field.with_value(|f| {
                let f = f.as_ref()?;
                form.with(|data| data.selection(f))
            })
        })
    };

    let form_bound = form.is_some() && field.with_value(Option::is_some);

    // Локальное зеркало значения для управляемой перерисовки
    let local = RwSignal::new(SelectionValue::Empty);
    Effect::new(move |_| {
        if let Some(v) = mirrored_selection(external(), form_bound) {
            local.set(v);
        }
    });
    let selection: Signal<SelectionValue> = local.into();

    // Рендер только после монтирования
    let mounted = RwSignal::new(false);
    Effect::new(move |_| mounted.set(true));

    let emit = move |change: DictChange| {
        local.set(change.to_selection());
        field.with_value(|f| write_through(form, f.as_deref(), &change));
        if let Some(handler) = on_change {
            handler.run(change);
        }
    };

    let single = Callback::new(move |(v, e): (Option<String>, Option<DictionaryEntry>)| {
        emit(DictChange::single(v, e))
    });

    let render = move || {
        let code = dict_code.get_value();
        match display_type {
            DisplayType::Select => view! {
                <DictSelect
                    dict_code=code
                    value=selection
                    on_change=single
                    placeholder=placeholder
                    allow_clear=allow_clear
                    loading=loading
                    disabled=disabled
                    size=size
                    class=class
                />
            }
            .into_any(),
            DisplayType::Text => view! {
                <DictText
                    dict_code=code
                    value=selection
                    default_text=default_text
                    separator=separator
                    loading=loading
                    size=size
                    class=class
                />
            }
            .into_any(),
            DisplayType::Tag => view! {
                <DictTag
                    dict_code=code
                    value=selection
                    color_map=color_map.get_value().unwrap_or_default()
                    default_text=default_text
                    loading=loading
                    size=size
                    class=class
                />
            }
            .into_any(),
            DisplayType::Checkbox => view! {
                <DictCheckboxGroup
                    dict_code=code
                    value=selection
                    on_change=Callback::new(move |values: Vec<String>| emit(DictChange::Multi(values)))
                    loading=loading
                    disabled=disabled
                    size=size
                    class=class
                />
            }
            .into_any(),
            DisplayType::Tree => view! {
                <DictTreeSelect
                    dict_code=code
                    value=selection
                    on_change=single
                    placeholder=placeholder
                    allow_clear=allow_clear
                    default_expand_all=default_expand_all
                    loading=loading
                    disabled=disabled
                    size=size
                    class=class
                />
            }
            .into_any(),
            DisplayType::Radio => view! {
                <DictRadioGroup
                    dict_code=code
                    value=selection
                    on_change=Callback::new(move |(v, e): (String, Option<DictionaryEntry>)| {
                        emit(DictChange::single(Some(v), e))
                    })
                    loading=loading
                    disabled=disabled
                    size=size
                    class=class
                />
            }
            .into_any(),
        }
    };

    view! {
        <Show when=move || mounted.get()>
            {render}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_write_through_needs_form_and_field() {
        let change = DictChange::single(Some("basic".into()), None);

        let form = RwSignal::new(FormData::new());
        assert!(write_through(Some(form), Some("category"), &change));
        assert_eq!(form.get_untracked().get("category"), Some(&json!("basic")));

        let untouched = RwSignal::new(FormData::new());
        assert!(!write_through(Some(untouched), None, &change));
        assert_eq!(untouched.get_untracked(), FormData::new());

        assert!(!write_through(None, Some("category"), &change));
        assert!(!write_through(None, None, &change));
    }

    #[test]
    fn test_removed_form_value_clears_mirror() {
        let mut data = FormData::new();
        data.apply_change("category", &DictChange::single(Some("basic".into()), None));
        assert_eq!(
            mirrored_selection(data.selection("category"), true),
            Some(SelectionValue::Scalar("basic".into()))
        );

        data.remove_field("category");
        assert_eq!(
            mirrored_selection(data.selection("category"), true),
            Some(SelectionValue::Empty)
        );
    }

    #[test]
    fn test_unbound_field_keeps_local_value() {
        assert_eq!(mirrored_selection(None, false), None);
        assert_eq!(
            mirrored_selection(Some("x".into()), false),
            Some(SelectionValue::Scalar("x".into()))
        );
    }

    #[test]
    fn test_change_to_selection() {
        let cleared = DictChange::single(None, None);
        assert_eq!(cleared.to_selection(), SelectionValue::Empty);

        let chosen = DictChange::single(Some("a".into()), Some(DictionaryEntry::new("a", "A")));
        assert_eq!(chosen.to_selection(), SelectionValue::Scalar("a".into()));

        let multi = DictChange::Multi(vec!["x".into(), "y".into()]);
        assert_eq!(
            multi.to_selection(),
            SelectionValue::List(vec!["x".into(), "y".into()])
        );
    }
}
