use super::{field_class, use_dictionary, FieldSize, LoadingPlaceholder};
use crate::shared::dict::normalize::{first_value, SelectionValue};
use contracts::shared::dictionary::DictionaryEntry;
use leptos::prelude::*;

/// Значение пункта "очистить" в `<select>`. Пункты справочника
/// кодируются индексом, поэтому совпасть с ним не могут.
pub const CLEAR_OPTION: &str = "__clear__";

/// Maps the raw `<option>` value back to `(value, entry)`.
/// The clear sentinel and anything unparsable yield `(None, None)`.
pub fn resolve_select_choice(
    entries: &[DictionaryEntry],
    raw: &str,
) -> (Option<String>, Option<DictionaryEntry>) {
    if raw == CLEAR_OPTION {
        return (None, None);
    }
    match raw.parse::<usize>().ok().and_then(|i| entries.get(i)) {
        Some(entry) => (Some(entry.value.clone()), Some(entry.clone())),
        None => (None, None),
    }
}

/// Index of the entry matching `current`. `None` keeps the placeholder selected.
pub fn selected_index(entries: &[DictionaryEntry], current: Option<&str>) -> Option<usize> {
    let current = current?;
    entries.iter().position(|e| e.value == current)
}

/// Выпадающий список значений справочника (одиночный выбор)
#[component]
pub fn DictSelect(
    /// Код справочника
    #[prop(into)]
    dict_code: String,
    /// Текущее значение
    #[prop(into)]
    value: Signal<SelectionValue>,
    /// Выбранное значение и элемент справочника; `(None, None)` при очистке
    #[prop(optional)]
    on_change: Option<Callback<(Option<String>, Option<DictionaryEntry>)>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Показывать пункт "очистить"
    #[prop(optional)]
    allow_clear: bool,
    /// Явное состояние загрузки вместо состояния кэша
    #[prop(optional, into)]
    loading: MaybeProp<bool>,
    #[prop(optional)]
    disabled: bool,
    #[prop(optional)]
    size: FieldSize,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let dict = use_dictionary(&dict_code, loading);
    let wrapper_class = move || field_class("select", size, disabled, class.get());

    view! {
        <div class=wrapper_class>
            {move || {
                if dict.loading.get() {
                    return view! { <LoadingPlaceholder /> }.into_any();
                }
                let entries = dict.entries.get();
                let current = first_value(&value.get());
                let selected = selected_index(&entries, current.as_deref());
                let placeholder_text = placeholder.get().unwrap_or_else(|| "Выберите...".to_string());

                view! {
                    <select
                        class="form__select"
                        disabled=disabled
                        on:change=move |ev| {
                            let raw = event_target_value(&ev);
                            let choice = dict.entries.with_untracked(|entries| {
                                resolve_select_choice(entries, &raw)
                            });
                            if let Some(handler) = on_change {
                                handler.run(choice);
                            }
                        }
                    >
                        <option value="" disabled=true hidden=true selected={selected.is_none()}>
                            {placeholder_text}
                        </option>
                        {allow_clear.then(|| view! {
                            <option value=CLEAR_OPTION>"— очистить —"</option>
                        })}
                        {entries
                            .into_iter()
                            .enumerate()
                            .map(|(i, entry)| {
                                view! {
                                    <option value=i.to_string() selected={selected == Some(i)}>
                                        {entry.label}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                }
                .into_any()
            }}
        </div>
    }
}
