use super::{field_class, use_dictionary, FieldSize, LoadingPlaceholder};
use crate::shared::dict::lookup::text_for;
use crate::shared::dict::normalize::{normalize, SelectionValue};
use leptos::prelude::*;

/// Значения справочника в виде текста (только чтение)
#[component]
pub fn DictText(
    #[prop(into)]
    dict_code: String,
    #[prop(into)]
    value: Signal<SelectionValue>,
    /// Текст для значений, которых нет в справочнике
    #[prop(optional, into)]
    default_text: MaybeProp<String>,
    /// Разделитель для нескольких значений (по умолчанию пробел)
    #[prop(optional, into)]
    separator: MaybeProp<String>,
    #[prop(optional, into)]
    loading: MaybeProp<bool>,
    #[prop(optional)]
    size: FieldSize,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let dict = use_dictionary(&dict_code, loading);

    let text = move || {
        let values = normalize(&value.get());
        dict.entries.with(|entries| {
            text_for(
                entries,
                &values,
                default_text.get().as_deref(),
                separator.get().as_deref(),
            )
        })
    };

    view! {
        <span class=move || field_class("text", size, false, class.get())>
            {move || if dict.loading.get() {
                view! { <LoadingPlaceholder /> }.into_any()
            } else {
                text().into_any()
            }}
        </span>
    }
}
