use super::{field_class, use_dictionary, FieldSize, LoadingPlaceholder};
use crate::shared::dict::lookup::{find_entry, resolve_label, tag_color};
use crate::shared::dict::normalize::{normalize, SelectionValue};
use leptos::prelude::*;
use std::collections::HashMap;

/// Значения справочника в виде цветных меток (только чтение)
#[component]
pub fn DictTag(
    #[prop(into)]
    dict_code: String,
    #[prop(into)]
    value: Signal<SelectionValue>,
    /// Цвета по значению; важнее цвета из справочника
    #[prop(optional)]
    color_map: Option<HashMap<String, String>>,
    #[prop(optional, into)]
    default_text: MaybeProp<String>,
    #[prop(optional, into)]
    loading: MaybeProp<bool>,
    #[prop(optional)]
    size: FieldSize,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let dict = use_dictionary(&dict_code, loading);
    let color_map = StoredValue::new(color_map);

    view! {
        <span class=move || field_class("tag", size, false, class.get())>
            {move || {
                if dict.loading.get() {
                    return view! { <LoadingPlaceholder /> }.into_any();
                }
                let values = normalize(&value.get());
                let fallback = default_text.get();
                dict.entries.with(|entries| {
                    values
                        .iter()
                        .map(|v| {
                            let entry = find_entry(entries, v);
                            let label = resolve_label(entries, v, fallback.as_deref());
                            let color = color_map.with_value(|map| tag_color(v, map.as_ref(), entry));
                            view! {
                                <span
                                    class="badge dict-tag__item"
                                    style=format!("background-color: {}; color: #fff;", color)
                                >
                                    {label}
                                </span>
                            }
                        })
                        .collect_view()
                })
                .into_any()
            }}
        </span>
    }
}
