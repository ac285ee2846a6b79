use super::{field_class, use_dictionary, EmptyOptions, FieldSize, LoadingPlaceholder};
use crate::shared::dict::lookup::toggle_value;
use crate::shared::dict::normalize::{normalize, SelectionValue};
use leptos::prelude::*;

/// Группа флажков (множественный выбор). На каждое переключение
/// отдаёт полный обновлённый список значений.
#[component]
pub fn DictCheckboxGroup(
    #[prop(into)]
    dict_code: String,
    #[prop(into)]
    value: Signal<SelectionValue>,
    #[prop(optional)]
    on_change: Option<Callback<Vec<String>>>,
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

    view! {
        <div class=move || field_class("checkbox", size, disabled, class.get())>
            {move || {
                if dict.loading.get() {
                    return view! { <LoadingPlaceholder /> }.into_any();
                }
                let entries = dict.entries.get();
                if entries.is_empty() {
                    return view! { <EmptyOptions /> }.into_any();
                }
                let selected = normalize(&value.get());

                entries
                    .into_iter()
                    .map(|entry| {
                        let checked = selected.iter().any(|v| *v == entry.value);
                        let item_value = entry.value.clone();
                        view! {
                            <label class="form__checkbox-wrapper">
                                <input
                                    type="checkbox"
                                    class="form__checkbox"
                                    checked=checked
                                    disabled=disabled
                                    on:change=move |_| {
                                        let current = normalize(&value.get_untracked());
                                        let next = toggle_value(&current, &item_value);
                                        if let Some(handler) = on_change {
                                            handler.run(next);
                                        }
                                    }
                                />
                                <span class="form__checkbox-label">{entry.label}</span>
                            </label>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}
