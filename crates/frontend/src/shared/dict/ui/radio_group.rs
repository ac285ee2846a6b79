use super::{field_class, use_dictionary, EmptyOptions, FieldSize, LoadingPlaceholder};
use crate::shared::dict::normalize::{first_value, SelectionValue};
use contracts::shared::dictionary::DictionaryEntry;
use leptos::prelude::*;

/// Группа переключателей (одиночный выбор)
#[component]
pub fn DictRadioGroup(
    #[prop(into)]
    dict_code: String,
    #[prop(into)]
    value: Signal<SelectionValue>,
    /// Выбранное значение и соответствующий элемент справочника
    #[prop(optional)]
    on_change: Option<Callback<(String, Option<DictionaryEntry>)>>,
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
    // name должен быть уникален, иначе группы на одной странице смешаются
    let group_name = format!("dict-radio-{}-{}", dict_code, uuid::Uuid::new_v4());

    view! {
        <div class=move || field_class("radio", size, disabled, class.get())>
            <div class="form__radio-group">
                {move || {
                    if dict.loading.get() {
                        return view! { <LoadingPlaceholder /> }.into_any();
                    }
                    let entries = dict.entries.get();
                    if entries.is_empty() {
                        return view! { <EmptyOptions /> }.into_any();
                    }
                    let current = first_value(&value.get());

                    entries
                        .into_iter()
                        .enumerate()
                        .map(|(i, entry)| {
                            let radio_id = format!("{}-{}", group_name, i);
                            let checked = current.as_deref() == Some(entry.value.as_str());
                            let label = entry.label.clone();
                            let option_value = entry.value.clone();
                            view! {
                                <div class="form__radio-wrapper">
                                    <input
                                        id=radio_id.clone()
                                        type="radio"
                                        class="form__radio"
                                        name=group_name.clone()
                                        value=option_value
                                        checked=checked
                                        disabled=disabled
                                        on:change=move |_| {
                                            if let Some(handler) = on_change {
                                                handler.run((entry.value.clone(), Some(entry.clone())));
                                            }
                                        }
                                    />
                                    <label class="form__radio-label" for=radio_id>
                                        {label}
                                    </label>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>
        </div>
    }
}
