use crate::shared::dict::ui::FieldSize;
use crate::shared::dict::{Dict, DictChange, SelectionValue};
use crate::shared::state::form_data::FormData;
use contracts::enums::display_type::DisplayType;
use leptos::prelude::*;
use std::collections::HashMap;

/// Страница-витрина полей справочников на примере заявки на этическую экспертизу
#[component]
pub fn DictionaryShowcasePage() -> impl IntoView {
    let form = RwSignal::new(FormData::new());
    let last_change = RwSignal::new(String::from("—"));

    let on_change = Callback::new(move |change: DictChange| {
        let text = match &change {
            DictChange::Single { value, entry } => format!(
                "{} ({})",
                value.as_deref().unwrap_or("null"),
                entry.as_ref().map(|e| e.label.as_str()).unwrap_or("—")
            ),
            DictChange::Multi(values) => format!("[{}]", values.join(", ")),
        };
        log::debug!("dictionary field changed: {}", text);
        last_change.set(text);
    });

    let status_colors = HashMap::from([
        ("approved".to_string(), "#2e7d32".to_string()),
        ("rejected".to_string(), "#c62828".to_string()),
    ]);

    let field_value = move |field: &'static str| {
        Signal::derive(move || form.with(|f| f.selection(field)).unwrap_or_default())
    };

    view! {
        <div class="page page--dictionary-showcase">
            <h1 class="page__title">"Заявка на этическую экспертизу"</h1>

            <div class="form">
                <div class="form__group">
                    <label class="form__label">"Категория проекта"</label>
                    <span class="form__hint">{DisplayType::Select.display_name()}</span>
                    <Dict
                        dict_code="project_category"
                        display_type=DisplayType::Select
                        field="project_category"
                        form=form
                        on_change=on_change
                        placeholder="Выберите категорию"
                        allow_clear=true
                    />
                </div>

                <div class="form__group">
                    <label class="form__label">"Статус экспертизы"</label>
                    <span class="form__hint">{DisplayType::Radio.display_name()}</span>
                    <Dict
                        dict_code="ethics_review_status"
                        display_type=DisplayType::Radio
                        field="review_status"
                        form=form
                        on_change=on_change
                    />
                </div>

                <div class="form__group">
                    <label class="form__label">"Направления исследования"</label>
                    <span class="form__hint">{DisplayType::Checkbox.display_name()}</span>
                    <Dict
                        dict_code="research_direction"
                        display_type=DisplayType::Checkbox
                        field="directions"
                        form=form
                        on_change=on_change
                    />
                </div>

                <div class="form__group">
                    <label class="form__label">"Научная дисциплина"</label>
                    <span class="form__hint">{DisplayType::Tree.display_name()}</span>
                    <Dict
                        dict_code="discipline"
                        display_type=DisplayType::Tree
                        field="discipline"
                        form=form
                        on_change=on_change
                        placeholder="Выберите дисциплину"
                        allow_clear=true
                        size=FieldSize::Large
                    />
                </div>
            </div>

            <h2 class="page__subtitle">"Просмотр"</h2>
            <div class="form">
                <div class="form__group">
                    <label class="form__label">"Направления (текст)"</label>
                    <span class="form__hint">{DisplayType::Text.display_name()}</span>
                    <Dict
                        dict_code="research_direction"
                        display_type=DisplayType::Text
                        value=field_value("directions")
                        separator=", "
                        default_text="не указано"
                    />
                </div>
                <div class="form__group">
                    <label class="form__label">"Статус (метка)"</label>
                    <span class="form__hint">{DisplayType::Tag.display_name()}</span>
                    <Dict
                        dict_code="ethics_review_status"
                        display_type=DisplayType::Tag
                        value=field_value("review_status")
                        color_map=status_colors
                    />
                </div>
                <div class="form__group">
                    <label class="form__label">"Заключение комиссии (фиксированное значение)"</label>
                    <span class="form__hint">{DisplayType::Tag.display_name()}</span>
                    <Dict
                        dict_code="yes_no"
                        display_type=DisplayType::Tag
                        value=SelectionValue::from("1,0")
                        size=FieldSize::Small
                    />
                </div>
            </div>

            <div class="page__footer">
                <div>"Последнее изменение: " {move || last_change.get()}</div>
                <pre class="json-viewer">
                    {move || serde_json::to_string_pretty(&form.get().to_value()).unwrap_or_default()}
                </pre>
            </div>
        </div>
    }
}
