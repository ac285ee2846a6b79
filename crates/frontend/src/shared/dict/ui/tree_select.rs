use super::{field_class, use_dictionary, EmptyOptions, FieldSize, LoadingPlaceholder};
use crate::shared::dict::normalize::{first_value, SelectionValue};
use crate::shared::dict::tree::DictTree;
use crate::shared::icons::icon;
use contracts::shared::dictionary::DictionaryEntry;
use leptos::html::Div;
use leptos::prelude::*;
use std::collections::HashSet;
use wasm_bindgen::JsCast;

const PATH_SEPARATOR: &str = " / ";
const INDENT_PX: usize = 16;

/// Выбор значения из иерархического справочника
#[component]
pub fn DictTreeSelect(
    #[prop(into)]
    dict_code: String,
    #[prop(into)]
    value: Signal<SelectionValue>,
    /// Выбранное значение и элемент; `(None, None)` при очистке
    #[prop(optional)]
    on_change: Option<Callback<(Option<String>, Option<DictionaryEntry>)>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional)]
    allow_clear: bool,
    /// Раскрыть все узлы при загрузке (по умолчанию свёрнуты)
    #[prop(optional)]
    default_expand_all: bool,
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
    let tree = Memo::new(move |_| dict.entries.with(|entries| DictTree::build(entries)));

    let open = RwSignal::new(false);
    let query = RwSignal::new(String::new());
    let expanded = RwSignal::new(HashSet::<String>::new());
    let container = NodeRef::<Div>::new();

    if default_expand_all {
        Effect::new(move |_| {
            let parents = tree.with(|t| t.all_parent_values());
            expanded.set(parents);
        });
    }

    // Клик вне компонента закрывает выпадающую панель
    let outside_click = window_event_listener(leptos::ev::mousedown, move |ev| {
        if !open.get_untracked() {
            return;
        }
        let Some(root) = container.get_untracked() else {
            return;
        };
        let target = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        if !root.contains(target.as_ref()) {
            open.set(false);
        }
    });
    on_cleanup(move || outside_click.remove());

    let selected = Memo::new(move |_| first_value(&value.get()));

    let toggle_open = move |_| {
        if disabled || dict.loading.get_untracked() {
            return;
        }
        let now_open = !open.get_untracked();
        if now_open {
            // путь до выбранного значения должен быть виден
            if let Some(current) = selected.get_untracked() {
                let path = tree.with_untracked(|t| t.ancestors(&current));
                expanded.update(|set| set.extend(path));
            }
        }
        open.set(now_open);
    };

    let choose = move |choice: (Option<String>, Option<DictionaryEntry>)| {
        open.set(false);
        query.set(String::new());
        if let Some(handler) = on_change {
            handler.run(choice);
        }
    };

    let trigger_label = move || {
        let fallback = placeholder.get().unwrap_or_else(|| "Выберите...".to_string());
        match selected.get() {
            Some(v) => tree.with(|t| t.path_label(&v, PATH_SEPARATOR)).unwrap_or(v),
            None => fallback,
        }
    };

    let toggle_node = move |node_value: String| {
        expanded.update(|set| {
            if !set.remove(&node_value) {
                set.insert(node_value);
            }
        });
    };

    view! {
        <div node_ref=container class=move || field_class("tree", size, disabled, class.get())>
            <div
                class="dict-tree__trigger"
                class:dict-tree__trigger--open=move || open.get()
                class:dict-tree__trigger--placeholder=move || selected.get().is_none()
                on:click=toggle_open
            >
                {move || if dict.loading.get() {
                    view! { <LoadingPlaceholder /> }.into_any()
                } else {
                    view! { <span class="dict-tree__value">{trigger_label}</span> }.into_any()
                }}
                {move || (allow_clear && !disabled && selected.get().is_some()).then(|| view! {
                    <span
                        class="dict-tree__clear"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            choose((None, None));
                        }
                    >
                        {icon("x")}
                    </span>
                })}
            </div>

            <Show when=move || open.get()>
                <div class="dict-tree__popover">
                    <div class="dict-tree__search">
                        {icon("search")}
                        <input
                            type="text"
                            class="form__input"
                            placeholder="Поиск..."
                            prop:value=move || query.get()
                            on:input=move |ev| query.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="dict-tree__nodes">
                        {move || {
                            let rows = tree.with(|t| {
                                expanded.with(|set| query.with(|q| t.visible_rows(set, q)))
                            });
                            if rows.is_empty() {
                                return view! { <EmptyOptions /> }.into_any();
                            }
                            let current = selected.get();

                            rows.into_iter()
                                .map(|row| {
                                    let entry = tree.with_untracked(|t| t.node(row.index).entry.clone());
                                    let is_selected = current.as_deref() == Some(entry.value.as_str());
                                    let node_value = entry.value.clone();
                                    let label = entry.label.clone();
                                    let chevron = if !row.has_children {
                                        ""
                                    } else if row.expanded {
                                        "chevron-down"
                                    } else {
                                        "chevron-right"
                                    };
                                    view! {
                                        <div
                                            class="dict-tree__node"
                                            class:dict-tree__node--selected=is_selected
                                            style=format!("padding-left: {}px;", row.depth * INDENT_PX)
                                        >
                                            <span
                                                class="dict-tree__toggle"
                                                on:click=move |ev| {
                                                    ev.stop_propagation();
                                                    if row.has_children {
                                                        toggle_node(node_value.clone());
                                                    }
                                                }
                                            >
                                                {icon(chevron)}
                                            </span>
                                            <span
                                                class="dict-tree__label"
                                                on:click=move |_| {
                                                    choose((Some(entry.value.clone()), Some(entry.clone())));
                                                }
                                            >
                                                {label}
                                            </span>
                                        </div>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </div>
                </div>
            </Show>
        </div>
    }
}
