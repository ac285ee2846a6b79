use crate::shared::dict::{DictionaryStore, HttpDictionarySource};
use crate::system::pages::dictionary_showcase::DictionaryShowcasePage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Один кэш справочников на всю страницу
    provide_context(DictionaryStore::new(HttpDictionarySource::default()));

    view! {
        <DictionaryShowcasePage />
    }
}
