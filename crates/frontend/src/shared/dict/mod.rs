//! Поля, значения которых берутся из справочников бэкенда.
//!
//! `DictionaryStore` загружает и кэширует справочники, `normalize` приводит
//! значение поля к списку строк, адаптеры в `ui` отображают его, а `Dict`
//! выбирает адаптер по `DisplayType`.

pub mod facade;
pub mod lookup;
pub mod normalize;
pub mod store;
pub mod tree;
pub mod ui;

pub use facade::{Dict, DictChange};
pub use normalize::{normalize, SelectionValue};
pub use store::{use_dictionary_store, DictionaryStore, HttpDictionarySource};
