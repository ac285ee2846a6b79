//! Кэш справочников на время жизни страницы.
//!
//! Каждый код справочника загружается не более одного раза: повторный
//! `fetch` для уже загруженного или загружаемого кода ничего не делает.
//! Ошибка загрузки оставляет кэш пустым, повторный `fetch` пробует снова.

use crate::shared::api_utils::api_url;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use contracts::shared::dictionary::{DictionaryEntry, DictionaryEntryDto};
use gloo_net::http::Request;
use leptos::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Источник элементов справочника (HTTP в приложении, подделка в тестах)
#[async_trait(?Send)]
pub trait DictionarySource {
    async fn fetch_entries(&self, code: &str) -> Result<Vec<DictionaryEntry>, String>;
}

/// `GET /api/dictionaries/{code}` на бэкенде
#[derive(Debug, Clone)]
pub struct HttpDictionarySource {
    base_url: String,
}

impl HttpDictionarySource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for HttpDictionarySource {
    fn default() -> Self {
        Self::new(api_url("/api/dictionaries"))
    }
}

#[async_trait(?Send)]
impl DictionarySource for HttpDictionarySource {
    async fn fetch_entries(&self, code: &str) -> Result<Vec<DictionaryEntry>, String> {
        let url = format!("{}/{}", self.base_url, urlencoding::encode(code));

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }

        let items: Vec<DictionaryEntryDto> = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))?;

        Ok(items.into_iter().map(Into::into).collect())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DictionaryCacheEntry {
    pub code: String,
    /// Порядок загрузки = порядок отображения
    pub entries: Vec<DictionaryEntry>,
    pub loaded_at: DateTime<Utc>,
}

/// Состояние кэша без реактивности
#[derive(Debug, Clone, Default)]
pub struct DictionaryCache {
    loaded: HashMap<String, DictionaryCacheEntry>,
    in_flight: HashSet<String>,
}

impl DictionaryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `code` as in flight. False when it is already cached or loading.
    pub fn begin_fetch(&mut self, code: &str) -> bool {
        if self.loaded.contains_key(code) || self.in_flight.contains(code) {
            return false;
        }
        self.in_flight.insert(code.to_string());
        true
    }

    pub fn finish_fetch(&mut self, code: &str, result: Result<Vec<DictionaryEntry>, String>) {
        self.in_flight.remove(code);
        match result {
            Ok(entries) => {
                self.loaded.insert(
                    code.to_string(),
                    DictionaryCacheEntry {
                        code: code.to_string(),
                        entries,
                        loaded_at: Utc::now(),
                    },
                );
            }
            Err(e) => {
                log::warn!("dictionary '{}' failed to load: {}", code, e);
            }
        }
    }

    pub fn entries(&self, code: &str) -> Vec<DictionaryEntry> {
        self.loaded
            .get(code)
            .map(|c| c.entries.clone())
            .unwrap_or_default()
    }

    pub fn get(&self, code: &str) -> Option<&DictionaryCacheEntry> {
        self.loaded.get(code)
    }

    pub fn is_loading(&self, code: &str) -> bool {
        self.in_flight.contains(code)
    }

    pub fn is_loaded(&self, code: &str) -> bool {
        self.loaded.contains_key(code)
    }
}

/// Общий для страницы кэш справочников, передаётся через контекст
#[derive(Clone)]
pub struct DictionaryStore {
    cache: RwSignal<DictionaryCache>,
    source: Arc<dyn DictionarySource + Send + Sync>,
}

impl DictionaryStore {
    pub fn new(source: impl DictionarySource + Send + Sync + 'static) -> Self {
        Self {
            cache: RwSignal::new(DictionaryCache::new()),
            source: Arc::new(source),
        }
    }

    /// Loads `code` unless it is already cached or in flight.
    pub async fn fetch(&self, code: &str) {
        let started = self
            .cache
            .try_update(|cache| cache.begin_fetch(code))
            .unwrap_or(false);
        if !started {
            return;
        }

        log::debug!("dictionary '{}': loading", code);
        let result = self.source.fetch_entries(code).await;
        if let Ok(entries) = &result {
            log::debug!("dictionary '{}': {} entries", code, entries.len());
        }
        // компонент мог быть размонтирован, но кэш живёт дольше него
        self.cache.try_update(|cache| cache.finish_fetch(code, result));
    }

    /// Запуск загрузки без ожидания (для компонентов)
    pub fn ensure(&self, code: &str) {
        let needs_fetch = self.cache.with_untracked(|cache| {
            !cache.is_loaded(code) && !cache.is_loading(code)
        });
        if !needs_fetch {
            return;
        }
        let store = self.clone();
        let code = code.to_string();
        leptos::task::spawn_local(async move {
            store.fetch(&code).await;
        });
    }

    /// Элементы справочника (пустой список, пока не загружен). Реактивно.
    pub fn entries(&self, code: &str) -> Vec<DictionaryEntry> {
        self.cache.with(|cache| cache.entries(code))
    }

    pub fn is_loading(&self, code: &str) -> bool {
        self.cache.with(|cache| cache.is_loading(code))
    }

    pub fn is_loaded(&self, code: &str) -> bool {
        self.cache.with(|cache| cache.is_loaded(code))
    }

    pub fn loaded_at(&self, code: &str) -> Option<DateTime<Utc>> {
        self.cache
            .with_untracked(|cache| cache.get(code).map(|c| c.loaded_at))
    }
}

/// Hook to use the dictionary store context.
pub fn use_dictionary_store() -> DictionaryStore {
    use_context::<DictionaryStore>()
        .expect("DictionaryStore not found. Provide it in App before rendering dictionary fields.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::task::{Context, Poll};

    /// Future, который один раз возвращает Pending
    struct YieldOnce(bool);

    impl Future for YieldOnce {
        type Output = ();
        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
            if self.0 {
                Poll::Ready(())
            } else {
                self.0 = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }

    #[derive(Clone, Default)]
    struct FakeSource {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    #[async_trait(?Send)]
    impl DictionarySource for FakeSource {
        async fn fetch_entries(&self, code: &str) -> Result<Vec<DictionaryEntry>, String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            YieldOnce(false).await;
            if self.fail {
                return Err("boom".to_string());
            }
            match code {
                "yes_no" => Ok(vec![
                    DictionaryEntry::new("1", "Yes"),
                    DictionaryEntry::new("0", "No"),
                ]),
                _ => Ok(Vec::new()),
            }
        }
    }

    #[test]
    fn test_unfetched_code_is_empty_and_idle() {
        let store = DictionaryStore::new(FakeSource::default());
        assert!(!store.is_loading("yes_no"));
        assert!(store.entries("yes_no").is_empty());
        assert!(store.loaded_at("yes_no").is_none());
    }

    #[test]
    fn test_concurrent_fetch_hits_source_once() {
        let source = FakeSource::default();
        let calls = source.calls.clone();
        let store = DictionaryStore::new(source);

        block_on(async {
            futures::join!(store.fetch("yes_no"), store.fetch("yes_no"));
        });

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.entries("yes_no").len(), 2);
        assert!(!store.is_loading("yes_no"));
        assert!(store.loaded_at("yes_no").is_some());
    }

    #[test]
    fn test_loaded_code_is_not_fetched_again() {
        let source = FakeSource::default();
        let calls = source.calls.clone();
        let store = DictionaryStore::new(source);

        block_on(store.fetch("empty"));
        block_on(store.fetch("empty"));

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(store.is_loaded("empty"));
        assert!(store.entries("empty").is_empty());
    }

    #[test]
    fn test_failed_fetch_leaves_cache_empty_and_allows_retry() {
        let source = FakeSource {
            fail: true,
            ..Default::default()
        };
        let calls = source.calls.clone();
        let store = DictionaryStore::new(source);

        block_on(store.fetch("yes_no"));
        assert!(!store.is_loading("yes_no"));
        assert!(!store.is_loaded("yes_no"));
        assert!(store.entries("yes_no").is_empty());

        block_on(store.fetch("yes_no"));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_cache_tracks_in_flight_state() {
        let mut cache = DictionaryCache::new();
        assert!(cache.begin_fetch("a"));
        assert!(cache.is_loading("a"));
        assert!(!cache.begin_fetch("a"));

        cache.finish_fetch("a", Ok(vec![DictionaryEntry::new("v", "V")]));
        assert!(!cache.is_loading("a"));
        assert!(!cache.begin_fetch("a"));
        assert_eq!(cache.get("a").map(|c| c.code.as_str()), Some("a"));
    }
}
