use super::repository;
use super::seed::builtin_dictionaries;
use crate::shared::data::db::get_connection;
use contracts::shared::dictionary::{DictionaryEntry, DictionaryEntryDto, DictionarySummary};
use sea_orm::DatabaseConnection;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DictionaryError {
    #[error("dictionary code is empty")]
    EmptyCode,
    #[error("dictionary '{code}': entry '{value}' has an empty label")]
    EmptyLabel { code: String, value: String },
    #[error("dictionary '{code}': duplicate value '{value}'")]
    DuplicateValue { code: String, value: String },
    #[error("dictionary '{code}': entry '{value}' refers to unknown parent '{parent}'")]
    UnknownParent {
        code: String,
        value: String,
        parent: String,
    },
}

/// Проверка справочника перед записью: непустой код, уникальные
/// значения, непустые названия, существующие родители.
pub fn validate_entries(code: &str, entries: &[DictionaryEntry]) -> Result<(), DictionaryError> {
    if code.trim().is_empty() {
        return Err(DictionaryError::EmptyCode);
    }

    let mut values = HashSet::with_capacity(entries.len());
    for entry in entries {
        if entry.label.trim().is_empty() {
            return Err(DictionaryError::EmptyLabel {
                code: code.to_string(),
                value: entry.value.clone(),
            });
        }
        if !values.insert(entry.value.as_str()) {
            return Err(DictionaryError::DuplicateValue {
                code: code.to_string(),
                value: entry.value.clone(),
            });
        }
    }

    for entry in entries {
        if let Some(parent) = &entry.parent_value {
            if !values.contains(parent.as_str()) {
                return Err(DictionaryError::UnknownParent {
                    code: code.to_string(),
                    value: entry.value.clone(),
                    parent: parent.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Получение элементов справочника (для неизвестного кода пустой список)
pub async fn list_entries(code: &str) -> anyhow::Result<Vec<DictionaryEntryDto>> {
    repository::list_entries(get_connection(), code).await
}

/// Получение списка справочников
pub async fn list_dictionaries() -> anyhow::Result<Vec<DictionarySummary>> {
    repository::list_dictionaries(get_connection()).await
}

/// Заполнение пустой базы встроенными справочниками
pub async fn seed_defaults() -> anyhow::Result<usize> {
    seed_defaults_into(get_connection()).await
}

async fn seed_defaults_into(db: &DatabaseConnection) -> anyhow::Result<usize> {
    if repository::count_dictionaries(db).await? > 0 {
        tracing::info!("Dictionaries already present, seeding skipped");
        return Ok(0);
    }

    let builtin = builtin_dictionaries();
    for d in &builtin {
        validate_entries(d.code, &d.entries)?;
        repository::insert_dictionary(db, d.code, d.name, &d.entries).await?;
        tracing::info!("Seeded dictionary '{}' ({} entries)", d.code, d.entries.len());
    }
    Ok(builtin.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::test_support::memory_db;

    #[test]
    fn test_builtin_dictionaries_are_valid() {
        let builtin = builtin_dictionaries();
        let mut codes = HashSet::new();
        for d in &builtin {
            assert!(codes.insert(d.code), "duplicate code {}", d.code);
            assert_eq!(validate_entries(d.code, &d.entries), Ok(()));
        }
    }

    #[test]
    fn test_validation_errors() {
        assert_eq!(validate_entries(" ", &[]), Err(DictionaryError::EmptyCode));

        let dup = [DictionaryEntry::new("a", "A"), DictionaryEntry::new("a", "B")];
        assert!(matches!(
            validate_entries("x", &dup),
            Err(DictionaryError::DuplicateValue { .. })
        ));

        let orphan = [DictionaryEntry::new("a", "A").with_parent("zzz")];
        assert_eq!(
            validate_entries("x", &orphan),
            Err(DictionaryError::UnknownParent {
                code: "x".into(),
                value: "a".into(),
                parent: "zzz".into(),
            })
        );

        let unlabeled = [DictionaryEntry::new("a", "")];
        assert!(matches!(
            validate_entries("x", &unlabeled),
            Err(DictionaryError::EmptyLabel { .. })
        ));
    }

    #[test]
    fn test_parent_may_follow_child() {
        let entries = [
            DictionaryEntry::new("child", "Child").with_parent("root"),
            DictionaryEntry::new("root", "Root"),
        ];
        assert_eq!(validate_entries("x", &entries), Ok(()));
    }

    #[tokio::test]
    async fn test_seed_runs_once() {
        let db = memory_db().await;
        let seeded = seed_defaults_into(&db).await.unwrap();
        assert_eq!(seeded, builtin_dictionaries().len());
        assert_eq!(seed_defaults_into(&db).await.unwrap(), 0);

        let discipline = repository::list_entries(&db, "discipline").await.unwrap();
        assert_eq!(discipline[0].dict_value, "nat");
        assert_eq!(discipline[1].parent_value.as_deref(), Some("nat"));
    }
}
