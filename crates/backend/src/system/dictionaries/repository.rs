use contracts::shared::dictionary::{DictionaryEntry, DictionaryEntryDto, DictionarySummary};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use uuid::Uuid;

/// Таблица элементов справочников
pub mod entry {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "sys_dictionary_entry")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: String,
        pub dict_code: String,
        pub dict_value: String,
        pub dict_label: String,
        pub parent_value: Option<String>,
        pub color: Option<String>,
        pub sort_order: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Таблица справочников (код + название)
pub mod dictionary {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "sys_dictionary")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub code: String,
        pub name: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

impl From<entry::Model> for DictionaryEntryDto {
    fn from(m: entry::Model) -> Self {
        DictionaryEntryDto {
            dict_value: m.dict_value,
            dict_label: m.dict_label,
            parent_value: m.parent_value,
            color: m.color,
        }
    }
}

/// Элементы справочника в порядке отображения
pub async fn list_entries(db: &DatabaseConnection, code: &str) -> anyhow::Result<Vec<DictionaryEntryDto>> {
    let items = entry::Entity::find()
        .filter(entry::Column::DictCode.eq(code))
        .order_by_asc(entry::Column::SortOrder)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn list_dictionaries(db: &DatabaseConnection) -> anyhow::Result<Vec<DictionarySummary>> {
    let dictionaries = dictionary::Entity::find()
        .order_by_asc(dictionary::Column::Code)
        .all(db)
        .await?;

    let mut result = Vec::with_capacity(dictionaries.len());
    for d in dictionaries {
        let entry_count = entry::Entity::find()
            .filter(entry::Column::DictCode.eq(d.code.as_str()))
            .count(db)
            .await?;
        result.push(DictionarySummary {
            code: d.code,
            name: d.name,
            entry_count,
        });
    }
    Ok(result)
}

pub async fn count_dictionaries(db: &DatabaseConnection) -> anyhow::Result<u64> {
    Ok(dictionary::Entity::find().count(db).await?)
}

/// Справочник и его элементы пишутся одной транзакцией
pub async fn insert_dictionary(
    db: &DatabaseConnection,
    code: &str,
    name: &str,
    entries: &[DictionaryEntry],
) -> anyhow::Result<()> {
    let txn = db.begin().await?;

    dictionary::Entity::insert(dictionary::ActiveModel {
        code: Set(code.to_string()),
        name: Set(name.to_string()),
    })
    .exec_without_returning(&txn)
    .await?;

    if !entries.is_empty() {
        let models = entries.iter().enumerate().map(|(i, e)| entry::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            dict_code: Set(code.to_string()),
            dict_value: Set(e.value.clone()),
            dict_label: Set(e.label.clone()),
            parent_value: Set(e.parent_value.clone()),
            color: Set(e.color.clone()),
            sort_order: Set(i as i32),
        });
        entry::Entity::insert_many(models)
            .exec_without_returning(&txn)
            .await?;
    }

    txn.commit().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::test_support::memory_db;

    #[tokio::test]
    async fn test_entries_keep_insert_order() {
        let db = memory_db().await;
        let entries = vec![
            DictionaryEntry::new("2", "Второй"),
            DictionaryEntry::new("1", "Первый").with_color("#123456"),
            DictionaryEntry::new("3", "Третий").with_parent("2"),
        ];
        insert_dictionary(&db, "order_test", "Порядок", &entries).await.unwrap();

        let items = list_entries(&db, "order_test").await.unwrap();
        let values: Vec<&str> = items.iter().map(|i| i.dict_value.as_str()).collect();
        assert_eq!(values, vec!["2", "1", "3"]);
        assert_eq!(items[1].color.as_deref(), Some("#123456"));
        assert_eq!(items[2].parent_value.as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn test_unknown_code_yields_empty_list() {
        let db = memory_db().await;
        assert!(list_entries(&db, "missing").await.unwrap().is_empty());
        assert_eq!(count_dictionaries(&db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_summaries_count_entries() {
        let db = memory_db().await;
        insert_dictionary(&db, "b", "Б", &[DictionaryEntry::new("x", "X")]).await.unwrap();
        insert_dictionary(&db, "a", "А", &[]).await.unwrap();

        let summaries = list_dictionaries(&db).await.unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].code, "a");
        assert_eq!(summaries[0].entry_count, 0);
        assert_eq!(summaries[1].entry_count, 1);
    }

    #[tokio::test]
    async fn test_duplicate_dictionary_code_is_rejected() {
        let db = memory_db().await;
        insert_dictionary(&db, "a", "А", &[]).await.unwrap();
        assert!(insert_dictionary(&db, "a", "А", &[]).await.is_err());
    }
}
