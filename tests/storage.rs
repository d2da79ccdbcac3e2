use crmbase::repositories::{
    CoreConfigRepository, CoreConfigRepositoryTrait, CountryRepository, CountryRepositoryTrait,
    CountryStateRepository, CountryStateRepositoryTrait,
};
use crmbase::storage::{seed, LocalStorage};

async fn seeded_storage() -> LocalStorage {
    let storage = LocalStorage::new().await.unwrap();
    seed::apply(&storage.conn).await.unwrap();
    storage
}

#[tokio::test]
async fn test_local_storage_creation() {
    let result = LocalStorage::new().await;
    assert!(result.is_ok(), "LocalStorage should be created successfully");

    let storage = result.unwrap();
    assert!(!storage.has_data().await.unwrap());
}

#[tokio::test]
async fn test_seed_is_idempotent() {
    let storage = seeded_storage().await;
    assert!(storage.has_data().await.unwrap());

    let countries = CountryRepository::new(storage.conn.clone());
    let before = countries.all().await.unwrap().len();

    // A second apply must not duplicate rows
    seed::apply(&storage.conn).await.unwrap();
    let after = countries.all().await.unwrap().len();
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_clear_all_data() {
    let storage = seeded_storage().await;
    storage.clear_all_data().await.unwrap();
    assert!(!storage.has_data().await.unwrap());
}

#[tokio::test]
async fn test_country_repository() {
    let storage = seeded_storage().await;
    let countries = CountryRepository::new(storage.conn.clone());

    let all = countries.all().await.unwrap();
    assert!(all.len() >= 50);

    // Ordered by name
    assert_eq!(all.first().unwrap().name, "Argentina");

    let us = countries.find_by_code("US").await.unwrap().unwrap();
    assert_eq!(us.name, "United States");

    assert!(countries.find_by_code("XX").await.unwrap().is_none());
}

#[tokio::test]
async fn test_country_state_repository() {
    let storage = seeded_storage().await;
    let states = CountryStateRepository::new(storage.conn.clone());

    let us_states = states.find_by_country("US").await.unwrap();
    assert_eq!(us_states.len(), 50);
    assert_eq!(us_states.first().unwrap().name, "Alabama");

    let texas = states.find_one("US", "TX").await.unwrap().unwrap();
    assert_eq!(texas.name, "Texas");

    assert!(states.find_one("US", "ZZ").await.unwrap().is_none());
    assert!(states.find_by_country("XX").await.unwrap().is_empty());

    let queensland = states.find_by_code("QLD").await.unwrap().unwrap();
    assert_eq!(queensland.country_code, "AU");
}

#[tokio::test]
async fn test_core_config_repository_upsert() {
    let storage = seeded_storage().await;
    let config = CoreConfigRepository::new(storage.conn.clone());

    assert!(config.find_by_code("general.base_currency").await.unwrap().is_none());

    let inserted = config
        .upsert("general.base_currency", Some("\"EUR\"".to_string()))
        .await
        .unwrap();
    assert_eq!(inserted.value.as_deref(), Some("\"EUR\""));

    let updated = config
        .upsert("general.base_currency", Some("\"GBP\"".to_string()))
        .await
        .unwrap();
    assert_eq!(updated.id, inserted.id);
    assert_eq!(updated.value.as_deref(), Some("\"GBP\""));

    let found = config.find_by_code("general.base_currency").await.unwrap().unwrap();
    assert_eq!(found.value.as_deref(), Some("\"GBP\""));
}
