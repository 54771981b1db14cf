use cartoon_catalog::models::Artifact;
use cartoon_catalog::persist::{SlotStore, ARTIFACT_SLOT, LIKE_SLOT};
use cartoon_catalog::seed::seed_artifacts;
use cartoon_catalog::store::CatalogStore;
use tempfile::TempDir;

#[test]
fn test_slot_round_trip_by_value() {
    let slots = SlotStore::in_memory().unwrap();

    let artifacts = seed_artifacts();
    let encoded = serde_json::to_string(&artifacts).unwrap();
    slots.save(ARTIFACT_SLOT, &encoded).unwrap();

    let raw = slots.load(ARTIFACT_SLOT).unwrap().unwrap();
    let decoded: Vec<Artifact> = serde_json::from_str(&raw).unwrap();
    assert_eq!(decoded, artifacts);

    let liked = vec!["4".to_string(), "7".to_string()];
    slots
        .save(LIKE_SLOT, &serde_json::to_string(&liked).unwrap())
        .unwrap();
    let raw = slots.load(LIKE_SLOT).unwrap().unwrap();
    let decoded: Vec<String> = serde_json::from_str(&raw).unwrap();
    assert_eq!(decoded, liked);
}

#[test]
fn test_missing_slot_loads_as_none() {
    let slots = SlotStore::in_memory().unwrap();
    assert!(slots.load(ARTIFACT_SLOT).unwrap().is_none());
}

#[test]
fn test_empty_value_reports_as_absent() {
    let slots = SlotStore::in_memory().unwrap();
    slots.save(ARTIFACT_SLOT, "").unwrap();
    assert!(slots.load(ARTIFACT_SLOT).unwrap().is_none());
}

#[test]
fn test_save_replaces_previous_value() {
    let slots = SlotStore::in_memory().unwrap();
    slots.save(LIKE_SLOT, r#"["1"]"#).unwrap();
    slots.save(LIKE_SLOT, r#"["1","2"]"#).unwrap();
    assert_eq!(slots.load(LIKE_SLOT).unwrap().unwrap(), r#"["1","2"]"#);
}

#[test]
fn test_first_use_writes_seed_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.db");
    let path = path.to_str().unwrap();

    {
        let store = CatalogStore::open(path).unwrap();
        assert_eq!(store.artifacts().len(), 10);
    }

    // A fresh adapter over the same file finds the seeded slot.
    let slots = SlotStore::new(path).unwrap();
    let raw = slots.load(ARTIFACT_SLOT).unwrap().unwrap();
    let decoded: Vec<Artifact> = serde_json::from_str(&raw).unwrap();
    assert_eq!(decoded, seed_artifacts());
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_corrupt_artifact_slot_falls_back_to_seed() {
    init_logging();
    let slots = SlotStore::in_memory().unwrap();
    slots.save(ARTIFACT_SLOT, "{not json at all").unwrap();

    let store = CatalogStore::from_slots(slots).unwrap();
    assert_eq!(store.artifacts(), seed_artifacts().as_slice());
}

#[test]
fn test_corrupt_like_slot_falls_back_to_empty() {
    init_logging();
    let slots = SlotStore::in_memory().unwrap();
    slots.save(LIKE_SLOT, r#"{"oops": true}"#).unwrap();

    let store = CatalogStore::from_slots(slots).unwrap();
    assert!(store.liked_ids().is_empty());
    assert_eq!(store.artifacts().len(), 10);
}

#[test]
fn test_reopen_rehydrates_mutated_state() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.db");
    let path = path.to_str().unwrap();

    {
        let mut store = CatalogStore::open(path).unwrap();
        store.toggle_like("4").unwrap();
        store.remove_artifact("10").unwrap();
    }

    let store = CatalogStore::open(path).unwrap();
    assert_eq!(store.artifacts().len(), 9);
    assert!(store.artifacts().iter().all(|a| a.id != "10"));
    assert!(store.is_liked("4"));
    assert_eq!(store.artifacts()[3].likes, 90);
}
