//! Catalog store lifecycle against a real database file.

use lectern_core::testing::fixtures;
use lectern_core::{CatalogError, SqliteCatalog, VideoCatalog};

#[test]
fn test_records_survive_reopen() {
    let temp_dir = tempfile::tempdir().unwrap();
    let db_path = temp_dir.path().join("catalog.db");

    let id = {
        let catalog = SqliteCatalog::new(&db_path).unwrap();
        let record = catalog
            .insert(fixtures::new_video("Intro to Go", "Programming"))
            .unwrap();
        record.id
    };

    let reopened = SqliteCatalog::new(&db_path).unwrap();
    let record = reopened.get(&id).unwrap();
    assert_eq!(record.title, "Intro to Go");
    assert_eq!(record.category, "Programming");
}

#[test]
fn test_full_crud_cycle() {
    let temp_dir = tempfile::tempdir().unwrap();
    let db_path = temp_dir.path().join("catalog.db");
    let catalog = SqliteCatalog::new(&db_path).unwrap();

    let first = catalog
        .insert(fixtures::new_video("Intro to Go", "Programming"))
        .unwrap();
    let second = catalog
        .insert(fixtures::new_video("Watercolor Basics", "Art"))
        .unwrap();

    // Newest first across categories
    let all = catalog.list_all().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, second.id);
    assert_eq!(all[1].id, first.id);

    // A fresh create shows up in its category listing
    let programming = catalog.list_by_category("Programming").unwrap();
    assert_eq!(programming.len(), 1);
    assert_eq!(programming[0].id, first.id);

    // Delete then read back
    catalog.delete(&first.id).unwrap();
    assert!(matches!(
        catalog.get(&first.id),
        Err(CatalogError::NotFound(_))
    ));
    assert!(catalog.list_by_category("Programming").unwrap().is_empty());

    // The other record is untouched
    assert!(catalog.get(&second.id).is_ok());
}
