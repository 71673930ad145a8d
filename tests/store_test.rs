//! Integration tests for the local image store.

mod common;

use std::collections::HashSet;

use assert_matches::assert_matches;
use common::{memory_store, png_bytes, png_file};
use imageshelf::images::{ImageFile, ImageStore};
use imageshelf::{Error, ImageId};

#[tokio::test]
async fn save_then_list_returns_matching_record() {
    let store = memory_store();
    let file = png_file("cat.png", 12, 7);
    let size = file.size();

    let saved = store.save(file, false).await.unwrap();

    let all = store.list_all().await.unwrap();
    assert_eq!(all.len(), 1);
    let record = &all[0];
    assert_eq!(record.id, saved.id);
    assert_eq!(record.name, "cat.png");
    assert_eq!(record.mime_type, "image/png");
    assert_eq!(record.size, size);
    assert_eq!((record.width, record.height), (12, 7));
    assert!(!record.is_ai_generated);
    assert!(record.id.as_str().starts_with("img_"));
}

#[tokio::test]
async fn save_keeps_declared_mime_and_payload() {
    let store = memory_store();
    let data = png_bytes(3, 3);
    let file = ImageFile::new("odd.img", "application/x-custom", data.clone());

    let saved = store.save(file, true).await.unwrap();
    let found = store.get(&saved.id).await.unwrap().unwrap();

    assert_eq!(found.mime_type, "application/x-custom");
    assert_eq!(found.blob, data);
    assert!(found.is_ai_generated);
}

#[tokio::test]
async fn save_sniffs_missing_mime() {
    let store = memory_store();
    let file = ImageFile::new("unknown", "", png_bytes(2, 2));

    let saved = store.save(file, false).await.unwrap();
    assert_eq!(saved.mime_type, "image/png");
}

#[tokio::test]
async fn save_rejects_payload_that_is_not_an_image() {
    let store = memory_store();
    let file = ImageFile::new("fake.png", "image/png", b"\x89PNG but not really".to_vec());

    assert_matches!(store.save(file, false).await, Err(Error::Decode(_)));
    assert!(store.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn saving_same_file_twice_yields_distinct_ids() {
    let store = memory_store();
    let file = png_file("twice.png", 4, 4);

    let first = store.save(file.clone(), false).await.unwrap();
    let second = store.save(file, false).await.unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(store.list_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn delete_removes_record() {
    let store = memory_store();
    let keep = store.save(png_file("keep.png", 2, 2), false).await.unwrap();
    let removed = store.save(png_file("removed.png", 2, 2), false).await.unwrap();

    assert_eq!(store.count().await.unwrap(), 2);
    assert!(store.delete(&removed.id).await.unwrap());
    assert_eq!(store.count().await.unwrap(), 1);

    let ids: Vec<ImageId> = store
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec![keep.id]);
    assert!(store.get(&removed.id).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_unknown_id_is_not_an_error() {
    let store = memory_store();
    store.save(png_file("a.png", 1, 1), false).await.unwrap();

    let deleted = store.delete(&ImageId::from("img_0_missing")).await.unwrap();
    assert!(!deleted);
    assert_eq!(store.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn list_all_is_in_insertion_order() {
    let store = memory_store();
    for name in ["one.png", "two.png", "three.png"] {
        store.save(png_file(name, 1, 1), false).await.unwrap();
    }

    let names: Vec<String> = store
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(names, ["one.png", "two.png", "three.png"]);
}

#[tokio::test]
async fn list_by_origin_separates_uploads_from_generated() {
    let store = memory_store();
    store.save(png_file("upload.png", 1, 1), false).await.unwrap();
    store.save(png_file("edited.png", 1, 1), true).await.unwrap();

    let generated = store.list_by_origin(true).await.unwrap();
    assert_eq!(generated.len(), 1);
    assert_eq!(generated[0].name, "edited.png");

    let uploads = store.list_by_origin(false).await.unwrap();
    assert_eq!(uploads.len(), 1);
    assert_eq!(uploads[0].name, "upload.png");
}

#[tokio::test]
async fn records_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.sqlite");

    let saved = {
        let store = ImageStore::open(&path, 2).unwrap();
        store.save(png_file("persisted.png", 5, 6), false).await.unwrap()
    };

    let store = ImageStore::open(&path, 2).unwrap();
    let found = store.get(&saved.id).await.unwrap().unwrap();
    assert_eq!(found, saved);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_saves_get_unique_ids() {
    let dir = tempfile::tempdir().unwrap();
    let store = ImageStore::open(&dir.path().join("library.sqlite"), 4).unwrap();

    let mut handles = Vec::new();
    for i in 0..16 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store
                .save(png_file(&format!("img-{i}.png"), 2, 2), false)
                .await
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        let record = handle.await.unwrap().unwrap();
        assert!(ids.insert(record.id));
    }

    assert_eq!(ids.len(), 16);
    assert_eq!(store.list_all().await.unwrap().len(), 16);
}
