// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{FileStorageGateway, InMemoryStorageGateway, PersistenceError, StorageGateway};

#[tokio::test]
async fn test_file_gateway_reads_back_written_objects() {
    let dir = tempfile::tempdir().unwrap();
    let gateway: FileStorageGateway = FileStorageGateway::new(dir.path());

    gateway
        .write("keirin/raceList.csv", "id\nkeirin202401012801\n")
        .await
        .unwrap();

    assert!(dir.path().join("keirin").join("raceList.csv").exists());
    assert_eq!(
        gateway.fetch("keirin/raceList.csv").await.unwrap(),
        Some(String::from("id\nkeirin202401012801\n"))
    );
}

#[tokio::test]
async fn test_file_gateway_missing_object_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let gateway: FileStorageGateway = FileStorageGateway::new(dir.path());

    assert_eq!(gateway.fetch("jra/placeList.csv").await.unwrap(), None);
}

#[tokio::test]
async fn test_file_gateway_keeps_keys_below_root() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("store");
    let gateway: FileStorageGateway = FileStorageGateway::new(&root);

    gateway.write("../escape.csv", "x").await.unwrap();

    assert!(root.join("escape.csv").exists());
    assert!(!dir.path().join("escape.csv").exists());
}

#[tokio::test]
async fn test_in_memory_gateway_write_failure() {
    let gateway: InMemoryStorageGateway = InMemoryStorageGateway::new();
    gateway.write("nar/raceList.csv", "id\n").await.unwrap();

    gateway.set_fail_writes(true);
    let result: Result<(), PersistenceError> = gateway.write("nar/raceList.csv", "changed").await;

    assert!(matches!(result, Err(PersistenceError::Unavailable(_))));
    assert_eq!(
        gateway.get("nar/raceList.csv").await,
        Some(String::from("id\n"))
    );
}
