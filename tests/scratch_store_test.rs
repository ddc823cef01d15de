use voxnote::application::ports::{ArtifactStore, ScratchError};
use voxnote::domain::{ArtifactKind, FileLocator, RunId, VoiceMessage};
use voxnote::infrastructure::storage::LocalScratchStore;

fn create_test_store() -> (tempfile::TempDir, LocalScratchStore) {
    let dir = tempfile::TempDir::new().unwrap();
    let store = LocalScratchStore::new(dir.path().to_path_buf()).unwrap();
    (dir, store)
}

fn voice(message_id: i32) -> VoiceMessage {
    VoiceMessage::new(1001, message_id, FileLocator::new("file-id"), 512)
}

#[tokio::test]
async fn given_fresh_run_when_acquiring_then_creates_empty_file_in_scratch_dir() {
    let (dir, store) = create_test_store();

    let artifact = store
        .acquire(&voice(42), RunId::new(), ArtifactKind::Compressed)
        .await
        .unwrap();

    assert!(artifact.path().starts_with(dir.path()));
    assert_eq!(std::fs::metadata(artifact.path()).unwrap().len(), 0);
    assert_eq!(artifact.kind(), ArtifactKind::Compressed);
}

#[tokio::test]
async fn given_same_message_in_two_runs_when_acquiring_then_paths_differ() {
    let (_dir, store) = create_test_store();

    let first = store
        .acquire(&voice(42), RunId::new(), ArtifactKind::Compressed)
        .await
        .unwrap();
    let second = store
        .acquire(&voice(42), RunId::new(), ArtifactKind::Compressed)
        .await
        .unwrap();

    assert_ne!(first.path(), second.path());
}

#[tokio::test]
async fn given_one_run_when_acquiring_both_kinds_then_extensions_match_kind() {
    let (_dir, store) = create_test_store();
    let run_id = RunId::new();

    let compressed = store
        .acquire(&voice(5), run_id, ArtifactKind::Compressed)
        .await
        .unwrap();
    let decoded = store
        .acquire(&voice(5), run_id, ArtifactKind::Decoded)
        .await
        .unwrap();

    assert_eq!(compressed.path().extension().unwrap(), "ogg");
    assert_eq!(decoded.path().extension().unwrap(), "wav");
    assert_eq!(compressed.run_id(), decoded.run_id());
}

#[tokio::test]
async fn given_existing_artifact_when_acquiring_same_name_then_returns_already_exists() {
    let (_dir, store) = create_test_store();
    let run_id = RunId::new();

    store
        .acquire(&voice(5), run_id, ArtifactKind::Decoded)
        .await
        .unwrap();
    let result = store.acquire(&voice(5), run_id, ArtifactKind::Decoded).await;

    assert!(matches!(result, Err(ScratchError::AlreadyExists(_))));
}

#[tokio::test]
async fn given_acquired_artifact_when_releasing_twice_then_both_succeed() {
    let (_dir, store) = create_test_store();
    let artifact = store
        .acquire(&voice(5), RunId::new(), ArtifactKind::Compressed)
        .await
        .unwrap();

    store.release(&artifact).await.unwrap();
    assert!(!artifact.path().exists());
    store.release(&artifact).await.unwrap();
}

#[tokio::test]
async fn given_acquired_artifact_when_releasing_synchronously_then_file_is_removed() {
    let (_dir, store) = create_test_store();
    let artifact = store
        .acquire(&voice(5), RunId::new(), ArtifactKind::Decoded)
        .await
        .unwrap();

    store.release_now(&artifact).unwrap();
    assert!(!artifact.path().exists());
    store.release_now(&artifact).unwrap();
}

#[test]
fn given_missing_nested_dir_when_creating_store_then_dir_is_created() {
    let dir = tempfile::TempDir::new().unwrap();
    let nested = dir.path().join("a").join("b");

    let store = LocalScratchStore::new(nested.clone()).unwrap();

    assert!(nested.is_dir());
    assert_eq!(store.dir(), nested.as_path());
}
