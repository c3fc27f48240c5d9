use anyhow::Result;
use async_trait::async_trait;
use cbkit::fs_check::{check_file_exists, FileStore, LocalFileStore};
use std::path::Path;

/// Stub store whose reply puts a truthy string in the error slot alongside
/// a success message. The checker must forward it unchanged.
struct ChattyStore;

#[async_trait]
impl FileStore for ChattyStore {
    type Reply = (&'static str, &'static str);

    async fn exists(&self, _path: &Path) -> Self::Reply {
        ("No errors :D", "This is working!")
    }
}

#[tokio::test]
async fn test_store_reply_forwarded_verbatim() {
    let mut calls = 0;
    let mut delivered = None;

    check_file_exists(&ChattyStore, "path", |reply| {
        calls += 1;
        delivered = Some(reply);
    })
    .await;

    assert_eq!(calls, 1, "callback should run exactly once");
    assert_eq!(delivered, Some(("No errors :D", "This is working!")));
}

#[tokio::test]
async fn test_repeated_checks_are_independent() {
    let mut first = None;
    let mut second = None;

    check_file_exists(&ChattyStore, "path", |reply| first = Some(reply)).await;
    check_file_exists(&ChattyStore, "path", |reply| second = Some(reply)).await;

    assert_eq!(first, second);
    assert_eq!(first, Some(("No errors :D", "This is working!")));
}

#[tokio::test]
async fn test_local_store_reports_existing_file() -> Result<()> {
    let file = tempfile::NamedTempFile::new()?;

    let mut delivered = None;
    check_file_exists(&LocalFileStore, file.path(), |reply| {
        delivered = Some(reply);
    })
    .await;

    assert!(matches!(delivered, Some(Ok(true))));
    Ok(())
}

#[tokio::test]
async fn test_local_store_reports_missing_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let missing = dir.path().join("nope.txt");

    let mut delivered = None;
    check_file_exists(&LocalFileStore, &missing, |reply| {
        delivered = Some(reply);
    })
    .await;

    assert!(matches!(delivered, Some(Ok(false))));
    Ok(())
}
