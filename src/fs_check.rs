//! File-existence checks against an injected storage capability.

use async_trait::async_trait;
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Storage capability exposing an existence lookup.
///
/// The reply type belongs to the store: whatever shape it reports travels
/// through [`check_file_exists`] untouched. Callers must treat the reply as
/// the store's own contract; the checker never inspects it, and in
/// particular never assumes an empty error slot means success.
#[async_trait]
pub trait FileStore: Send + Sync {
    type Reply: Send;

    /// Reports whether `path` exists, in the store's own reply shape.
    async fn exists(&self, path: &Path) -> Self::Reply;
}

/// Store backed by the local filesystem.
pub struct LocalFileStore;

#[async_trait]
impl FileStore for LocalFileStore {
    type Reply = crate::Result<bool>;

    async fn exists(&self, path: &Path) -> Self::Reply {
        let exists = fs::try_exists(path).await?;
        debug!(path = %path.display(), exists, "existence lookup");
        Ok(exists)
    }
}

/// Asks `store` whether `path` exists and forwards its reply to `callback`.
///
/// One lookup per call, reply forwarded verbatim, callback invoked exactly
/// once.
pub async fn check_file_exists<S, F>(store: &S, path: impl AsRef<Path>, callback: F)
where
    S: FileStore,
    F: FnOnce(S::Reply),
{
    let reply = store.exists(path.as_ref()).await;
    callback(reply);
}
