use std::future::Future;
use std::io;
use std::path::Path;

/// File-system primitives the responder depends on.
///
/// Both operations may suspend the calling task. `exists` never fails: any
/// error while probing the path is reported as "absent".
pub trait FileStore: Send + Sync + 'static {
    fn exists(&self, path: &Path) -> impl Future<Output = bool> + Send;

    fn read(&self, path: &Path) -> impl Future<Output = io::Result<Vec<u8>>> + Send;
}

/// [`FileStore`] backed by the local disk through `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskStore;

impl FileStore for DiskStore {
    async fn exists(&self, path: &Path) -> bool {
        match tokio::fs::try_exists(path).await {
            Ok(found) => found,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "Existence check failed");
                false
            }
        }
    }

    async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        tokio::fs::read(path).await
    }
}
