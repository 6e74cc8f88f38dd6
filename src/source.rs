//! The fetch seam: how a poller reads a remote object's current status

use std::future::Future;
use std::pin::Pin;

use async_trait::async_trait;

/// Return type for boxed async operations
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// One observation of a remote object
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    /// The object exists and reports `status`
    Found { object: T, status: String },
    /// The remote reports no such object (e.g. HTTP 404)
    ///
    /// Absence is a structural outcome, not an error: whether it means
    /// "deleted, as intended" or "lost" is decided by the caller's
    /// [`StatusSet`](crate::StatusSet), never by the source.
    Missing,
}

/// A read-only view of one kind of remote object
///
/// Implementations wrap whatever client they need (an HTTP client, an SDK
/// service handle) and must be idempotent and side-effect-free: a fetch is a
/// read, and the poller may issue many of them.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// The fetched object, returned to the caller on convergence
    type Object: Send;
    /// The source's own fetch error (transport failure, auth failure, ...)
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch the current status of the object identified by `id`
    async fn fetch(&self, id: &str) -> Result<FetchOutcome<Self::Object>, Self::Error>;
}

/// A [`StatusSource`] backed by a boxed async closure
///
/// Useful for ad-hoc sources in handlers and tests where defining a struct
/// is not worth it.
pub struct FnSource<O, E> {
    #[allow(clippy::type_complexity)]
    f: Box<dyn for<'a> Fn(&'a str) -> BoxFuture<'a, Result<FetchOutcome<O>, E>> + Send + Sync>,
}

impl<O, E> FnSource<O, E> {
    #[allow(clippy::type_complexity)]
    pub fn new(
        f: Box<dyn for<'a> Fn(&'a str) -> BoxFuture<'a, Result<FetchOutcome<O>, E>> + Send + Sync>,
    ) -> Self {
        Self { f }
    }
}

#[async_trait]
impl<O, E> StatusSource for FnSource<O, E>
where
    O: Send,
    E: std::error::Error + Send + Sync + 'static,
{
    type Object = O;
    type Error = E;

    async fn fetch(&self, id: &str) -> Result<FetchOutcome<O>, E> {
        (self.f)(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("fetch failed: {0}")]
    struct TestError(&'static str);

    #[tokio::test]
    async fn test_fn_source_found() {
        let source: FnSource<u64, TestError> = FnSource::new(Box::new(|id| {
            let size = id.len() as u64;
            Box::pin(async move {
                Ok(FetchOutcome::Found {
                    object: size,
                    status: "available".to_string(),
                })
            })
        }));

        let outcome = source.fetch("vol-123").await.unwrap();
        assert_eq!(
            outcome,
            FetchOutcome::Found {
                object: 7,
                status: "available".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_fn_source_missing() {
        let source: FnSource<(), TestError> =
            FnSource::new(Box::new(|_id| Box::pin(async { Ok(FetchOutcome::Missing) })));

        let outcome = source.fetch("vol-123").await.unwrap();
        assert_eq!(outcome, FetchOutcome::Missing);
    }

    #[tokio::test]
    async fn test_fn_source_error() {
        let source: FnSource<(), TestError> =
            FnSource::new(Box::new(|_id| Box::pin(async { Err(TestError("boom")) })));

        let err = source.fetch("vol-123").await.unwrap_err();
        assert_eq!(err.to_string(), "fetch failed: boom");
    }
}
