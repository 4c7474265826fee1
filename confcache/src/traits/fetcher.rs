use async_trait::async_trait;
use futures_util::future::BoxFuture;

use crate::error::BoxError;

/// An asynchronous source of configuration values.
///
/// The cache invokes the fetcher on a lookup miss and stores whatever it
/// resolves. Implementations typically forward the request over some
/// client/server channel and answer from there.
#[async_trait]
pub trait Fetcher {
    /// The value type resolved per key.
    type Value;

    /// Resolve values for the requested keys.
    ///
    /// The element at position `i`, if present, answers `keys[i]`. A `None`
    /// slot means the source has no value for that key, and a result shorter
    /// than the request leaves the tail keys unanswered (treated as absent).
    /// [`Cache::get`](crate::Cache::get) only ever requests a single key;
    /// multi-key requests are issued by
    /// [`Cache::get_all_batched`](crate::Cache::get_all_batched).
    async fn fetch(&self, keys: &[String]) -> Result<Vec<Option<Self::Value>>, BoxError>;
}

/// Adapts an async closure into a [`Fetcher`].
///
/// # Examples
/// ```
/// use confcache::{BoxError, Cache, FetchFn};
/// use futures_util::FutureExt;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let fetcher = FetchFn::new(|keys: Vec<String>| {
///         async move {
///             Ok::<Vec<Option<usize>>, BoxError>(
///                 keys.into_iter().map(|key| Some(key.len())).collect(),
///             )
///         }
///         .boxed()
///     });
///
///     let mut cache = Cache::new(fetcher);
///     assert_eq!(cache.get("file:///a.rb").await.unwrap(), Some(12));
/// }
/// ```
pub struct FetchFn<F> {
    f: F,
}

impl<F> FetchFn<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

#[async_trait]
impl<F, V> Fetcher for FetchFn<F>
where
    F: Fn(Vec<String>) -> BoxFuture<'static, Result<Vec<Option<V>>, BoxError>> + Send + Sync,
    V: Send,
{
    type Value = V;

    async fn fetch(&self, keys: &[String]) -> Result<Vec<Option<V>>, BoxError> {
        (self.f)(keys.to_vec()).await
    }
}
