/// Error currency of [`Fetcher`](crate::Fetcher) implementations.
///
/// The fetch transport is external to this crate, so its failures are carried
/// as opaque boxed errors.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("settings fetch failed: {0}")]
    Fetch(#[source] BoxError),
}

pub type Result<T> = std::result::Result<T, Error>;
