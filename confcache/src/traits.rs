mod cache_key;
mod fetcher;

pub use cache_key::CacheKey;
pub use fetcher::{FetchFn, Fetcher};
