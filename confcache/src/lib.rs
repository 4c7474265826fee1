//! # confcache
//!
//! `confcache` is a lazily-populated, async-first cache for per-resource configuration values. It memoizes configuration resolved over an expensive asynchronous channel (for example a language server asking its client for per-document settings), keyed by a stable string identifier such as a document or workspace folder URI.
//!
//! The model is deliberately small:
//!
//! * **[Cache]** maps derived string keys to values. A lookup hit is served synchronously; a miss suspends on the bound fetcher, stores the resolved value, and every later lookup for that key is a hit. Entries live until they are deleted or the cache is flushed, there is no eviction by size or time.
//! * **[Fetcher]** is the injected asynchronous source. Its contract is batch-shaped (a sequence of keys in, a sequence of optional values out), so the same fetcher serves both single-key misses and the batched multi-lookup path.
//! * **[CacheKey]** derives the string key from whatever addresses an entry, a raw URI string or a record carrying one, so every operation accepts both shapes uniformly.
//!
//! A process typically owns several independently-keyed instances. The crate ships the settings shapes for the configuration this was built around, pairing a per-document [RubySettings] cache with a per-workspace-folder [Environment] cache; any other value type works the same way.
//!
//! ## Usage
//!
//! Bind a fetcher at construction, then look values up:
//!
//! ```
//! use confcache::{BoxError, Cache, FetchFn};
//! use futures_util::FutureExt;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let fetcher = FetchFn::new(|keys: Vec<String>| {
//!         async move {
//!             Ok::<Vec<Option<String>>, BoxError>(
//!                 keys.into_iter().map(|key| Some(format!("settings for {key}"))).collect(),
//!             )
//!         }
//!         .boxed()
//!     });
//!
//!     let mut cache = Cache::new(fetcher);
//!
//!     // Miss: resolved through the fetcher and stored.
//!     let value = cache.get("file:///a.rb").await.unwrap();
//!     assert_eq!(value.as_deref(), Some("settings for file:///a.rb"));
//!
//!     // Hit: served from the cache.
//!     let value = cache.get("file:///a.rb").await.unwrap();
//!     assert_eq!(value.as_deref(), Some("settings for file:///a.rb"));
//! }
//! ```
//!
//! ## License
//!
//! confcache is licensed under the MIT license.

mod cache;
mod error;
mod macros;
mod settings;
#[cfg(test)]
mod test_utils;
mod traits;

pub use cache::Cache;
pub use error::{BoxError, Error, Result};
pub use settings::{
    Environment, Formatter, Interpreter, LintSettings, RuboCopLintSettings, RubyCommandSettings,
    RubySettings, Toggle,
};
pub use traits::{CacheKey, FetchFn, Fetcher};

// README doctests
#[doc = include_str!("../../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;
