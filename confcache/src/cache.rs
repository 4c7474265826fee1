use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use tracing::{debug, trace};

use crate::{
    traits::{CacheKey, Fetcher},
    Error, Result,
};

/// Lazily-populated configuration cache.
///
/// Maps string keys derived from [`CacheKey`] targets to values resolved by
/// the bound [`Fetcher`]. A lookup hit is served synchronously from the
/// internal map; a miss suspends on the fetcher and stores the resolved value
/// before returning. Entries live until deleted or flushed, there is no
/// eviction by size or time.
pub struct Cache<F>
where
    F: Fetcher,
{
    data: HashMap<String, F::Value>,
    fetcher: F,
}

impl<F> Cache<F>
where
    F: Fetcher,
{
    /// Create a new [Cache] bound to the given fetcher.
    pub fn new(fetcher: F) -> Cache<F> {
        Cache {
            data: HashMap::new(),
            fetcher,
        }
    }

    /// Replace the bound fetcher.
    ///
    /// Cached entries are kept; only future misses go through the new fetcher.
    pub fn set_fetcher(&mut self, fetcher: F) {
        self.fetcher = fetcher;
    }

    /// Store a value for the target, overwriting any prior entry.
    ///
    /// A target with no derivable key is ignored.
    pub fn set<K>(&mut self, target: &K, value: F::Value)
    where
        K: CacheKey + ?Sized,
    {
        if let Some(key) = target.cache_key() {
            self.data.insert(key.into_owned(), value);
        }
    }

    /// Store every entry of the given key/value pairs.
    ///
    /// Equivalent to repeated [`set`](Cache::set) calls.
    pub fn set_all<K, I>(&mut self, entries: I)
    where
        K: CacheKey,
        I: IntoIterator<Item = (K, F::Value)>,
    {
        for (target, value) in entries {
            self.set(&target, value);
        }
    }

    /// Remove the entry for the target.
    ///
    /// Returns `true` if an entry was removed, `false` if none existed (or
    /// the target has no derivable key).
    pub fn delete<K>(&mut self, target: &K) -> bool
    where
        K: CacheKey + ?Sized,
    {
        match target.cache_key() {
            Some(key) => self.data.remove(key.as_ref()).is_some(),
            None => false,
        }
    }

    /// Remove the entries for every given target.
    pub fn delete_all<'a, K, I>(&mut self, targets: I)
    where
        K: CacheKey + ?Sized + 'a,
        I: IntoIterator<Item = &'a K>,
    {
        for target in targets {
            self.delete(target);
        }
    }

    /// Look up the value for the target, fetching it on a miss.
    ///
    /// Resolves to `None` when the target has no derivable key or the fetcher
    /// has no value for it. A fetched value is stored before returning, so a
    /// subsequent lookup for the same key is a hit. A fetch failure leaves
    /// the cache unchanged.
    pub async fn get<K>(&mut self, target: &K) -> Result<Option<F::Value>>
    where
        K: CacheKey + ?Sized,
        F::Value: Clone,
    {
        let Some(key) = target.cache_key() else {
            return Ok(None);
        };
        if let Some(value) = self.data.get(key.as_ref()) {
            trace!(key = %key, "cache hit");
            return Ok(Some(value.clone()));
        }
        let key = key.into_owned();
        trace!(key = %key, "cache miss, fetching");
        let fetched = self
            .fetcher
            .fetch(std::slice::from_ref(&key))
            .await
            .map_err(|source| {
                debug!(key = %key, error = %source, "fetch failed");
                Error::Fetch(source)
            })?;
        let value = fetched.into_iter().next().flatten();
        if let Some(value) = &value {
            self.data.insert(key, value.clone());
        }
        Ok(value)
    }

    /// Look up every target, fetching misses one key at a time.
    ///
    /// Targets are resolved strictly in input order, each awaited to
    /// completion before the next; every miss issues an independent
    /// single-key fetch. The result maps each derived key to its value, with
    /// `None` recorded for targets that resolved to absent. The first fetch
    /// failure aborts the remaining targets, leaving entries already fetched
    /// in the cache.
    pub async fn get_all<'a, K, I>(&mut self, targets: I) -> Result<HashMap<String, Option<F::Value>>>
    where
        K: CacheKey + ?Sized + 'a,
        I: IntoIterator<Item = &'a K>,
        F::Value: Clone,
    {
        let mut settings = HashMap::new();
        for target in targets {
            let Some(key) = target.cache_key().map(Cow::into_owned) else {
                continue;
            };
            let value = self.get(target).await?;
            settings.insert(key, value);
        }
        Ok(settings)
    }

    /// Look up every target, fetching all misses in a single batched call.
    ///
    /// Missing keys are collected in input order (deduplicated) and resolved
    /// through one fetch; results are distributed positionally, so this
    /// requires the multi-key [`Fetcher`] contract. Observable results match
    /// [`get_all`](Cache::get_all), with one fetch instead of one per miss.
    pub async fn get_all_batched<'a, K, I>(
        &mut self,
        targets: I,
    ) -> Result<HashMap<String, Option<F::Value>>>
    where
        K: CacheKey + ?Sized + 'a,
        I: IntoIterator<Item = &'a K>,
        F::Value: Clone,
    {
        let mut settings = HashMap::new();
        let mut missing = Vec::new();
        for target in targets {
            let Some(key) = target.cache_key().map(Cow::into_owned) else {
                continue;
            };
            if settings.contains_key(&key) {
                continue;
            }
            match self.data.get(&key) {
                Some(value) => {
                    settings.insert(key, Some(value.clone()));
                }
                None => {
                    missing.push(key.clone());
                    settings.insert(key, None);
                }
            }
        }
        if missing.is_empty() {
            return Ok(settings);
        }
        trace!(keys = missing.len(), "batched fetch for missing keys");
        let fetched = self.fetcher.fetch(&missing).await.map_err(Error::Fetch)?;
        // A short result leaves the tail keys unanswered; zip drops them,
        // keeping the absent placeholders already recorded.
        for (key, value) in missing.into_iter().zip(fetched) {
            if let Some(value) = &value {
                self.data.insert(key.clone(), value.clone());
            }
            settings.insert(key, value);
        }
        Ok(settings)
    }

    /// Empty the cache. Idempotent.
    pub fn flush(&mut self) {
        trace!(entries = self.data.len(), "flushing cache");
        self.data.clear();
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<F> fmt::Debug for Cache<F>
where
    F: Fetcher,
    F::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache")
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}
