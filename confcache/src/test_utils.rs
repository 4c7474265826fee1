use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::{
    error::BoxError,
    traits::{CacheKey, Fetcher},
};

/// Key-bearing test target, standing in for a document or workspace folder
/// record.
pub struct Target {
    uri: Option<String>,
}

impl Target {
    pub fn new(uri: &str) -> Self {
        Self {
            uri: Some(uri.to_string()),
        }
    }

    /// A target without an identifier.
    pub fn anonymous() -> Self {
        Self { uri: None }
    }
}

impl CacheKey for Target {
    fn cache_key(&self) -> Option<Cow<'_, str>> {
        self.uri.as_deref().and_then(|uri| uri.cache_key())
    }
}

/// How a [ScriptedFetcher] answers a request.
pub enum Script {
    /// Answer each key from the value map, with an empty slot for unknown keys.
    Lookup,
    /// Resolve to an empty sequence regardless of the request.
    Empty,
    /// Reject with the given message.
    Fail(&'static str),
}

/// Fetcher that answers from a scripted value map and records every request.
///
/// Clones share the same script and call log.
#[derive(Clone)]
pub struct ScriptedFetcher<V> {
    values: Arc<Mutex<HashMap<String, V>>>,
    script: Arc<Mutex<Script>>,
    calls: Arc<Mutex<Vec<Vec<String>>>>,
}

impl<V> ScriptedFetcher<V> {
    pub fn new() -> Self {
        Self {
            values: Arc::new(Mutex::new(HashMap::new())),
            script: Arc::new(Mutex::new(Script::Lookup)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_value(self, key: &str, value: V) -> Self {
        self.values.lock().unwrap().insert(key.to_string(), value);
        self
    }

    pub fn with_script(self, script: Script) -> Self {
        *self.script.lock().unwrap() = script;
        self
    }

    /// Every request issued so far, in order.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl<V> Fetcher for ScriptedFetcher<V>
where
    V: Clone + Send + Sync,
{
    type Value = V;

    async fn fetch(&self, keys: &[String]) -> Result<Vec<Option<V>>, BoxError> {
        self.calls.lock().unwrap().push(keys.to_vec());
        match &*self.script.lock().unwrap() {
            Script::Lookup => {
                let values = self.values.lock().unwrap();
                Ok(keys.iter().map(|key| values.get(key).cloned()).collect())
            }
            Script::Empty => Ok(Vec::new()),
            Script::Fail(message) => Err((*message).into()),
        }
    }
}
