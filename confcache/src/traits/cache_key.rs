use std::borrow::Cow;

/// A target that can be addressed in the cache.
///
/// Keys should be unique and deterministic: two targets reporting the same
/// identifier address the same cache entry. Returning `None` marks a target
/// that carries no usable identifier (an absent target, an empty URI, a
/// record whose identifier field is unset); every cache operation treats
/// such targets as addressing nothing.
pub trait CacheKey {
    fn cache_key(&self) -> Option<Cow<'_, str>>;
}

// Raw string identifiers are their own key. An empty identifier addresses
// nothing, matching the absent-target short circuit.
impl CacheKey for str {
    fn cache_key(&self) -> Option<Cow<'_, str>> {
        if self.is_empty() {
            None
        } else {
            Some(Cow::Borrowed(self))
        }
    }
}

impl CacheKey for String {
    fn cache_key(&self) -> Option<Cow<'_, str>> {
        self.as_str().cache_key()
    }
}

impl<T> CacheKey for &T
where
    T: CacheKey + ?Sized,
{
    fn cache_key(&self) -> Option<Cow<'_, str>> {
        (**self).cache_key()
    }
}

impl<T> CacheKey for Option<T>
where
    T: CacheKey,
{
    fn cache_key(&self) -> Option<Cow<'_, str>> {
        self.as_ref().and_then(CacheKey::cache_key)
    }
}

#[cfg(test)]
mod tests {
    use super::CacheKey;

    #[test]
    fn test_str_key() {
        assert_eq!("file:///a.rb".cache_key().as_deref(), Some("file:///a.rb"));
        assert_eq!("".cache_key(), None);
    }

    #[test]
    fn test_string_key() {
        let key = String::from("file:///a.rb");
        assert_eq!(key.cache_key().as_deref(), Some("file:///a.rb"));
        assert_eq!(String::new().cache_key(), None);
    }

    #[test]
    fn test_option_key() {
        assert_eq!(Some("file:///a.rb").cache_key().as_deref(), Some("file:///a.rb"));
        assert_eq!(None::<&str>.cache_key(), None);
    }

    #[test]
    fn test_reference_forwarding() {
        let key = "file:///a.rb";
        assert_eq!((&key).cache_key().as_deref(), Some("file:///a.rb"));
        assert_eq!((&&key).cache_key().as_deref(), Some("file:///a.rb"));
    }
}
