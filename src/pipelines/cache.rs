use crate::error::Result;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub trait ModelOptions {
    fn cache_key(&self) -> String;
}

// Strong references: a constructed model lives for the rest of the process.
// The lock is held across the loader call so that concurrent first use of
// the same key constructs exactly once.
type CacheStorage = HashMap<(TypeId, String), Box<dyn Any + Send + Sync>>;

pub struct ModelCache {
    cache: Mutex<CacheStorage>,
}

impl ModelCache {
    pub fn new() -> Self {
        Self {
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the cached handle for `key`, constructing it with `loader`
    /// on first use. A failed construction leaves nothing cached, so a
    /// later call retries.
    pub fn get_or_create<M, F>(&self, key: &str, loader: F) -> Result<Arc<M>>
    where
        M: Send + Sync + 'static,
        F: FnOnce() -> Result<M>,
    {
        let type_id = TypeId::of::<M>();
        let cache_key = (type_id, key.to_string());

        let mut cache = self.cache.lock().unwrap();
        if let Some(boxed) = cache.get(&cache_key) {
            if let Some(strong) = boxed.downcast_ref::<Arc<M>>() {
                return Ok(strong.clone());
            }
        }

        let model = Arc::new(loader()?);
        cache.insert(cache_key, Box::new(model.clone()));

        Ok(model)
    }

    #[allow(dead_code)]
    pub fn clear(&self) {
        let mut cache = self.cache.lock().unwrap();
        cache.clear();
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        let cache = self.cache.lock().unwrap();
        cache.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        let cache = self.cache.lock().unwrap();
        cache.is_empty()
    }
}

impl Default for ModelCache {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_MODEL_CACHE: once_cell::sync::Lazy<ModelCache> =
    once_cell::sync::Lazy::new(ModelCache::new);

pub fn global_cache() -> &'static ModelCache {
    &GLOBAL_MODEL_CACHE
}
