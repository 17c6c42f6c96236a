//! Resource handles and the registry that owns their bytes.
//!
//! The registry is the browser-object-URL analogue: registering bytes yields
//! a `hearth-media://` URL that display layers can resolve back to the
//! content, and dropping the handle revokes the URL and frees the bytes.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use bytes::Bytes;
use uuid::Uuid;

const URL_SCHEME: &str = "hearth-media://";

/// Shared registry of live media handles.
///
/// Cheaply cloneable; all clones see the same set of handles.  The live
/// count is the leak invariant the test suite checks: it must always equal
/// the number of loaders currently holding a ready handle.
#[derive(Clone, Default)]
pub struct HandleRegistry {
    inner: Arc<Mutex<HashMap<Uuid, Bytes>>>,
}

impl HandleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, Bytes>> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Take ownership of fetched bytes and hand back their sole owner.
    pub fn register(&self, bytes: Bytes, content_type: Option<String>) -> ResourceHandle {
        let id = Uuid::new_v4();
        let size = bytes.len();

        self.lock().insert(id, bytes);

        tracing::debug!(handle = %id, size, "media handle registered");

        ResourceHandle {
            id,
            url: format!("{URL_SCHEME}{id}"),
            content_type,
            registry: self.clone(),
        }
    }

    /// Resolve a handle URL back to its bytes, if the handle is still live.
    pub fn resolve(&self, url: &str) -> Option<Bytes> {
        let id = url.strip_prefix(URL_SCHEME)?;
        let id = Uuid::parse_str(id).ok()?;
        self.lock().get(&id).cloned()
    }

    /// Number of currently live handles.
    pub fn live_count(&self) -> usize {
        self.lock().len()
    }

    fn release(&self, id: Uuid) {
        if self.lock().remove(&id).is_some() {
            tracing::debug!(handle = %id, "media handle released");
        }
    }
}

/// Exclusive owner of one registered media resource.
///
/// Not cloneable: the loader that created it is the only owner, and dropping
/// it releases the underlying bytes.
pub struct ResourceHandle {
    id: Uuid,
    url: String,
    content_type: Option<String>,
    registry: HandleRegistry,
}

impl ResourceHandle {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The locally addressable URL for this resource.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Content type the server declared, if any.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }
}

impl Drop for ResourceHandle {
    fn drop(&mut self) {
        self.registry.release(self.id);
    }
}

impl std::fmt::Debug for ResourceHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceHandle")
            .field("id", &self.id)
            .field("url", &self.url)
            .field("content_type", &self.content_type)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_resolve_release() {
        let registry = HandleRegistry::new();
        assert_eq!(registry.live_count(), 0);

        let handle = registry.register(Bytes::from_static(b"pixels"), Some("image/png".into()));
        assert_eq!(registry.live_count(), 1);
        assert!(handle.url().starts_with("hearth-media://"));
        assert_eq!(
            registry.resolve(handle.url()).as_deref(),
            Some(b"pixels".as_slice())
        );

        let url = handle.url().to_string();
        drop(handle);
        assert_eq!(registry.live_count(), 0);
        assert_eq!(registry.resolve(&url), None);
    }

    #[test]
    fn resolve_rejects_foreign_urls() {
        let registry = HandleRegistry::new();
        assert_eq!(registry.resolve("https://example.com/img.png"), None);
        assert_eq!(registry.resolve("hearth-media://not-a-uuid"), None);
    }

    #[test]
    fn handles_are_independent() {
        let registry = HandleRegistry::new();
        let a = registry.register(Bytes::from_static(b"a"), None);
        let b = registry.register(Bytes::from_static(b"b"), None);
        assert_eq!(registry.live_count(), 2);

        drop(a);
        assert_eq!(registry.live_count(), 1);
        assert_eq!(registry.resolve(b.url()).as_deref(), Some(b"b".as_slice()));
    }
}
