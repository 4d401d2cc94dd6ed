use site_core::{Error, MemoryStore, SessionStore};
use web_sys as web;

/// `sessionStorage`, or an in-memory map when the browser denies access
/// (sandboxed iframes, some private modes). Flags then last for this page
/// only.
pub struct BrowserSession {
    storage: Option<web::Storage>,
    fallback: MemoryStore,
}

impl BrowserSession {
    pub fn open() -> Self {
        let storage = web::window().and_then(|w| match w.session_storage() {
            Ok(s) => s,
            Err(e) => {
                log::debug!("[session] sessionStorage unavailable: {:?}", e);
                None
            }
        });
        Self {
            storage,
            fallback: MemoryStore::new(),
        }
    }
}

impl SessionStore for BrowserSession {
    fn get(&self, key: &str) -> Option<String> {
        match &self.storage {
            Some(s) => s.get_item(key).ok().flatten(),
            None => self.fallback.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> site_core::Result<()> {
        match &self.storage {
            Some(s) => s
                .set_item(key, value)
                .map_err(|e| Error::Storage(format!("{:?}", e))),
            None => self.fallback.set(key, value),
        }
    }
}
