/// An effect that runs while a screen is visible and whenever its dependency changes.
///
/// `focus` and `update` return the key to fetch with, or `None` if nothing must run. At most one
/// registration exists at a time, so repeated visibility events do not start duplicate fetches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusEffect<K> {
    key: K,
    registered: bool,
}

impl<K: Clone + PartialEq> FocusEffect<K> {
    #[must_use]
    pub fn new(key: K) -> Self {
        Self {
            key,
            registered: false,
        }
    }

    #[must_use]
    pub fn key(&self) -> &K {
        &self.key
    }

    #[must_use]
    pub fn is_registered(&self) -> bool {
        self.registered
    }

    /// The screen became the active view.
    pub fn focus(&mut self) -> Option<K> {
        if self.registered {
            return None;
        }
        self.registered = true;
        Some(self.key.clone())
    }

    /// The dependency changed. Re-runs only if the screen is visible.
    pub fn update(&mut self, key: K) -> Option<K> {
        if self.key == key {
            return None;
        }
        self.key = key;
        if self.registered {
            Some(self.key.clone())
        } else {
            None
        }
    }

    /// The screen is no longer visible. Returns `true` if a registration was removed.
    pub fn teardown(&mut self) -> bool {
        std::mem::replace(&mut self.registered, false)
    }
}
