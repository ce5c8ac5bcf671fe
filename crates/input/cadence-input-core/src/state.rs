use std::hash::Hash;

use hashbrown::HashSet;

/// Snapshot of the keys/buttons held during one frame.
///
/// The host fills it from its own event source; conditions only read it.
#[derive(Debug, Clone)]
pub struct InputState<K> {
    held: HashSet<K>,
}

impl<K> Default for InputState<K> {
    fn default() -> Self {
        Self {
            held: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash> InputState<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `key` as held. Returns false if it already was.
    pub fn press(&mut self, key: K) -> bool {
        self.held.insert(key)
    }

    /// Mark `key` as released. Returns false if it was not held.
    pub fn release(&mut self, key: &K) -> bool {
        self.held.remove(key)
    }

    #[inline]
    pub fn is_down(&self, key: &K) -> bool {
        self.held.contains(key)
    }

    /// Replace the whole held set, e.g. from a recorded frame.
    pub fn set_held(&mut self, keys: impl IntoIterator<Item = K>) {
        self.held.clear();
        self.held.extend(keys);
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }

    pub fn held_count(&self) -> usize {
        self.held.len()
    }
}
