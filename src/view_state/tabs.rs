//! Single-choice tab selector.

/// Active tab out of a key type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabSelector<K> {
    active: K,
}

impl<K: Copy + PartialEq> TabSelector<K> {
    pub fn new(active: K) -> Self {
        Self { active }
    }

    pub fn active(&self) -> K {
        self.active
    }

    pub fn is_active(&self, key: K) -> bool {
        self.active == key
    }

    pub fn select(&mut self, key: K) {
        self.active = key;
    }

    /// Items whose tab (per `tab_of`) is the active one, in order.
    pub fn visible<'a, T, F>(&self, items: &'a [T], tab_of: F) -> Vec<&'a T>
    where
        F: Fn(&T) -> K,
    {
        items
            .iter()
            .filter(|item| tab_of(*item) == self.active)
            .collect()
    }
}
