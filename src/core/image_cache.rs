use std::collections::HashMap;

/// Least-recently-used cache keyed by slide index.
pub struct ImageCache<T> {
    textures: HashMap<usize, T>,
    max_cache_size: usize,
    access_order: Vec<usize>,
}

impl<T> ImageCache<T> {
    pub fn new(max_size: usize) -> Self {
        Self {
            textures: HashMap::new(),
            max_cache_size: max_size.max(1),
            access_order: Vec::new(),
        }
    }

    fn touch(&mut self, index: usize) {
        if let Some(pos) = self.access_order.iter().position(|i| *i == index) {
            self.access_order.remove(pos);
        }
        self.access_order.push(index);
    }

    pub fn get(&mut self, index: usize) -> Option<&T> {
        if self.textures.contains_key(&index) {
            self.touch(index);
        }
        self.textures.get(&index)
    }

    pub fn insert(&mut self, index: usize, texture: T) {
        if !self.textures.contains_key(&index) {
            while self.textures.len() >= self.max_cache_size && !self.access_order.is_empty() {
                let oldest = self.access_order.remove(0);
                self.textures.remove(&oldest);
            }
        }

        self.textures.insert(index, texture);
        self.touch(index);
    }

    pub fn clear(&mut self) {
        self.textures.clear();
        self.access_order.clear();
    }

    pub fn contains(&self, index: usize) -> bool {
        self.textures.contains_key(&index)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_least_recently_used() {
        let mut cache = ImageCache::new(2);
        cache.insert(0, "zero");
        cache.insert(1, "one");
        assert_eq!(cache.get(0), Some(&"zero"));

        cache.insert(2, "two");
        assert!(cache.contains(0));
        assert!(!cache.contains(1));
        assert!(cache.contains(2));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn reinserting_replaces_without_evicting() {
        let mut cache = ImageCache::new(2);
        cache.insert(0, 'a');
        cache.insert(1, 'b');
        cache.insert(1, 'c');
        assert_eq!(cache.get(1), Some(&'c'));
        assert!(cache.contains(0));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn miss_does_not_disturb_order() {
        let mut cache = ImageCache::new(2);
        cache.insert(5, ());
        cache.insert(6, ());
        assert_eq!(cache.get(9), None);
        cache.insert(7, ());
        assert!(!cache.contains(5));
    }

    #[test]
    fn clear_empties_everything() {
        let mut cache = ImageCache::new(3);
        cache.insert(0, 0u8);
        cache.clear();
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.get(0), None);
    }

    #[test]
    fn zero_capacity_still_holds_one() {
        let mut cache = ImageCache::new(0);
        cache.insert(0, 1);
        cache.insert(1, 2);
        assert_eq!(cache.len(), 1);
        assert!(cache.contains(1));
    }
}
