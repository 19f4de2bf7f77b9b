//! Per-record card image cache.
//!
//! Every fetch is tagged with the cache generation it was started under.
//! A reload bumps the generation, so fetches begun before it can never land
//! in the cache afterwards.

use std::collections::{HashMap, HashSet};

use super::CardImage;

#[derive(Debug, Default)]
pub struct ImageCache {
    generation: u64,
    images: HashMap<u64, CardImage>,
    pending: HashSet<u64>,
}

impl ImageCache {
    pub fn get(&self, id: u64) -> Option<&CardImage> {
        self.images.get(&id)
    }

    /// Forget every image and in-flight fetch
    pub fn reset(&mut self) {
        self.generation += 1;
        self.images.clear();
        self.pending.clear();
    }

    /// Reserve a fetch for `id`. Returns the generation to tag it with, or
    /// `None` when the image is already cached or being fetched.
    pub fn claim(&mut self, id: u64) -> Option<u64> {
        if self.images.contains_key(&id) || !self.pending.insert(id) {
            return None;
        }
        Some(self.generation)
    }

    /// Store a finished fetch. Returns false if it predates the last reset.
    pub fn store(&mut self, generation: u64, id: u64, image: CardImage) -> bool {
        if generation != self.generation {
            tracing::debug!(id, generation, current = self.generation, "dropping stale image");
            return false;
        }
        self.pending.remove(&id);
        self.images.insert(id, image);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::placeholder;

    fn titled(alt: &str) -> CardImage {
        CardImage {
            alt: alt.to_string(),
            ..placeholder::card_image()
        }
    }

    #[test]
    fn claims_each_id_once() {
        let mut cache = ImageCache::default();
        assert_eq!(cache.claim(1), Some(0));
        assert_eq!(cache.claim(1), None);

        assert!(cache.store(0, 1, titled("first")));
        assert_eq!(cache.claim(1), None);
        assert_eq!(cache.get(1).map(|i| i.alt.as_str()), Some("first"));
    }

    #[test]
    fn fetch_from_before_reset_cannot_overwrite_newer_image() {
        let mut cache = ImageCache::default();
        let old = cache.claim(1).unwrap();

        cache.reset();
        let new = cache.claim(1).unwrap();
        assert_ne!(old, new);

        // Newer fetch finishes first, the older one afterwards
        assert!(cache.store(new, 1, titled("url B")));
        assert!(!cache.store(old, 1, titled("url A")));
        assert_eq!(cache.get(1).map(|i| i.alt.as_str()), Some("url B"));
    }

    #[test]
    fn stale_result_does_not_release_new_claim() {
        let mut cache = ImageCache::default();
        let old = cache.claim(1).unwrap();
        cache.reset();
        cache.claim(1).unwrap();

        assert!(!cache.store(old, 1, titled("url A")));
        // The newer fetch is still pending, so no duplicate request goes out
        assert_eq!(cache.claim(1), None);
        assert!(cache.get(1).is_none());
    }
}
