//! Keep the K smallest-keyed items inserted so far: a sorted array of
//! capacity K with O(K) insert.

pub struct BoundedMinSet<T> {
    cap: usize,
    items: Vec<(f32, T)>,
}

impl<T> BoundedMinSet<T> {
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            items: Vec::with_capacity(cap),
        }
    }

    /// Insert `value` keyed by `key`. If at capacity, the entry is dropped
    /// unless `key` is strictly smaller than the current worst, in which
    /// case the worst is evicted. Ties keep whichever was inserted first.
    pub fn insert(&mut self, key: f32, value: T) {
        if self.items.len() < self.cap {
            let pos = self.items.partition_point(|(k, _)| *k <= key);
            self.items.insert(pos, (key, value));
        } else if let Some(&(worst, _)) = self.items.last() {
            if key < worst {
                self.items.pop();
                let pos = self.items.partition_point(|(k, _)| *k <= key);
                self.items.insert(pos, (key, value));
            }
        }
    }

    pub fn into_values(self) -> Vec<T> {
        self.items.into_iter().map(|(_, v)| v).collect()
    }
}
