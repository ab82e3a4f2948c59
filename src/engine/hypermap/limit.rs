/// Caps the group axis of a hypermap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketLimiter {
    max: usize,
}

impl BucketLimiter {
    pub fn new(max: usize) -> Self {
        Self { max }
    }

    /// Keeps the first `max` items in their current order. The flag is
    /// `false` iff anything was cut.
    pub fn limit<T>(&self, mut items: Vec<T>) -> (Vec<T>, bool) {
        let is_complete = items.len() <= self.max;
        items.truncate(self.max);
        (items, is_complete)
    }
}
