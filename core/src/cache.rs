use parking_lot::RwLock;
use tracing::trace;

use crate::error::ConfigError;
use crate::{NoiseModule, sample};

// One memoized evaluation. Entries from different arities never
// collide: the arity is part of the key, and all coordinates for that
// arity must match exactly.
struct CacheEntry {
    arity: u8,
    coords: [f64; 6],
    value: f64,
}

struct Ring {
    entries: Vec<CacheEntry>,
    // Slot overwritten next once the buffer is full; advances oldest-first
    next: usize,
}

// Wraps a source with a bounded memoization buffer. Reads take a
// shared lock and scan linearly; a miss evaluates the source outside
// any lock and then appends under the exclusive lock, evicting the
// oldest entry at capacity.
//
// Two callers missing on the same position may both evaluate the
// source and both insert. That duplicate work is accepted; the lock
// only guarantees structural integrity of the buffer.
pub struct Cache<'a> {
    source: &'a dyn NoiseModule,
    capacity: usize,
    ring: RwLock<Ring>,
}

impl<'a> Cache<'a> {
    // The buffer is sized here once and never grows
    pub fn new(source: &'a dyn NoiseModule, capacity: usize) -> Result<Self, ConfigError> {
        if capacity < 1 {
            return Err(ConfigError::InvalidCacheCapacity);
        }
        Ok(Self {
            source,
            capacity,
            ring: RwLock::new(Ring {
                entries: Vec::with_capacity(capacity),
                next: 0,
            }),
        })
    }

    fn eval(&self, pos: &[f64]) -> f64 {
        let arity = pos.len() as u8;
        {
            let ring = self.ring.read();
            for entry in &ring.entries {
                if entry.arity == arity && entry.coords[..pos.len()] == *pos {
                    return entry.value;
                }
            }
        }

        trace!(arity, "cache miss");
        let value = sample(self.source, pos);

        let mut coords = [0.0f64; 6];
        coords[..pos.len()].copy_from_slice(pos);
        let entry = CacheEntry {
            arity,
            coords,
            value,
        };

        let mut ring = self.ring.write();
        if ring.entries.len() < self.capacity {
            ring.entries.push(entry);
        } else {
            let slot = ring.next;
            trace!(slot, "cache full, evicting oldest entry");
            ring.entries[slot] = entry;
            ring.next = (slot + 1) % self.capacity;
        }
        value
    }
}

impl NoiseModule for Cache<'_> {
    fn get1(&self, x: f64) -> f64 {
        self.eval(&[x])
    }

    fn get2(&self, x: f64, y: f64) -> f64 {
        self.eval(&[x, y])
    }

    fn get3(&self, x: f64, y: f64, z: f64) -> f64 {
        self.eval(&[x, y, z])
    }

    fn get4(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        self.eval(&[x, y, z, w])
    }

    fn get6(&self, x: f64, y: f64, z: f64, w: f64, u: f64, v: f64) -> f64 {
        self.eval(&[x, y, z, w, u, v])
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::Cache;
    use crate::NoiseModule;
    use crate::error::ConfigError;

    // Constant source that counts how often it is actually evaluated
    struct CountingConstant {
        value: f64,
        calls: AtomicUsize,
    }

    impl CountingConstant {
        fn new(value: f64) -> Self {
            Self {
                value,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl NoiseModule for CountingConstant {
        fn get1(&self, _x: f64) -> f64 {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.value
        }
    }

    #[test]
    fn cache_rejects_zero_capacity() {
        let source = CountingConstant::new(0.0);
        let err = Cache::new(&source, 0).err();
        assert_eq!(err, Some(ConfigError::InvalidCacheCapacity));
    }

    #[test]
    fn cache_hit_skips_the_source() {
        let source = CountingConstant::new(7.0);
        let cache = Cache::new(&source, 4).unwrap();
        assert_eq!(cache.get2(1.5, 2.5), 7.0);
        assert_eq!(cache.get2(1.5, 2.5), 7.0);
        assert_eq!(source.calls(), 1);
    }

    #[test]
    fn cache_distinguishes_arity() {
        // Same leading coordinates at different arities are different
        // keys, even though the source collapses them to one value
        let source = CountingConstant::new(3.0);
        let cache = Cache::new(&source, 4).unwrap();
        assert_eq!(cache.get2(1.0, 2.0), 3.0);
        assert_eq!(cache.get3(1.0, 2.0, 0.0), 3.0);
        assert_eq!(source.calls(), 2);
        // But repeating either arity hits
        let _ = cache.get2(1.0, 2.0);
        let _ = cache.get3(1.0, 2.0, 0.0);
        assert_eq!(source.calls(), 2);
    }

    #[test]
    fn cache_evicts_oldest_first() {
        let source = CountingConstant::new(1.0);
        let capacity = 3;
        let cache = Cache::new(&source, capacity).unwrap();

        // Fill the buffer and then insert one more distinct position
        for i in 0..=capacity {
            let _ = cache.get1(i as f64);
        }
        assert_eq!(source.calls(), capacity + 1);

        // The first-inserted position was evicted and recomputes
        let _ = cache.get1(0.0);
        assert_eq!(source.calls(), capacity + 2);

        // The most recent position is still cached
        let _ = cache.get1(capacity as f64);
        assert_eq!(source.calls(), capacity + 2);
    }

    #[test]
    fn cache_is_safe_under_concurrent_evaluation() {
        let source = CountingConstant::new(2.0);
        let cache = Cache::new(&source, 8).unwrap();

        std::thread::scope(|scope| {
            for t in 0..4 {
                let cache = &cache;
                scope.spawn(move || {
                    for i in 0..200 {
                        let x = ((t + i) % 16) as f64;
                        assert_eq!(cache.get1(x), 2.0);
                    }
                });
            }
        });
        // Duplicate computation on concurrent misses is allowed; every
        // returned value still came from the wrapped source
        assert!(source.calls() >= 16);
    }
}
