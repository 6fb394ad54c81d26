use std::collections::BTreeMap;
use parking_lot::{MappedMutexGuard, Mutex, MutexGuard};
use crate::core::types::DocId;

/// Keys that can be routed to a bucket by remainder.
pub trait BucketKey: Copy + Ord {
    fn bucket(&self, bucket_count: usize) -> usize;
}

macro_rules! impl_bucket_key {
    ($($t:ty),*) => {
        $(
            impl BucketKey for $t {
                #[inline]
                fn bucket(&self, bucket_count: usize) -> usize {
                    (*self as i128).rem_euclid(bucket_count as i128) as usize
                }
            }
        )*
    };
}

impl_bucket_key!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

impl BucketKey for DocId {
    #[inline]
    fn bucket(&self, bucket_count: usize) -> usize {
        self.0.bucket(bucket_count)
    }
}

/// Exclusive access to one value. The bucket lock is held until the guard drops.
pub type Access<'a, V> = MappedMutexGuard<'a, V>;

/// Lock-striped map: `key mod N` picks one of `N` independently locked buckets.
///
/// Writers that land in different buckets never contend. Used as a scratch
/// accumulator while scoring in parallel.
pub struct ConcurrentMap<K, V> {
    buckets: Vec<Mutex<BTreeMap<K, V>>>,
}

impl<K: BucketKey, V> ConcurrentMap<K, V> {
    /// `bucket_count` is clamped to at least one bucket.
    pub fn new(bucket_count: usize) -> Self {
        let buckets = (0..bucket_count.max(1))
            .map(|_| Mutex::new(BTreeMap::new()))
            .collect();
        ConcurrentMap { buckets }
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    fn bucket(&self, key: K) -> &Mutex<BTreeMap<K, V>> {
        &self.buckets[key.bucket(self.buckets.len())]
    }

    pub fn access(&self, key: K) -> Access<'_, V>
    where
        V: Default,
    {
        let guard = self.bucket(key).lock();
        MutexGuard::map(guard, |map| map.entry(key).or_default())
    }

    pub fn erase(&self, key: K) -> Option<V> {
        self.bucket(key).lock().remove(&key)
    }

    /// Copies every bucket, one lock at a time, into an ordinary map.
    /// Not atomic across buckets.
    pub fn snapshot(&self) -> BTreeMap<K, V>
    where
        V: Clone,
    {
        let mut result = BTreeMap::new();
        for bucket in &self.buckets {
            let map = bucket.lock();
            result.extend(map.iter().map(|(k, v)| (*k, v.clone())));
        }
        result
    }

    pub fn into_map(self) -> BTreeMap<K, V> {
        let mut result = BTreeMap::new();
        for bucket in self.buckets {
            result.append(&mut bucket.into_inner());
        }
        result
    }
}
