//! Caller-side memoization for vacation-data recomputation. The engine
//! itself never caches (recomputing from scratch is always correct); this
//! keeps the O(requests × days) rebuild off every interaction by keying the
//! result on exactly the inputs it depends on: the store version, the
//! department-map version, and the filter values.

use std::sync::Arc;

use moka::sync::Cache;

use crate::model::{FilterState, VacationData};

type CacheKey = (u64, u64, FilterState);

pub struct IndexCache {
    cache: Cache<CacheKey, Arc<VacationData>>,
}

impl Default for IndexCache {
    fn default() -> Self {
        Self::new(64)
    }
}

impl IndexCache {
    pub fn new(max_entries: u64) -> Self {
        Self {
            cache: Cache::new(max_entries),
        }
    }

    /// Return the memoized result for this input tuple, building it once if
    /// absent. Bumping either version naturally invalidates: the old key is
    /// simply never asked for again and ages out.
    pub fn get_or_build(
        &self,
        store_version: u64,
        departments_version: u64,
        filters: &FilterState,
        build: impl FnOnce() -> VacationData,
    ) -> Arc<VacationData> {
        self.cache
            .get_with((store_version, departments_version, filters.clone()), || {
                Arc::new(build())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn identical_inputs_hit_the_cache() {
        let cache = IndexCache::new(8);
        let filters = FilterState::default();
        let first = cache.get_or_build(1, 1, &filters, VacationData::default);
        let second = cache.get_or_build(1, 1, &filters, || {
            panic!("builder must not run on a cache hit")
        });
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn version_bump_rebuilds() {
        let cache = IndexCache::new(8);
        let filters = FilterState::default();
        let builds = Cell::new(0u32);
        let build = || {
            builds.set(builds.get() + 1);
            VacationData::default()
        };
        cache.get_or_build(1, 1, &filters, build);
        cache.get_or_build(2, 1, &filters, build);
        cache.get_or_build(2, 2, &filters, build);
        assert_eq!(builds.get(), 3);
    }

    #[test]
    fn filter_change_rebuilds() {
        let cache = IndexCache::new(8);
        let builds = Cell::new(0u32);
        let build = || {
            builds.set(builds.get() + 1);
            VacationData::default()
        };
        cache.get_or_build(1, 1, &FilterState::default(), build);
        let narrowed = FilterState {
            employee: "jane".into(),
            ..FilterState::default()
        };
        cache.get_or_build(1, 1, &narrowed, build);
        assert_eq!(builds.get(), 2);
    }
}
