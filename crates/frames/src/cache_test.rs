use std::sync::Arc;

use crate::cache::TrajectoryCache;
use crate::config::SystemConfig;
use crate::sampler::FrameSampler;

#[test]
fn test_empty_cache_misses() {
    let cache = TrajectoryCache::new();
    assert!(cache.is_empty());
    assert!(cache.get(100).is_none());
}

#[test]
fn test_insert_then_get_returns_the_same_trajectory() {
    let cache = TrajectoryCache::new();
    let sampler = FrameSampler::new(&SystemConfig::default()).unwrap();
    let trajectory = sampler.trajectory(10).unwrap();

    cache.insert(10, Arc::clone(&trajectory));

    let hit = cache.get(10).unwrap();
    assert!(Arc::ptr_eq(&hit, &trajectory));
    assert_eq!(cache.len(), 1);
    assert!(cache.get(11).is_none());
}

#[test]
fn test_cache_is_shared_across_threads() {
    let cache = Arc::new(TrajectoryCache::new());
    let sampler = FrameSampler::with_cache(&SystemConfig::default(), Arc::clone(&cache)).unwrap();
    let trajectory = sampler.trajectory(10).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let cache = Arc::clone(&cache);
            std::thread::spawn(move || cache.get(10).is_some())
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
    assert_eq!(cache.len(), 1);
    assert!(Arc::ptr_eq(&cache.get(10).unwrap(), &trajectory));
}
