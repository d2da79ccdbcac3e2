use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crmbase::registry::ServiceRegistry;

struct Mailer {
    sender: String,
}

struct RateLimiter {
    limit: u32,
}

#[test]
fn test_same_instance_on_repeated_calls() {
    let registry = ServiceRegistry::new();

    let first = registry.get_or_init(|| Mailer {
        sender: "sales@example.com".to_string(),
    });
    let second = registry.get_or_init(|| Mailer {
        sender: "other@example.com".to_string(),
    });

    // Identical instance, not merely an equal one
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(second.sender, "sales@example.com");
}

#[test]
fn test_init_runs_once() {
    let registry = ServiceRegistry::new();
    let calls = AtomicUsize::new(0);

    for _ in 0..5 {
        registry.get_or_init(|| {
            calls.fetch_add(1, Ordering::SeqCst);
            RateLimiter { limit: 10 }
        });
    }

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_types_are_cached_independently() {
    let registry = ServiceRegistry::new();
    assert!(registry.is_empty());

    registry.get_or_init(|| Mailer {
        sender: "sales@example.com".to_string(),
    });
    let limiter = registry.get_or_init(|| RateLimiter { limit: 10 });

    assert_eq!(registry.len(), 2);
    assert_eq!(limiter.limit, 10);
}

#[test]
fn test_get_without_init() {
    let registry = ServiceRegistry::new();
    assert!(registry.get::<Mailer>().is_none());

    registry.get_or_init(|| Mailer {
        sender: "sales@example.com".to_string(),
    });

    let mailer = registry.get::<Mailer>().unwrap();
    assert_eq!(mailer.sender, "sales@example.com");
}

#[test]
fn test_clear() {
    let registry = ServiceRegistry::new();
    registry.get_or_init(|| RateLimiter { limit: 10 });

    registry.clear();
    assert!(registry.is_empty());
    assert!(registry.get::<RateLimiter>().is_none());
}
