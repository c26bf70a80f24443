use std::sync::atomic::{AtomicUsize, Ordering};

// Must NOT contain "/" or "-"; ids end up in CSS selectors.
const PREFIX: &str = "notehub";

static COUNTER: AtomicUsize = AtomicUsize::new(1);

/// Unique DOM id for `element`, e.g. `modal_notehub_3`.
///
/// Ids only need to be unique within one page load, so a counter is enough.
pub fn use_random_id_for(element: &str) -> String {
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{element}_{PREFIX}_{n}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_and_prefixed() {
        let a = use_random_id_for("modal");
        let b = use_random_id_for("modal");
        assert_ne!(a, b);
        assert!(a.starts_with("modal_notehub_"));
        assert!(!a.contains('-'));
    }
}
