//! Property tests for the search debouncer.
//!
//! # Invariants
//!
//! 1. **Last input wins**: whatever fires is the most recent push.
//! 2. **Quiescence**: nothing fires before `last_push + window`.
//! 3. **No backlog**: at most one value fires per burst.

use core::time::Duration;

use collab_core::debounce::Debouncer;
use proptest::prelude::*;

const WINDOW_MS: u64 = 300;

proptest! {
    #[test]
    fn burst_delivers_only_the_last_value(gaps in proptest::collection::vec(0u64..WINDOW_MS, 1..40)) {
        let mut d = Debouncer::new(Duration::from_millis(WINDOW_MS));
        let mut now = 0u64;
        let mut fired = Vec::new();

        for (i, gap) in gaps.iter().enumerate() {
            now += gap;
            if let Some(v) = d.poll(Duration::from_millis(now)) {
                fired.push(v);
            }
            d.push(i, Duration::from_millis(now));
        }

        // Gaps are all shorter than the window, so nothing may fire mid-burst.
        prop_assert!(fired.is_empty());
        prop_assert_eq!(d.poll(Duration::from_millis(now + WINDOW_MS - 1)), None);
        prop_assert_eq!(d.poll(Duration::from_millis(now + WINDOW_MS)), Some(gaps.len() - 1));
        prop_assert_eq!(d.poll(Duration::from_millis(now + 10 * WINDOW_MS)), None);
    }

    #[test]
    fn spaced_inputs_each_fire(count in 1usize..20, spacing in WINDOW_MS..(4 * WINDOW_MS)) {
        let mut d = Debouncer::new(Duration::from_millis(WINDOW_MS));
        let mut fired = Vec::new();

        for i in 0..count {
            let t = i as u64 * spacing;
            if let Some(v) = d.poll(Duration::from_millis(t)) {
                fired.push(v);
            }
            d.push(i, Duration::from_millis(t));
        }
        if let Some(v) = d.poll(Duration::from_millis(count as u64 * spacing + WINDOW_MS)) {
            fired.push(v);
        }

        prop_assert_eq!(fired, (0..count).collect::<Vec<_>>());
    }
}
