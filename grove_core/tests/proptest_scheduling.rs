//! Property-based tests for unlock scheduling and the completion log.
//!
//! Random catalogs are built so prerequisites only point at earlier events,
//! which keeps every generated catalog acyclic. Impediments may point anywhere.

use std::collections::HashSet;

use proptest::prelude::*;
use proptest::sample::Index;

use grove_core::{
    compute_eligible, CompletionEntry, CompletionLog, EventRegistry, SaveFile, SchemaError,
    UnlockScheduler,
};
use grove_rules::{EventDefinition, EventKey};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

fn key(i: usize) -> String {
    format!("e{i}")
}

fn arb_catalog() -> impl Strategy<Value = Vec<EventDefinition>> {
    prop::collection::vec(
        (
            prop::collection::vec(0..64usize, 0..3), // prerequisites
            prop::collection::vec(0..64usize, 0..2), // impediments
        ),
        1..12,
    )
    .prop_map(|shapes| {
        let count = shapes.len();
        shapes
            .into_iter()
            .enumerate()
            .map(|(i, (prereqs, impediments))| {
                let mut def =
                    EventDefinition::new(key(i), format!("Event {i}"), format!("Message {i}"));
                if i > 0 {
                    for p in prereqs {
                        def = def.with_prerequisite(key(p % i));
                    }
                }
                for m in impediments {
                    def = def.with_impediment(key(m % count));
                }
                def
            })
            .collect()
    })
}

fn arb_entries() -> impl Strategy<Value = Vec<CompletionEntry>> {
    prop::collection::vec(("[a-z][a-z-]{0,15}", ".{0,40}"), 0..20)
        .prop_map(|pairs| {
            pairs
                .into_iter()
                .map(|(k, m)| CompletionEntry::new(k, m))
                .collect()
        })
}

// ---------------------------------------------------------------------------
// Property: a forward-only catalog always builds; closing a loop never does
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn generated_catalogs_build(catalog in arb_catalog()) {
        let count = catalog.len();
        let registry = EventRegistry::build(catalog).unwrap();
        prop_assert_eq!(registry.len(), count);
    }

    #[test]
    fn back_edge_creates_cycle(catalog in arb_catalog(), pick in any::<Index>()) {
        // The first event and a picked one require each other (or the first
        // requires itself when the pick lands on it).
        let mut catalog = catalog;
        let target = pick.index(catalog.len());
        catalog[target] = catalog[target].clone().with_prerequisite(key(0));
        catalog[0] = catalog[0].clone().with_prerequisite(key(target));

        let result = EventRegistry::build(catalog);
        let is_cycle = matches!(result, Err(SchemaError::PrerequisiteCycle(_)));
        prop_assert!(is_cycle);
    }
}

// ---------------------------------------------------------------------------
// Property: playing through any catalog respects capacity, idempotence and
// monotone unlocking
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn play_through_invariants(
        catalog in arb_catalog(),
        capacity in 1..5usize,
        choices in prop::collection::vec(any::<Index>(), 0..40),
    ) {
        let registry = EventRegistry::build(catalog).unwrap();
        let scheduler = UnlockScheduler::with_capacity(capacity);
        let mut log = CompletionLog::new();
        let mut visible: Vec<EventKey> = Vec::new();

        for choice in choices {
            let visible_set: HashSet<EventKey> = visible.iter().cloned().collect();

            let first = scheduler.compute_eligible(&registry, log.completed_set(), &visible_set);
            let second = scheduler.compute_eligible(&registry, log.completed_set(), &visible_set);
            prop_assert_eq!(&first, &second);

            visible.extend(first);
            prop_assert!(visible.len() <= capacity);

            let visible_set: HashSet<EventKey> = visible.iter().cloned().collect();
            let again = scheduler.compute_eligible(&registry, log.completed_set(), &visible_set);
            prop_assert!(again.is_empty());

            if visible.is_empty() {
                break;
            }

            let before: Vec<EventKey> = scheduler
                .candidates(&registry, log.completed_set(), &visible_set)
                .map(|e| e.key.clone())
                .collect();

            let resolved = visible.remove(choice.index(visible.len()));
            log.record_completion(resolved.clone(), "done").unwrap();

            let visible_set: HashSet<EventKey> = visible.iter().cloned().collect();
            let after: HashSet<EventKey> = scheduler
                .candidates(&registry, log.completed_set(), &visible_set)
                .map(|e| e.key.clone())
                .collect();

            for candidate in before {
                let impeded = registry
                    .get(candidate.as_str())
                    .map(|e| e.impediments.contains(&resolved))
                    .unwrap_or(false);
                if candidate != resolved && !impeded {
                    prop_assert!(after.contains(&candidate), "{} lost eligibility", candidate);
                }
            }
        }
    }

    #[test]
    fn free_function_matches_scheduler(
        catalog in arb_catalog(),
        capacity in 0..6usize,
        completed_mask in prop::collection::vec(any::<bool>(), 12),
    ) {
        let registry = EventRegistry::build(catalog).unwrap();
        let completed: HashSet<EventKey> = registry
            .iter()
            .zip(completed_mask)
            .filter(|(_, done)| *done)
            .map(|(e, _)| e.key.clone())
            .collect();
        let visible = HashSet::new();

        let eligible = compute_eligible(&registry, &completed, &visible, capacity);
        prop_assert!(eligible.len() <= capacity);
        for key in &eligible {
            prop_assert!(!completed.contains(key));
        }
        let scheduler = UnlockScheduler::with_capacity(capacity);
        prop_assert_eq!(
            eligible,
            scheduler.compute_eligible(&registry, &completed, &visible)
        );
    }
}

// ---------------------------------------------------------------------------
// Property: the log and the save file reproduce entries exactly
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn restore_round_trip(entries in arb_entries()) {
        let mut log = CompletionLog::new();
        log.restore(entries.clone());
        prop_assert_eq!(log.entries(), entries.as_slice());
    }

    #[test]
    fn save_blob_round_trip(entries in arb_entries()) {
        let save = SaveFile { event_log: entries.clone(), ..SaveFile::default() };
        let loaded = SaveFile::from_blob(&save.to_blob().unwrap());

        let mut log = CompletionLog::new();
        log.restore(loaded.event_log);
        prop_assert_eq!(log.entries(), entries.as_slice());
    }
}
