//! Fuzz target for dataset loading.
//!
//! This fuzzer tests that loading and querying:
//! 1. Never panics on malformed documents
//! 2. Never panics on well-formed documents with odd record contents

#![no_main]

use examscore::{ScoreRange, ScoreStore};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let Ok(store) = ScoreStore::from_reader(data) else {
        return;
    };

    // Exercise every query on whatever loaded
    let _ = store.top_scores(usize::MAX);
    let _ = store.range_query(ScoreRange::default());
    for view in store.iter().take(16) {
        let _ = store.lookup(view.sbd);
        if let Some(code) = view.record.council_code.as_ref().and_then(|c| c.as_str()) {
            let _ = store.council_aggregate(code);
        }
    }
});
