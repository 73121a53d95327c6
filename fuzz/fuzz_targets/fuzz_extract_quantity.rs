#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz quantity extraction and query building on arbitrary titles.
fuzz_target!(|data: &[u8]| {
    if let Ok(title) = std::str::from_utf8(data) {
        let quantity = product_ranker::extract_quantity(title);
        assert!(quantity >= 1 && quantity < product_ranker::normalize::MAX_QUANTITY);
        let _ = product_ranker::build_search_query(
            title,
            &product_ranker::QueryVocabulary::default(),
            6,
        );
    }
});
