#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz batch decoding and the full ranking run.
///
/// Any batch that decodes must also rank without panicking, whatever the
/// scraper put in its price, rating and review fields.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(request) = product_ranker::pipeline::parse_request(s) {
            let _ = product_ranker::rank(
                &request.products,
                request.sentiments.as_ref(),
                request.narrative.as_deref(),
            );
        }
        let _ = product_ranker::pipeline::parse_sentiments(s);
    }
});
