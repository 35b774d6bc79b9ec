#![no_main]

use graphql_web::ParseOptions;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    if let Err(err) = graphql_web::parse_document(s, ParseOptions::default()) {
        // Rendering exercises span and column arithmetic on arbitrary input.
        let _ = err.format_detailed();
    }
    let _ = graphql_web::parse_value(s, ParseOptions::default());
    let _ = graphql_web::parse_type(s, ParseOptions::default());
});
