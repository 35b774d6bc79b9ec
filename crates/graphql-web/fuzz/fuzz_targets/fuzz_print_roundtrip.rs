#![no_main]

use graphql_web::ParseOptions;
use graphql_web::ast::Node;
use libfuzzer_sys::fuzz_target;

// Whatever parses must print to text that parses again. Equality is not
// checked: block strings are re-indented on print and dedented on parse.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(doc) = graphql_web::parse_document(s, ParseOptions::without_locations()) else {
        return;
    };
    let printed = graphql_web::print(&Node::from(doc));
    if let Err(err) = graphql_web::parse_document(printed.as_str(), ParseOptions::without_locations()) {
        panic!("printed output failed to parse:\n{printed}\n{}", err.format_detailed());
    }
});
