mod graphql_error_tests;
mod graphql_parser_error_tests;
mod graphql_parser_selection_tests;
mod node_tests;
mod printer_proptest_tests;
mod printer_tests;
mod reduce_tests;
mod utils;
