//! Provider-specific page parsers.

pub mod bill_parser;

pub use bill_parser::DominionParser;
