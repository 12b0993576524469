mod client;
mod extractor;
mod helper;
mod literal;
mod login_form;
mod parser_traits;
mod parsers;
mod schema;

pub use client::Client;
pub use extractor::BillExtractor;
pub use login_form::Credentials;
pub use schema::DOMINION_LANDING_PAGE;
