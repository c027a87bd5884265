pub mod dom;
pub mod error;
pub mod fetch;
pub mod fixture;
pub mod lemma;
pub mod parser;

pub use error::Error;
pub use lemma::Lemma;
pub use parser::{parse, parse_with_engine};
