//! Loupe Query - predicate engine for the Loupe graph exploration engine
//!
//! Filters compare a single attribute against a typed value; searches match
//! a value anywhere in an entity's attribute map. Both are available behind
//! the [`Predicate`] enum, and filters can be built from the textual
//! mini-language (`attribute operator value`).

pub mod error;
pub mod filter;
pub mod operator;
pub mod parse;
pub mod predicate;
pub mod search;

pub use error::{QueryError, QueryResult};
pub use filter::Filter;
pub use operator::Operator;
pub use parse::{parse_filter, parse_value};
pub use predicate::{Attributed, Predicate};
pub use search::Search;
