pub mod query;

mod macros;

pub use query::QueryCache;
pub use query::QueryKey;
