//! Document store access for the Kolegium API
//!
//! [`gateway::DocumentStore`] is the seam between entity handling and the
//! storage technology; [`mongo::MongoStore`] is the MongoDB implementation.

pub mod gateway;
pub mod mongo;

pub use gateway::{DocumentStore, Gateway, DEFAULT_QUERY_LIMIT};
pub use mongo::MongoStore;
