//! Kolegium content API
//!
//! REST backend for the Kolegium Dermatologi, Venereologi & Estetika site.
//! Exposes list/create operations over seven content collections
//! (events, publications, blog posts, commissions, centers, members,
//! contact messages) backed by MongoDB.
//!
//! ## Components
//!
//! - **Schemas**: per-entity field constraints, validated before persistence
//! - **Gateway**: generic document store access (insert + capped query)
//! - **Server**: hyper HTTP surface under `/api/*`

pub mod config;
pub mod db;
pub mod error;
pub mod routes;
pub mod schemas;
pub mod server;

pub use config::Args;
pub use error::{ApiError, Result, ValidationError};
pub use server::{run, AppState};
