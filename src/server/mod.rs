//! HTTP server for the Kolegium API

pub mod http;

pub use http::{run, AppState};
