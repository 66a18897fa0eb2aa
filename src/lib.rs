//! HR administration client library
//!
//! An async REST client and table view-model for an HR administration
//! backend: awards, complaints, resignations, transfers, travel requests,
//! and disciplinary warnings. Each module is a list screen over dynamic
//! [`Record`](model::Record)s with search, column sorting, and pagination,
//! backed by conventional JSON CRUD endpoints.

pub mod api;
pub mod error;
pub mod model;
pub mod store;
pub mod view;

mod client;

pub use client::*;
