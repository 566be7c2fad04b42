//! Data models for the RDQ application.
//!
//! Wire names are camelCase and match the frontend contract; enum tokens
//! keep the French business vocabulary (PLANIFIE, PRESENTIEL, ...).

mod bilan;
mod collaborateur;
mod document;
mod manager;
mod projet;
mod rdq;

pub use bilan::*;
pub use collaborateur::*;
pub use document::*;
pub use manager::*;
pub use projet::*;
pub use rdq::*;
