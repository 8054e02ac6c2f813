//! Synthesis from loaded operations to the intermediate representation.
//!
//! ## Submodules
//!
//! - [`types`] - Type Synthesizer: parameter, body and response records
//! - [`endpoint`] - Endpoint Function Synthesizer: one method per operation
//! - [`client`] - Client Assembler: the finished [`crate::ir::ClientUnit`]
//!
//! ## Flow
//!
//! For each loaded operation, [`synthesize_records`] runs first and
//! [`synthesize_callable`] consumes its result, so a method's signature
//! references exactly the records that were not suppressed. Both are pushed
//! into a [`ClientAssembler`].

pub mod client;
pub mod endpoint;
pub mod types;

pub use client::ClientAssembler;
pub use endpoint::synthesize_callable;
pub use types::{map_schema_type, synthesize_records};
