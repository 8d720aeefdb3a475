//! # mantis-core
//!
//! Core types for the Mantis maintenance client.
//!
//! This crate provides the foundational types shared across all Mantis crates:
//! - Entity structs for the six-level asset hierarchy
//!   (Area → Line → Equipment → System → Component → `SparePart`)
//! - [`EntityKind`](kind::EntityKind), the closed set of levels, with its
//!   static endpoint/parent-field table
//! - [`EntityId`](ids::EntityId), the canonical id every payload is normalized to
//! - Drafts used as request bodies for create/update calls
//! - Cross-cutting error types

pub mod draft;
pub mod entities;
pub mod errors;
pub mod ids;
pub mod kind;
