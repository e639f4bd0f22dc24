//! # fops-core
//!
//! Core types for the FranchiseOps client.
//!
//! This crate provides the foundational types shared across all `fops-*` crates:
//! - Request/response contracts for the question-answering and admin API
//! - View-model entities (chat messages, citations, audit logs, analytics)
//! - Role, status, and filter enums
//! - Lightweight authenticated identity for cross-crate passing
//! - Client route table used by the auth gate
//! - JSON Schema registry for the API contracts
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
pub mod routes;
pub mod schema;

pub use errors::CoreError;
pub use identity::AuthIdentity;
pub use routes::Route;
