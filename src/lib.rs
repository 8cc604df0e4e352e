//! # TESTABLE CORE LIBRARY
//!
//! **AUTOMATIC TEST-SUBJECT BUILDER FOR UNIT TESTS**
//!
//! **ARCHITECTURE**: Descriptor-driven resolution with a pluggable mock factory
//! **GUARANTEE**: Deterministic wiring; one shared instance per dependency type
//! **SCOPE**: Fully synchronous, in-memory; no container lifetimes or scoping
//!
//! Given a target type implementing [`introspect::Introspect`], a build
//! selects a constructor, resolves every parameter (supplied object, mock, or
//! default-constructed concrete), invokes it, then injects still-vacant
//! interface properties — returning the instance together with the registry
//! of everything resolved along the way.

pub mod api;
pub mod errors;
pub mod introspect;
pub mod mock;
pub mod resolution;
pub mod supplied;
pub mod testable;
pub mod types;
