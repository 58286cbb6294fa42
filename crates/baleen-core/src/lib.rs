//! # baleen-core
//!
//! Core types, menu resolution, and error types for the Baleen admin client.
//!
//! This crate provides the foundational types shared across all Baleen admin crates:
//! - Vocabulary statistics records as served by the Baleen backend
//! - The navigation menu tree and its resolver (lookup, ancestor chain, route activation)
//! - Number formatting helpers for statistics display
//! - Cross-cutting error types
//! - CLI response types

pub mod errors;
pub mod format;
pub mod menu;
pub mod responses;
pub mod vocabulary;
