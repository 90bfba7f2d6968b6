//! mljob Core
//!
//! Core types for the mljob pipeline components.
//!
//! This crate contains:
//! - Domain types: the ML Engine job resource and its lifecycle states

pub mod domain;
