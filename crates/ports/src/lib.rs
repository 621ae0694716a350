//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract the collaborators around the
//! analysis engine:
//!
//! - [`extraction`]: turning an input document into plain text
//! - [`layout`]: display reflow applied before prosody analysis
//! - [`report`]: publishing finished analyses
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod extraction;
pub mod layout;
pub mod report;
