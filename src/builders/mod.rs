//! # Builders
//!
//! This module provides builder patterns for configuring key derivation.
//!
//! ## Modules
//!
//! - [`pkcs12_builder`] - Builder for PKCS#12 (RFC 7292) key derivation
//!
//! ## Usage
//!
//! Builders provide a fluent API with PKCS#12 defaults and optional customization.

pub mod pkcs12_builder;
