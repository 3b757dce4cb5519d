//! Japanese field normalization and validation
//!
//! This crate holds the pure algorithms behind zenhan: conversion between
//! full-width (zenkaku) and half-width (hankaku) characters, byte-level
//! classification under Shift_JIS, and composable validity rules for
//! `local@domain` fields. Nothing here performs I/O and no function panics
//! on any string input.
//!
//! # Modules
//!
//! - [`tables`]: static kana and symbol correspondence tables
//! - [`width`]: width conversion in both directions
//! - [`sjis`]: Shift_JIS byte classification, vendor character and digit scans
//! - [`rules`]: field validation rules and rule chains
//! - [`charset`]: whole-string character class checks
//!
//! # Example
//!
//! ```rust
//! use zenhan_core::{extract_digits, has_vendor_characters, to_full_width, to_half_width};
//! use zenhan_core::{validate_field, Rule};
//!
//! assert_eq!(to_half_width("ガッコウ１２３"), "ｶﾞｯｺｳ123");
//! assert_eq!(to_full_width("ｶﾞｯｺｳ123"), "ガッコウ１２３");
//!
//! assert!(has_vendor_characters("①"));
//! assert_eq!(extract_digits("電話 03-1234"), "031234");
//!
//! let outcome = validate_field(".user@example.com");
//! assert_eq!(outcome.failed_rule, Some(Rule::LocalNoLeadingDot));
//! ```

pub mod charset;
pub mod error;
pub mod rules;
pub mod sjis;
pub mod tables;
pub mod width;

pub use error::{EncodingFault, Result};
pub use rules::{validate_field, Rule, RuleChain, StructuredField, UnknownRule, ValidationOutcome};
pub use sjis::{extract_digits, has_control_codes, has_vendor_characters, ByteClass, SjisUnit};
pub use width::{convert, to_full_width, to_full_width_opt, to_half_width, to_half_width_opt, Width};
