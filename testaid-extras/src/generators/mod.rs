//! String pattern generators
//!
//! This module provides generators for:
//! - Fixed-length random strings
//! - Contact details (US phone numbers, email addresses)
//! - Vehicle identification numbers with a valid check digit
//! - US street addresses

pub mod address;
pub mod contact;
pub mod text;
pub mod vehicle;
