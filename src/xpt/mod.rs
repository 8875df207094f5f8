//! XPT format implementation.
//!
//! Only XPT version 5 is supported; version-specific code lives under
//! [`v5`].

pub mod v5;
