//! # vercomp
//!
//! Debian package version comparison, as done by dpkg.
//!
//! Versions have the form `[epoch:]upstream-version[-revision]`. They are ordered by epoch, then
//! upstream version, then revision, each of the latter two compared by alternating runs of
//! non-digits (where `~` sorts before everything, even the end of the string) and numbers
//! (compared by magnitude). Versions the Debian rules consider equal but that are spelled
//! differently are ordered by their raw bytes, so the ordering is strict and can back a sorted
//! index.
//!
//! # Example
//!
//! ```rust
//! use std::cmp::Ordering;
//! use vercomp::{Relation, Version, VersionBuilder, dpkg_version_compare, evaluate_relation};
//!
//! assert_eq!(Ordering::Less, dpkg_version_compare("1.9", "1.10"));
//! assert_eq!(Ordering::Less, dpkg_version_compare("1.0~rc1", "1.0"));
//! assert_eq!(Ordering::Greater, dpkg_version_compare("2:0.1", "1:9.9"));
//!
//! let version = Version::parse("1:2.30-4ubuntu1");
//! assert_eq!(version.epoch(), 1);
//! assert_eq!(version.upstream(), b"2.30");
//! assert_eq!(version.revision(), b"4ubuntu1");
//!
//! assert_eq!(Some(true), evaluate_relation("1.0", "<<", "1.1"));
//! assert_eq!(None, evaluate_relation("1.0", "??", "1.1"));
//! assert!(Relation::GreaterOrEqual.holds(&version, &Version::parse("2.30-4")));
//!
//! let built = VersionBuilder::new("2.30").revision("4ubuntu1").epoch("1").build();
//! assert_eq!("1:2.30-4ubuntu1", built);
//! ```

#![allow(unknown_lints, clippy::uninlined_format_args)]

mod errors;
pub use crate::errors::*;

mod version;
pub use crate::version::*;

mod relation;
pub use crate::relation::*;

mod builder;
pub use crate::builder::*;

pub mod functions;
