#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    missing_docs,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]
#![cfg_attr(not(test), warn(clippy::unwrap_used, clippy::indexing_slicing))]

extern crate alloc;

mod curve;
mod derivation;
mod tools;

// A re-export to avoid the need for version-matching:
// the private-key output is wrapped in `Zeroizing`.
pub use zeroize;

pub use curve::PointFormat;
pub use derivation::{derive_private, derive_public, DeriveError};
