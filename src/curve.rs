//! This module is an adapter to the ECC backend.
//! `elliptic_curves` has a somewhat unstable API,
//! and we isolate all the related logic here.

mod arithmetic;

pub use arithmetic::PointFormat;

pub(crate) use arithmetic::{Point, Scalar};
