#![allow(clippy::must_use_candidate)]

//! Classification of raw faults into operational errors
//!
//! A read-only registry maps discriminators (a fault's `name`, or the
//! unique-constraint code) to pure classifier functions. Unmatched or
//! declined faults stay raw and take the unexpected-fault path.

mod builtin;
mod registry;

pub use registry::{Classifier, ClassifierRegistry, Discriminator, UNIQUE_VIOLATION_CODE};
