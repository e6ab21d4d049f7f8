#![allow(clippy::must_use_candidate)]

//! Core fault model shared by the classification and response layers

mod error;
mod fault;

pub use error::{OperationalError, StatusClass};
pub use fault::{Fault, FieldFailure, RawFault};
