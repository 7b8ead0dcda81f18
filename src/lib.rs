// SPDX-License-Identifier: MIT OR Apache-2.0
#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub use faultline_core::{
    Category, Fault, Params, Slug, UNKNOWN_DETAIL, classification_of, detail_of, find_fault,
    find_in_chain, params_of,
};
pub use faultline_problem::{ProblemDetails, ProblemType, status_for, status_of};
pub use faultline_validate::{Translator, fault_from_validator};
