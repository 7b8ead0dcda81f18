// SPDX-License-Identifier: MIT OR Apache-2.0
//! faultline-core
#![deny(unsafe_code)]
#![warn(missing_docs)]
//!
//! Slug-classified error values for HTTP-facing services.
//!
//! A [`Fault`] bundles a [`Slug`] classification with a cause chain,
//! free-text detail, and structured key/value parameters. Faults are
//! enriched as they propagate (every enrichment returns a new value) and
//! consumed once at the transport boundary, where the extraction functions
//! recover the classification from anywhere in an error's source chain.
//!
//! ```
//! use faultline_core::{Fault, Slug, classification_of};
//!
//! let err = Fault::new(Slug::NotFound).with_details("no such user");
//! assert_eq!(err.to_string(), "not-found: no such user");
//! assert_eq!(classification_of(&err), Slug::NotFound);
//! ```

pub mod extract;
pub mod fault;
pub mod slug;

pub use extract::{UNKNOWN_DETAIL, classification_of, detail_of, find_fault, find_in_chain, params_of};
pub use fault::{Fault, Params};
pub use slug::{Category, Slug};
