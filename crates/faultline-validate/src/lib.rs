// SPDX-License-Identifier: MIT OR Apache-2.0
//! faultline-validate
#![deny(unsafe_code)]
#![warn(missing_docs)]
//!
//! Normalization of `validator` field failures into Invalid faults.
//!
//! The validation library is a collaborator, not something this crate
//! reimplements: a [`validator::ValidationErrors`] value is consumed into a
//! [`Fault`] under `Slug::Invalid` whose parameters map each failing field
//! name (lower-cased) to a human-readable message. An optional
//! [`Translator`] capability localizes the messages; without one, the
//! library's own rendering is used.

use faultline_core::{Fault, Params, Slug, find_in_chain};
use std::error::Error as StdError;
use tracing::debug;
use validator::{ValidationError, ValidationErrors};

// ---------------------------------------------------------------------------
// Translator capability
// ---------------------------------------------------------------------------

/// External translation capability for per-field validation messages.
///
/// Implementations return `None` for messages they cannot translate, which
/// falls back to the validation library's own rendering. Closures with the
/// matching signature implement this trait directly.
pub trait Translator {
    /// Localized message for `error` on the (already lower-cased) `field`,
    /// or `None` to use the default rendering.
    fn translate(&self, field: &str, error: &ValidationError) -> Option<String>;
}

impl<F> Translator for F
where
    F: Fn(&str, &ValidationError) -> Option<String>,
{
    fn translate(&self, field: &str, error: &ValidationError) -> Option<String> {
        self(field, error)
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Normalize a validation-library error into a fault under `Slug::Invalid`.
///
/// If `err` is (or carries anywhere in its source chain) a
/// [`ValidationErrors`] value, every direct field failure becomes a
/// parameter keyed by the lower-cased field name. Several failures on one
/// field are inserted in order, last one wins. Nested struct and list
/// failures are not flattened; only direct field errors become parameters.
///
/// Any other error is treated as a structural validation-setup problem: the
/// result still carries `Slug::Invalid` and the original cause, but no
/// parameters. Callers distinguish that case only by the absent parameters.
pub fn fault_from_validator<E>(err: E, translator: Option<&dyn Translator>) -> Fault
where
    E: StdError + Send + Sync + 'static,
{
    let params =
        find_in_chain::<ValidationErrors>(&err).map(|failures| field_params(failures, translator));
    match params {
        Some(params) => Fault::wrap(Slug::Invalid, err).with_params(params),
        None => {
            debug!(error = %err, "validation error carried no field failures");
            Fault::wrap(Slug::Invalid, err)
        }
    }
}

/// Collect direct field failures into a parameter map.
fn field_params(failures: &ValidationErrors, translator: Option<&dyn Translator>) -> Params {
    let mut params = Params::new();
    for (field, errors) in failures.field_errors() {
        let key = field.to_lowercase();
        for error in errors {
            let message = translator
                .and_then(|t| t.translate(&key, error))
                .unwrap_or_else(|| error.to_string());
            params.insert(key.clone(), message);
        }
    }
    params
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
