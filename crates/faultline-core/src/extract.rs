// SPDX-License-Identifier: MIT OR Apache-2.0
//! Extraction of classification, detail, and parameters from arbitrary
//! errors.
//!
//! Every function here degrades gracefully: when the error does not carry a
//! [`Fault`] anywhere in its source chain, a documented fallback comes back
//! instead of a panic, so a transport layer can always produce a well-formed
//! response.

use crate::fault::{Fault, Params};
use crate::slug::Slug;
use std::error::Error as StdError;

/// Fallback detail text when no fault is recoverable from an error.
pub const UNKNOWN_DETAIL: &str = "unknown error";

/// Deep-unwrap search: the first error of concrete type `T` in `err`'s
/// source chain, `err` itself included.
///
/// This is the one place chain-walking lives; every extractor (and the
/// validation import) goes through it.
pub fn find_in_chain<'a, T>(err: &'a (dyn StdError + 'static)) -> Option<&'a T>
where
    T: StdError + 'static,
{
    let mut current: Option<&(dyn StdError + 'static)> = Some(err);
    while let Some(e) = current {
        if let Some(found) = e.downcast_ref::<T>() {
            return Some(found);
        }
        current = e.source();
    }
    None
}

/// The first [`Fault`] in `err`'s source chain, if any.
pub fn find_fault<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a Fault> {
    find_in_chain::<Fault>(err)
}

/// The classification of `err`, or [`Slug::Unknown`] when no fault is
/// recoverable.
pub fn classification_of(err: &(dyn StdError + 'static)) -> Slug {
    find_fault(err).map_or(Slug::Unknown, |f| f.slug().clone())
}

/// The detail text of `err`, or the literal [`UNKNOWN_DETAIL`] fallback
/// when no fault is recoverable. A recovered fault with no detail yields
/// the empty string.
pub fn detail_of(err: &(dyn StdError + 'static)) -> String {
    find_fault(err).map_or_else(|| UNKNOWN_DETAIL.to_string(), |f| f.detail().to_string())
}

/// The parameters of `err`, or an empty map when no fault is recoverable.
/// The entries are copied out; the returned map is the caller's own.
pub fn params_of(err: &(dyn StdError + 'static)) -> Params {
    find_fault(err).map(|f| f.params().clone()).unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;
    use std::io;

    /// Opaque wrapper standing in for a dependency's error type.
    #[derive(Debug)]
    struct Wrapped {
        context: &'static str,
        inner: Box<dyn StdError + Send + Sync>,
    }

    impl fmt::Display for Wrapped {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}: {}", self.context, self.inner)
        }
    }

    impl StdError for Wrapped {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(self.inner.as_ref() as &(dyn StdError + 'static))
        }
    }

    fn wrap_once(context: &'static str, inner: impl StdError + Send + Sync + 'static) -> Wrapped {
        Wrapped {
            context,
            inner: Box::new(inner),
        }
    }

    #[test]
    fn finds_fault_at_top_level() {
        let fault = Fault::new(Slug::NotFound);
        assert_eq!(classification_of(&fault), Slug::NotFound);
    }

    #[test]
    fn finds_fault_under_generic_wrapping() {
        let err = wrap_once("handler", wrap_once("repo", Fault::new(Slug::Duplicate)));
        assert_eq!(classification_of(&err), Slug::Duplicate);
    }

    #[test]
    fn unknown_when_no_fault_in_chain() {
        let err = wrap_once("handler", io::Error::other("raw"));
        assert_eq!(classification_of(&err), Slug::Unknown);
    }

    #[test]
    fn detail_recovered_through_chain() {
        let err = wrap_once("svc", Fault::new(Slug::Invalid).with_details("bad email"));
        assert_eq!(detail_of(&err), "bad email");
    }

    #[test]
    fn detail_falls_back_to_unknown_error() {
        let err = io::Error::other("whatever");
        assert_eq!(detail_of(&err), UNKNOWN_DETAIL);
    }

    #[test]
    fn detail_of_fault_without_detail_is_empty() {
        let fault = Fault::new(Slug::Internal);
        assert_eq!(detail_of(&fault), "");
    }

    #[test]
    fn params_recovered_through_chain() {
        let fault = Fault::new(Slug::Invalid).with_param("email", "required");
        let err = wrap_once("svc", fault);
        let params = params_of(&err);
        assert_eq!(params.get("email").map(String::as_str), Some("required"));
    }

    #[test]
    fn params_fall_back_to_empty() {
        let err = io::Error::other("nope");
        assert!(params_of(&err).is_empty());
    }

    #[test]
    fn shallowest_fault_wins() {
        let inner = Fault::new(Slug::Internal);
        let outer = Fault::new(Slug::NotFound).with_error(inner);
        assert_eq!(classification_of(&outer), Slug::NotFound);
    }

    #[test]
    fn find_in_chain_matches_concrete_types() {
        let err = wrap_once("io layer", io::Error::other("reset"));
        assert!(find_in_chain::<io::Error>(&err).is_some());
        assert!(find_in_chain::<Fault>(&err).is_none());
    }
}
