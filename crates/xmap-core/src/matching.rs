//! Base-name matching between models.
//!
//! Like models in a display are conventionally numbered variants of one
//! name (`Tree-1`, `Tree-2`, `Arch3`). Auto matching strips the trailing
//! digits and `-` separator and groups models whose remaining base name
//! is identical.

use crate::catalog::Catalog;
use crate::errors::ResolveError;

/// How mapping targets are chosen for a primary model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Explicit, user-chosen target names, in the order given.
    Explicit(Vec<String>),
    /// Every catalog model sharing the primary's base name.
    Auto,
}

/// Strip trailing ASCII digits and `-` from a model name.
///
/// Only the right end is touched; interior digits and separators
/// survive (`"A1-B2"` yields `"A1-B"`). Underscores and other
/// separators are never stripped.
#[must_use]
pub fn base_name(name: &str) -> &str {
    name.trim_end_matches(|c: char| c.is_ascii_digit() || c == '-')
}

/// Resolve the mapping targets for `primary`.
///
/// Explicit selections are validated against the catalog and
/// de-duplicated preserving first-occurrence order. Auto selections are
/// a pure function of the catalog contents and come back in ascending
/// lexical order, never including the primary itself.
///
/// # Errors
///
/// - [`ResolveError::UnknownPrimary`] when `primary` is not in the catalog
/// - [`ResolveError::UnknownTarget`] / [`ResolveError::TargetIsPrimary`]
///   when an explicit name is invalid
/// - [`ResolveError::EmptySelection`] when the explicit list is empty
/// - [`ResolveError::NoMatch`] when auto matching finds nothing
pub fn resolve_targets(
    catalog: &Catalog,
    primary: &str,
    selection: &Selection,
) -> Result<Vec<String>, ResolveError> {
    if !catalog.contains(primary) {
        return Err(ResolveError::UnknownPrimary {
            name: primary.to_string(),
        });
    }

    match selection {
        Selection::Explicit(names) => {
            let mut targets: Vec<String> = Vec::with_capacity(names.len());
            for name in names {
                if name == primary {
                    return Err(ResolveError::TargetIsPrimary { name: name.clone() });
                }
                if !catalog.contains(name) {
                    return Err(ResolveError::UnknownTarget { name: name.clone() });
                }
                if !targets.contains(name) {
                    targets.push(name.clone());
                }
            }
            if targets.is_empty() {
                return Err(ResolveError::EmptySelection);
            }
            Ok(targets)
        }
        Selection::Auto => {
            let base = base_name(primary);
            // Catalog iteration is name-ordered, so the matches are
            // already lexically ascending.
            let targets: Vec<String> = catalog
                .names()
                .filter(|name| *name != primary && base_name(name) == base)
                .map(ToString::to_string)
                .collect();
            if targets.is_empty() {
                return Err(ResolveError::NoMatch {
                    primary: primary.to_string(),
                });
            }
            tracing::debug!(primary, matches = targets.len(), "matched models by base name");
            Ok(targets)
        }
    }
}
