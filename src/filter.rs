//! Narrowing a collection query to the parents named in the URL path.
//!
//! This is a pure derivation: given a resource's lookup mapping and the
//! request's resolved path parameters, [`parent_condition`] builds the
//! conjunctive filter and [`scope_to_parents`] applies it to the resource's
//! default query. Nothing is mutated or cached; the operation either returns
//! a narrowed query or fails on the first placeholder missing from the
//! request.

use sea_orm::{
    Condition, QueryFilter, Select,
    sea_query::{Alias, Expr, SimpleExpr},
};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

use crate::lookup::{LookupTarget, ParentLookup};
use crate::traits::NestedResource;

/// A placeholder declared in a resource's lookup mapping was absent from the
/// request's resolved path parameters.
///
/// This indicates a route/mapping mismatch, not bad client input, and is
/// surfaced as a server error by the bundled handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingParamError {
    /// The placeholder name that failed to resolve.
    pub param: String,
}

impl fmt::Display for MissingParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "path parameter '{}' not found in request", self.param)
    }
}

impl std::error::Error for MissingParamError {}

/// Column expression for a lookup field path. A dotted path names a column
/// on a table joined by the resource's default query.
fn path_column(path: &str) -> Expr {
    match path.rsplit_once('.') {
        Some((table, column)) => Expr::col((Alias::new(table), Alias::new(column))),
        None => Expr::col(Alias::new(path)),
    }
}

/// Equality term for a field path against a raw path-parameter value.
///
/// Path values arrive as strings; compare as UUID or integer when the value
/// parses as one, otherwise as the raw string. Anything beyond that (a value
/// the column type rejects, a path that resolves to nothing) is the
/// database's to report.
fn path_eq(path: &str, raw: &str) -> SimpleExpr {
    let column = path_column(path);
    if let Ok(uuid) = Uuid::parse_str(raw) {
        column.eq(uuid)
    } else if let Ok(int) = raw.parse::<i64>() {
        column.eq(int)
    } else {
        column.eq(raw)
    }
}

/// Builds the parent filter for a lookup mapping: one conjunctive term per
/// entry, where a [`LookupTarget::AnyOf`] entry contributes a disjunction of
/// equality terms compared against the same placeholder value.
///
/// An empty mapping yields an empty conjunction, which filters nothing.
///
/// # Errors
///
/// Returns [`MissingParamError`] if any placeholder in the mapping is absent
/// from `path_params`. No filtering happens in that case.
pub fn parent_condition(
    lookups: &[ParentLookup],
    path_params: &HashMap<String, String>,
) -> Result<Condition, MissingParamError> {
    let mut condition = Condition::all();
    for lookup in lookups {
        let value = path_params
            .get(lookup.param())
            .ok_or_else(|| MissingParamError {
                param: lookup.param().to_string(),
            })?;
        match lookup.target() {
            LookupTarget::Field(path) => {
                condition = condition.add(path_eq(path, value));
            }
            LookupTarget::AnyOf(paths) => {
                let mut any = Condition::any();
                for path in paths {
                    any = any.add(path_eq(path, value));
                }
                condition = condition.add(any);
            }
        }
    }
    Ok(condition)
}

/// Applies a resource's parent lookups to a base query.
///
/// Resources without lookups get the base query back untouched; exposing the
/// full collection on a nested route is deliberate for such resources, not
/// an error.
///
/// # Errors
///
/// Returns [`MissingParamError`] if a declared placeholder is absent from
/// `path_params`.
pub fn scope_to_parents<T>(
    select: Select<T::EntityType>,
    path_params: &HashMap<String, String>,
) -> Result<Select<T::EntityType>, MissingParamError>
where
    T: NestedResource,
{
    let lookups = T::parent_lookups();
    if lookups.is_empty() {
        return Ok(select);
    }
    Ok(select.filter(parent_condition(&lookups, path_params)?))
}
