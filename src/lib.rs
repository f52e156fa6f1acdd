//! Nested-resource support for CRUD APIs built on Axum and Sea-ORM.
//!
//! URL hierarchies like `/roots/{parent_pk}/children/{id}` scope a child
//! collection to the parent named in the path. This crate provides the
//! pieces that make that work: a declarative mapping from path placeholders
//! to relational field paths ([`lookup`]), a pure filtering step that
//! narrows a collection query accordingly ([`filter`]), resource traits the
//! generic handlers build on ([`traits`]), the handlers themselves
//! ([`routes`]), and a router builder that keeps placeholder names and
//! mapping keys aligned ([`router`]).

pub mod errors;
pub mod filter;
pub mod lookup;
pub mod router;
pub mod routes;
pub mod traits;

pub use errors::ApiError;
pub use filter::{parent_condition, scope_to_parents};
pub use lookup::{LookupTarget, ParentLookup};
pub use router::{NestedRouter, collection_router};
pub use traits::{ApiResource, NestedResource};
