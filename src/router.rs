//! Router assembly for nested collections.
//!
//! The builder keeps URL placeholder names and lookup mapping keys aligned
//! by construction: registering children under a parent named with
//! `lookup = "parent"` produces the `parent_pk` placeholder, which is the
//! key a child's lookup mapping should use.

use axum::{Router, routing::get};
use sea_orm::DatabaseConnection;
use serde::Serialize;

use crate::routes;
use crate::traits::NestedResource;

/// Placeholder name generated for a parent lookup: `"parent"` becomes
/// `"parent_pk"`.
#[must_use]
pub fn lookup_param(lookup: &str) -> String {
    format!("{lookup}_pk")
}

/// Routes for one collection: list at `/` and retrieve at the placeholder
/// named by the resource's `ID_PARAM`.
///
/// Works for top-level and nested collections alike; mounted under a nested
/// prefix, the handlers pick the parent placeholders up from the path.
pub fn collection_router<T>(db: &DatabaseConnection) -> Router
where
    T: NestedResource + Serialize + 'static,
{
    Router::new()
        .route("/", get(routes::get_all::<T>))
        .route(
            &format!("/{{{}}}", T::ID_PARAM),
            get(routes::get_one::<T>),
        )
        .with_state(db.clone())
}

/// Builds routes for collections nested under a parent resource.
///
/// ```rust,ignore
/// let nested = NestedRouter::new("roots", "parent")
///     .register::<Child>("children", &db)
///     .into_router();
/// let app = Router::new()
///     .nest("/roots", collection_router::<Root>(&db))
///     .merge(nested);
/// ```
///
/// mounts `/roots/{parent_pk}/children` and
/// `/roots/{parent_pk}/children/{id}`. Note that axum requires one
/// placeholder name per path position, so the parent resource's `ID_PARAM`
/// should equal the generated lookup placeholder (here `parent_pk`) when the
/// parent also exposes a detail route.
pub struct NestedRouter {
    prefix: String,
    router: Router,
}

impl NestedRouter {
    /// Starts a prefix under `/{collection}/{<lookup>_pk}`.
    #[must_use]
    pub fn new(collection: &str, lookup: &str) -> Self {
        Self {
            prefix: format!("/{collection}/{{{}}}", lookup_param(lookup)),
            router: Router::new(),
        }
    }

    /// Registers a child collection under the parent prefix at `segment`.
    #[must_use]
    pub fn register<T>(mut self, segment: &str, db: &DatabaseConnection) -> Self
    where
        T: NestedResource + Serialize + 'static,
    {
        self.router = self.router.nest(
            &format!("{}/{segment}", self.prefix),
            collection_router::<T>(db),
        );
        self
    }

    /// Starts a sibling builder one level deeper, for grand-child
    /// hierarchies. The returned builder carries no routes of its own yet.
    #[must_use]
    pub fn nested(&self, collection: &str, lookup: &str) -> Self {
        Self {
            prefix: format!(
                "{}/{collection}/{{{}}}",
                self.prefix,
                lookup_param(lookup)
            ),
            router: Router::new(),
        }
    }

    /// The accumulated path prefix, e.g. `/roots/{parent_pk}`.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Finishes the builder, yielding the registered routes.
    #[must_use]
    pub fn into_router(self) -> Router {
        self.router
    }
}
