use async_trait::async_trait;
use sea_orm::{
    Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, Select,
    entity::prelude::*,
};
use uuid::Uuid;

use crate::lookup::ParentLookup;

/// Contract between a resource's API model and the generic handlers.
///
/// Implementors wire a Sea-ORM entity to an API-facing struct and get
/// listing and retrieval for free. [`default_query`](Self::default_query) is
/// the collection's base query; everything the handlers run goes through it,
/// so overriding it is the place to add joins or standing restrictions.
#[async_trait]
pub trait ApiResource: Sized + Send + Sync
where
    Self::EntityType: EntityTrait + Sync,
    <Self::EntityType as EntityTrait>::Model: Sync,
    Self: From<<Self::EntityType as EntityTrait>::Model>,
{
    type EntityType: EntityTrait + Sync;
    type ColumnType: ColumnTrait + std::fmt::Debug;

    const ID_COLUMN: Self::ColumnType;
    const RESOURCE_NAME_SINGULAR: &str;
    const RESOURCE_NAME_PLURAL: &str;
    const RESOURCE_DESCRIPTION: &'static str = "";

    /// Path placeholder naming this resource's own key in detail routes,
    /// `id` unless overridden. A resource that also acts as a parent in
    /// nested URLs should use its parent placeholder here (for example
    /// `parent_pk`) so its detail route and the nested prefixes agree on one
    /// name, which axum requires for routes sharing a position.
    const ID_PARAM: &'static str = "id";

    /// The collection's base query, before any parent narrowing.
    ///
    /// Override to add the joins that relation-crossing lookup paths rely
    /// on, and `distinct()` if those joins can multiply rows.
    #[must_use]
    fn default_query() -> Select<Self::EntityType> {
        Self::EntityType::find()
    }

    /// Lists the collection narrowed by `condition`.
    ///
    /// # Errors
    ///
    /// Returns any database error unmodified, including errors for lookup
    /// field paths that do not resolve.
    async fn get_all(db: &DatabaseConnection, condition: Condition) -> Result<Vec<Self>, DbErr> {
        let models = Self::default_query().filter(condition).all(db).await?;
        Ok(models.into_iter().map(Self::from).collect())
    }

    /// Fetches one record by id within the scope of `condition`.
    ///
    /// A record that exists but falls outside the condition (for example a
    /// child addressed under the wrong parent) is reported as not found.
    ///
    /// # Errors
    ///
    /// Returns `DbErr::RecordNotFound` when no record matches, other
    /// database errors unmodified.
    async fn get_one(db: &DatabaseConnection, id: Uuid, condition: Condition) -> Result<Self, DbErr> {
        let model = Self::default_query()
            .filter(Self::ID_COLUMN.eq(id))
            .filter(condition)
            .one(db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "{} not found",
                Self::RESOURCE_NAME_SINGULAR
            )))?;
        Ok(Self::from(model))
    }

    /// Counts the collection narrowed by `condition`.
    ///
    /// # Errors
    ///
    /// Returns any database error unmodified.
    async fn total_count(db: &DatabaseConnection, condition: Condition) -> Result<u64, DbErr> {
        let query = Self::default_query().filter(condition);
        PaginatorTrait::count(query, db).await
    }
}

/// A resource whose visibility is scoped by ancestors in the URL hierarchy.
///
/// The mapping is fixed per resource type. Two declaration points exist,
/// with a documented precedence: handlers consult
/// [`parent_lookups`](Self::parent_lookups), whose default implementation
/// falls back to [`link_lookups`](Self::link_lookups). Overriding
/// `parent_lookups` therefore always wins; overriding only `link_lookups`
/// shares one mapping between filtering and link generation; overriding
/// neither leaves the collection unfiltered, which is deliberate behavior
/// for resources mounted on nested routes without parent scoping.
pub trait NestedResource: ApiResource {
    /// Lookup entries declared with the resource's representation,
    /// conventionally shared with hyperlinked URL generation.
    #[must_use]
    fn link_lookups() -> Vec<ParentLookup> {
        Vec::new()
    }

    /// The mapping list and retrieve handlers filter by. Defaults to
    /// [`link_lookups`](Self::link_lookups).
    #[must_use]
    fn parent_lookups() -> Vec<ParentLookup> {
        Self::link_lookups()
    }
}
