use async_trait::async_trait;
use chrono::{DateTime, Utc};
use nestcrate::lookup::ParentLookup;
use nestcrate::traits::{ApiResource, NestedResource};
use sea_orm::{FromQueryResult, entity::prelude::*};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "children")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    pub parent_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::root_entity::Entity",
        from = "Column::ParentId",
        to = "super::root_entity::Column::Id"
    )]
    Root,
}

impl Related<super::root_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Root.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Child scoped to the parent named in the URL.
#[derive(Serialize, Deserialize, FromQueryResult, Clone, Debug, PartialEq)]
pub struct Child {
    pub id: Uuid,
    pub name: String,
    pub parent_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<Model> for Child {
    fn from(model: Model) -> Self {
        Child {
            id: model.id,
            name: model.name,
            parent_id: model.parent_id,
            created_at: model.created_at,
        }
    }
}

#[async_trait]
impl ApiResource for Child {
    type EntityType = Entity;
    type ColumnType = Column;

    const ID_COLUMN: Self::ColumnType = Column::Id;
    const RESOURCE_NAME_SINGULAR: &'static str = "child";
    const RESOURCE_NAME_PLURAL: &'static str = "children";
    const RESOURCE_DESCRIPTION: &'static str = "Children scoped to their parent root";
}

impl NestedResource for Child {
    fn parent_lookups() -> Vec<ParentLookup> {
        vec![ParentLookup::field("parent_pk", "parent_id")]
    }
}

/// The same records without parent scoping. Mounted on the same nested path
/// shape to show the unfiltered baseline.
#[derive(Serialize, Deserialize, FromQueryResult, Clone, Debug, PartialEq)]
pub struct UnscopedChild {
    pub id: Uuid,
    pub name: String,
    pub parent_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<Model> for UnscopedChild {
    fn from(model: Model) -> Self {
        UnscopedChild {
            id: model.id,
            name: model.name,
            parent_id: model.parent_id,
            created_at: model.created_at,
        }
    }
}

#[async_trait]
impl ApiResource for UnscopedChild {
    type EntityType = Entity;
    type ColumnType = Column;

    const ID_COLUMN: Self::ColumnType = Column::Id;
    const RESOURCE_NAME_SINGULAR: &'static str = "child";
    const RESOURCE_NAME_PLURAL: &'static str = "children";
    const RESOURCE_DESCRIPTION: &'static str = "Children without parent scoping";
}

impl NestedResource for UnscopedChild {}
