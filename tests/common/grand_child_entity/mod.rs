use async_trait::async_trait;
use nestcrate::lookup::ParentLookup;
use nestcrate::traits::{ApiResource, NestedResource};
use sea_orm::{FromQueryResult, JoinType, QuerySelect, Select, entity::prelude::*};
use serde::{Deserialize, Serialize};

/// Grand-children relate to a root in two ways: a preferred single relation
/// and a many-to-many link table. Either one satisfies "belongs to this
/// parent".
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "grand_children")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    pub preferred_root_id: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::root_entity::Entity",
        from = "Column::PreferredRootId",
        to = "super::root_entity::Column::Id"
    )]
    PreferredRoot,
    #[sea_orm(has_many = "link::Entity")]
    RootLinks,
}

impl Related<link::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RootLinks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub mod link {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "grand_child_roots")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub grand_child_id: Uuid,
        #[sea_orm(primary_key, auto_increment = false)]
        pub root_id: Uuid,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::Entity",
            from = "Column::GrandChildId",
            to = "super::Column::Id"
        )]
        GrandChild,
        #[sea_orm(
            belongs_to = "super::super::root_entity::Entity",
            from = "Column::RootId",
            to = "super::super::root_entity::Column::Id"
        )]
        Root,
    }

    impl Related<super::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::GrandChild.def()
        }
    }

    impl Related<super::super::root_entity::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Root.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

#[derive(Serialize, Deserialize, FromQueryResult, Clone, Debug, PartialEq)]
pub struct GrandChild {
    pub id: Uuid,
    pub name: String,
    pub preferred_root_id: Option<Uuid>,
}

impl From<Model> for GrandChild {
    fn from(model: Model) -> Self {
        GrandChild {
            id: model.id,
            name: model.name,
            preferred_root_id: model.preferred_root_id,
        }
    }
}

#[async_trait]
impl ApiResource for GrandChild {
    type EntityType = Entity;
    type ColumnType = Column;

    const ID_COLUMN: Self::ColumnType = Column::Id;
    const RESOURCE_NAME_SINGULAR: &'static str = "grand child";
    const RESOURCE_NAME_PLURAL: &'static str = "grand children";
    const RESOURCE_DESCRIPTION: &'static str = "Grand children matched through either relation";

    // The link-table lookup path crosses a relation, so the base query
    // carries the join; distinct keeps multi-linked records from repeating.
    fn default_query() -> Select<Entity> {
        Entity::find()
            .join(JoinType::LeftJoin, Relation::RootLinks.def())
            .distinct()
    }
}

impl NestedResource for GrandChild {
    // Declared on the representation side; handlers pick it up through the
    // default precedence.
    fn link_lookups() -> Vec<ParentLookup> {
        vec![ParentLookup::any_of(
            "parent_pk",
            ["preferred_root_id", "grand_child_roots.root_id"],
        )]
    }
}
