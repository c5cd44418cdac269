use sea_orm::entity::prelude::*;
use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};

use crate::validate::{check_length, check_required};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "region")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "regionid")]
    pub region_id: i16,
    #[sea_orm(
        column_name = "regiondescription",
        column_type = "String(StringLen::N(50))"
    )]
    pub region_description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::territory::Entity")]
    Territory,
}

impl Related<super::territory::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Territory.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert {
            check_required("region", "regionid", &self.region_id)?;
            check_required("region", "regiondescription", &self.region_description)?;
        }
        check_length("region", "regiondescription", 50, &self.region_description)?;
        Ok(self)
    }
}
