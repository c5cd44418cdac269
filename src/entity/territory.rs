use sea_orm::entity::prelude::*;
use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};

use crate::validate::{check_length, check_required};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "territories")]
pub struct Model {
    #[sea_orm(
        primary_key,
        auto_increment = false,
        column_name = "territoryid",
        column_type = "String(StringLen::N(20))"
    )]
    pub territory_id: String,
    #[sea_orm(
        column_name = "territorydescription",
        column_type = "String(StringLen::N(50))"
    )]
    pub territory_description: String,
    #[sea_orm(column_name = "regionid")]
    pub region_id: i16,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::region::Entity",
        from = "Column::RegionId",
        to = "super::region::Column::RegionId"
    )]
    Region,
}

impl Related<super::region::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Region.def()
    }
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        super::employee_territory::Relation::Employee.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::employee_territory::Relation::Territory.def().rev())
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert {
            check_required("territories", "territoryid", &self.territory_id)?;
            check_required(
                "territories",
                "territorydescription",
                &self.territory_description,
            )?;
            check_required("territories", "regionid", &self.region_id)?;
        }
        check_length("territories", "territoryid", 20, &self.territory_id)?;
        check_length(
            "territories",
            "territorydescription",
            50,
            &self.territory_description,
        )?;
        Ok(self)
    }
}
