use sea_orm::entity::prelude::*;
use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};

use crate::validate::check_required;

/// Junction realizing the many-to-many relationship between employees and
/// sales territories.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employeeterritories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "employeeid")]
    pub employee_id: i16,
    #[sea_orm(
        primary_key,
        auto_increment = false,
        column_name = "territoryid",
        column_type = "String(StringLen::N(20))"
    )]
    pub territory_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::EmployeeId",
        to = "super::employee::Column::EmployeeId"
    )]
    Employee,
    #[sea_orm(
        belongs_to = "super::territory::Entity",
        from = "Column::TerritoryId",
        to = "super::territory::Column::TerritoryId"
    )]
    Territory,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
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
            check_required("employeeterritories", "employeeid", &self.employee_id)?;
            check_required("employeeterritories", "territoryid", &self.territory_id)?;
        }
        Ok(self)
    }
}
