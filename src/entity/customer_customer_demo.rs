use sea_orm::entity::prelude::*;
use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};

use crate::validate::check_required;

/// Junction realizing the many-to-many relationship between customers and
/// customer demographics. Carries nothing but the two foreign keys; its
/// composite primary key makes duplicate associations impossible.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customercustomerdemo")]
pub struct Model {
    #[sea_orm(
        primary_key,
        auto_increment = false,
        column_name = "customerid",
        column_type = "String(StringLen::N(5))"
    )]
    pub customer_id: String,
    #[sea_orm(
        primary_key,
        auto_increment = false,
        column_name = "customertypeid",
        column_type = "String(StringLen::N(10))"
    )]
    pub customer_type_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::CustomerId"
    )]
    Customer,
    #[sea_orm(
        belongs_to = "super::customer_demographic::Entity",
        from = "Column::CustomerTypeId",
        to = "super::customer_demographic::Column::CustomerTypeId"
    )]
    CustomerDemographic,
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::customer_demographic::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CustomerDemographic.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert {
            check_required("customercustomerdemo", "customerid", &self.customer_id)?;
            check_required("customercustomerdemo", "customertypeid", &self.customer_type_id)?;
        }
        Ok(self)
    }
}
