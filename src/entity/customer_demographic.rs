use sea_orm::entity::prelude::*;
use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};

use crate::validate::{check_length, check_required};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customerdemographics")]
pub struct Model {
    #[sea_orm(
        primary_key,
        auto_increment = false,
        column_name = "customertypeid",
        column_type = "String(StringLen::N(10))"
    )]
    pub customer_type_id: String,
    #[sea_orm(column_name = "customerdesc", column_type = "Text", nullable)]
    pub customer_desc: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        super::customer_customer_demo::Relation::Customer.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            super::customer_customer_demo::Relation::CustomerDemographic
                .def()
                .rev(),
        )
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert {
            check_required("customerdemographics", "customertypeid", &self.customer_type_id)?;
        }
        check_length("customerdemographics", "customertypeid", 10, &self.customer_type_id)?;
        Ok(self)
    }
}
