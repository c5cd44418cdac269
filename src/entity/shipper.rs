use sea_orm::entity::prelude::*;
use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};

use crate::validate::{check_length, check_required};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "shippers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "shipperid")]
    pub shipper_id: i16,
    #[sea_orm(column_name = "companyname", column_type = "String(StringLen::N(40))")]
    pub company_name: String,
    #[sea_orm(column_type = "String(StringLen::N(24))", nullable)]
    pub phone: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::order::Entity")]
    Order,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert {
            check_required("shippers", "shipperid", &self.shipper_id)?;
            check_required("shippers", "companyname", &self.company_name)?;
        }
        check_length("shippers", "companyname", 40, &self.company_name)?;
        check_length("shippers", "phone", 24, &self.phone)?;
        Ok(self)
    }
}
