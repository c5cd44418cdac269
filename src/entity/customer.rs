use sea_orm::entity::prelude::*;
use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};

use crate::validate::{check_length, check_required};

/// Customers are keyed by an opaque five-character code, Northwind style
/// (`"ALFKI"`, `"ANATR"`, ...).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(
        primary_key,
        auto_increment = false,
        column_name = "customerid",
        column_type = "String(StringLen::N(5))"
    )]
    pub customer_id: String,
    #[sea_orm(column_name = "companyname", column_type = "String(StringLen::N(40))")]
    pub company_name: String,
    #[sea_orm(
        column_name = "contactname",
        column_type = "String(StringLen::N(30))",
        nullable
    )]
    pub contact_name: Option<String>,
    #[sea_orm(
        column_name = "contacttitle",
        column_type = "String(StringLen::N(30))",
        nullable
    )]
    pub contact_title: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(60))", nullable)]
    pub address: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(15))", nullable)]
    pub city: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(15))", nullable)]
    pub region: Option<String>,
    #[sea_orm(
        column_name = "postalcode",
        column_type = "String(StringLen::N(10))",
        nullable
    )]
    pub postal_code: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(15))", nullable)]
    pub country: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(24))", nullable)]
    pub phone: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(24))", nullable)]
    pub fax: Option<String>,
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

impl Related<super::customer_demographic::Entity> for Entity {
    fn to() -> RelationDef {
        super::customer_customer_demo::Relation::CustomerDemographic.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::customer_customer_demo::Relation::Customer.def().rev())
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert {
            check_required("customers", "customerid", &self.customer_id)?;
            check_required("customers", "companyname", &self.company_name)?;
        }
        check_length("customers", "customerid", 5, &self.customer_id)?;
        check_length("customers", "companyname", 40, &self.company_name)?;
        check_length("customers", "contactname", 30, &self.contact_name)?;
        check_length("customers", "contacttitle", 30, &self.contact_title)?;
        check_length("customers", "address", 60, &self.address)?;
        check_length("customers", "city", 15, &self.city)?;
        check_length("customers", "region", 15, &self.region)?;
        check_length("customers", "postalcode", 10, &self.postal_code)?;
        check_length("customers", "country", 15, &self.country)?;
        check_length("customers", "phone", 24, &self.phone)?;
        check_length("customers", "fax", 24, &self.fax)?;
        Ok(self)
    }
}
