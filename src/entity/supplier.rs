use sea_orm::entity::prelude::*;
use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};

use crate::validate::{check_length, check_required};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "suppliers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "supplierid")]
    pub supplier_id: i16,
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
    #[sea_orm(column_type = "Text", nullable)]
    pub homepage: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::product::Entity")]
    Product,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert {
            check_required("suppliers", "supplierid", &self.supplier_id)?;
            check_required("suppliers", "companyname", &self.company_name)?;
        }
        check_length("suppliers", "companyname", 40, &self.company_name)?;
        check_length("suppliers", "contactname", 30, &self.contact_name)?;
        check_length("suppliers", "contacttitle", 30, &self.contact_title)?;
        check_length("suppliers", "address", 60, &self.address)?;
        check_length("suppliers", "city", 15, &self.city)?;
        check_length("suppliers", "region", 15, &self.region)?;
        check_length("suppliers", "postalcode", 10, &self.postal_code)?;
        check_length("suppliers", "country", 15, &self.country)?;
        check_length("suppliers", "phone", 24, &self.phone)?;
        check_length("suppliers", "fax", 24, &self.fax)?;
        Ok(self)
    }
}
