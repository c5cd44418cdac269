use sea_orm::entity::prelude::*;
use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};

use crate::validate::{check_length, check_required};

/// An order snapshots its ship-to address instead of referencing the
/// customer's; the customer, employee and shipper links are all optional.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "orderid")]
    pub order_id: i16,
    #[sea_orm(
        column_name = "customerid",
        column_type = "String(StringLen::N(5))",
        nullable
    )]
    pub customer_id: Option<String>,
    #[sea_orm(column_name = "employeeid")]
    pub employee_id: Option<i16>,
    #[sea_orm(column_name = "orderdate")]
    pub order_date: Option<Date>,
    #[sea_orm(column_name = "requireddate")]
    pub required_date: Option<Date>,
    #[sea_orm(column_name = "shippeddate")]
    pub shipped_date: Option<Date>,
    #[sea_orm(column_name = "shipvia")]
    pub ship_via: Option<i16>,
    pub freight: Option<f64>,
    #[sea_orm(
        column_name = "shipname",
        column_type = "String(StringLen::N(40))",
        nullable
    )]
    pub ship_name: Option<String>,
    #[sea_orm(
        column_name = "shipaddress",
        column_type = "String(StringLen::N(60))",
        nullable
    )]
    pub ship_address: Option<String>,
    #[sea_orm(
        column_name = "shipcity",
        column_type = "String(StringLen::N(15))",
        nullable
    )]
    pub ship_city: Option<String>,
    #[sea_orm(
        column_name = "shipregion",
        column_type = "String(StringLen::N(15))",
        nullable
    )]
    pub ship_region: Option<String>,
    #[sea_orm(
        column_name = "shippostalcode",
        column_type = "String(StringLen::N(10))",
        nullable
    )]
    pub ship_postal_code: Option<String>,
    #[sea_orm(
        column_name = "shipcountry",
        column_type = "String(StringLen::N(15))",
        nullable
    )]
    pub ship_country: Option<String>,
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
        belongs_to = "super::employee::Entity",
        from = "Column::EmployeeId",
        to = "super::employee::Column::EmployeeId"
    )]
    Employee,
    #[sea_orm(
        belongs_to = "super::shipper::Entity",
        from = "Column::ShipVia",
        to = "super::shipper::Column::ShipperId"
    )]
    Shipper,
    #[sea_orm(has_many = "super::order_detail::Entity")]
    OrderDetail,
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl Related<super::shipper::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Shipper.def()
    }
}

impl Related<super::order_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderDetail.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert {
            check_required("orders", "orderid", &self.order_id)?;
        }
        check_length("orders", "customerid", 5, &self.customer_id)?;
        check_length("orders", "shipname", 40, &self.ship_name)?;
        check_length("orders", "shipaddress", 60, &self.ship_address)?;
        check_length("orders", "shipcity", 15, &self.ship_city)?;
        check_length("orders", "shipregion", 15, &self.ship_region)?;
        check_length("orders", "shippostalcode", 10, &self.ship_postal_code)?;
        check_length("orders", "shipcountry", 15, &self.ship_country)?;
        Ok(self)
    }
}
