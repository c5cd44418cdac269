use sea_orm::entity::prelude::*;
use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};

use crate::validate::check_required;

/// An order line, keyed by the (order, product) pair. Unlike the pure
/// junction tables this one carries payload, and both foreign keys are
/// required.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "order_details")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "orderid")]
    pub order_id: i16,
    #[sea_orm(primary_key, auto_increment = false, column_name = "productid")]
    pub product_id: i16,
    #[sea_orm(column_name = "unitprice")]
    pub unit_price: f64,
    pub quantity: i16,
    pub discount: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::OrderId"
    )]
    Order,
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::ProductId"
    )]
    Product,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
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
            check_required("order_details", "orderid", &self.order_id)?;
            check_required("order_details", "productid", &self.product_id)?;
            check_required("order_details", "unitprice", &self.unit_price)?;
            check_required("order_details", "quantity", &self.quantity)?;
            check_required("order_details", "discount", &self.discount)?;
        }
        Ok(self)
    }
}
