use sea_orm::entity::prelude::*;
use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};

use crate::validate::{check_length, check_required};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "productid")]
    pub product_id: i16,
    #[sea_orm(column_name = "productname", column_type = "String(StringLen::N(40))")]
    pub product_name: String,
    #[sea_orm(column_name = "supplierid")]
    pub supplier_id: Option<i16>,
    #[sea_orm(column_name = "categoryid")]
    pub category_id: Option<i16>,
    #[sea_orm(
        column_name = "quantityperunit",
        column_type = "String(StringLen::N(20))",
        nullable
    )]
    pub quantity_per_unit: Option<String>,
    #[sea_orm(column_name = "unitprice")]
    pub unit_price: Option<f64>,
    #[sea_orm(column_name = "unitsinstock")]
    pub units_in_stock: Option<i16>,
    #[sea_orm(column_name = "unitsonorder")]
    pub units_on_order: Option<i16>,
    #[sea_orm(column_name = "reorderlevel")]
    pub reorder_level: Option<i16>,
    pub discontinued: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::supplier::Entity",
        from = "Column::SupplierId",
        to = "super::supplier::Column::SupplierId"
    )]
    Supplier,
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::CategoryId"
    )]
    Category,
    #[sea_orm(has_many = "super::order_detail::Entity")]
    OrderDetail,
}

impl Related<super::supplier::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Supplier.def()
    }
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
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
            check_required("products", "productid", &self.product_id)?;
            check_required("products", "productname", &self.product_name)?;
            check_required("products", "discontinued", &self.discontinued)?;
        }
        check_length("products", "productname", 40, &self.product_name)?;
        check_length("products", "quantityperunit", 20, &self.quantity_per_unit)?;
        Ok(self)
    }
}
