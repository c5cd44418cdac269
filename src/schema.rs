//! DDL statements reproducing the Northwind table layout.
//!
//! The source schema declares foreign keys without on-delete/on-update
//! behavior; `Restrict` is applied throughout as the safe default. The
//! `usstates` table is created without a primary key, matching the source.

use sea_orm::{error::*, sea_query, ConnectionTrait, DbConn, ExecResult};
use sea_query::{ColumnDef, ForeignKey, ForeignKeyAction, Index, TableCreateStatement};
use tracing::debug;

use crate::entity::*;

async fn create_table(db: &DbConn, stmt: &TableCreateStatement) -> Result<ExecResult, DbErr> {
    debug!(table = ?stmt.get_table_name(), "creating table");
    let builder = db.get_database_backend();
    db.execute(builder.build(stmt)).await
}

/// Creates every table in foreign-key dependency order.
pub async fn create_all_tables(db: &DbConn) -> Result<(), DbErr> {
    create_categories_table(db).await?;
    create_customer_demographics_table(db).await?;
    create_customers_table(db).await?;
    create_employees_table(db).await?;
    create_region_table(db).await?;
    create_shippers_table(db).await?;
    create_suppliers_table(db).await?;
    create_us_states_table(db).await?;
    create_customer_customer_demo_table(db).await?;
    create_territories_table(db).await?;
    create_employee_territories_table(db).await?;
    create_products_table(db).await?;
    create_orders_table(db).await?;
    create_order_details_table(db).await?;

    Ok(())
}

pub async fn create_categories_table(db: &DbConn) -> Result<ExecResult, DbErr> {
    let stmt = sea_query::Table::create()
        .table(category::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(category::Column::CategoryId)
                .small_integer()
                .not_null()
                .primary_key(),
        )
        .col(
            ColumnDef::new(category::Column::CategoryName)
                .string_len(15)
                .not_null(),
        )
        .col(ColumnDef::new(category::Column::Description).text())
        .col(ColumnDef::new(category::Column::Picture).blob())
        .to_owned();

    create_table(db, &stmt).await
}

pub async fn create_customer_demographics_table(db: &DbConn) -> Result<ExecResult, DbErr> {
    let stmt = sea_query::Table::create()
        .table(customer_demographic::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(customer_demographic::Column::CustomerTypeId)
                .string_len(10)
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(customer_demographic::Column::CustomerDesc).text())
        .to_owned();

    create_table(db, &stmt).await
}

pub async fn create_customers_table(db: &DbConn) -> Result<ExecResult, DbErr> {
    let stmt = sea_query::Table::create()
        .table(customer::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(customer::Column::CustomerId)
                .string_len(5)
                .not_null()
                .primary_key(),
        )
        .col(
            ColumnDef::new(customer::Column::CompanyName)
                .string_len(40)
                .not_null(),
        )
        .col(ColumnDef::new(customer::Column::ContactName).string_len(30))
        .col(ColumnDef::new(customer::Column::ContactTitle).string_len(30))
        .col(ColumnDef::new(customer::Column::Address).string_len(60))
        .col(ColumnDef::new(customer::Column::City).string_len(15))
        .col(ColumnDef::new(customer::Column::Region).string_len(15))
        .col(ColumnDef::new(customer::Column::PostalCode).string_len(10))
        .col(ColumnDef::new(customer::Column::Country).string_len(15))
        .col(ColumnDef::new(customer::Column::Phone).string_len(24))
        .col(ColumnDef::new(customer::Column::Fax).string_len(24))
        .to_owned();

    create_table(db, &stmt).await
}

pub async fn create_employees_table(db: &DbConn) -> Result<ExecResult, DbErr> {
    let stmt = sea_query::Table::create()
        .table(employee::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(employee::Column::EmployeeId)
                .small_integer()
                .not_null()
                .primary_key(),
        )
        .col(
            ColumnDef::new(employee::Column::LastName)
                .string_len(20)
                .not_null(),
        )
        .col(
            ColumnDef::new(employee::Column::FirstName)
                .string_len(10)
                .not_null(),
        )
        .col(ColumnDef::new(employee::Column::Title).string_len(30))
        .col(ColumnDef::new(employee::Column::TitleOfCourtesy).string_len(25))
        .col(ColumnDef::new(employee::Column::BirthDate).date())
        .col(ColumnDef::new(employee::Column::HireDate).date())
        .col(ColumnDef::new(employee::Column::Address).string_len(60))
        .col(ColumnDef::new(employee::Column::City).string_len(15))
        .col(ColumnDef::new(employee::Column::Region).string_len(15))
        .col(ColumnDef::new(employee::Column::PostalCode).string_len(10))
        .col(ColumnDef::new(employee::Column::Country).string_len(15))
        .col(ColumnDef::new(employee::Column::HomePhone).string_len(24))
        .col(ColumnDef::new(employee::Column::Extension).string_len(4))
        .col(ColumnDef::new(employee::Column::Photo).blob())
        .col(ColumnDef::new(employee::Column::Notes).text())
        .col(ColumnDef::new(employee::Column::ReportsTo).small_integer())
        .col(ColumnDef::new(employee::Column::PhotoPath).string_len(255))
        .foreign_key(
            ForeignKey::create()
                .name("FK_employees_employees")
                .from(employee::Entity, employee::Column::ReportsTo)
                .to(employee::Entity, employee::Column::EmployeeId)
                .on_delete(ForeignKeyAction::Restrict)
                .on_update(ForeignKeyAction::Restrict),
        )
        .to_owned();

    create_table(db, &stmt).await
}

pub async fn create_region_table(db: &DbConn) -> Result<ExecResult, DbErr> {
    let stmt = sea_query::Table::create()
        .table(region::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(region::Column::RegionId)
                .small_integer()
                .not_null()
                .primary_key(),
        )
        .col(
            ColumnDef::new(region::Column::RegionDescription)
                .string_len(50)
                .not_null(),
        )
        .to_owned();

    create_table(db, &stmt).await
}

pub async fn create_shippers_table(db: &DbConn) -> Result<ExecResult, DbErr> {
    let stmt = sea_query::Table::create()
        .table(shipper::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(shipper::Column::ShipperId)
                .small_integer()
                .not_null()
                .primary_key(),
        )
        .col(
            ColumnDef::new(shipper::Column::CompanyName)
                .string_len(40)
                .not_null(),
        )
        .col(ColumnDef::new(shipper::Column::Phone).string_len(24))
        .to_owned();

    create_table(db, &stmt).await
}

pub async fn create_suppliers_table(db: &DbConn) -> Result<ExecResult, DbErr> {
    let stmt = sea_query::Table::create()
        .table(supplier::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(supplier::Column::SupplierId)
                .small_integer()
                .not_null()
                .primary_key(),
        )
        .col(
            ColumnDef::new(supplier::Column::CompanyName)
                .string_len(40)
                .not_null(),
        )
        .col(ColumnDef::new(supplier::Column::ContactName).string_len(30))
        .col(ColumnDef::new(supplier::Column::ContactTitle).string_len(30))
        .col(ColumnDef::new(supplier::Column::Address).string_len(60))
        .col(ColumnDef::new(supplier::Column::City).string_len(15))
        .col(ColumnDef::new(supplier::Column::Region).string_len(15))
        .col(ColumnDef::new(supplier::Column::PostalCode).string_len(10))
        .col(ColumnDef::new(supplier::Column::Country).string_len(15))
        .col(ColumnDef::new(supplier::Column::Phone).string_len(24))
        .col(ColumnDef::new(supplier::Column::Fax).string_len(24))
        .col(ColumnDef::new(supplier::Column::Homepage).text())
        .to_owned();

    create_table(db, &stmt).await
}

/// The source declares no primary key for `usstates`, so none is created.
pub async fn create_us_states_table(db: &DbConn) -> Result<ExecResult, DbErr> {
    let stmt = sea_query::Table::create()
        .table(us_state::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(us_state::Column::StateId)
                .small_integer()
                .not_null(),
        )
        .col(ColumnDef::new(us_state::Column::StateName).string_len(100))
        .col(ColumnDef::new(us_state::Column::StateAbbr).string_len(2))
        .col(ColumnDef::new(us_state::Column::StateRegion).string_len(50))
        .to_owned();

    create_table(db, &stmt).await
}

pub async fn create_customer_customer_demo_table(db: &DbConn) -> Result<ExecResult, DbErr> {
    let stmt = sea_query::Table::create()
        .table(customer_customer_demo::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(customer_customer_demo::Column::CustomerId)
                .string_len(5)
                .not_null(),
        )
        .col(
            ColumnDef::new(customer_customer_demo::Column::CustomerTypeId)
                .string_len(10)
                .not_null(),
        )
        .primary_key(
            Index::create()
                .col(customer_customer_demo::Column::CustomerId)
                .col(customer_customer_demo::Column::CustomerTypeId),
        )
        .foreign_key(
            ForeignKey::create()
                .name("FK_customercustomerdemo_customers")
                .from(
                    customer_customer_demo::Entity,
                    customer_customer_demo::Column::CustomerId,
                )
                .to(customer::Entity, customer::Column::CustomerId)
                .on_delete(ForeignKeyAction::Restrict)
                .on_update(ForeignKeyAction::Restrict),
        )
        .foreign_key(
            ForeignKey::create()
                .name("FK_customercustomerdemo_customerdemographics")
                .from(
                    customer_customer_demo::Entity,
                    customer_customer_demo::Column::CustomerTypeId,
                )
                .to(
                    customer_demographic::Entity,
                    customer_demographic::Column::CustomerTypeId,
                )
                .on_delete(ForeignKeyAction::Restrict)
                .on_update(ForeignKeyAction::Restrict),
        )
        .to_owned();

    create_table(db, &stmt).await
}

pub async fn create_territories_table(db: &DbConn) -> Result<ExecResult, DbErr> {
    let stmt = sea_query::Table::create()
        .table(territory::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(territory::Column::TerritoryId)
                .string_len(20)
                .not_null()
                .primary_key(),
        )
        .col(
            ColumnDef::new(territory::Column::TerritoryDescription)
                .string_len(50)
                .not_null(),
        )
        .col(
            ColumnDef::new(territory::Column::RegionId)
                .small_integer()
                .not_null(),
        )
        .foreign_key(
            ForeignKey::create()
                .name("FK_territories_region")
                .from(territory::Entity, territory::Column::RegionId)
                .to(region::Entity, region::Column::RegionId)
                .on_delete(ForeignKeyAction::Restrict)
                .on_update(ForeignKeyAction::Restrict),
        )
        .to_owned();

    create_table(db, &stmt).await
}

pub async fn create_employee_territories_table(db: &DbConn) -> Result<ExecResult, DbErr> {
    let stmt = sea_query::Table::create()
        .table(employee_territory::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(employee_territory::Column::EmployeeId)
                .small_integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(employee_territory::Column::TerritoryId)
                .string_len(20)
                .not_null(),
        )
        .primary_key(
            Index::create()
                .col(employee_territory::Column::EmployeeId)
                .col(employee_territory::Column::TerritoryId),
        )
        .foreign_key(
            ForeignKey::create()
                .name("FK_employeeterritories_employees")
                .from(
                    employee_territory::Entity,
                    employee_territory::Column::EmployeeId,
                )
                .to(employee::Entity, employee::Column::EmployeeId)
                .on_delete(ForeignKeyAction::Restrict)
                .on_update(ForeignKeyAction::Restrict),
        )
        .foreign_key(
            ForeignKey::create()
                .name("FK_employeeterritories_territories")
                .from(
                    employee_territory::Entity,
                    employee_territory::Column::TerritoryId,
                )
                .to(territory::Entity, territory::Column::TerritoryId)
                .on_delete(ForeignKeyAction::Restrict)
                .on_update(ForeignKeyAction::Restrict),
        )
        .to_owned();

    create_table(db, &stmt).await
}

pub async fn create_products_table(db: &DbConn) -> Result<ExecResult, DbErr> {
    let stmt = sea_query::Table::create()
        .table(product::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(product::Column::ProductId)
                .small_integer()
                .not_null()
                .primary_key(),
        )
        .col(
            ColumnDef::new(product::Column::ProductName)
                .string_len(40)
                .not_null(),
        )
        .col(ColumnDef::new(product::Column::SupplierId).small_integer())
        .col(ColumnDef::new(product::Column::CategoryId).small_integer())
        .col(ColumnDef::new(product::Column::QuantityPerUnit).string_len(20))
        .col(ColumnDef::new(product::Column::UnitPrice).double())
        .col(ColumnDef::new(product::Column::UnitsInStock).small_integer())
        .col(ColumnDef::new(product::Column::UnitsOnOrder).small_integer())
        .col(ColumnDef::new(product::Column::ReorderLevel).small_integer())
        .col(
            ColumnDef::new(product::Column::Discontinued)
                .integer()
                .not_null(),
        )
        .foreign_key(
            ForeignKey::create()
                .name("FK_products_suppliers")
                .from(product::Entity, product::Column::SupplierId)
                .to(supplier::Entity, supplier::Column::SupplierId)
                .on_delete(ForeignKeyAction::Restrict)
                .on_update(ForeignKeyAction::Restrict),
        )
        .foreign_key(
            ForeignKey::create()
                .name("FK_products_categories")
                .from(product::Entity, product::Column::CategoryId)
                .to(category::Entity, category::Column::CategoryId)
                .on_delete(ForeignKeyAction::Restrict)
                .on_update(ForeignKeyAction::Restrict),
        )
        .to_owned();

    create_table(db, &stmt).await
}

pub async fn create_orders_table(db: &DbConn) -> Result<ExecResult, DbErr> {
    let stmt = sea_query::Table::create()
        .table(order::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(order::Column::OrderId)
                .small_integer()
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(order::Column::CustomerId).string_len(5))
        .col(ColumnDef::new(order::Column::EmployeeId).small_integer())
        .col(ColumnDef::new(order::Column::OrderDate).date())
        .col(ColumnDef::new(order::Column::RequiredDate).date())
        .col(ColumnDef::new(order::Column::ShippedDate).date())
        .col(ColumnDef::new(order::Column::ShipVia).small_integer())
        .col(ColumnDef::new(order::Column::Freight).double())
        .col(ColumnDef::new(order::Column::ShipName).string_len(40))
        .col(ColumnDef::new(order::Column::ShipAddress).string_len(60))
        .col(ColumnDef::new(order::Column::ShipCity).string_len(15))
        .col(ColumnDef::new(order::Column::ShipRegion).string_len(15))
        .col(ColumnDef::new(order::Column::ShipPostalCode).string_len(10))
        .col(ColumnDef::new(order::Column::ShipCountry).string_len(15))
        .foreign_key(
            ForeignKey::create()
                .name("FK_orders_customers")
                .from(order::Entity, order::Column::CustomerId)
                .to(customer::Entity, customer::Column::CustomerId)
                .on_delete(ForeignKeyAction::Restrict)
                .on_update(ForeignKeyAction::Restrict),
        )
        .foreign_key(
            ForeignKey::create()
                .name("FK_orders_employees")
                .from(order::Entity, order::Column::EmployeeId)
                .to(employee::Entity, employee::Column::EmployeeId)
                .on_delete(ForeignKeyAction::Restrict)
                .on_update(ForeignKeyAction::Restrict),
        )
        .foreign_key(
            ForeignKey::create()
                .name("FK_orders_shippers")
                .from(order::Entity, order::Column::ShipVia)
                .to(shipper::Entity, shipper::Column::ShipperId)
                .on_delete(ForeignKeyAction::Restrict)
                .on_update(ForeignKeyAction::Restrict),
        )
        .to_owned();

    create_table(db, &stmt).await
}

pub async fn create_order_details_table(db: &DbConn) -> Result<ExecResult, DbErr> {
    let stmt = sea_query::Table::create()
        .table(order_detail::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(order_detail::Column::OrderId)
                .small_integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(order_detail::Column::ProductId)
                .small_integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(order_detail::Column::UnitPrice)
                .double()
                .not_null(),
        )
        .col(
            ColumnDef::new(order_detail::Column::Quantity)
                .small_integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(order_detail::Column::Discount)
                .double()
                .not_null(),
        )
        .primary_key(
            Index::create()
                .col(order_detail::Column::OrderId)
                .col(order_detail::Column::ProductId),
        )
        .foreign_key(
            ForeignKey::create()
                .name("FK_order_details_orders")
                .from(order_detail::Entity, order_detail::Column::OrderId)
                .to(order::Entity, order::Column::OrderId)
                .on_delete(ForeignKeyAction::Restrict)
                .on_update(ForeignKeyAction::Restrict),
        )
        .foreign_key(
            ForeignKey::create()
                .name("FK_order_details_products")
                .from(order_detail::Entity, order_detail::Column::ProductId)
                .to(product::Entity, product::Column::ProductId)
                .on_delete(ForeignKeyAction::Restrict)
                .on_update(ForeignKeyAction::Restrict),
        )
        .to_owned();

    create_table(db, &stmt).await
}
