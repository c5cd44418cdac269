mod common;

use common::TestContext;
use northwind_model::entity::{
    category, customer, employee, order, order_detail, product, shipper, supplier, us_state,
    Category, Customer, Employee, OrderDetail, Product, Shipper, Supplier, UsState,
};
use pretty_assertions::assert_eq;
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;

#[tokio::test]
async fn product_resolves_category_and_supplier_through_relations() -> Result<(), DbErr> {
    let ctx = TestContext::new().await;

    category::ActiveModel {
        category_id: Set(1),
        category_name: Set("Beverages".to_owned()),
        ..Default::default()
    }
    .insert(&ctx.db)
    .await?;

    supplier::ActiveModel {
        supplier_id: Set(1),
        company_name: Set("Acme".to_owned()),
        ..Default::default()
    }
    .insert(&ctx.db)
    .await?;

    product::ActiveModel {
        product_id: Set(1),
        product_name: Set("Chai".to_owned()),
        supplier_id: Set(Some(1)),
        category_id: Set(Some(1)),
        unit_price: Set(Some(18.0)),
        discontinued: Set(0),
        ..Default::default()
    }
    .insert(&ctx.db)
    .await?;

    let chai = Product::find_by_id(1_i16)
        .one(&ctx.db)
        .await?
        .expect("product missing");

    let category = chai
        .find_related(Category)
        .one(&ctx.db)
        .await?
        .expect("category missing");
    assert_eq!(category.category_name, "Beverages");

    let supplier = chai
        .find_related(Supplier)
        .one(&ctx.db)
        .await?
        .expect("supplier missing");
    assert_eq!(supplier.company_name, "Acme");

    // ...and back down the one-to-many side.
    let products = category.find_related(Product).all(&ctx.db).await?;
    assert_eq!(products, vec![chai]);

    Ok(())
}

#[tokio::test]
async fn order_round_trips_field_for_field() -> Result<(), DbErr> {
    let ctx = TestContext::new().await;

    customer::ActiveModel {
        customer_id: Set("ALFKI".to_owned()),
        company_name: Set("Alfreds Futterkiste".to_owned()),
        contact_name: Set(Some("Maria Anders".to_owned())),
        country: Set(Some("Germany".to_owned())),
        ..Default::default()
    }
    .insert(&ctx.db)
    .await?;

    employee::ActiveModel {
        employee_id: Set(1),
        last_name: Set("Davolio".to_owned()),
        first_name: Set("Nancy".to_owned()),
        hire_date: Set(Date::from_ymd_opt(1992, 5, 1)),
        ..Default::default()
    }
    .insert(&ctx.db)
    .await?;

    shipper::ActiveModel {
        shipper_id: Set(1),
        company_name: Set("Speedy Express".to_owned()),
        ..Default::default()
    }
    .insert(&ctx.db)
    .await?;

    let inserted = order::ActiveModel {
        order_id: Set(10248),
        customer_id: Set(Some("ALFKI".to_owned())),
        employee_id: Set(Some(1)),
        order_date: Set(Date::from_ymd_opt(1996, 7, 4)),
        required_date: Set(Date::from_ymd_opt(1996, 8, 1)),
        ship_via: Set(Some(1)),
        freight: Set(Some(32.38)),
        ship_name: Set(Some("Vins et alcools Chevalier".to_owned())),
        ship_city: Set(Some("Reims".to_owned())),
        ship_country: Set(Some("France".to_owned())),
        ..Default::default()
    }
    .insert(&ctx.db)
    .await?;

    let fetched = order::Entity::find_by_id(10248_i16)
        .one(&ctx.db)
        .await?
        .expect("order missing");
    assert_eq!(fetched, inserted);
    assert_eq!(fetched.shipped_date, None);

    let customer = fetched
        .find_related(Customer)
        .one(&ctx.db)
        .await?
        .expect("customer missing");
    assert_eq!(customer.company_name, "Alfreds Futterkiste");

    let employee = fetched
        .find_related(Employee)
        .one(&ctx.db)
        .await?
        .expect("employee missing");
    assert_eq!(employee.last_name, "Davolio");

    let shipper = fetched
        .find_related(Shipper)
        .one(&ctx.db)
        .await?
        .expect("shipper missing");
    assert_eq!(shipper.company_name, "Speedy Express");

    Ok(())
}

#[tokio::test]
async fn order_detail_is_keyed_by_order_and_product() -> Result<(), DbErr> {
    let ctx = TestContext::new().await;

    product::ActiveModel {
        product_id: Set(1),
        product_name: Set("Chai".to_owned()),
        discontinued: Set(0),
        ..Default::default()
    }
    .insert(&ctx.db)
    .await?;

    order::ActiveModel {
        order_id: Set(10248),
        ..Default::default()
    }
    .insert(&ctx.db)
    .await?;

    let line = order_detail::ActiveModel {
        order_id: Set(10248),
        product_id: Set(1),
        unit_price: Set(18.0),
        quantity: Set(12),
        discount: Set(0.0),
    }
    .insert(&ctx.db)
    .await?;

    let fetched = OrderDetail::find_by_id((10248, 1))
        .one(&ctx.db)
        .await?
        .expect("order line missing");
    assert_eq!(fetched, line);

    let product = fetched
        .find_related(Product)
        .one(&ctx.db)
        .await?
        .expect("product missing");
    assert_eq!(product.product_name, "Chai");

    let lines = product.find_related(OrderDetail).all(&ctx.db).await?;
    assert_eq!(lines.len(), 1);

    Ok(())
}

#[tokio::test]
async fn us_states_round_trip_without_declared_key() -> Result<(), DbErr> {
    let ctx = TestContext::new().await;

    us_state::ActiveModel {
        state_id: Set(48),
        state_name: Set(Some("Washington".to_owned())),
        state_abbr: Set(Some("WA".to_owned())),
        state_region: Set(Some("west".to_owned())),
    }
    .insert(&ctx.db)
    .await?;

    let state = UsState::find_by_id(48_i16)
        .one(&ctx.db)
        .await?
        .expect("state missing");
    assert_eq!(state.state_abbr.as_deref(), Some("WA"));

    let json = serde_json::to_value(&state).expect("state should serialize");
    assert_eq!(json["state_name"], "Washington");

    Ok(())
}
