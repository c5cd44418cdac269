mod common;

use common::TestContext;
use northwind_model::entity::{
    customer, customer_customer_demo, customer_demographic, employee, employee_territory, links,
    region, territory, CustomerDemographic, Territory,
};
use northwind_model::ModelError;
use pretty_assertions::assert_eq;
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;

#[tokio::test]
async fn customer_demographics_many_to_many() -> Result<(), DbErr> {
    let ctx = TestContext::new().await;

    let alfki = customer::ActiveModel {
        customer_id: Set("ALFKI".to_owned()),
        company_name: Set("Alfreds Futterkiste".to_owned()),
        ..Default::default()
    }
    .insert(&ctx.db)
    .await?;

    let loyal = customer_demographic::ActiveModel {
        customer_type_id: Set("LOYAL".to_owned()),
        customer_desc: Set(Some("Loyal repeat customers".to_owned())),
    }
    .insert(&ctx.db)
    .await?;

    customer_customer_demo::ActiveModel {
        customer_id: Set("ALFKI".to_owned()),
        customer_type_id: Set("LOYAL".to_owned()),
    }
    .insert(&ctx.db)
    .await?;

    // Associating the same pair twice must fail on the composite key.
    let result = customer_customer_demo::ActiveModel {
        customer_id: Set("ALFKI".to_owned()),
        customer_type_id: Set("LOYAL".to_owned()),
    }
    .insert(&ctx.db)
    .await;
    let err = ModelError::from(result.expect_err("duplicate association must fail"));
    assert!(err.is_constraint_violation());

    // Navigation in both directions, each partner appearing exactly once.
    let demographics = alfki
        .find_linked(links::CustomerToDemographic)
        .all(&ctx.db)
        .await?;
    assert_eq!(demographics, vec![loyal.clone()]);

    let customers = loyal
        .find_linked(links::DemographicToCustomer)
        .all(&ctx.db)
        .await?;
    assert_eq!(customers, vec![alfki.clone()]);

    // The junction is also reachable as a plain related entity.
    let via_related = alfki.find_related(CustomerDemographic).all(&ctx.db).await?;
    assert_eq!(via_related, demographics);

    Ok(())
}

#[tokio::test]
async fn junction_rejects_unknown_partners() -> Result<(), DbErr> {
    let ctx = TestContext::new().await;

    customer::ActiveModel {
        customer_id: Set("ALFKI".to_owned()),
        company_name: Set("Alfreds Futterkiste".to_owned()),
        ..Default::default()
    }
    .insert(&ctx.db)
    .await?;

    let result = customer_customer_demo::ActiveModel {
        customer_id: Set("ALFKI".to_owned()),
        customer_type_id: Set("GHOST".to_owned()),
    }
    .insert(&ctx.db)
    .await;

    let err = ModelError::from(result.expect_err("association to a missing demographic must fail"));
    assert!(err.is_constraint_violation());

    Ok(())
}

#[tokio::test]
async fn employee_territories_many_to_many() -> Result<(), DbErr> {
    let ctx = TestContext::new().await;

    region::ActiveModel {
        region_id: Set(1),
        region_description: Set("Eastern".to_owned()),
    }
    .insert(&ctx.db)
    .await?;

    for (id, description) in [("01581", "Westboro"), ("01730", "Bedford")] {
        territory::ActiveModel {
            territory_id: Set(id.to_owned()),
            territory_description: Set(description.to_owned()),
            region_id: Set(1),
        }
        .insert(&ctx.db)
        .await?;
    }

    let nancy = employee::ActiveModel {
        employee_id: Set(1),
        last_name: Set("Davolio".to_owned()),
        first_name: Set("Nancy".to_owned()),
        ..Default::default()
    }
    .insert(&ctx.db)
    .await?;

    for id in ["01581", "01730"] {
        employee_territory::ActiveModel {
            employee_id: Set(1),
            territory_id: Set(id.to_owned()),
        }
        .insert(&ctx.db)
        .await?;
    }

    let mut territories = nancy
        .find_linked(links::EmployeeToTerritory)
        .all(&ctx.db)
        .await?;
    territories.sort_by(|a, b| a.territory_id.cmp(&b.territory_id));
    let ids: Vec<&str> = territories.iter().map(|t| t.territory_id.as_str()).collect();
    assert_eq!(ids, vec!["01581", "01730"]);

    // The territory's region is a plain required belongs_to.
    let eastern = territories[0]
        .find_related(northwind_model::entity::Region)
        .one(&ctx.db)
        .await?
        .expect("region missing");
    assert_eq!(eastern.region_description, "Eastern");

    let colleagues = territories[0]
        .find_linked(links::TerritoryToEmployee)
        .all(&ctx.db)
        .await?;
    assert_eq!(colleagues, vec![nancy.clone()]);

    let via_related = nancy.find_related(Territory).all(&ctx.db).await?;
    assert_eq!(via_related.len(), 2);

    Ok(())
}
