mod common;

use common::TestContext;
use northwind_model::entity::{employee, links, Employee};
use pretty_assertions::assert_eq;
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use sea_orm::IntoActiveModel;

async fn seed_org_chart(db: &DatabaseConnection) -> Result<(), DbErr> {
    // 1 at the top; 2 and 3 report to 1; 4 reports to 2; 5 reports to 3.
    for (id, last, first, manager) in [
        (1, "Fuller", "Andrew", None),
        (2, "Davolio", "Nancy", Some(1)),
        (3, "Leverling", "Janet", Some(1)),
        (4, "Peacock", "Margaret", Some(2)),
        (5, "Buchanan", "Steven", Some(3)),
    ] {
        employee::ActiveModel {
            employee_id: Set(id),
            last_name: Set(last.to_owned()),
            first_name: Set(first.to_owned()),
            reports_to: Set(manager),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }
    Ok(())
}

async fn get(db: &DatabaseConnection, id: i16) -> Result<employee::Model, DbErr> {
    Ok(Employee::find_by_id(id).one(db).await?.expect("employee missing"))
}

fn ids(employees: &[employee::Model]) -> Vec<i16> {
    let mut ids: Vec<i16> = employees.iter().map(|e| e.employee_id).collect();
    ids.sort_unstable();
    ids
}

#[tokio::test]
async fn direct_manager_and_reports() -> Result<(), DbErr> {
    let ctx = TestContext::new().await;
    seed_org_chart(&ctx.db).await?;

    let top = get(&ctx.db, 1).await?;
    assert_eq!(top.reports_to, None);
    assert!(top.manager(&ctx.db).await?.is_none());
    assert_eq!(ids(&top.reports(&ctx.db).await?), vec![2, 3]);

    let leaf = get(&ctx.db, 4).await?;
    let manager = leaf.manager(&ctx.db).await?.expect("manager missing");
    assert_eq!(manager.employee_id, 2);
    assert!(leaf.reports(&ctx.db).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn linked_navigation_matches_direct_lookups() -> Result<(), DbErr> {
    let ctx = TestContext::new().await;
    seed_org_chart(&ctx.db).await?;

    let top = get(&ctx.db, 1).await?;
    let reports = top.find_linked(links::ManagerToReports).all(&ctx.db).await?;
    assert_eq!(ids(&reports), vec![2, 3]);

    let leaf = get(&ctx.db, 4).await?;
    let managers = leaf.find_linked(links::ReportsToManager).all(&ctx.db).await?;
    assert_eq!(ids(&managers), vec![2]);

    Ok(())
}

#[tokio::test]
async fn transitive_traversal() -> Result<(), DbErr> {
    let ctx = TestContext::new().await;
    seed_org_chart(&ctx.db).await?;

    let top = get(&ctx.db, 1).await?;
    assert!(top.ancestors(&ctx.db).await?.is_empty());

    // Breadth-first: both direct reports come before either of their
    // own reports.
    let subtree: Vec<i16> = top
        .descendants(&ctx.db)
        .await?
        .iter()
        .map(|e| e.employee_id)
        .collect();
    assert_eq!(subtree, vec![2, 3, 4, 5]);

    let leaf = get(&ctx.db, 4).await?;
    let chain: Vec<i16> = leaf
        .ancestors(&ctx.db)
        .await?
        .iter()
        .map(|e| e.employee_id)
        .collect();
    assert_eq!(chain, vec![2, 1]);
    assert!(leaf.descendants(&ctx.db).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn cyclic_hierarchy_fails_traversal_instead_of_looping() -> Result<(), DbErr> {
    let ctx = TestContext::new().await;
    seed_org_chart(&ctx.db).await?;

    // Point the top of the tree back down at a leaf: 4 -> 2 -> 1 -> 4.
    let mut top = get(&ctx.db, 1).await?.into_active_model();
    top.reports_to = Set(Some(4));
    top.update(&ctx.db).await?;

    let leaf = get(&ctx.db, 4).await?;
    assert!(leaf.ancestors(&ctx.db).await.is_err());

    Ok(())
}
