//! Named links for the relationships that `Related` alone cannot express
//! unambiguously: the two many-to-many pairs (in both directions) and the
//! self-referential employee hierarchy.

use sea_orm::entity::prelude::*;

#[derive(Debug)]
pub struct CustomerToDemographic;

impl Linked for CustomerToDemographic {
    type FromEntity = super::customer::Entity;

    type ToEntity = super::customer_demographic::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::customer_customer_demo::Relation::Customer.def().rev(),
            super::customer_customer_demo::Relation::CustomerDemographic.def(),
        ]
    }
}

#[derive(Debug)]
pub struct DemographicToCustomer;

impl Linked for DemographicToCustomer {
    type FromEntity = super::customer_demographic::Entity;

    type ToEntity = super::customer::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::customer_customer_demo::Relation::CustomerDemographic
                .def()
                .rev(),
            super::customer_customer_demo::Relation::Customer.def(),
        ]
    }
}

#[derive(Debug)]
pub struct EmployeeToTerritory;

impl Linked for EmployeeToTerritory {
    type FromEntity = super::employee::Entity;

    type ToEntity = super::territory::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::employee_territory::Relation::Employee.def().rev(),
            super::employee_territory::Relation::Territory.def(),
        ]
    }
}

#[derive(Debug)]
pub struct TerritoryToEmployee;

impl Linked for TerritoryToEmployee {
    type FromEntity = super::territory::Entity;

    type ToEntity = super::employee::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::employee_territory::Relation::Territory.def().rev(),
            super::employee_territory::Relation::Employee.def(),
        ]
    }
}

/// Employee to their direct manager.
#[derive(Debug)]
pub struct ReportsToManager;

impl Linked for ReportsToManager {
    type FromEntity = super::employee::Entity;

    type ToEntity = super::employee::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![super::employee::Relation::Manager.def()]
    }
}

/// Manager to their direct reports.
#[derive(Debug)]
pub struct ManagerToReports;

impl Linked for ManagerToReports {
    type FromEntity = super::employee::Entity;

    type ToEntity = super::employee::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![super::employee::Relation::Manager.def().rev()]
    }
}
