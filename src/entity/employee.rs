use std::collections::{HashSet, VecDeque};

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, ConnectionTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};

use crate::validate::{check_length, check_required};

/// Employees form a parent-pointer tree through `reportsto`: the column
/// holds the manager's `employeeid` and is absent at the top of the
/// hierarchy. The relational constraint alone cannot exclude cycles, so
/// self-references are rejected on save and the transitive traversals below
/// carry a visited-set guard.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "employeeid")]
    pub employee_id: i16,
    #[sea_orm(column_name = "lastname", column_type = "String(StringLen::N(20))")]
    pub last_name: String,
    #[sea_orm(column_name = "firstname", column_type = "String(StringLen::N(10))")]
    pub first_name: String,
    #[sea_orm(column_type = "String(StringLen::N(30))", nullable)]
    pub title: Option<String>,
    #[sea_orm(
        column_name = "titleofcourtesy",
        column_type = "String(StringLen::N(25))",
        nullable
    )]
    pub title_of_courtesy: Option<String>,
    #[sea_orm(column_name = "birthdate")]
    pub birth_date: Option<Date>,
    #[sea_orm(column_name = "hiredate")]
    pub hire_date: Option<Date>,
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
    #[sea_orm(
        column_name = "homephone",
        column_type = "String(StringLen::N(24))",
        nullable
    )]
    pub home_phone: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(4))", nullable)]
    pub extension: Option<String>,
    #[sea_orm(column_type = "Blob", nullable)]
    pub photo: Option<Vec<u8>>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    #[sea_orm(column_name = "reportsto")]
    pub reports_to: Option<i16>,
    #[sea_orm(
        column_name = "photopath",
        column_type = "String(StringLen::N(255))",
        nullable
    )]
    pub photo_path: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(belongs_to = "Entity", from = "Column::ReportsTo", to = "Column::EmployeeId")]
    Manager,
    #[sea_orm(has_many = "super::order::Entity")]
    Order,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::territory::Entity> for Entity {
    fn to() -> RelationDef {
        super::employee_territory::Relation::Territory.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::employee_territory::Relation::Employee.def().rev())
    }
}

impl Model {
    /// The direct manager, or `None` at the top of the hierarchy.
    pub async fn manager<C>(&self, db: &C) -> Result<Option<Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        match self.reports_to {
            Some(manager_id) => Entity::find_by_id(manager_id).one(db).await,
            None => Ok(None),
        }
    }

    /// Employees reporting directly to this one.
    pub async fn reports<C>(&self, db: &C) -> Result<Vec<Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find()
            .filter(Column::ReportsTo.eq(self.employee_id))
            .order_by_asc(Column::EmployeeId)
            .all(db)
            .await
    }

    /// The management chain from the direct manager up to the top of the
    /// hierarchy. Fails if the parent-pointer graph turns out to be cyclic.
    pub async fn ancestors<C>(&self, db: &C) -> Result<Vec<Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        let mut chain = Vec::new();
        let mut visited = HashSet::from([self.employee_id]);
        let mut current = self.clone();
        while let Some(manager) = current.manager(db).await? {
            if !visited.insert(manager.employee_id) {
                tracing::warn!(
                    employee = manager.employee_id,
                    "cycle detected in employee hierarchy"
                );
                return Err(cycle_error(manager.employee_id));
            }
            chain.push(manager.clone());
            current = manager;
        }
        Ok(chain)
    }

    /// Every employee below this one, breadth-first. Fails if the
    /// parent-pointer graph turns out to be cyclic.
    pub async fn descendants<C>(&self, db: &C) -> Result<Vec<Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        let mut subtree = Vec::new();
        let mut visited = HashSet::from([self.employee_id]);
        let mut frontier = VecDeque::from([self.clone()]);
        while let Some(node) = frontier.pop_front() {
            for report in node.reports(db).await? {
                if !visited.insert(report.employee_id) {
                    tracing::warn!(
                        employee = report.employee_id,
                        "cycle detected in employee hierarchy"
                    );
                    return Err(cycle_error(report.employee_id));
                }
                subtree.push(report.clone());
                frontier.push_back(report);
            }
        }
        Ok(subtree)
    }
}

fn cycle_error(employee_id: i16) -> DbErr {
    DbErr::Custom(format!(
        "cycle in employees.reportsto involving employee {employee_id}"
    ))
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert {
            check_required("employees", "employeeid", &self.employee_id)?;
            check_required("employees", "lastname", &self.last_name)?;
            check_required("employees", "firstname", &self.first_name)?;
        }
        check_length("employees", "lastname", 20, &self.last_name)?;
        check_length("employees", "firstname", 10, &self.first_name)?;
        check_length("employees", "title", 30, &self.title)?;
        check_length("employees", "titleofcourtesy", 25, &self.title_of_courtesy)?;
        check_length("employees", "address", 60, &self.address)?;
        check_length("employees", "city", 15, &self.city)?;
        check_length("employees", "region", 15, &self.region)?;
        check_length("employees", "postalcode", 10, &self.postal_code)?;
        check_length("employees", "country", 15, &self.country)?;
        check_length("employees", "homephone", 24, &self.home_phone)?;
        check_length("employees", "extension", 4, &self.extension)?;
        check_length("employees", "photopath", 255, &self.photo_path)?;

        let employee_id = match &self.employee_id {
            ActiveValue::Set(id) | ActiveValue::Unchanged(id) => Some(*id),
            ActiveValue::NotSet => None,
        };
        if let ActiveValue::Set(Some(manager_id)) | ActiveValue::Unchanged(Some(manager_id)) =
            &self.reports_to
        {
            if Some(*manager_id) == employee_id {
                return Err(DbErr::Custom(format!(
                    "employees.reportsto must not reference the employee itself (employee {manager_id})"
                )));
            }
        }
        Ok(self)
    }
}
