use sea_orm::entity::prelude::*;
use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};

use crate::validate::{check_length, check_required};

/// Standalone reference data with no foreign keys. The source declares no
/// primary key for `usstates`; `stateid` serves as a natural key for object
/// identity here, but the DDL in [`crate::schema`] does not enforce its
/// uniqueness.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "usstates")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "stateid")]
    pub state_id: i16,
    #[sea_orm(
        column_name = "statename",
        column_type = "String(StringLen::N(100))",
        nullable
    )]
    pub state_name: Option<String>,
    #[sea_orm(
        column_name = "stateabbr",
        column_type = "String(StringLen::N(2))",
        nullable
    )]
    pub state_abbr: Option<String>,
    #[sea_orm(
        column_name = "stateregion",
        column_type = "String(StringLen::N(50))",
        nullable
    )]
    pub state_region: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert {
            check_required("usstates", "stateid", &self.state_id)?;
        }
        check_length("usstates", "statename", 100, &self.state_name)?;
        check_length("usstates", "stateabbr", 2, &self.state_abbr)?;
        check_length("usstates", "stateregion", 50, &self.state_region)?;
        Ok(self)
    }
}
