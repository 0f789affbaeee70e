use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sleepers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "sleeper_uuid")]
    pub sleeper_uuid: String,
    #[sea_orm(column_name = "sleeper_time", column_type = "Double")]
    pub sleeper_time: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
