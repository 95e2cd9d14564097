//! `SeaORM` Entity for the employees table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub driver_no: String,
    pub first_name: String,
    pub last_name: String,
    /// Employment status; "A" is active.
    pub status: String,
    pub is_driver: bool,
    /// Single-letter driver classification, e.g. "C" for contractor.
    pub driver_type: String,
    pub terminal_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::terminals::Entity",
        from = "Column::TerminalId",
        to = "super::terminals::Column::TerminalId"
    )]
    Terminals,
    #[sea_orm(has_many = "super::order_drivers::Entity")]
    OrderDrivers,
}

impl Related<super::terminals::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Terminals.def()
    }
}

impl Related<super::order_drivers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderDrivers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
