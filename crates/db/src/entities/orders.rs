//! `SeaORM` Entity for the orders table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub order_tracking_id: String,
    pub client_id: i32,
    /// Single-letter status code; "N" is new/active.
    pub status: String,
    pub delivery_target_to: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::client_master::Entity",
        from = "Column::ClientId",
        to = "super::client_master::Column::ClientId"
    )]
    ClientMaster,
    #[sea_orm(has_many = "super::order_drivers::Entity")]
    OrderDrivers,
}

impl Related<super::client_master::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClientMaster.def()
    }
}

impl Related<super::order_drivers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderDrivers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
