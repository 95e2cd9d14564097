//! `SeaORM` Entity for the order_drivers assignment table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "order_drivers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub order_tracking_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub driver_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::orders::Entity",
        from = "Column::OrderTrackingId",
        to = "super::orders::Column::OrderTrackingId"
    )]
    Orders,
    #[sea_orm(
        belongs_to = "super::employees::Entity",
        from = "Column::DriverId",
        to = "super::employees::Column::Id"
    )]
    Employees,
}

impl Related<super::orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl Related<super::employees::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employees.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
