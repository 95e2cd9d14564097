//! `SeaORM` entity definitions for the dispatch tables.

pub mod client_master;
pub mod employees;
pub mod order_drivers;
pub mod orders;
pub mod terminals;
