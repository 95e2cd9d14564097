//! Initial database migration.
//!
//! Creates the dispatch tables the driver completion report reads from.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(CLIENT_MASTER_SQL).await?;
        db.execute_unprepared(TERMINALS_SQL).await?;
        db.execute_unprepared(EMPLOYEES_SQL).await?;
        db.execute_unprepared(ORDERS_SQL).await?;
        db.execute_unprepared(ORDER_DRIVERS_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(
            "DROP TABLE IF EXISTS order_drivers, orders, employees, terminals, client_master CASCADE;",
        )
        .await?;
        Ok(())
    }
}

const CLIENT_MASTER_SQL: &str = r"
CREATE TABLE client_master (
    client_id INTEGER PRIMARY KEY,
    client_name TEXT NOT NULL
);
";

const TERMINALS_SQL: &str = r"
CREATE TABLE terminals (
    terminal_id INTEGER PRIMARY KEY,
    terminal_name TEXT NOT NULL
);
";

const EMPLOYEES_SQL: &str = r"
CREATE TABLE employees (
    id INTEGER PRIMARY KEY,
    driver_no VARCHAR(16) NOT NULL,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    status CHAR(1) NOT NULL,
    is_driver BOOLEAN NOT NULL DEFAULT FALSE,
    driver_type CHAR(1) NOT NULL,
    terminal_id INTEGER NOT NULL REFERENCES terminals(terminal_id)
);

-- Index for the report's employee selection
CREATE INDEX idx_employees_driver_lookup ON employees(driver_type, terminal_id) WHERE is_driver;
";

const ORDERS_SQL: &str = r"
CREATE TABLE orders (
    order_tracking_id VARCHAR(32) PRIMARY KEY,
    client_id INTEGER NOT NULL REFERENCES client_master(client_id),
    status CHAR(1) NOT NULL,
    delivery_target_to TIMESTAMP NOT NULL
);

-- Index for the per-driver correlated counts (status + target date)
CREATE INDEX idx_orders_status_target ON orders(status, delivery_target_to);
";

const ORDER_DRIVERS_SQL: &str = r"
CREATE TABLE order_drivers (
    order_tracking_id VARCHAR(32) NOT NULL REFERENCES orders(order_tracking_id) ON DELETE CASCADE,
    driver_id INTEGER NOT NULL REFERENCES employees(id) ON DELETE CASCADE,
    PRIMARY KEY (order_tracking_id, driver_id)
);

-- Index for looking up a driver's assigned orders
CREATE INDEX idx_order_drivers_driver ON order_drivers(driver_id);
";
