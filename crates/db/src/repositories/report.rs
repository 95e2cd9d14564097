//! Report repository for the driver completion query.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QuerySelect, RelationTrait, sea_query::SimpleExpr,
};

use dispatch_core::report::{DriverOrderCounts, sort_and_collapse};
use dispatch_shared::ReportConfig;

use crate::entities::{employees, order_drivers, orders, terminals};

/// Employment status code for active employees.
const ACTIVE_EMPLOYEE_STATUS: &str = "A";

/// Error types for report queries.
#[derive(Debug, thiserror::Error)]
pub enum ReportQueryError {
    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Filter parameters for the driver completion query.
#[derive(Debug, Clone)]
pub struct ReportFilter {
    /// Driver-type classification to report on.
    pub driver_type: String,
    /// Calendar date the delivery targets are compared against.
    pub target_date: NaiveDate,
    /// Restrict to these terminal ids; `None` means all terminals.
    pub terminals: Option<Vec<i32>>,
    /// Restrict to these driver numbers; `None` or empty means all drivers.
    pub driver_numbers: Option<Vec<String>>,
}

/// Report repository for the driver completion query.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    db: DatabaseConnection,
}

impl ReportRepository {
    /// Creates a new report repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Queries per-driver order counts for the target date.
    ///
    /// Selects active drivers of the filtered type, restricted by the
    /// optional terminal and driver-number sets, then computes the two
    /// correlated counts per driver over
    /// `order_drivers ⋈ orders ⋈ client_master` (the client join validates
    /// referential integrity, it does not filter). Rows come back ordered
    /// by the identity tuple with duplicate identities collapsed.
    ///
    /// # Errors
    ///
    /// Returns an error if a database query fails.
    pub async fn query_driver_counts(
        &self,
        filter: &ReportFilter,
        report_config: &ReportConfig,
    ) -> Result<Vec<DriverOrderCounts>, ReportQueryError> {
        let mut employee_query = employees::Entity::find()
            .filter(employees::Column::Status.eq(ACTIVE_EMPLOYEE_STATUS))
            .filter(employees::Column::IsDriver.eq(true))
            .filter(employees::Column::DriverType.eq(filter.driver_type.as_str()));

        if let Some(terminal_ids) = &filter.terminals {
            employee_query =
                employee_query.filter(employees::Column::TerminalId.is_in(terminal_ids.clone()));
        }

        if let Some(driver_numbers) = &filter.driver_numbers
            && !driver_numbers.is_empty()
        {
            employee_query =
                employee_query.filter(employees::Column::DriverNo.is_in(driver_numbers.clone()));
        }

        let drivers = employee_query.all(&self.db).await?;

        let terminal_names: HashMap<i32, String> = terminals::Entity::find()
            .all(&self.db)
            .await?
            .into_iter()
            .map(|t| (t.terminal_id, t.terminal_name))
            .collect();

        let (day_start, day_end) = day_bounds(filter.target_date);

        let mut rows = Vec::with_capacity(drivers.len());

        for employee in drivers {
            // Inner-join semantics: drivers without a terminal row drop out.
            let Some(terminal_name) = terminal_names.get(&employee.terminal_id) else {
                continue;
            };

            let noncomplete_count = self
                .count_assigned_orders(
                    employee.id,
                    day_start,
                    day_end,
                    orders::Column::Status.eq(report_config.open_status.as_str()),
                )
                .await?;

            let complete_count = self
                .count_assigned_orders(
                    employee.id,
                    day_start,
                    day_end,
                    orders::Column::Status.is_not_in(report_config.non_complete_statuses.clone()),
                )
                .await?;

            rows.push(DriverOrderCounts {
                terminal_id: employee.terminal_id,
                terminal_name: terminal_name.clone(),
                driver_id: employee.id,
                driver_no: employee.driver_no,
                last_name: employee.last_name,
                first_name: employee.first_name,
                noncomplete_count,
                complete_count,
            });
        }

        let rows = sort_and_collapse(rows);
        tracing::debug!(
            drivers = rows.len(),
            target_date = %filter.target_date,
            "Queried driver order counts"
        );

        Ok(rows)
    }

    /// Counts a driver's assigned orders matching the status filter whose
    /// delivery target falls on the report date.
    async fn count_assigned_orders(
        &self,
        driver_id: i32,
        day_start: NaiveDateTime,
        day_end: NaiveDateTime,
        status_filter: SimpleExpr,
    ) -> Result<u64, ReportQueryError> {
        let count = order_drivers::Entity::find()
            .join(JoinType::InnerJoin, order_drivers::Relation::Orders.def())
            .join(JoinType::InnerJoin, orders::Relation::ClientMaster.def())
            .filter(order_drivers::Column::DriverId.eq(driver_id))
            .filter(status_filter)
            .filter(orders::Column::DeliveryTargetTo.gte(day_start))
            .filter(orders::Column::DeliveryTargetTo.lt(day_end))
            .count(&self.db)
            .await?;

        Ok(count)
    }
}

/// Half-open `[00:00, next day 00:00)` bounds matching the target date's
/// date portion.
fn day_bounds(date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let start = date.and_time(NaiveTime::MIN);
    (start, start + Duration::days(1))
}
