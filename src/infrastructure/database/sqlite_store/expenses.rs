use super::mapper::map_expense_row;
use super::queries::{
    DELETE_EXPENSE, INSERT_EXPENSE, SELECT_EXPENSES_BY_TRIP, SELECT_EXPENSE_BY_ID,
};
use super::SqliteStore;
use crate::application::ports::ExpenseStore;
use crate::domain::entities::{Expense, NewExpense};
use crate::domain::events::RowEvent;
use crate::domain::value_objects::TripId;
use crate::shared::error::AppError;
use async_trait::async_trait;

#[async_trait]
impl ExpenseStore for SqliteStore {
    async fn insert_expense(&self, new_expense: &NewExpense) -> Result<Expense, AppError> {
        let expense = Expense::assign(new_expense);
        let split_between = serde_json::to_string(&expense.split_between)?;

        sqlx::query(INSERT_EXPENSE)
            .bind(&expense.id)
            .bind(&expense.trip_id)
            .bind(&expense.description)
            .bind(expense.amount_minor)
            .bind(&expense.paid_by)
            .bind(&expense.paid_by_name)
            .bind(split_between)
            .bind(expense.spent_at.timestamp_millis())
            .execute(self.pool.get_pool())
            .await?;

        self.feed
            .publish_expense(&expense.trip_id, RowEvent::Inserted(expense.clone()))
            .await;

        Ok(expense)
    }

    async fn list_expenses(&self, trip_id: &TripId) -> Result<Vec<Expense>, AppError> {
        let rows = sqlx::query(SELECT_EXPENSES_BY_TRIP)
            .bind(trip_id.as_str())
            .fetch_all(self.pool.get_pool())
            .await?;

        let mut expenses = Vec::with_capacity(rows.len());
        for row in rows {
            expenses.push(map_expense_row(&row)?);
        }

        Ok(expenses)
    }

    async fn delete_expense(&self, id: &str) -> Result<(), AppError> {
        let row = sqlx::query(SELECT_EXPENSE_BY_ID)
            .bind(id)
            .fetch_optional(self.pool.get_pool())
            .await?;
        let existing = match row {
            Some(row) => Some(map_expense_row(&row)?),
            None => None,
        };

        sqlx::query(DELETE_EXPENSE)
            .bind(id)
            .execute(self.pool.get_pool())
            .await?;

        if let Some(expense) = existing {
            self.feed
                .publish_expense(&expense.trip_id, RowEvent::Deleted(expense.id))
                .await;
        }

        Ok(())
    }
}
