use super::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct AddExpenseRequest {
    pub description: String,
    pub amount_minor: i64,
    pub split_between: Vec<String>,
}

impl Validate for AddExpenseRequest {
    fn validate(&self) -> Result<(), String> {
        if self.description.trim().is_empty() {
            return Err("Expense description is required".to_string());
        }
        if self.amount_minor <= 0 {
            return Err("Amount must be greater than zero".to_string());
        }
        if self.split_between.is_empty() {
            return Err("Select at least one participant to split with".to_string());
        }
        Ok(())
    }
}
