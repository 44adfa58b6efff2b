use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub trip_id: String,
    pub description: String,
    pub amount_minor: i64,
    pub paid_by: String,
    pub paid_by_name: String,
    pub split_between: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: String,
    pub trip_id: String,
    pub description: String,
    /// Integer minor units (cents); avoids float drift in balances.
    pub amount_minor: i64,
    pub paid_by: String,
    pub paid_by_name: String,
    /// Participant ids sharing this expense, in split order.
    pub split_between: Vec<String>,
    pub spent_at: DateTime<Utc>,
}

impl Expense {
    pub fn assign(new_expense: &NewExpense) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            trip_id: new_expense.trip_id.clone(),
            description: new_expense.description.clone(),
            amount_minor: new_expense.amount_minor,
            paid_by: new_expense.paid_by.clone(),
            paid_by_name: new_expense.paid_by_name.clone(),
            split_between: new_expense.split_between.clone(),
            spent_at: Utc::now(),
        }
    }

    /// Per-member share in minor units. The first `remainder` members of
    /// the split set carry one extra unit so shares always sum to the
    /// full amount.
    pub fn share_for(&self, participant_id: &str) -> i64 {
        let n = self.split_between.len() as i64;
        if n == 0 {
            return 0;
        }
        let base = self.amount_minor / n;
        let remainder = self.amount_minor % n;
        match self
            .split_between
            .iter()
            .position(|id| id == participant_id)
        {
            Some(index) if (index as i64) < remainder => base + 1,
            Some(_) => base,
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(amount: i64, split: &[&str]) -> Expense {
        Expense::assign(&NewExpense {
            trip_id: "trip-1".to_string(),
            description: "Dinner".to_string(),
            amount_minor: amount,
            paid_by: "p-a".to_string(),
            paid_by_name: "Ada".to_string(),
            split_between: split.iter().map(|s| s.to_string()).collect(),
        })
    }

    #[test]
    fn shares_sum_to_amount() {
        let e = expense(1000, &["p-a", "p-b", "p-c"]);
        let total: i64 = ["p-a", "p-b", "p-c"]
            .iter()
            .map(|id| e.share_for(id))
            .sum();
        assert_eq!(total, 1000);
    }

    #[test]
    fn remainder_goes_to_earliest_members() {
        let e = expense(1000, &["p-a", "p-b", "p-c"]);
        assert_eq!(e.share_for("p-a"), 334);
        assert_eq!(e.share_for("p-b"), 333);
        assert_eq!(e.share_for("p-c"), 333);
    }

    #[test]
    fn outsider_owes_nothing() {
        let e = expense(1000, &["p-a", "p-b"]);
        assert_eq!(e.share_for("p-z"), 0);
    }
}
