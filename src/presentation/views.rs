use crate::domain::constants::PACKING_CATEGORIES;
use crate::domain::entities::{Expense, PackingItem};
use serde::Serialize;
use std::collections::HashMap;

/// One non-empty category section of the packing list.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryGroup {
    pub category: String,
    pub items: Vec<PackingItem>,
    pub packed_count: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PackingListView {
    pub groups: Vec<CategoryGroup>,
    pub total_items: usize,
    pub packed_items: usize,
    /// Rounded to the nearest integer; 0 when the list is empty.
    pub progress_percent: u8,
}

/// Recomputed from the current snapshot on every render; never stored.
/// Categories appear in the fixed reference order and empty categories
/// are omitted.
pub fn packing_list_view(items: &[PackingItem]) -> PackingListView {
    let groups: Vec<CategoryGroup> = PACKING_CATEGORIES
        .iter()
        .map(|category| {
            let group_items: Vec<PackingItem> = items
                .iter()
                .filter(|item| item.category == *category)
                .cloned()
                .collect();
            CategoryGroup {
                category: category.to_string(),
                packed_count: group_items.iter().filter(|item| item.is_packed).count(),
                items: group_items,
            }
        })
        .filter(|group| !group.items.is_empty())
        .collect();

    let total_items = items.len();
    let packed_items = items.iter().filter(|item| item.is_packed).count();
    let progress_percent = if total_items == 0 {
        0
    } else {
        ((packed_items as f64 / total_items as f64) * 100.0).round() as u8
    };

    PackingListView {
        groups,
        total_items,
        packed_items,
        progress_percent,
    }
}

/// Net position of one participant: positive is owed money, negative
/// owes money.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ParticipantBalance {
    pub participant_id: String,
    pub display_name: String,
    pub balance_minor: i64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Transfer {
    pub from: String,
    pub to: String,
    pub amount_minor: i64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SettleUpView {
    pub balances: Vec<ParticipantBalance>,
    pub transfers: Vec<Transfer>,
}

/// Settle-up math over the expense snapshot: net balances always sum
/// to zero, and the greedy plan repeatedly matches the largest debtor
/// with the largest creditor.
pub fn settle_up_view(expenses: &[Expense]) -> SettleUpView {
    let mut nets: HashMap<String, i64> = HashMap::new();
    let mut names: HashMap<String, String> = HashMap::new();

    for expense in expenses {
        *nets.entry(expense.paid_by.clone()).or_insert(0) += expense.amount_minor;
        names
            .entry(expense.paid_by.clone())
            .or_insert_with(|| expense.paid_by_name.clone());
        for member in &expense.split_between {
            *nets.entry(member.clone()).or_insert(0) -= expense.share_for(member);
        }
    }

    let mut balances: Vec<ParticipantBalance> = nets
        .iter()
        .map(|(id, net)| ParticipantBalance {
            participant_id: id.clone(),
            display_name: names.get(id).cloned().unwrap_or_else(|| id.clone()),
            balance_minor: *net,
        })
        .collect();
    balances.sort_by(|a, b| {
        b.balance_minor
            .cmp(&a.balance_minor)
            .then_with(|| a.participant_id.cmp(&b.participant_id))
    });

    let mut creditors: Vec<(String, i64)> = balances
        .iter()
        .filter(|b| b.balance_minor > 0)
        .map(|b| (b.participant_id.clone(), b.balance_minor))
        .collect();
    let mut debtors: Vec<(String, i64)> = balances
        .iter()
        .filter(|b| b.balance_minor < 0)
        .map(|b| (b.participant_id.clone(), -b.balance_minor))
        .collect();
    debtors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let mut transfers = Vec::new();
    let mut ci = 0;
    let mut di = 0;
    while ci < creditors.len() && di < debtors.len() {
        let amount = creditors[ci].1.min(debtors[di].1);
        transfers.push(Transfer {
            from: debtors[di].0.clone(),
            to: creditors[ci].0.clone(),
            amount_minor: amount,
        });
        creditors[ci].1 -= amount;
        debtors[di].1 -= amount;
        if creditors[ci].1 == 0 {
            ci += 1;
        }
        if debtors[di].1 == 0 {
            di += 1;
        }
    }

    SettleUpView {
        balances,
        transfers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{NewExpense, NewPackingItem};

    fn item(name: &str, category: &str, packed: bool) -> PackingItem {
        let mut item = PackingItem::assign(&NewPackingItem {
            trip_id: "trip-1".to_string(),
            item_name: name.to_string(),
            category: category.to_string(),
        });
        item.is_packed = packed;
        item
    }

    fn expense(amount: i64, payer: (&str, &str), split: &[&str]) -> Expense {
        Expense::assign(&NewExpense {
            trip_id: "trip-1".to_string(),
            description: "Shared".to_string(),
            amount_minor: amount,
            paid_by: payer.0.to_string(),
            paid_by_name: payer.1.to_string(),
            split_between: split.iter().map(|s| s.to_string()).collect(),
        })
    }

    #[test]
    fn empty_list_has_zero_progress() {
        let view = packing_list_view(&[]);
        assert_eq!(view.progress_percent, 0);
        assert!(view.groups.is_empty());
    }

    #[test]
    fn one_of_three_packed_rounds_to_33() {
        let items = vec![
            item("Socks", "Clothing", true),
            item("Shirt", "Clothing", false),
            item("Passport", "Documents", false),
        ];
        let view = packing_list_view(&items);
        assert_eq!(view.total_items, 3);
        assert_eq!(view.packed_items, 1);
        assert_eq!(view.progress_percent, 33);
    }

    #[test]
    fn empty_categories_are_omitted_and_order_is_fixed() {
        // Arrival order deliberately reversed relative to the
        // reference category list.
        let items = vec![
            item("Passport", "Documents", false),
            item("Toothbrush", "Toiletries", false),
            item("Socks", "Clothing", false),
        ];
        let view = packing_list_view(&items);
        let categories: Vec<&str> = view.groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(categories, vec!["Clothing", "Toiletries", "Documents"]);
    }

    #[test]
    fn group_packed_counts_are_per_category() {
        let items = vec![
            item("Socks", "Clothing", true),
            item("Shirt", "Clothing", false),
        ];
        let view = packing_list_view(&items);
        assert_eq!(view.groups[0].packed_count, 1);
        assert_eq!(view.groups[0].items.len(), 2);
    }

    #[test]
    fn balances_sum_to_zero() {
        let expenses = vec![
            expense(1000, ("p-a", "Ada"), &["p-a", "p-b"]),
            expense(300, ("p-b", "Bob"), &["p-a", "p-b", "p-c"]),
        ];
        let view = settle_up_view(&expenses);
        let sum: i64 = view.balances.iter().map(|b| b.balance_minor).sum();
        assert_eq!(sum, 0);
    }

    #[test]
    fn transfers_settle_every_balance() {
        let expenses = vec![
            expense(1000, ("p-a", "Ada"), &["p-a", "p-b"]),
            expense(600, ("p-b", "Bob"), &["p-b", "p-c"]),
        ];
        let view = settle_up_view(&expenses);

        let mut nets: HashMap<String, i64> = view
            .balances
            .iter()
            .map(|b| (b.participant_id.clone(), b.balance_minor))
            .collect();
        for t in &view.transfers {
            *nets.get_mut(&t.from).unwrap() += t.amount_minor;
            *nets.get_mut(&t.to).unwrap() -= t.amount_minor;
        }
        assert!(nets.values().all(|net| *net == 0));
    }

    #[test]
    fn single_shared_expense_produces_one_transfer() {
        let expenses = vec![expense(1000, ("p-a", "Ada"), &["p-a", "p-b"])];
        let view = settle_up_view(&expenses);
        assert_eq!(
            view.transfers,
            vec![Transfer {
                from: "p-b".to_string(),
                to: "p-a".to_string(),
                amount_minor: 500,
            }]
        );
    }
}
