//! Scripted in-memory session: onboard, create a trip, drive the
//! packing list, expenses and chat through the handlers, and print
//! what each screen would render.

use anyhow::Result;
use std::time::Duration;
use wayfarer::presentation::dto::{
    AddExpenseRequest, AddPackingItemRequest, CreateTripRequest, SendMessageRequest,
};
use wayfarer::AppState;

async fn settle(state: &AppState) {
    // Give the feed pumps a beat to apply pending events.
    tokio::time::sleep(Duration::from_millis(50)).await;
    for toast in state.toasts.drain().await {
        println!("  [toast] {}: {}", toast.title, toast.description);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    wayfarer::init_logging();

    let state = AppState::new_in_memory().await?;

    state.session.complete_onboarding().await?;
    state.session.log_in("Ada").await?;
    println!("start route: {:?}", state.session.start_route().await?);

    let trip = state
        .trips
        .create_trip(CreateTripRequest {
            name: "Lisbon long weekend".to_string(),
            destination: "Lisbon".to_string(),
            start_date: "2026-09-03".parse()?,
            end_date: "2026-09-06".parse()?,
        })
        .await
        .expect("trip creation");
    println!("created trip {} ({})", trip.name, trip.id);

    state.packing_list.mount(Some(&trip.id)).await;
    for (name, category) in [
        ("Sunscreen", "Toiletries"),
        ("Passport", "Documents"),
        ("T-shirts", "Clothing"),
        ("Charger", "Electronics"),
    ] {
        state
            .packing_list
            .add_item(AddPackingItemRequest {
                name: name.to_string(),
                category: category.to_string(),
            })
            .await;
    }
    settle(&state).await;

    let view = state.packing_list.view().await;
    println!(
        "packing list: {} of {} packed ({}%)",
        view.packed_items, view.total_items, view.progress_percent
    );
    for group in &view.groups {
        println!("  {} ({} items)", group.category, group.items.len());
    }

    if let Some(item) = view.groups.first().and_then(|g| g.items.first()) {
        state.packing_list.toggle_packed(item).await;
        state.packing_list.toggle_claim(item).await;
    }
    settle(&state).await;

    let view = state.packing_list.view().await;
    println!(
        "after packing one item: {} of {} packed ({}%)",
        view.packed_items, view.total_items, view.progress_percent
    );

    state.expenses.mount(Some(&trip.id)).await;
    let me = state.session.current_participant().await?;
    state
        .expenses
        .add_expense(AddExpenseRequest {
            description: "Tram tickets".to_string(),
            amount_minor: 1800,
            split_between: vec![me.id.clone(), "p-friend".to_string()],
        })
        .await;
    settle(&state).await;

    let settle_up = state.expenses.settle_up().await;
    for balance in &settle_up.balances {
        println!(
            "balance {}: {} cents",
            balance.display_name, balance.balance_minor
        );
    }
    for transfer in &settle_up.transfers {
        println!(
            "transfer {} -> {}: {} cents",
            transfer.from, transfer.to, transfer.amount_minor
        );
    }

    state.chat.mount(Some(&trip.id)).await;
    state
        .chat
        .send_message(SendMessageRequest {
            body: "Flights are booked!".to_string(),
        })
        .await;
    settle(&state).await;
    for message in state.chat.messages().await {
        println!("chat {}: {}", message.sender_name, message.body);
    }

    state.chat.unmount().await;
    state.expenses.unmount().await;
    state.packing_list.unmount().await;

    Ok(())
}
