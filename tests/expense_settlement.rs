mod common;

use common::{backend, eventually};
use std::sync::Arc;
use wayfarer::application::services::{ChatService, ExpenseService};
use wayfarer::domain::value_objects::{Participant, TripId};
use wayfarer::presentation::views::settle_up_view;

fn ada() -> Participant {
    Participant::new("p-ada".to_string(), "Ada".to_string()).unwrap()
}

fn bob() -> Participant {
    Participant::new("p-bob".to_string(), "Bob".to_string()).unwrap()
}

#[tokio::test]
async fn shared_expenses_settle_to_zero() {
    let backend = backend().await;
    let trip = TripId::new("trip-1".to_string()).unwrap();

    let service = Arc::new(ExpenseService::new(
        backend.store.clone(),
        backend.feed.clone(),
    ));
    service.load(&trip).await.unwrap();
    service.subscribe(&trip).await.unwrap();

    service
        .add_expense(
            &trip,
            "Dinner",
            9000,
            &ada(),
            vec!["p-ada".to_string(), "p-bob".to_string(), "p-cleo".to_string()],
        )
        .await
        .unwrap();
    service
        .add_expense(
            &trip,
            "Taxi",
            2100,
            &bob(),
            vec!["p-ada".to_string(), "p-bob".to_string(), "p-cleo".to_string()],
        )
        .await
        .unwrap();

    let probe = Arc::clone(&service);
    eventually(
        move || {
            let svc = Arc::clone(&probe);
            async move { svc.expenses().await.len() == 2 }
        },
        "both expenses arrived",
    )
    .await;

    let view = settle_up_view(&service.expenses().await);
    let sum: i64 = view.balances.iter().map(|b| b.balance_minor).sum();
    assert_eq!(sum, 0);

    // Ada fronted 9000 and owes 3000 + 700; Bob fronted 2100 and owes
    // the same shares; Cleo only owes.
    let balance_of = |id: &str| {
        view.balances
            .iter()
            .find(|b| b.participant_id == id)
            .map(|b| b.balance_minor)
            .unwrap()
    };
    assert_eq!(balance_of("p-ada"), 9000 - 3000 - 700);
    assert_eq!(balance_of("p-bob"), 2100 - 3000 - 700);
    assert_eq!(balance_of("p-cleo"), -3700);

    // The plan clears every balance.
    let mut nets: std::collections::HashMap<String, i64> = view
        .balances
        .iter()
        .map(|b| (b.participant_id.clone(), b.balance_minor))
        .collect();
    for transfer in &view.transfers {
        *nets.get_mut(&transfer.from).unwrap() += transfer.amount_minor;
        *nets.get_mut(&transfer.to).unwrap() -= transfer.amount_minor;
    }
    assert!(nets.values().all(|net| *net == 0));
}

#[tokio::test]
async fn expenses_list_newest_first_on_reload() {
    let backend = backend().await;
    let trip = TripId::new("trip-1".to_string()).unwrap();

    let service = ExpenseService::new(backend.store.clone(), backend.feed.clone());
    service
        .add_expense(&trip, "Breakfast", 1200, &ada(), vec!["p-ada".to_string()])
        .await
        .unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    service
        .add_expense(&trip, "Museum", 3000, &ada(), vec!["p-ada".to_string()])
        .await
        .unwrap();

    let rows = service.load(&trip).await.unwrap();
    let descriptions: Vec<&str> = rows.iter().map(|e| e.description.as_str()).collect();
    assert_eq!(descriptions, vec!["Museum", "Breakfast"]);
}

#[tokio::test]
async fn chat_messages_flow_to_other_views_in_send_order() {
    let backend = backend().await;
    let trip = TripId::new("trip-1".to_string()).unwrap();

    let view_a = Arc::new(ChatService::new(backend.store.clone(), backend.feed.clone()));
    let view_b = Arc::new(ChatService::new(backend.store.clone(), backend.feed.clone()));
    view_a.load(&trip).await.unwrap();
    view_a.subscribe(&trip).await.unwrap();
    view_b.load(&trip).await.unwrap();
    view_b.subscribe(&trip).await.unwrap();

    view_a.send_message(&trip, &ada(), "Landed!").await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    view_b
        .send_message(&trip, &bob(), "Meet you at the hotel")
        .await
        .unwrap();

    let probe = Arc::clone(&view_a);
    eventually(
        move || {
            let svc = Arc::clone(&probe);
            async move { svc.messages().await.len() == 2 }
        },
        "both messages arrived",
    )
    .await;

    // Whitespace bodies never reach the store or the feed.
    view_a.send_message(&trip, &ada(), "   ").await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    assert_eq!(view_a.messages().await.len(), 2);

    let reloaded = view_b.load(&trip).await.unwrap();
    let bodies: Vec<&str> = reloaded.iter().map(|m| m.body.as_str()).collect();
    assert_eq!(bodies, vec!["Landed!", "Meet you at the hotel"]);
}
