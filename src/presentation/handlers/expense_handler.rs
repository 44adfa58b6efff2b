use crate::application::ports::{Notifier, Toast};
use crate::application::services::{ExpenseService, SessionService};
use crate::domain::entities::Expense;
use crate::domain::value_objects::TripId;
use crate::presentation::dto::{AddExpenseRequest, Validate};
use crate::presentation::views::{settle_up_view, SettleUpView};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;

/// Expenses and settle-up screens for one trip.
pub struct ExpenseHandler {
    service: Arc<ExpenseService>,
    session: Arc<SessionService>,
    notifier: Arc<dyn Notifier>,
    trip: RwLock<TripId>,
}

impl ExpenseHandler {
    pub fn new(
        service: Arc<ExpenseService>,
        session: Arc<SessionService>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            service,
            session,
            notifier,
            trip: RwLock::new(TripId::from_route_param(None)),
        }
    }

    pub async fn mount(&self, route_param: Option<&str>) -> Vec<Expense> {
        let trip_id = TripId::from_route_param(route_param);
        *self.trip.write().await = trip_id.clone();

        if let Err(err) = self.service.load(&trip_id).await {
            warn!("expense load failed: {}", err);
            self.notifier
                .notify(Toast::error("Failed to load expenses"))
                .await;
        }
        if let Err(err) = self.service.subscribe(&trip_id).await {
            warn!("expense subscribe failed: {}", err);
            self.notifier
                .notify(Toast::error("Failed to subscribe to updates"))
                .await;
        }

        self.service.expenses().await
    }

    pub async fn unmount(&self) {
        self.service.unsubscribe().await;
    }

    pub async fn add_expense(&self, request: AddExpenseRequest) {
        if let Err(reason) = request.validate() {
            warn!("refusing expense: {}", reason);
            return;
        }

        let payer = match self.session.current_participant().await {
            Ok(participant) => participant,
            Err(err) => {
                warn!("resolving participant failed: {}", err);
                self.notifier
                    .notify(Toast::error("Failed to add expense"))
                    .await;
                return;
            }
        };

        let trip_id = self.trip.read().await.clone();
        if let Err(err) = self
            .service
            .add_expense(
                &trip_id,
                &request.description,
                request.amount_minor,
                &payer,
                request.split_between,
            )
            .await
        {
            warn!("add expense failed: {}", err);
            self.notifier
                .notify(Toast::error("Failed to add expense"))
                .await;
        }
    }

    pub async fn delete_expense(&self, expense_id: &str) {
        if let Err(err) = self.service.delete_expense(expense_id).await {
            warn!("delete expense failed: {}", err);
            self.notifier
                .notify(Toast::error("Failed to delete expense"))
                .await;
        }
    }

    pub async fn expenses(&self) -> Vec<Expense> {
        self.service.expenses().await
    }

    pub async fn settle_up(&self) -> SettleUpView {
        settle_up_view(&self.service.expenses().await)
    }
}
