use crate::application::ports::PreferenceStore;
use crate::domain::constants::{
    DEFAULT_DISPLAY_NAME, PREF_DISPLAY_NAME, PREF_HAS_SEEN_ONBOARDING, PREF_IS_LOGGED_IN,
    PREF_PARTICIPANT_ID,
};
use crate::domain::value_objects::Participant;
use crate::shared::error::AppError;
use std::sync::Arc;

/// Where the app lands on startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartRoute {
    Onboarding,
    Login,
    Dashboard,
}

/// Start-route decision and the local participant profile, both backed
/// by the preference store.
pub struct SessionService {
    preferences: Arc<dyn PreferenceStore>,
}

impl SessionService {
    pub fn new(preferences: Arc<dyn PreferenceStore>) -> Self {
        Self { preferences }
    }

    /// First run goes to onboarding; afterwards the login flag decides
    /// between dashboard and login.
    pub async fn start_route(&self) -> Result<StartRoute, AppError> {
        if !self.preferences.get_flag(PREF_HAS_SEEN_ONBOARDING).await? {
            return Ok(StartRoute::Onboarding);
        }
        if self.preferences.get_flag(PREF_IS_LOGGED_IN).await? {
            Ok(StartRoute::Dashboard)
        } else {
            Ok(StartRoute::Login)
        }
    }

    pub async fn complete_onboarding(&self) -> Result<(), AppError> {
        self.preferences
            .set_flag(PREF_HAS_SEEN_ONBOARDING, true)
            .await
    }

    pub async fn log_in(&self, display_name: &str) -> Result<(), AppError> {
        let display_name = display_name.trim();
        if !display_name.is_empty() {
            self.preferences
                .set_string(PREF_DISPLAY_NAME, display_name)
                .await?;
        }
        self.preferences.set_flag(PREF_IS_LOGGED_IN, true).await
    }

    pub async fn log_out(&self) -> Result<(), AppError> {
        self.preferences.set_flag(PREF_IS_LOGGED_IN, false).await
    }

    pub async fn display_name(&self) -> Result<String, AppError> {
        Ok(self
            .preferences
            .get_string(PREF_DISPLAY_NAME)
            .await?
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string()))
    }

    /// The acting participant for claim, expense and chat operations.
    /// The identifier is generated once and persisted; the display name
    /// follows the stored preference.
    pub async fn current_participant(&self) -> Result<Participant, AppError> {
        let id = match self.preferences.get_string(PREF_PARTICIPANT_ID).await? {
            Some(id) if !id.is_empty() => id,
            _ => {
                let id = uuid::Uuid::new_v4().to_string();
                self.preferences.set_string(PREF_PARTICIPANT_ID, &id).await?;
                id
            }
        };
        let display_name = self.display_name().await?;
        Participant::new(id, display_name).map_err(AppError::Internal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use tokio::sync::RwLock;

    #[derive(Default)]
    struct MemoryPreferences {
        flags: RwLock<HashMap<String, bool>>,
        strings: RwLock<HashMap<String, String>>,
    }

    #[async_trait]
    impl PreferenceStore for MemoryPreferences {
        async fn get_flag(&self, key: &str) -> Result<bool, AppError> {
            Ok(self.flags.read().await.get(key).copied().unwrap_or(false))
        }

        async fn set_flag(&self, key: &str, value: bool) -> Result<(), AppError> {
            self.flags.write().await.insert(key.to_string(), value);
            Ok(())
        }

        async fn get_string(&self, key: &str) -> Result<Option<String>, AppError> {
            Ok(self.strings.read().await.get(key).cloned())
        }

        async fn set_string(&self, key: &str, value: &str) -> Result<(), AppError> {
            self.strings
                .write()
                .await
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    fn service() -> SessionService {
        SessionService::new(Arc::new(MemoryPreferences::default()))
    }

    #[tokio::test]
    async fn first_run_routes_to_onboarding() {
        let svc = service();
        assert_eq!(svc.start_route().await.unwrap(), StartRoute::Onboarding);
    }

    #[tokio::test]
    async fn onboarded_but_logged_out_routes_to_login() {
        let svc = service();
        svc.complete_onboarding().await.unwrap();
        assert_eq!(svc.start_route().await.unwrap(), StartRoute::Login);
    }

    #[tokio::test]
    async fn onboarded_and_logged_in_routes_to_dashboard() {
        let svc = service();
        svc.complete_onboarding().await.unwrap();
        svc.log_in("Ada").await.unwrap();
        assert_eq!(svc.start_route().await.unwrap(), StartRoute::Dashboard);
    }

    #[tokio::test]
    async fn display_name_defaults_to_anonymous() {
        let svc = service();
        assert_eq!(svc.display_name().await.unwrap(), "Anonymous");
    }

    #[tokio::test]
    async fn participant_id_is_stable_across_calls() {
        let svc = service();
        let first = svc.current_participant().await.unwrap();
        let second = svc.current_participant().await.unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(first.display_name, "Anonymous");
    }
}
