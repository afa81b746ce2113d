use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tokio::task::{self, JoinHandle};

use super::database::Database;
use crate::shared::errors::{AppError, AppResult};
use crate::{log_error, log_info, log_warn};

/// Handle shared by the repositories, the health route and the monitor
pub type SharedDatabaseState = Arc<RwLock<DatabaseState>>;

const CHECK_INTERVAL: Duration = Duration::from_secs(30);
const MAX_BACKOFF: Duration = Duration::from_secs(300);

/// What it takes to (re)build the pool
#[derive(Debug, Clone)]
pub struct ConnectionSettings {
    pub database_url: String,
    pub max_pool_size: Option<u32>,
}

/// Connectivity of the backing store.
///
/// The HTTP surface stays up in every state; requests that need the store
/// fail with a 503 envelope until it is `Connected`.
#[derive(Debug, Clone)]
pub enum DatabaseState {
    Connected(Arc<Database>),
    Disconnected {
        reason: String,
        failed_at: Instant,
        attempts: u32,
    },
    Connecting,
}

impl DatabaseState {
    /// First connection attempt at boot. Blocks on the pool handshake.
    pub fn initialize(settings: &ConnectionSettings) -> Self {
        Self::connect(settings, 0)
    }

    fn connect(settings: &ConnectionSettings, previous_attempts: u32) -> Self {
        match Database::new(&settings.database_url, settings.max_pool_size) {
            Ok(db) => DatabaseState::Connected(Arc::new(db)),
            Err(e) => DatabaseState::Disconnected {
                reason: e.to_string(),
                failed_at: Instant::now(),
                attempts: previous_attempts.saturating_add(1),
            },
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, DatabaseState::Connected(_))
    }

    pub fn get_database(&self) -> AppResult<Arc<Database>> {
        match self {
            DatabaseState::Connected(db) => Ok(Arc::clone(db)),
            DatabaseState::Disconnected { reason, .. } => Err(AppError::ServiceUnavailable(
                format!("database unreachable: {}", reason),
            )),
            DatabaseState::Connecting => Err(AppError::ServiceUnavailable(
                "database connection in progress".to_string(),
            )),
        }
    }

    /// Failed attempts so far, if the backoff for them has elapsed and a
    /// retry is due now
    pub fn reconnect_due(&self) -> Option<u32> {
        match self {
            DatabaseState::Disconnected {
                failed_at,
                attempts,
                ..
            } if failed_at.elapsed() >= Self::backoff(*attempts) => Some(*attempts),
            _ => None,
        }
    }

    /// Build a fresh pool after `previous_attempts` failures. Blocks.
    pub fn reconnect(settings: &ConnectionSettings, previous_attempts: u32) -> Self {
        let next = Self::connect(settings, previous_attempts);
        match &next {
            DatabaseState::Connected(_) => log_info!(
                "Reconnected to the database after {} failed attempts",
                previous_attempts
            ),
            DatabaseState::Disconnected { reason, .. } => log_warn!(
                "Reconnect attempt {} failed: {}",
                previous_attempts + 1,
                reason
            ),
            DatabaseState::Connecting => {}
        }
        next
    }

    /// 2^attempts seconds, capped at five minutes
    fn backoff(attempts: u32) -> Duration {
        2_u64
            .checked_pow(attempts)
            .map(Duration::from_secs)
            .map_or(MAX_BACKOFF, |d| d.min(MAX_BACKOFF))
    }

    /// Short label exposed by the health route
    pub fn status_message(&self) -> String {
        match self {
            DatabaseState::Connected(_) => "connected".to_string(),
            DatabaseState::Disconnected { attempts, .. } => {
                format!("disconnected ({} failed attempts)", attempts)
            }
            DatabaseState::Connecting => "connecting".to_string(),
        }
    }
}

/// Periodically retries a lost connection and re-applies migrations once
/// it comes back.
pub struct DatabaseHealthMonitor {
    state: SharedDatabaseState,
    settings: ConnectionSettings,
}

impl DatabaseHealthMonitor {
    pub fn new(initial_state: DatabaseState, settings: ConnectionSettings) -> Self {
        if let DatabaseState::Disconnected { reason, .. } = &initial_state {
            log_error!("Starting without a database: {}", reason);
        }
        Self {
            state: Arc::new(RwLock::new(initial_state)),
            settings,
        }
    }

    pub fn get_state(&self) -> SharedDatabaseState {
        Arc::clone(&self.state)
    }

    pub fn start_monitoring(&self) -> JoinHandle<()> {
        let state = Arc::clone(&self.state);
        let settings = self.settings.clone();

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(CHECK_INTERVAL);

            loop {
                ticker.tick().await;
                Self::check_once(&state, &settings, DatabaseState::reconnect).await;
            }
        })
    }

    /// One monitor tick. The lock is only held to read or swap the state;
    /// `connect` and migrations run on the blocking pool without it, so
    /// requests keep failing fast with 503 meanwhile.
    async fn check_once<F>(state: &SharedDatabaseState, settings: &ConnectionSettings, connect: F) -> bool
    where
        F: FnOnce(&ConnectionSettings, u32) -> DatabaseState + Send + 'static,
    {
        let attempts = {
            let mut guard = state.write().await;
            match guard.reconnect_due() {
                Some(attempts) => {
                    *guard = DatabaseState::Connecting;
                    attempts
                }
                None => return guard.is_connected(),
            }
        };

        let settings = settings.clone();
        let next = task::spawn_blocking(move || connect(&settings, attempts))
            .await
            .unwrap_or_else(|e| DatabaseState::Disconnected {
                reason: format!("reconnect task failed: {}", e),
                failed_at: Instant::now(),
                attempts: attempts.saturating_add(1),
            });

        let database = next.get_database().ok();
        *state.write().await = next;

        let Some(database) = database else {
            return false;
        };
        match task::spawn_blocking(move || database.run_migrations()).await {
            Ok(Ok(_)) => {}
            Ok(Err(e)) => log_error!("Migrations after reconnect failed: {}", e),
            Err(e) => log_error!("Migration task failed: {}", e),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disconnected(attempts: u32) -> DatabaseState {
        DatabaseState::Disconnected {
            reason: "connection refused".to_string(),
            failed_at: Instant::now(),
            attempts,
        }
    }

    #[test]
    fn test_disconnected_state_maps_to_service_unavailable() {
        let state = disconnected(2);
        assert!(!state.is_connected());
        assert!(matches!(
            state.get_database(),
            Err(AppError::ServiceUnavailable(_))
        ));
        assert_eq!(state.status_message(), "disconnected (2 failed attempts)");
    }

    #[test]
    fn test_connecting_state() {
        let state = DatabaseState::Connecting;
        assert!(matches!(
            state.get_database(),
            Err(AppError::ServiceUnavailable(_))
        ));
        assert_eq!(state.status_message(), "connecting");
    }

    fn settings() -> ConnectionSettings {
        ConnectionSettings {
            database_url: "postgres://nobody@127.0.0.1:1/none".to_string(),
            max_pool_size: Some(1),
        }
    }

    fn overdue(attempts: u32) -> DatabaseState {
        DatabaseState::Disconnected {
            reason: "connection refused".to_string(),
            failed_at: Instant::now()
                .checked_sub(Duration::from_secs(3600))
                .unwrap_or_else(Instant::now),
            attempts,
        }
    }

    #[test]
    fn test_reconnect_waits_for_backoff() {
        // failed just now, the 4s backoff has not elapsed
        assert_eq!(disconnected(2).reconnect_due(), None);
        assert_eq!(overdue(2).reconnect_due(), Some(2));
        assert_eq!(DatabaseState::Connecting.reconnect_due(), None);
    }

    #[tokio::test]
    async fn test_check_once_skips_when_backoff_pending() {
        let state: SharedDatabaseState = Arc::new(RwLock::new(disconnected(2)));

        let connected = DatabaseHealthMonitor::check_once(&state, &settings(), |_, _| {
            panic!("connect must not run before the backoff elapses")
        })
        .await;

        assert!(!connected);
        assert!(matches!(
            *state.read().await,
            DatabaseState::Disconnected { attempts: 2, .. }
        ));
    }

    #[tokio::test]
    async fn test_check_once_connects_without_holding_the_lock() {
        use std::sync::atomic::{AtomicBool, Ordering};

        let state: SharedDatabaseState = Arc::new(RwLock::new(overdue(3)));
        let observed = Arc::clone(&state);
        let readable_while_connecting = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&readable_while_connecting);

        let connected = DatabaseHealthMonitor::check_once(&state, &settings(), move |_, attempts| {
            if let Ok(current) = observed.try_read() {
                let fails_fast = matches!(*current, DatabaseState::Connecting)
                    && current.get_database().is_err();
                flag.store(fails_fast, Ordering::SeqCst);
            }
            DatabaseState::Disconnected {
                reason: "still refused".to_string(),
                failed_at: Instant::now(),
                attempts: attempts + 1,
            }
        })
        .await;

        assert!(readable_while_connecting.load(Ordering::SeqCst));
        assert!(!connected);
        assert!(matches!(
            *state.read().await,
            DatabaseState::Disconnected { attempts: 4, .. }
        ));
    }

    #[test]
    fn test_backoff_is_capped() {
        assert_eq!(DatabaseState::backoff(0), Duration::from_secs(1));
        assert_eq!(DatabaseState::backoff(3), Duration::from_secs(8));
        assert_eq!(DatabaseState::backoff(20), MAX_BACKOFF);
        assert_eq!(DatabaseState::backoff(200), MAX_BACKOFF);
    }
}
