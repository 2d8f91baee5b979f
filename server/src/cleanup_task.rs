use std::time::Duration;

use common::log;

use crate::game_session_manager::GameSessionManager;

/// Periodically drops games nobody has touched for `inactivity_timeout`.
pub struct CleanupTask {
    session_manager: GameSessionManager,
    check_interval: Duration,
    inactivity_timeout: Duration,
}

impl CleanupTask {
    pub fn new(
        session_manager: GameSessionManager,
        check_interval: Duration,
        inactivity_timeout: Duration,
    ) -> Self {
        Self {
            session_manager,
            check_interval,
            inactivity_timeout,
        }
    }

    pub async fn run(&self) {
        let mut interval = tokio::time::interval(self.check_interval);

        loop {
            interval.tick().await;
            self.cleanup_inactive().await;
        }
    }

    /// Returns the number of games removed.
    pub async fn cleanup_inactive(&self) -> usize {
        let inactive_sessions = self
            .session_manager
            .get_inactive_sessions(self.inactivity_timeout)
            .await;

        let mut removed = 0;
        for game_id in inactive_sessions {
            if self
                .session_manager
                .remove_if_inactive(&game_id, self.inactivity_timeout)
                .await
            {
                removed += 1;
            }
        }
        if removed > 0 {
            log!("Cleanup removed {} inactive games", removed);
        }
        removed
    }
}
