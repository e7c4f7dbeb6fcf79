//! Diagnostic report side channel
//!
//! Best-effort reporting of anomalies (unknown address formats and the
//! like) as plain entries in a dedicated reports journal. The reporter
//! must never fail a user request: every error is swallowed with a
//! warning.

use crate::domain::entity::AuthScheme;
use crate::infrastructure::client::{EntryPayload, JournalClient};
use crate::infrastructure::config::Config;
use tracing::warn;
use uuid::Uuid;

pub struct Reporter {
    client: Option<JournalClient>,
    token: String,
    journal_id: Uuid,
}

impl Reporter {
    /// Build a reporter from config; reporting stays disabled unless both
    /// a reports token and a reports journal are configured.
    pub fn from_config(config: &Config) -> Self {
        let (client, token, journal_id) =
            match (&config.reports_token, config.reports_journal_id) {
                (Some(token), Some(journal_id)) => match JournalClient::new(config) {
                    Ok(client) => (Some(client), token.clone(), journal_id),
                    Err(e) => {
                        warn!(error = %e, "failed to build reporter client, reporting disabled");
                        (None, String::new(), Uuid::nil())
                    }
                },
                _ => (None, String::new(), Uuid::nil()),
            };

        Reporter {
            client,
            token,
            journal_id,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.client.is_some()
    }

    /// Post a custom report; failures are logged and dropped
    pub fn custom_report(&self, title: &str, content: &str, tags: Vec<String>) {
        let Some(client) = &self.client else {
            return;
        };

        let payload = EntryPayload {
            title: title.to_string(),
            content: content.to_string(),
            tags,
            context_type: "report".to_string(),
        };

        if let Err(e) =
            client.create_entry(&self.token, AuthScheme::Bearer, self.journal_id, &payload)
        {
            warn!(error = %e, title, "failed to deliver diagnostic report");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_without_reports_config() {
        let config = Config::new("https://journal.example.com");
        let reporter = Reporter::from_config(&config);
        assert!(!reporter.is_enabled());

        // A disabled reporter is a no-op, not an error
        reporter.custom_report("title", "content", vec![]);
    }

    #[test]
    fn test_enabled_with_token_and_journal() {
        let mut config = Config::new("https://journal.example.com");
        config.reports_token = Some("token".to_string());
        config.reports_journal_id = Some(Uuid::new_v4());

        let reporter = Reporter::from_config(&config);
        assert!(reporter.is_enabled());
    }
}
