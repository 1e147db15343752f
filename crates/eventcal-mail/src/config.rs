//! Email composition settings.

use serde::{Deserialize, Serialize};

/// Site-level values that appear in every email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MailSettings {
    /// Name used in the sign-off.
    pub site_name: String,

    /// Address shown for questions.
    pub support_email: String,
}

impl Default for MailSettings {
    fn default() -> Self {
        Self {
            site_name: "eventcal".to_string(),
            support_email: "support@eventcal.local".to_string(),
        }
    }
}

impl MailSettings {
    /// Creates mail settings with the given site name.
    pub fn new(site_name: impl Into<String>) -> Self {
        Self {
            site_name: site_name.into(),
            ..Default::default()
        }
    }

    /// Builder: set the support address.
    pub fn with_support_email(mut self, email: impl Into<String>) -> Self {
        self.support_email = email.into();
        self
    }
}
