//! Calendar generation settings.

use serde::{Deserialize, Serialize};

/// Deployment-specific constants used by the calendar generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarSettings {
    /// Value of the calendar's PRODID property.
    pub product_id: String,

    /// Mailbox used for the ORGANIZER mailto address.
    pub organizer_email: String,

    /// Domain appended to every generated UID.
    pub uid_domain: String,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            product_id: "-//eventcal//Event Sessions//EN".to_string(),
            organizer_email: "events@eventcal.local".to_string(),
            uid_domain: "eventcal.local".to_string(),
        }
    }
}

impl CalendarSettings {
    /// Creates settings for the given site domain.
    ///
    /// The UID suffix is the domain itself and the organizer address is
    /// `events@<domain>`.
    pub fn for_domain(domain: impl Into<String>) -> Self {
        let domain = domain.into();
        Self {
            organizer_email: format!("events@{}", domain),
            uid_domain: domain,
            ..Default::default()
        }
    }

    /// Builder: set the product identifier.
    pub fn with_product_id(mut self, product_id: impl Into<String>) -> Self {
        self.product_id = product_id.into();
        self
    }

    /// Builder: set the organizer mailbox.
    pub fn with_organizer_email(mut self, email: impl Into<String>) -> Self {
        self.organizer_email = email.into();
        self
    }

    /// Builder: set the UID domain.
    pub fn with_uid_domain(mut self, domain: impl Into<String>) -> Self {
        self.uid_domain = domain.into();
        self
    }
}
