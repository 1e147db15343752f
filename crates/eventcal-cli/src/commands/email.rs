//! `eventcal email`: compose an attendee email as JSON.

use std::path::Path;

use eventcal_mail::{ConfirmationRequest, EmailNotification, MailComposer, ReminderRequest};

use crate::commands::read_json;
use crate::error::CliResult;

/// Composes a confirmation email from the request at `input` and prints it.
pub fn confirmation(composer: &MailComposer, input: &Path) -> CliResult<()> {
    let request: ConfirmationRequest = read_json(input)?;
    print(&composer.confirmation(&request))
}

/// Composes a reminder email from the request at `input` and prints it.
pub fn reminder(composer: &MailComposer, input: &Path) -> CliResult<()> {
    let request: ReminderRequest = read_json(input)?;
    print(&composer.reminder(&request))
}

fn print(notification: &EmailNotification) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(notification)?);
    Ok(())
}
