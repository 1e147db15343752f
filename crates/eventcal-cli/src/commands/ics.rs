//! `eventcal ics`: write a calendar file.

use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use eventcal_core::{CalendarDocument, CalendarSettings, EventDetails, Session, generate_calendar};

use crate::commands::read_json;
use crate::error::{CliError, CliResult};

/// JSON input of the `ics` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarInput {
    pub event: EventDetails,
    #[serde(default)]
    pub sessions: Vec<Session>,
}

/// Generates the calendar for `input`, plain or base64-encoded.
pub fn render(
    settings: &CalendarSettings,
    input: &CalendarInput,
    base64: bool,
) -> CliResult<String> {
    let document: CalendarDocument = generate_calendar(settings, &input.event, &input.sessions)?;
    Ok(if base64 {
        document.to_base64()
    } else {
        document.into_string()
    })
}

/// Reads `input`, generates the calendar and writes it to `output` or stdout.
pub fn run(
    settings: &CalendarSettings,
    input: &Path,
    output: Option<&Path>,
    base64: bool,
) -> CliResult<()> {
    let request: CalendarInput = read_json(input)?;
    let rendered = render(settings, &request, base64)?;

    match output {
        Some(path) => {
            std::fs::write(path, &rendered).map_err(|e| CliError::io_at(path, e))?;
            info!(
                path = %path.display(),
                sessions = request.sessions.len(),
                "Wrote calendar"
            );
        }
        None => write_document(&mut std::io::stdout().lock(), &rendered)?,
    }
    Ok(())
}

/// Writes the document bytes as-is. No newline is appended, so stdout and
/// `--output` produce identical files.
fn write_document<W: Write>(out: &mut W, rendered: &str) -> CliResult<()> {
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}
