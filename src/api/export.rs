use axum::extract::State;
use axum::http::{header, StatusCode};

use crate::storage::{Database, QuoteRecord};
use crate::QuotidianError;

use super::{error_response, AppState};

type Attachment = ([(header::HeaderName, &'static str); 2], String);

/// Export every stored quote as a CSV attachment.
pub async fn export_csv(
    State(state): State<AppState>,
) -> Result<Attachment, (StatusCode, String)> {
    let db = Database::open(&state.settings).map_err(error_response)?;
    let quotes = db.list_all_quotes().map_err(error_response)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=quotes.csv",
            ),
        ],
        quotes_to_csv(&quotes),
    ))
}

/// Export every stored quote as a pretty-printed JSON attachment.
pub async fn export_json(
    State(state): State<AppState>,
) -> Result<Attachment, (StatusCode, String)> {
    let db = Database::open(&state.settings).map_err(error_response)?;
    let quotes = db.list_all_quotes().map_err(error_response)?;

    let body = serde_json::to_string_pretty(&quotes)
        .map_err(|e| error_response(QuotidianError::Other(e.to_string())))?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/json"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=quotes.json",
            ),
        ],
        body,
    ))
}

fn quotes_to_csv(quotes: &[QuoteRecord]) -> String {
    let mut out = String::from("ID,Quote,Generated At,Theme\n");

    for q in quotes {
        out.push_str(&format!(
            "{},{},{},{}\n",
            q.id,
            csv_escape(&q.quote),
            csv_escape(&q.generated_at),
            csv_escape(&q.theme),
        ));
    }

    out
}

/// Quote a CSV cell when it contains a delimiter, a double quote, or a
/// line break (RFC 4180).
fn csv_escape(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}
