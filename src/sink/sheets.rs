//! Google Sheets sink.
//!
//! Publishes the two block lists to the `INTERNAL_LINKS` and `EXTERNAL_LINKS`
//! worksheet tabs via the Sheets values API: a `values:clear` per tab
//! followed by a single `values:update` with `RAW` input, which replaces the
//! prior run's content wholesale.
//!
//! The spreadsheet id and bearer token are read from the environment at
//! publish time, so a misconfigured deployment surfaces as
//! [`SinkError::Configuration`] on the first request rather than at startup.

use reqwest::Client;
use serde_json::json;

use crate::config::{ACCESS_TOKEN_ENV, EXTERNAL_LINKS_TAB, INTERNAL_LINKS_TAB, SPREADSHEET_ID_ENV};
use crate::error_handling::SinkError;

use super::{block_rows, LinkBlocks, LinkSink};

const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Sink that writes into a Google spreadsheet.
#[derive(Clone)]
pub struct SheetsSink {
    client: Client,
}

impl SheetsSink {
    /// Creates a sink using the given HTTP client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn required_env(name: &str) -> Result<String, SinkError> {
        match std::env::var(name) {
            Ok(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(SinkError::Configuration(name.to_string())),
        }
    }

    async fn clear_tab(
        &self,
        spreadsheet_id: &str,
        token: &str,
        tab: &str,
    ) -> Result<(), SinkError> {
        let url = format!("{SHEETS_API_BASE}/{spreadsheet_id}/values/{tab}!A1:Z:clear");
        let response = self
            .client
            .post(url)
            .bearer_auth(token)
            .json(&json!({}))
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SinkError::Api(status));
        }
        Ok(())
    }

    async fn write_tab(
        &self,
        spreadsheet_id: &str,
        token: &str,
        tab: &str,
        rows: &[Vec<String>],
    ) -> Result<(), SinkError> {
        if rows.is_empty() {
            return Ok(());
        }
        let url = format!(
            "{SHEETS_API_BASE}/{spreadsheet_id}/values/{tab}!A1?valueInputOption=RAW"
        );
        let response = self
            .client
            .put(url)
            .bearer_auth(token)
            .json(&json!({
                "range": format!("{tab}!A1"),
                "majorDimension": "ROWS",
                "values": rows,
            }))
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SinkError::Api(status));
        }
        Ok(())
    }
}

impl LinkSink for SheetsSink {
    async fn publish(&self, internal: &LinkBlocks, external: &LinkBlocks) -> Result<(), SinkError> {
        let spreadsheet_id = Self::required_env(SPREADSHEET_ID_ENV)?;
        let token = Self::required_env(ACCESS_TOKEN_ENV)?;

        let internal_rows = render_blocks(internal, "INTERNAL LINK", "INT. ANCHOR TEXT");
        let external_rows = render_blocks(external, "EXTERNAL LINK", "EXT. ANCHOR TEXT");

        self.clear_tab(&spreadsheet_id, &token, INTERNAL_LINKS_TAB).await?;
        self.clear_tab(&spreadsheet_id, &token, EXTERNAL_LINKS_TAB).await?;

        self.write_tab(&spreadsheet_id, &token, INTERNAL_LINKS_TAB, &internal_rows)
            .await?;
        self.write_tab(&spreadsheet_id, &token, EXTERNAL_LINKS_TAB, &external_rows)
            .await?;

        log::info!(
            "Published {} internal and {} external rows",
            internal_rows.len(),
            external_rows.len()
        );
        Ok(())
    }
}

fn render_blocks(blocks: &LinkBlocks, header_left: &str, header_right: &str) -> Vec<Vec<String>> {
    blocks
        .iter()
        .flat_map(|(source_url, links)| block_rows(source_url, header_left, header_right, links))
        .collect()
}
