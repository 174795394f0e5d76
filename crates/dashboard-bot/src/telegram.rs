//! Report Delivery
//!
//! Bot API `sendMessage` client. Reports longer than the message size
//! limit are split into ordered segments, preferring newline boundaries;
//! splits always fall on character boundaries.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// The Bot API caps messages at 4096 characters; stay under it with
/// headroom for the HTML wrapper the API may add.
pub const MAX_MESSAGE_CHARS: usize = 4000;

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    ok: bool,
    description: Option<String>,
}

/// Delivery client bound to one chat
pub struct TelegramClient {
    api_base: String,
    token: String,
    chat_id: String,
    client: reqwest::Client,
}

impl TelegramClient {
    pub fn new(token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            api_base: "https://api.telegram.org".into(),
            token: token.into(),
            chat_id: chat_id.into(),
            client,
        }
    }

    /// Deliver one report, chunked when oversized. Segments go out in
    /// original text order; the first failure aborts the remainder.
    pub async fn send_report(&self, text: &str) -> anyhow::Result<()> {
        for segment in chunk_message(text, MAX_MESSAGE_CHARS) {
            self.send_segment(&segment).await?;
        }
        Ok(())
    }

    async fn send_segment(&self, text: &str) -> anyhow::Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.api_base, self.token);
        let response: SendMessageResponse = self
            .client
            .post(&url)
            .json(&SendMessageRequest {
                chat_id: &self.chat_id,
                text,
            })
            .send()
            .await?
            .json()
            .await?;

        if !response.ok {
            anyhow::bail!(
                "message delivery refused: {}",
                response.description.unwrap_or_else(|| "no description".into())
            );
        }

        tracing::debug!("delivered segment of {} chars", text.chars().count());
        Ok(())
    }
}

/// Split `text` into ordered segments of at most `limit` characters.
/// Whole lines are kept together whenever they fit; a single line longer
/// than the limit is hard-split.
pub(crate) fn chunk_message(text: &str, limit: usize) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0usize;

    for line in text.split_inclusive('\n') {
        let line_chars = line.chars().count();

        if line_chars > limit {
            if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
                current_chars = 0;
            }
            let mut piece = String::new();
            let mut piece_chars = 0usize;
            for ch in line.chars() {
                piece.push(ch);
                piece_chars += 1;
                if piece_chars == limit {
                    segments.push(std::mem::take(&mut piece));
                    piece_chars = 0;
                }
            }
            current = piece;
            current_chars = piece_chars;
            continue;
        }

        if current_chars + line_chars > limit {
            segments.push(std::mem::take(&mut current));
            current_chars = 0;
        }
        current.push_str(line);
        current_chars += line_chars;
    }

    if !current.is_empty() {
        segments.push(current);
    }
    segments
}
