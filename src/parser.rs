//! MIME decoding into [`DecodedMessage`]
//!
//! Decoding is best effort: a part that fails to decode contributes an
//! empty string instead of failing the message.

use crate::error::{DetectError, Result};
use crate::types::DecodedMessage;
use tracing::{debug, warn};

/// Text of one MIME part, or the reason it could not be decoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartText {
    Decoded(String),
    EmptyOnFailure { reason: String },
}

impl PartText {
    /// The decoded text, or an empty string on failure
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Decoded(text) => text,
            Self::EmptyOnFailure { .. } => String::new(),
        }
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::EmptyOnFailure { .. })
    }
}

/// Parse raw message bytes into the plain-text form the detector consumes
pub fn decode_message(raw: &[u8]) -> Result<DecodedMessage> {
    let parsed = mailparse::parse_mail(raw).map_err(|e| DetectError::Structure(e.to_string()))?;

    let subject = header_value(&parsed.headers, "subject");
    let sender = header_value(&parsed.headers, "from");
    let header_date = header_value(&parsed.headers, "date");

    let body = if parsed.subparts.is_empty() {
        decode_part(&parsed).into_text()
    } else {
        let mut body = String::new();
        collect_text_parts(&parsed, &mut body);
        body
    };

    debug!("Decoded message: {subject} from {sender}");

    Ok(DecodedMessage {
        subject,
        sender,
        header_date,
        body,
    })
}

/// Decode one part's payload, turning failure into an explicit value
#[must_use]
pub fn decode_part(part: &mailparse::ParsedMail) -> PartText {
    match part.get_body() {
        Ok(text) => PartText::Decoded(text),
        Err(e) => {
            let reason = e.to_string();
            warn!("Dropping undecodable {} part: {reason}", part.ctype.mimetype);
            PartText::EmptyOnFailure { reason }
        }
    }
}

fn header_value(headers: &[mailparse::MailHeader], name: &str) -> String {
    headers
        .iter()
        .find(|h| h.get_key().to_lowercase() == name)
        .map(mailparse::MailHeader::get_value)
        .unwrap_or_default()
}

fn collect_text_parts(parsed: &mailparse::ParsedMail, body: &mut String) {
    for part in &parsed.subparts {
        if part.subparts.is_empty() {
            if is_attachment(part) {
                continue;
            }

            let content_type = part.ctype.mimetype.to_lowercase();
            if content_type == "text/plain" || content_type == "text/html" {
                body.push_str(&decode_part(part).into_text());
            }
        } else {
            collect_text_parts(part, body);
        }
    }
}

fn is_attachment(part: &mailparse::ParsedMail) -> bool {
    part.headers
        .iter()
        .find(|h| h.get_key().to_lowercase() == "content-disposition")
        .is_some_and(|h| h.get_value().to_lowercase().contains("attachment"))
}
