//! Comment edit replies.

use serde::Deserialize;

pub const UNKNOWN_EDIT_ERROR: &str = "An unknown error occurred.";

#[derive(Debug, Default, Deserialize)]
struct EditReply {
    comment: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// New Markdown source of the comment.
    Saved(String),
    /// Message to show under the edit box.
    Failed(String),
}

/// Interprets the server's reply to an edit: `{"comment": ...}` with a 2xx
/// status, or `{"error": ...}` otherwise. Bodies that are not JSON, or lack
/// the expected field, fall back to a generic error.
pub fn parse_edit_reply(status: u16, body: &str) -> EditOutcome {
    let reply: EditReply = serde_json::from_str(body).unwrap_or_else(|e| {
        tracing::debug!("comment edit reply is not JSON: {e}");
        EditReply::default()
    });
    if (200..300).contains(&status) {
        if let Some(comment) = reply.comment {
            return EditOutcome::Saved(comment);
        }
    }
    EditOutcome::Failed(
        reply
            .error
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| UNKNOWN_EDIT_ERROR.to_string()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_carries_comment() {
        assert_eq!(
            parse_edit_reply(200, r#"{"comment": "**new** text"}"#),
            EditOutcome::Saved("**new** text".to_string())
        );
    }

    #[test]
    fn server_error_message() {
        assert_eq!(
            parse_edit_reply(400, r#"{"error": "Comment editing time has expired."}"#),
            EditOutcome::Failed("Comment editing time has expired.".to_string())
        );
    }

    #[test]
    fn unparseable_reply_is_unknown_error() {
        assert_eq!(
            parse_edit_reply(500, "<html>Bad Gateway</html>"),
            EditOutcome::Failed(UNKNOWN_EDIT_ERROR.to_string())
        );
        assert_eq!(
            parse_edit_reply(200, "{}"),
            EditOutcome::Failed(UNKNOWN_EDIT_ERROR.to_string())
        );
    }
}
