//! Email message model.

use std::path::PathBuf;

/// A composed email message.
///
/// Fields are populated exclusively through
/// [`MessageBuilder`](crate::builder::MessageBuilder); once `build()` hands
/// the message to a consumer it is treated as complete. Recipient and
/// attachment lists preserve insertion order and permit duplicates — no
/// address or path validation is performed.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    /// Sender address (`From:`). Empty until set.
    pub sender: String,

    /// Primary recipients (`To:`), in the order they were added.
    pub to: Vec<String>,

    /// Carbon-copy recipients (`Cc:`).
    pub cc: Vec<String>,

    /// Blind-copy recipients (`Bcc:`).
    pub bcc: Vec<String>,

    /// Subject line. Empty until set.
    pub subject: String,

    /// Plain-text body. Empty until set.
    pub body: String,

    /// Attached file references, in the order they were added.
    pub attachments: Vec<PathBuf>,
}

impl Message {
    /// Render the message as a human-readable block of headers and body.
    ///
    /// This is the observable output of "sending": the caller decides where
    /// the text goes (stdout, a log, a test assertion). Rendering never
    /// fails.
    pub fn render(&self) -> String {
        let mut content = String::new();

        content.push_str(&format!("From:    {}\n", self.sender));
        content.push_str(&format!("To:      {}\n", self.to.join(", ")));
        content.push_str(&format!("Cc:      {}\n", self.cc.join(", ")));
        content.push_str(&format!("Bcc:     {}\n", self.bcc.join(", ")));
        content.push_str(&format!("Subject: {}\n", self.subject));
        content.push_str(&format!("\n{}\n", "-".repeat(72)));
        content.push_str(&format!("\n{}\n", self.body));

        if !self.attachments.is_empty() {
            content.push_str(&format!(
                "\n[Attachments: {} file(s)]\n",
                self.attachments.len()
            ));
            for att in &self.attachments {
                content.push_str(&format!("  - {}\n", att.display()));
            }
        }

        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_message_is_empty() {
        let msg = Message::default();
        assert_eq!(msg.sender, "");
        assert!(msg.to.is_empty());
        assert!(msg.cc.is_empty());
        assert!(msg.bcc.is_empty());
        assert_eq!(msg.subject, "");
        assert_eq!(msg.body, "");
        assert!(msg.attachments.is_empty());
    }

    #[test]
    fn test_render_contains_all_fields() {
        let msg = Message {
            sender: "alice@example.com".to_string(),
            to: vec!["bob@example.com".to_string()],
            cc: vec![],
            bcc: vec![],
            subject: "Status".to_string(),
            body: "All green.".to_string(),
            attachments: vec![PathBuf::from("report.pdf")],
        };
        let rendered = msg.render();
        assert!(rendered.contains("From:    alice@example.com"));
        assert!(rendered.contains("To:      bob@example.com"));
        assert!(rendered.contains("Subject: Status"));
        assert!(rendered.contains("All green."));
        assert!(rendered.contains("[Attachments: 1 file(s)]"));
        assert!(rendered.contains("report.pdf"));
    }

    #[test]
    fn test_render_omits_attachment_block_when_empty() {
        let msg = Message::default();
        assert!(!msg.render().contains("[Attachments"));
    }
}
