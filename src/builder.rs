//! Fluent builder for [`Message`].

use std::path::PathBuf;

use crate::message::Message;

/// Incrementally assembles a [`Message`] through chained calls.
///
/// Every accumulator method consumes the builder and returns it, so calls
/// chain in any order and any number of times. `build()` moves the finished
/// message out; ownership makes a second `build()` call impossible, which is
/// how the "builder's useful life ends at finalization" rule is enforced.
///
/// # Examples
///
/// ```
/// use mailforge::builder::MessageBuilder;
///
/// let msg = MessageBuilder::new()
///     .sender("alice@example.com")
///     .to("bob@example.com")
///     .subject("Hello")
///     .body("Short and sweet.")
///     .build();
/// assert_eq!(msg.to, vec!["bob@example.com"]);
/// ```
#[derive(Debug, Default)]
pub struct MessageBuilder {
    message: Message,
}

impl MessageBuilder {
    /// Create a builder owning an empty message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the sender address. No validation is performed.
    pub fn sender(mut self, address: impl Into<String>) -> Self {
        self.message.sender = address.into();
        self
    }

    /// Append a primary recipient. Duplicates are kept, order preserved.
    pub fn to(mut self, address: impl Into<String>) -> Self {
        self.message.to.push(address.into());
        self
    }

    /// Append a carbon-copy recipient.
    pub fn cc(mut self, address: impl Into<String>) -> Self {
        self.message.cc.push(address.into());
        self
    }

    /// Append a blind-copy recipient.
    pub fn bcc(mut self, address: impl Into<String>) -> Self {
        self.message.bcc.push(address.into());
        self
    }

    /// Replace the subject line.
    pub fn subject(mut self, text: impl Into<String>) -> Self {
        self.message.subject = text.into();
        self
    }

    /// Replace the body text.
    pub fn body(mut self, text: impl Into<String>) -> Self {
        self.message.body = text.into();
        self
    }

    /// Append an attachment reference. The file is not read or checked.
    pub fn attachment(mut self, path: impl Into<PathBuf>) -> Self {
        self.message.attachments.push(path.into());
        self
    }

    /// Finalize and return the accumulated message.
    pub fn build(self) -> Message {
        self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_empty_builder_yields_default_message() {
        let msg = MessageBuilder::new().build();
        assert_eq!(msg, Message::default());
    }

    #[test]
    fn test_full_chain() {
        let msg = MessageBuilder::new()
            .sender("a@x.com")
            .to("b@x.com")
            .cc("c@x.com")
            .subject("S")
            .body("B")
            .attachment("f.py")
            .build();

        assert_eq!(msg.sender, "a@x.com");
        assert_eq!(msg.to, vec!["b@x.com"]);
        assert_eq!(msg.cc, vec!["c@x.com"]);
        assert!(msg.bcc.is_empty());
        assert_eq!(msg.subject, "S");
        assert_eq!(msg.body, "B");
        assert_eq!(msg.attachments, vec![PathBuf::from("f.py")]);
    }

    #[test]
    fn test_setters_replace_appenders_accumulate() {
        let msg = MessageBuilder::new()
            .sender("first@x.com")
            .sender("second@x.com")
            .to("one@x.com")
            .to("two@x.com")
            .to("one@x.com")
            .subject("old")
            .subject("new")
            .build();

        assert_eq!(msg.sender, "second@x.com");
        assert_eq!(msg.to, vec!["one@x.com", "two@x.com", "one@x.com"]);
        assert_eq!(msg.subject, "new");
    }

    #[test]
    fn test_order_of_chained_calls_is_irrelevant_for_scalars() {
        let a = MessageBuilder::new().subject("S").body("B").build();
        let b = MessageBuilder::new().body("B").subject("S").build();
        assert_eq!(a, b);
    }
}
