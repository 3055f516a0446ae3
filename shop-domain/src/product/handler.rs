use super::event::ProductCreatedEvent;
use crate::domain_event::DomainEvent;
use crate::eventing::EventHandler;
use tracing::info;

/// 商品创建后发送通知邮件（桩实现：仅记录日志）
#[derive(Debug, Clone)]
pub struct SendEmailWhenProductIsCreatedHandler {
    recipient: String,
}

impl SendEmailWhenProductIsCreatedHandler {
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
        }
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }
}

impl EventHandler for SendEmailWhenProductIsCreatedHandler {
    type Event = ProductCreatedEvent;

    fn handler_name(&self) -> &str {
        "send_email_when_product_is_created"
    }

    fn handle(&self, event: &ProductCreatedEvent) -> anyhow::Result<()> {
        let body = serde_json::to_string(event.event_data())?;
        info!(
            to = %self.recipient,
            occurred_at = %event.occurred_at(),
            %body,
            "Sending email to {}", self.recipient
        );
        Ok(())
    }
}
