use super::event::{CustomerAddressChanged, CustomerCreatedEvent};
use crate::domain_event::DomainEvent;
use crate::eventing::EventHandler;
use anyhow::anyhow;
use tracing::info;

/// 客户创建后输出第一条日志
#[derive(Debug, Default)]
pub struct PrintConsoleLogWhenCustomerCreated;

impl EventHandler for PrintConsoleLogWhenCustomerCreated {
    type Event = CustomerCreatedEvent;

    fn handler_name(&self) -> &str {
        "print_console_log_when_customer_created"
    }

    fn handle(&self, event: &CustomerCreatedEvent) -> anyhow::Result<()> {
        info!(
            customer_id = %event.event_data().id,
            "This is the first console.log of the event: CustomerCreated"
        );
        Ok(())
    }
}

/// 客户创建后输出第二条日志
#[derive(Debug, Default)]
pub struct PrintOtherConsoleLogWhenCustomerCreated;

impl EventHandler for PrintOtherConsoleLogWhenCustomerCreated {
    type Event = CustomerCreatedEvent;

    fn handler_name(&self) -> &str {
        "print_other_console_log_when_customer_created"
    }

    fn handle(&self, event: &CustomerCreatedEvent) -> anyhow::Result<()> {
        info!(
            customer_id = %event.event_data().id,
            "This is the second console.log of the event: CustomerCreated"
        );
        Ok(())
    }
}

/// 客户地址变更后输出新地址
#[derive(Debug, Default)]
pub struct PrintConsoleLogWhenCustomerAddressHasChanged;

impl PrintConsoleLogWhenCustomerAddressHasChanged {
    /// 渲染日志消息；事件中缺少地址时返回错误
    pub fn message(event: &CustomerAddressChanged) -> anyhow::Result<String> {
        let data = event.event_data();
        let address = data
            .address
            .as_ref()
            .ok_or_else(|| anyhow!("customer {} has no address", data.id))?;
        Ok(format!(
            "Customer address: {}, {} changed to: {}",
            data.id, data.name, address
        ))
    }
}

impl EventHandler for PrintConsoleLogWhenCustomerAddressHasChanged {
    type Event = CustomerAddressChanged;

    fn handler_name(&self) -> &str {
        "print_console_log_when_customer_address_has_changed"
    }

    fn handle(&self, event: &CustomerAddressChanged) -> anyhow::Result<()> {
        let message = Self::message(event)?;
        info!(customer_id = %event.event_data().id, "{message}");
        Ok(())
    }
}
