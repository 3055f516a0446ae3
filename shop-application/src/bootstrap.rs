//! 启动装配
//!
//! 进程启动时按配置构建一次 `EventDispatcher`，随后以 `Arc` 只读注入各用例；
//! 退出或测试之间通过 `unregister_all`（或直接丢弃）回收全部处理器。
//!
use crate::error::AppError;
use bon::Builder;
use serde::{Deserialize, Serialize};
use shop_domain::customer::{
    PrintConsoleLogWhenCustomerAddressHasChanged, PrintConsoleLogWhenCustomerCreated,
    PrintOtherConsoleLogWhenCustomerCreated,
};
use shop_domain::error::DomainResult;
use shop_domain::eventing::EventDispatcher;
use shop_domain::product::SendEmailWhenProductIsCreatedHandler;
use std::sync::Arc;
use tracing::info;

/// 事件处理器开关
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    #[builder(default = true)]
    pub log_customer_created: bool,
    #[builder(default = true)]
    pub log_customer_created_twice: bool,
    #[builder(default = true)]
    pub log_customer_address_changed: bool,
    /// 商品创建通知邮件的收件人；为空则不注册该处理器
    #[builder(into)]
    pub product_created_email: Option<String>,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl BootstrapConfig {
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// 按配置注册处理器
pub fn build_dispatcher(config: &BootstrapConfig) -> DomainResult<EventDispatcher> {
    let mut dispatcher = EventDispatcher::new();

    if config.log_customer_created {
        dispatcher.subscribe(Arc::new(PrintConsoleLogWhenCustomerCreated))?;
    }
    if config.log_customer_created_twice {
        dispatcher.subscribe(Arc::new(PrintOtherConsoleLogWhenCustomerCreated))?;
    }
    if config.log_customer_address_changed {
        dispatcher.subscribe(Arc::new(PrintConsoleLogWhenCustomerAddressHasChanged))?;
    }
    if let Some(recipient) = &config.product_created_email {
        dispatcher.subscribe(Arc::new(SendEmailWhenProductIsCreatedHandler::new(
            recipient.as_str(),
        )))?;
    }

    info!(?dispatcher, "event dispatcher ready");
    Ok(dispatcher)
}
