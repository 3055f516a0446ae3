//! 事件分发器（EventDispatcher）
//!
//! 进程内、同步的观察者注册表：事件名称 → 按注册顺序排列的处理器序列。
//! - `register`：追加处理器，不去重；
//! - `unregister`：移除首个同一实例，不存在时静默忽略；
//! - `unregister_all`：清空整个注册表（键一并移除）；
//! - `notify`：按注册顺序同步调用，任一处理器失败立即返回错误，其后处理器不再执行。
//!
//! 通过 `unregister` 移除最后一个处理器后，该名称仍保留为空序列，
//! 与从未注册（或 `unregister_all` 之后）的“不存在”状态可区分。
//!
//! 变更操作需要 `&mut self`；启动阶段装配完成后可放入 `Arc` 只读共享，
//! 若需在多线程中继续变更，由宿主自行加锁。
//!
use super::EventHandler;
use crate::domain_event::DomainEvent;
use crate::error::{DomainError, DomainResult};
use std::any::{Any, type_name};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// 分发中的事件（类型擦除后）
struct ErasedEvent<'a> {
    name: &'a str,
    type_name: &'static str,
    value: &'a dyn Any,
}

trait ErasedHandler: Send + Sync {
    fn handler_name(&self) -> &str;

    /// 处理器实例地址，用于按实例身份注销
    fn addr(&self) -> *const ();

    fn handle(&self, event: &ErasedEvent<'_>) -> DomainResult<()>;
}

struct TypedHandler<H: ?Sized> {
    handler: Arc<H>,
}

impl<H> ErasedHandler for TypedHandler<H>
where
    H: EventHandler + ?Sized,
{
    fn handler_name(&self) -> &str {
        self.handler.handler_name()
    }

    fn addr(&self) -> *const () {
        Arc::as_ptr(&self.handler) as *const ()
    }

    fn handle(&self, event: &ErasedEvent<'_>) -> DomainResult<()> {
        let Some(typed) = event.value.downcast_ref::<H::Event>() else {
            return Err(DomainError::TypeMismatch {
                expected: type_name::<H::Event>().to_string(),
                found: event.type_name.to_string(),
            });
        };

        self.handler
            .handle(typed)
            .map_err(|e| DomainError::EventHandler {
                handler: self.handler_name().to_string(),
                event: event.name.to_string(),
                reason: format!("{e:#}"),
            })
    }
}

/// 注册表中的一个处理器条目
pub struct RegisteredHandler {
    inner: Box<dyn ErasedHandler>,
}

impl RegisteredHandler {
    pub fn handler_name(&self) -> &str {
        self.inner.handler_name()
    }

    /// 是否为同一处理器实例（按 `Arc` 指向的地址比较，而非结构相等）
    pub fn is<H: ?Sized>(&self, handler: &Arc<H>) -> bool {
        std::ptr::addr_eq(self.inner.addr(), Arc::as_ptr(handler))
    }
}

impl fmt::Debug for RegisteredHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredHandler")
            .field("handler_name", &self.handler_name())
            .finish()
    }
}

/// 同步事件分发器
#[derive(Default)]
pub struct EventDispatcher {
    handlers: BTreeMap<String, Vec<RegisteredHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// 只读视图：事件名称 → 处理器序列
    pub fn event_handlers(&self) -> &BTreeMap<String, Vec<RegisteredHandler>> {
        &self.handlers
    }

    /// `None` 表示该名称不存在；`Some(&[])` 表示存在但已无处理器
    pub fn handlers_for(&self, event_name: &str) -> Option<&[RegisteredHandler]> {
        self.handlers.get(event_name).map(Vec::as_slice)
    }

    /// 以任意名称注册处理器；同一实例重复注册会被追加多次
    ///
    /// 名称与 `H::Event::NAME` 不一致时，该名称上的每次 `notify` 都会以
    /// `TypeMismatch` 失败；无需别名时请使用 [`subscribe`](Self::subscribe)。
    pub fn register<H>(&mut self, event_name: &str, handler: Arc<H>) -> DomainResult<()>
    where
        H: EventHandler + ?Sized,
    {
        if event_name.is_empty() {
            return Err(DomainError::invalid_value("event name must not be empty"));
        }

        let expected = <H::Event as DomainEvent>::NAME;
        if event_name != expected {
            warn!(
                event = event_name,
                expected,
                handler = handler.handler_name(),
                "handler registered under a different event name"
            );
        }

        let entry = RegisteredHandler {
            inner: Box::new(TypedHandler { handler }),
        };
        debug!(
            event = event_name,
            handler = entry.handler_name(),
            "register event handler"
        );

        self.handlers
            .entry(event_name.to_string())
            .or_default()
            .push(entry);
        Ok(())
    }

    /// 以处理器所消费事件的 `NAME` 注册
    pub fn subscribe<H>(&mut self, handler: Arc<H>) -> DomainResult<()>
    where
        H: EventHandler + ?Sized,
    {
        self.register(<H::Event as DomainEvent>::NAME, handler)
    }

    /// 移除首个同一实例；返回是否有条目被移除
    pub fn unregister<H: ?Sized>(&mut self, event_name: &str, handler: &Arc<H>) -> bool {
        let Some(handlers) = self.handlers.get_mut(event_name) else {
            return false;
        };

        match handlers.iter().position(|h| h.is(handler)) {
            Some(idx) => {
                let removed = handlers.remove(idx);
                debug!(
                    event = event_name,
                    handler = removed.handler_name(),
                    remaining = handlers.len(),
                    "unregister event handler"
                );
                true
            }
            None => false,
        }
    }

    /// 清空整个注册表
    pub fn unregister_all(&mut self) {
        debug!(events = self.handlers.len(), "unregister all event handlers");
        self.handlers.clear();
    }

    /// 按注册顺序同步通知全部处理器；首个失败即返回
    pub fn notify<E: DomainEvent>(&self, event: &E) -> DomainResult<()> {
        let name = event.event_name();
        let Some(handlers) = self.handlers.get(name) else {
            trace!(event = name, "no handlers registered");
            return Ok(());
        };

        let erased = ErasedEvent {
            name,
            type_name: type_name::<E>(),
            value: event,
        };

        trace!(event = name, handlers = handlers.len(), "notify");
        for h in handlers {
            if let Err(err) = h.inner.handle(&erased) {
                warn!(
                    event = name,
                    handler = h.handler_name(),
                    error = %err,
                    "event handler failed"
                );
                return Err(err);
            }
        }
        Ok(())
    }
}

impl fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.handlers.iter().map(|(name, hs)| {
                let names: Vec<_> = hs.iter().map(|h| h.handler_name()).collect();
                (name, names)
            }))
            .finish()
    }
}
