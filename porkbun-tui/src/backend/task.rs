//! 后台任务派发
//!
//! 每个操作都是一个独立的 tokio 任务：
//!     调用一次 RegistrarClient → 向邮箱发送一条 TaskMessage
//!
//! 主循环不跟踪未完成的任务，也不假设完成顺序；
//! 任务不可取消，没有超时。接收端已关闭（程序退出中）时静默丢弃结果。

use std::future::Future;
use std::sync::Arc;

use porkbun_provider::RegistrarClient;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::message::TaskMessage;

/// 任务派发器
#[derive(Clone)]
pub struct TaskSpawner {
    handle: Handle,
    tx: UnboundedSender<TaskMessage>,
    client: Arc<dyn RegistrarClient>,
}

impl TaskSpawner {
    /// 创建派发器，返回对应的邮箱接收端
    pub fn new(
        handle: Handle,
        client: Arc<dyn RegistrarClient>,
    ) -> (Self, UnboundedReceiver<TaskMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { handle, tx, client }, rx)
    }

    pub fn fetch_domains(&self) {
        self.spawn(|client| async move {
            TaskMessage::DomainsLoaded(client.list_domains().await)
        });
    }

    pub fn fetch_pricing(&self) {
        self.spawn(|client| async move {
            TaskMessage::PricingLoaded(client.get_pricing().await)
        });
    }

    pub fn fetch_dns(&self, domain: &str) {
        let domain = domain.to_string();
        self.spawn(|client| async move {
            let result = client.get_dns_records(&domain).await;
            TaskMessage::DnsLoaded { domain, result }
        });
    }

    pub fn fetch_nameservers(&self, domain: &str) {
        let domain = domain.to_string();
        self.spawn(|client| async move {
            let result = client.get_nameservers(&domain).await;
            TaskMessage::NameserversLoaded { domain, result }
        });
    }

    pub fn save_nameservers(&self, domain: &str, nameservers: Vec<String>) {
        let domain = domain.to_string();
        self.spawn(|client| async move {
            let result = client.update_nameservers(&domain, &nameservers).await;
            TaskMessage::NameserversSaved { domain, result }
        });
    }

    pub fn check_availability(&self, domain: &str) {
        let domain = domain.to_string();
        self.spawn(|client| async move {
            TaskMessage::AvailabilityChecked(client.check_availability(&domain).await)
        });
    }

    fn spawn<F, Fut>(&self, task: F)
    where
        F: FnOnce(Arc<dyn RegistrarClient>) -> Fut,
        Fut: Future<Output = TaskMessage> + Send + 'static,
    {
        let tx = self.tx.clone();
        let fut = task(Arc::clone(&self.client));
        self.handle.spawn(async move {
            let msg = fut.await;
            let name = msg.name();
            if tx.send(msg).is_err() {
                log::debug!("Mailbox closed, dropping {name} result");
            }
        });
    }
}
