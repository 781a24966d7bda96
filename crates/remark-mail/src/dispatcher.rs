use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use remark_types::models::AuthenticationCodeEmail;

use crate::sender::EmailSender;

#[derive(Debug, Clone, Copy)]
pub struct DispatcherConfig {
    /// Maximum number of emails waiting for the worker.
    pub capacity: usize,
    /// Lifetime ceiling on emails handed to the sender by this process.
    pub send_cap: usize,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            capacity: 100,
            send_cap: 20,
        }
    }
}

/// Handle to the email queue. Cheap to clone; the worker stops once every
/// handle is dropped.
#[derive(Clone)]
pub struct Dispatcher {
    inner: Arc<DispatcherInner>,
}

struct DispatcherInner {
    tx: mpsc::Sender<AuthenticationCodeEmail>,
    /// Emails accepted into the queue over the dispatcher's lifetime.
    accepted: AtomicUsize,
    /// Written only by the worker.
    sent: Arc<AtomicUsize>,
    send_cap: usize,
}

impl Dispatcher {
    /// Create the queue and spawn its worker. Must be called inside a Tokio
    /// runtime.
    pub fn start(sender: Arc<dyn EmailSender>, config: DispatcherConfig) -> Self {
        let (tx, rx) = mpsc::channel(config.capacity.max(1));
        let sent = Arc::new(AtomicUsize::new(0));

        tokio::spawn(run_worker(rx, sender, sent.clone()));
        info!(
            "Mail dispatcher started (capacity {}, send cap {})",
            config.capacity, config.send_cap
        );

        Self {
            inner: Arc::new(DispatcherInner {
                tx,
                accepted: AtomicUsize::new(0),
                sent,
                send_cap: config.send_cap,
            }),
        }
    }

    /// Queue an email for delivery. Never blocks.
    ///
    /// Returns `false` when the send cap is reached or the queue is full; the
    /// caller should tell the user the email could not be sent right now.
    /// `true` means queued, not delivered.
    pub fn send_email(&self, email: AuthenticationCodeEmail) -> bool {
        // Reserve a slot under the cap first so queued and in-flight emails
        // count against it too.
        let cap = self.inner.send_cap;
        let reserved = self
            .inner
            .accepted
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| (n < cap).then_some(n + 1));
        if reserved.is_err() {
            warn!(
                to = %email.email_address,
                "Reached maximum number of emails to send, ignoring email"
            );
            return false;
        }

        match self.inner.tx.try_send(email) {
            Ok(()) => true,
            Err(mpsc::error::TrySendError::Full(email)) => {
                self.inner.accepted.fetch_sub(1, Ordering::SeqCst);
                warn!(to = %email.email_address, "Mail queue full, dropping email");
                false
            }
            Err(mpsc::error::TrySendError::Closed(email)) => {
                self.inner.accepted.fetch_sub(1, Ordering::SeqCst);
                error!(to = %email.email_address, "Mail worker has stopped, dropping email");
                false
            }
        }
    }

    /// Emails handed to the sender so far, successful or not.
    pub fn sent_count(&self) -> usize {
        self.inner.sent.load(Ordering::SeqCst)
    }

    /// Emails waiting for the worker.
    pub fn pending(&self) -> usize {
        self.inner.tx.max_capacity() - self.inner.tx.capacity()
    }
}

/// Drain the queue in order, one send at a time. Failures are logged and not
/// retried.
async fn run_worker(
    mut rx: mpsc::Receiver<AuthenticationCodeEmail>,
    sender: Arc<dyn EmailSender>,
    sent: Arc<AtomicUsize>,
) {
    while let Some(email) = rx.recv().await {
        match sender.send(&email).await {
            Ok(()) => debug!(to = %email.email_address, "Sent authentication email"),
            Err(e) => error!(to = %email.email_address, "Failed to send authentication email: {}", e),
        }
        sent.fetch_add(1, Ordering::SeqCst);
    }

    info!("Mail dispatcher stopped");
}
