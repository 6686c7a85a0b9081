use super::*;

/// Cooperative cancellation signal for a collection run. Clones share the
/// same signal, so one clone can be handed to another task and cancelled
/// while the collector waits on the other.
#[derive(Clone, Debug)]
pub struct CancelToken {
  rx: watch::Receiver<bool>,
  tx: Arc<watch::Sender<bool>>,
}

impl Default for CancelToken {
  fn default() -> Self {
    Self::new()
  }
}

impl CancelToken {
  pub fn cancel(&self) {
    let _ = self.tx.send(true);
  }

  pub async fn cancelled(&self) {
    let mut rx = self.rx.clone();

    let _ = rx.wait_for(|cancelled| *cancelled).await;
  }

  pub fn is_cancelled(&self) -> bool {
    *self.rx.borrow()
  }

  pub fn new() -> Self {
    let (tx, rx) = watch::channel(false);

    Self {
      rx,
      tx: Arc::new(tx),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn starts_uncancelled() {
    assert!(!CancelToken::new().is_cancelled());
  }

  #[tokio::test]
  async fn cancel_wakes_a_waiting_clone() {
    let token = CancelToken::new();

    let waiter = token.clone();

    let handle = tokio::spawn(async move { waiter.cancelled().await });

    token.cancel();

    handle.await.unwrap();

    assert!(token.is_cancelled());
  }

  #[tokio::test]
  async fn cancelled_returns_immediately_once_cancelled() {
    let token = CancelToken::new();

    token.cancel();

    token.cancelled().await;
  }
}
