// src/debounce.rs

//! Search-input debouncing.
//!
//! Rapid inputs within the quiet window coalesce into a single settled
//! value; each newer input cancels the pending timer of the previous one.
//! Only the timer is cancelled; a request already sent to the network is
//! not, which is why the loader carries a sequence guard.

use std::time::Duration;

use tokio::sync::mpsc;

/// Forwards the last value of each input burst after a quiet period.
pub struct Debouncer {
    tx: mpsc::UnboundedSender<String>,
}

impl Debouncer {
    /// Spawn the timer task; settled values arrive on the returned receiver.
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, mut rx) = mpsc::unbounded_channel::<String>();
        let (settled_tx, settled_rx) = mpsc::unbounded_channel::<String>();

        tokio::spawn(async move {
            let mut pending: Option<String> = None;
            loop {
                match pending.take() {
                    None => match rx.recv().await {
                        Some(value) => pending = Some(value),
                        None => break,
                    },
                    Some(value) => {
                        tokio::select! {
                            _ = tokio::time::sleep(delay) => {
                                if settled_tx.send(value).is_err() {
                                    break;
                                }
                            }
                            next = rx.recv() => match next {
                                // A newer input resets the timer.
                                Some(newer) => pending = Some(newer),
                                None => break,
                            },
                        }
                    }
                }
            }
        });

        (Self { tx }, settled_rx)
    }

    /// Record one input; settles after the quiet window unless superseded.
    pub fn input(&self, value: impl Into<String>) {
        // Receiver task only stops when this sender is dropped.
        let _ = self.tx.send(value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_burst_settles_once_with_last_value() {
        let (debouncer, mut settled) = Debouncer::new(Duration::from_millis(300));

        debouncer.input("b");
        debouncer.input("br");
        debouncer.input("broken ac");

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(settled.recv().await.as_deref(), Some("broken ac"));
        assert!(settled.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_bursts_settle_separately() {
        let (debouncer, mut settled) = Debouncer::new(Duration::from_millis(300));

        debouncer.input("first");
        tokio::time::sleep(Duration::from_millis(400)).await;
        debouncer.input("second");
        tokio::time::sleep(Duration::from_millis(400)).await;

        assert_eq!(settled.recv().await.as_deref(), Some("first"));
        assert_eq!(settled.recv().await.as_deref(), Some("second"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_input_within_window_resets_timer() {
        let (debouncer, mut settled) = Debouncer::new(Duration::from_millis(300));

        debouncer.input("a");
        tokio::time::sleep(Duration::from_millis(200)).await;
        debouncer.input("ab");
        tokio::time::sleep(Duration::from_millis(200)).await;

        // 400ms elapsed but the second input reset the window at 200ms.
        assert!(settled.try_recv().is_err());
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(settled.recv().await.as_deref(), Some("ab"));
    }
}
