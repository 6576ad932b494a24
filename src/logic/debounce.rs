//! Quiet-period debouncing for rapidly-changing inputs.

use tokio::select;
use tokio::sync::mpsc;
use tokio::time::{Duration, sleep};

/// What: Create a debounced channel pair with the given quiet period.
///
/// Inputs:
/// - `quiet`: How long the input must stay unchanged before it propagates
///
/// Output:
/// - `(sender, receiver)`: values pushed into the sender appear on the
///   receiver only once they have been the latest value for the full quiet
///   period.
///
/// Details:
/// - Each new value restarts the timer; superseded intermediate values are
///   never emitted.
/// - Dropping the sender ends the worker after at most one final emission of
///   the value already settling; dropping the receiver makes any pending
///   emission a no-op and ends the worker on its next send.
pub fn channel<T: Send + 'static>(quiet: Duration) -> (mpsc::UnboundedSender<T>, mpsc::UnboundedReceiver<T>) {
    let (in_tx, mut in_rx) = mpsc::unbounded_channel::<T>();
    let (out_tx, out_rx) = mpsc::unbounded_channel::<T>();
    tokio::spawn(async move {
        loop {
            let Some(mut latest) = in_rx.recv().await else {
                break;
            };
            loop {
                select! {
                    Some(next) = in_rx.recv() => { latest = next; }
                    () = sleep(quiet) => { break; }
                }
            }
            if out_tx.send(latest).is_err() {
                break;
            }
        }
    });
    (in_tx, out_rx)
}
