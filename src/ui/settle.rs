//! One-shot settle timer for gallery transitions.
//!
//! Scheduling is explicit: each armed timer carries the generation it
//! was armed with and delivers a [`AppEvent::Settle`] through the main
//! event channel. Cancellation is a generation bump on the app side; a
//! late fire from a superseded or torn-down gallery arrives with a
//! stale generation and is discarded without touching state.

use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

use crate::ui::events::AppEvent;

/// Schedule a settle event after `delay`.
///
/// The sleeper holds only a channel sender, never app state, so a fire
/// after teardown can at worst deliver an event nobody accepts.
pub fn schedule_settle(tx: Sender<AppEvent>, generation: u64, delay: Duration) {
    thread::spawn(move || {
        thread::sleep(delay);
        let _ = tx.send(AppEvent::Settle { generation });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn delivers_settle_with_armed_generation() {
        let (tx, rx) = mpsc::channel();
        schedule_settle(tx, 7, Duration::from_millis(10));
        match rx.recv_timeout(Duration::from_secs(1)) {
            Ok(AppEvent::Settle { generation }) => assert_eq!(generation, 7),
            Ok(_) => panic!("expected Settle"),
            Err(err) => panic!("no settle event: {}", err),
        }
    }

    #[test]
    fn dropped_receiver_does_not_panic_the_sleeper() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        // The send fails silently inside the sleeper thread.
        schedule_settle(tx, 1, Duration::from_millis(1));
        thread::sleep(Duration::from_millis(20));
    }
}
