//! Rotating-subtitle carousel.
//!
//! [`CarouselState`] is the pure index arithmetic. [`Carousel`] owns a
//! ticker task that advances it on a fixed period and publishes through a
//! `watch` channel; the task is aborted on [`Carousel::stop`] or drop.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::debug;

/// Index into a non-empty list of strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    items: Vec<String>,
    index: usize,
}

impl CarouselState {
    /// `None` when `items` is empty.
    pub fn new(items: Vec<String>) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        Some(Self { items, index: 0 })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn current(&self) -> &str {
        &self.items[self.index]
    }

    /// Advance one step, wrapping at the end.
    pub fn tick(&mut self) -> &str {
        self.index = (self.index + 1) % self.items.len();
        self.current()
    }

    /// Swap in a new list and restart from the first item.
    ///
    /// An empty list is ignored. Returns whether the list was replaced.
    pub fn replace(&mut self, items: Vec<String>) -> bool {
        if items.is_empty() {
            return false;
        }
        self.items = items;
        self.index = 0;
        true
    }
}

/// Cloneable handle that swaps the list of a running [`Carousel`].
#[derive(Debug, Clone)]
pub struct CarouselReplacer {
    replace_tx: mpsc::UnboundedSender<Vec<String>>,
}

impl CarouselReplacer {
    /// Queue a replacement. Returns `false` once the ticker is gone.
    pub fn replace(&self, items: Vec<String>) -> bool {
        if self.replace_tx.send(items).is_err() {
            debug!("Carousel ticker gone, replacement dropped");
            return false;
        }
        true
    }
}

/// Carousel advanced by a background ticker.
pub struct Carousel {
    state_rx: watch::Receiver<CarouselState>,
    replace_tx: mpsc::UnboundedSender<Vec<String>>,
    handle: JoinHandle<()>,
}

impl Carousel {
    /// Spawn the ticker. The first advance happens one `period` from now.
    pub fn start(state: CarouselState, period: Duration) -> Self {
        let period = period.max(Duration::from_millis(1));
        let (state_tx, state_rx) = watch::channel(state);
        let (replace_tx, mut replace_rx) = mpsc::unbounded_channel::<Vec<String>>();

        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        state_tx.send_modify(|state| {
                            state.tick();
                        });
                    }
                    items = replace_rx.recv() => match items {
                        Some(items) => {
                            let mut replaced = false;
                            state_tx.send_if_modified(|state| {
                                replaced = state.replace(items);
                                replaced
                            });
                            if replaced {
                                interval.reset();
                            }
                        }
                        None => break,
                    },
                }
            }

            debug!("Carousel ticker stopped");
        });

        Self {
            state_rx,
            replace_tx,
            handle,
        }
    }

    /// The item currently shown.
    pub fn current(&self) -> String {
        self.state_rx.borrow().current().to_string()
    }

    pub fn snapshot(&self) -> CarouselState {
        self.state_rx.borrow().clone()
    }

    /// Subscribe to index and list changes.
    pub fn subscribe(&self) -> watch::Receiver<CarouselState> {
        self.state_rx.clone()
    }

    /// Replace the list. Empty lists are ignored; the period restarts.
    pub fn replace(&self, items: Vec<String>) {
        self.replacer().replace(items);
    }

    /// A handle other tasks can use to replace the list.
    pub fn replacer(&self) -> CarouselReplacer {
        CarouselReplacer {
            replace_tx: self.replace_tx.clone(),
        }
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Abort the ticker. The last published state stays readable.
    pub fn stop(&self) {
        self.handle.abort();
    }
}

impl Drop for Carousel {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_list_rejected() {
        assert!(CarouselState::new(Vec::new()).is_none());
    }

    #[test]
    fn test_tick_wraps() {
        let mut state = CarouselState::new(items(&["A", "B", "C"])).unwrap();
        assert_eq!(state.current(), "A");
        assert_eq!(state.tick(), "B");
        assert_eq!(state.tick(), "C");
        assert_eq!(state.tick(), "A");
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn test_single_item_stays_put() {
        let mut state = CarouselState::new(items(&["Only"])).unwrap();
        assert_eq!(state.tick(), "Only");
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn test_replace_resets_index_and_ignores_empty() {
        let mut state = CarouselState::new(items(&["A", "B", "C"])).unwrap();
        state.tick();
        state.tick();

        assert!(!state.replace(Vec::new()));
        assert_eq!(state.index(), 2);

        assert!(state.replace(items(&["X", "Y"])));
        assert_eq!(state.index(), 0);
        assert_eq!(state.current(), "X");
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_advances_on_period() {
        let state = CarouselState::new(items(&["A", "B"])).unwrap();
        let carousel = Carousel::start(state, Duration::from_secs(3));

        tokio::time::sleep(Duration::from_millis(2900)).await;
        assert_eq!(carousel.current(), "A");

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(carousel.current(), "B");

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(carousel.current(), "A");
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_freezes_state() {
        let state = CarouselState::new(items(&["A", "B"])).unwrap();
        let carousel = Carousel::start(state, Duration::from_secs(3));

        carousel.stop();
        tokio::time::sleep(Duration::from_secs(10)).await;

        assert_eq!(carousel.current(), "A");
        assert!(!carousel.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_replacer_outlives_borrow_and_reports_gone_ticker() {
        let state = CarouselState::new(items(&["A", "B"])).unwrap();
        let carousel = Carousel::start(state, Duration::from_secs(3));
        let replacer = carousel.replacer();

        assert!(replacer.replace(items(&["X"])));
        tokio::task::yield_now().await;
        assert_eq!(carousel.snapshot().items(), &["X".to_string()][..]);

        drop(carousel);
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(!replacer.replace(items(&["Y"])));
    }
}
