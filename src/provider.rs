//! Hotel result provider
//!
//! Runs hotel lookups off the UI thread. Each search spawns a worker that
//! calls the configured [`HotelSource`] and reports back over a channel;
//! the UI thread drains the channel once per tick with [`HotelResultProvider::poll`].
//!
//! # Invariants
//!
//! - Only the most recent search can update `hotels`; replies tagged with an
//!   older search id are dropped
//! - `is_loading()` is true from `perform_search` until that search replies
//! - Source failures are logged and leave an empty result list

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::catalog::HotelSource;
use crate::types::{CityCode, Hotel};

/// Messages sent from search worker threads to the UI thread
#[derive(Debug)]
pub enum SearchMessage {
    /// The lookup finished
    Results { search_id: u64, hotels: Vec<Hotel> },
    /// The lookup failed
    Failed { search_id: u64, error: String },
}

impl SearchMessage {
    fn search_id(&self) -> u64 {
        match self {
            Self::Results { search_id, .. } | Self::Failed { search_id, .. } => *search_id,
        }
    }
}

/// Observable search state: the current hotel list and a loading flag
pub struct HotelResultProvider {
    source: Arc<dyn HotelSource>,
    /// Cloned into each worker thread
    tx: Sender<SearchMessage>,
    rx: Receiver<SearchMessage>,
    hotels: Vec<Hotel>,
    loading: bool,
    latest_search: u64,
    city: Option<CityCode>,
    last_error: Option<String>,
}

impl HotelResultProvider {
    pub fn new(source: Arc<dyn HotelSource>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            source,
            tx,
            rx,
            hotels: Vec::new(),
            loading: false,
            latest_search: 0,
            city: None,
            last_error: None,
        }
    }

    /// Start a lookup for `city`, superseding any search still in flight
    pub fn perform_search(&mut self, city: CityCode) {
        self.latest_search += 1;
        let search_id = self.latest_search;
        info!("Searching hotels in {} (search #{})", city, search_id);

        self.loading = true;
        self.hotels.clear();
        self.last_error = None;
        self.city = Some(city.clone());

        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        let spawned = thread::Builder::new()
            .name(format!("hotel-search-{}", search_id))
            .spawn(move || {
                let message = match source.fetch(&city) {
                    Ok(hotels) => SearchMessage::Results { search_id, hotels },
                    Err(e) => SearchMessage::Failed {
                        search_id,
                        error: e.to_string(),
                    },
                };
                // Receiver is gone when the app has shut down
                let _ = tx.send(message);
            });

        if let Err(e) = spawned {
            warn!("Failed to spawn search worker: {}", e);
            self.apply(SearchMessage::Failed {
                search_id,
                error: e.to_string(),
            });
        }
    }

    /// Forget the current results and ignore any search still in flight
    pub fn reset(&mut self) {
        self.latest_search += 1;
        self.hotels.clear();
        self.loading = false;
        self.city = None;
        self.last_error = None;
    }

    /// Apply any replies that have arrived. Returns true if state changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(message) = self.rx.try_recv() {
            changed |= self.apply(message);
        }
        changed
    }

    /// Block until the current search replies or `timeout` elapses.
    ///
    /// Returns true once nothing is loading.
    pub fn wait(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.loading {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.rx.recv_timeout(remaining) {
                Ok(message) => {
                    self.apply(message);
                }
                Err(RecvTimeoutError::Timeout) => return false,
                // Unreachable while `self.tx` is alive
                Err(RecvTimeoutError::Disconnected) => return false,
            }
        }
        true
    }

    fn apply(&mut self, message: SearchMessage) -> bool {
        if message.search_id() != self.latest_search {
            debug!("Dropping reply for superseded search #{}", message.search_id());
            return false;
        }

        match message {
            SearchMessage::Results { hotels, .. } => {
                info!("Received {} hotels", hotels.len());
                self.hotels = hotels;
                self.last_error = None;
            }
            SearchMessage::Failed { error, .. } => {
                warn!("Hotel search failed: {}", error);
                self.hotels.clear();
                self.last_error = Some(error);
            }
        }
        self.loading = false;
        true
    }

    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// City of the most recent search
    pub fn city(&self) -> Option<&CityCode> {
        self.city.as_ref()
    }

    /// Error from the most recent search, if it failed
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, UnavailableSource};
    use crate::error::Result;
    use std::sync::Mutex;

    const WAIT: Duration = Duration::from_secs(5);

    fn city(code: &str) -> CityCode {
        CityCode::parse(code).unwrap()
    }

    /// Blocks each fetch until released, so ordering can be controlled
    struct GatedSource {
        gates: Mutex<Vec<(CityCode, Receiver<()>)>>,
    }

    impl HotelSource for GatedSource {
        fn fetch(&self, city: &CityCode) -> Result<Vec<Hotel>> {
            let gate = {
                let mut gates = self.gates.lock().unwrap();
                let pos = gates.iter().position(|(c, _)| c == city).unwrap();
                gates.remove(pos).1
            };
            let _ = gate.recv();
            Ok(vec![Hotel::new(format!("{}-1", city), "Gated")])
        }
    }

    #[test]
    fn test_search_delivers_results() {
        let mut provider = HotelResultProvider::new(Arc::new(Catalog::demo().unwrap()));
        assert!(!provider.is_loading());

        provider.perform_search(city("NYC"));
        assert!(provider.is_loading());
        assert!(provider.wait(WAIT));
        assert!(!provider.is_loading());
        assert!(!provider.hotels().is_empty());
        assert_eq!(provider.city().map(|c| c.as_str()), Some("NYC"));
    }

    #[test]
    fn test_failed_search_clears_results() {
        let source = UnavailableSource {
            reason: "offline".to_string(),
        };
        let mut provider = HotelResultProvider::new(Arc::new(source));
        provider.perform_search(city("LON"));
        assert!(provider.wait(WAIT));
        assert!(provider.hotels().is_empty());
        assert!(provider.last_error().is_some_and(|e| e.contains("offline")));
    }

    #[test]
    fn test_superseded_reply_is_dropped() {
        let (release_first, first) = mpsc::channel();
        let (release_second, second) = mpsc::channel();
        let source = GatedSource {
            gates: Mutex::new(vec![(city("AMS"), first), (city("PAR"), second)]),
        };
        let mut provider = HotelResultProvider::new(Arc::new(source));

        provider.perform_search(city("AMS"));
        provider.perform_search(city("PAR"));

        // Let the newer search finish first, then the stale one
        release_second.send(()).unwrap();
        assert!(provider.wait(WAIT));
        release_first.send(()).unwrap();
        thread::sleep(Duration::from_millis(50));
        provider.poll();

        assert_eq!(provider.hotels().len(), 1);
        assert_eq!(provider.hotels()[0].hotel_id, "PAR-1");
        assert!(!provider.is_loading());
    }

    #[test]
    fn test_reset_drops_in_flight_search() {
        let (release, gate) = mpsc::channel();
        let source = GatedSource {
            gates: Mutex::new(vec![(city("TYO"), gate)]),
        };
        let mut provider = HotelResultProvider::new(Arc::new(source));

        provider.perform_search(city("TYO"));
        provider.reset();
        assert!(!provider.is_loading());

        release.send(()).unwrap();
        thread::sleep(Duration::from_millis(50));
        assert!(!provider.poll());
        assert!(provider.hotels().is_empty());
        assert!(provider.city().is_none());
    }
}
