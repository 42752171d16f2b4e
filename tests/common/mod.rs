//! Shared fakes for integration tests

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use hotel_explorer::error::{ExplorerError, Result};
use hotel_explorer::{
    App, AuthClient, CityCode, Hotel, HotelResultProvider, HotelSource, Route, SessionController,
};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const WAIT: Duration = Duration::from_secs(5);

/// Returns the same six hotels for any city and records each lookup
#[derive(Default)]
pub struct RecordingSource {
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl HotelSource for RecordingSource {
    fn fetch(&self, city: &CityCode) -> Result<Vec<Hotel>> {
        self.calls.lock().unwrap().push(city.to_string());
        Ok(["A", "B", "C", "D", "E", "F"]
            .iter()
            .map(|id| Hotel::new(format!("{}-{}", city, id), format!("Hotel {} of {}", id, city)))
            .collect())
    }
}

/// Holds every lookup until the test releases it
pub struct GatedSource {
    inner: RecordingSource,
    gate: Mutex<Receiver<()>>,
}

impl GatedSource {
    /// Returns the source and the sender that releases one lookup per message
    pub fn new() -> (Self, Sender<()>) {
        let (tx, rx) = mpsc::channel();
        let source = Self {
            inner: RecordingSource::default(),
            gate: Mutex::new(rx),
        };
        (source, tx)
    }
}

impl HotelSource for GatedSource {
    fn fetch(&self, city: &CityCode) -> Result<Vec<Hotel>> {
        self.gate
            .lock()
            .unwrap()
            .recv()
            .map_err(|_| ExplorerError::provider("gate dropped"))?;
        self.inner.fetch(city)
    }
}

/// Auth client that counts calls and can be told to fail sign-out
#[derive(Clone, Default)]
pub struct RecordingAuth {
    pub sign_outs: Arc<Mutex<u32>>,
    pub signed_in: Arc<Mutex<bool>>,
    pub fail_sign_out: bool,
}

impl AuthClient for RecordingAuth {
    fn sign_out(&mut self) -> Result<()> {
        *self.sign_outs.lock().unwrap() += 1;
        if self.fail_sign_out {
            return Err(ExplorerError::session("auth provider unreachable"));
        }
        *self.signed_in.lock().unwrap() = false;
        Ok(())
    }

    fn sign_in(&mut self) -> Result<()> {
        *self.signed_in.lock().unwrap() = true;
        Ok(())
    }

    fn current_user(&self) -> Option<String> {
        self.signed_in
            .lock()
            .unwrap()
            .then(|| "tester".to_string())
    }
}

pub struct Harness {
    pub app: App,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub auth: RecordingAuth,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_auth(RecordingAuth::default())
    }

    pub fn with_auth(auth: RecordingAuth) -> Self {
        let source = RecordingSource::default();
        let calls = Arc::clone(&source.calls);
        Self::build(Arc::new(source), calls, auth)
    }

    /// Harness whose searches block until released through the returned sender
    pub fn gated() -> (Self, Sender<()>) {
        let (source, release) = GatedSource::new();
        let calls = Arc::clone(&source.inner.calls);
        let harness = Self::build(Arc::new(source), calls, RecordingAuth::default());
        (harness, release)
    }

    fn build(
        source: Arc<dyn HotelSource>,
        calls: Arc<Mutex<Vec<String>>>,
        auth: RecordingAuth,
    ) -> Self {
        *auth.signed_in.lock().unwrap() = true;
        let provider = HotelResultProvider::new(source);
        let session = SessionController::new(Box::new(auth.clone()), Route::Login);
        Self {
            app: App::new(provider, session),
            calls,
            auth,
        }
    }

    /// Send a key; returns true if the app asked to quit
    pub fn press(&mut self, code: KeyCode) -> bool {
        self.app
            .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap()
    }

    pub fn press_ctrl(&mut self, c: char) -> bool {
        self.app
            .handle_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
            .unwrap()
    }

    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.press(KeyCode::Char(c));
        }
    }

    /// Type a city code, submit it and wait for the results
    pub fn search(&mut self, city: &str) {
        self.type_text(city);
        self.press(KeyCode::Enter);
        assert!(self.app.wait_for_results(WAIT));
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn selected_ids(&self) -> Vec<String> {
        self.app
            .state()
            .comparison
            .iter()
            .map(|h| h.hotel_id.clone())
            .collect()
    }
}
