//! Signal handling for graceful shutdown
//!
//! SIGINT, SIGTERM and SIGHUP set a shared flag instead of killing the
//! process, so the event loop can leave the alternate screen and restore
//! raw mode before exiting.

use std::io;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Register signal handlers and return the flag they set.
///
/// Call this once at program start.
pub fn init_signal_handlers() -> Result<Arc<AtomicBool>, io::Error> {
    use signal_hook::consts::signal::{SIGHUP, SIGINT, SIGTERM};

    let flag = Arc::new(AtomicBool::new(false));
    for signal in [SIGINT, SIGTERM, SIGHUP] {
        signal_hook::flag::register(signal, Arc::clone(&flag))?;
    }
    Ok(flag)
}
