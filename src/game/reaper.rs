//! Background sweep of idle sessions

use super::store::SessionStore;
use std::io;
use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, instrument};

/// Thread that periodically calls [`SessionStore::sweep_expired`]
///
/// The thread stops when the reaper is dropped or [`SessionReaper::shutdown`]
/// is called.
pub struct SessionReaper {
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl SessionReaper {
    /// Start sweeping `store` every `interval`
    ///
    /// # Errors
    /// Returns an error if the OS refuses to spawn the thread.
    #[instrument(skip(store))]
    pub fn spawn(store: Arc<SessionStore>, interval: Duration) -> io::Result<Self> {
        let (stop, stopped) = mpsc::channel::<()>();
        let handle = thread::Builder::new()
            .name("session-reaper".to_string())
            .spawn(move || {
                loop {
                    match stopped.recv_timeout(interval) {
                        Err(RecvTimeoutError::Timeout) => {
                            store.sweep_expired();
                        }
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                debug!("session reaper stopped");
            })?;

        Ok(Self {
            stop: Some(stop),
            handle: Some(handle),
        })
    }

    /// Stop the sweep thread and wait for it to exit
    pub fn shutdown(mut self) {
        self.stop_and_join();
    }

    fn stop_and_join(&mut self) {
        if let Some(stop) = self.stop.take() {
            // The thread may already be gone; either way it is stopping
            let _ = stop.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for SessionReaper {
    fn drop(&mut self) {
        self.stop_and_join();
    }
}
