/// View model for the downloaded image
///
/// Holds the one piece of observable UI-facing state: the currently
/// loaded image. The published field is an explicit state container
/// (a `tokio::sync::watch` channel) so the view can either poll the
/// current value or subscribe to changes.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, warn};
use tokio::sync::watch;

use crate::net::{FetchError, ImageSource};

use super::data::FetchedImage;

/// Observable holder of the current image, plus the fetch operations
///
/// Two states only: empty and has-image. Every fetch attempt ends in
/// has-image on success or empty on failure; no loading state is
/// tracked or exposed.
pub struct Viewer<S> {
    source: S,
    image: watch::Sender<Option<FetchedImage>>,
    in_flight: AtomicBool,
}

impl<S> Viewer<S>
where
    S: ImageSource + Send + Sync + 'static,
{
    /// Create an empty viewer over the given image source
    pub fn new(source: S) -> Self {
        let (image, _) = watch::channel(None);
        Self {
            source,
            image,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Canonical fetch: await the source and publish the outcome
    ///
    /// On success the held image is replaced wholesale. On failure the
    /// held image is cleared and the typed error is propagated; the
    /// caller decides whether to ignore it.
    ///
    /// A call that arrives while another fetch is in flight is ignored
    /// and leaves the held image untouched.
    pub async fn fetch(&self) -> Result<(), FetchError> {
        if self.in_flight.swap(true, Ordering::AcqRel) {
            debug!("fetch already in flight, ignoring");
            return Ok(());
        }

        let result = self.source.fetch().await;
        self.in_flight.store(false, Ordering::Release);

        match result {
            Ok(fetched) => {
                self.image.send_replace(Some(fetched));
                Ok(())
            }
            Err(err) => {
                self.image.send_replace(None);
                Err(err)
            }
        }
    }

    /// Callback-style wrapper over the canonical fetch
    ///
    /// Spawns the fetch on the tokio runtime; failures are only logged.
    pub fn fetch_detached(self: &Arc<Self>) {
        let viewer = Arc::clone(self);
        tokio::spawn(async move {
            if let Err(err) = viewer.fetch().await {
                warn!("background image fetch failed: {}", err);
            }
        });
    }

    /// Subscribe to changes of the held image
    pub fn subscribe(&self) -> watch::Receiver<Option<FetchedImage>> {
        self.image.subscribe()
    }

    /// Snapshot of the currently held image
    pub fn current(&self) -> Option<FetchedImage> {
        self.image.borrow().clone()
    }
}
