/// Network module
///
/// This module handles:
/// - Downloading the remote image over HTTPS (loader.rs)
/// - Validating and decoding the response body
///
/// The `ImageSource` trait is the seam between the view model and the
/// transport, so tests can substitute a stub without a network.

use std::future::Future;

use crate::state::data::FetchedImage;

pub mod loader;

pub use loader::{FetchError, ImageLoader};

/// Anything that can produce the remote image
///
/// One unary operation; each call is independent. The returned future
/// must be `Send` because the detached fetch variant runs it on the
/// tokio runtime.
pub trait ImageSource {
    /// Download and decode the image once
    fn fetch(&self) -> impl Future<Output = Result<FetchedImage, FetchError>> + Send;
}
