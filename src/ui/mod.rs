/// UI widgets module
///
/// Declarative rendering helpers for the main view:
/// - `viewport.rs` - renders the downloaded image (or nothing)

pub mod viewport;

pub use viewport::{handle_from, viewport};
