/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - The observable view model holding the downloaded image (viewer.rs)

pub mod data;
pub mod viewer;

pub use viewer::Viewer;
