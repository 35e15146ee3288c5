use iced::widget::image::Handle;
use iced::{Element, Task, Theme};
use log::{info, warn};
use std::sync::Arc;

mod config;
mod net;
mod state;
mod ui;

use config::{Config, FitMode};
use net::ImageLoader;
use state::Viewer;

/// Main application state
struct PicView {
    /// View model owning the downloaded image
    viewer: Arc<Viewer<ImageLoader>>,
    /// Render handle for the currently held image
    handle: Option<Handle>,
    /// Configured layout for the image
    fit: FitMode,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// The startup fetch finished (errors arrive pre-formatted for the log)
    FetchFinished(Result<(), String>),
}

impl PicView {
    /// Create the application and kick off the one startup fetch
    fn new() -> (Self, Task<Message>) {
        let config = Config::load();

        // If this fails, we panic because the app cannot function without
        // an HTTP client
        let loader =
            ImageLoader::new(&config).expect("Failed to construct the HTTP client");
        let viewer = Arc::new(Viewer::new(loader));

        // The one fetch triggered by the window appearing
        let fetch = {
            let viewer = Arc::clone(&viewer);
            Task::perform(
                async move { viewer.fetch().await.map_err(|e| e.to_string()) },
                Message::FetchFinished,
            )
        };

        (
            PicView {
                viewer,
                handle: None,
                fit: config.fit,
            },
            fetch,
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FetchFinished(Ok(())) => {
                self.handle = self.viewer.current().as_ref().map(ui::handle_from);
                info!("Image downloaded and decoded");
            }
            Message::FetchFinished(Err(err)) => {
                // The view simply shows nothing; the log is the only
                // diagnostic
                self.handle = None;
                warn!("Image fetch failed: {}", err);
            }
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        ui::viewport(self.handle.as_ref(), self.fit)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    env_logger::init();

    iced::application("PicView", PicView::update, PicView::view)
        .theme(PicView::theme)
        .centered()
        .run_with(PicView::new)
}
