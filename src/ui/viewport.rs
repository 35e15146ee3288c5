/// Image viewport widget
///
/// Pure view code: given the held image (if any) and the configured
/// layout, build the element tree. When nothing is held the view shows
/// nothing, matching the two-state model of the view model.

use iced::widget::{container, image, Space};
use iced::{ContentFit, Element, Length};

use crate::config::FitMode;
use crate::state::data::FetchedImage;

/// Edge length of the fixed layout box, in logical pixels
const FIXED_EDGE: f32 = 200.0;

/// Convert the view model's bitmap into an iced image handle
pub fn handle_from(image: &FetchedImage) -> image::Handle {
    image::Handle::from_rgba(image.width, image.height, image.pixels.clone())
}

/// Render the downloaded image, or empty space while none is held
pub fn viewport<'a, Message: 'a>(
    handle: Option<&image::Handle>,
    fit: FitMode,
) -> Element<'a, Message> {
    let Some(handle) = handle else {
        return Space::new(Length::Fill, Length::Fill).into();
    };

    match fit {
        FitMode::Fill => image(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        FitMode::Fixed => container(
            image(handle.clone())
                .width(Length::Fixed(FIXED_EDGE))
                .height(Length::Fixed(FIXED_EDGE)),
        )
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into(),
    }
}
