//! "Projects Completed" section: heading, arrow controls and the card strip.
//!
//! The strip is a horizontal scrollable whose offset is driven entirely by
//! the carousel; the surrounding mouse area feeds pointer input back in.

use iced::{
    Alignment, ContentFit, Element, Length,
    widget::{
        Image, Space, button, column, container, image, mouse_area, row,
        scrollable, text,
    },
};

use estate_model::Slide;

use crate::constants::layout;
use crate::messages::Message;
use crate::state::State;
use crate::theme::{self, SiteTheme};

pub const HEADING: &str = "Projects Completed";
pub const SUBTITLE: &str =
    "From blueprints to breathtaking homes — view our completed works.";

pub fn view_projects(state: &State) -> Element<'_, Message> {
    let header = row![
        column![
            text(HEADING).size(layout::TITLE_SIZE),
            text(SUBTITLE)
                .size(layout::CAPTION_SIZE + 2.0)
                .color(SiteTheme::TEXT_SECONDARY),
        ]
        .spacing(6),
        Space::new().width(Length::Fill),
        row![
            arrow_button("<", Message::PrevProject),
            Space::new().width(8),
            arrow_button(">", Message::NextProject),
        ]
        .align_y(Alignment::Center),
    ]
    .align_y(Alignment::Center)
    .width(Length::Fill);

    column![header, Space::new().height(24), strip(state)]
        .padding([48, 0])
        .width(Length::Fill)
        .into()
}

fn arrow_button(label: &str, message: Message) -> Element<'_, Message> {
    button(
        container(text(label).size(layout::CARD_TITLE_SIZE))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .on_press(message)
    .width(40)
    .height(40)
    .style(theme::Button::Arrow.style())
    .into()
}

fn strip(state: &State) -> Element<'_, Message> {
    if state.slides.is_empty() {
        return container(
            text("No completed projects to show yet.")
                .color(SiteTheme::TEXT_SECONDARY),
        )
        .height(Length::Fixed(layout::STRIP_HEIGHT))
        .center_y(Length::Fixed(layout::STRIP_HEIGHT))
        .into();
    }

    let slot_width = state.slot_width();
    let cards = state
        .slides
        .iter()
        .fold(row![].spacing(0), |cards, slide| {
            cards.push(card(state, slide, slot_width))
        });

    let scroll = scrollable(cards)
        .id(state.strip_id.clone())
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new().width(0).scroller_width(0),
        ))
        // Native wheel and touch scrolls are undone in `update`.
        .on_scroll(|viewport| Message::StripScrolled(viewport.absolute_offset().x))
        .width(Length::Fill)
        .height(Length::Fixed(layout::STRIP_HEIGHT));

    mouse_area(scroll)
        .on_move(Message::StripCursorMoved)
        .on_press(Message::StripPressed)
        .on_release(Message::StripReleased)
        .on_exit(Message::StripExited)
        .into()
}

fn card<'a>(
    state: &'a State,
    slide: &'a Slide,
    slot_width: f32,
) -> Element<'a, Message> {
    let picture = container(
        Image::new(image::Handle::from_path(state.image_path(slide)))
            .width(Length::Fill)
            .height(Length::Fixed(layout::CARD_IMAGE_HEIGHT))
            .content_fit(ContentFit::Cover),
    )
    .width(Length::Fill)
    .height(Length::Fixed(layout::CARD_IMAGE_HEIGHT))
    .clip(true)
    .style(theme::Container::ImageFrame.style());

    let details = column![
        text(slide.display_title()).size(layout::CARD_TITLE_SIZE),
        text(slide.caption())
            .size(layout::CAPTION_SIZE)
            .color(SiteTheme::TEXT_SECONDARY),
    ]
    .spacing(4)
    .padding([12, 16]);

    container(
        container(column![picture, details])
            .width(Length::Fill)
            .style(theme::Container::Card.style()),
    )
    .padding([0, layout::CARD_GUTTER as u16])
    .width(Length::Fixed(slot_width))
    .into()
}
