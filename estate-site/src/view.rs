use iced::{
    Element, Length,
    widget::{column, container},
};

use crate::constants::layout;
use crate::messages::Message;
use crate::state::State;
use crate::theme;
use crate::views::projects;

pub fn view(state: &State) -> Element<'_, Message> {
    // The side padding must match `constants::track_width`.
    let page = column![projects::view_projects(state)].width(Length::Fill);

    container(page)
        .padding([0, layout::HORIZONTAL_PADDING_SIDE as u16])
        .width(Length::Fill)
        .height(Length::Fill)
        .center_y(Length::Fill)
        .style(theme::Container::Page.style())
        .into()
}
