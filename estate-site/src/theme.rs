use iced::{
    Background, Border, Color, Shadow, Theme, theme,
    widget::{button, container},
};

/// Warm light palette for the landing page.
#[derive(Debug, Clone, Copy)]
pub struct SiteTheme;

impl SiteTheme {
    pub const BACKGROUND: Color = Color::from_rgb(0.98, 0.97, 0.95); // #FAF7F2
    pub const CARD_BG: Color = Color::from_rgb(1.0, 1.0, 1.0);
    pub const BORDER_COLOR: Color = Color::from_rgb(0.88, 0.86, 0.82); // #E0DBD1

    pub const ACCENT: Color = Color::from_rgb(0.72, 0.53, 0.26); // #B88742
    pub const ACCENT_HOVER: Color = Color::from_rgb(0.80, 0.60, 0.30);
    pub const ACCENT_PRESSED: Color = Color::from_rgb(0.58, 0.42, 0.20);

    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.12, 0.11, 0.10); // #1F1C1A
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.42, 0.40, 0.37); // #6B665E
    pub const TEXT_ON_ACCENT: Color = Color::from_rgb(1.0, 1.0, 1.0);

    pub const SUCCESS: Color = Color::from_rgb(0.18, 0.55, 0.34);
    pub const ERROR: Color = Color::from_rgb(0.78, 0.20, 0.20);

    pub fn theme() -> Theme {
        let mut palette = theme::Palette::LIGHT;
        palette.background = Self::BACKGROUND;
        palette.text = Self::TEXT_PRIMARY;
        palette.primary = Self::ACCENT;
        palette.success = Self::SUCCESS;
        palette.danger = Self::ERROR;

        Theme::custom("Estate du Oud", palette)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Container {
    Page,
    Card,
    /// Placeholder behind a card image that has not loaded.
    ImageFrame,
}

impl Container {
    pub fn style(&self) -> fn(&Theme) -> container::Style {
        match self {
            Container::Page => |_| container::Style {
                text_color: Some(SiteTheme::TEXT_PRIMARY),
                background: Some(Background::Color(SiteTheme::BACKGROUND)),
                border: Border::default(),
                shadow: Shadow::default(),
                snap: false,
            },
            Container::Card => |_| container::Style {
                text_color: Some(SiteTheme::TEXT_PRIMARY),
                background: Some(Background::Color(SiteTheme::CARD_BG)),
                border: Border {
                    color: SiteTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 12.0.into(),
                },
                shadow: Shadow {
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
                    offset: iced::Vector::new(0.0, 4.0),
                    blur_radius: 12.0,
                },
                snap: false,
            },
            Container::ImageFrame => |_| container::Style {
                text_color: None,
                background: Some(Background::Color(SiteTheme::BORDER_COLOR)),
                border: Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: 12.0.into(),
                },
                shadow: Shadow::default(),
                snap: false,
            },
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Button {
    /// Round arrow control beside the section heading.
    Arrow,
}

impl Button {
    pub fn style(&self) -> fn(&Theme, button::Status) -> button::Style {
        match self {
            Button::Arrow => |_, status| {
                let background = match status {
                    button::Status::Hovered => SiteTheme::ACCENT_HOVER,
                    button::Status::Pressed => SiteTheme::ACCENT_PRESSED,
                    _ => SiteTheme::ACCENT,
                };

                button::Style {
                    text_color: SiteTheme::TEXT_ON_ACCENT,
                    background: Some(Background::Color(background)),
                    border: Border {
                        color: background,
                        width: 1.0,
                        radius: 20.0.into(),
                    },
                    shadow: Shadow::default(),
                    snap: false,
                }
            },
        }
    }
}
