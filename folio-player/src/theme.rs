use folio_core::Mood;
use folio_core::content::SkillLevel;
use iced::{
    Background, Border, Color, Shadow, Theme, Vector, theme,
    widget::{button, container, text_input},
};

/// Light and dark palettes keyed off the stored mood.
#[derive(Debug, Clone, Copy)]
pub struct FolioTheme;

impl FolioTheme {
    pub const ACCENT: Color = Color::from_rgb(0.424, 0.388, 1.0); // #6C63FF
    pub const ACCENT_HOVER: Color = Color::from_rgb(0.35, 0.31, 0.95);
    pub const ACCENT_GLOW: Color = Color::from_rgba(0.424, 0.388, 1.0, 0.3);

    pub const LIGHT_BACKGROUND: Color = Color::WHITE;
    pub const LIGHT_SURFACE: Color = Color::from_rgb(0.96, 0.96, 0.98);
    pub const LIGHT_TEXT: Color = Color::from_rgb(0.122, 0.118, 0.118); // #1F1E1E

    pub const DARK_BACKGROUND: Color = Color::from_rgb(0.122, 0.118, 0.118); // #1F1E1E
    pub const DARK_SURFACE: Color = Color::from_rgb(0.17, 0.165, 0.17);
    pub const DARK_TEXT: Color = Color::WHITE;

    pub const SUCCESS: Color = Color::from_rgb(0.063, 0.725, 0.506); // #10B981
    pub const WARNING: Color = Color::from_rgb(0.961, 0.620, 0.043); // #F59E0B
    pub const ERROR: Color = Color::from_rgb(0.937, 0.267, 0.267); // #EF4444

    pub fn for_mood(mood: Mood) -> Theme {
        match mood {
            Mood::Light => {
                let mut palette = theme::Palette::LIGHT;
                palette.background = Self::LIGHT_BACKGROUND;
                palette.text = Self::LIGHT_TEXT;
                palette.primary = Self::ACCENT;
                palette.success = Self::SUCCESS;
                palette.danger = Self::ERROR;
                Theme::custom("Folio Light", palette)
            }
            Mood::Dark => {
                let mut palette = theme::Palette::DARK;
                palette.background = Self::DARK_BACKGROUND;
                palette.text = Self::DARK_TEXT;
                palette.primary = Self::ACCENT;
                palette.success = Self::SUCCESS;
                palette.danger = Self::ERROR;
                Theme::custom("Folio Dark", palette)
            }
        }
    }

    pub fn skill_color(level: SkillLevel) -> Color {
        let [r, g, b] = level.rgb();
        Color::from_rgb8(r, g, b)
    }

    /// Text color at reduced emphasis for the active theme.
    pub fn muted_text(theme: &Theme) -> Color {
        let text = theme.palette().text;
        Color { a: 0.7, ..text }
    }
}

fn surface(theme: &Theme) -> Color {
    theme.extended_palette().background.weak.color
}

fn hairline(theme: &Theme) -> Color {
    Color {
        a: 0.12,
        ..theme.palette().text
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Container {
    Page,
    Header,
    HeaderScrolled,
    Card,
    Section,
    SectionAlt,
    Loading,
    Notice,
    ProgressTrack,
    ProgressFill,
    TagChip,
}

impl Container {
    pub fn style(&self) -> fn(&Theme) -> container::Style {
        match self {
            // The window background shows through, with the backdrop on it
            Container::Page | Container::Section => |theme| container::Style {
                text_color: Some(theme.palette().text),
                ..container::Style::default()
            },
            Container::SectionAlt => |theme| container::Style {
                text_color: Some(theme.palette().text),
                background: Some(Background::Color(Color {
                    a: 0.85,
                    ..surface(theme)
                })),
                ..container::Style::default()
            },
            Container::Header => |theme| container::Style {
                text_color: Some(theme.palette().text),
                background: Some(Background::Color(Color::TRANSPARENT)),
                ..container::Style::default()
            },
            Container::HeaderScrolled => |theme| container::Style {
                text_color: Some(theme.palette().text),
                background: Some(Background::Color(Color {
                    a: 0.95,
                    ..theme.palette().background
                })),
                border: Border {
                    color: hairline(theme),
                    width: 1.0,
                    radius: 0.0.into(),
                },
                shadow: Shadow {
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
                    offset: Vector::new(0.0, 2.0),
                    blur_radius: 12.0,
                },
                ..container::Style::default()
            },
            Container::Card => |theme| container::Style {
                text_color: Some(theme.palette().text),
                background: Some(Background::Color(surface(theme))),
                border: Border {
                    color: hairline(theme),
                    width: 1.0,
                    radius: 12.0.into(),
                },
                shadow: Shadow {
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
                    offset: Vector::new(0.0, 4.0),
                    blur_radius: 16.0,
                },
                ..container::Style::default()
            },
            Container::Loading => |theme| container::Style {
                text_color: Some(theme.palette().text),
                background: Some(Background::Color(
                    theme.palette().background,
                )),
                ..container::Style::default()
            },
            Container::Notice => |_| container::Style {
                text_color: Some(Color::WHITE),
                background: Some(Background::Color(FolioTheme::ACCENT)),
                border: Border {
                    color: FolioTheme::ACCENT,
                    width: 1.0,
                    radius: 8.0.into(),
                },
                ..container::Style::default()
            },
            Container::ProgressTrack => |theme| container::Style {
                background: Some(Background::Color(hairline(theme))),
                border: Border {
                    radius: 2.0.into(),
                    ..Border::default()
                },
                ..container::Style::default()
            },
            Container::ProgressFill => |_| container::Style {
                background: Some(Background::Color(FolioTheme::ACCENT)),
                border: Border {
                    radius: 2.0.into(),
                    ..Border::default()
                },
                shadow: Shadow {
                    color: FolioTheme::ACCENT_GLOW,
                    offset: Vector::new(0.0, 0.0),
                    blur_radius: 4.0,
                },
                ..container::Style::default()
            },
            Container::TagChip => |_| container::Style {
                text_color: Some(FolioTheme::ACCENT),
                background: Some(Background::Color(Color {
                    a: 0.12,
                    ..FolioTheme::ACCENT
                })),
                border: Border {
                    radius: 10.0.into(),
                    ..Border::default()
                },
                ..container::Style::default()
            },
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Button {
    Primary,
    Secondary,
    NavLink,
    NavLinkActive,
    Icon,
    Dot,
    DotActive,
    Tab,
    TabActive,
}

impl Button {
    pub fn style(&self) -> fn(&Theme, button::Status) -> button::Style {
        match self {
            Button::Primary => |_, status| {
                let (background, shadow) = match status {
                    button::Status::Hovered => (
                        FolioTheme::ACCENT_HOVER,
                        Shadow {
                            color: FolioTheme::ACCENT_GLOW,
                            offset: Vector::new(0.0, 2.0),
                            blur_radius: 16.0,
                        },
                    ),
                    button::Status::Disabled => (
                        Color {
                            a: 0.5,
                            ..FolioTheme::ACCENT
                        },
                        Shadow::default(),
                    ),
                    _ => (
                        FolioTheme::ACCENT,
                        Shadow {
                            color: FolioTheme::ACCENT_GLOW,
                            offset: Vector::new(0.0, 2.0),
                            blur_radius: 8.0,
                        },
                    ),
                };

                button::Style {
                    text_color: Color::WHITE,
                    background: Some(Background::Color(background)),
                    border: Border {
                        color: background,
                        width: 1.0,
                        radius: 8.0.into(),
                    },
                    shadow,
                    ..button::Style::default()
                }
            },
            Button::Secondary => |theme, status| {
                let text = theme.palette().text;
                let background = match status {
                    button::Status::Hovered | button::Status::Pressed => {
                        Color { a: 0.08, ..text }
                    }
                    _ => Color::TRANSPARENT,
                };
                button::Style {
                    text_color: match status {
                        button::Status::Disabled => Color { a: 0.4, ..text },
                        _ => text,
                    },
                    background: Some(Background::Color(background)),
                    border: Border {
                        color: hairline(theme),
                        width: 1.0,
                        radius: 8.0.into(),
                    },
                    ..button::Style::default()
                }
            },
            Button::NavLink | Button::Tab => |theme, status| {
                let text = theme.palette().text;
                button::Style {
                    text_color: match status {
                        button::Status::Hovered => FolioTheme::ACCENT,
                        _ => text,
                    },
                    background: None,
                    ..button::Style::default()
                }
            },
            Button::NavLinkActive => |_, _| button::Style {
                text_color: FolioTheme::ACCENT,
                background: None,
                border: Border {
                    color: FolioTheme::ACCENT,
                    width: 0.0,
                    radius: 0.0.into(),
                },
                ..button::Style::default()
            },
            Button::TabActive => |_, _| button::Style {
                text_color: Color::WHITE,
                background: Some(Background::Color(FolioTheme::ACCENT)),
                border: Border {
                    radius: 8.0.into(),
                    ..Border::default()
                },
                ..button::Style::default()
            },
            Button::Icon => |theme, status| {
                let text = theme.palette().text;
                button::Style {
                    text_color: text,
                    background: match status {
                        button::Status::Hovered | button::Status::Pressed => {
                            Some(Background::Color(Color { a: 0.1, ..text }))
                        }
                        _ => None,
                    },
                    border: Border {
                        radius: 20.0.into(),
                        ..Border::default()
                    },
                    ..button::Style::default()
                }
            },
            Button::Dot => |theme, _| button::Style {
                background: Some(Background::Color(Color {
                    a: 0.25,
                    ..theme.palette().text
                })),
                border: Border {
                    radius: 6.0.into(),
                    ..Border::default()
                },
                ..button::Style::default()
            },
            Button::DotActive => |_, _| button::Style {
                background: Some(Background::Color(FolioTheme::ACCENT)),
                border: Border {
                    radius: 6.0.into(),
                    ..Border::default()
                },
                ..button::Style::default()
            },
        }
    }
}

/// Input style; `invalid` switches the border to the error color.
pub fn input_style(
    invalid: bool,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    move |theme, status| {
        let mut style = text_input::default(theme, status);
        style.background = Background::Color(surface(theme));
        style.border = Border {
            color: if invalid {
                FolioTheme::ERROR
            } else if matches!(status, text_input::Status::Focused { .. }) {
                FolioTheme::ACCENT
            } else {
                hairline(theme)
            },
            width: 1.0,
            radius: 8.0.into(),
        };
        style
    }
}
