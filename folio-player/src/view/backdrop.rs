//! Orbiting tech glyphs drawn behind the page.

use std::f32::consts::TAU;

use folio_core::Mood;
use folio_core::motion::{OrbitField, OrbitPoint};
use iced::widget::canvas::{self, Canvas, Geometry, LineDash, Path, Program, Stroke};
use iced::{Color, Element, Length, Pixels, Point, Rectangle, Renderer, Theme, mouse};

use crate::messages::Message;
use crate::state::State;

pub fn view(state: &State) -> Element<'_, Message> {
    Canvas::new(Backdrop {
        field: &state.backdrop,
        palette: Palette::for_mood(state.mood()),
    })
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

#[derive(Debug, Clone, Copy)]
struct Palette {
    glyph: Color,
    link: Color,
    ring: Color,
    particle: Color,
}

impl Palette {
    fn for_mood(mood: Mood) -> Self {
        match mood {
            Mood::Light => Self {
                glyph: Color::from_rgba8(79, 70, 229, 0.35),
                link: Color::from_rgba8(124, 58, 237, 0.25),
                ring: Color::from_rgba8(79, 70, 229, 0.08),
                particle: Color::from_rgba8(79, 70, 229, 0.2),
            },
            Mood::Dark => Self {
                glyph: Color::from_rgba8(167, 139, 250, 0.4),
                link: Color::from_rgba8(129, 140, 248, 0.25),
                ring: Color::from_rgba8(129, 140, 248, 0.1),
                particle: Color::from_rgba8(167, 139, 250, 0.25),
            },
        }
    }
}

struct Backdrop<'a> {
    field: &'a OrbitField,
    palette: Palette,
}

impl Backdrop<'_> {
    fn to_pixels(point: OrbitPoint, bounds: Rectangle) -> Point {
        Point::new(
            point.x / 100.0 * bounds.width,
            point.y / 100.0 * bounds.height,
        )
    }
}

impl<Message> Program<Message> for Backdrop<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let centre = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let short_side = bounds.width.min(bounds.height);

        for ring in 1..=3u8 {
            let radius = short_side * (0.2 + 0.1 * f32::from(ring));
            let circumference = TAU * radius;
            let offset = self.field.ring_rotation(ring) / TAU * circumference;
            frame.stroke(
                &Path::circle(centre, radius),
                Stroke {
                    line_dash: LineDash {
                        segments: &[2.0, 10.0],
                        offset: offset as usize,
                    },
                    ..Stroke::default()
                        .with_color(self.palette.ring)
                        .with_width(1.0)
                },
            );
        }

        let dash_offset = (self.field.elapsed() * 20.0) as usize % 10;
        for (from, to) in self.field.links() {
            frame.stroke(
                &Path::line(
                    Self::to_pixels(from, bounds),
                    Self::to_pixels(to, bounds),
                ),
                Stroke {
                    line_dash: LineDash {
                        segments: &[5.0, 5.0],
                        offset: dash_offset,
                    },
                    ..Stroke::default()
                        .with_color(self.palette.link)
                        .with_width(0.5)
                },
            );
        }

        for (node, point) in self.field.nodes().iter().zip(self.field.points()) {
            let at = Self::to_pixels(point, bounds);
            frame.fill(&Path::circle(at, 4.0 * node.size), self.palette.glyph);
            frame.fill_text(canvas::Text {
                content: node.label.to_string(),
                position: Point::new(at.x + 8.0, at.y - 8.0),
                color: self.palette.glyph,
                size: Pixels(14.0 * node.size),
                ..canvas::Text::default()
            });
        }

        for particle in self.field.particles() {
            let mut at = Self::to_pixels(particle.at, bounds);
            at.y += particle.lift;
            frame.fill(&Path::circle(at, particle.radius), self.palette.particle);
        }

        vec![frame.into_geometry()]
    }
}
