//! Decorative motion that needs state: the hero typewriter, the initial
//! loading gate and the orbiting background. Pure stepping logic; the host
//! owns the timers.

use std::f32::consts::TAU;
use std::time::{Duration, Instant};

/// How long the loading screen stays up before the page is shown.
pub const LOADING_SCREEN: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTimings {
    pub start_delay: Duration,
    pub per_char_typed: Duration,
    pub hold_full: Duration,
    pub per_char_deleted: Duration,
    pub hold_empty: Duration,
}

impl Default for TypewriterTimings {
    fn default() -> Self {
        Self {
            start_delay: Duration::from_millis(500),
            per_char_typed: Duration::from_millis(100),
            hold_full: Duration::from_millis(2000),
            per_char_deleted: Duration::from_millis(50),
            hold_empty: Duration::from_millis(1000),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Waiting,
    Typing,
    HoldingFull,
    Deleting,
    HoldingEmpty,
}

/// Types a phrase out, holds, deletes it, pauses, and repeats.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrase: String,
    shown: usize,
    stage: Stage,
    timings: TypewriterTimings,
}

impl Typewriter {
    pub fn new(phrase: impl Into<String>, timings: TypewriterTimings) -> Self {
        Self {
            phrase: phrase.into(),
            shown: 0,
            stage: Stage::Waiting,
            timings,
        }
    }

    /// Delay before the first [`Typewriter::advance`].
    pub fn start_delay(&self) -> Duration {
        self.timings.start_delay
    }

    /// Currently visible prefix of the phrase.
    pub fn visible(&self) -> &str {
        match self.phrase.char_indices().nth(self.shown) {
            Some((end, _)) => &self.phrase[..end],
            None => &self.phrase,
        }
    }

    /// Apply one step and return the delay until the next one.
    pub fn advance(&mut self) -> Duration {
        match self.stage {
            Stage::Waiting | Stage::HoldingEmpty => {
                self.stage = Stage::Typing;
                self.type_step()
            }
            Stage::Typing => self.type_step(),
            Stage::HoldingFull => {
                self.stage = Stage::Deleting;
                self.delete_step()
            }
            Stage::Deleting => self.delete_step(),
        }
    }

    fn type_step(&mut self) -> Duration {
        if self.shown < self.phrase.chars().count() {
            self.shown += 1;
            self.timings.per_char_typed
        } else {
            self.stage = Stage::HoldingFull;
            self.timings.hold_full
        }
    }

    fn delete_step(&mut self) -> Duration {
        if self.shown > 0 {
            self.shown -= 1;
            self.timings.per_char_deleted
        } else {
            self.stage = Stage::HoldingEmpty;
            self.timings.hold_empty
        }
    }
}

/// One glyph on the background orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitNode {
    pub label: &'static str,
    /// Relative glyph size, 1.0 is the base size.
    pub size: f32,
}

/// A position in percent of the backdrop area, `(50, 50)` is the centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitPoint {
    pub x: f32,
    pub y: f32,
}

/// A small drifting dot behind the orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub at: OrbitPoint,
    /// Radius in logical pixels.
    pub radius: f32,
    /// Vertical bob in logical pixels, never positive.
    pub lift: f32,
}

const ORBIT_RADIUS: f32 = 35.0;
const ORBIT_WOBBLE: f32 = 5.0;
const ORBIT_ANGULAR_SPEED: f32 = 0.1;
const WOBBLE_SPEED: f32 = 0.05;
const PARTICLE_COUNT: usize = 6;
const PARTICLE_LIFT: f32 = 20.0;

const TECH_NODES: [OrbitNode; 12] = [
    OrbitNode { label: "React", size: 1.2 },
    OrbitNode { label: "JavaScript", size: 1.1 },
    OrbitNode { label: "HTML5", size: 1.1 },
    OrbitNode { label: "CSS3", size: 1.1 },
    OrbitNode { label: "Database", size: 1.0 },
    OrbitNode { label: "Server", size: 1.0 },
    OrbitNode { label: "Code", size: 1.0 },
    OrbitNode { label: "Brackets", size: 1.0 },
    OrbitNode { label: "Layers", size: 1.0 },
    OrbitNode { label: "Cube", size: 1.0 },
    OrbitNode { label: "Bolt", size: 1.0 },
    OrbitNode { label: "Rocket", size: 1.1 },
];

/// Position of node `index` of `total` after `elapsed` seconds.
///
/// Nodes are evenly spaced on a circle that turns slowly, each with a small
/// phase-shifted wobble so the ring never looks rigid.
pub fn orbit_position(index: usize, total: usize, elapsed: f32) -> OrbitPoint {
    let total = total.max(1) as f32;
    let i = index as f32;
    let angle = i / total * TAU + elapsed * ORBIT_ANGULAR_SPEED;
    let wobble = elapsed * WOBBLE_SPEED + i;

    OrbitPoint {
        x: 50.0 + angle.cos() * ORBIT_RADIUS + wobble.sin() * ORBIT_WOBBLE,
        y: 50.0 + angle.sin() * ORBIT_RADIUS + wobble.cos() * ORBIT_WOBBLE,
    }
}

/// The animated backdrop: tech glyphs on a slow orbit, linked to their
/// neighbours, over three counter-rotating rings and a few particles.
#[derive(Debug, Clone)]
pub struct OrbitField {
    nodes: Vec<OrbitNode>,
    elapsed: f32,
    last_frame: Option<Instant>,
}

impl Default for OrbitField {
    fn default() -> Self {
        Self::new(TECH_NODES.to_vec())
    }
}

impl OrbitField {
    pub fn new(nodes: Vec<OrbitNode>) -> Self {
        Self {
            nodes,
            elapsed: 0.0,
            last_frame: None,
        }
    }

    pub fn nodes(&self) -> &[OrbitNode] {
        &self.nodes
    }

    /// Seconds of animation so far.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed += delta.as_secs_f32();
    }

    /// Advance by the time since the previous frame. The first frame only
    /// records its timestamp.
    pub fn tick(&mut self, now: Instant) {
        if let Some(last) = self.last_frame {
            self.advance(now.saturating_duration_since(last));
        }
        self.last_frame = Some(now);
    }

    pub fn points(&self) -> impl Iterator<Item = OrbitPoint> + '_ {
        let total = self.nodes.len();
        (0..total).map(move |i| orbit_position(i, total, self.elapsed))
    }

    /// Each node joined to the next, closing the loop.
    pub fn links(&self) -> impl Iterator<Item = (OrbitPoint, OrbitPoint)> + '_ {
        let total = self.nodes.len();
        let count = if total > 1 { total } else { 0 };
        (0..count).map(move |i| {
            (
                orbit_position(i, total, self.elapsed),
                orbit_position((i + 1) % total, total, self.elapsed),
            )
        })
    }

    /// Rotation of ring `ring` (1..=3) in radians. Outer rings turn slower:
    /// one full turn every `80 + 20 * ring` seconds.
    pub fn ring_rotation(&self, ring: u8) -> f32 {
        let period = 80.0 + 20.0 * f32::from(ring);
        (self.elapsed / period).fract() * TAU
    }

    pub fn particles(&self) -> impl Iterator<Item = Particle> + '_ {
        (0..PARTICLE_COUNT).map(move |i| {
            let n = i as f32;
            let period = 3.0 + n;
            let phase = ((self.elapsed - 0.2 * n) / period).rem_euclid(1.0);
            Particle {
                at: OrbitPoint {
                    x: 10.0 + n * 15.0,
                    y: 20.0 + n * 10.0,
                },
                radius: (3.0 + (self.elapsed + n).sin() * 2.0) / 2.0,
                lift: -PARTICLE_LIFT * (0.5 - 0.5 * (phase * TAU).cos()),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_holds_deletes_and_repeats() {
        let timings = TypewriterTimings::default();
        let mut tw = Typewriter::new("Hé!", timings);
        assert_eq!(tw.visible(), "");

        assert_eq!(tw.advance(), timings.per_char_typed);
        assert_eq!(tw.visible(), "H");
        tw.advance();
        assert_eq!(tw.visible(), "Hé");
        tw.advance();
        assert_eq!(tw.visible(), "Hé!");

        assert_eq!(tw.advance(), timings.hold_full);
        assert_eq!(tw.visible(), "Hé!");

        assert_eq!(tw.advance(), timings.per_char_deleted);
        assert_eq!(tw.visible(), "Hé");
        tw.advance();
        tw.advance();
        assert_eq!(tw.visible(), "");
        assert_eq!(tw.advance(), timings.hold_empty);

        assert_eq!(tw.advance(), timings.per_char_typed);
        assert_eq!(tw.visible(), "H");
    }

    #[test]
    fn orbit_starts_evenly_spaced_around_the_centre() {
        let field = OrbitField::default();
        let points: Vec<_> = field.points().collect();
        assert_eq!(points.len(), 12);

        for (i, point) in points.iter().enumerate() {
            let angle = i as f32 / 12.0 * TAU;
            let wobble = i as f32;
            let x = 50.0 + angle.cos() * 35.0 + wobble.sin() * 5.0;
            let y = 50.0 + angle.sin() * 35.0 + wobble.cos() * 5.0;
            assert!((point.x - x).abs() < 1e-3, "x of node {i}");
            assert!((point.y - y).abs() < 1e-3, "y of node {i}");
        }
    }

    #[test]
    fn orbit_stays_inside_the_area() {
        let mut field = OrbitField::default();
        for _ in 0..500 {
            field.advance(Duration::from_millis(700));
            for point in field.points() {
                assert!((9.99..=90.01).contains(&point.x));
                assert!((9.99..=90.01).contains(&point.y));
            }
        }
    }

    #[test]
    fn orbit_turns_with_time() {
        let mut field = OrbitField::default();
        let before: Vec<_> = field.points().collect();
        field.advance(Duration::from_secs(5));
        let after: Vec<_> = field.points().collect();
        assert!(before.iter().zip(&after).all(|(a, b)| a != b));

        let expected = orbit_position(3, 12, 5.0);
        assert_eq!(after[3], expected);
    }

    #[test]
    fn first_tick_only_records_the_timestamp() {
        let mut field = OrbitField::default();
        let start = Instant::now();
        field.tick(start);
        assert_eq!(field.elapsed(), 0.0);
        field.tick(start + Duration::from_millis(250));
        assert!((field.elapsed() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn links_close_the_loop() {
        let field = OrbitField::default();
        let links: Vec<_> = field.links().collect();
        let points: Vec<_> = field.points().collect();
        assert_eq!(links.len(), 12);
        assert_eq!(links[11], (points[11], points[0]));

        let single = OrbitField::new(vec![OrbitNode {
            label: "Solo",
            size: 1.0,
        }]);
        assert_eq!(single.links().count(), 0);
    }

    #[test]
    fn rings_turn_at_their_own_pace() {
        let mut field = OrbitField::default();
        field.advance(Duration::from_secs(50));
        assert!((field.ring_rotation(1) - 0.5 * TAU).abs() < 1e-4);
        assert!((field.ring_rotation(3) - 50.0 / 140.0 * TAU).abs() < 1e-4);
    }

    #[test]
    fn particles_bob_upwards_only() {
        let mut field = OrbitField::default();
        for _ in 0..100 {
            field.advance(Duration::from_millis(137));
            for particle in field.particles() {
                assert!(particle.lift <= 0.0);
                assert!(particle.lift >= -PARTICLE_LIFT);
                assert!(particle.radius > 0.0);
            }
        }
    }
}
