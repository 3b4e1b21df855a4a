//! Terminal confetti
//!
//! Particles live in normalized screen space (0.0..1.0 on both axes) and are
//! projected onto whatever area they are rendered into.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use super::celebration::{Celebration, CelebrationSink, Rgb};

/// Seconds per lifetime tick
const TICK_SECS: f32 = 1.0 / 60.0;
/// Launch speed in screen-heights per second
const BASE_SPEED: f32 = 1.4;
/// Downward acceleration in screen-heights per second squared
const BASE_GRAVITY: f32 = 1.6;
/// Velocity kept per second
const DRAG: f32 = 0.35;

const GLYPHS: &[&str] = &["*", "•", "✦", "·", "+"];

#[derive(Debug, Clone)]
struct Particle {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    gravity: f32,
    age: f32,
    lifetime: f32,
    color: Rgb,
    glyph: &'static str,
}

impl Particle {
    fn alive(&self) -> bool {
        self.age < self.lifetime
    }
}

/// Active confetti particles
pub struct ConfettiLayer {
    particles: Vec<Particle>,
    rng: StdRng,
}

impl ConfettiLayer {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            particles: Vec::new(),
            rng,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.particles.is_empty()
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Spawn a burst from the horizontal centre
    pub fn burst(&mut self, celebration: &Celebration) {
        let half_spread = celebration.spread.to_radians() / 2.0;
        let lifetime = celebration.ticks as f32 * TICK_SECS;

        for _ in 0..celebration.particle_count {
            // 0 rad points straight up
            let angle = self.rng.gen_range(-half_spread..=half_spread);
            let speed = BASE_SPEED * celebration.scalar.max(0.1) * self.rng.gen_range(0.5f32..1.0);
            let color = if celebration.palette.is_empty() {
                (255, 255, 255)
            } else {
                celebration.palette[self.rng.gen_range(0..celebration.palette.len())]
            };
            self.particles.push(Particle {
                x: 0.5,
                y: celebration.origin_y,
                vx: angle.sin() * speed,
                vy: -angle.cos() * speed,
                gravity: BASE_GRAVITY * celebration.gravity,
                age: 0.0,
                lifetime: lifetime * self.rng.gen_range(0.7f32..1.0),
                color,
                glyph: GLYPHS[self.rng.gen_range(0..GLYPHS.len())],
            });
        }
        log::debug!(
            "Confetti burst {:?}: {} particles",
            celebration.kind,
            celebration.particle_count
        );
    }

    /// Advance all particles and drop the expired ones
    pub fn update(&mut self, delta: Duration) {
        let dt = delta.as_secs_f32();
        if dt <= 0.0 {
            return;
        }
        let drag = DRAG.powf(dt);
        for p in &mut self.particles {
            p.vy += p.gravity * dt;
            p.vx *= drag;
            p.vy *= drag;
            p.x += p.vx * dt;
            p.y += p.vy * dt;
            p.age += dt;
        }
        self.particles.retain(|p| p.alive() && p.y <= 1.2);
    }
}

impl Default for ConfettiLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl CelebrationSink for ConfettiLayer {
    fn celebrate(&mut self, celebration: &Celebration) {
        self.burst(celebration);
    }
}

impl Widget for &ConfettiLayer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        for p in &self.particles {
            if !(0.0..1.0).contains(&p.x) || !(0.0..1.0).contains(&p.y) {
                continue;
            }
            let x = area.x + (p.x * area.width as f32) as u16;
            let y = area.y + (p.y * area.height as f32) as u16;
            let (r, g, b) = p.color;
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(p.glyph)
                    .set_style(Style::default().fg(Color::Rgb(r, g, b)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habits::HabitVariant;

    fn layer() -> ConfettiLayer {
        ConfettiLayer::with_rng(StdRng::seed_from_u64(9))
    }

    #[test]
    fn test_burst_spawns_particle_count() {
        let mut confetti = layer();
        confetti.celebrate(&Celebration::habit_completed(HabitVariant::Primary));
        assert_eq!(confetti.particle_count(), 30);
        assert!(confetti.is_active());
    }

    #[test]
    fn test_particles_expire() {
        let mut confetti = layer();
        confetti.burst(&Celebration::pact_signed());
        // 200 ticks at 60 Hz is well under five seconds
        for _ in 0..50 {
            confetti.update(Duration::from_millis(100));
        }
        assert!(!confetti.is_active());
    }

    #[test]
    fn test_render_stays_in_bounds() {
        let mut confetti = layer();
        confetti.burst(&Celebration::pact_signed());
        confetti.update(Duration::from_millis(200));
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        (&confetti).render(area, &mut buf);
        assert_eq!(buf.area, area);
    }
}
