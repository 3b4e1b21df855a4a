//! Celebration notifications
//!
//! The core never waits on a celebration; it only describes one.

use crate::habits::HabitVariant;

/// An RGB colour triple
pub type Rgb = (u8, u8, u8);

const PRIMARY_PALETTE: &[Rgb] = &[(0x4f, 0x46, 0xe5), (0x63, 0x66, 0xf1), (0x81, 0x8c, 0xf8)];
const ACCENT_PALETTE: &[Rgb] = &[(0x93, 0x33, 0xea), (0xa8, 0x55, 0xf7), (0xc0, 0x84, 0xfc)];
const PACT_PALETTE: &[Rgb] = &[
    (0x4f, 0x46, 0xe5),
    (0x93, 0x33, 0xea),
    (0x22, 0xc5, 0x5e),
    (0xf5, 0x9e, 0x0b),
];

/// What triggered a celebration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CelebrationKind {
    HabitCompleted(HabitVariant),
    PactSigned,
}

/// Parameters for a confetti burst
#[derive(Debug, Clone, PartialEq)]
pub struct Celebration {
    pub kind: CelebrationKind,
    pub particle_count: u32,
    /// Cone width in degrees, centred straight up
    pub spread: f32,
    /// Vertical origin as a fraction of the screen height
    pub origin_y: f32,
    pub palette: &'static [Rgb],
    /// Particle size / speed multiplier
    pub scalar: f32,
    pub gravity: f32,
    /// Lifetime in 60 Hz frames
    pub ticks: u32,
}

impl Celebration {
    /// Small burst for a habit checked off
    pub fn habit_completed(variant: HabitVariant) -> Self {
        let palette = match variant {
            HabitVariant::Primary => PRIMARY_PALETTE,
            HabitVariant::Accent => ACCENT_PALETTE,
        };
        Self {
            kind: CelebrationKind::HabitCompleted(variant),
            particle_count: 30,
            spread: 60.0,
            origin_y: 0.7,
            palette,
            scalar: 0.7,
            gravity: 1.2,
            ticks: 100,
        }
    }

    /// Big burst for a signed quarterly pact
    pub fn pact_signed() -> Self {
        Self {
            kind: CelebrationKind::PactSigned,
            particle_count: 150,
            spread: 100.0,
            origin_y: 0.6,
            palette: PACT_PALETTE,
            scalar: 1.0,
            gravity: 1.0,
            ticks: 200,
        }
    }
}

/// Anything that can play a celebration. Fire and forget.
pub trait CelebrationSink {
    fn celebrate(&mut self, celebration: &Celebration);
}
