//! Decorative particle field
//!
//! Every particle's position, size, and timing is drawn once when the field
//! is generated. Rendering the same field again produces the same layout, so
//! the animation never restarts on a re-render.

use std::ops::Range;

use rand::Rng;

/// Parameters of the generated field
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleConfig {
    pub speed_lines: usize,
    pub floating_lights: usize,
    pub line_height_px: Range<f64>,
    pub line_duration_s: Range<f64>,
    pub light_size_px: Range<f64>,
    pub light_duration_s: Range<f64>,
    pub max_delay_s: f64,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            speed_lines: 15,
            floating_lights: 10,
            line_height_px: 20.0..100.0,
            line_duration_s: 1.0..3.0,
            light_size_px: 1.0..4.0,
            light_duration_s: 10.0..20.0,
            max_delay_s: 5.0,
        }
    }
}

/// Vertical streak falling from top to bottom, like passing street lights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedLine {
    pub left_pct: f64,
    pub height_px: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

/// Small dot drifting slowly in place
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingLight {
    pub left_pct: f64,
    pub top_pct: f64,
    pub size_px: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl SpeedLine {
    /// Inline style carrying this line's fixed parameters
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; height: {:.1}px; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.left_pct, self.height_px, self.duration_s, self.delay_s
        )
    }
}

impl FloatingLight {
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {size:.1}px; height: {size:.1}px; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.left_pct,
            self.top_pct,
            self.duration_s,
            self.delay_s,
            size = self.size_px
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticleField {
    pub speed_lines: Vec<SpeedLine>,
    pub floating_lights: Vec<FloatingLight>,
}

impl ParticleField {
    /// Draw a new field from `rng`
    pub fn generate<R: Rng>(rng: &mut R, config: &ParticleConfig) -> Self {
        let speed_lines = (0..config.speed_lines)
            .map(|_| SpeedLine {
                left_pct: rng.gen_range(0.0..100.0),
                height_px: sample(rng, &config.line_height_px),
                duration_s: sample(rng, &config.line_duration_s),
                delay_s: sample(rng, &(0.0..config.max_delay_s)),
            })
            .collect();

        let floating_lights = (0..config.floating_lights)
            .map(|_| FloatingLight {
                left_pct: rng.gen_range(0.0..100.0),
                top_pct: rng.gen_range(0.0..100.0),
                size_px: sample(rng, &config.light_size_px),
                duration_s: sample(rng, &config.light_duration_s),
                delay_s: sample(rng, &(0.0..config.max_delay_s)),
            })
            .collect();

        Self {
            speed_lines,
            floating_lights,
        }
    }

    pub fn len(&self) -> usize {
        self.speed_lines.len().saturating_add(self.floating_lights.len())
    }

    pub fn is_empty(&self) -> bool {
        self.speed_lines.is_empty() && self.floating_lights.is_empty()
    }
}

/// Uniform sample that tolerates an empty range by returning its start
fn sample<R: Rng>(rng: &mut R, range: &Range<f64>) -> f64 {
    if range.start < range.end {
        rng.gen_range(range.clone())
    } else {
        range.start
    }
}
