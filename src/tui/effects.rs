//! Timed visual effects: cancellable schedules, the glitch flash,
//! the glyph scrambler, and the control rack sliders.

use std::time::{Duration, Instant};

use rand::Rng;

use crate::constants::{GLITCH_FLASH_MS, SCRAMBLE_ALPHABET, SCRAMBLE_REVERT_MS};

/// A cancellable one-shot schedule.
///
/// Re-arming supersedes the earlier deadline: the generation counter
/// bumps on every arm, so a schedule armed twice in quick succession
/// fires once, at the later deadline. This closes the race where a
/// rapid double-trigger would otherwise revert an effect early.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    deadline: Option<Instant>,
    generation: u64,
}

impl Schedule {
    /// Creates an idle schedule.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms (or re-arms) the schedule to fire after `delay`.
    /// Returns the new generation.
    pub fn arm(&mut self, now: Instant, delay: Duration) -> u64 {
        self.generation += 1;
        self.deadline = Some(now + delay);
        self.generation
    }

    /// Cancels any pending deadline.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a deadline is pending.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Current generation counter.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Fires at most once per arm: returns `true` the first time `now`
    /// reaches the pending deadline, then disarms.
    pub fn fire_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Short-lived glitch flash toggled around pulse/scramble actions.
#[derive(Debug, Clone, Default)]
pub struct GlitchFlash {
    active: bool,
    fade: Schedule,
}

impl GlitchFlash {
    /// Creates an inactive flash.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Turns the flash on for the default duration.
    pub fn trigger(&mut self, now: Instant) {
        self.trigger_for(now, Duration::from_millis(GLITCH_FLASH_MS));
    }

    /// Turns the flash on for `duration`. Re-triggering extends it.
    pub fn trigger_for(&mut self, now: Instant, duration: Duration) {
        self.active = true;
        self.fade.arm(now, duration);
    }

    /// Clears the flash once its fade deadline passes.
    pub fn tick(&mut self, now: Instant) {
        if self.fade.fire_due(now) {
            self.active = false;
        }
    }

    /// Whether the flash is currently on.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }
}

/// Scrambles the ASCII monolith and reverts it after a fixed delay.
#[derive(Debug, Clone)]
pub struct Scrambler {
    base: String,
    display: Option<String>,
    revert: Schedule,
}

impl Scrambler {
    /// Creates a scrambler over the given base text.
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            display: None,
            revert: Schedule::new(),
        }
    }

    /// The text to display right now: scrambled if active, base otherwise.
    #[must_use]
    pub fn text(&self) -> &str {
        self.display.as_deref().unwrap_or(&self.base)
    }

    /// Whether scrambled glyphs are currently shown.
    #[must_use]
    pub const fn is_scrambled(&self) -> bool {
        self.display.is_some()
    }

    /// Scrambles the base text at `intensity` (0.0-1.0) and arms the
    /// revert timer. Scrambling again before the revert supersedes the
    /// earlier revert deadline.
    pub fn scramble<R: Rng>(&mut self, rng: &mut R, intensity: f32, now: Instant) {
        self.display = Some(scramble_text(&self.base, rng, intensity));
        self.revert.arm(now, Duration::from_millis(SCRAMBLE_REVERT_MS));
    }

    /// Restores the base text once the revert deadline passes.
    pub fn tick(&mut self, now: Instant) {
        if self.revert.fire_due(now) {
            self.display = None;
        }
    }
}

/// Replaces each non-space character with a random symbol from the
/// scramble alphabet with probability `intensity * 0.4`. Line structure
/// and spaces are preserved.
pub fn scramble_text<R: Rng>(base: &str, rng: &mut R, intensity: f32) -> String {
    let threshold = intensity.clamp(0.0, 1.0) * 0.4;
    base.lines()
        .map(|line| {
            line.chars()
                .map(|ch| {
                    if ch == ' ' || rng.random::<f32>() >= threshold {
                        ch
                    } else {
                        SCRAMBLE_ALPHABET[rng.random_range(0..SCRAMBLE_ALPHABET.len())]
                    }
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The three effect sliders, each 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlRack {
    /// Spark density (terminal glow)
    pub spark_density: u8,
    /// Noise level (background grain)
    pub noise_level: u8,
    /// Glitch intensity (scramble probability input)
    pub glitch_intensity: u8,
}

impl ControlRack {
    /// Creates a rack with the given slider values, clamped to 0-100.
    #[must_use]
    pub fn new(spark_density: u8, noise_level: u8, glitch_intensity: u8) -> Self {
        Self {
            spark_density: spark_density.min(100),
            noise_level: noise_level.min(100),
            glitch_intensity: glitch_intensity.min(100),
        }
    }

    /// Glitch intensity as a 0.0-1.0 fraction.
    #[must_use]
    pub fn intensity(&self) -> f32 {
        f32::from(self.glitch_intensity) / 100.0
    }

    /// Nudges a slider by `delta`, clamping to 0-100.
    pub fn adjust(&mut self, slider: Slider, delta: i16) {
        let value = match slider {
            Slider::Spark => &mut self.spark_density,
            Slider::Noise => &mut self.noise_level,
            Slider::Glitch => &mut self.glitch_intensity,
        };
        *value = (i16::from(*value) + delta).clamp(0, 100) as u8;
    }
}

impl Default for ControlRack {
    fn default() -> Self {
        Self::new(40, 35, 50)
    }
}

/// Which rack slider an adjustment targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slider {
    /// Spark density slider
    Spark,
    /// Noise level slider
    Noise,
    /// Glitch intensity slider
    Glitch,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_schedule_fires_once() {
        let mut schedule = Schedule::new();
        let t0 = Instant::now();
        schedule.arm(t0, Duration::from_millis(100));

        assert!(!schedule.fire_due(t0));
        assert!(schedule.fire_due(t0 + Duration::from_millis(100)));
        assert!(!schedule.fire_due(t0 + Duration::from_secs(1)));
    }

    #[test]
    fn test_rearm_supersedes() {
        let mut schedule = Schedule::new();
        let t0 = Instant::now();
        let gen1 = schedule.arm(t0, Duration::from_millis(100));
        let gen2 = schedule.arm(t0 + Duration::from_millis(50), Duration::from_millis(100));
        assert!(gen2 > gen1);

        // The first deadline has passed but was superseded
        assert!(!schedule.fire_due(t0 + Duration::from_millis(100)));
        assert!(schedule.fire_due(t0 + Duration::from_millis(150)));
    }

    #[test]
    fn test_cancel_disarms() {
        let mut schedule = Schedule::new();
        let t0 = Instant::now();
        schedule.arm(t0, Duration::from_millis(10));
        schedule.cancel();
        assert!(!schedule.is_armed());
        assert!(!schedule.fire_due(t0 + Duration::from_secs(1)));
    }

    #[test]
    fn test_glitch_flash_fades() {
        let mut flash = GlitchFlash::new();
        let t0 = Instant::now();
        flash.trigger(t0);
        assert!(flash.is_active());

        flash.tick(t0 + Duration::from_millis(GLITCH_FLASH_MS + 1));
        assert!(!flash.is_active());
    }

    #[test]
    fn test_scramble_zero_intensity_is_identity() {
        let mut rng = StdRng::seed_from_u64(7);
        let base = "AB CD\nEF GH";
        assert_eq!(scramble_text(base, &mut rng, 0.0), base);
    }

    #[test]
    fn test_scramble_preserves_structure() {
        let mut rng = StdRng::seed_from_u64(7);
        let base = "AB CD\nEF GH";
        let scrambled = scramble_text(base, &mut rng, 1.0);

        assert_eq!(scrambled.lines().count(), base.lines().count());
        for (orig, out) in base.chars().zip(scrambled.chars()) {
            if orig == ' ' || orig == '\n' {
                assert_eq!(out, orig);
            } else {
                assert!(out == orig || SCRAMBLE_ALPHABET.contains(&out));
            }
        }
    }

    #[test]
    fn test_scrambler_reverts() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut scrambler = Scrambler::new("XXXX XXXX");
        let t0 = Instant::now();

        scrambler.scramble(&mut rng, 1.0, t0);
        assert!(scrambler.is_scrambled());

        scrambler.tick(t0 + Duration::from_millis(SCRAMBLE_REVERT_MS + 1));
        assert!(!scrambler.is_scrambled());
        assert_eq!(scrambler.text(), "XXXX XXXX");
    }

    #[test]
    fn test_scrambler_retrigger_supersedes_revert() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut scrambler = Scrambler::new("XXXX");
        let t0 = Instant::now();

        scrambler.scramble(&mut rng, 1.0, t0);
        let mid = t0 + Duration::from_millis(SCRAMBLE_REVERT_MS / 2);
        scrambler.scramble(&mut rng, 1.0, mid);

        // First revert deadline has passed; the second is still pending
        scrambler.tick(t0 + Duration::from_millis(SCRAMBLE_REVERT_MS + 1));
        assert!(scrambler.is_scrambled());

        scrambler.tick(mid + Duration::from_millis(SCRAMBLE_REVERT_MS + 1));
        assert!(!scrambler.is_scrambled());
    }

    #[test]
    fn test_rack_clamps() {
        let mut rack = ControlRack::default();
        rack.adjust(Slider::Glitch, 100);
        assert_eq!(rack.glitch_intensity, 100);
        rack.adjust(Slider::Noise, -100);
        assert_eq!(rack.noise_level, 0);
        assert!((ControlRack::new(0, 0, 50).intensity() - 0.5).abs() < f32::EPSILON);
    }
}
