use crate::constants::*;
use crate::viewport::Viewport;
use glam::Vec2;
use rand::prelude::*;
use std::collections::VecDeque;
use std::time::Duration;

/// A single falling light streak on the background canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct Streak {
    pub pos: Vec2,
    pub vel: Vec2,
    pub len: f32,
    pub alpha: f32,
    pub width: f32,
}

impl Streak {
    /// End point of the trail, drawn from `pos` back along the velocity.
    #[inline]
    pub fn tail(&self) -> Vec2 {
        self.pos - self.vel * self.len / STREAK_TAIL_DIVISOR
    }

    #[inline]
    pub fn advance(&mut self, fade: f32) {
        self.pos += self.vel;
        self.alpha *= fade;
    }

    /// True once the streak has faded out or left the visible bounds
    /// (with a margin so long trails finish drawing).
    #[inline]
    pub fn is_spent(&self, viewport_height: f32) -> bool {
        self.alpha < STREAK_ALPHA_FLOOR
            || self.pos.x < -STREAK_OFFSCREEN_MARGIN
            || self.pos.y > viewport_height + STREAK_OFFSCREEN_MARGIN
    }

    /// CSS stroke color for the current opacity.
    pub fn stroke_style(&self) -> String {
        let [r, g, b] = STREAK_RGB;
        format!("rgba({}, {}, {}, {})", r, g, b, self.alpha)
    }
}

#[derive(Clone, Debug)]
pub struct StreakParams {
    pub spawn_interval: Duration,
    pub spawn_probability: f32,
    pub max_count: usize,
    pub fade_per_frame: f32,
}

impl Default for StreakParams {
    fn default() -> Self {
        Self {
            spawn_interval: STREAK_SPAWN_INTERVAL,
            spawn_probability: STREAK_SPAWN_PROBABILITY,
            max_count: STREAK_MAX_COUNT,
            fade_per_frame: STREAK_FADE_PER_FRAME,
        }
    }
}

/// Bounded, ordered collection of live streaks plus the spawn clock.
///
/// One `frame` call corresponds to one animation frame: draw first using
/// [`StreakField::iter`], then call `frame` to advance, prune and run any
/// spawn cycles that came due. Pruning therefore always happens before the
/// next spawn cycle.
pub struct StreakField {
    pub params: StreakParams,
    streaks: VecDeque<Streak>,
    rng: StdRng,
    spawn_accum: Duration,
}

impl StreakField {
    pub fn new(params: StreakParams, seed: u64) -> Self {
        Self::with_rng(params, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(params: StreakParams, rng: StdRng) -> Self {
        let capacity = params.max_count + 1;
        Self {
            params,
            streaks: VecDeque::with_capacity(capacity),
            rng,
            spawn_accum: Duration::ZERO,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.streaks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.streaks.is_empty()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Streak> {
        self.streaks.iter()
    }

    /// Insert a streak, evicting the oldest ones past the cap.
    pub fn push(&mut self, streak: Streak) {
        self.streaks.push_back(streak);
        while self.streaks.len() > self.params.max_count {
            self.streaks.pop_front();
        }
    }

    /// Create one randomized streak in the upper-right spawn band.
    pub fn spawn(&mut self, viewport: Viewport) {
        let w = viewport.width;
        let h = viewport.height;
        let r = &mut self.rng;

        let x = r.gen::<f32>() * w + w * STREAK_X_OFFSET_FRAC;
        let y = r.gen::<f32>() * h * STREAK_Y_SPAN_FRAC;
        let len = STREAK_LEN_MIN + r.gen::<f32>() * STREAK_LEN_SPAN;
        let speed = STREAK_SPEED_MIN + r.gen::<f32>() * STREAK_SPEED_SPAN;
        let angle = STREAK_ANGLE + (r.gen::<f32>() - 0.5) * STREAK_ANGLE_JITTER;
        let alpha = STREAK_ALPHA_MIN + r.gen::<f32>() * STREAK_ALPHA_SPAN;
        let width = STREAK_WIDTH_MIN + r.gen::<f32>() * STREAK_WIDTH_SPAN;

        self.push(Streak {
            pos: Vec2::new(x, y),
            vel: Vec2::from_angle(angle) * speed,
            len,
            alpha,
            width,
        });
    }

    /// One spawn cycle: spawns with the configured probability.
    /// Returns whether a streak was created.
    pub fn spawn_cycle(&mut self, viewport: Viewport) -> bool {
        if self.rng.gen::<f32>() < self.params.spawn_probability {
            self.spawn(viewport);
            true
        } else {
            false
        }
    }

    pub fn advance(&mut self) {
        let fade = self.params.fade_per_frame;
        for s in self.streaks.iter_mut() {
            s.advance(fade);
        }
    }

    /// Drop every spent streak. Returns how many were removed.
    pub fn prune(&mut self, viewport_height: f32) -> usize {
        let before = self.streaks.len();
        self.streaks.retain(|s| !s.is_spent(viewport_height));
        before - self.streaks.len()
    }

    /// Advance, prune, then run the spawn cycles that `dt` made due.
    /// Returns the number of spawn cycles run.
    pub fn frame(&mut self, dt: Duration, viewport: Viewport) -> usize {
        self.advance();
        let pruned = self.prune(viewport.height);
        if pruned > 0 {
            log::trace!("[streaks] pruned {} (live {})", pruned, self.streaks.len());
        }

        let interval = self.params.spawn_interval;
        if interval.is_zero() {
            return 0;
        }
        // A backgrounded tab can hand us a huge dt; anything past a full
        // field's worth of cycles would be evicted immediately anyway.
        let backlog_cap = interval * self.params.max_count.max(1) as u32;
        self.spawn_accum = (self.spawn_accum + dt).min(backlog_cap);
        let mut cycles = 0;
        while self.spawn_accum >= interval {
            self.spawn_accum -= interval;
            self.spawn_cycle(viewport);
            cycles += 1;
        }
        cycles
    }
}
