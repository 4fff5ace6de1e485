//! Falling-ingredient choreography for the pizza illustration.
//!
//! Each of the [`INGREDIENTS`] runs its own three-phase timeline measured from
//! the start of the current [`Epoch`]:
//!
//! ```text
//!   waiting ──delay──▶ fall ──duration──▶ bounce ──500ms──▶ settle ──300ms──▶ settled
//!             (drop cue)             (bounce cue)
//! ```
//!
//! - **Fall**: from above the frame at `initial_x` to below the target,
//!   offset by `target_x`. Rotation, opacity (0→1) and scale (0.5→final) are
//!   interpolated along the way.
//! - **Bounce**: lands on `target_y` and overshoots the final scale.
//! - **Settle**: eases the scale back to its final value.
//!
//! The "ready" moment is a completion barrier over all timelines: it fires
//! exactly once per epoch, when the last ingredient finishes settling. With
//! the stock descriptors that is 6.4 s after the epoch starts.
//!
//! The same timelines drive two consumers: [`Sequencer::advance`] emits phase
//! events for the page model, and [`IngredientDescriptor::keyframes`] lays the
//! poses out as CSS keyframes for the generated page.
//!
//! Under the toppings the pizza base has its own fixed [`BASE_MOTION`], and
//! each topping pulses a [`LANDING_SHADOW`] when its bounce starts.

use crate::schedule::Epoch;
use crate::sound::Cue;
use serde::Serialize;
use std::time::Duration;

/// Topping artwork. Shadow styling is per topping, not per descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Topping {
    Pepperoni,
    Cheese,
    Basil,
    Tomato,
    Mushroom,
    Olive,
}

impl Topping {
    pub const ALL: [Topping; 6] = [
        Topping::Pepperoni,
        Topping::Cheese,
        Topping::Basil,
        Topping::Tomato,
        Topping::Mushroom,
        Topping::Olive,
    ];

    /// Site-relative path of the topping graphic.
    pub fn asset(self) -> &'static str {
        match self {
            Topping::Pepperoni => "images/ingredients/pepperoni.svg",
            Topping::Cheese => "images/ingredients/cheese.svg",
            Topping::Basil => "images/ingredients/basil.svg",
            Topping::Tomato => "images/ingredients/tomato.svg",
            Topping::Mushroom => "images/ingredients/mushroom.svg",
            Topping::Olive => "images/ingredients/olive.svg",
        }
    }

    pub fn alt(self) -> &'static str {
        match self {
            Topping::Pepperoni => "Pepperoni",
            Topping::Cheese => "Queso",
            Topping::Basil => "Albahaca",
            Topping::Tomato => "Tomate",
            Topping::Mushroom => "Champiñón",
            Topping::Olive => "Aceituna",
        }
    }

    pub fn shadow(self) -> Shadow {
        match self {
            Topping::Pepperoni => Shadow::new(5, 0.3),
            Topping::Cheese => Shadow::new(5, 0.25),
            Topping::Basil => Shadow::new(4, 0.2),
            Topping::Tomato => Shadow::new(8, 0.3),
            Topping::Mushroom => Shadow::new(6, 0.25),
            Topping::Olive => Shadow::new(7, 0.35),
        }
    }
}

/// Drop shadow under a topping; blur equals the vertical offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub offset_px: u8,
    pub alpha: f32,
}

impl Shadow {
    const fn new(offset_px: u8, alpha: f32) -> Self {
        Self { offset_px, alpha }
    }

    pub fn to_css(self) -> String {
        format!(
            "drop-shadow(0px {o}px {o}px rgba(0,0,0,{a}))",
            o = self.offset_px,
            a = self.alpha
        )
    }
}

/// Static animation record for one falling ingredient.
///
/// Positions are percentages of the illustration frame; rotations are
/// degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientDescriptor {
    pub name: &'static str,
    pub topping: Topping,
    /// Rendered edge length in `rem`.
    pub size_rem: f32,
    pub initial_x: f32,
    pub initial_delay_ms: u32,
    pub duration_ms: u32,
    pub target_x: f32,
    pub target_y: f32,
    pub rotation_start: f32,
    pub rotation_end: f32,
    pub scale: f32,
    pub z_index: u8,
}

/// The 19 ingredients of the illustration.
pub const INGREDIENTS: [IngredientDescriptor; 19] = [
    IngredientDescriptor { name: "Pepperoni 1", topping: Topping::Pepperoni, size_rem: 4.0, initial_x: 10.0, initial_delay_ms: 200, duration_ms: 2500, target_x: -5.0, target_y: 40.0, rotation_start: 0.0, rotation_end: 360.0, scale: 0.7, z_index: 25 },
    IngredientDescriptor { name: "Queso 1", topping: Topping::Cheese, size_rem: 5.0, initial_x: 35.0, initial_delay_ms: 800, duration_ms: 2800, target_x: 5.0, target_y: 30.0, rotation_start: 45.0, rotation_end: 240.0, scale: 0.8, z_index: 22 },
    IngredientDescriptor { name: "Albahaca 1", topping: Topping::Basil, size_rem: 3.5, initial_x: 55.0, initial_delay_ms: 1400, duration_ms: 3200, target_x: 15.0, target_y: 35.0, rotation_start: 90.0, rotation_end: 180.0, scale: 0.65, z_index: 26 },
    IngredientDescriptor { name: "Tomate 1", topping: Topping::Tomato, size_rem: 4.0, initial_x: 20.0, initial_delay_ms: 500, duration_ms: 2700, target_x: -8.0, target_y: 25.0, rotation_start: 120.0, rotation_end: 300.0, scale: 0.7, z_index: 24 },
    IngredientDescriptor { name: "Champiñón 1", topping: Topping::Mushroom, size_rem: 3.5, initial_x: 60.0, initial_delay_ms: 1100, duration_ms: 3000, target_x: 10.0, target_y: 45.0, rotation_start: 30.0, rotation_end: 390.0, scale: 0.6, z_index: 21 },
    IngredientDescriptor { name: "Aceituna 1", topping: Topping::Olive, size_rem: 2.5, initial_x: 75.0, initial_delay_ms: 900, duration_ms: 2600, target_x: 18.0, target_y: 35.0, rotation_start: 60.0, rotation_end: 420.0, scale: 0.5, z_index: 23 },
    IngredientDescriptor { name: "Pepperoni 2", topping: Topping::Pepperoni, size_rem: 4.0, initial_x: 45.0, initial_delay_ms: 1700, duration_ms: 2900, target_x: -10.0, target_y: 38.0, rotation_start: 180.0, rotation_end: 540.0, scale: 0.7, z_index: 20 },
    IngredientDescriptor { name: "Albahaca 2", topping: Topping::Basil, size_rem: 3.0, initial_x: 30.0, initial_delay_ms: 1200, duration_ms: 2400, target_x: 20.0, target_y: 15.0, rotation_start: 45.0, rotation_end: 210.0, scale: 0.6, z_index: 27 },
    IngredientDescriptor { name: "Pepperoni 3", topping: Topping::Pepperoni, size_rem: 3.5, initial_x: 65.0, initial_delay_ms: 400, duration_ms: 2600, target_x: -22.0, target_y: 28.0, rotation_start: 90.0, rotation_end: 270.0, scale: 0.65, z_index: 19 },
    IngredientDescriptor { name: "Queso 2", topping: Topping::Cheese, size_rem: 4.5, initial_x: 15.0, initial_delay_ms: 1900, duration_ms: 2700, target_x: 15.0, target_y: 22.0, rotation_start: 20.0, rotation_end: 160.0, scale: 0.7, z_index: 18 },
    IngredientDescriptor { name: "Tomate 2", topping: Topping::Tomato, size_rem: 3.5, initial_x: 80.0, initial_delay_ms: 600, duration_ms: 2800, target_x: -15.0, target_y: 42.0, rotation_start: 150.0, rotation_end: 330.0, scale: 0.6, z_index: 17 },
    IngredientDescriptor { name: "Champiñón 2", topping: Topping::Mushroom, size_rem: 3.0, initial_x: 5.0, initial_delay_ms: 1300, duration_ms: 2500, target_x: 25.0, target_y: 33.0, rotation_start: 60.0, rotation_end: 420.0, scale: 0.55, z_index: 16 },
    IngredientDescriptor { name: "Aceituna 2", topping: Topping::Olive, size_rem: 2.25, initial_x: 25.0, initial_delay_ms: 2000, duration_ms: 2300, target_x: -18.0, target_y: 18.0, rotation_start: 30.0, rotation_end: 390.0, scale: 0.45, z_index: 15 },
    IngredientDescriptor { name: "Pepperoni 4", topping: Topping::Pepperoni, size_rem: 3.75, initial_x: 50.0, initial_delay_ms: 1500, duration_ms: 2900, target_x: 0.0, target_y: 10.0, rotation_start: 120.0, rotation_end: 480.0, scale: 0.6, z_index: 14 },
    IngredientDescriptor { name: "Albahaca 3", topping: Topping::Basil, size_rem: 3.25, initial_x: 40.0, initial_delay_ms: 2200, duration_ms: 2500, target_x: -28.0, target_y: 32.0, rotation_start: 75.0, rotation_end: 255.0, scale: 0.58, z_index: 13 },
    IngredientDescriptor { name: "Champiñón 3", topping: Topping::Mushroom, size_rem: 3.75, initial_x: 70.0, initial_delay_ms: 2400, duration_ms: 2700, target_x: 30.0, target_y: 20.0, rotation_start: 180.0, rotation_end: 540.0, scale: 0.62, z_index: 12 },
    IngredientDescriptor { name: "Tomate 3", topping: Topping::Tomato, size_rem: 3.25, initial_x: 85.0, initial_delay_ms: 1800, duration_ms: 2600, target_x: -30.0, target_y: 15.0, rotation_start: 210.0, rotation_end: 390.0, scale: 0.65, z_index: 11 },
    IngredientDescriptor { name: "Queso 3", topping: Topping::Cheese, size_rem: 4.25, initial_x: 25.0, initial_delay_ms: 2600, duration_ms: 3000, target_x: 28.0, target_y: 50.0, rotation_start: 135.0, rotation_end: 315.0, scale: 0.75, z_index: 10 },
    IngredientDescriptor { name: "Aceituna 3", topping: Topping::Olive, size_rem: 2.75, initial_x: 60.0, initial_delay_ms: 2800, duration_ms: 2400, target_x: -20.0, target_y: 45.0, rotation_start: 90.0, rotation_end: 450.0, scale: 0.5, z_index: 9 },
];

/// Fixed parts of every timeline: bounce and settle lengths and how far the
/// bounce overshoots the final scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseTiming {
    pub bounce: Duration,
    pub settle: Duration,
    pub overshoot: f32,
}

impl Default for PhaseTiming {
    fn default() -> Self {
        Self {
            bounce: Duration::from_millis(500),
            settle: Duration::from_millis(300),
            overshoot: 1.15,
        }
    }
}

/// Motion of the pizza base under the toppings: a springy entrance, then a
/// few small wobbles while the toppings land.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseMotion {
    pub entrance_delay: Duration,
    pub entrance: Duration,
    pub wobble_start: Duration,
    pub wobble: Duration,
    /// Rest between two wobbles.
    pub wobble_gap: Duration,
    pub wobbles: u32,
}

pub const BASE_MOTION: BaseMotion = BaseMotion {
    entrance_delay: Duration::from_millis(300),
    entrance: Duration::from_millis(800),
    wobble_start: Duration::from_millis(2800),
    wobble: Duration::from_millis(1500),
    wobble_gap: Duration::from_millis(1500),
    wobbles: 4,
};

/// (fraction of one wobble, rotation in degrees)
const WOBBLE: [(f32, f32); 5] = [(0.0, 0.0), (0.3, -2.0), (0.5, 2.0), (0.7, -1.0), (1.0, 0.0)];

/// Length of the shadow pulse under a topping as it lands.
pub const LANDING_SHADOW: Duration = Duration::from_millis(800);

impl BaseMotion {
    /// One wobble plus the rest after it.
    pub fn wobble_cycle(&self) -> Duration {
        self.wobble + self.wobble_gap
    }

    /// When the last wobble comes to rest.
    pub fn wobble_end(&self) -> Duration {
        self.wobble_start + self.wobble_cycle() * self.wobbles.saturating_sub(1) + self.wobble
    }

    /// Wobble keyframes as (percent of one cycle, degrees).
    pub fn wobble_keyframes(&self) -> Vec<(f32, f32)> {
        let cycle = self.wobble_cycle().as_secs_f32();
        let share = if cycle > 0.0 {
            self.wobble.as_secs_f32() / cycle
        } else {
            1.0
        };
        WOBBLE
            .iter()
            .map(|&(t, deg)| (round2(t * share * 100.0), deg))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Waiting,
    Fall,
    Bounce,
    Settle,
    Settled,
}

impl Phase {
    /// Sound cue fired when this phase begins, if any.
    pub fn cue(self) -> Option<Cue> {
        match self {
            Phase::Fall => Some(Cue::Drop),
            Phase::Bounce => Some(Cue::Bounce),
            _ => None,
        }
    }
}

/// Visual state of one ingredient at an instant.
///
/// `x` and `y` are translation offsets in percent of the ingredient's own
/// box, `rotation` is in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pose {
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
    pub scale: f32,
    pub opacity: f32,
}

/// Vertical offset of an ingredient before it enters the frame.
pub const ABOVE_FRAME_Y: f32 = -100.0;
/// Vertical offset at the end of the fall, before the bounce lifts it.
pub const BELOW_TARGET_Y: f32 = 120.0;
/// Scale an ingredient starts falling at.
pub const INITIAL_SCALE: f32 = 0.5;

/// CSS easing of the fall phase (an ease-out-cubic curve).
pub const FALL_EASING: &str = "cubic-bezier(0.215, 0.61, 0.355, 1)";
/// CSS easing of the bounce and settle phases.
pub const LANDING_EASING: &str = "ease-out";

impl Pose {
    fn lerp(from: Pose, to: Pose, t: f32) -> Pose {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Pose {
            x: mix(from.x, to.x),
            y: mix(from.y, to.y),
            rotation: mix(from.rotation, to.rotation),
            scale: mix(from.scale, to.scale),
            opacity: mix(from.opacity, to.opacity),
        }
    }

    /// CSS `transform` value for this pose.
    pub fn css_transform(&self) -> String {
        format!(
            "translate({}%, {}%) rotate({}deg) scale({})",
            round2(self.x),
            round2(self.y),
            round2(self.rotation),
            round3(self.scale)
        )
    }
}

fn round2(v: f32) -> f32 {
    (v * 100.0).round() / 100.0
}

fn round3(v: f32) -> f32 {
    (v * 1000.0).round() / 1000.0
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

fn progress(elapsed: Duration, start: Duration, len: Duration) -> f32 {
    if len.is_zero() {
        return 1.0;
    }
    let done = elapsed.saturating_sub(start).as_secs_f32() / len.as_secs_f32();
    done.clamp(0.0, 1.0)
}

/// One CSS keyframe: offset in percent of the ingredient's animation.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframe {
    pub offset: f32,
    pub pose: Pose,
    /// Timing function for the segment that starts at this keyframe.
    pub easing: &'static str,
}

impl IngredientDescriptor {
    pub fn alt(&self) -> &'static str {
        self.topping.alt()
    }

    pub fn shadow(&self) -> Shadow {
        self.topping.shadow()
    }

    pub fn fall_start(&self) -> Duration {
        Duration::from_millis(u64::from(self.initial_delay_ms))
    }

    pub fn bounce_start(&self) -> Duration {
        self.fall_start() + Duration::from_millis(u64::from(self.duration_ms))
    }

    pub fn settle_start(&self, timing: &PhaseTiming) -> Duration {
        self.bounce_start() + timing.bounce
    }

    pub fn settled_at(&self, timing: &PhaseTiming) -> Duration {
        self.settle_start(timing) + timing.settle
    }

    /// Phase at `elapsed` since the epoch started. A boundary instant belongs
    /// to the phase it opens.
    pub fn phase_at(&self, elapsed: Duration, timing: &PhaseTiming) -> Phase {
        if elapsed < self.fall_start() {
            Phase::Waiting
        } else if elapsed < self.bounce_start() {
            Phase::Fall
        } else if elapsed < self.settle_start(timing) {
            Phase::Bounce
        } else if elapsed < self.settled_at(timing) {
            Phase::Settle
        } else {
            Phase::Settled
        }
    }

    /// Above the frame, invisible, half size.
    pub fn initial_pose(&self) -> Pose {
        Pose {
            x: 0.0,
            y: ABOVE_FRAME_Y,
            rotation: self.rotation_start,
            scale: INITIAL_SCALE,
            opacity: 0.0,
        }
    }

    fn fall_end_pose(&self) -> Pose {
        Pose {
            x: self.target_x,
            y: BELOW_TARGET_Y,
            rotation: self.rotation_end,
            scale: self.scale,
            opacity: 1.0,
        }
    }

    fn bounce_end_pose(&self, timing: &PhaseTiming) -> Pose {
        Pose {
            y: self.target_y,
            scale: self.scale * timing.overshoot,
            ..self.fall_end_pose()
        }
    }

    pub fn final_pose(&self) -> Pose {
        Pose {
            y: self.target_y,
            ..self.fall_end_pose()
        }
    }

    /// Sample the pose at `elapsed` since the epoch started.
    pub fn pose_at(&self, elapsed: Duration, timing: &PhaseTiming) -> Pose {
        match self.phase_at(elapsed, timing) {
            Phase::Waiting => self.initial_pose(),
            Phase::Fall => {
                let len = self.bounce_start() - self.fall_start();
                let t = ease_out_cubic(progress(elapsed, self.fall_start(), len));
                Pose::lerp(self.initial_pose(), self.fall_end_pose(), t)
            }
            Phase::Bounce => {
                let t = ease_out_cubic(progress(elapsed, self.bounce_start(), timing.bounce));
                Pose::lerp(self.fall_end_pose(), self.bounce_end_pose(timing), t)
            }
            Phase::Settle => {
                let t = ease_out_cubic(progress(elapsed, self.settle_start(timing), timing.settle));
                Pose::lerp(self.bounce_end_pose(timing), self.final_pose(), t)
            }
            Phase::Settled => self.final_pose(),
        }
    }

    /// CSS keyframes covering `0..=settled_at`, for an animation that starts
    /// at the epoch start and holds its end state.
    pub fn keyframes(&self, timing: &PhaseTiming) -> Vec<Keyframe> {
        let span = self.settled_at(timing).as_secs_f32();
        let at = |d: Duration| {
            if span == 0.0 {
                100.0
            } else {
                round2(d.as_secs_f32() / span * 100.0)
            }
        };
        vec![
            Keyframe {
                offset: 0.0,
                pose: self.initial_pose(),
                easing: "linear",
            },
            Keyframe {
                offset: at(self.fall_start()),
                pose: self.initial_pose(),
                easing: FALL_EASING,
            },
            Keyframe {
                offset: at(self.bounce_start()),
                pose: self.fall_end_pose(),
                easing: LANDING_EASING,
            },
            Keyframe {
                offset: at(self.settle_start(timing)),
                pose: self.bounce_end_pose(timing),
                easing: LANDING_EASING,
            },
            Keyframe {
                offset: 100.0,
                pose: self.final_pose(),
                easing: "linear",
            },
        ]
    }
}

/// Fires once, when every participant has arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: usize,
    reported: bool,
}

impl Countdown {
    pub fn new(participants: usize) -> Self {
        Self {
            remaining: participants,
            reported: false,
        }
    }

    pub fn arrive(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    /// `true` exactly once, the first time it is polled after the last
    /// arrival.
    pub fn poll(&mut self) -> bool {
        if self.remaining == 0 && !self.reported {
            self.reported = true;
            true
        } else {
            false
        }
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

/// Something that happened on the timeline, with its offset from the epoch
/// start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerEvent {
    PhaseStarted {
        ingredient: usize,
        phase: Phase,
        at: Duration,
    },
    AllSettled {
        at: Duration,
    },
}

impl SequencerEvent {
    pub fn at(&self) -> Duration {
        match *self {
            SequencerEvent::PhaseStarted { at, .. } | SequencerEvent::AllSettled { at } => at,
        }
    }

    pub fn cue(&self) -> Option<Cue> {
        match *self {
            SequencerEvent::PhaseStarted { phase, .. } => phase.cue(),
            SequencerEvent::AllSettled { .. } => Some(Cue::Ready),
        }
    }
}

/// Runs every ingredient timeline for the current epoch.
#[derive(Debug, Clone)]
pub struct Sequencer {
    descriptors: &'static [IngredientDescriptor],
    timing: PhaseTiming,
    epoch: Epoch,
    started_at: Duration,
    /// Last elapsed offset already reported; `None` before the first advance.
    reported_until: Option<Duration>,
    barrier: Countdown,
}

impl Sequencer {
    pub fn new(descriptors: &'static [IngredientDescriptor], timing: PhaseTiming) -> Self {
        Self {
            descriptors,
            timing,
            epoch: Epoch::INITIAL,
            started_at: Duration::ZERO,
            reported_until: None,
            barrier: Countdown::new(descriptors.len()),
        }
    }

    pub fn descriptors(&self) -> &'static [IngredientDescriptor] {
        self.descriptors
    }

    pub fn timing(&self) -> &PhaseTiming {
        &self.timing
    }

    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// Drop all progress and start every timeline again at `now`.
    pub fn restart(&mut self, epoch: Epoch, now: Duration) {
        log::debug!("sequencer restart: epoch {} -> {}", self.epoch, epoch);
        self.epoch = epoch;
        self.started_at = now;
        self.reported_until = None;
        self.barrier = Countdown::new(self.descriptors.len());
    }

    /// Time since the current epoch started.
    pub fn elapsed(&self, now: Duration) -> Duration {
        now.saturating_sub(self.started_at)
    }

    /// Offset at which the last ingredient settles.
    pub fn completion(&self) -> Duration {
        self.descriptors
            .iter()
            .map(|d| d.settled_at(&self.timing))
            .max()
            .unwrap_or(Duration::ZERO)
    }

    pub fn is_complete(&self, now: Duration) -> bool {
        self.elapsed(now) >= self.completion()
    }

    pub fn phase(&self, ingredient: usize, now: Duration) -> Option<Phase> {
        self.descriptors
            .get(ingredient)
            .map(|d| d.phase_at(self.elapsed(now), &self.timing))
    }

    pub fn poses(&self, now: Duration) -> Vec<Pose> {
        let elapsed = self.elapsed(now);
        self.descriptors
            .iter()
            .map(|d| d.pose_at(elapsed, &self.timing))
            .collect()
    }

    /// Report everything that happened since the previous call, in timeline
    /// order. Moving `now` backwards reports nothing.
    pub fn advance(&mut self, now: Duration) -> Vec<SequencerEvent> {
        let elapsed = self.elapsed(now);
        if self.reported_until.is_some_and(|done| elapsed <= done) {
            return Vec::new();
        }
        let is_new = |at: Duration| self.reported_until.is_none_or(|done| at > done) && at <= elapsed;

        // (offset, ingredient, phase) sorts boundaries by time, then by
        // ingredient, then by phase order.
        let mut boundaries: Vec<(Duration, usize, Phase)> = Vec::new();
        for (i, d) in self.descriptors.iter().enumerate() {
            for (at, phase) in [
                (d.fall_start(), Phase::Fall),
                (d.bounce_start(), Phase::Bounce),
                (d.settle_start(&self.timing), Phase::Settle),
                (d.settled_at(&self.timing), Phase::Settled),
            ] {
                if is_new(at) {
                    boundaries.push((at, i, phase));
                }
            }
        }
        boundaries.sort();

        let mut events = Vec::with_capacity(boundaries.len() + 1);
        for (at, ingredient, phase) in boundaries {
            events.push(SequencerEvent::PhaseStarted {
                ingredient,
                phase,
                at,
            });
            if phase == Phase::Settled {
                self.barrier.arrive();
                if self.barrier.poll() {
                    events.push(SequencerEvent::AllSettled { at });
                }
            }
        }
        if self.barrier.poll() {
            // Only reachable with no descriptors at all.
            events.push(SequencerEvent::AllSettled { at: Duration::ZERO });
        }

        self.reported_until = Some(elapsed);
        events
    }

    /// Every cue of a full epoch, with its offset from the epoch start.
    pub fn cue_schedule(&self) -> Vec<(Duration, Cue)> {
        let mut fresh = Sequencer::new(self.descriptors, self.timing);
        fresh
            .advance(self.completion())
            .into_iter()
            .filter_map(|e| e.cue().map(|cue| (e.at(), cue)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn stock() -> Sequencer {
        Sequencer::new(&INGREDIENTS, PhaseTiming::default())
    }

    #[test]
    fn nineteen_descriptors_with_unique_names() {
        let names: std::collections::HashSet<_> = INGREDIENTS.iter().map(|d| d.name).collect();
        assert_eq!(names.len(), 19);
    }

    #[test]
    fn phase_boundaries_for_first_pepperoni() {
        let d = &INGREDIENTS[0];
        let t = PhaseTiming::default();
        assert_eq!(d.phase_at(ms(0), &t), Phase::Waiting);
        assert_eq!(d.phase_at(ms(199), &t), Phase::Waiting);
        assert_eq!(d.phase_at(ms(200), &t), Phase::Fall);
        assert_eq!(d.phase_at(ms(2_699), &t), Phase::Fall);
        assert_eq!(d.phase_at(ms(2_700), &t), Phase::Bounce);
        assert_eq!(d.phase_at(ms(3_200), &t), Phase::Settle);
        assert_eq!(d.phase_at(ms(3_499), &t), Phase::Settle);
        assert_eq!(d.phase_at(ms(3_500), &t), Phase::Settled);
    }

    #[test]
    fn fall_interpolates_from_initial_pose() {
        let d = &INGREDIENTS[0];
        let t = PhaseTiming::default();
        assert_eq!(d.pose_at(ms(200), &t), d.initial_pose());

        let mid = d.pose_at(ms(1_450), &t);
        assert!(mid.y > ABOVE_FRAME_Y && mid.y < BELOW_TARGET_Y);
        assert!(mid.opacity > 0.0 && mid.opacity < 1.0);
        assert!(mid.scale > INITIAL_SCALE && mid.scale < d.scale);
        assert!(mid.rotation > d.rotation_start && mid.rotation < d.rotation_end);
    }

    #[test]
    fn bounce_overshoots_then_settles() {
        let d = &INGREDIENTS[1];
        let t = PhaseTiming::default();
        let peak = d.pose_at(d.settle_start(&t), &t);
        assert!((peak.scale - d.scale * 1.15).abs() < 1e-4);
        assert!((peak.y - d.target_y).abs() < 1e-4);

        let done = d.pose_at(d.settled_at(&t), &t);
        assert_eq!(done, d.final_pose());
        assert!((done.scale - d.scale).abs() < 1e-6);
        assert_eq!(done.opacity, 1.0);
    }

    #[test]
    fn completion_is_last_settle() {
        // Queso 3: 2600 + 3000 + 500 + 300
        assert_eq!(stock().completion(), ms(6_400));
    }

    #[test]
    fn first_advance_reports_drop_cues_due_so_far() {
        let mut s = stock();
        let events = s.advance(ms(500));
        let falls: Vec<usize> = events
            .iter()
            .filter_map(|e| match e {
                SequencerEvent::PhaseStarted {
                    ingredient,
                    phase: Phase::Fall,
                    ..
                } => Some(*ingredient),
                _ => None,
            })
            .collect();
        // delays 200 (Pepperoni 1), 400 (Pepperoni 3), 500 (Tomate 1)
        assert_eq!(falls, vec![0, 8, 3]);
        assert!(events.iter().all(|e| e.cue() == Some(Cue::Drop)));
    }

    #[test]
    fn events_are_not_repeated() {
        let mut s = stock();
        let first = s.advance(ms(1_000));
        assert!(!first.is_empty());
        assert!(s.advance(ms(1_000)).is_empty());
        assert!(s.advance(ms(900)).is_empty(), "time going backwards");
    }

    #[test]
    fn ready_fires_once_at_completion() {
        let mut s = stock();
        let mut ready = Vec::new();
        for step in (0..=8_000).step_by(16) {
            for e in s.advance(ms(step)) {
                if let SequencerEvent::AllSettled { at } = e {
                    ready.push(at);
                }
            }
        }
        assert_eq!(ready, vec![ms(6_400)]);
    }

    #[test]
    fn ready_is_not_early() {
        let mut s = stock();
        let events = s.advance(ms(6_399));
        assert!(
            !events
                .iter()
                .any(|e| matches!(e, SequencerEvent::AllSettled { .. }))
        );
        let events = s.advance(ms(6_400));
        assert!(matches!(
            events.last(),
            Some(SequencerEvent::AllSettled { .. })
        ));
    }

    #[test]
    fn restart_resets_every_pose() {
        let mut s = stock();
        s.advance(ms(4_000));
        let mid_run = s.poses(ms(4_000));
        assert!(mid_run.iter().any(|p| p.opacity > 0.0));

        s.restart(Epoch::INITIAL.next(), ms(4_000));
        for (pose, d) in s.poses(ms(4_000)).iter().zip(INGREDIENTS.iter()) {
            assert_eq!(pose.y, ABOVE_FRAME_Y);
            assert_eq!(pose.opacity, 0.0);
            assert_eq!(pose.scale, INITIAL_SCALE);
            assert_eq!(pose.rotation, d.rotation_start);
        }
        assert_eq!(s.epoch(), Epoch::INITIAL.next());
    }

    #[test]
    fn restart_replays_ready() {
        let mut s = stock();
        s.advance(ms(7_000));
        s.restart(Epoch::INITIAL.next(), ms(7_000));
        let events = s.advance(ms(7_000 + 6_400));
        assert!(matches!(
            events.last(),
            Some(SequencerEvent::AllSettled { at }) if *at == ms(6_400)
        ));
    }

    #[test]
    fn cue_schedule_covers_an_epoch() {
        let schedule = stock().cue_schedule();
        let count = |cue| schedule.iter().filter(|(_, c)| *c == cue).count();
        assert_eq!(count(Cue::Drop), 19);
        assert_eq!(count(Cue::Bounce), 19);
        assert_eq!(count(Cue::Ready), 1);
        assert_eq!(schedule.last(), Some(&(ms(6_400), Cue::Ready)));
        assert!(schedule.windows(2).all(|w| w[0].0 <= w[1].0));
    }

    #[test]
    fn empty_sequencer_is_immediately_ready() {
        static NONE: [IngredientDescriptor; 0] = [];
        let mut s = Sequencer::new(&NONE, PhaseTiming::default());
        assert_eq!(s.completion(), Duration::ZERO);
        assert_eq!(s.advance(ms(0)), vec![SequencerEvent::AllSettled { at: ms(0) }]);
        assert!(s.advance(ms(10)).is_empty());
    }

    #[test]
    fn keyframes_are_ordered_and_end_settled() {
        let t = PhaseTiming::default();
        for d in &INGREDIENTS {
            let frames = d.keyframes(&t);
            assert_eq!(frames.len(), 5);
            assert!(frames.windows(2).all(|w| w[0].offset <= w[1].offset));
            assert_eq!(frames[0].pose, d.initial_pose());
            assert_eq!(frames[4].pose, d.final_pose());
            assert_eq!(frames[1].easing, FALL_EASING);
        }
    }

    #[test]
    fn pose_css_transform() {
        let pose = INGREDIENTS[0].initial_pose();
        assert_eq!(
            pose.css_transform(),
            "translate(0%, -100%) rotate(0deg) scale(0.5)"
        );
    }

    #[test]
    fn countdown_reports_once() {
        let mut c = Countdown::new(2);
        assert!(!c.poll());
        c.arrive();
        assert!(!c.poll());
        c.arrive();
        assert!(c.poll());
        assert!(!c.poll());
        c.arrive();
        assert_eq!(c.remaining(), 0);
        assert!(!c.poll());
    }

    #[test]
    fn base_wobbles_while_toppings_land() {
        assert_eq!(BASE_MOTION.wobble_cycle(), ms(3_000));
        assert_eq!(BASE_MOTION.wobble_end(), ms(13_300));
        assert_eq!(
            BASE_MOTION.wobble_keyframes(),
            vec![(0.0, 0.0), (15.0, -2.0), (25.0, 2.0), (35.0, -1.0), (50.0, 0.0)]
        );
        // The first wobble starts once the earliest toppings are landing.
        let first_landing = INGREDIENTS.iter().map(|d| d.bounce_start()).min().unwrap();
        assert!(BASE_MOTION.wobble_start >= first_landing);
    }

    #[test]
    fn wobble_without_gap_fills_the_cycle() {
        let motion = BaseMotion {
            wobble_gap: Duration::ZERO,
            ..BASE_MOTION
        };
        assert_eq!(motion.wobble_keyframes().last(), Some(&(100.0, 0.0)));
    }

    #[test]
    fn shadow_css() {
        assert_eq!(
            Topping::Olive.shadow().to_css(),
            "drop-shadow(0px 7px 7px rgba(0,0,0,0.35))"
        );
    }
}
