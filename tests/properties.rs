//! Property-based tests for the page state machines.
//!
//! Uses proptest to drive the carousel, overlays, page shell, scheduler and
//! showcase with arbitrary event sequences and checks the invariants that
//! must hold after every step.

use bella_italia::carousel::Carousel;
use bella_italia::overlay::{HitTarget, OverlayKind, Overlays};
use bella_italia::schedule::{Epoch, Scheduler};
use bella_italia::sequencer::{INGREDIENTS, Phase, PhaseTiming, Sequencer};
use bella_italia::shell::{Click, PageShell};
use bella_italia::showcase::{Showcase, ShowcaseSettings};
use bella_italia::sound::{AudioBackend, AudioError, Cue};
use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Backend that records which cues played.
#[derive(Default)]
struct Tally {
    played: Rc<RefCell<Vec<Cue>>>,
}

impl AudioBackend for Tally {
    type Handle = ();

    fn load(&mut self, _cue: Cue, _source: &str, _volume: f32) -> Result<(), AudioError> {
        Ok(())
    }

    fn play(&mut self, cue: Cue, _handle: &mut ()) -> Result<(), AudioError> {
        self.played.borrow_mut().push(cue);
        Ok(())
    }

    fn release(&mut self, _handle: ()) {}
}

fn kind(k: u8) -> OverlayKind {
    OverlayKind::ALL[usize::from(k) % OverlayKind::ALL.len()]
}

fn target(t: u8) -> HitTarget {
    match t % 3 {
        0 => HitTarget::Backdrop,
        1 => HitTarget::Content,
        _ => HitTarget::CloseButton,
    }
}

fn click_strategy() -> impl Strategy<Value = Click> {
    prop_oneof![
        Just(Click::OpenFullMenu),
        Just(Click::OpenGallery),
        (0usize..8).prop_map(Click::MenuCard),
        (any::<u8>(), any::<u8>()).prop_map(|(k, t)| Click::Overlay(kind(k), target(t))),
        Just(Click::CarouselNext),
        Just(Click::CarouselPrevious),
        (0usize..20).prop_map(Click::CarouselDot),
        Just(Click::NavToggle),
        Just(Click::NavLink),
    ]
}

#[derive(Debug, Clone)]
enum PageEvent {
    Click(Click),
    Escape,
    Frame,
}

fn page_event_strategy() -> impl Strategy<Value = PageEvent> {
    prop_oneof![
        4 => click_strategy().prop_map(PageEvent::Click),
        1 => Just(PageEvent::Escape),
        2 => Just(PageEvent::Frame),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// The carousel index never leaves `0..len`, whatever the moves.
    #[test]
    fn carousel_index_stays_in_range(
        len in 1usize..40,
        moves in prop::collection::vec(0u8..3, 0..100),
        jumps in prop::collection::vec(0usize..60, 0..20),
    ) {
        let mut carousel = Carousel::new(len).unwrap();
        for (i, m) in moves.iter().enumerate() {
            match m {
                0 => { carousel.next(); }
                1 => { carousel.previous(); }
                _ => {
                    let target = jumps.get(i % jumps.len().max(1)).copied().unwrap_or(0);
                    let before = carousel.index();
                    let moved = carousel.jump_to(target);
                    prop_assert_eq!(moved, target < len);
                    if !moved {
                        prop_assert_eq!(carousel.index(), before);
                    }
                }
            }
            prop_assert!(carousel.index() < len);
        }
    }

    /// `len` steps forward is a full lap.
    #[test]
    fn carousel_full_lap_returns_home(len in 1usize..40, start in 0usize..40) {
        let mut carousel = Carousel::new(len).unwrap();
        carousel.jump_to(start % len);
        let home = carousel.index();
        for _ in 0..len {
            carousel.next();
        }
        prop_assert_eq!(carousel.index(), home);
        carousel.next();
        carousel.previous();
        prop_assert_eq!(carousel.index(), home);
    }

    /// Scroll is locked exactly while some overlay is open.
    #[test]
    fn scroll_lock_tracks_open_overlays(
        ops in prop::collection::vec((0u8..3, any::<u8>()), 0..60),
    ) {
        let mut overlays = Overlays::new();
        for (op, k) in ops {
            match op {
                0 => { overlays.open(kind(k)); }
                1 => { overlays.close(kind(k)); }
                _ => { overlays.toggle(kind(k)); }
            }
            prop_assert_eq!(overlays.scroll_locked(), overlays.any_open());
            prop_assert_eq!(overlays.scroll_lock().holders(), overlays.open_kinds().len());
        }
    }

    /// An even number of toggles leaves an overlay where it started.
    #[test]
    fn toggle_parity(k in any::<u8>(), n in 0usize..20) {
        let mut overlays = Overlays::new();
        for _ in 0..n {
            overlays.toggle(kind(k));
        }
        prop_assert_eq!(overlays.is_open(kind(k)), n % 2 == 1);
    }

    /// Whatever the page is put through, the snapshot agrees with itself.
    #[test]
    fn page_view_is_consistent(
        events in prop::collection::vec(page_event_strategy(), 0..80),
    ) {
        let mut shell = PageShell::new(Tally::default(), ShowcaseSettings::default(), 50.0).unwrap();
        for event in events {
            match event {
                PageEvent::Click(click) => shell.on_click(click),
                PageEvent::Escape => {
                    let any_open = shell.overlays().any_open();
                    let outcome = shell.on_key("Escape");
                    prop_assert_eq!(outcome.prevents_default(), any_open);
                }
                PageEvent::Frame => shell.on_frame(),
            }
            let view = shell.view();
            prop_assert_eq!(view.scroll_locked, !view.open_overlays.is_empty());
            prop_assert!(view.carousel_index < shell.carousel().len());
            if view.is_open(OverlayKind::ImageViewer) {
                prop_assert!(view.viewer_src.is_some());
            }
        }
        shell.on_frame();
        shell.on_key("Escape");
        shell.on_frame();
        prop_assert!(!shell.view().scroll_locked);
    }

    /// Timers come out in due order and never before they are due.
    #[test]
    fn scheduler_fires_in_due_order(
        dues in prop::collection::vec(0u64..10_000, 0..50),
        checkpoints in prop::collection::vec(0u64..12_000, 1..10),
    ) {
        let mut scheduler = Scheduler::new();
        for &due in &dues {
            scheduler.schedule(Duration::from_millis(due), Epoch::INITIAL, due);
        }
        let mut checkpoints = checkpoints;
        checkpoints.sort_unstable();
        let mut fired = Vec::new();
        for now in checkpoints {
            for (_, due) in scheduler.drain_due(Duration::from_millis(now)) {
                prop_assert!(due <= now);
                fired.push(due);
            }
        }
        let mut sorted = fired.clone();
        sorted.sort_unstable();
        prop_assert_eq!(fired, sorted);
    }

    /// Cancelling an epoch drops its timers and nothing else.
    #[test]
    fn cancel_epoch_is_selective(
        timers in prop::collection::vec((0u64..5_000, 0u64..4), 0..40),
        victim in 0u64..4,
    ) {
        let epochs: Vec<Epoch> = std::iter::successors(Some(Epoch::INITIAL), |e| Some(e.next()))
            .take(4)
            .collect();
        let mut scheduler = Scheduler::new();
        for &(due, e) in &timers {
            scheduler.schedule(Duration::from_millis(due), epochs[e as usize], e);
        }
        let expected_dropped = timers.iter().filter(|(_, e)| *e == victim).count();
        prop_assert_eq!(scheduler.cancel_epoch(epochs[victim as usize]), expected_dropped);
        let rest = scheduler.drain_due(Duration::from_secs(60));
        prop_assert_eq!(rest.len(), timers.len() - expected_dropped);
        prop_assert!(rest.iter().all(|(_, e)| *e != victim));
    }

    /// Phases only ever move forward as time passes.
    #[test]
    fn phases_are_monotonic(mut times in prop::collection::vec(0u64..8_000, 2..30)) {
        times.sort_unstable();
        let sequencer = Sequencer::new(&INGREDIENTS, PhaseTiming::default());
        for i in 0..INGREDIENTS.len() {
            let mut last = Phase::Waiting;
            for &t in &times {
                let phase = sequencer.phase(i, Duration::from_millis(t)).unwrap();
                prop_assert!(phase >= last);
                last = phase;
            }
        }
    }

    /// Wherever the previous run had got to, a restart puts every ingredient
    /// back in its starting pose.
    #[test]
    fn restart_returns_every_ingredient_to_its_initial_pose(
        restart_at in 0u64..8_000,
        visits in prop::collection::vec(0u64..8_000, 0..8),
    ) {
        let mut sequencer = Sequencer::new(&INGREDIENTS, PhaseTiming::default());
        let mut visits = visits;
        visits.sort_unstable();
        for t in visits.into_iter().filter(|t| *t <= restart_at) {
            sequencer.advance(Duration::from_millis(t));
        }
        sequencer.advance(Duration::from_millis(restart_at));

        let now = Duration::from_millis(restart_at);
        sequencer.restart(Epoch::INITIAL.next(), now);
        let poses = sequencer.poses(now);
        prop_assert_eq!(poses.len(), INGREDIENTS.len());
        for (pose, d) in poses.iter().zip(INGREDIENTS.iter()) {
            prop_assert_eq!(*pose, d.initial_pose());
        }
        for i in 0..INGREDIENTS.len() {
            prop_assert_eq!(sequencer.phase(i, now), Some(Phase::Waiting));
        }
    }

    /// A restart at any instant silences every cue of the run it replaced.
    #[test]
    fn restart_cancels_previous_epoch(restart_at in 0u64..7_000) {
        let tally = Tally::default();
        let played = Rc::clone(&tally.played);
        let settings = ShowcaseSettings { sound_available: true, ..ShowcaseSettings::default() };
        let mut showcase = Showcase::new(tally, settings);
        showcase.restart(Epoch::INITIAL, Duration::ZERO);
        played.borrow_mut().clear();

        for t in (0..=restart_at).step_by(10) {
            showcase.advance(Duration::from_millis(t));
        }
        let restart = Duration::from_millis(restart_at);
        showcase.restart(Epoch::INITIAL.next(), restart);
        played.borrow_mut().clear();

        let completion = showcase.sequencer().completion().as_millis() as u64;
        for t in (restart_at..=restart_at + completion + 200).step_by(10) {
            showcase.advance(Duration::from_millis(t));
        }
        // Exactly one full run after the restart, nothing left over.
        let plan_len = showcase.cue_plan().len();
        prop_assert_eq!(played.borrow().len(), plan_len);
        prop_assert_eq!(played.borrow().iter().filter(|c| **c == Cue::Ready).count(), 1);
        prop_assert!(showcase.is_ready());
    }
}
