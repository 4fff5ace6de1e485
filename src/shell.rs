//! Page shell: owner of every piece of interactive state on the page.
//!
//! Input arrives as events (scroll, key, click, animation frame, clock
//! advance) and the only output is [`PageShell::view`], a plain snapshot the
//! renderer consumes. Overlay changes requested from click and key handlers
//! are queued and applied on the next [`PageShell::on_frame`], after the
//! triggering event has finished.

use crate::carousel::{Carousel, CarouselError};
use crate::content::{CAROUSEL, MENU_PREVIEW, Photo};
use crate::overlay::{HitTarget, OverlayKind, Overlays};
use crate::schedule::{Epoch, FrameQueue};
use crate::showcase::{Showcase, ShowcaseSettings, ShowcaseView};
use crate::sound::AudioBackend;
use serde::Serialize;
use std::time::Duration;

/// Clickable things the shell reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Click {
    OpenFullMenu,
    OpenGallery,
    /// A dish card in the menu preview, by index.
    MenuCard(usize),
    /// A click inside an open overlay.
    Overlay(OverlayKind, HitTarget),
    CarouselNext,
    CarouselPrevious,
    CarouselDot(usize),
    NavToggle,
    NavLink,
    RestartShowcase,
    ToggleSound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Ignored,
    /// The shell consumed the key; the browser default must be prevented.
    Handled,
}

impl KeyOutcome {
    pub fn prevents_default(self) -> bool {
        self == KeyOutcome::Handled
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum FrameAction {
    Open(OverlayKind),
    Close(OverlayKind),
    ShowImage(Photo),
}

/// Everything the renderer needs to draw the page at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub scrolled: bool,
    pub nav_open: bool,
    pub open_overlays: Vec<OverlayKind>,
    pub scroll_locked: bool,
    pub carousel_index: usize,
    pub viewer_src: Option<&'static str>,
    pub viewer_alt: Option<&'static str>,
    pub showcase: ShowcaseView,
}

impl PageView {
    pub fn is_open(&self, kind: OverlayKind) -> bool {
        self.open_overlays.contains(&kind)
    }
}

pub struct PageShell<B: AudioBackend> {
    clock: Duration,
    epoch: Epoch,
    scroll_threshold: f64,
    scrolled: bool,
    nav_open: bool,
    overlays: Overlays,
    carousel: Carousel,
    viewer: Option<Photo>,
    frames: FrameQueue<FrameAction>,
    showcase: Showcase<B>,
}

impl<B: AudioBackend> PageShell<B> {
    pub fn new(
        backend: B,
        settings: ShowcaseSettings,
        scroll_threshold: f64,
    ) -> Result<Self, CarouselError> {
        Ok(Self {
            clock: Duration::ZERO,
            epoch: Epoch::INITIAL,
            scroll_threshold,
            scrolled: false,
            nav_open: false,
            overlays: Overlays::new(),
            carousel: Carousel::new(CAROUSEL.len())?,
            viewer: None,
            frames: FrameQueue::new(),
            showcase: Showcase::new(backend, settings),
        })
    }

    pub fn now(&self) -> Duration {
        self.clock
    }

    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    pub fn overlays(&self) -> &Overlays {
        &self.overlays
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn showcase(&self) -> &Showcase<B> {
        &self.showcase
    }

    /// Number of overlay changes waiting for the next frame.
    pub fn pending_frame_actions(&self) -> usize {
        self.frames.len()
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.scrolled = scroll_y > self.scroll_threshold;
    }

    /// Key-down, seen before any other handler on the page.
    ///
    /// Escape closes every open overlay on the next frame.
    pub fn on_key(&mut self, key: &str) -> KeyOutcome {
        if key != "Escape" || !self.overlays.any_open() {
            return KeyOutcome::Ignored;
        }
        for kind in self.overlays.open_kinds() {
            self.frames.defer(FrameAction::Close(kind));
        }
        KeyOutcome::Handled
    }

    pub fn on_click(&mut self, click: Click) {
        match click {
            Click::OpenFullMenu => {
                self.overlays.open(OverlayKind::FullMenu);
            }
            Click::OpenGallery => {
                self.overlays.open(OverlayKind::Gallery);
            }
            Click::MenuCard(i) => {
                if let Some(dish) = MENU_PREVIEW.get(i) {
                    self.frames.defer(FrameAction::ShowImage(Photo {
                        src: dish.image,
                        alt: dish.name,
                    }));
                    self.frames.defer(FrameAction::Open(OverlayKind::ImageViewer));
                }
            }
            Click::Overlay(kind, target) => {
                if self.overlays.is_open(kind) && target.dismisses() {
                    self.frames.defer(FrameAction::Close(kind));
                }
            }
            Click::CarouselNext => {
                self.carousel.next();
            }
            Click::CarouselPrevious => {
                self.carousel.previous();
            }
            Click::CarouselDot(i) => {
                self.carousel.jump_to(i);
            }
            Click::NavToggle => self.nav_open = !self.nav_open,
            Click::NavLink => self.nav_open = false,
            Click::RestartShowcase => {
                self.epoch = self.epoch.next();
                self.showcase.restart(self.epoch, self.clock);
            }
            Click::ToggleSound => {
                self.showcase.toggle_sound();
            }
        }
    }

    /// Animation frame: apply everything queued since the previous frame.
    pub fn on_frame(&mut self) {
        for action in self.frames.take_frame() {
            match action {
                FrameAction::Open(kind) => {
                    self.overlays.open(kind);
                }
                FrameAction::Close(kind) => {
                    self.overlays.close(kind);
                }
                FrameAction::ShowImage(photo) => self.viewer = Some(photo),
            }
        }
    }

    /// Move the clock forward to `now`. Earlier instants are ignored.
    pub fn advance_to(&mut self, now: Duration) {
        if now < self.clock {
            return;
        }
        self.clock = now;
        self.showcase.advance(now);
    }

    pub fn view(&self) -> PageView {
        PageView {
            scrolled: self.scrolled,
            nav_open: self.nav_open,
            open_overlays: self.overlays.open_kinds(),
            scroll_locked: self.overlays.scroll_locked(),
            carousel_index: self.carousel.index(),
            viewer_src: self.viewer.map(|p| p.src),
            viewer_alt: self.viewer.map(|p| p.alt),
            showcase: self.showcase.view(self.clock),
        }
    }
}
