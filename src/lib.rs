//! # Bella Italia
//!
//! Builder for the one-page website of the Bella Italia restaurant: a fixed
//! navbar, a hero, the about section with an animated pizza illustration, a
//! menu preview, a photo gallery, a reservation form and a footer, plus three
//! overlays (full menu, gallery carousel, dish image viewer).
//!
//! # Architecture: State Machines, Then Markup
//!
//! Every interactive piece of the page is modelled as a deterministic state
//! machine driven by a virtual clock (a `Duration` since page load) and
//! explicit input events. The renderer draws a snapshot of those machines;
//! the embedded script replays the same transitions in the browser.
//!
//! ```text
//! events (scroll, key, click, frame, clock)
//!     → PageShell  →  PageView  →  generate (maud)  →  dist/index.html
//! ```
//!
//! Timings the browser needs (cue plan, controls delay, carousel length) are
//! computed here and embedded as JSON, so the script never re-derives them.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`schedule`] | Epoch tokens, virtual-clock timer queue, next-frame queue |
//! | [`sequencer`] | The 19 ingredient timelines: phases, poses, keyframes, completion barrier |
//! | [`sound`] | Cue catalogue, audio backend trait, the sound controller state machine |
//! | [`showcase`] | Ties sequencer and sound together; restart and mute controls |
//! | [`overlay`] | The three overlays and the shared body scroll lock |
//! | [`carousel`] | Wrap-around gallery index |
//! | [`reservation`] | Time slots and party sizes of the reservation form |
//! | [`content`] | Static copy: menu, prices, photos, contact details |
//! | [`shell`] | Page-level event dispatch and the [`shell::PageView`] snapshot |
//! | [`generate`] | Renders the page with Maud and stages assets into the output |
//! | [`assets`] | Expected asset list, presence checks, content-hashed copying |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Epochs Instead of Cancellation Flags
//!
//! Restarting the illustration bumps an [`schedule::Epoch`]. Every delayed
//! sound cue is tagged with the epoch that scheduled it, and anything still
//! pending for an older epoch is dropped rather than played. No timer of a
//! previous run can fire into the new one.
//!
//! ## Deferred Dismissal
//!
//! Closing an overlay and swapping the viewer image happen on the next frame,
//! not inside the click or key handler that caused them. The triggering event
//! finishes dispatching against the DOM it started on.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time HTML
//! macro system. Malformed markup is a build error, template variables are Rust
//! expressions, and all interpolation is escaped.
//!
//! ## One File Out
//!
//! CSS and JavaScript are inlined into `index.html`. The only other outputs
//! are the illustration assets, copied verbatim and skipped when unchanged.

pub mod assets;
pub mod carousel;
pub mod config;
pub mod content;
pub mod generate;
pub mod output;
pub mod overlay;
pub mod reservation;
pub mod schedule;
pub mod sequencer;
pub mod shell;
pub mod showcase;
pub mod sound;

#[cfg(test)]
pub(crate) mod test_helpers;
