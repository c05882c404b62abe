//! `ratatui-carousel-core` provides the UI-agnostic state for a circular slide carousel.
//!
//! This crate focuses on the math and state machines; rendering lives in the facade crate
//! `ratatui-carousel`. Use this crate directly if you want to drive a carousel from your own
//! view layer.
//!
//! ## Design goals
//!
//! - Event-loop agnostic: you drive input + ticking from your app.
//! - No async runtime, no background threads: autoplay is a deadline the owner polls.
//! - One [`carousel::Carousel`] instance owns all of its state — slides, current index,
//!   resolved visible count, autoplay — there are no globals.
//!
//! Useful entry points:
//! - [`carousel::Carousel`]: the instance tying everything together.
//! - [`window::WindowState`]: circular index + per-slide role assignment.
//! - [`breakpoint::resolve_visible`]: width-driven visible-slide counts.
//! - [`autoplay::Autoplay`]: the pollable autoplay timer.
pub mod autoplay;
pub mod breakpoint;
pub mod carousel;
pub mod controls;
pub mod gesture;
pub mod input;
pub mod keymap;
pub mod slide;
pub mod window;

#[cfg(feature = "crossterm")]
pub mod crossterm_input;
