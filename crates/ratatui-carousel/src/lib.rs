//! `ratatui-carousel` renders a circular slide carousel in the terminal.
//!
//! The state lives in `ratatui-carousel-core` (re-exported here); this crate adds the
//! [`view::CarouselView`] widget, a [`theme::Theme`], and a default slide template. Slide
//! rendering is caller-controlled: pass your own closure to [`view::CarouselView::render`] or
//! use [`view::CarouselView::render_default`].
//!
//! ## Getting started
//!
//! ```no_run
//! use ratatui_carousel::carousel::{Carousel, CarouselOptions};
//! use ratatui_carousel::slide::Slide;
//! use ratatui_carousel::theme::Theme;
//! use ratatui_carousel::view::CarouselView;
//!
//! let slides = vec![Slide::new("a.png", "First", "The first slide")];
//! let mut carousel = Carousel::new(slides, CarouselOptions::default());
//! carousel.start_autoplay();
//! let mut view = CarouselView::new();
//! let theme = Theme::default();
//! // In your draw closure:
//! // view.render_default(area, buf, &theme, &mut carousel);
//! ```
//!
//! Enable the `crossterm` feature for ready-made event conversion.
pub mod theme;
pub mod view;

pub use ratatui_carousel_core::autoplay;
pub use ratatui_carousel_core::breakpoint;
pub use ratatui_carousel_core::carousel;
pub use ratatui_carousel_core::controls;
pub use ratatui_carousel_core::gesture;
pub use ratatui_carousel_core::input;
pub use ratatui_carousel_core::keymap;
pub use ratatui_carousel_core::slide;
pub use ratatui_carousel_core::window;

#[cfg(feature = "crossterm")]
pub use ratatui_carousel_core::crossterm_input;
