use std::time::Duration;
use std::time::Instant;

use crate::autoplay::Autoplay;
use crate::autoplay::AutoplayState;
use crate::breakpoint::Breakpoint;
use crate::breakpoint::resolve_visible;
use crate::controls::CarouselBindings;
use crate::controls::ControlAction;
use crate::input::InputEvent;
use crate::slide::Slide;
use crate::slide::SlideRole;
use crate::window::Direction;
use crate::window::WindowState;

pub const DEFAULT_AUTOPLAY_INTERVAL: Duration = Duration::from_millis(3000);
pub const DEFAULT_VISIBLE_SLIDES: usize = 5;

/// Construction options. Everything has a default; an empty `responsive` table means the
/// fixed `visible_slides` count is used at every width.
#[derive(Clone, Debug)]
pub struct CarouselOptions {
    pub autoplay_interval: Duration,
    pub show_dots: bool,
    pub responsive: Vec<Breakpoint>,
    pub visible_slides: usize,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            autoplay_interval: DEFAULT_AUTOPLAY_INTERVAL,
            show_dots: true,
            responsive: Vec::new(),
            visible_slides: DEFAULT_VISIBLE_SLIDES,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselAction {
    None,
    Redraw,
    SlideChanged(usize),
}

/// One carousel instance owning its slides, current index, resolved visible count, and
/// autoplay timer.
///
/// The slide list is fixed for the lifetime of the instance. Roles and dot state are derived
/// on demand from the current index — nothing is cached, so every query reflects the latest
/// mutation. With no slides the carousel is dormant: queries return `None`/`false` and every
/// mutation is a no-op, including autoplay start.
#[derive(Clone, Debug)]
pub struct Carousel {
    slides: Vec<Slide>,
    window: WindowState,
    responsive: Vec<Breakpoint>,
    fallback_visible: usize,
    visible: usize,
    show_dots: bool,
    autoplay: Autoplay,
    bindings: CarouselBindings,
}

impl Carousel {
    pub fn new(slides: Vec<Slide>, options: CarouselOptions) -> Self {
        let window = WindowState::new(slides.len());
        let mut carousel = Self {
            slides,
            window,
            responsive: options.responsive,
            fallback_visible: options.visible_slides,
            visible: 0,
            show_dots: options.show_dots,
            autoplay: Autoplay::new(options.autoplay_interval),
            bindings: CarouselBindings::default(),
        };
        carousel.visible = carousel.cap_visible(carousel.fallback_visible);
        carousel
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn current(&self) -> Option<usize> {
        self.window.current()
    }

    pub fn current_slide(&self) -> Option<&Slide> {
        self.slides.get(self.window.current()?)
    }

    pub fn visible_slides(&self) -> usize {
        self.visible
    }

    pub fn role_of(&self, index: usize) -> Option<SlideRole> {
        self.window.role_of(index, self.visible)
    }

    pub fn offset_of(&self, index: usize) -> Option<isize> {
        self.window.offset_of(index, self.visible)
    }

    pub fn show_dots(&self) -> bool {
        self.show_dots
    }

    /// Dot highlight for `index`. Always `false` while dots are hidden.
    pub fn is_dot_active(&self, index: usize) -> bool {
        self.show_dots && self.window.current() == Some(index)
    }

    pub fn bindings(&self) -> &CarouselBindings {
        &self.bindings
    }

    pub fn set_bindings(&mut self, bindings: CarouselBindings) {
        self.bindings = bindings;
    }

    /// Re-resolves the visible-slide count for a new render width.
    ///
    /// Returns `true` when the count changed; the current index never moves here.
    pub fn set_render_width(&mut self, width: u16) -> bool {
        let resolved = resolve_visible(&self.responsive, width, self.fallback_visible);
        let capped = self.cap_visible(resolved);
        if capped == self.visible {
            return false;
        }
        self.visible = capped;
        true
    }

    /// Jumps to `index`, rejecting out-of-range targets without mutation.
    pub fn go_to_slide(&mut self, index: usize) -> bool {
        if !self.window.go_to(index) {
            return false;
        }
        self.autoplay.rearm();
        true
    }

    pub fn next_slide(&mut self) {
        self.step(Direction::Forward);
    }

    pub fn prev_slide(&mut self) {
        self.step(Direction::Backward);
    }

    /// Shows or hides dot navigation; the current index is untouched.
    pub fn toggle_dots(&mut self, show: bool) {
        self.show_dots = show;
    }

    pub fn autoplay_state(&self) -> AutoplayState {
        self.autoplay.state()
    }

    pub fn autoplay_interval(&self) -> Duration {
        self.autoplay.interval()
    }

    /// Autoplay never starts on an empty carousel.
    pub fn start_autoplay(&mut self) {
        if !self.slides.is_empty() {
            self.autoplay.start();
        }
    }

    pub fn pause_autoplay(&mut self) {
        self.autoplay.pause();
    }

    pub fn resume_autoplay(&mut self) {
        self.autoplay.resume();
    }

    pub fn stop_autoplay(&mut self) {
        self.autoplay.stop();
    }

    /// Drives autoplay; call with the current time on every loop turn.
    pub fn tick(&mut self, now: Instant) -> CarouselAction {
        if !self.autoplay.poll(now) {
            return CarouselAction::None;
        }
        self.window.advance(Direction::Forward);
        match self.window.current() {
            Some(current) => CarouselAction::SlideChanged(current),
            None => CarouselAction::None,
        }
    }

    /// Maps bound keys onto navigation. Mouse events are hit-tested by the view layer and
    /// arrive as [`Carousel::apply_action`] calls instead.
    pub fn handle_event(&mut self, event: InputEvent) -> CarouselAction {
        match event {
            InputEvent::Key(key) => match self.bindings.action_for(&key) {
                Some(action) => self.apply_action(action),
                None => CarouselAction::None,
            },
            InputEvent::Mouse(_) => CarouselAction::None,
        }
    }

    pub fn apply_action(&mut self, action: ControlAction) -> CarouselAction {
        match action {
            ControlAction::Prev => {
                self.prev_slide();
                self.changed_action()
            }
            ControlAction::Next => {
                self.next_slide();
                self.changed_action()
            }
            ControlAction::First => {
                if self.go_to_slide(0) {
                    self.changed_action()
                } else {
                    CarouselAction::None
                }
            }
            ControlAction::Last => {
                let last = self.slides.len().saturating_sub(1);
                if self.go_to_slide(last) {
                    self.changed_action()
                } else {
                    CarouselAction::None
                }
            }
            ControlAction::Jump(index) => {
                if self.go_to_slide(index) {
                    self.changed_action()
                } else {
                    CarouselAction::None
                }
            }
            ControlAction::ToggleDots => {
                self.toggle_dots(!self.show_dots);
                CarouselAction::Redraw
            }
        }
    }

    fn step(&mut self, direction: Direction) {
        if self.window.advance(direction) {
            self.autoplay.rearm();
        }
    }

    fn changed_action(&self) -> CarouselAction {
        match self.window.current() {
            Some(current) => CarouselAction::SlideChanged(current),
            None => CarouselAction::None,
        }
    }

    fn cap_visible(&self, count: usize) -> usize {
        if self.slides.is_empty() {
            0
        } else {
            count.clamp(1, self.slides.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyCode;
    use crate::input::KeyEvent;

    fn deck(n: usize) -> Vec<Slide> {
        (0..n)
            .map(|i| Slide::new(format!("img{i}.png"), format!("Slide {i}"), "text"))
            .collect()
    }

    #[test]
    fn visible_count_is_capped_at_the_slide_count() {
        let c = Carousel::new(deck(3), CarouselOptions::default());
        assert_eq!(c.visible_slides(), 3);
        let c = Carousel::new(deck(10), CarouselOptions::default());
        assert_eq!(c.visible_slides(), 5);
    }

    #[test]
    fn render_width_resolves_against_the_table() {
        let options = CarouselOptions {
            responsive: vec![Breakpoint::new(40, 1), Breakpoint::new(80, 3)],
            visible_slides: 5,
            ..Default::default()
        };
        let mut c = Carousel::new(deck(10), options);
        assert!(c.set_render_width(30));
        assert_eq!(c.visible_slides(), 1);
        assert!(c.set_render_width(60));
        assert_eq!(c.visible_slides(), 3);
        assert!(!c.set_render_width(70));
        assert!(c.set_render_width(200));
        assert_eq!(c.visible_slides(), 5);
        assert_eq!(c.current(), Some(0));
    }

    #[test]
    fn arrows_move_and_digits_jump() {
        let mut c = Carousel::new(deck(4), CarouselOptions::default());
        let right = InputEvent::Key(KeyEvent::new(KeyCode::Right));
        assert_eq!(c.handle_event(right), CarouselAction::SlideChanged(1));
        let left = InputEvent::Key(KeyEvent::new(KeyCode::Left));
        assert_eq!(c.handle_event(left), CarouselAction::SlideChanged(0));
        let three = InputEvent::Key(crate::keymap::key_char('3'));
        assert_eq!(c.handle_event(three), CarouselAction::SlideChanged(2));
        // Digit beyond the deck is an out-of-range jump: rejected, index unchanged.
        let nine = InputEvent::Key(crate::keymap::key_char('9'));
        assert_eq!(c.handle_event(nine), CarouselAction::None);
        assert_eq!(c.current(), Some(2));
    }

    #[test]
    fn toggling_dots_suspends_highlight_without_moving() {
        let mut c = Carousel::new(deck(4), CarouselOptions::default());
        c.go_to_slide(2);
        assert!(c.is_dot_active(2));
        c.toggle_dots(false);
        assert!(!c.show_dots());
        assert!(!c.is_dot_active(2));
        c.toggle_dots(true);
        assert!(c.is_dot_active(2));
        assert_eq!(c.current(), Some(2));
    }

    #[test]
    fn empty_carousel_is_dormant() {
        let mut c = Carousel::new(Vec::new(), CarouselOptions::default());
        assert_eq!(c.current(), None);
        assert_eq!(c.visible_slides(), 0);
        assert!(!c.go_to_slide(0));
        c.next_slide();
        assert_eq!(c.current(), None);
        c.start_autoplay();
        assert_eq!(c.autoplay_state(), AutoplayState::Stopped);
        assert_eq!(c.tick(Instant::now()), CarouselAction::None);
    }

    #[test]
    fn tick_advances_forward_while_running() {
        let mut c = Carousel::new(
            deck(3),
            CarouselOptions {
                autoplay_interval: Duration::from_millis(100),
                ..Default::default()
            },
        );
        let t0 = Instant::now();
        c.start_autoplay();
        assert_eq!(c.tick(t0), CarouselAction::None);
        assert_eq!(
            c.tick(t0 + Duration::from_millis(100)),
            CarouselAction::SlideChanged(1)
        );
        assert_eq!(c.tick(t0 + Duration::from_millis(150)), CarouselAction::None);
    }
}
