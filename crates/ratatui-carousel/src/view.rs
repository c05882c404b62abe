use ratatui::buffer::Buffer;
use ratatui::layout::Position;
use ratatui::layout::Rect;
use ratatui::style::Style;
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;
use ratatui_carousel_core::autoplay::AutoplayState;
use ratatui_carousel_core::carousel::Carousel;
use ratatui_carousel_core::carousel::CarouselAction;
use ratatui_carousel_core::gesture::Swipe;
use ratatui_carousel_core::gesture::SwipeTracker;
use ratatui_carousel_core::input::MouseButton;
use ratatui_carousel_core::input::MouseEvent;
use ratatui_carousel_core::input::MouseEventKind;
use ratatui_carousel_core::slide::Slide;
use ratatui_carousel_core::slide::SlideRole;

#[derive(Clone, Debug)]
pub struct CarouselViewOptions {
    pub show_buttons: bool,
    pub card_gap: u16,
    pub dot_active_symbol: String,
    pub dot_inactive_symbol: String,
    pub style: Style,
}

impl Default for CarouselViewOptions {
    fn default() -> Self {
        Self {
            show_buttons: true,
            card_gap: 1,
            dot_active_symbol: "●".to_string(),
            dot_inactive_symbol: "○".to_string(),
            style: Style::default(),
        }
    }
}

/// Context passed to the `render_slide` callback in [`CarouselView::render`].
#[derive(Clone, Copy, Debug)]
pub struct SlideCardContext<'a> {
    pub index: usize,
    pub slide: &'a Slide,
    pub role: SlideRole,
    pub offset: isize,
}

#[derive(Clone, Debug, Default)]
struct ViewLayout {
    area: Rect,
    strip: Rect,
    prev_button: Option<Rect>,
    next_button: Option<Rect>,
    dots: Vec<Rect>,
}

/// Renders a [`Carousel`] as a horizontal strip of slide cards with ‹ › buttons and a dot row.
///
/// The view keeps the rects of every control it drew, so mouse events hit-test against stored
/// handles instead of re-deriving the layout. [`CarouselView::handle_mouse`] also owns the
/// swipe tracker and the hover pause: the pointer entering the widget pauses a running
/// autoplay, leaving it resumes.
#[derive(Clone, Debug, Default)]
pub struct CarouselView {
    options: CarouselViewOptions,
    swipe: SwipeTracker,
    hovered: bool,
    hover_paused: bool,
    layout: Option<ViewLayout>,
}

impl CarouselView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CarouselViewOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &CarouselViewOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: CarouselViewOptions) {
        self.options = options;
    }

    /// Renders with the default slide template.
    pub fn render_default(
        &mut self,
        area: Rect,
        buf: &mut Buffer,
        theme: &Theme,
        carousel: &mut Carousel,
    ) {
        self.render(area, buf, theme, carousel, render_default_slide);
    }

    /// Renders the carousel, delegating each visible card to `render_slide`.
    ///
    /// The render width is fed back into the carousel first, so the visible-slide count tracks
    /// the widget's actual size. Cards are laid out left to right by signed offset, which puts
    /// the active slide in the middle.
    pub fn render<F>(
        &mut self,
        area: Rect,
        buf: &mut Buffer,
        theme: &Theme,
        carousel: &mut Carousel,
        mut render_slide: F,
    ) where
        F: FnMut(Rect, SlideCardContext<'_>, &mut Buffer, &Theme),
    {
        self.layout = None;
        if area.width == 0 || area.height == 0 {
            return;
        }
        carousel.set_render_width(area.width);
        buf.set_style(area, self.options.style);

        let dots_h = u16::from(carousel.show_dots() && area.height >= 2);
        let strip = Rect::new(area.x, area.y, area.width, area.height - dots_h);
        let mut layout = ViewLayout {
            area,
            strip,
            ..Default::default()
        };

        let cards_area = self.render_buttons(strip, buf, theme, &mut layout);
        self.render_cards(cards_area, buf, theme, carousel, &mut render_slide);

        if dots_h == 1 {
            let dots_row = Rect::new(area.x, area.y + strip.height, area.width, 1);
            self.render_dots(dots_row, buf, theme, carousel, &mut layout);
        }

        self.layout = Some(layout);
    }

    /// Hit-tests a mouse event against the last rendered layout.
    ///
    /// Button and dot clicks navigate, left drags feed the swipe tracker, and pointer motion
    /// drives the hover pause. Without a prior render this is a no-op.
    pub fn handle_mouse(&mut self, carousel: &mut Carousel, event: MouseEvent) -> CarouselAction {
        let Some(layout) = self.layout.clone() else {
            return CarouselAction::None;
        };
        let pos = Position::new(event.x, event.y);
        self.update_hover(carousel, layout.area.contains(pos));

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(prev) = layout.prev_button
                    && prev.contains(pos)
                {
                    carousel.prev_slide();
                    return slide_changed(carousel);
                }
                if let Some(next) = layout.next_button
                    && next.contains(pos)
                {
                    carousel.next_slide();
                    return slide_changed(carousel);
                }
                for (index, dot) in layout.dots.iter().enumerate() {
                    if dot.contains(pos) {
                        return if carousel.go_to_slide(index) {
                            slide_changed(carousel)
                        } else {
                            CarouselAction::None
                        };
                    }
                }
                if layout.strip.contains(pos) {
                    self.swipe.begin(event.x, event.y);
                }
                CarouselAction::None
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.swipe.update(event.x, event.y);
                CarouselAction::None
            }
            MouseEventKind::Up(MouseButton::Left) => match self.swipe.finish() {
                Some(Swipe::Left) => {
                    carousel.next_slide();
                    slide_changed(carousel)
                }
                Some(Swipe::Right) => {
                    carousel.prev_slide();
                    slide_changed(carousel)
                }
                None => CarouselAction::None,
            },
            _ => CarouselAction::None,
        }
    }

    fn update_hover(&mut self, carousel: &mut Carousel, inside: bool) {
        if inside && !self.hovered {
            self.hovered = true;
            if carousel.autoplay_state() == AutoplayState::Running {
                carousel.pause_autoplay();
                self.hover_paused = true;
            }
        } else if !inside && self.hovered {
            self.hovered = false;
            if self.hover_paused {
                carousel.resume_autoplay();
                self.hover_paused = false;
            }
        }
    }

    fn render_buttons(
        &self,
        strip: Rect,
        buf: &mut Buffer,
        theme: &Theme,
        layout: &mut ViewLayout,
    ) -> Rect {
        if !self.options.show_buttons || strip.width < 7 {
            return strip;
        }
        let mid_y = strip.y + strip.height / 2;
        let prev = Rect::new(strip.x, mid_y, 1, 1);
        let next = Rect::new(strip.x + strip.width - 1, mid_y, 1, 1);
        buf.set_stringn(prev.x, prev.y, "‹", 1, theme.button);
        buf.set_stringn(next.x, next.y, "›", 1, theme.button);
        layout.prev_button = Some(prev);
        layout.next_button = Some(next);
        Rect::new(strip.x + 2, strip.y, strip.width - 4, strip.height)
    }

    fn render_cards<F>(
        &self,
        cards_area: Rect,
        buf: &mut Buffer,
        theme: &Theme,
        carousel: &Carousel,
        render_slide: &mut F,
    ) where
        F: FnMut(Rect, SlideCardContext<'_>, &mut Buffer, &Theme),
    {
        if cards_area.width == 0 || cards_area.height == 0 {
            return;
        }

        let mut cards: Vec<(isize, usize, SlideRole)> = Vec::new();
        for index in 0..carousel.len() {
            let Some(role) = carousel.role_of(index) else {
                continue;
            };
            let Some(offset) = carousel.offset_of(index) else {
                continue;
            };
            cards.push((offset, index, role));
        }
        cards.sort_by_key(|&(offset, _, _)| offset);

        let count = cards.len() as u16;
        if count == 0 {
            return;
        }
        let gaps = self.options.card_gap * (count - 1);
        if cards_area.width <= gaps {
            return;
        }
        let card_w = (cards_area.width - gaps) / count;
        if card_w == 0 {
            return;
        }
        let used = card_w * count + gaps;
        let mut x = cards_area.x + (cards_area.width - used) / 2;

        for (offset, index, role) in cards {
            let card = Rect::new(x, cards_area.y, card_w, cards_area.height);
            buf.set_style(card, theme.slide(role));
            if let Some(slide) = carousel.slide(index) {
                let ctx = SlideCardContext {
                    index,
                    slide,
                    role,
                    offset,
                };
                render_slide(card, ctx, buf, theme);
            }
            x += card_w + self.options.card_gap;
        }
    }

    fn render_dots(
        &self,
        row: Rect,
        buf: &mut Buffer,
        theme: &Theme,
        carousel: &Carousel,
        layout: &mut ViewLayout,
    ) {
        let count = carousel.len() as u16;
        if count == 0 {
            return;
        }
        let total = count * 2 - 1;
        if total > row.width {
            return;
        }
        let mut x = row.x + (row.width - total) / 2;
        for index in 0..count as usize {
            let rect = Rect::new(x, row.y, 1, 1);
            let (symbol, style) = if carousel.is_dot_active(index) {
                (self.options.dot_active_symbol.as_str(), theme.dot_active)
            } else {
                (
                    self.options.dot_inactive_symbol.as_str(),
                    theme.dot_inactive,
                )
            };
            buf.set_stringn(rect.x, rect.y, symbol, 1, style);
            layout.dots.push(rect);
            x += 2;
        }
    }
}

/// Default slide template: centered title, description beneath it, image reference on the
/// bottom line when there is room.
pub fn render_default_slide(
    area: Rect,
    ctx: SlideCardContext<'_>,
    buf: &mut Buffer,
    theme: &Theme,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    set_centered(buf, area, 0, &ctx.slide.title, theme.title);
    if area.height >= 2 {
        set_centered(buf, area, 1, &ctx.slide.description, theme.description);
    }
    if area.height >= 4 {
        set_centered(buf, area, area.height - 1, &ctx.slide.image, theme.image);
    }
}

fn set_centered(buf: &mut Buffer, area: Rect, dy: u16, text: &str, style: Style) {
    let width = UnicodeWidthStr::width(text).min(area.width as usize) as u16;
    let x = area.x + (area.width - width) / 2;
    buf.set_stringn(x, area.y + dy, text, area.width as usize, style);
}

fn slide_changed(carousel: &Carousel) -> CarouselAction {
    match carousel.current() {
        Some(current) => CarouselAction::SlideChanged(current),
        None => CarouselAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui_carousel_core::carousel::CarouselOptions;
    use ratatui_carousel_core::input::KeyModifiers;
    use std::time::Duration;

    fn deck(n: usize) -> Vec<Slide> {
        (0..n)
            .map(|i| Slide::new(format!("img{i}.png"), format!("Slide {i}"), "text"))
            .collect()
    }

    fn mouse(kind: MouseEventKind, x: u16, y: u16) -> MouseEvent {
        MouseEvent {
            x,
            y,
            kind,
            modifiers: KeyModifiers::none(),
        }
    }

    fn rendered(carousel: &mut Carousel) -> CarouselView {
        let mut view = CarouselView::new();
        let area = Rect::new(0, 0, 40, 8);
        let mut buf = Buffer::empty(area);
        let theme = Theme::default();
        view.render_default(area, &mut buf, &theme, carousel);
        view
    }

    #[test]
    fn render_records_control_handles() {
        let mut c = Carousel::new(deck(5), CarouselOptions::default());
        let view = rendered(&mut c);
        let layout = view.layout.as_ref().unwrap();
        assert!(layout.prev_button.is_some());
        assert!(layout.next_button.is_some());
        assert_eq!(layout.dots.len(), 5);
    }

    #[test]
    fn hidden_dots_render_no_handles() {
        let mut c = Carousel::new(deck(5), CarouselOptions::default());
        c.toggle_dots(false);
        let view = rendered(&mut c);
        assert!(view.layout.as_ref().unwrap().dots.is_empty());
    }

    #[test]
    fn tiny_areas_do_not_panic() {
        let mut c = Carousel::new(deck(5), CarouselOptions::default());
        let mut view = CarouselView::new();
        let theme = Theme::default();
        for (w, h) in [(0, 0), (1, 1), (3, 2), (6, 1)] {
            let area = Rect::new(0, 0, w, h);
            let mut buf = Buffer::empty(area);
            view.render_default(area, &mut buf, &theme, &mut c);
        }
    }

    #[test]
    fn clicking_the_next_button_advances() {
        let mut c = Carousel::new(deck(5), CarouselOptions::default());
        let mut view = rendered(&mut c);
        let next = view.layout.as_ref().unwrap().next_button.unwrap();
        let action = view.handle_mouse(
            &mut c,
            mouse(MouseEventKind::Down(MouseButton::Left), next.x, next.y),
        );
        assert_eq!(action, CarouselAction::SlideChanged(1));
    }

    #[test]
    fn clicking_a_dot_jumps_to_that_slide() {
        let mut c = Carousel::new(deck(5), CarouselOptions::default());
        let mut view = rendered(&mut c);
        let dot = view.layout.as_ref().unwrap().dots[3];
        let action = view.handle_mouse(
            &mut c,
            mouse(MouseEventKind::Down(MouseButton::Left), dot.x, dot.y),
        );
        assert_eq!(action, CarouselAction::SlideChanged(3));
    }

    #[test]
    fn dragging_left_swipes_to_the_next_slide() {
        let mut c = Carousel::new(deck(5), CarouselOptions::default());
        let mut view = rendered(&mut c);
        view.handle_mouse(&mut c, mouse(MouseEventKind::Down(MouseButton::Left), 20, 2));
        view.handle_mouse(&mut c, mouse(MouseEventKind::Drag(MouseButton::Left), 10, 2));
        let action =
            view.handle_mouse(&mut c, mouse(MouseEventKind::Up(MouseButton::Left), 10, 2));
        assert_eq!(action, CarouselAction::SlideChanged(1));
    }

    #[test]
    fn hover_pauses_and_leaving_resumes_autoplay() {
        let mut c = Carousel::new(
            deck(5),
            CarouselOptions {
                autoplay_interval: Duration::from_millis(100),
                ..Default::default()
            },
        );
        c.start_autoplay();
        let mut view = rendered(&mut c);
        view.handle_mouse(&mut c, mouse(MouseEventKind::Moved, 20, 2));
        assert_eq!(c.autoplay_state(), AutoplayState::Paused);
        view.handle_mouse(&mut c, mouse(MouseEventKind::Moved, 39, 20));
        assert_eq!(c.autoplay_state(), AutoplayState::Running);
    }

    #[test]
    fn user_pause_is_not_resumed_by_hover_exit() {
        let mut c = Carousel::new(deck(5), CarouselOptions::default());
        c.start_autoplay();
        c.pause_autoplay();
        let mut view = rendered(&mut c);
        view.handle_mouse(&mut c, mouse(MouseEventKind::Moved, 20, 2));
        view.handle_mouse(&mut c, mouse(MouseEventKind::Moved, 39, 20));
        assert_eq!(c.autoplay_state(), AutoplayState::Paused);
    }
}
