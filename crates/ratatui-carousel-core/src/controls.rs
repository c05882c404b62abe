use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::keymap;

/// Navigation requests produced by key bindings, dot/button clicks, and swipes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlAction {
    Prev,
    Next,
    First,
    Last,
    Jump(usize),
    ToggleDots,
}

/// Key bindings for carousel navigation.
///
/// With `jump_digits` enabled, `1`..`9` jump straight to that slide, matching the dot row.
#[derive(Clone, Debug)]
pub struct CarouselBindings {
    pub prev: Vec<KeyEvent>,
    pub next: Vec<KeyEvent>,
    pub first: Vec<KeyEvent>,
    pub last: Vec<KeyEvent>,
    pub toggle_dots: Vec<KeyEvent>,
    pub jump_digits: bool,
}

impl Default for CarouselBindings {
    fn default() -> Self {
        Self {
            prev: vec![KeyEvent::new(KeyCode::Left), keymap::key_char('h')],
            next: vec![KeyEvent::new(KeyCode::Right), keymap::key_char('l')],
            first: vec![KeyEvent::new(KeyCode::Home), keymap::key_char('g')],
            last: vec![KeyEvent::new(KeyCode::End), keymap::key_char('G')],
            toggle_dots: vec![keymap::key_char('d')],
            jump_digits: true,
        }
    }
}

impl CarouselBindings {
    pub fn action_for(&self, key: &KeyEvent) -> Option<ControlAction> {
        if self.prev.iter().any(|p| keymap::key_event_matches(p, key)) {
            return Some(ControlAction::Prev);
        }
        if self.next.iter().any(|p| keymap::key_event_matches(p, key)) {
            return Some(ControlAction::Next);
        }
        if self.first.iter().any(|p| keymap::key_event_matches(p, key)) {
            return Some(ControlAction::First);
        }
        if self.last.iter().any(|p| keymap::key_event_matches(p, key)) {
            return Some(ControlAction::Last);
        }
        if self
            .toggle_dots
            .iter()
            .any(|p| keymap::key_event_matches(p, key))
        {
            return Some(ControlAction::ToggleDots);
        }
        if self.jump_digits
            && key.modifiers == crate::input::KeyModifiers::none()
            && let KeyCode::Char(c) = key.code
            && let Some(digit) = c.to_digit(10)
            && digit >= 1
        {
            return Some(ControlAction::Jump(digit as usize - 1));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_map_to_prev_and_next() {
        let b = CarouselBindings::default();
        assert_eq!(
            b.action_for(&KeyEvent::new(KeyCode::Left)),
            Some(ControlAction::Prev)
        );
        assert_eq!(
            b.action_for(&KeyEvent::new(KeyCode::Right)),
            Some(ControlAction::Next)
        );
        assert_eq!(b.action_for(&KeyEvent::new(KeyCode::Enter)), None);
    }

    #[test]
    fn digits_jump_zero_based() {
        let b = CarouselBindings::default();
        assert_eq!(
            b.action_for(&keymap::key_char('1')),
            Some(ControlAction::Jump(0))
        );
        assert_eq!(
            b.action_for(&keymap::key_char('9')),
            Some(ControlAction::Jump(8))
        );
        assert_eq!(b.action_for(&keymap::key_char('0')), None);
        assert_eq!(b.action_for(&keymap::key_ctrl('1')), None);
    }

    #[test]
    fn digits_can_be_disabled() {
        let b = CarouselBindings {
            jump_digits: false,
            ..Default::default()
        };
        assert_eq!(b.action_for(&keymap::key_char('1')), None);
    }
}
