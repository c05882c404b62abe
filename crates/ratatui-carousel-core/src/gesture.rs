/// Horizontal swipe direction, named after the pointer's travel.
///
/// Dragging left pulls the next slide into view, so `Swipe::Left` maps to a forward advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Swipe {
    Left,
    Right,
}

/// Accumulates pointer down/drag/up coordinates into a swipe.
///
/// The tracker is stateless between gestures: `finish` and `cancel` both clear it, and events
/// arriving without a preceding `begin` are ignored.
#[derive(Clone, Copy, Debug)]
pub struct SwipeTracker {
    threshold: u16,
    origin: Option<(u16, u16)>,
    last: Option<(u16, u16)>,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(4)
    }
}

impl SwipeTracker {
    /// `threshold` is the minimum horizontal travel, in cells, for a drag to count as a swipe.
    pub fn new(threshold: u16) -> Self {
        Self {
            threshold,
            origin: None,
            last: None,
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.origin.is_some()
    }

    pub fn begin(&mut self, x: u16, y: u16) {
        self.origin = Some((x, y));
        self.last = Some((x, y));
    }

    pub fn update(&mut self, x: u16, y: u16) {
        if self.origin.is_some() {
            self.last = Some((x, y));
        }
    }

    pub fn finish(&mut self) -> Option<Swipe> {
        let origin = self.origin.take()?;
        let last = self.last.take()?;
        let dx = last.0 as i32 - origin.0 as i32;
        if dx.unsigned_abs() < self.threshold as u32 {
            return None;
        }
        if dx < 0 { Some(Swipe::Left) } else { Some(Swipe::Right) }
    }

    pub fn cancel(&mut self) {
        self.origin = None;
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_drags_do_not_swipe() {
        let mut t = SwipeTracker::new(4);
        t.begin(10, 0);
        t.update(12, 0);
        assert_eq!(t.finish(), None);
    }

    #[test]
    fn long_drags_swipe_in_the_travel_direction() {
        let mut t = SwipeTracker::new(4);
        t.begin(10, 0);
        t.update(4, 0);
        assert_eq!(t.finish(), Some(Swipe::Left));

        t.begin(4, 0);
        t.update(10, 1);
        assert_eq!(t.finish(), Some(Swipe::Right));
    }

    #[test]
    fn finish_without_begin_is_none() {
        let mut t = SwipeTracker::default();
        assert_eq!(t.finish(), None);
        t.update(5, 5);
        assert_eq!(t.finish(), None);
    }

    #[test]
    fn cancel_discards_the_gesture() {
        let mut t = SwipeTracker::new(4);
        t.begin(10, 0);
        t.update(0, 0);
        t.cancel();
        assert_eq!(t.finish(), None);
        assert!(!t.is_tracking());
    }
}
