/// One row of the responsive table: widths up to `max_width` show `visible` slides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Breakpoint {
    pub max_width: u16,
    pub visible: usize,
}

impl Breakpoint {
    pub fn new(max_width: u16, visible: usize) -> Self {
        Self { max_width, visible }
    }
}

/// Resolves the visible-slide count for `width` against an ascending breakpoint table.
///
/// The first entry whose `max_width` is at least `width` wins; widths beyond the table fall
/// back to `fallback`, the maximum count. An empty table always yields `fallback`.
pub fn resolve_visible(table: &[Breakpoint], width: u16, fallback: usize) -> usize {
    table
        .iter()
        .find(|bp| width <= bp.max_width)
        .map(|bp| bp.visible)
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Vec<Breakpoint> {
        vec![
            Breakpoint::new(40, 1),
            Breakpoint::new(80, 3),
            Breakpoint::new(120, 5),
        ]
    }

    #[test]
    fn smallest_threshold_at_or_above_width_wins() {
        let t = table();
        assert_eq!(resolve_visible(&t, 30, 7), 1);
        assert_eq!(resolve_visible(&t, 40, 7), 1);
        assert_eq!(resolve_visible(&t, 41, 7), 3);
        assert_eq!(resolve_visible(&t, 120, 7), 5);
    }

    #[test]
    fn widths_beyond_the_table_fall_back_to_maximum() {
        assert_eq!(resolve_visible(&table(), 200, 7), 7);
    }

    #[test]
    fn empty_table_uses_fallback() {
        assert_eq!(resolve_visible(&[], 10, 5), 5);
    }
}
