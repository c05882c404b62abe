use ratatui::style::Style;
use ratatui_carousel_core::slide::SlideRole;

#[derive(Clone, Debug)]
pub struct Theme {
    pub slide_active: Style,
    pub slide_adjacent: Style,
    pub slide_far: Style,
    pub title: Style,
    pub description: Style,
    pub image: Style,
    pub dot_active: Style,
    pub dot_inactive: Style,
    pub button: Style,
}

impl Default for Theme {
    fn default() -> Self {
        use ratatui::style::Stylize;

        Self {
            slide_active: Style::default().bold(),
            slide_adjacent: Style::default(),
            slide_far: Style::default().dark_gray(),
            title: Style::default().cyan(),
            description: Style::default(),
            image: Style::default().dark_gray(),
            dot_active: Style::default().cyan(),
            dot_inactive: Style::default().dark_gray(),
            button: Style::default().cyan(),
        }
    }
}

impl Theme {
    /// Card style for a slide role.
    pub fn slide(&self, role: SlideRole) -> Style {
        match role {
            SlideRole::Active => self.slide_active,
            SlideRole::Prev | SlideRole::Next => self.slide_adjacent,
            SlideRole::PrevPrev | SlideRole::NextNext => self.slide_far,
        }
    }
}
