/// One content item in the carousel's circular list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slide {
    pub image: String,
    pub title: String,
    pub description: String,
}

impl Slide {
    pub fn new(
        image: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            image: image.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Display classification of a slide relative to the active index.
///
/// Slides outside the visible window carry no role at all; widgets treat those as hidden.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideRole {
    Active,
    Prev,
    Next,
    PrevPrev,
    NextNext,
}

impl SlideRole {
    pub fn is_active(self) -> bool {
        matches!(self, SlideRole::Active)
    }

    /// `true` for the roles immediately flanking the active slide.
    pub fn is_adjacent(self) -> bool {
        matches!(self, SlideRole::Prev | SlideRole::Next)
    }

    pub fn name(self) -> &'static str {
        match self {
            SlideRole::Active => "active",
            SlideRole::Prev => "prev",
            SlideRole::Next => "next",
            SlideRole::PrevPrev => "prev-prev",
            SlideRole::NextNext => "next-next",
        }
    }
}
