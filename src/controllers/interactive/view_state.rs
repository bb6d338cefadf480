use crate::core::data::point::Point;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Viewing,
    /// A drag is in progress, anchored where the button went down.
    SelectingRegion { start: Point },
}

impl ViewState {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Viewing => "Viewing",
            Self::SelectingRegion { .. } => "Selecting region",
        }
    }
}
