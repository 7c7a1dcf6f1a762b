//! View-level enums shared between state and components.

/// Modal sub-view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Panel {
    /// Textual metadata (default)
    #[default]
    Details,
    /// Embedded document viewer
    Reader,
}

/// Progress of the current data load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// Fetch in flight (initial state)
    #[default]
    Loading,
    /// Library came from the configured source
    Ready,
    /// Source failed; the library is empty or a fallback
    Failed(String),
}

impl LoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Message to surface to the reader, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}
