use super::time::TimeUnit;
use crate::menu::MenuBuilder;
use crate::theme::Rgba;
use eyre::Result;
use serde::{Deserialize, Serialize};

/// Invoked when a drag on this stream is committed, with the grab time and
/// the dragged delta.
pub type DragHandler = Box<dyn Fn(TimeUnit, TimeUnit) -> Result<()> + Send + Sync>;

/// Populates a context menu for this stream at the clicked time.
pub type MenuProvider = Box<dyn Fn(TimeUnit, &mut MenuBuilder) -> Result<()> + Send + Sync>;

/// Descriptor for one lane of time-ordered data. Capabilities are implied by
/// the attached handlers: a stream is draggable iff it has a drag handler.
pub struct StreamMeta {
    pub name: String,
    pub color: Rgba,
    pub on_dragged: Option<DragHandler>,
    pub on_context_menu: Option<MenuProvider>,
}

impl StreamMeta {
    pub fn new(name: impl Into<String>, color: Rgba) -> Self {
        Self {
            name: name.into(),
            color,
            on_dragged: None,
            on_context_menu: None,
        }
    }

    pub fn on_dragged(mut self, handler: DragHandler) -> Self {
        self.on_dragged = Some(handler);
        self
    }

    pub fn on_context_menu(mut self, provider: MenuProvider) -> Self {
        self.on_context_menu = Some(provider);
        self
    }

    pub fn draggable(&self) -> bool {
        self.on_dragged.is_some()
    }
}

impl std::fmt::Debug for StreamMeta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamMeta")
            .field("name", &self.name)
            .field("color", &self.color)
            .field("draggable", &self.draggable())
            .field("has_menu", &self.on_context_menu.is_some())
            .finish()
    }
}

/// Whether a block's payload has fully materialized. Advisory only; drives
/// the striped-vs-solid rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataState {
    /// Exists but not loaded yet.
    Exists,
    #[default]
    Loaded,
}

/// One interval on one stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamDataItem {
    pub start: TimeUnit,
    pub end: TimeUnit,
    pub state: DataState,
}

impl StreamDataItem {
    pub fn new(start: TimeUnit, end: TimeUnit, state: DataState) -> Self {
        Self { start, end, state }
    }

    pub fn duration(&self) -> TimeUnit {
        self.end - self.start
    }
}

/// A resolved (stream index, time) pair from a canvas position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StreamAndTime {
    pub stream: usize,
    pub time: TimeUnit,
}
