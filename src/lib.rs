//! timeline_view: a host-toolkit-agnostic timeline visualization and
//! interaction engine. Hosts supply a [`surface::DrawSurface`], a
//! [`data_types::DataBridge`] and raw pointer events; the engine turns them
//! into rendered frames and domain actions (select, hover, drag, jump,
//! context menus).

pub mod config;
pub mod data_types;
pub mod geometry;
pub mod input;
pub mod menu;
pub mod rendering;
pub mod scales;
pub mod surface;
pub mod theme;
pub mod utils;
pub mod view;
pub mod view_controller;

pub use config::TimelineConfig;
pub use data_types::{
    DataBridge, DataState, DragMeta, StreamAndTime, StreamDataItem, StreamMeta, TimeUnit,
    VecDataBridge, VisibleWindow,
};
pub use geometry::Rect;
pub use input::{InputCache, InputEvent, MouseButton};
pub use menu::{MenuBuilder, MenuEntry};
pub use surface::{Anchor, CursorHint, DrawCall, DrawSurface, RecordingSurface};
pub use theme::{Rgba, TimelineTheme};
pub use view::{ScrollbarState, TimelineView};
pub use view_controller::ViewController;
