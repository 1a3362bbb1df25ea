use super::time::TimeUnit;

/// The current zoom/pan as a (left, right) time pair. `right > left` must
/// hold before rendering; the view derives it from left + visible range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibleWindow {
    pub left: TimeUnit,
    pub right: TimeUnit,
}

impl VisibleWindow {
    pub fn new(left: TimeUnit, right: TimeUnit) -> Self {
        Self { left, right }
    }

    pub fn span(&self) -> TimeUnit {
        self.right - self.left
    }
}

/// State of one in-flight drag. Exactly one may be live at a time, owned by
/// the view for its whole lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragMeta {
    pub stream_index: Option<usize>,
    /// None when the drag started in a bad place; the record is still kept
    /// so later frames don't keep trying to start another drag.
    pub grab_time: Option<TimeUnit>,
    pub drag_amount: TimeUnit,
    pub draggable: bool,
}

impl DragMeta {
    pub fn dead(&self) -> bool {
        !self.draggable || self.grab_time.is_none()
    }
}
