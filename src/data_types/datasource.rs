use super::stream::{StreamDataItem, StreamMeta};
use super::time::TimeUnit;
use std::sync::Arc;

/// Trait for data providers feeding the timeline. Queried fresh every frame;
/// the view holds no data beyond the current render pass.
pub trait DataBridge: Send + Sync {
    /// Ordered stream descriptors. Index positions are stable within a frame
    /// and are the handles used by every other query.
    fn streams(&self) -> Vec<Arc<StreamMeta>>;

    /// All items intersecting [min, max] on one stream. Order unspecified.
    fn stream_data(&self, stream: usize, min: TimeUnit, max: TimeUnit) -> Vec<StreamDataItem>;

    /// Nearest item starting at or before `time`.
    fn nearest_at_or_before(&self, stream: usize, time: TimeUnit) -> Option<StreamDataItem>;

    /// Nearest item starting at or after `time`.
    fn nearest_at_or_after(&self, stream: usize, time: TimeUnit) -> Option<StreamDataItem>;

    /// Total item count for one stream.
    fn data_count(&self, stream: usize) -> usize;

    /// Global (min, max) time bounds over all streams, or None while empty.
    fn time_range(&self) -> Option<(TimeUnit, TimeUnit)>;
}

/// Reference bridge over sorted in-memory vectors; range and neighbor queries
/// are binary searches on the start time.
#[derive(Default)]
pub struct VecDataBridge {
    streams: Vec<Arc<StreamMeta>>,
    items: Vec<Vec<StreamDataItem>>,
}

impl VecDataBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_stream(&mut self, meta: StreamMeta) -> usize {
        self.streams.push(Arc::new(meta));
        self.items.push(Vec::new());
        self.streams.len() - 1
    }

    /// Inserts keeping items sorted by start time.
    pub fn add_item(&mut self, stream: usize, item: StreamDataItem) {
        let items = &mut self.items[stream];
        let at = items.partition_point(|i| i.start <= item.start);
        items.insert(at, item);
    }

    pub fn set_items(&mut self, stream: usize, mut items: Vec<StreamDataItem>) {
        items.sort_by_key(|i| i.start);
        self.items[stream] = items;
    }
}

impl DataBridge for VecDataBridge {
    fn streams(&self) -> Vec<Arc<StreamMeta>> {
        self.streams.clone()
    }

    fn stream_data(&self, stream: usize, min: TimeUnit, max: TimeUnit) -> Vec<StreamDataItem> {
        let Some(items) = self.items.get(stream) else {
            return Vec::new();
        };
        // Sorted by start, but an earlier long item can still intersect the
        // window, so filter on the interval rather than slicing by start.
        let end = items.partition_point(|i| i.start <= max);
        items[..end]
            .iter()
            .filter(|i| i.end >= min)
            .copied()
            .collect()
    }

    fn nearest_at_or_before(&self, stream: usize, time: TimeUnit) -> Option<StreamDataItem> {
        let items = self.items.get(stream)?;
        let at = items.partition_point(|i| i.start <= time);
        at.checked_sub(1).map(|i| items[i])
    }

    fn nearest_at_or_after(&self, stream: usize, time: TimeUnit) -> Option<StreamDataItem> {
        let items = self.items.get(stream)?;
        let at = items.partition_point(|i| i.start < time);
        items.get(at).copied()
    }

    fn data_count(&self, stream: usize) -> usize {
        self.items.get(stream).map_or(0, |i| i.len())
    }

    fn time_range(&self) -> Option<(TimeUnit, TimeUnit)> {
        let mut range: Option<(TimeUnit, TimeUnit)> = None;
        for items in &self.items {
            for item in items {
                range = Some(match range {
                    None => (item.start, item.end),
                    Some((min, max)) => (min.min(item.start), max.max(item.end)),
                });
            }
        }
        range
    }
}
