pub mod datasource;
pub mod state;
pub mod stream;
pub mod time;

pub use datasource::{DataBridge, VecDataBridge};
pub use state::{DragMeta, VisibleWindow};
pub use stream::{DataState, DragHandler, MenuProvider, StreamAndTime, StreamDataItem, StreamMeta};
pub use time::TimeUnit;
