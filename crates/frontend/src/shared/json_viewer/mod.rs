mod widget;

pub use widget::JsonViewer;
