pub mod config;
pub mod icons;
pub mod json_viewer;
