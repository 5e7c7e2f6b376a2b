pub mod json_highlight;
