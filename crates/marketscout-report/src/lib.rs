pub mod render;

pub use render::{render, report_filename};
