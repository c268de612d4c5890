//! Output file generation

pub mod qrc;

pub use qrc::{render_qrc, write_qrc};
