//! Utility modules

pub mod text;

pub use text::{
    byte_col_to_visual_col, display_line, is_boundary, next_boundary, prev_boundary,
    snap_to_boundary, visual_col_to_byte_col, TABULATOR_WIDTH,
};
