//! Layout planning for booklet ordering
//!
//! This module handles everything between the configuration and the
//! composer:
//! - Face grid dimensions
//! - Sheet/signature capacity and blank padding
//! - Splitting the padded page list into signatures

mod grid;
mod padding;
mod signature;
mod types;

pub use grid::*;
pub use padding::*;
pub use signature::*;
pub use types::*;
