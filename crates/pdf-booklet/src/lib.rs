mod config;
pub mod constants;
pub mod filter;
pub mod impose;
pub mod layout;
mod stats;
mod types;

pub use config::{ImpositionConfig, resolve};
pub use impose::{
    assemble, compose, faces, impose, load_page_numbers, load_pdf, page_numbers, page_order,
};
pub use layout::{GridPosition, PageSlot, SheetSide, Signature, SlotSource};
pub use stats::calculate_statistics;
pub use types::*;
