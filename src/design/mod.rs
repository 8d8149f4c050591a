//! The holder design: parameters, assembly and export.

pub mod assembly;
pub mod export;
pub mod params;

pub use assembly::{Assembly, holder};
pub use export::{ExportReport, OUTPUT_FILE, export_holder, render, render_stl, scaled_holder};
pub use params::{HolderParams, Variant};
