//! Scrawl doodling core - stroke capture, recording, and replay
//!
//! This crate provides the core pieces of the scrawl doodling system:
//! - [`types::Command`] - The four drawing primitives a doodle is made of
//! - [`record`] - Stroke recorder producing the compact text encoding
//! - [`replay`] - Decoder and [`replay::Robot`] replay engine
//! - [`surface`] - The drawing-surface contract and a call-tracing surface
//! - [`raster`] - CPU RGBA raster surface (headless canvas)
//! - [`canvas`] - Pen capture pipeline feeding surface and recorder
//! - [`export`] - Luminance/PNG pixel export
//! - [`registry`] - Id-keyed robot registry for embedders

pub mod canvas;
pub mod constants;
pub mod export;
pub mod raster;
pub mod record;
pub mod registry;
pub mod replay;
pub mod surface;
pub mod types;

pub use canvas::*;
pub use constants::*;
pub use export::*;
pub use raster::*;
pub use record::*;
pub use registry::*;
pub use replay::*;
pub use surface::*;
pub use types::*;
