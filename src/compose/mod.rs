// SPDX-License-Identifier: MPL-2.0
//! The composition pipeline: declarative scene model, scene-to-SVG markup
//! generation, and the rasterization boundary that turns markup into pixels.
//!
//! `scene` is pure data, `markup` is a pure string transformation, and
//! `raster` isolates the one external collaborator (resvg) behind a trait.

pub mod markup;
pub mod placeholder;
pub mod raster;
pub mod scene;

pub use markup::{document, ImageQuality};
pub use raster::{Bitmap, Rasterizer, SvgRasterizer};
pub use scene::{Scene, SlotKind};
