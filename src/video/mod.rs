//! Circuits vidéo bitmap
//!
//! - Liberator : RAM bitmap à quatre pixels par octet, registres X/Y et
//!   planète tournante précalculée
//! - GamePlan : processeur de tracé piloté par quatre registres

pub mod surface;
pub mod bitmap;
pub mod planet;
pub mod quirks;
pub mod vector;

pub use surface::*;
pub use bitmap::*;
pub use planet::*;
pub use quirks::*;
pub use vector::*;
