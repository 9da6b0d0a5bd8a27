//! Pixel Arcade Raster - cœur vidéo Liberator / GamePlan
//!
//! Cette bibliothèque émule les circuits vidéo bitmap de deux familles de
//! bornes d'arcade : le moteur de planète précalculée de Liberator (Atari) et
//! le processeur de tracé vectoriel GamePlan, ainsi que la boîte aux lettres
//! qui relie le CPU de jeu au CPU son.

pub mod error;
pub mod config;
pub mod memory;
pub mod rom;
pub mod video;
pub mod audio;
pub mod machine;

pub use error::*;
pub use config::*;
pub use memory::*;
pub use rom::*;
pub use video::*;
pub use audio::*;
pub use machine::*;

/// Version de la bibliothèque
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Largeur de l'écran bitmap en pixels
pub const SCREEN_WIDTH: usize = 256;

/// Hauteur de l'écran bitmap en pixels
pub const SCREEN_HEIGHT: usize = 256;

/// Nombre de latitudes (lignes) d'une image de planète
pub const PLANET_LATITUDES: usize = 128;

/// Nombre de longitudes (angles de rotation) précalculées par planète
pub const PLANET_LONGITUDES: usize = 256;

/// Nombre de segments bruts par latitude dans la ROM image
pub const PLANET_SEGMENTS: usize = 32;

/// Première ligne écran occupée par la planète
pub const PLANET_TOP_LINE: usize = 64;
