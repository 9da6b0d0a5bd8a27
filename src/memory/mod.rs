//! Interfaces mémoire du cœur vidéo
//!
//! Les circuits émulés ici ne sont vus par les CPU qu'au travers de
//! registres 8 bits adressés par un offset, plus la mémoire vidéo
//! d'occlusion partagée entre le bitmap et le moteur de planète.

pub mod interface;
pub mod video_ram;

pub use interface::*;
pub use video_ram::*;
