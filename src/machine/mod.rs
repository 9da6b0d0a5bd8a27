//! Cartes vidéo assemblées
//!
//! Regroupe les composants tels que les voient les pilotes de machine :
//! la carte Liberator (bitmap + planète) et la carte GamePlan (tracé +
//! liaison son).

pub mod liberator;
pub mod gameplan;

pub use liberator::*;
pub use gameplan::*;
