//! Liaison entre le CPU de jeu et le CPU son
//!
//! La carte GamePlan ne partage aucune mémoire entre ses deux CPU : les
//! commandes sonores passent par un verrou de requête et un verrou
//! d'acquittement portés par des VIA 6522.

pub mod mailbox;

pub use mailbox::*;
