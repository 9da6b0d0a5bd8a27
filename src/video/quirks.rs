//! Variantes matérielles de la carte GamePlan

use bitflags::bitflags;
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

bitflags! {
    /// Particularités de décodage propres à certains jeux
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct VariantQuirks: u8 {
        /// Les bits 0-2 inversés d'une commande de tracé deviennent la couleur courante
        const KAOS_COLOUR_IN_MOVE = 0x01;
        /// La couleur imposée par l'offset 3 masque la mémorisation de l'offset 2
        const FIX_CLEAR_COLOUR = 0x02;
    }
}

/// Jeux tournant sur la carte GamePlan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePlanVariant {
    KillerComet,
    Megatack,
    Kaos,
    Challenger,
}

impl GamePlanVariant {
    pub const ALL: [GamePlanVariant; 4] = [
        GamePlanVariant::KillerComet,
        GamePlanVariant::Megatack,
        GamePlanVariant::Kaos,
        GamePlanVariant::Challenger,
    ];

    /// Nom court du jeu
    pub fn name(self) -> &'static str {
        match self {
            GamePlanVariant::KillerComet => "killcom",
            GamePlanVariant::Megatack => "megatack",
            GamePlanVariant::Kaos => "kaos",
            GamePlanVariant::Challenger => "challeng",
        }
    }

    pub fn quirks(self) -> VariantQuirks {
        match self {
            GamePlanVariant::Kaos => VariantQuirks::KAOS_COLOUR_IN_MOVE,
            GamePlanVariant::Megatack => VariantQuirks::FIX_CLEAR_COLOUR,
            GamePlanVariant::KillerComet | GamePlanVariant::Challenger => VariantQuirks::empty(),
        }
    }
}

impl FromStr for GamePlanVariant {
    type Err = CoreError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.name() == name)
            .ok_or_else(|| CoreError::UnknownGame(name.to_string()))
    }
}

impl fmt::Display for GamePlanVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
