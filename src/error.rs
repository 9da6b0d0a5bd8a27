//! Erreurs du cœur vidéo

use thiserror::Error;

/// Erreurs remontées par la bibliothèque
#[derive(Debug, Error)]
pub enum CoreError {
    /// Échec d'allocation pendant la construction des planètes (fatal)
    #[error("échec d'allocation de la planète {variant} à la longitude {longitude}")]
    PlanetAllocation { variant: usize, longitude: usize },

    /// Image ROM de taille inattendue
    #[error("taille incorrecte pour {name}: attendu {expected} octets, trouvé {found} octets")]
    RomSize {
        name: String,
        expected: usize,
        found: usize,
    },

    /// CRC32 différent de la valeur configurée
    #[error("CRC32 incorrect pour {name}: attendu {expected:#010x}, trouvé {found:#010x}")]
    RomChecksum { name: String, expected: u32, found: u32 },

    /// Fichier ROM absent de tous les chemins de recherche
    #[error("ROM introuvable: {0}")]
    RomNotFound(String),

    /// Nom de jeu non reconnu
    #[error("jeu non reconnu: {0}")]
    UnknownGame(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Résultat spécialisé de la bibliothèque
pub type CoreResult<T> = std::result::Result<T, CoreError>;
