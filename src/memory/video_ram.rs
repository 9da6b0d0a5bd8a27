//! Mémoire vidéo d'occlusion

use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Grille largeur×hauteur contenant le dernier octet de commande écrit
/// pour chaque pixel.
///
/// Distincte de la surface affichée : elle sert uniquement à savoir si un
/// pixel de premier plan a déjà été dessiné. Les coordonnées hors grille
/// sont une violation de contrat et provoquent une panique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoMemory {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl VideoMemory {
    /// Crée une mémoire vidéo vide de la taille spécifiée
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Octet d'occlusion en (x, y)
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[self.index(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        let index = self.index(x, y);
        self.data[index] = value;
    }

    /// Indique si du premier plan occupe déjà le pixel
    pub fn is_drawn(&self, x: usize, y: usize) -> bool {
        self.get(x, y) != 0
    }

    /// Efface toute la mémoire
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Accès brut, ligne par ligne
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "coordonnées hors mémoire vidéo: ({}, {}) pour {}x{}",
            x,
            y,
            self.width,
            self.height
        );
        y * self.width + x
    }
}

impl Default for VideoMemory {
    fn default() -> Self {
        Self::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}
