//! Images de planète synthétiques
//!
//! Générées de façon déterministe pour les tests, les benchmarks et la
//! démonstration en ligne de commande quand les vraies ROMs sont absentes.
//! Les longueurs de segments sont cumulatives et les PROMs monotones, comme
//! sur le matériel, ce qui donne des lignes sans retour en arrière.

use super::{PlanetRoms, LATITUDE_PROM_SIZE, LONGITUDE_PROM_SIZE, PLANET_IMAGE_SIZE};
use crate::error::CoreResult;
use crate::{PLANET_LATITUDES, PLANET_SEGMENTS};
use std::f64::consts::PI;

/// Encode un descripteur (couleur 4 bits, longueur 9 bits) au format ROM
pub fn encode_descriptor(color: u8, length: u16) -> u16 {
    let length = length & 0x1FF;
    ((length & 1) << 15) | (((color & 0x0F) as u16) << 8) | (length >> 1)
}

/// Couleur du segment brut : les paires de segments partagent une couleur
pub fn synthetic_color(latitude: usize, segment: usize) -> u8 {
    ((segment / 2 + latitude / 16) & 0x0F) as u8
}

/// Longueur cumulative du segment brut
pub fn synthetic_length(latitude: usize, segment: usize) -> u16 {
    (16 * segment + (latitude & 7)) as u16
}

/// ROM image synthétique : même relief pour les deux planètes, couleurs décalées
pub fn planet_image() -> Vec<u8> {
    let mut image = vec![0u8; PLANET_IMAGE_SIZE];

    for latitude in 0..PLANET_LATITUDES {
        for segment in 0..PLANET_SEGMENTS {
            let address = (latitude << 5) + segment;
            let length = synthetic_length(latitude, segment);

            // Planète 1 : banques 0/1, planète 0 : banques 2/3
            let planet1 = encode_descriptor(synthetic_color(latitude, segment), length);
            let planet0 = encode_descriptor(synthetic_color(latitude, segment) ^ 0x03, length);

            image[address] = (planet1 >> 8) as u8;
            image[0x1000 + address] = planet1 as u8;
            image[0x2000 + address] = (planet0 >> 8) as u8;
            image[0x3000 + address] = planet0 as u8;
        }
    }

    image
}

/// PROM de latitude : profil circulaire
pub fn latitude_prom() -> Vec<u8> {
    (0..LATITUDE_PROM_SIZE)
        .map(|l| ((PI * (l as f64 + 0.5) / LATITUDE_PROM_SIZE as f64).sin() * 255.0).round() as u8)
        .collect()
}

/// PROM de longitude : projection d'un hémisphère, croissante
pub fn longitude_prom() -> Vec<u8> {
    (0..LONGITUDE_PROM_SIZE)
        .map(|i| ((1.0 - (PI * i as f64 / LONGITUDE_PROM_SIZE as f64).cos()) * 127.5).round() as u8)
        .collect()
}

/// Ensemble complet et valide
pub fn planet_roms() -> CoreResult<PlanetRoms> {
    PlanetRoms::new(planet_image(), latitude_prom(), longitude_prom())
}
