//! Images ROM et PROM de la planète Liberator
//!
//! La ROM image fait 16 Ko répartis en quatre banques de 4 Ko. Chaque
//! descripteur de segment occupe 16 bits : l'octet fort vient d'une banque,
//! l'octet faible de la banque suivante. Deux PROMs de mise à l'échelle
//! complètent l'ensemble (latitude : 128 octets, longitude : 256 octets).

pub mod loader;
pub mod synthetic;
pub mod validation;

pub use loader::*;
pub use validation::*;

use crate::error::CoreResult;

/// Taille totale de la ROM image de la planète
pub const PLANET_IMAGE_SIZE: usize = 0x4000;

/// Taille d'une banque de la ROM image
pub const PLANET_BANK_SIZE: usize = 0x1000;

/// Taille de la PROM d'échelle des latitudes
pub const LATITUDE_PROM_SIZE: usize = 128;

/// Taille de la PROM d'échelle des longitudes
pub const LONGITUDE_PROM_SIZE: usize = 256;

/// Ensemble immuable des images nécessaires à la construction des planètes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanetRoms {
    image: Vec<u8>,
    latitude_scale: Vec<u8>,
    longitude_scale: Vec<u8>,
}

impl PlanetRoms {
    /// Construit l'ensemble après vérification des tailles
    pub fn new(image: Vec<u8>, latitude_scale: Vec<u8>, longitude_scale: Vec<u8>) -> CoreResult<Self> {
        RomValidator::check_size("planet image", &image, PLANET_IMAGE_SIZE)?;
        RomValidator::check_size("latitude prom", &latitude_scale, LATITUDE_PROM_SIZE)?;
        RomValidator::check_size("longitude prom", &longitude_scale, LONGITUDE_PROM_SIZE)?;

        Ok(Self {
            image,
            latitude_scale,
            longitude_scale,
        })
    }

    /// Assemble la ROM image à partir de ses quatre banques
    pub fn from_banks(banks: [&[u8]; 4], latitude_scale: Vec<u8>, longitude_scale: Vec<u8>) -> CoreResult<Self> {
        let mut image = Vec::with_capacity(PLANET_IMAGE_SIZE);
        for (i, bank) in banks.iter().enumerate() {
            RomValidator::check_size(&format!("planet bank {}", i), bank, PLANET_BANK_SIZE)?;
            image.extend_from_slice(bank);
        }
        Self::new(image, latitude_scale, longitude_scale)
    }

    pub fn image(&self) -> &[u8] {
        &self.image
    }

    pub fn latitude_scale(&self) -> &[u8] {
        &self.latitude_scale
    }

    pub fn longitude_scale(&self) -> &[u8] {
        &self.longitude_scale
    }

    /// Lit le descripteur 16 bits d'un segment brut.
    ///
    /// La planète 1 utilise les banques 0 et 1, la planète 0 les banques 2 et 3.
    pub fn descriptor(&self, variant: usize, latitude: usize, segment: usize) -> u16 {
        let address = (latitude << 5) + segment;
        let (high_bank, low_bank) = if variant != 0 {
            (0x0000, 0x1000)
        } else {
            (0x2000, 0x3000)
        };

        ((self.image[high_bank + address] as u16) << 8) | self.image[low_bank + address] as u16
    }
}
