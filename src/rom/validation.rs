//! Validation des images ROM

use crate::error::{CoreError, CoreResult};
use crc32fast::Hasher;

/// Validateur de ROMs
pub struct RomValidator;

impl RomValidator {
    /// Vérifie qu'une image a exactement la taille attendue
    pub fn check_size(name: &str, data: &[u8], expected: usize) -> CoreResult<()> {
        if data.len() != expected {
            return Err(CoreError::RomSize {
                name: name.to_string(),
                expected,
                found: data.len(),
            });
        }
        Ok(())
    }

    /// Compare le CRC32 d'une image à la valeur attendue
    pub fn check_crc32(name: &str, data: &[u8], expected: u32) -> CoreResult<()> {
        let found = Self::calculate_crc32(data);
        if found != expected {
            return Err(CoreError::RomChecksum {
                name: name.to_string(),
                expected,
                found,
            });
        }
        Ok(())
    }

    /// Calcule le checksum CRC32
    pub fn calculate_crc32(data: &[u8]) -> u32 {
        let mut hasher = Hasher::new();
        hasher.update(data);
        hasher.finalize()
    }
}
