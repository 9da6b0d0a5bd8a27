//! Chargement des ROMs depuis le disque

use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::validation::RomValidator;
use super::PlanetRoms;
use crate::config::RomConfig;
use crate::error::{CoreError, CoreResult};

/// Chargeur de ROMs
pub struct RomLoader {
    search_paths: Vec<PathBuf>,
}

impl RomLoader {
    pub fn new() -> Self {
        Self {
            search_paths: vec![PathBuf::from("./roms"), PathBuf::from("./")],
        }
    }

    /// Crée un chargeur avec les chemins de la configuration
    pub fn from_config(config: &RomConfig) -> Self {
        Self {
            search_paths: config.search_paths.iter().map(PathBuf::from).collect(),
        }
    }

    pub fn add_search_path<P: AsRef<Path>>(&mut self, path: P) {
        self.search_paths.push(path.as_ref().to_path_buf());
    }

    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Recherche un fichier ROM dans les chemins configurés
    pub fn find_rom_file(&self, filename: &str) -> CoreResult<PathBuf> {
        for search_path in &self.search_paths {
            if !search_path.exists() {
                continue;
            }

            // Recherche directe
            let direct_path = search_path.join(filename);
            if direct_path.is_file() {
                return Ok(direct_path);
            }

            // Recherche récursive
            for entry in WalkDir::new(search_path).max_depth(3).into_iter().flatten() {
                if entry.file_type().is_file() && entry.file_name().to_string_lossy() == filename {
                    return Ok(entry.into_path());
                }
            }
        }

        Err(CoreError::RomNotFound(filename.to_string()))
    }

    /// Charge une image brute
    pub fn load_file(&self, filename: &str) -> CoreResult<Vec<u8>> {
        let path = self.find_rom_file(filename)?;
        let data = fs::read(&path)?;
        debug!(
            "ROM {} chargée depuis {}: {} octets, CRC32 {:08x}",
            filename,
            path.display(),
            data.len(),
            RomValidator::calculate_crc32(&data)
        );
        Ok(data)
    }

    /// Charge les quatre banques et les deux PROMs de la planète
    pub fn load_planet_roms(&self, config: &RomConfig) -> CoreResult<PlanetRoms> {
        let names: Vec<&str> = config
            .planet_banks
            .iter()
            .map(String::as_str)
            .chain([config.latitude_prom.as_str(), config.longitude_prom.as_str()])
            .collect();

        let mut images = Vec::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            let data = self.load_file(name)?;
            if let Some(&expected) = config.expected_crc32.get(i) {
                RomValidator::check_crc32(name, &data, expected)?;
            }
            images.push(data);
        }

        let longitude_scale = images.pop().unwrap_or_default();
        let latitude_scale = images.pop().unwrap_or_default();
        let roms = PlanetRoms::from_banks(
            [
                images[0].as_slice(),
                images[1].as_slice(),
                images[2].as_slice(),
                images[3].as_slice(),
            ],
            latitude_scale,
            longitude_scale,
        )?;

        info!("ROMs de la planète chargées ({} fichiers)", names.len());
        Ok(roms)
    }
}

impl Default for RomLoader {
    fn default() -> Self {
        Self::new()
    }
}
