//! Configuration de l'émulateur

use serde::{Deserialize, Serialize};
use anyhow::Result;
use std::fs;

/// Configuration principale
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmulatorConfig {
    pub machine: MachineConfig,
    pub roms: RomConfig,
    pub debug: DebugConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Nom court du jeu ("liberatr", "killcom", "megatack", "kaos", "challeng")
    pub game: String,
}

/// Emplacement des images de la planète Liberator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RomConfig {
    pub search_paths: Vec<String>,
    /// Les quatre banques de 4 Ko de la ROM image, dans l'ordre des adresses
    pub planet_banks: [String; 4],
    pub latitude_prom: String,
    pub longitude_prom: String,
    /// CRC32 attendus (optionnels), dans l'ordre banques puis PROMs
    #[serde(default)]
    pub expected_crc32: Vec<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Trace les écritures de registres ignorées par le décodage matériel
    pub log_ignored_writes: bool,
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        Self {
            machine: MachineConfig {
                game: "liberatr".to_string(),
            },
            roms: RomConfig {
                search_paths: vec!["./roms".to_string(), "./".to_string()],
                planet_banks: [
                    "planet0.bin".to_string(),
                    "planet1.bin".to_string(),
                    "planet2.bin".to_string(),
                    "planet3.bin".to_string(),
                ],
                latitude_prom: "latitude.prom".to_string(),
                longitude_prom: "longitude.prom".to_string(),
                expected_crc32: Vec::new(),
            },
            debug: DebugConfig {
                log_ignored_writes: false,
            },
        }
    }
}

impl EmulatorConfig {
    pub fn load_from_file(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: EmulatorConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &str) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    pub fn load_or_default(path: &str) -> Self {
        Self::load_from_file(path).unwrap_or_default()
    }
}
