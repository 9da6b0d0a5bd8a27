//! Carte vidéo Liberator

use log::info;

use crate::config::EmulatorConfig;
use crate::error::CoreResult;
use crate::memory::RegisterInterface;
use crate::rom::{PlanetRoms, RomLoader};
use crate::video::{BitmapIo, Display, PenSurface, PlanetRenderer, BASE_RAM_SIZE};

/// Bitmap de premier plan, planète en arrière-plan et leurs registres
#[derive(Debug, Clone)]
pub struct LiberatorVideo {
    bitmap: BitmapIo<PenSurface>,
    planet: PlanetRenderer,
    base_ram: [u8; BASE_RAM_SIZE],
    planet_frame: u8,
    planet_select: u8,
}

impl LiberatorVideo {
    /// Précalcule les planètes ; toute erreur interrompt le démarrage
    pub fn new(roms: &PlanetRoms) -> CoreResult<Self> {
        Ok(Self {
            bitmap: BitmapIo::new(),
            planet: PlanetRenderer::new(roms)?,
            base_ram: [0; BASE_RAM_SIZE],
            planet_frame: 0,
            planet_select: 0,
        })
    }

    /// Charge les ROMs désignées par la configuration puis initialise la carte
    pub fn from_config(config: &EmulatorConfig) -> CoreResult<Self> {
        let loader = RomLoader::from_config(&config.roms);
        let roms = loader.load_planet_roms(&config.roms)?;
        let video = Self::new(&roms)?;
        info!("Carte vidéo Liberator prête");
        Ok(video)
    }

    /// Registre de longitude de la planète
    pub fn write_planet_frame(&mut self, data: u8) {
        self.planet_frame = data;
    }

    /// Registre de sélection ; seul le bit 4 choisit la planète
    pub fn write_planet_select(&mut self, data: u8) {
        self.planet_select = data;
    }

    pub fn write_base_ram(&mut self, offset: u16, data: u8) {
        self.base_ram[offset as usize & (BASE_RAM_SIZE - 1)] = data;
    }

    pub fn planet_frame(&self) -> u8 {
        self.planet_frame
    }

    /// Planète affichée (0 ou 1)
    pub fn planet_index(&self) -> usize {
        ((self.planet_select >> 4) & 0x01) as usize
    }

    pub fn base_ram(&self) -> &[u8; BASE_RAM_SIZE] {
        &self.base_ram
    }

    pub fn bitmap(&self) -> &BitmapIo<PenSurface> {
        &self.bitmap
    }

    pub fn bitmap_mut(&mut self) -> &mut BitmapIo<PenSurface> {
        &mut self.bitmap
    }

    pub fn planet(&self) -> &PlanetRenderer {
        &self.planet
    }

    /// Redessin complet du bitmap (après changement de palette)
    pub fn refresh_bitmap(&mut self) {
        self.bitmap.refresh();
    }

    /// Compose l'image : copie du bitmap puis planète sous le premier plan
    pub fn update_screen<D: Display + ?Sized>(&self, screen: &mut D) {
        screen.copy_from(self.bitmap.display());
        self.planet.render(
            self.planet_index(),
            self.planet_frame,
            &self.base_ram,
            self.bitmap.video(),
            screen,
        );
    }
}

impl RegisterInterface for LiberatorVideo {
    fn read(&mut self, offset: u16) -> u8 {
        self.bitmap.read(offset)
    }

    fn write(&mut self, offset: u16, data: u8) {
        self.bitmap.write(offset, data);
    }
}
