//! Entrées/sorties du bitmap Liberator
//!
//! Deux chemins d'écriture coexistent : l'écriture groupée, où un octet de
//! la RAM bitmap fixe quatre pixels adjacents, et l'écriture pixel par
//! pixel au travers des registres de coordonnées X/Y.

use super::surface::{Display, PenSurface};
use crate::memory::{RegisterInterface, VideoMemory};
use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Taille de la RAM bitmap (64 octets par ligne, 256 lignes)
pub const BITMAP_RAM_SIZE: usize = 0x4000;

/// Premier stylo utilisé par les pixels du bitmap
pub const BITMAP_PEN_BASE: u8 = 0x10;

/// Offset du registre X sur le port de coordonnées
pub const PORT_CURSOR_X: u16 = 0;

/// Offset du registre Y sur le port de coordonnées
pub const PORT_CURSOR_Y: u16 = 1;

/// Offset de la donnée pixel adressée par X/Y
pub const PORT_CURSOR_DATA: u16 = 2;

/// Registres de coordonnées (octets matériels, le débordement est visible du programme)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorRegisters {
    pub x: u8,
    pub y: u8,
}

/// Interface bitmap : RAM brute, mémoire d'occlusion et surface de stylos
#[derive(Debug, Clone)]
pub struct BitmapIo<D: Display = PenSurface> {
    bitmap_ram: Vec<u8>,
    video: VideoMemory,
    display: D,
    pub cursor: CursorRegisters,
}

impl BitmapIo<PenSurface> {
    pub fn new() -> Self {
        Self::with_display(PenSurface::new(SCREEN_WIDTH, SCREEN_HEIGHT))
    }
}

impl Default for BitmapIo<PenSurface> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Display> BitmapIo<D> {
    /// Crée l'interface autour d'une surface fournie par l'hôte
    pub fn with_display(display: D) -> Self {
        Self {
            bitmap_ram: vec![0; BITMAP_RAM_SIZE],
            video: VideoMemory::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            display,
            cursor: CursorRegisters::default(),
        }
    }

    /// Primitive pixel : mémorise l'octet d'occlusion et pousse le stylo
    pub fn write_pixel(&mut self, x: u8, y: u8, data: u8) {
        let (x, y) = (x as usize, y as usize);
        self.video.set(x, y, data & 0xE0);
        self.display.set_pixel(x, y, (data >> 5) + BITMAP_PEN_BASE);
    }

    /// Écriture groupée : un octet colore quatre pixels horizontaux.
    ///
    /// L'offset est replié sur la taille de la RAM bitmap.
    pub fn write_packed(&mut self, offset: u16, data: u8) {
        let offset = offset as usize & (BITMAP_RAM_SIZE - 1);
        self.bitmap_ram[offset] = data;

        let x = ((offset & 0x3F) << 2) as u8;
        let y = (offset >> 6) as u8;
        for dx in 0..4 {
            self.write_pixel(x + dx, y, data);
        }
    }

    /// Relit l'octet brut de la RAM bitmap
    pub fn read_packed(&self, offset: u16) -> u8 {
        self.bitmap_ram[offset as usize & (BITMAP_RAM_SIZE - 1)]
    }

    pub fn write_at_cursor(&mut self, data: u8) {
        self.write_pixel(self.cursor.x, self.cursor.y, data);
    }

    /// Octet d'occlusion sous le curseur
    pub fn read_at_cursor(&self) -> u8 {
        self.video.get(self.cursor.x as usize, self.cursor.y as usize)
    }

    /// Redessine tout l'écran en rejouant lecture puis écriture sous le
    /// curseur, comme après un changement de palette.
    pub fn refresh(&mut self) {
        let saved = self.cursor;
        for y in 0..=255u8 {
            for x in 0..=255u8 {
                self.cursor = CursorRegisters { x, y };
                let data = self.read_at_cursor();
                self.write_at_cursor(data);
            }
        }
        self.cursor = saved;
    }

    pub fn video(&self) -> &VideoMemory {
        &self.video
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn bitmap_ram(&self) -> &[u8] {
        &self.bitmap_ram
    }
}

/// Décodage Liberator : X, Y et donnée pixel aux trois premiers offsets,
/// RAM bitmap groupée sur le reste de l'espace.
impl<D: Display> RegisterInterface for BitmapIo<D> {
    fn read(&mut self, offset: u16) -> u8 {
        match offset {
            PORT_CURSOR_DATA => self.read_at_cursor(),
            _ => self.read_packed(offset),
        }
    }

    fn write(&mut self, offset: u16, data: u8) {
        match offset {
            PORT_CURSOR_X => self.cursor.x = data,
            PORT_CURSOR_Y => self.cursor.y = data,
            PORT_CURSOR_DATA => self.write_at_cursor(data),
            _ => self.write_packed(offset, data),
        }
    }
}
