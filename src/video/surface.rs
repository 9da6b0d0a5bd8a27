//! Surface d'affichage indexée par stylo

use anyhow::Result;
use image::{Rgb, RgbImage};
use std::path::Path;

/// Surface d'affichage externe.
///
/// Le cœur ne manipule que des index de stylo ; la conversion en RGB est à
/// la charge de la palette de l'émulateur hôte.
pub trait Display {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    /// Écrit un pixel. Les coordonnées hors surface sont ignorées.
    fn set_pixel(&mut self, x: usize, y: usize, pen: u8);

    /// Remplit toute la surface avec un stylo
    fn fill(&mut self, pen: u8);

    /// Recopie une surface source (équivalent d'un copybitmap)
    fn copy_from(&mut self, source: &PenSurface) {
        for y in 0..source.height().min(self.height()) {
            for x in 0..source.width().min(self.width()) {
                if let Some(pen) = source.pixel(x, y) {
                    self.set_pixel(x, y, pen);
                }
            }
        }
    }
}

/// Tampon de stylos en mémoire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PenSurface {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl PenSurface {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
        }
    }

    /// Stylo en (x, y), `None` hors surface
    pub fn pixel(&self, x: usize, y: usize) -> Option<u8> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Convertit la surface en image RGB ; un stylo hors palette donne du noir
    pub fn to_rgb_image(&self, palette: &[[u8; 3]]) -> RgbImage {
        RgbImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            let pen = self.pixels[y as usize * self.width + x as usize];
            Rgb(palette.get(pen as usize).copied().unwrap_or([0, 0, 0]))
        })
    }

    /// Sauvegarde une capture PNG
    pub fn save_png<P: AsRef<Path>>(&self, path: P, palette: &[[u8; 3]]) -> Result<()> {
        self.to_rgb_image(palette).save(path)?;
        Ok(())
    }
}

impl Display for PenSurface {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn set_pixel(&mut self, x: usize, y: usize, pen: u8) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = pen;
        }
    }

    fn fill(&mut self, pen: u8) {
        self.pixels.fill(pen);
    }

    fn copy_from(&mut self, source: &PenSurface) {
        if source.width == self.width && source.height == self.height {
            self.pixels.copy_from_slice(&source.pixels);
        } else {
            for y in 0..source.height.min(self.height) {
                let src = &source.pixels[y * source.width..][..source.width.min(self.width)];
                self.pixels[y * self.width..][..src.len()].copy_from_slice(src);
            }
        }
    }
}

/// Palette de débogage : 32 niveaux de gris
pub fn debug_palette() -> Vec<[u8; 3]> {
    (0..32u32)
        .map(|pen| {
            let level = (pen * 255 / 31) as u8;
            [level, level, level]
        })
        .collect()
}
