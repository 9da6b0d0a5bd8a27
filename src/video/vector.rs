//! Processeur de tracé GamePlan
//!
//! Quatre registres d'écriture pilotent un curseur :
//!
//! | Offset | Rôle |
//! |--------|------|
//! | 0 | sélection du mode pour l'offset 1 |
//! | 1 | mode 0 : déplacement + tracé, mode 1 : X, mode 2 : Y, mode 3 : effacement |
//! | 2 | 7 : mémorise la couleur courante comme couleur d'effacement |
//! | 3 | mode 0 : couleur courante, sinon demande de couleur inhabituelle |
//!
//! Les combinaisons non décodées sont ignorées sans erreur, comme sur la
//! carte réelle.

use log::trace;

use super::quirks::VariantQuirks;
use super::surface::{Display, PenSurface};
use crate::memory::RegisterInterface;
use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Nombre de stylos de la carte GamePlan
pub const GAMEPLAN_PENS: usize = 8;

/// État des registres du processeur de tracé
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawState {
    /// `None` tant que le programme n'a pas écrit l'offset 0
    pub mode: Option<u8>,
    pub x: u8,
    pub y: u8,
    pub color: u8,
    pub clear_color: u8,
    /// Couleur d'effacement imposée par une demande inhabituelle
    pub clear_override: Option<u8>,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            mode: None,
            x: 0,
            y: 0,
            color: 7,
            clear_color: 0,
            clear_override: None,
        }
    }
}

/// Machine à registres de tracé
#[derive(Debug, Clone)]
pub struct VectorDrawEngine<D: Display = PenSurface> {
    state: DrawState,
    quirks: VariantQuirks,
    bitmap: PenSurface,
    display: D,
    log_ignored_writes: bool,
}

impl VectorDrawEngine<PenSurface> {
    pub fn new(quirks: VariantQuirks) -> Self {
        Self::with_display(quirks, PenSurface::new(SCREEN_WIDTH, SCREEN_HEIGHT))
    }
}

impl<D: Display> VectorDrawEngine<D> {
    pub fn with_display(quirks: VariantQuirks, display: D) -> Self {
        Self {
            state: DrawState::default(),
            quirks,
            bitmap: PenSurface::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            display,
            log_ignored_writes: false,
        }
    }

    /// Active la trace des écritures ignorées (désactivée par défaut)
    pub fn set_log_ignored_writes(&mut self, enabled: bool) {
        self.log_ignored_writes = enabled;
    }

    pub fn state(&self) -> &DrawState {
        &self.state
    }

    pub fn quirks(&self) -> VariantQuirks {
        self.quirks
    }

    /// Bitmap de travail
    pub fn bitmap(&self) -> &PenSurface {
        &self.bitmap
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Remplit bitmap et affichage avec la couleur d'effacement, puis
    /// libère la couleur imposée.
    pub fn clear_screen(&mut self) {
        let pen = self.state.clear_color;
        self.bitmap.fill(pen);
        self.display.fill(pen);
        self.state.clear_override = None;
    }

    fn plot(&mut self) {
        let (x, y) = (self.state.x as usize, self.state.y as usize);
        self.bitmap.set_pixel(x, y, self.state.color);
        self.display.set_pixel(x, y, self.state.color);
    }

    fn draw_command(&mut self, data: u8) {
        if self.quirks.contains(VariantQuirks::KAOS_COLOUR_IN_MOVE) {
            self.state.color = !data & 0x07;
        }

        if data & 0x20 != 0 {
            self.state.y = if data & 0x80 != 0 {
                self.state.y.wrapping_sub(1)
            } else {
                self.state.y.wrapping_add(1)
            };
        }
        if data & 0x10 != 0 {
            self.state.x = if data & 0x40 != 0 {
                self.state.x.wrapping_sub(1)
            } else {
                self.state.x.wrapping_add(1)
            };
        }

        self.plot();
    }

    fn ignore(&self, offset: u16, data: u8) {
        if self.log_ignored_writes {
            trace!(
                "tracé: écriture ignorée offset {} = {:02x} (mode {:?})",
                offset,
                data,
                self.state.mode
            );
        }
    }
}

impl<D: Display> RegisterInterface for VectorDrawEngine<D> {
    /// Les registres de tracé sont en écriture seule
    fn read(&mut self, _offset: u16) -> u8 {
        0
    }

    fn write(&mut self, offset: u16, data: u8) {
        match offset {
            0 => self.state.mode = Some(data),
            1 => match self.state.mode {
                Some(0) | Some(3) if data == 0 => self.clear_screen(),
                Some(0) => self.draw_command(data),
                Some(1) => self.state.x = data,
                Some(2) => self.state.y = data,
                _ => self.ignore(offset, data),
            },
            2 if data == 7 => {
                // Sur Megatack, une couleur imposée masque la mémorisation normale
                let masked = self.quirks.contains(VariantQuirks::FIX_CLEAR_COLOUR)
                    && self.state.clear_override.is_some();
                if !masked {
                    self.state.clear_color = self.state.color;
                }
            }
            3 if self.state.mode == Some(0) => self.state.color = data & 0x07,
            3 if data & 0xF8 == 0xF8 && data != 0xFF => {
                let colour = data & 0x07;
                self.state.clear_color = colour;
                self.state.clear_override = Some(colour);
            }
            _ => self.ignore(offset, data),
        }
    }
}
