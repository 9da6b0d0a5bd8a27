//! Moteur de planète Liberator
//!
//! La planète tournante est entièrement précalculée au démarrage : pour
//! chacune des deux planètes et chacune des 256 longitudes, on décrit les
//! 128 latitudes visibles comme une suite de segments colorés compressés en
//! longueurs de plage. Au rendu, il suffit de parcourir cette description et
//! de peindre les pixels que le bitmap de premier plan n'occupe pas.
//!
//! Format d'une ligne dans le tampon d'une image :
//!
//! | Octet | Contenu |
//! |-------|---------|
//! | 0 | nombre de segments |
//! | 1 | x du bord ouest à l'écran |
//! | 2n+2 | couleur du segment n (4 bits) |
//! | 2n+3 | longueur du segment n en pixels doubles |

use log::info;
use rayon::prelude::*;

use super::surface::Display;
use crate::error::{CoreError, CoreResult};
use crate::memory::VideoMemory;
use crate::rom::PlanetRoms;
use crate::{PLANET_LATITUDES, PLANET_LONGITUDES, PLANET_SEGMENTS, PLANET_TOP_LINE, SCREEN_WIDTH};

/// Nombre de planètes sélectionnables par le bit matériel
pub const PLANET_VARIANTS: usize = 2;

/// Taille de la RAM des bases (une entrée par groupe de 8 latitudes)
pub const BASE_RAM_SIZE: usize = PLANET_LATITUDES / 8;

/// Couleur sentinelle : les deux bits forts à 1 désignent la couleur de base
const BASE_COLOR_MASK: u8 = 0x0C;

/// Segment d'une ligne : couleur et longueur de plage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub color: u8,
    pub run_length: u8,
}

impl Segment {
    /// Indique si le segment prend la couleur du terrain de base
    pub fn uses_base_color(&self) -> bool {
        self.color & BASE_COLOR_MASK == BASE_COLOR_MASK
    }
}

/// Vue d'une ligne sérialisée
#[derive(Debug, Clone, Copy)]
pub struct LineView<'a> {
    pub start_x: u8,
    segments: &'a [u8],
}

impl<'a> LineView<'a> {
    pub fn segment_count(&self) -> usize {
        self.segments.len() / 2
    }

    pub fn segments(&self) -> impl Iterator<Item = Segment> + 'a {
        self.segments.chunks_exact(2).map(|pair| Segment {
            color: pair[0],
            run_length: pair[1],
        })
    }

    /// Largeur totale peinte par la ligne
    pub fn width(&self) -> usize {
        self.segments().map(|s| s.run_length as usize).sum()
    }
}

/// Itérateur sur les lignes d'une image
pub struct Lines<'a> {
    data: &'a [u8],
}

impl<'a> Iterator for Lines<'a> {
    type Item = LineView<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.data.len() < 2 {
            return None;
        }

        let end = 2 + 2 * self.data[0] as usize;
        let line = LineView {
            start_x: self.data[1],
            segments: &self.data[2..end],
        };
        self.data = &self.data[end..];
        Some(line)
    }
}

/// Description précalculée d'une planète pour une longitude
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanetFrame {
    data: Box<[u8]>,
}

impl PlanetFrame {
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn lines(&self) -> Lines<'_> {
        Lines { data: &self.data }
    }

    /// Somme des segments de toutes les lignes
    pub fn total_segments(&self) -> usize {
        self.lines().map(|line| line.segment_count()).sum()
    }
}

/// Ligne en cours de construction, avant sérialisation
#[derive(Debug, Default)]
struct LineBuilder {
    max_x: u8,
    colors: Vec<u8>,
    x_positions: Vec<u8>,
}

impl LineBuilder {
    fn build(roms: &PlanetRoms, variant: usize, longitude: u8, latitude: usize) -> Self {
        let latitude_scale = roms.latitude_scale()[latitude] as u16;

        let mut x_array = [0u8; PLANET_SEGMENTS];
        let mut color_array = [0u8; PLANET_SEGMENTS];
        let mut visible_array = [false; PLANET_SEGMENTS];

        for segment in 0..PLANET_SEGMENTS {
            let planet_data = roms.descriptor(variant, latitude, segment);
            let color = ((planet_data >> 8) & 0x0F) as u8;
            let length = ((planet_data << 1) & 0x1FE) | ((planet_data >> 15) & 0x01);

            // Limite de longitude mise à l'échelle, arrondie sur le bit faible
            let address = longitude as u16 + (length >> 1) + (length & 1);
            let visible = address & 0x100 != 0;
            let longitude_scale = if address & 0x80 != 0 {
                0xFF
            } else {
                let odd = length & 1 != 0 || visible;
                let index = ((address & 0x7F) << 1) + if odd { 0 } else { 1 };
                roms.longitude_scale()[index as usize] as u16
            };

            x_array[segment] = ((latitude_scale * longitude_scale + 0x80) >> 8) as u8;
            color_array[segment] = color;
            visible_array[segment] = visible;
        }

        // Horizon ouest : premier segment visible, 31 à défaut
        let start_segment = visible_array[..PLANET_SEGMENTS - 1]
            .iter()
            .position(|&visible| visible)
            .unwrap_or(PLANET_SEGMENTS - 1);

        let mut max_x = ((latitude_scale * 0xC0) >> 8) as u8;
        if max_x & 1 != 0 {
            max_x += 1;
        }

        // Fusion des segments consécutifs de même couleur
        let mut line = LineBuilder {
            max_x,
            colors: Vec::with_capacity(PLANET_SEGMENTS),
            x_positions: Vec::with_capacity(PLANET_SEGMENTS),
        };
        let mut segment = start_segment;
        let mut consumed = 0;
        let mut x = 0u8;
        loop {
            // Chaque segment brut n'est lu qu'une fois ; une fois le tour
            // fait, les plages restantes gardent le dernier x
            let color = color_array[segment];
            while consumed < PLANET_SEGMENTS && color == color_array[segment] {
                x = x_array[segment];
                segment = (segment + 1) & (PLANET_SEGMENTS - 1);
                consumed += 1;
            }

            line.colors.push(color);
            line.x_positions.push(x.min(max_x));

            if line.colors.len() >= PLANET_SEGMENTS || x > max_x {
                break;
            }
        }

        line
    }

    fn segment_count(&self) -> usize {
        self.colors.len()
    }

    fn serialize_into(&self, buffer: &mut Vec<u8>) {
        buffer.push(self.segment_count() as u8);

        // Centre de l'écran moins le quart des pixels de planète
        let start_x = (SCREEN_WIDTH / 2) as u8 - ((self.max_x as u16 + 2) / 4) as u8;
        buffer.push(start_x);

        // Demi-résolution horizontale : la planète utilise des pixels doubles
        let mut last_x = 0u8;
        for (&color, &x) in self.colors.iter().zip(&self.x_positions) {
            let current_x = ((x as u16 + 1) / 2) as u8;
            buffer.push(color);
            buffer.push(current_x.wrapping_sub(last_x));
            last_x = current_x;
        }
    }
}

fn build_frame(roms: &PlanetRoms, variant: usize, longitude: usize) -> CoreResult<PlanetFrame> {
    let lines: Vec<LineBuilder> = (0..PLANET_LATITUDES)
        .map(|latitude| LineBuilder::build(roms, variant, longitude as u8, latitude))
        .collect();

    let total_segments: usize = lines.iter().map(LineBuilder::segment_count).sum();
    let size = 2 * (PLANET_LATITUDES + total_segments);

    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(size)
        .map_err(|_| CoreError::PlanetAllocation { variant, longitude })?;

    for line in &lines {
        line.serialize_into(&mut buffer);
    }
    debug_assert_eq!(buffer.len(), size);

    Ok(PlanetFrame {
        data: buffer.into_boxed_slice(),
    })
}

/// Une planète : ses 256 images précalculées
#[derive(Debug, Clone)]
pub struct Planet {
    frames: Vec<PlanetFrame>,
}

impl Planet {
    /// Construit les 256 longitudes en parallèle ; l'ordre du résultat est
    /// celui des longitudes.
    pub fn build(roms: &PlanetRoms, variant: usize) -> CoreResult<Self> {
        let frames = (0..PLANET_LONGITUDES)
            .into_par_iter()
            .map(|longitude| build_frame(roms, variant, longitude))
            .collect::<CoreResult<Vec<_>>>()?;

        Ok(Self { frames })
    }

    pub fn frame(&self, longitude: u8) -> &PlanetFrame {
        &self.frames[longitude as usize]
    }

    pub fn frames(&self) -> &[PlanetFrame] {
        &self.frames
    }
}

/// Moteur de rendu des deux planètes
#[derive(Debug, Clone)]
pub struct PlanetRenderer {
    planets: [Planet; PLANET_VARIANTS],
}

impl PlanetRenderer {
    /// Précalcule les deux planètes. Un échec d'allocation est fatal.
    pub fn new(roms: &PlanetRoms) -> CoreResult<Self> {
        let planets = [Planet::build(roms, 0)?, Planet::build(roms, 1)?];

        let bytes: usize = planets
            .iter()
            .flat_map(|planet| planet.frames())
            .map(PlanetFrame::len)
            .sum();
        info!(
            "Planètes précalculées: {} images, {} octets",
            PLANET_VARIANTS * PLANET_LONGITUDES,
            bytes
        );

        Ok(Self { planets })
    }

    /// Planète sélectionnée. Une sélection hors plage est une erreur de l'appelant.
    pub fn planet(&self, select: usize) -> &Planet {
        assert!(
            select < PLANET_VARIANTS,
            "sélection de planète hors plage: {}",
            select
        );
        &self.planets[select]
    }

    pub fn frame(&self, select: usize, longitude: u8) -> &PlanetFrame {
        self.planet(select).frame(longitude)
    }

    /// Peint une image de planète sous le premier plan.
    ///
    /// Seuls les pixels dont l'octet d'occlusion est nul sont peints. Les
    /// plages qui dépassent le bord droit de la mémoire vidéo sont coupées.
    pub fn render<D: Display + ?Sized>(
        &self,
        select: usize,
        longitude: u8,
        base_ram: &[u8; BASE_RAM_SIZE],
        video: &VideoMemory,
        display: &mut D,
    ) {
        let frame = self.frame(select, longitude);

        for (latitude, line) in frame.lines().enumerate() {
            let base_color = base_ram[latitude >> 3] ^ 0x0F;
            let y = PLANET_TOP_LINE + latitude;
            if y >= video.height() {
                break;
            }

            let mut x = line.start_x as usize;
            for segment in line.segments() {
                let color = if segment.uses_base_color() {
                    base_color
                } else {
                    segment.color
                };

                for _ in 0..segment.run_length {
                    if x < video.width() && !video.is_drawn(x, y) {
                        display.set_pixel(x, y, color);
                    }
                    x += 1;
                }
            }
        }
    }
}
