//! Tests du moteur de planète
//!
//! Les images synthétiques reproduisent la structure des vraies ROMs :
//! longueurs cumulatives et PROMs monotones.

use pixel_arcade_raster::rom::synthetic;
use pixel_arcade_raster::*;
use std::sync::OnceLock;

fn renderer() -> &'static PlanetRenderer {
    static RENDERER: OnceLock<PlanetRenderer> = OnceLock::new();
    RENDERER.get_or_init(|| PlanetRenderer::new(&synthetic::planet_roms().unwrap()).unwrap())
}

#[test]
fn test_frame_length_for_every_longitude() {
    let renderer = renderer();

    for select in 0..PLANET_VARIANTS {
        for longitude in 0..=255u8 {
            let frame = renderer.frame(select, longitude);
            let segments: usize = frame.lines().map(|line| line.segment_count()).sum();
            assert_eq!(
                frame.len(),
                2 * (PLANET_LATITUDES + segments),
                "planète {} longitude {}",
                select,
                longitude
            );
            assert_eq!(frame.lines().count(), PLANET_LATITUDES);
        }
    }
}

#[test]
fn test_lines_fit_on_screen() {
    let renderer = renderer();

    for select in 0..PLANET_VARIANTS {
        for longitude in 0..=255u8 {
            for line in renderer.frame(select, longitude).lines() {
                assert!(line.segment_count() >= 1);
                assert!(line.segment_count() <= PLANET_SEGMENTS);
                assert!(line.width() <= SCREEN_WIDTH / 2);
                assert!(line.start_x as usize + line.width() <= SCREEN_WIDTH);
            }
        }
    }
}

#[test]
fn test_segment_colors_are_nibbles() {
    let frame = renderer().frame(1, 200);
    for line in frame.lines() {
        assert!(line.segments().all(|segment| segment.color <= 0x0F));
    }
}

#[test]
fn test_build_is_deterministic() {
    let roms = synthetic::planet_roms().unwrap();
    let again = PlanetRenderer::new(&roms).unwrap();

    for longitude in [0u8, 17, 128, 200, 255] {
        assert_eq!(again.frame(0, longitude), renderer().frame(0, longitude));
        assert_eq!(again.frame(1, longitude), renderer().frame(1, longitude));
    }
}

#[test]
fn test_variants_use_different_banks() {
    // Les couleurs synthétiques de la planète 0 sont décalées (xor 3)
    assert_ne!(renderer().frame(0, 200), renderer().frame(1, 200));
}

#[test]
fn test_render_is_idempotent() {
    let mut bitmap = BitmapIo::new();
    bitmap.write_packed(0x60 * 64 + 0x20, 0xA0);
    bitmap.write_packed(0x70 * 64 + 0x1F, 0x40);

    let base_ram = [0x03u8; BASE_RAM_SIZE];
    let mut first = PenSurface::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    first.fill(0x1F);
    renderer().render(1, 200, &base_ram, bitmap.video(), &mut first);

    let mut second = first.clone();
    renderer().render(1, 200, &base_ram, bitmap.video(), &mut second);

    assert_eq!(first, second);
}

#[test]
fn test_render_paints_only_planet_band() {
    let video = VideoMemory::default();
    let mut screen = PenSurface::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    screen.fill(0x1F);
    renderer().render(0, 200, &[0; BASE_RAM_SIZE], &video, &mut screen);

    for y in (0..PLANET_TOP_LINE).chain(PLANET_TOP_LINE + PLANET_LATITUDES..SCREEN_HEIGHT) {
        for x in 0..SCREEN_WIDTH {
            assert_eq!(screen.pixel(x, y), Some(0x1F));
        }
    }
    let painted = (PLANET_TOP_LINE..PLANET_TOP_LINE + PLANET_LATITUDES)
        .flat_map(|y| (0..SCREEN_WIDTH).map(move |x| (x, y)))
        .filter(|&(x, y)| screen.pixel(x, y) != Some(0x1F))
        .count();
    assert!(painted > 0);
}

/// Position du premier pixel de chaque segment, avec la ligne écran
fn segment_positions(frame: &PlanetFrame) -> Vec<(usize, usize, Segment)> {
    let mut positions = Vec::new();
    for (latitude, line) in frame.lines().enumerate() {
        let mut x = line.start_x as usize;
        for segment in line.segments() {
            if segment.run_length > 0 {
                positions.push((x, PLANET_TOP_LINE + latitude, segment));
            }
            x += segment.run_length as usize;
        }
    }
    positions
}

#[test]
fn test_foreground_occludes_planet() {
    let frame = renderer().frame(1, 200);
    let (x, y, segment) = segment_positions(frame)
        .into_iter()
        .find(|(_, _, s)| !s.uses_base_color())
        .expect("segment coloré");

    let mut bitmap = BitmapIo::new();
    bitmap.cursor = CursorRegisters { x: x as u8, y: y as u8 };
    bitmap.write_at_cursor(0x60);

    let mut screen = bitmap.display().clone();
    renderer().render(1, 200, &[0; BASE_RAM_SIZE], bitmap.video(), &mut screen);

    // Le pixel du premier plan garde son stylo bitmap
    assert_eq!(screen.pixel(x, y), Some(0x13));

    // Sans premier plan, la couleur du segment apparaît
    let mut clear = PenSurface::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    renderer().render(1, 200, &[0; BASE_RAM_SIZE], &VideoMemory::default(), &mut clear);
    assert_eq!(clear.pixel(x, y), Some(segment.color));
}

#[test]
fn test_base_color_substitution() {
    let frame = renderer().frame(1, 200);
    let (x, y, _) = segment_positions(frame)
        .into_iter()
        .find(|(_, _, s)| s.uses_base_color())
        .expect("segment de base");

    let latitude = y - PLANET_TOP_LINE;
    let mut base_ram = [0u8; BASE_RAM_SIZE];
    base_ram[latitude >> 3] = 0x05;

    let mut screen = PenSurface::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    screen.fill(0x1F);
    renderer().render(1, 200, &base_ram, &VideoMemory::default(), &mut screen);

    assert_eq!(screen.pixel(x, y), Some(0x05 ^ 0x0F));
}

#[test]
#[should_panic]
fn test_invalid_planet_select() {
    let mut screen = PenSurface::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    renderer().render(2, 0, &[0; BASE_RAM_SIZE], &VideoMemory::default(), &mut screen);
}

#[test]
fn test_rom_size_errors() {
    let result = PlanetRoms::new(vec![0; 0x3FFF], synthetic::latitude_prom(), synthetic::longitude_prom());
    assert!(matches!(
        result,
        Err(CoreError::RomSize { expected: 0x4000, found: 0x3FFF, .. })
    ));
}
