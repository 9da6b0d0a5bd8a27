use anyhow::{anyhow, Context, Result};
use log::info;
use std::env;

use pixel_arcade_raster::rom::synthetic;
use pixel_arcade_raster::*;

/// Options de la ligne de commande
struct Options {
    config_path: Option<String>,
    rom_dir: Option<String>,
    synthetic: bool,
    planet: u8,
    longitude: u8,
    output: String,
}

fn parse_args() -> Result<Options> {
    let args: Vec<String> = env::args().collect();
    let mut options = Options {
        config_path: None,
        rom_dir: None,
        synthetic: false,
        planet: 0,
        longitude: 0,
        output: "planet.png".to_string(),
    };

    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1);
        match (args[i].as_str(), value) {
            ("--synthetic", _) => {
                options.synthetic = true;
                i += 1;
                continue;
            }
            ("--config", Some(v)) => options.config_path = Some(v.clone()),
            ("--rom-dir", Some(v)) => options.rom_dir = Some(v.clone()),
            ("--planet", Some(v)) => options.planet = v.parse().context("--planet attend 0 ou 1")?,
            ("--longitude", Some(v)) => options.longitude = v.parse().context("--longitude attend 0..255")?,
            ("--output", Some(v)) => options.output = v.clone(),
            (flag, _) => return Err(anyhow!("argument inconnu ou incomplet: {}", flag)),
        }
        i += 2;
    }

    if options.planet > 1 {
        return Err(anyhow!("--planet attend 0 ou 1"));
    }
    Ok(options)
}

fn main() -> Result<()> {
    env_logger::init();
    info!("Démarrage de Pixel Arcade Raster v{}", VERSION);

    let options = parse_args()?;
    let mut config = match &options.config_path {
        Some(path) => EmulatorConfig::load_from_file(path)?,
        None => EmulatorConfig::default(),
    };
    if let Some(dir) = &options.rom_dir {
        config.roms.search_paths.insert(0, dir.clone());
    }

    let mut video = if options.synthetic {
        LiberatorVideo::new(&synthetic::planet_roms()?)?
    } else {
        LiberatorVideo::from_config(&config)?
    };

    video.write_planet_select(options.planet << 4);
    video.write_planet_frame(options.longitude);

    let mut screen = PenSurface::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    video.update_screen(&mut screen);
    screen.save_png(&options.output, &debug_palette())?;

    println!(
        "Planète {} longitude {} écrite dans {}",
        options.planet, options.longitude, options.output
    );
    Ok(())
}
