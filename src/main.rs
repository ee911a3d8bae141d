use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use tank_duel::Game;
use tank_duel::Settings;
use tank_duel::frontend::Window;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    let debug_frame = args.iter().any(|arg| arg == "--render-frame");
    let config_path = flag_value(&args, "--config").map(Path::new);

    let settings = Settings::load_or_default(config_path).context("failed to load settings")?;
    let seed = parse_seed(&args)
        .or(settings.seed)
        .unwrap_or_else(system_seed);
    log::info!("starting match with seed {seed}");

    let mut game = Game::new(seed);
    let mut window = Window::open(settings.bindings);

    if debug_frame {
        window.render_frame(&mut game, "debug_frame.png");
        return Ok(());
    }

    window.run(&mut game);
    Ok(())
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == flag {
            return iter.next().map(String::as_str);
        }
    }
    None
}

fn parse_seed(args: &[String]) -> Option<u64> {
    let value = flag_value(args, "--seed")?;
    match value.parse::<u64>() {
        Ok(seed) => Some(seed),
        Err(_) => {
            log::warn!("ignoring unparsable --seed {value:?}");
            None
        }
    }
}

fn system_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64
}
