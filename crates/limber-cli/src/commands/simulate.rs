//! Headless demo run over a scripted input sequence

use anyhow::{bail, Context, Result};
use limber_animation::rig::stick_figure_rig;
use limber_animation::{CommandRecorder, StickFigure};
use limber_runtime::{Controls, DemoConfig, MainLoop, PlayerDriver, World};
use log::info;
use std::path::Path;

pub struct SimulateArgs {
    pub script: String,
    pub config: Option<String>,
    pub commands: bool,
}

/// Parse "right*30 right+jump idle*10" into held controls per tick
pub fn parse_script(script: &str) -> Result<Vec<Controls>> {
    let mut ticks = Vec::new();
    for token in script.split_whitespace() {
        let (names, count) = token.split_once('*').unwrap_or((token, "1"));
        let count: usize = count
            .parse()
            .with_context(|| format!("bad repeat count in '{}'", token))?;

        let mut controls = Controls::default();
        for name in names.split('+') {
            match name {
                "idle" => {}
                "left" => controls.left = true,
                "right" => controls.right = true,
                "jump" => controls.jump = true,
                "attack-left" => controls.attack_left = true,
                "attack-right" => controls.attack_right = true,
                other => bail!("unknown input '{}' in '{}'", other, token),
            }
        }
        ticks.extend(std::iter::repeat(controls).take(count));
    }
    Ok(ticks)
}

pub fn run(args: SimulateArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => DemoConfig::load(Path::new(path))?,
        None => DemoConfig::default(),
    };
    let script = parse_script(&args.script)?;
    info!(
        "simulating {} ticks at {} Hz",
        script.len(),
        config.clock.tick_rate_hz
    );

    let mut figure = StickFigure::new(stick_figure_rig()?).with_style(config.figure.style());
    figure.debug = config.figure.debug;

    let mut world = World::from_config(&config.world);
    world.load_player(Box::new(figure))?;
    let start_x = config.start_x();
    let mut driver = PlayerDriver::new(config.player.clone(), start_x, config.world.width);
    let mut recorder = CommandRecorder::new();

    let mut main_loop = MainLoop::new(config.clock.tick_rate_hz);
    main_loop.set_debug(true);
    main_loop.start();

    let dt = 1.0 / config.clock.tick_rate_hz;
    let mut remaining = script.as_slice();
    while let Some((&controls, rest)) = remaining.split_first() {
        let ran = main_loop.pump(dt, |tick| {
            let Some(player) = world.player_mut() else {
                return Ok(());
            };
            driver.step(controls, player);
            let velocity = player.velocity();
            world.draw(&mut recorder, tick, Some(driver.position))?;

            if !args.commands {
                let clip = world
                    .player()
                    .and_then(|p| p.current_clip())
                    .map_or("-", |c| c.as_str());
                println!(
                    "{:>5}  pos {}  vel {}  {}",
                    tick, driver.position, velocity, clip
                );
            }
            Ok(())
        })?;
        if ran > 0 {
            remaining = rest;
        }
    }
    main_loop.stop();

    if args.commands {
        println!("{}", serde_json::to_string_pretty(&recorder.commands)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_expands_repeats_and_combos() {
        let ticks = parse_script("right*2 right+jump idle").unwrap();
        assert_eq!(ticks.len(), 4);
        assert!(ticks[0].right && !ticks[0].jump);
        assert!(ticks[2].right && ticks[2].jump);
        assert_eq!(ticks[3], Controls::default());
    }

    #[test]
    fn script_rejects_unknown_input() {
        assert!(parse_script("moonwalk").is_err());
        assert!(parse_script("left*lots").is_err());
    }
}
