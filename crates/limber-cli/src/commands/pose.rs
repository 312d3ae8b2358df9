//! Single-frame pose command

use anyhow::{bail, Result};
use limber_animation::rig::stick_figure_rig;
use limber_animation::{ClipId, CommandRecorder, StickFigure};
use limber_core::Vec2;

pub struct PoseArgs {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub tick: u64,
    pub floor: f64,
    pub clip: Option<String>,
    pub format: String,
    pub debug: bool,
}

pub fn run(args: PoseArgs) -> Result<()> {
    let mut figure = StickFigure::new(stick_figure_rig()?);
    figure.set_velocity(Vec2::new(args.vx, args.vy));
    figure.debug = args.debug;

    if let Some(name) = &args.clip {
        let Some(clip) = ClipId::from_name(name) else {
            bail!("unknown clip '{}'", name);
        };
        figure.set_override(Some(clip));
    }

    let position = Vec2::new(args.x, args.y);
    match args.format.as_str() {
        "text" => {
            let pose = figure.pose(position, args.tick, args.floor)?;
            println!(
                "tick {} clip {} facing {:?} step reach {:.3}",
                pose.tick, pose.clip, pose.facing, pose.step_reach
            );
            for (name, p) in pose.joints.iter() {
                println!("  {:<16} {}", name, p);
            }
        }
        "json" => {
            let pose = figure.pose(position, args.tick, args.floor)?;
            println!("{}", serde_json::to_string_pretty(&pose)?);
        }
        "commands" => {
            let mut recorder = CommandRecorder::new();
            figure.draw(&mut recorder, position, args.tick, args.floor)?;
            println!("{}", serde_json::to_string_pretty(&recorder.commands)?);
        }
        other => bail!("unknown format '{}', try text, json or commands", other),
    }
    Ok(())
}
