//! Two-bone IK command

use super::parse_vec2;
use anyhow::{bail, Result};
use limber_animation::ik;

pub struct IkArgs {
    pub l1: f64,
    pub l2: f64,
    pub target: String,
    pub origin: String,
    pub bend: f64,
}

pub fn run(args: IkArgs) -> Result<()> {
    if args.l1 <= 0.0 || args.l2 <= 0.0 {
        bail!("bone lengths must be positive");
    }
    let target = parse_vec2(&args.target)?;
    let origin = parse_vec2(&args.origin)?;

    let joint = ik::solve_global(args.l1, args.l2, target, origin, args.bend);
    let reach = target.distance(&origin);

    println!("joint: {}", joint);
    if reach > args.l1 + args.l2 || reach < (args.l1 - args.l2).abs() {
        println!("target out of reach ({:.3}), limb fully extended", reach);
    }
    Ok(())
}
