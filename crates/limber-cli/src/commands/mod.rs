//! CLI command implementations

pub mod config;
pub mod ik;
pub mod pose;
pub mod simulate;

use anyhow::{bail, Context, Result};
use limber_core::Vec2;

/// Parse "x,y" into a vector
pub fn parse_vec2(text: &str) -> Result<Vec2> {
    let Some((x, y)) = text.split_once(',') else {
        bail!("expected \"x,y\", got '{}'", text);
    };
    let parse = |v: &str| v.trim().parse::<f64>();
    let x = parse(x).with_context(|| format!("bad x in '{}'", text))?;
    let y = parse(y).with_context(|| format!("bad y in '{}'", text))?;
    Ok(Vec2::new(x, y))
}
