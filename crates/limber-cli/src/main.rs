//! Limber CLI - Headless driver for the Limber stick figure

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{config, ik, pose, simulate};

#[derive(Parser)]
#[command(name = "limber")]
#[command(about = "Stick-figure animation with two-bone IK, run headless")]
#[command(long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a single frame of the stock figure
    Pose {
        /// Player x, relative to the world
        #[arg(long, default_value_t = 100.0)]
        x: f64,

        /// Player height above the floor
        #[arg(long, default_value_t = 0.0)]
        y: f64,

        /// Horizontal velocity
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        vx: f64,

        /// Vertical velocity
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        vy: f64,

        /// Animation tick
        #[arg(long, default_value_t = 0)]
        tick: u64,

        /// Floor height
        #[arg(long, default_value_t = 0.0)]
        floor: f64,

        /// Force a clip (idle, run-left, run-right, jump, fall, attack-left, attack-right)
        #[arg(long)]
        clip: Option<String>,

        /// Output format (text, json or commands)
        #[arg(long, default_value = "text")]
        format: String,

        /// Include the debug overlay in `commands` output
        #[arg(long)]
        debug: bool,
    },

    /// Run the demo loop headless over a scripted input sequence
    Simulate {
        /// Input script, e.g. "right*30 jump idle*10 left*20 attack-left*5"
        #[arg(long, default_value = "right*60 jump idle*40")]
        script: String,

        /// Path to a TOML config file
        #[arg(long)]
        config: Option<String>,

        /// Print the last frame's draw commands as JSON instead of a trace
        #[arg(long)]
        commands: bool,
    },

    /// Solve a two-bone chain
    Ik {
        /// First bone length
        #[arg(long)]
        l1: f64,

        /// Second bone length
        #[arg(long)]
        l2: f64,

        /// End-effector target as "x,y"
        #[arg(long, allow_hyphen_values = true)]
        target: String,

        /// Chain origin as "x,y"
        #[arg(long, default_value = "0,0", allow_hyphen_values = true)]
        origin: String,

        /// Bend direction (1 or -1)
        #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
        bend: f64,
    },

    /// Configuration file helpers
    #[command(subcommand)]
    Config(config::ConfigCommands),
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Pose {
            x,
            y,
            vx,
            vy,
            tick,
            floor,
            clip,
            format,
            debug,
        } => pose::run(pose::PoseArgs {
            x,
            y,
            vx,
            vy,
            tick,
            floor,
            clip,
            format,
            debug,
        }),
        Commands::Simulate {
            script,
            config,
            commands,
        } => simulate::run(simulate::SimulateArgs {
            script,
            config,
            commands,
        }),
        Commands::Ik {
            l1,
            l2,
            target,
            origin,
            bend,
        } => ik::run(ik::IkArgs {
            l1,
            l2,
            target,
            origin,
            bend,
        }),
        Commands::Config(cmd) => config::run(cmd),
    }
}
