//! End-to-end tests for the stock stick figure

use limber_animation::render::{CommandRecorder, DrawCommand};
use limber_animation::rig::{self, stick_figure_rig};
use limber_animation::{ClipId, StickFigure};
use limber_core::Vec2;

fn figure() -> StickFigure {
    StickFigure::new(stick_figure_rig().unwrap())
}

#[test]
fn idle_frame_at_rest_position() {
    let mut figure = figure();
    let pose = figure.pose(Vec2::new(100.0, 0.0), 0, 0.0).unwrap();
    assert_eq!(pose.clip, ClipId::Idle);

    // Pelvis breathes down by one
    assert_eq!(pose.joints.get(rig::PELVIS), Some(Vec2::new(100.0, 41.0)));

    let hip = pose.joints.get(rig::LEFT_HIP).unwrap();
    let knee = pose.joints.get(rig::LEFT_KNEE).unwrap();
    let foot = pose.joints.get(rig::LEFT_FOOT).unwrap();
    assert_eq!(hip, Vec2::new(108.0, 43.0));
    // Foot animation pushes it below the floor, the clamp lifts it back
    assert_eq!(foot, Vec2::new(116.0, 0.0));

    let reach = hip.distance(&foot);
    assert!((3.0..=53.0).contains(&reach), "reach {}", reach);
    assert!((hip.distance(&knee) - 25.0).abs() < 1e-9);
    assert!((knee.distance(&foot) - 28.0).abs() < 1e-9);
    assert!(knee.x > hip.x, "knee should bend forward");
}

#[test]
fn feet_stay_on_or_above_floor_through_every_clip() {
    let mut figure = figure();
    let states = [
        (Vec2::new(0.0, 0.0), Vec2::ZERO),
        (Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)),
        (Vec2::new(0.0, 0.0), Vec2::new(-10.0, 0.0)),
        (Vec2::new(0.0, 30.0), Vec2::new(0.0, 5.0)),
        (Vec2::new(0.0, 30.0), Vec2::new(0.0, -5.0)),
    ];
    for (position, velocity) in states {
        figure.set_velocity(velocity);
        for tick in 0..80 {
            let pose = figure.pose(position, tick, 12.0).unwrap();
            for name in [rig::LEFT_FOOT, rig::RIGHT_FOOT] {
                let y = pose.joints.get(name).unwrap().y;
                assert!(y >= 12.0, "{} at {} on tick {}", name, y, tick);
            }
            let shoulder = pose.joints.get(rig::LEFT_SHOULDER).unwrap();
            let elbow = pose.joints.get(rig::LEFT_ELBOW).unwrap();
            assert!((shoulder.distance(&elbow) - 18.0).abs() < 1e-9);
        }
    }
}

#[test]
fn running_feet_hold_then_step_forward() {
    let mut figure = figure();
    figure.set_velocity(Vec2::new(10.0, 0.0));

    let mut x = 0.0;
    let mut last_foot = None;
    let mut steps = 0;
    for tick in 0..60 {
        let pose = figure.pose(Vec2::new(x, 0.0), tick, 0.0).unwrap();
        assert_eq!(pose.clip, ClipId::RunRight);
        let foot = pose.joints.get(rig::LEFT_FOOT).unwrap().x;
        if let Some(prev) = last_foot {
            if foot != prev {
                // Only ever steps ahead of the body by one stride
                assert!((foot - (x + pose.step_reach)).abs() < 1e-9);
                steps += 1;
            }
        }
        last_foot = Some(foot);
        x += 10.0;
    }
    assert!(steps > 0);
}

#[test]
fn switching_clips_keeps_the_tick_phase() {
    let mut switched = figure();
    switched.pose(Vec2::ZERO, 30, 0.0).unwrap();
    switched.set_velocity(Vec2::new(10.0, 0.0));
    let after_switch = switched.pose(Vec2::ZERO, 31, 0.0).unwrap();

    let mut fresh = figure();
    fresh.set_velocity(Vec2::new(10.0, 0.0));
    let direct = fresh.pose(Vec2::ZERO, 31, 0.0).unwrap();

    assert_eq!(after_switch.clip, ClipId::RunRight);
    assert_eq!(
        after_switch.joints.get(rig::PELVIS),
        direct.joints.get(rig::PELVIS)
    );
}

#[test]
fn draw_emits_skeleton_and_head() {
    let mut figure = figure();
    let mut rec = CommandRecorder::new();
    let at = Vec2::new(100.0, 0.0);
    figure.draw(&mut rec, at, 0, 0.0).unwrap();
    assert_eq!(rec.lines().count(), 14);
    assert_eq!(rec.rects().count(), 1);
    assert_eq!(rec.commands.len(), 15);
}

#[test]
fn debug_draw_adds_overlay() {
    let mut figure = figure();
    figure.debug = true;
    let mut rec = CommandRecorder::new();
    let at = Vec2::new(100.0, 0.0);
    figure.draw(&mut rec, at, 0, 0.0).unwrap();

    let circles: Vec<Vec2> = rec
        .commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Circle { center, .. } => Some(*center),
            _ => None,
        })
        .collect();
    let texts = rec
        .commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::Text { .. }))
        .count();
    // Position, pelvis, two stride marks and one knee estimate per leg
    assert_eq!(circles.len(), 6);

    // Facing right the legs bend the same way as the estimate, so each
    // estimate lands on the solved knee
    let buffer = figure.buffer();
    for (estimate, knee) in circles[4..].iter().zip([rig::LEFT_KNEE, rig::RIGHT_KNEE]) {
        let knee = buffer.get(knee).unwrap();
        assert!(estimate.distance(&knee) < 1e-9);
    }
    assert_eq!(texts, 15);
    assert_eq!(figure.debug_info_at(20.0, 15.0), Some(rig::PELVIS));
}
