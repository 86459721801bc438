use std::str::FromStr;

use fx_core::virtual_host::{run_for, ManualScheduler, RecordingSink};
use fx_core::{EngineConfig, Mode, PointerFollowEngine, SurfaceRect, TimingPreset};
use glam::Vec2;

// Virtual display refresh (~60 Hz)
const FRAME_MS: f64 = 1000.0 / 60.0;

type PreviewEngine = PointerFollowEngine<RecordingSink, ManualScheduler>;

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let preset = match std::env::args().nth(1) {
        Some(arg) => TimingPreset::from_str(&arg)?,
        None => TimingPreset::Standard,
    };
    let config = EngineConfig::default().with_preset(preset);
    log::info!(
        "[preview] preset={:?} lerp={} frame_interval={}ms",
        preset,
        config.lerp_factor,
        config.min_frame_interval_ms
    );

    let mut engine: PreviewEngine =
        PointerFollowEngine::new(config, RecordingSink::default(), ManualScheduler::new())?;
    let rect = SurfaceRect::new(0.0, 0.0, 1280.0, 720.0);
    engine.start();
    run_for(&mut engine, 500.0, FRAME_MS);
    report(&engine, "idle orbit");

    // Diagonal sweep across the hero, one sample per frame
    for i in 0..=60 {
        let t = i as f32 / 60.0;
        let client = Vec2::new(rect.width * t, rect.height * (1.0 - t));
        let now = engine.host().now_ms();
        engine.on_pointer_move(client, Some(rect), now);
        run_for(&mut engine, FRAME_MS, FRAME_MS);
    }
    report(&engine, "after sweep");

    run_for(&mut engine, 1000.0, FRAME_MS);
    report(&engine, "settling");

    let requests_before = engine.host().frame_requests();
    engine.on_visibility_change(false);
    run_for(&mut engine, 1500.0, FRAME_MS);
    log::info!(
        "[preview] hidden for 1500ms: {} new frame requests",
        engine.host().frame_requests() - requests_before
    );
    engine.on_visibility_change(true);

    run_for(&mut engine, 3000.0, FRAME_MS);
    if engine.mode() != Mode::Idle {
        log::warn!("[preview] expected idle orbit after quiescence");
    }
    report(&engine, "back to idle");

    let writes = engine.sink().writes();
    engine.stop();
    engine.tick(engine.host().now_ms() + FRAME_MS);
    log::info!(
        "[preview] teardown: {} writes after stop",
        engine.sink().writes() - writes
    );

    let mut props: Vec<_> = engine.sink().properties().collect();
    props.sort();
    for (name, value) in props {
        println!("{name}: {value}");
    }
    println!("{:?}", engine.stats());
    Ok(())
}

fn report(engine: &PreviewEngine, label: &str) {
    let c = engine.current();
    let t = engine.target();
    log::info!(
        "[preview] {}: t={:.0}ms mode={:?} current=({:.2},{:.2}) target=({:.2},{:.2}) angles={:?} animating={}",
        label,
        engine.host().now_ms(),
        engine.mode(),
        c.x,
        c.y,
        t.x,
        t.y,
        engine.angles().snapshot().as_slice(),
        engine.is_animating()
    );
}
