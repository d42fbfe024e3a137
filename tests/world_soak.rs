use digbot_engine::{SimCore, Tile};

/// Run a seeded robot for a few thousand frames and check the invariants
/// that must hold on every single one of them.
#[test]
fn long_run_soak_keeps_invariants() {
    let mut core = SimCore::new_seeded(25, 18, 4242);
    core.init();

    let (view_w, view_h) = (800.0, 576.0);
    for _ in 0..5000 {
        core.step(view_w, view_h);

        let robot = core.robot();
        assert!(robot.y <= view_h - robot.height + 0.001);
        assert!(robot.x >= 0.0);
        assert!(robot.x <= view_w - robot.width + 0.001);
        assert!((0.0..=100.0).contains(&robot.jetpack_energy));
        assert!(core.grid().scroll_offset() >= 0.0);
    }

    // The bottom row stays bedrock across every generated column, however
    // far the run extended the world
    let cols = core.grid().generated_cols() as i32;
    assert!(cols >= 75);
    for x in 0..cols {
        assert_eq!(core.grid().get_tile(x, 17), Some(&Tile::Bedrock));
    }
}

#[test]
fn perf_smoke_step() {
    let mut core = SimCore::new_seeded(25, 18, 8);
    core.init();
    core.enable_perf_metrics(true);

    core.step(800.0, 576.0);

    let stats = core.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.generated_cols(), 75);
}
