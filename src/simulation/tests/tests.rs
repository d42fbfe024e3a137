use super::*;

use crate::domain::terrain::{PocketTemplate, TerrainModel};
use crate::domain::tiles::{LayerId, PocketKind, Tile, TK_AIR, TK_GROUND};
use crate::systems::robot::{dig, physics, Robot, DIG_DOWN, DIG_DURATION};
use crate::systems::worldgen;

const VIEW_W: f32 = 800.0;
const VIEW_H: f32 = 576.0;

/// Hand-built world: air above `floor_row`, dirt from there down, bedrock
/// at the bottom. Three viewports wide, like `init`.
fn flat_world(grid_width: u32, grid_height: u32, floor_row: u32) -> SimCore {
    let mut core = SimCore::new_seeded(grid_width, grid_height, 7);
    core.grid.reset();
    for _ in 0..grid_width * 3 {
        let mut column = Vec::with_capacity(grid_height as usize);
        for y in 0..grid_height {
            if y == grid_height - 1 {
                column.push(Tile::Bedrock);
            } else if y >= floor_row {
                column.push(Tile::Ground {
                    layer: LayerId::Dirt,
                    color: LayerId::Dirt.default_color(),
                    has_item: false,
                });
            } else {
                column.push(Tile::Air);
            }
        }
        core.grid.push_column(column);
    }
    core
}

fn find_layer_cell(core: &SimCore, want: LayerId) -> (i32, i32) {
    for x in 0..core.grid.generated_cols() as i32 {
        for y in 0..core.grid.grid_height() as i32 {
            if let Some(Tile::Ground { layer, .. }) = core.grid.get_tile(x, y) {
                if *layer == want {
                    return (x, y);
                }
            }
        }
    }
    panic!("no {:?} cell generated", want);
}

#[test]
fn out_of_bounds_tile_reads_are_none() {
    let mut core = SimCore::new_seeded(25, 18, 42);
    core.init();

    assert!(core.grid.get_tile(-1, 0).is_none());
    assert!(core.grid.get_tile(0, -1).is_none());
    assert!(core.grid.get_tile(core.grid.generated_cols() as i32, 0).is_none());
    assert!(core.grid.get_tile(0, 18).is_none());
    assert!(core.grid.get_tile(0, 0).is_some());
}

#[test]
fn init_generates_three_viewports_with_bedrock_floor() {
    let mut core = SimCore::new_seeded(31, 35, 1);
    core.init();

    assert_eq!(core.grid.generated_cols(), 93);
    for x in 0..93 {
        assert_eq!(core.grid.get_tile(x, 34), Some(&Tile::Bedrock));
    }
    assert_eq!(core.grid.get_tile(0, 0), Some(&Tile::Air));
}

#[test]
fn set_tile_to_air_discards_metadata_and_reset_is_fresh() {
    let mut core = SimCore::new_seeded(25, 18, 3);
    core.init();

    let (col, row) = find_layer_cell(&core, LayerId::Stone);
    core.grid.set_tile(col, row, TK_AIR, false);
    assert_eq!(core.grid.get_tile(col, row), Some(&Tile::Air));

    // A fresh ground set after clearing carries the default metadata, not
    // the old stone layer
    core.grid.set_tile(col, row, TK_GROUND, false);
    assert_eq!(
        core.grid.get_tile(col, row),
        Some(&Tile::Ground {
            layer: LayerId::Dirt,
            color: LayerId::Dirt.default_color(),
            has_item: false,
        })
    );
}

#[test]
fn set_tile_same_kind_preserves_layer_metadata() {
    let mut core = SimCore::new_seeded(25, 18, 3);
    core.init();

    let (col, row) = find_layer_cell(&core, LayerId::Stone);
    core.grid.set_tile(col, row, TK_GROUND, true);

    match core.grid.get_tile(col, row) {
        Some(Tile::Ground { layer, color, has_item }) => {
            assert_eq!(*layer, LayerId::Stone);
            assert_eq!(*color, LayerId::Stone.default_color());
            assert!(*has_item);
        }
        other => panic!("expected ground, got {:?}", other),
    }
}

#[test]
fn pocket_stamp_never_replaces_air_or_bedrock() {
    let mut core = SimCore::new_seeded(9, 18, 5);
    core.grid.reset();
    // Columns 0..4 are empty shafts; columns 4..9 are solid dirt below row 6
    for x in 0..9 {
        let mut column = Vec::with_capacity(18);
        for y in 0..18 {
            if y == 17 {
                column.push(Tile::Bedrock);
            } else if x >= 4 && y >= 6 {
                column.push(Tile::Ground {
                    layer: LayerId::Dirt,
                    color: LayerId::Dirt.default_color(),
                    has_item: false,
                });
            } else {
                column.push(Tile::Air);
            }
        }
        core.grid.push_column(column);
    }

    let template = PocketTemplate {
        kind: PocketKind::Gold,
        color: PocketKind::Gold.default_color(),
        size_min: 6,
        size_max: 6,
        rarity: 1.0,
        min_depth: 0,
        item_chance: 1.0,
    };
    worldgen::stamp_pocket(&mut core.grid, &core.terrain, &mut core.rng_state, 4, &template);

    // The ellipse reaches into the air columns and the bedrock row, but
    // only ground may have been rewritten
    for x in 0..4 {
        for y in 0..17 {
            assert_eq!(core.grid.get_tile(x, y), Some(&Tile::Air));
        }
    }
    for x in 0..9 {
        assert_eq!(core.grid.get_tile(x, 17), Some(&Tile::Bedrock));
    }
    let stamped = (0..9)
        .flat_map(|x| (0..17).map(move |y| (x, y)))
        .filter(|&(x, y)| matches!(core.grid.get_tile(x, y), Some(Tile::Pocket { .. })))
        .count();
    assert!(stamped > 0, "pocket should stamp at least its center cell");
}

#[test]
fn extend_appends_exactly_one_viewport_of_columns() {
    let mut core = SimCore::new_seeded(25, 18, 9);
    core.init();
    assert_eq!(core.grid.generated_cols(), 75);

    core.extend();
    assert_eq!(core.grid.generated_cols(), 100);
    for x in 75..100 {
        assert_eq!(core.grid.get_tile(x, 17), Some(&Tile::Bedrock));
    }
}

#[test]
fn scroll_right_band_extends_only_near_generated_edge() {
    let mut core = SimCore::new_seeded(25, 18, 11);
    core.init();

    // Center of the screen: no scrolling at all
    let adjust = worldgen::handle_scroll(
        &mut core.grid, &core.terrain, &mut core.rng_state, 400.0, 24.0, VIEW_W,
    );
    assert_eq!(adjust, 0.0);
    assert_eq!(core.grid.scroll_offset(), 0.0);

    // Right band, but still two viewports of generated world ahead:
    // scrolls without extending
    let cols_before = core.grid.generated_cols();
    let adjust = worldgen::handle_scroll(
        &mut core.grid, &core.terrain, &mut core.rng_state, 700.0, 24.0, VIEW_W,
    );
    assert_eq!(adjust, -4.0);
    assert_eq!(core.grid.scroll_offset(), 4.0);
    assert_eq!(core.grid.generated_cols(), cols_before);

    // Push the view within one viewport of the generated edge: the next
    // scroll extends by exactly one viewport of columns
    core.grid.scroll_by(800.0);
    let adjust = worldgen::handle_scroll(
        &mut core.grid, &core.terrain, &mut core.rng_state, 700.0, 24.0, VIEW_W,
    );
    assert_eq!(adjust, -4.0);
    assert_eq!(core.grid.generated_cols(), cols_before + 25);
}

#[test]
fn scroll_left_band_only_moves_back_while_offset_positive() {
    let mut core = SimCore::new_seeded(25, 18, 15);
    core.init();

    // At the world origin there is nothing to scroll back to
    let adjust = worldgen::handle_scroll(
        &mut core.grid, &core.terrain, &mut core.rng_state, 100.0, 24.0, VIEW_W,
    );
    assert_eq!(adjust, 0.0);
    assert_eq!(core.grid.scroll_offset(), 0.0);

    core.grid.scroll_by(8.0);
    let adjust = worldgen::handle_scroll(
        &mut core.grid, &core.terrain, &mut core.rng_state, 100.0, 24.0, VIEW_W,
    );
    assert_eq!(adjust, 4.0);
    assert_eq!(core.grid.scroll_offset(), 4.0);
}

#[test]
fn dig_round_trip_carves_tile_and_emits_one_item_event() {
    let mut core = flat_world(25, 18, 6);
    core.grid.set_tile(10, 7, TK_GROUND, true);

    let mut robot = Robot::new();
    robot.is_digging = true;
    robot.dig_x = 10;
    robot.dig_y = 7;
    robot.dig_direction = DIG_DOWN;

    for _ in 0..DIG_DURATION - 1 {
        dig::update_digging(&mut robot, &mut core.grid, &mut core.events);
    }
    assert!(robot.is_digging);
    assert!(matches!(core.grid.get_tile(10, 7), Some(Tile::Ground { .. })));
    assert!(core.events.is_empty());

    dig::update_digging(&mut robot, &mut core.grid, &mut core.events);
    assert!(!robot.is_digging);
    assert_eq!(robot.dig_progress, 0);
    assert_eq!(core.grid.get_tile(10, 7), Some(&Tile::Air));

    let item_events = core
        .events
        .events()
        .iter()
        .filter(|e| matches!(e, Event::ItemFound { .. }))
        .count();
    assert_eq!(item_events, 1);
}

#[test]
fn try_dig_in_open_air_silently_aborts() {
    let core = flat_world(25, 18, 10);
    let mut robot = Robot::new();
    robot.x = 100.0;
    robot.y = 32.0;

    let mut rng = 99;
    for _ in 0..32 {
        dig::try_dig(&mut robot, &core.grid, &mut rng);
        assert!(!robot.is_digging);
    }
}

#[test]
fn resting_robot_does_not_jitter() {
    let mut core = flat_world(25, 18, 6);
    let floor_px = 6.0 * 32.0;

    let mut robot = Robot::new();
    robot.x = 100.0;
    robot.y = floor_px - robot.height;
    robot.is_grounded = true;

    for _ in 0..10 {
        physics::apply_physics(&mut robot, &core.grid, &mut core.events, VIEW_W, VIEW_H, true);
        assert_eq!(robot.x, 100.0);
        assert_eq!(robot.y, floor_px - robot.height);
        assert!(robot.is_grounded);
    }
    assert!(core.events.is_empty(), "a resting robot emits no effects");
}

#[test]
fn idle_robot_stays_put_across_full_steps() {
    let mut core = flat_world(25, 18, 6);
    core.robot.x = 100.0;
    core.robot.y = 6.0 * 32.0 - core.robot.height;
    core.robot.is_grounded = true;
    // Park the AI so no decision fires during the test
    core.robot.action_timer = 100_000;

    for _ in 0..5 {
        core.step(VIEW_W, VIEW_H);
    }
    assert_eq!(core.robot.x, 100.0);
    assert_eq!(core.robot.y, 6.0 * 32.0 - core.robot.height);
}

#[test]
fn corner_approach_resolves_axes_independently() {
    let mut core = SimCore::new_seeded(25, 18, 13);
    core.grid.reset();
    for x in 0..25 {
        let mut column = vec![Tile::Air; 18];
        column[17] = Tile::Bedrock;
        if x == 5 {
            // Lone tile at (5,5): pixels 160..192
            column[5] = Tile::Ground {
                layer: LayerId::Stone,
                color: LayerId::Stone.default_color(),
                has_item: false,
            };
        }
        core.grid.push_column(column);
    }

    let mut robot = Robot::new();
    robot.x = 134.0;
    robot.y = 150.0;
    robot.vx = 4.0;
    robot.vy = 4.0;

    physics::apply_physics(&mut robot, &core.grid, &mut core.events, VIEW_W, VIEW_H, false);

    // Horizontal resolved first: snapped flush to the tile's left face
    assert_eq!(robot.x, 136.0);
    assert_eq!(robot.vx, 0.0);
    // Vertical then applied in full (plus gravity), no diagonal bounce
    assert_eq!(robot.y, 154.5);
    assert_eq!(robot.vy, 4.5);
}

#[test]
fn jetpack_energy_depletes_recharges_and_clamps() {
    let mut robot = Robot::new();

    robot.is_using_jetpack = true;
    robot.jetpack_energy = 1.0;
    physics::update_jetpack_energy(&mut robot);
    assert!((robot.jetpack_energy - 0.4).abs() < 1e-5);
    assert!(robot.is_using_jetpack);

    // Empty tank forces the jetpack off
    physics::update_jetpack_energy(&mut robot);
    assert_eq!(robot.jetpack_energy, 0.0);
    assert!(!robot.is_using_jetpack);

    // Grounded recharge runs at double rate and clamps at max
    robot.is_grounded = true;
    robot.jetpack_energy = 99.9;
    physics::update_jetpack_energy(&mut robot);
    assert_eq!(robot.jetpack_energy, 100.0);
}

#[test]
fn seeded_worlds_generate_identically() {
    let mut a = SimCore::new_seeded(25, 18, 77);
    let mut b = SimCore::new_seeded(25, 18, 77);
    a.init();
    b.init();

    assert_eq!(a.grid.generated_cols(), b.grid.generated_cols());
    for x in 0..a.grid.generated_cols() as i32 {
        for y in 0..18 {
            assert_eq!(a.grid.get_tile(x, y), b.grid.get_tile(x, y));
        }
    }

    // Same seed keeps the robots in lockstep too
    for _ in 0..120 {
        a.step(VIEW_W, VIEW_H);
        b.step(VIEW_W, VIEW_H);
    }
    assert_eq!(a.robot.x, b.robot.x);
    assert_eq!(a.robot.y, b.robot.y);
    assert_eq!(a.robot.jetpack_energy, b.robot.jetpack_energy);
}

#[test]
fn terrain_bundle_rejects_malformed_input() {
    assert!(TerrainModel::from_bundle_json("not json").is_err());
    assert!(TerrainModel::from_bundle_json(r#"{"layers":[]}"#).is_err());

    let zero_depth = r#"{"layers":[{"key":"surface","depth":0,"color":0,"itemChance":0.5}]}"#;
    assert!(TerrainModel::from_bundle_json(zero_depth).is_err());

    let deep_pocket = r#"{
        "layers":[{"key":"surface","depth":4,"color":0,"itemChance":0.5}],
        "pockets":[{"key":"gems","color":0,"sizeRange":[2,4],"rarity":0.5,"minDepth":3,"itemChance":1.0}]
    }"#;
    assert!(TerrainModel::from_bundle_json(deep_pocket).is_err());

    let bad_chance = r#"{"layers":[{"key":"surface","depth":4,"color":0,"itemChance":1.5}]}"#;
    assert!(TerrainModel::from_bundle_json(bad_chance).is_err());
}

#[test]
fn terrain_bundle_round_trips_through_manifest() {
    let json = r#"{
        "layers":[
            {"key":"surface","depth":3,"color":123,"itemChance":0.25},
            {"key":"stone","depth":9,"color":456,"itemChance":0.1,"caves":true}
        ],
        "pockets":[
            {"key":"gold","color":789,"sizeRange":[2,3],"rarity":0.9,"minDepth":1,"itemChance":1.0}
        ]
    }"#;

    let model = TerrainModel::from_bundle_json(json).expect("bundle should parse");
    assert_eq!(model.layers().len(), 2);
    assert_eq!(model.pockets().len(), 1);

    let manifest = model.manifest_json();
    assert!(manifest.contains("\"stone\""));
    assert!(manifest.contains("\"gold\""));
    assert!(manifest.contains("formatVersion"));
}

#[test]
fn layer_lookup_walks_stack_and_falls_to_deepest() {
    let terrain = TerrainModel::from_generated();

    let (top, props) = terrain.layer_for_row(35, terrain.surface_row(35));
    assert_eq!(top, LayerId::Surface);
    assert!(!props.caves);

    // Rows past the end of the stack resolve to the last layer
    let (deep, _) = terrain.layer_for_row(35, 100);
    assert_eq!(deep, LayerId::Lava);
}

#[test]
fn drained_events_do_not_repeat() {
    let mut core = flat_world(25, 18, 6);
    core.grid.set_tile(10, 7, TK_GROUND, true);

    core.robot.is_digging = true;
    core.robot.dig_x = 10;
    core.robot.dig_y = 7;
    for _ in 0..DIG_DURATION {
        dig::update_digging(&mut core.robot, &mut core.grid, &mut core.events);
    }

    let first = core.drain_events_json();
    assert!(first.contains("itemFound"));
    assert_eq!(core.drain_events_json(), "[]");
}

#[test]
fn screen_to_world_columns_account_for_scroll() {
    let mut core = flat_world(25, 18, 6);
    core.grid.scroll_by(64.0);

    assert_eq!(core.grid.col_at(10.0), 2);
    assert_eq!(core.grid.col_to_screen_x(2), 0.0);
    assert_eq!(core.first_visible_col(), 2);
}

#[test]
fn view_extraction_window_follows_scroll() {
    let mut core = flat_world(6, 4, 2);
    core.grid.scroll_by(64.0);

    let viewport_w = 6.0 * 32.0;
    core.extract_view_colors(viewport_w);

    // ceil(192/32)+1 = 7 columns per row, window starting at column 2
    assert_eq!(core.view_cols(), 7);
    assert!(core.view_buffer_len() >= 7 * 4);
    assert_eq!(core.view_buffer[0], Tile::Air.color());
    assert_eq!(core.view_buffer[2 * 7], LayerId::Dirt.default_color());
}
