//! End-to-end checks of the wall engine over the in-memory host.

#![allow(clippy::unwrap_used)]

use std::collections::BTreeSet;

use tilewall::geometry::{BoundingBox, RawGeometry};
use tilewall::grid::BuildTileGrid;
use tilewall::host::{Layer, MapHost, MemoryMap, Token};
use tilewall::paths::{PathKey, SynthesizePaths};
use tilewall::walls::RegionScan;
use tilewall::{TokenEvent, WallEngine, WallParams};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn host() -> MemoryMap {
    let mut map = MemoryMap::new();
    map.set_attribute("stone", "wall", "static");
    map.set_attribute("gate", "wall", "dynamic");
    map
}

/// A one-tile token whose top-left corner is at tile (`column`, `row`).
fn tile_token(id: &str, character: &str, column: i32, row: i32) -> Token {
    block_token(id, character, (column, row), (1, 1))
}

/// A token covering `size` tiles (columns, rows) from tile `corner`.
fn block_token(id: &str, character: &str, corner: (i32, i32), size: (i32, i32)) -> Token {
    let (column, row) = corner;
    let (columns, rows) = size;
    Token {
        id: id.to_owned(),
        page_id: "page".to_owned(),
        layer: Layer::Map,
        geometry: RawGeometry::new(
            f64::from(column) * 70.0 + f64::from(columns) * 35.0,
            f64::from(row) * 70.0 + f64::from(rows) * 35.0,
            f64::from(columns) * 70.0,
            f64::from(rows) * 70.0,
        ),
        represents: Some(character.to_owned()),
    }
}

fn stored(host: &MemoryMap) -> BTreeSet<PathKey> {
    host.paths().map(|(_, spec)| spec.key()).collect()
}

/// Paths required by every wall on the page, computed in one pass over `area`.
fn expected(host: &MemoryMap, params: &WallParams, area: BoundingBox) -> BTreeSet<PathKey> {
    let sources = RegionScan::new(area, "page", "").execute(host, params);
    let grid = BuildTileGrid::new(area, &sources, params.tile_size).execute();
    SynthesizePaths::new(&grid, "page", params)
        .execute()
        .iter()
        .map(|spec| spec.key())
        .collect()
}

fn add(engine: &WallEngine, host: &mut MemoryMap, token: Token) {
    host.insert_token(token.clone());
    engine.handle(host, &TokenEvent::Added(token)).unwrap();
}

fn remove(engine: &WallEngine, host: &mut MemoryMap, id: &str) {
    let token = host.remove_token(id).unwrap();
    engine.handle(host, &TokenEvent::Removed(token)).unwrap();
}

#[test]
fn incremental_updates_match_a_full_rebuild() {
    init_tracing();
    let params = WallParams::default();
    let engine = WallEngine::new(params.clone()).unwrap();
    let mut host = host();
    let area = BoundingBox::new(-210.0, -210.0, 700.0, 700.0);

    let layout = [
        tile_token("a", "stone", 0, 0),
        tile_token("b", "stone", 1, 0),
        tile_token("c", "stone", 1, 1),
        tile_token("d", "gate", 2, 1),
    ];
    for token in layout {
        add(&engine, &mut host, token);
        assert_eq!(stored(&host), expected(&host, &params, area));
    }

    for id in ["d", "c", "b", "a"] {
        remove(&engine, &mut host, id);
        assert_eq!(stored(&host), expected(&host, &params, area));
    }
    assert_eq!(host.path_count(), 0);
}

#[test]
fn moving_a_wall_through_a_corridor() {
    init_tracing();
    let params = WallParams::default();
    let engine = WallEngine::new(params.clone()).unwrap();
    let mut host = host();
    let area = BoundingBox::new(-350.0, -350.0, 1050.0, 1050.0);

    add(&engine, &mut host, tile_token("left", "stone", 0, 0));
    add(&engine, &mut host, tile_token("right", "stone", 4, 0));
    add(&engine, &mut host, tile_token("mover", "gate", 1, 2));

    for column in 2..=3 {
        let moved = tile_token("mover", "gate", column, 2);
        let previous = host.insert_token(moved.clone()).unwrap().snapshot();
        engine
            .handle(
                &mut host,
                &TokenEvent::Changed {
                    current: moved,
                    previous,
                },
            )
            .unwrap();
        assert_eq!(stored(&host), expected(&host, &params, area));
    }

    // Slide it up between the two static walls.
    let moved = tile_token("mover", "gate", 3, 0);
    let previous = host.insert_token(moved.clone()).unwrap().snapshot();
    engine.on_changed(&mut host, &moved, &previous).unwrap();
    assert_eq!(stored(&host), expected(&host, &params, area));
}

#[test]
fn walls_longer_than_the_scan_window_stay_in_sync() {
    init_tracing();
    let params = WallParams::default();
    let engine = WallEngine::new(params.clone()).unwrap();
    let mut host = host();
    let area = BoundingBox::new(-490.0, -490.0, 1400.0, 1050.0);

    add(&engine, &mut host, block_token("long", "stone", (0, 0), (5, 1)));
    add(&engine, &mut host, block_token("floor", "stone", (-2, 2), (9, 1)));
    let before = stored(&host);
    assert_eq!(before, expected(&host, &params, area));

    // A tile extending the long wall, then a tall gate touching that tile.
    add(&engine, &mut host, tile_token("end", "stone", 5, 0));
    assert_eq!(stored(&host), expected(&host, &params, area));
    add(&engine, &mut host, block_token("pillar", "gate", (6, -3), (1, 4)));
    assert_eq!(stored(&host), expected(&host, &params, area));

    remove(&engine, &mut host, "end");
    assert_eq!(stored(&host), expected(&host, &params, area));
    remove(&engine, &mut host, "pillar");
    assert_eq!(stored(&host), before);

    remove(&engine, &mut host, "long");
    remove(&engine, &mut host, "floor");
    assert_eq!(host.path_count(), 0);
}

#[test]
fn walls_on_other_pages_do_not_interact() {
    init_tracing();
    let engine = WallEngine::new(WallParams::default()).unwrap();
    let mut host = host();

    add(&engine, &mut host, tile_token("a", "stone", 0, 0));
    let elsewhere = Token {
        page_id: "other".to_owned(),
        ..tile_token("b", "stone", 1, 0)
    };
    add(&engine, &mut host, elsewhere);

    assert_eq!(host.path_count(), 16);
    let on_other = host.tokens("other", &[Layer::Map]).len();
    assert_eq!(on_other, 1);
    assert_eq!(
        host.paths().filter(|(_, spec)| spec.page_id == "other").count(),
        8
    );
}
