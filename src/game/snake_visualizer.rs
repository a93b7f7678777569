//! Drives the game core on a fixed timer, records keyboard input between
//! ticks and mirrors the board into a tilemap.

use bevy::prelude::*;
use bevy_ecs_tilemap::map::TilemapGridSize;
use bevy_ecs_tilemap::map::TilemapId;
use bevy_ecs_tilemap::map::TilemapSize;
use bevy_ecs_tilemap::map::TilemapTexture;
use bevy_ecs_tilemap::map::TilemapTileSize;
use bevy_ecs_tilemap::map::TilemapType;
use bevy_ecs_tilemap::prelude::get_tilemap_center_transform;
use bevy_ecs_tilemap::tiles::TileBundle;
use bevy_ecs_tilemap::tiles::TilePos;
use bevy_ecs_tilemap::tiles::TileStorage;
use bevy_ecs_tilemap::tiles::TileTextureIndex;
use bevy_ecs_tilemap::TilemapBundle;
use bevy_ecs_tilemap::TilemapPlugin;
use rand::{rngs::StdRng, SeedableRng};

use crate::game::assets::{HandleMap, ImageKey};
use crate::game::audio::sfx::PlaySfx;
use crate::snake_game::{GameEvent, GameState, Grid, GridPoint, Heading, Phase};
use crate::{AppSet, GameSettings};

/// The running game. Changes to it trigger a board redraw.
#[derive(Resource, Deref, DerefMut)]
pub struct ActiveGame(pub GameState);

#[derive(Resource, Deref, DerefMut)]
struct GameRng(StdRng);

#[derive(Resource, Deref, DerefMut)]
struct TickTimer(Timer);

/// Latest usable heading pressed since the last tick.
#[derive(Resource, Default)]
pub struct SnakeMovementController(Option<Heading>);

/// Fired once when the running game ends.
#[derive(Event, Debug)]
pub struct GameOverCue;

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<SnakeMovementController>();
    app.add_plugins(TilemapPlugin);

    app.add_systems(Startup, (start_game, spawn_board).chain());
    app.add_systems(Update, tick_timer.in_set(AppSet::TickTimers));
    app.add_systems(
        Update,
        (record_movement_controller, handle_restart_and_quit).in_set(AppSet::RecordInput),
    );
    app.add_systems(
        Update,
        (
            advance_game,
            redraw_board.run_if(resource_changed::<ActiveGame>),
        )
            .chain()
            .in_set(AppSet::Update),
    );
    app.observe(announce_game_over);
}

fn start_game(mut commands: Commands, settings: Res<GameSettings>) {
    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let state = GameState::from_config(&settings, &mut rng);
    commands.insert_resource(ActiveGame(state));
    commands.insert_resource(GameRng(rng));
    commands.insert_resource(TickTimer(Timer::new(settings.tick_period(), TimerMode::Repeating)));
}

fn tick_timer(time: Res<Time>, mut timer: ResMut<TickTimer>) {
    timer.tick(time.delta());
}

fn record_movement_controller(
    input: Res<ButtonInput<KeyCode>>,
    game: Res<ActiveGame>,
    mut controller: ResMut<SnakeMovementController>,
) {
    let bindings = [
        ([KeyCode::KeyW, KeyCode::ArrowUp], Heading::Up),
        ([KeyCode::KeyS, KeyCode::ArrowDown], Heading::Down),
        ([KeyCode::KeyA, KeyCode::ArrowLeft], Heading::Left),
        ([KeyCode::KeyD, KeyCode::ArrowRight], Heading::Right),
    ];
    let current = game.snake().heading();
    for (keys, heading) in bindings {
        // A reverse press would be dropped by the snake anyway; skipping it
        // here keeps it from hiding an earlier valid press this tick.
        if input.any_just_pressed(keys) && !current.is_reverse(heading) {
            controller.0 = Some(heading);
        }
    }
}

fn handle_restart_and_quit(
    input: Res<ButtonInput<KeyCode>>,
    mut game: ResMut<ActiveGame>,
    mut rng: ResMut<GameRng>,
    mut controller: ResMut<SnakeMovementController>,
    mut timer: ResMut<TickTimer>,
    mut exit: EventWriter<AppExit>,
) {
    if input.just_pressed(KeyCode::Escape) {
        exit.send(AppExit::Success);
        return;
    }
    if input.just_pressed(KeyCode::Enter) && game.phase() == Phase::GameOver {
        game.reset(&mut rng.0);
        controller.0 = None;
        timer.reset();
    }
}

fn advance_game(
    mut commands: Commands,
    timer: Res<TickTimer>,
    mut game: ResMut<ActiveGame>,
    mut rng: ResMut<GameRng>,
    mut controller: ResMut<SnakeMovementController>,
) {
    if !timer.just_finished() || !game.is_running() { return; }
    let events = game.tick(controller.0.take(), &mut rng.0);
    for event in events {
        if let Some(sfx) = PlaySfx::for_game_event(event) {
            commands.trigger(sfx);
        }
        if let GameEvent::GameOver(_) = event {
            commands.trigger(GameOverCue);
        }
    }
}

fn announce_game_over(_trigger: Trigger<GameOverCue>, game: Res<ActiveGame>) {
    info!(
        "game over: {:?}, final score {}",
        game.game_over_reason(),
        game.score()
    );
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum CellKind {
    Empty,
    Food,
    Snake,
    Crash,
}

fn tile_texture_index_of_cell_kind(kind: CellKind) -> Option<u32> {
    match kind {
        CellKind::Empty => None,
        CellKind::Crash => Some(0),
        CellKind::Food => Some(1),
        CellKind::Snake => Some(2),
    }
}

/// What each cell should show, indexed `row * width + col`. A crash is drawn
/// on the head, or on the last on-board segment when the head left the grid.
fn board_cells(state: &GameState) -> Vec<CellKind> {
    let grid = state.grid();
    let mut cells = vec![CellKind::Empty; grid.cell_count()];
    let index = |pt: GridPoint| -> Option<usize> {
        grid.is_in_bounds(pt)
            .then(|| pt.y as usize * grid.width as usize + pt.x as usize)
    };

    let segments = state.snake_segments();
    for &pt in &segments {
        if let Some(i) = index(pt) { cells[i] = CellKind::Snake; }
    }
    if state.is_running() {
        if let Some(i) = index(state.food_position()) { cells[i] = CellKind::Food; }
    } else if let Some(i) = segments.iter().rev().find_map(|&pt| index(pt)) {
        cells[i] = CellKind::Crash;
    }
    cells
}

/// Board rows count down from the top; tilemap rows count up.
fn tile_pos_of(grid: &Grid, pt: GridPoint) -> TilePos {
    TilePos { x: pt.x as u32, y: (grid.height - 1 - pt.y) as u32 }
}

fn spawn_board(
    mut commands: Commands,
    game: Res<ActiveGame>,
    images: Res<HandleMap<ImageKey>>,
) {
    let grid = game.grid();
    let map_size = TilemapSize { x: grid.width as u32, y: grid.height as u32 };
    let tile_size = TilemapTileSize { x: Grid::CELL_SIZE as f32, y: Grid::CELL_SIZE as f32 };
    let grid_size: TilemapGridSize = tile_size.into();
    let map_type = TilemapType::Square;
    commands.spawn((
        Name::new("Board"),
        TilemapBundle {
            grid_size,
            size: map_size,
            storage: TileStorage::empty(map_size),
            map_type,
            texture: TilemapTexture::Single(images[&ImageKey::BoardTiles].clone_weak()),
            tile_size,
            transform: get_tilemap_center_transform(&map_size, &grid_size, &map_type, 0.0),
            ..Default::default()
        },
    ));
}

fn redraw_board(
    mut commands: Commands,
    game: Res<ActiveGame>,
    mut tilemap_query: Query<(Entity, &mut TileStorage)>,
    mut tile_texture_query: Query<&mut TileTextureIndex>,
) {
    let Ok((tilemap_entity, mut tile_storage)) = tilemap_query.get_single_mut() else { return; };
    let grid = game.grid();
    let cells = board_cells(&game);
    for y in 0..grid.height {
        for x in 0..grid.width {
            let pt = GridPoint::new(x, y);
            let kind = cells[y as usize * grid.width as usize + x as usize];
            let tile_position = tile_pos_of(&grid, pt);
            match (tile_texture_index_of_cell_kind(kind), tile_storage.get(&tile_position)) {
                (None, None) => {}
                (None, Some(tile)) => {
                    tile_storage.remove(&tile_position);
                    commands.entity(tile).despawn();
                }
                (Some(index), None) => {
                    let tile_entity = commands
                        .spawn(TileBundle {
                            position: tile_position,
                            tilemap_id: TilemapId(tilemap_entity),
                            texture_index: TileTextureIndex(index),
                            ..Default::default()
                        })
                        .id();
                    tile_storage.set(&tile_position, tile_entity);
                }
                (Some(index), Some(tile)) => {
                    // Tiles spawned this frame are not queryable yet.
                    if let Ok(mut texture) = tile_texture_query.get_mut(tile) {
                        texture.0 = index;
                    }
                }
            }
        }
    }
}
