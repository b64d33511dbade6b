//! Frame rendering tests - layout, glyphs, camera slicing

use tui_scroller::core::{Camera, Player, SimpleRng, World};
use tui_scroller::term::{Frame, GameView};
use tui_scroller::types::{
    Tile, GROUND_Y, PLAYER_GLYPH, VIEW_HEIGHT, VIEW_WIDTH, WORLD_LENGTH,
};

fn grounded_world() -> World {
    let mut world = World::new();
    for x in 0..WORLD_LENGTH {
        for y in GROUND_Y..VIEW_HEIGHT {
            world.set(x, y, Tile::Ground);
        }
    }
    world
}

fn glyph_at(frame: &Frame, row: i32, col: i32) -> char {
    // World row N is frame line N + 1 (the header comes first).
    frame.lines()[(row + 1) as usize]
        .chars()
        .nth(col as usize)
        .unwrap()
}

#[test]
fn test_frame_layout() {
    let view = GameView::new();
    let frame = view.render(&grounded_world(), &Player::new(), &Camera::new());

    // Header + world rows + blank spacer + controls footer.
    assert_eq!(frame.lines().len(), (VIEW_HEIGHT + 3) as usize);
    for row in 0..VIEW_HEIGHT {
        assert_eq!(
            frame.lines()[(row + 1) as usize].chars().count(),
            VIEW_WIDTH as usize,
            "row {} has wrong width",
            row
        );
    }
}

#[test]
fn test_header_reflects_player_state() {
    let mut player = Player::new();
    player.score = 120;
    player.lives = 1;
    player.x = 42;

    let view = GameView::new();
    let frame = view.render(&grounded_world(), &player, &Camera::new());

    let header = &frame.lines()[0];
    assert!(header.contains("Score: 120"), "header: {}", header);
    assert!(header.contains("Lives: 1"), "header: {}", header);
    assert!(header.contains("Pos: 42/299"), "header: {}", header);
}

#[test]
fn test_player_and_tiles_drawn_at_origin() {
    let mut world = grounded_world();
    world.set(10, GROUND_Y - 4, Tile::Coin);
    let player = Player::new();

    let view = GameView::new();
    let frame = view.render(&world, &player, &Camera::new());

    assert_eq!(glyph_at(&frame, player.y, player.x), PLAYER_GLYPH);
    assert_eq!(glyph_at(&frame, GROUND_Y - 4, 10), 'o');
    for col in 0..VIEW_WIDTH {
        assert_eq!(glyph_at(&frame, GROUND_Y, col), '=');
    }
}

#[test]
fn test_frame_is_sliced_at_camera_offset() {
    let mut world = grounded_world();
    world.set(135, 10, Tile::Coin);

    let mut player = Player::new();
    player.x = 150;
    let mut camera = Camera::new();
    camera.update(player.x);
    assert_eq!(camera.offset, 130);

    let view = GameView::new();
    let frame = view.render(&world, &player, &camera);

    // World column c appears at frame column c - offset.
    assert_eq!(glyph_at(&frame, player.y, 150 - 130), PLAYER_GLYPH);
    assert_eq!(glyph_at(&frame, 10, 135 - 130), 'o');
}

#[test]
fn test_tiles_outside_window_are_not_drawn() {
    let mut world = grounded_world();
    world.set(5, 10, Tile::Coin);

    let mut player = Player::new();
    player.x = 150;
    let mut camera = Camera::new();
    camera.update(player.x);

    let view = GameView::new();
    let frame = view.render(&world, &player, &camera);
    assert!(!frame.lines()[11].contains('o'));
}

#[test]
fn test_render_into_reuses_frame() {
    let world = grounded_world();
    let player = Player::new();
    let camera = Camera::new();
    let view = GameView::new();

    let mut frame = Frame::new();
    view.render_into(&world, &player, &camera, &mut frame);
    let first = frame.clone();
    view.render_into(&world, &player, &camera, &mut frame);
    assert_eq!(frame, first);
}

#[test]
fn test_generated_world_renders_without_panic() {
    let mut rng = SimpleRng::new(12345);
    let world = World::generate(&mut rng);
    let view = GameView::new();
    let frame = view.render(&world, &Player::new(), &Camera::new());
    assert!(!frame.is_empty());
}
