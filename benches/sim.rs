use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_scroller::core::{Camera, GameState, Player, SimpleRng, World};
use tui_scroller::term::{Frame, GameView};
use tui_scroller::types::GameAction;

fn bench_world_generation(c: &mut Criterion) {
    c.bench_function("world_generate", |b| {
        b.iter(|| {
            let mut rng = SimpleRng::new(black_box(12345));
            World::generate(&mut rng)
        })
    });
}

fn bench_tick(c: &mut Criterion) {
    c.bench_function("tick_100_mixed_input", |b| {
        b.iter(|| {
            let mut game = GameState::new(black_box(12345));
            for i in 0..100u32 {
                let action = match i % 5 {
                    0 | 1 => Some(GameAction::MoveRight),
                    2 => Some(GameAction::Jump),
                    _ => None,
                };
                game.tick(action);
            }
            game.score()
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    let world = World::generate(&mut rng);
    let player = Player::new();
    let camera = Camera::new();
    let view = GameView::new();
    let mut frame = Frame::new();

    c.bench_function("render_frame", |b| {
        b.iter(|| {
            view.render_into(&world, &player, &camera, &mut frame);
            frame.lines().len()
        })
    });
}

criterion_group!(benches, bench_world_generation, bench_tick, bench_render);
criterion_main!(benches);
