use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_pong::core::GameState;
use tui_pong::term::{FrameBuffer, GameView, Viewport};
use tui_pong::types::{Command, SCENE_HEIGHT, SCENE_WIDTH};

fn bench_update(c: &mut Criterion) {
    let mut state = GameState::new();

    c.bench_function("game_update", |b| {
        b.iter(|| {
            if state.game_over() {
                state.handle_input(Command::Restart);
            }
            state.update();
        })
    });
}

fn bench_handle_input(c: &mut Criterion) {
    let mut state = GameState::new();

    c.bench_function("handle_input_move", |b| {
        b.iter(|| {
            state.handle_input(black_box(Command::MoveLeftPaddleUp));
            state.handle_input(black_box(Command::MoveLeftPaddleDown));
        })
    });
}

fn bench_render_description(c: &mut Criterion) {
    let state = GameState::new();

    c.bench_function("render_description", |b| {
        b.iter(|| black_box(state.render_description()))
    });
}

fn bench_game_view(c: &mut Criterion) {
    let scene = GameState::new().render_description();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(SCENE_WIDTH, SCENE_HEIGHT);

    c.bench_function("game_view_render_into", |b| {
        b.iter(|| {
            view.render_into(
                black_box(&scene),
                Viewport::new(SCENE_WIDTH, SCENE_HEIGHT),
                &mut fb,
            );
        })
    });
}

criterion_group!(
    benches,
    bench_update,
    bench_handle_input,
    bench_render_description,
    bench_game_view
);
criterion_main!(benches);
