use tui_pong::core::GameState;
use tui_pong::term::{AnchorY, GameView, Viewport};
use tui_pong::types::{Command, SCENE_HEIGHT, SCENE_WIDTH};

fn all_text(fb: &tui_pong::term::FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_board_at_origin_when_exact_fit() {
    let scene = GameState::new().render_description();
    let fb = GameView::default().render(&scene, Viewport::new(SCENE_WIDTH, SCENE_HEIGHT));

    assert_eq!(fb.row_text(0), "=".repeat(80));
    assert_eq!(fb.row_text(23), "=".repeat(80));
    assert_eq!(fb.get(40, 12).unwrap().ch, '●');
    assert_eq!(fb.get(2, 10).unwrap().ch, '█');
    assert_eq!(fb.get(77, 13).unwrap().ch, '█');
    assert!(fb.row_text(24).starts_with("Controls:"));
}

#[test]
fn term_view_centers_scene_in_larger_viewport() {
    let scene = GameState::new().render_description();
    let fb = GameView::default().render(&scene, Viewport::new(100, 35));

    // (100 - 80) / 2 = 10, (35 - 25) / 2 = 5.
    assert_eq!(fb.get(9, 5).unwrap().ch, ' ');
    assert_eq!(fb.get(10, 5).unwrap().ch, '=');
    assert_eq!(fb.get(50, 17).unwrap().ch, '●');
}

#[test]
fn term_view_can_anchor_scene_to_top() {
    let scene = GameState::new().render_description();
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&scene, Viewport::new(80, 40));

    assert_eq!(fb.row_text(0), "=".repeat(80));
    assert_eq!(fb.get(40, 12).unwrap().ch, '●');
}

#[test]
fn term_view_reports_small_terminal() {
    let scene = GameState::new().render_description();
    let fb = GameView::default().render(&scene, Viewport::new(40, 10));

    let all = all_text(&fb);
    assert!(all.contains("Terminal too small"));
    assert!(all.contains("need 80x25"));
    assert!(!all.contains('●'));
}

#[test]
fn term_view_shows_pause_banner() {
    let mut game = GameState::new();
    game.handle_input(Command::TogglePause);
    let fb = GameView::default().render(
        &game.render_description(),
        Viewport::new(SCENE_WIDTH, SCENE_HEIGHT),
    );

    assert!(fb.row_text(12).contains(" - PAUSED - "));
}

#[test]
fn term_view_updates_score_text() {
    let mut game = GameState::new();
    while game.left_score() + game.right_score() == 0 {
        game.update();
    }
    let fb = GameView::default().render(
        &game.render_description(),
        Viewport::new(SCENE_WIDTH, SCENE_HEIGHT),
    );

    let expected = format!(" {} | {} ", game.left_score(), game.right_score());
    assert!(fb.row_text(1).contains(&expected));
}

#[test]
fn term_view_reuses_framebuffer_across_sizes() {
    let scene = GameState::new().render_description();
    let view = GameView::default();
    let mut fb = tui_pong::term::FrameBuffer::new(1, 1);

    view.render_into(&scene, Viewport::new(90, 30), &mut fb);
    assert_eq!((fb.width(), fb.height()), (90, 30));

    view.render_into(&scene, Viewport::new(80, 25), &mut fb);
    assert_eq!((fb.width(), fb.height()), (80, 25));
    assert_eq!(fb.get(40, 12).unwrap().ch, '●');
}
