// Host-side tests for the smaller page effects: testimonial deck, custom
// cursor, draggable shapes, text loops and teardown scopes.

use glam::Vec2;
use site_web::carousel::Deck;
use site_web::config::{CursorParams, DeckParams};
use site_web::cursor::CursorState;
use site_web::drag::{ShapeBoard, ShapePosition};
use site_web::lifecycle::{LiveCounter, Scope};
use site_web::text_fx::{coded_color, ScrambleLoop, TaglineCycle, CODED_COLORS};
use std::cell::RefCell;
use std::rc::Rc;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn deck_stacks_two_cards_behind_the_front() {
    let deck = Deck::new(DeckParams::default(), 4, 0.0);
    let front = deck.pose(0);
    assert!(front.interactive);
    assert_eq!(front.opacity, 1.0);
    assert_eq!(front.z_index, 4);

    let one = deck.pose(1);
    assert!(approx(one.translate_y_px, -25.0));
    assert!(approx(one.scale, 0.9));
    assert!(approx(one.rotate_deg, 6.0));
    assert!(!one.interactive);

    let two = deck.pose(2);
    assert!(approx(two.translate_y_px, -50.0));
    assert!(approx(two.scale, 0.8));
    assert_eq!(two.z_index, 2);

    let hidden = deck.pose(3);
    assert_eq!(hidden.opacity, 0.0);
    assert!(approx(hidden.translate_y_px, 50.0));
    assert_eq!(hidden.transform_css(), "translateY(50px) scale(0.8) rotate(0deg)");
}

#[test]
fn deck_wraps_in_both_directions() {
    let mut deck = Deck::new(DeckParams::default(), 3, 0.0);
    deck.prev(0.0);
    assert_eq!(deck.index(), 2);
    deck.next(0.0);
    deck.next(0.0);
    assert_eq!(deck.index(), 1);
    // rotation follows the index difference, so earlier cards lean left
    assert!(approx(deck.pose(0).rotate_deg, -6.0));
}

#[test]
fn deck_autoplay_pauses_while_hovered() {
    let mut deck = Deck::new(DeckParams::default(), 3, 0.0);
    assert!(!deck.tick(4999.0));
    assert!(deck.tick(5000.0));
    assert_eq!(deck.index(), 1);

    deck.set_hovered(true, 6000.0);
    assert!(!deck.tick(20_000.0));
    deck.set_hovered(false, 20_000.0);
    assert!(!deck.tick(24_999.0));
    assert!(deck.tick(25_000.0));
    assert_eq!(deck.index(), 2);
}

#[test]
fn manual_navigation_restarts_the_interval() {
    let mut deck = Deck::new(DeckParams::default(), 3, 0.0);
    deck.next(4000.0);
    assert!(!deck.tick(5000.0));
    assert!(deck.tick(9000.0));
}

#[test]
fn cursor_rings_reach_the_pointer_at_their_own_pace() {
    let mut c = CursorState::new(CursorParams::default());
    c.on_move(Vec2::new(100.0, 50.0), 0.0);
    let early = c.frame(50.0);
    assert!(early.inner.x > early.outer.x, "inner dot leads the outer ring");
    let inner_done = c.frame(100.0);
    assert!((inner_done.inner - Vec2::new(100.0, 50.0)).length() < 1e-3);
    assert!(inner_done.outer.x < 100.0);
    let all_done = c.frame(400.0);
    assert!((all_done.outer - Vec2::new(100.0, 50.0)).length() < 1e-3);
}

#[test]
fn cursor_grows_over_interactive_elements() {
    let mut c = CursorState::new(CursorParams::default());
    assert!(approx(c.frame(0.0).outer_size_px, 32.0));
    c.on_hover_interactive(true, 0.0);
    assert!(approx(c.frame(300.0).outer_size_px, 60.0));
    c.on_hover_interactive(false, 300.0);
    assert!(approx(c.frame(600.0).outer_size_px, 32.0));
}

#[test]
fn dragging_keeps_the_grab_offset() {
    let mut board = ShapeBoard::default();
    assert_eq!(board.shapes[1], ShapePosition::Percent { top: 50.0, left: 0.0 });
    assert!(board.grab(0, Vec2::new(150.0, 120.0), Vec2::new(140.0, 100.0)));
    assert!(board.is_dragging());

    let moved = board.drag_to(Vec2::new(300.0, 300.0), Vec2::new(100.0, 100.0));
    assert_eq!(moved, Some((0, ShapePosition::Px(Vec2::new(190.0, 180.0)))));
    assert_eq!(board.shapes[0].css(), ("180px".to_string(), "190px".to_string()));

    assert_eq!(board.release(), Some(0));
    assert_eq!(board.drag_to(Vec2::ZERO, Vec2::ZERO), None);
    assert!(!board.grab(7, Vec2::ZERO, Vec2::ZERO));
}

#[test]
fn releasing_mid_drag_leaves_nothing_grabbed() {
    let mut board = ShapeBoard::default();
    assert!(board.grab(2, Vec2::new(10.0, 10.0), Vec2::ZERO));
    board.drag_to(Vec2::new(40.0, 40.0), Vec2::ZERO);
    assert_eq!(board.release(), Some(2));
    assert!(!board.is_dragging());
    assert_eq!(board.release(), None);
}

#[test]
fn tagline_holds_fades_and_advances() {
    let cycle = TaglineCycle::new(3);
    assert_eq!(cycle.sample(0.0), (0, 1.0));
    let (i, fading) = cycle.sample(3750.0);
    assert_eq!(i, 0);
    assert!(fading > 0.0 && fading < 1.0);
    assert_eq!(cycle.sample(4000.0), (1, 0.0));
    assert_eq!(cycle.sample(4500.0), (1, 1.0));
    assert_eq!(cycle.sample(13_500.0), (0, 1.0));
}

#[test]
fn coded_word_scrambles_and_restores() {
    let fx = ScrambleLoop::coded("coded");
    assert_eq!(fx.sample(0.0), "coded");
    assert_eq!(fx.sample(1550.0), "#?@!&");
    assert_eq!(fx.sample(1000.0 + 2.0 * 500.0 + 100.0 + 10.0), "coded");
    assert_eq!(fx.sample(1000.0 + fx.period_ms()), "coded");
}

#[test]
fn coded_colour_ping_pongs() {
    let seq: Vec<&str> = [0.0, 1500.0, 3000.0, 4500.0, 6000.0]
        .into_iter()
        .map(coded_color)
        .collect();
    assert_eq!(
        seq,
        vec![CODED_COLORS[0], CODED_COLORS[1], CODED_COLORS[2], CODED_COLORS[1], CODED_COLORS[0]]
    );
}

#[test]
fn scope_runs_undo_steps_newest_first_once() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut scope = Scope::new("test");
    for i in 0..3 {
        let log = log.clone();
        scope.defer(move || log.borrow_mut().push(i));
    }
    assert_eq!(scope.len(), 3);
    scope.dispose();
    scope.dispose();
    assert_eq!(*log.borrow(), vec![2, 1, 0]);
    assert!(scope.is_empty());
}

#[test]
fn dropping_a_scope_balances_live_bindings() {
    let live = LiveCounter::default();
    {
        let mut page = Scope::new("page");
        let mut desktop = Scope::new("desktop");
        for _ in 0..4 {
            live.track(&mut page);
        }
        live.track(&mut desktop);
        assert_eq!(live.get(), 5);
        drop(desktop);
        assert_eq!(live.get(), 4);
    }
    assert_eq!(live.get(), 0);
}
