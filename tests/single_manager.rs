mod common;

use common::{init_logging, window};
use veranda::geometry::Rect;
use veranda::manager::{SingleManager, WindowManager};
use veranda::window::WindowState;

fn single() -> SingleManager {
    init_logging();
    SingleManager::new(Rect::new(0.0, 0.0, 640.0, 480.0))
}

#[test]
fn every_window_is_forced_full_bleed_and_undecorated() {
    let mut manager = single();
    let id = manager.add_window(window("full"));

    let w = manager.window(id).unwrap();
    assert!(w.borderless);
    assert!(!w.decorated);
    assert_eq!(w.bounds(), Rect::new(0.0, 0.0, 640.0, 480.0));
}

#[test]
fn only_the_topmost_window_is_active() {
    let mut manager = single();
    let below = manager.add_window(window("below"));
    let top = manager.add_window(window("top"));

    assert_eq!(manager.active_window(), Some(top));
    assert!(!manager.window(below).unwrap().is_active());

    manager.remove_window(top);
    assert_eq!(manager.active_window(), Some(below));
    assert!(manager.window(below).unwrap().is_active());
}

#[test]
fn container_resize_refits_the_stack() {
    let mut manager = single();
    let id = manager.add_window(window("w"));
    manager.set_container_bounds(Rect::new(0.0, 0.0, 800.0, 600.0));
    assert_eq!(
        manager.window(id).unwrap().bounds(),
        Rect::new(0.0, 0.0, 800.0, 600.0)
    );
}

#[test]
fn minimizing_only_hides_content() {
    let mut manager = single();
    let id = manager.add_window(window("w"));
    manager.set_window_state(id, WindowState::Minimized).unwrap();

    let w = manager.window(id).unwrap();
    assert!(!w.content_visible);
    assert_eq!(w.bounds(), Rect::new(0.0, 0.0, 640.0, 480.0), "still full-bleed");
}
