mod common;

use common::{desktop, window};
use veranda::geometry::Rect;
use veranda::manager::{ModalOverlayManager, OverlaySurface, WindowManager};

fn overlay_manager() -> ModalOverlayManager<veranda::manager::DesktopManager> {
    ModalOverlayManager::new(
        desktop(1000.0, 800.0),
        Some(OverlaySurface::new(Rect::new(0.0, 0.0, 1000.0, 800.0))),
    )
}

#[test]
fn modal_windows_go_to_the_overlay() {
    let mut manager = overlay_manager();
    let plain = manager.add_window(window("plain"));
    let modal = manager.add_window(window("dialog").with_modal(true));

    assert!(manager.is_input_locked());
    assert_eq!(manager.interactable_window(), Some(modal));
    assert!(manager.overlay_windows().contains(&modal));
    assert!(!manager.inner().z_order().contains(&modal));
    assert!(manager.inner().z_order().contains(&plain));

    // The overlay stack sits on top of the inner z-order.
    assert_eq!(manager.z_order().last(), Some(&modal));
}

#[test]
fn most_recent_modal_holds_the_lock() {
    let mut manager = overlay_manager();
    let first = manager.add_window(window("first").with_modal(true));
    let second = manager.add_window(window("second").with_modal(true));

    assert_eq!(manager.interactable_window(), Some(second));
    assert!(!manager.window(first).unwrap().is_active());
    assert!(manager.window(second).unwrap().is_active());

    manager.remove_window(second);
    assert_eq!(manager.interactable_window(), Some(first));
    assert!(manager.window(first).unwrap().is_active());

    manager.remove_window(first);
    assert!(!manager.is_input_locked());
}

#[test]
fn flipping_modal_transplants_to_overlay() {
    let mut manager = overlay_manager();
    let id = manager.add_window(window("promoted"));
    assert!(!manager.is_input_locked());

    manager.set_window_modal(id, true).unwrap();
    assert!(manager.is_input_locked());
    assert!(manager.overlay_windows().contains(&id));
    assert!(!manager.inner().z_order().contains(&id));
    let promoted = manager.window(id).unwrap();
    assert!(promoted.decorated, "overlay windows are forced decorated");
    assert!(!promoted.borderless);

    manager.set_window_modal(id, false).unwrap();
    assert!(!manager.is_input_locked());
    assert!(manager.inner().z_order().contains(&id));
    assert!(!manager.window(id).unwrap().modal);
}

#[test]
fn without_overlay_surface_modal_windows_delegate() {
    let mut manager = ModalOverlayManager::new(desktop(1000.0, 800.0), None);
    let id = manager.add_window(window("dialog").with_modal(true));

    assert!(!manager.is_input_locked());
    assert!(manager.inner().z_order().contains(&id));
    assert!(manager.window(id).unwrap().modal);
}

#[test]
fn overlay_windows_close_through_the_decorator() {
    let mut manager = overlay_manager();
    let modal = manager.add_window(window("dialog").with_modal(true));

    let closed = manager.close_window(modal).unwrap();
    assert_eq!(closed.id(), modal);
    assert!(!manager.is_input_locked());
    assert!(manager.window(modal).is_none());
}

#[test]
fn session_state_passes_through_to_the_inner_strategy() {
    let mut manager = overlay_manager();
    let id = manager.add_window(window("doc"));
    let snapshot = manager.store_state();
    assert_eq!(snapshot.entries.len(), 1);
    assert_eq!(snapshot.entries[0].window, id);
}
