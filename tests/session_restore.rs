mod common;

use common::{desktop, window};
use veranda::geometry::Rect;
use veranda::manager::{transfer_windows, SessionState, SingleManager, WindowManager};
use veranda::window::WindowState;

#[test]
fn session_round_trip_restores_bounds_and_state() -> Result<(), Box<dyn std::error::Error>> {
    let mut manager = desktop(1920.0, 1080.0);
    let doc = manager.add_window(window("doc"));
    let maxed = manager.add_window(
        veranda::Window::new("maxed").with_bounds(Rect::new(40.0, 40.0, 400.0, 300.0)),
    );
    manager.set_window_state(maxed, WindowState::Maximized)?;

    let snapshot = manager.store_state();
    assert_eq!(snapshot.entries.len(), 2);
    let maxed_entry = snapshot
        .entries
        .iter()
        .find(|e| e.window == maxed)
        .expect("snapshot entry for the maximized window");
    assert_eq!(
        maxed_entry.bounds,
        Rect::new(40.0, 40.0, 400.0, 300.0),
        "snapshot keeps the NORMAL geometry, not the maximized one"
    );

    // Shuffle things around, then restore.
    manager.set_window_state(maxed, WindowState::Normal)?;
    manager.window_mut(doc).unwrap().set_bounds(Rect::new(500.0, 500.0, 100.0, 100.0));
    manager.window_mut(maxed).unwrap().set_bounds(Rect::new(600.0, 600.0, 100.0, 100.0));

    manager.restore_state(&snapshot);
    assert_eq!(
        manager.window(doc).unwrap().bounds(),
        Rect::new(10.0, 10.0, 300.0, 200.0)
    );
    assert_eq!(manager.window(maxed).unwrap().state(), WindowState::Maximized);
    manager.set_window_state(maxed, WindowState::Normal)?;
    assert_eq!(
        manager.window(maxed).unwrap().bounds(),
        Rect::new(40.0, 40.0, 400.0, 300.0)
    );
    Ok(())
}

#[test]
fn snapshot_survives_json_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let mut manager = desktop(1000.0, 800.0);
    manager.add_window(window("a"));
    manager.add_window(window("b"));

    let snapshot = manager.store_state();
    let json = serde_json::to_string(&snapshot)?;
    let decoded: SessionState = serde_json::from_str(&json)?;
    assert_eq!(decoded.entries.len(), snapshot.entries.len());
    for (a, b) in decoded.entries.iter().zip(&snapshot.entries) {
        assert_eq!(a.window, b.window);
        assert_eq!(a.bounds, b.bounds);
    }
    Ok(())
}

#[test]
fn stale_entries_are_skipped_on_restore() {
    let mut manager = desktop(1000.0, 800.0);
    let keep = manager.add_window(window("keep"));
    let gone = manager.add_window(window("gone"));

    let snapshot = manager.store_state();
    manager.remove_window(gone);

    manager.restore_state(&snapshot);
    assert!(manager.window(keep).is_some());
    assert!(manager.window(gone).is_none());
}

#[test]
fn restored_windows_do_not_get_recascaded() {
    let mut manager = desktop(1000.0, 800.0);
    let id = manager.add_window(veranda::Window::new("floating"));
    let placed = manager.window(id).unwrap().bounds();

    let snapshot = manager.store_state();
    manager.restore_state(&snapshot);
    assert!(manager.window(id).unwrap().positioned);
    assert_eq!(manager.window(id).unwrap().bounds(), placed);
}

#[test]
fn manager_swap_preserves_window_identity() {
    let mut source = desktop(1000.0, 800.0);
    let a = source.add_window(window("a"));
    let b = source.add_window(window("b"));

    let mut target = SingleManager::new(Rect::new(0.0, 0.0, 640.0, 480.0));
    let moved = transfer_windows(&mut source, &mut target);

    assert_eq!(moved, 2);
    assert!(source.z_order().is_empty());
    assert_eq!(target.z_order(), vec![a, b]);

    // The destination strategy applied its own decoration policy.
    let migrated = target.window(a).unwrap();
    assert!(migrated.borderless);
    assert!(!migrated.decorated);
    assert_eq!(migrated.bounds(), Rect::new(0.0, 0.0, 640.0, 480.0));
    assert_eq!(target.active_window(), Some(b));
}
