mod common;

use common::{init_logging, window};
use veranda::config::Config;
use veranda::event::TabEvent;
use veranda::geometry::Rect;
use veranda::manager::{TabManager, TabNavigationPolicy, WindowManager};

fn tab_manager() -> TabManager {
    init_logging();
    TabManager::new(Config::default(), Rect::new(0.0, 0.0, 800.0, 600.0))
}

#[test]
fn tabs_mirror_window_properties() {
    let mut manager = tab_manager();
    let mut w = window("Report");
    w.icon = Some(veranda::window::IconRef("report.png".into()));
    let id = manager.add_window(w);

    let tab = &manager.tabs()[0];
    assert_eq!(tab.label, "Report");
    assert_eq!(tab.icon.as_ref().unwrap().0, "report.png");
    assert!(tab.closable);

    manager.window_mut(id).unwrap().title = "Report (edited)".into();
    manager.sync_tabs();
    assert_eq!(manager.tabs()[0].label, "Report (edited)");
}

#[test]
fn newly_added_tab_is_selected_and_active() {
    let mut manager = tab_manager();
    let a = manager.add_window(window("a"));
    assert_eq!(manager.selected_tab(), Some(0));
    assert_eq!(manager.active_window(), Some(a));

    let b = manager.add_window(window("b"));
    assert_eq!(manager.selected_tab(), Some(1));
    assert_eq!(manager.active_window(), Some(b));
    assert!(!manager.window(a).unwrap().is_active());
}

#[test]
fn modal_window_disables_all_other_tabs() {
    let mut manager = tab_manager();
    let a = manager.add_window(window("a"));
    let b = manager.add_window(window("b"));
    let c = manager.add_window(window("c"));

    manager.set_window_modal(b, true).unwrap();

    for (i, tab) in manager.tabs().iter().enumerate() {
        if tab.window == b {
            assert!(!tab.disabled, "modal tab stays enabled");
            assert_eq!(manager.selected_tab(), Some(i), "modal tab is force-selected");
        } else {
            assert!(tab.disabled, "non-modal tabs are disabled");
        }
    }
    assert_eq!(manager.active_window(), Some(b));

    // Selecting a disabled tab is rejected.
    assert!(manager.select_tab(0).is_err());

    manager.set_window_modal(b, false).unwrap();
    assert!(manager.tabs().iter().all(|t| !t.disabled));
    let _ = (a, c);
}

#[test]
fn closing_selected_tab_falls_back_to_last() {
    let mut manager = tab_manager();
    manager.add_window(window("a"));
    manager.add_window(window("b"));
    let c = manager.add_window(window("c"));
    manager.select_tab(1).unwrap();

    manager.close_tab(1).unwrap();
    assert_eq!(manager.tabs().len(), 2);
    assert_eq!(
        manager.selected_tab(),
        Some(1),
        "selection falls back to the last tab"
    );
    assert_eq!(manager.active_window(), Some(c));
}

#[test]
fn tab_close_delegates_to_window_close() {
    let mut manager = tab_manager();
    let mut w = window("pinned");
    w.closeable = false;
    manager.add_window(w);

    // The tab mirrors the non-closeable window, so the close is refused and
    // the tab survives.
    assert!(manager.close_tab(0).is_err());
    assert_eq!(manager.tabs().len(), 1);
}

#[test]
fn close_emits_tab_and_window_events() {
    let mut manager = tab_manager();
    let id = manager.add_window(window("w"));
    manager.take_events();
    manager.take_tab_events();

    manager.close_tab(0).unwrap();
    assert!(manager
        .take_tab_events()
        .iter()
        .any(|e| matches!(e, TabEvent::Closed { window_id, .. } if *window_id == id)));
    assert!(manager
        .take_events()
        .iter()
        .any(|e| matches!(e, veranda::event::WindowEvent::Closed { window_id, .. } if *window_id == id)));
}

#[test]
fn reorder_moves_tab_and_selection_follows() {
    let mut manager = tab_manager();
    let a = manager.add_window(window("a"));
    let b = manager.add_window(window("b"));
    let c = manager.add_window(window("c"));
    manager.select_tab(0).unwrap();
    manager.take_tab_events();

    manager.move_tab(0, 2).unwrap();
    let order: Vec<_> = manager.tabs().iter().map(|t| t.window).collect();
    assert_eq!(order, vec![b, c, a]);
    assert_eq!(manager.selected_tab(), Some(2), "selection follows the moved tab");
    assert!(manager
        .take_tab_events()
        .iter()
        .any(|e| matches!(e, TabEvent::Reordered { from: 0, to: 2, .. })));

    assert!(manager.move_tab(0, 9).is_err());
}

#[test]
fn navigation_policy_skips_disabled_tabs() {
    let mut manager = tab_manager();
    manager.add_window(window("a"));
    let b = manager.add_window(window("b"));
    manager.add_window(window("c"));
    manager.set_window_modal(b, true).unwrap();

    let policy = TabNavigationPolicy;
    // Only the modal tab (index 1) is enabled; navigation always lands on it.
    assert_eq!(policy.next(manager.tabs(), 0), Some(1));
    assert_eq!(policy.next(manager.tabs(), 1), Some(1));
    assert_eq!(policy.previous(manager.tabs(), 2), Some(1));

    manager.set_window_modal(b, false).unwrap();
    assert_eq!(policy.next(manager.tabs(), 2), Some(0), "wraps around");
    assert_eq!(policy.previous(manager.tabs(), 0), Some(2));
}
