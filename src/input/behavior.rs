//! Window interaction behavior: pointer gestures to move/resize operations.
//!
//! The behavior owns the transient grab sessions and translates pointer
//! events into window geometry changes plus a list of [`BehaviorAction`]s
//! for the host shell to apply (cursor shape, context menu, state toggle).
//! Toggling MAXIMIZED goes through the host's manager, not the window
//! directly, so the strategy's layout handling stays in one place.

use tracing::trace;

use crate::error::VerandaResult;
use crate::geometry::{scene_to_local, Point, Rect};
use crate::input::grabs::{edge_for_window, MoveGrab, ResizeEdge, ResizeGrab};
use crate::input::{CursorIcon, MouseButton, PointerEvent};
use crate::window::Window;

/// Side effects the behavior asks the host shell to perform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BehaviorAction {
    CursorChanged(CursorIcon),
    ShowContextMenu { position: Point },
    HideContextMenu,
    /// Toggle MAXIMIZED ⇄ NORMAL through the window's manager.
    ToggleMaximize,
    /// Enable/disable the render-cache hint for the drag duration.
    RenderCacheHint(bool),
}

/// Pointer-gesture handling for one window.
#[derive(Debug, Default)]
pub struct WindowBehavior {
    move_grab: Option<MoveGrab>,
    resize_grab: Option<ResizeGrab>,
    cursor: CursorIcon,
    menu_visible: bool,
}

impl WindowBehavior {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.move_grab.is_some() || self.resize_grab.is_some()
    }

    pub fn cursor(&self) -> CursorIcon {
        self.cursor
    }

    /// Pointer press: begins a resize session inside the resize border, or a
    /// title-bar drag session, when the window's flags allow it.
    pub fn on_pressed(
        &mut self,
        window: &mut Window,
        scale: f64,
        event: &PointerEvent,
    ) -> VerandaResult<Vec<BehaviorAction>> {
        let mut actions = Vec::new();
        let local = scene_to_local(event.position, scale)?;

        if event.button != Some(MouseButton::Primary) {
            return Ok(actions);
        }

        if window.resizable && !window.borderless && !self.is_dragging() {
            let edge = edge_for_window(window, local);
            if edge != ResizeEdge::NONE {
                trace!("{} resize session on {:?}", window.id(), edge);
                self.resize_grab = Some(ResizeGrab::new(local, edge, window));
                return Ok(actions);
            }
        }

        if window.movable && window.title_bar_rect().contains(local) {
            trace!("{} drag session", window.id());
            self.move_grab = Some(MoveGrab::new(local, window));
            actions.push(BehaviorAction::RenderCacheHint(true));
        }

        Ok(actions)
    }

    /// Pointer drag: feeds the active session, if any.
    pub fn on_dragged(
        &mut self,
        window: &mut Window,
        parent: &Rect,
        scale: f64,
        event: &PointerEvent,
    ) -> VerandaResult<Vec<BehaviorAction>> {
        let local = scene_to_local(event.position, scale)?;

        if let Some(grab) = self.resize_grab.as_mut() {
            grab.motion(window, local);
        } else if let Some(grab) = self.move_grab {
            grab.motion(window, local, parent);
        }

        Ok(Vec::new())
    }

    /// Pointer release: ends any session, restores the default cursor and
    /// clears the render-cache hint.
    pub fn on_released(&mut self, _window: &mut Window) -> Vec<BehaviorAction> {
        let mut actions = Vec::new();
        let had_move = self.move_grab.take().is_some();
        let had_resize = self.resize_grab.take().is_some();
        if had_move {
            actions.push(BehaviorAction::RenderCacheHint(false));
        }
        if (had_move || had_resize) && self.cursor != CursorIcon::Default {
            self.cursor = CursorIcon::Default;
            actions.push(BehaviorAction::CursorChanged(CursorIcon::Default));
        }
        actions
    }

    /// Pointer hover over the window body: hit-tests the resize border and
    /// updates the cursor. Only applies while no session runs, the window is
    /// active, and it has a border to grab.
    pub fn on_moved(
        &mut self,
        window: &Window,
        scale: f64,
        event: &PointerEvent,
    ) -> VerandaResult<Vec<BehaviorAction>> {
        if self.is_dragging() || window.borderless || !window.is_active() {
            return Ok(Vec::new());
        }
        let local = scene_to_local(event.position, scale)?;
        let cursor = if window.resizable {
            edge_for_window(window, local).cursor()
        } else {
            CursorIcon::Default
        };
        if cursor == self.cursor {
            return Ok(Vec::new());
        }
        self.cursor = cursor;
        Ok(vec![BehaviorAction::CursorChanged(cursor)])
    }

    /// Click handling: hides a showing context menu on any title-bar click,
    /// opens the menu on secondary click, toggles maximize on double click.
    pub fn on_clicked(
        &mut self,
        window: &Window,
        scale: f64,
        event: &PointerEvent,
    ) -> VerandaResult<Vec<BehaviorAction>> {
        let mut actions = Vec::new();
        let local = scene_to_local(event.position, scale)?;
        let on_title_bar = window.title_bar_rect().contains(local);

        if on_title_bar && self.menu_visible {
            self.menu_visible = false;
            actions.push(BehaviorAction::HideContextMenu);
        }

        match event.button {
            Some(MouseButton::Secondary) => {
                self.menu_visible = true;
                actions.push(BehaviorAction::ShowContextMenu {
                    position: event.position,
                });
            }
            Some(MouseButton::Primary)
                if event.click_count >= 2 && on_title_bar && window.maximizable =>
            {
                actions.push(BehaviorAction::ToggleMaximize);
            }
            _ => {}
        }

        Ok(actions)
    }
}
