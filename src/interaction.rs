//! Pointer handling for the active scene.
//!
//! A press activates the first widget under the pointer. While the pointer is
//! held, moving it drags every slider under it; the scan stops at the first
//! non-slider widget, which scene construction guarantees comes after all
//! sliders.

use crate::callback::dispatch;
use crate::context::Context;
use crate::widget::{hit_test_drag, WidgetKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    Down { x: i32, y: i32 },
    Up,
    Move { x: i32, y: i32 },
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
    pub held: bool,
}

pub fn handle_pointer_event(ctx: &mut Context, ev: PointerEvent) {
    match ev {
        PointerEvent::Down { x, y } => pointer_down(ctx, x, y),
        PointerEvent::Up => ctx.pointer.held = false,
        PointerEvent::Move { x, y } => {
            if ctx.pointer.held {
                drag_sliders(ctx, x, y)
            }
        }
    }
}

fn pointer_down(ctx: &mut Context, x: i32, y: i32) {
    ctx.pointer.held = true;
    let scene = ctx.scenes().get(ctx.active_scene());
    let Some(widget) = scene.widgets().iter().find(|w| w.hit_test(x, y)) else {
        return;
    };
    log::debug!("pressed \"{}\" in {}", widget.label, scene.id().name());
    let cb = widget.callback.clone();
    if let Some(cb) = cb {
        dispatch(ctx, &cb);
    }
}

fn drag_sliders(ctx: &mut Context, x: i32, y: i32) {
    let id = ctx.active_scene();
    let pad = ctx.slider_pad();
    let len = ctx.scenes().get(id).widgets().len();
    for index in 0..len {
        let widget = &mut ctx.scenes_mut().get_mut(id).widgets_mut()[index];
        let rect = widget.rect;
        let WidgetKind::Slider(slider) = &mut widget.kind else {
            break;
        };
        if !hit_test_drag(&rect, x, y, pad) {
            continue;
        }
        slider.set_from_cursor(x, &rect);
        let cb = widget.callback.clone();
        if let Some(cb) = cb {
            dispatch(ctx, &cb);
        }
    }
}
