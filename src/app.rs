use std::time::Duration;

use crate::config::Config;
use crate::context::Context;
use crate::gui::{console, painter::PainterSurface, FramePacer};
use crate::interaction::PointerEvent;
use crate::render;

extern crate eframe;

pub struct Model {
    sim: Context,
    pacer: FramePacer,
    canvas_size: egui::Vec2,
    console_open: bool,
}

impl Model {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &Config, sim: Context) -> Self {
        log::info!("starting in {}", sim.active_scene().name());
        Self {
            sim,
            pacer: FramePacer::new(config.fps),
            canvas_size: config.canvas_size(),
            console_open: false,
        }
    }

    fn show_canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(self.canvas_size, egui::Sense::click_and_drag());
        let origin = response.rect.min;
        let canvas = ui.layer_id();
        let ctx = ui.ctx().clone();
        let events = ui.input(|i| i.events.clone());
        for ev in events
            .iter()
            .filter(|e| reaches_canvas(e, canvas, |pos| ctx.layer_id_at(pos)))
            .filter_map(|e| translate_event(e, origin))
        {
            self.sim.handle_pointer_event(ev);
        }
        let now = ui.input(|i| i.time);
        if self.pacer.due(now) {
            self.sim.step();
        }
        let mut surface = PainterSurface::new(&painter, origin);
        self.sim.render(&mut surface);
        ui.ctx()
            .request_repaint_after(Duration::from_secs_f64(self.pacer.remaining(now)));
    }
}

/// Presses landing on another layer (the log window) are not the canvas's.
/// Releases and moves always pass so a drag ends cleanly.
pub fn reaches_canvas(
    ev: &egui::Event,
    canvas: egui::LayerId,
    layer_at: impl Fn(egui::Pos2) -> Option<egui::LayerId>,
) -> bool {
    match ev {
        egui::Event::PointerButton {
            pos, pressed: true, ..
        } => layer_at(*pos).map_or(true, |layer| layer == canvas),
        _ => true,
    }
}

/// Converts egui pointer events into canvas-relative [`PointerEvent`]s.
/// Only the primary button counts.
pub fn translate_event(ev: &egui::Event, origin: egui::Pos2) -> Option<PointerEvent> {
    let local = |pos: egui::Pos2| {
        let p = pos - origin;
        (p.x.floor() as i32, p.y.floor() as i32)
    };
    match ev {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            ..
        } => {
            if *pressed {
                let (x, y) = local(*pos);
                Some(PointerEvent::Down { x, y })
            } else {
                Some(PointerEvent::Up)
            }
        }
        egui::Event::PointerMoved(pos) => {
            let (x, y) = local(*pos);
            Some(PointerEvent::Move { x, y })
        }
        _ => None,
    }
}

impl eframe::App for Model {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input_mut(|i| {
            i.consume_shortcut(&egui::KeyboardShortcut::new(
                egui::Modifiers::NONE,
                egui::Key::F1,
            ))
        }) {
            self.console_open = !self.console_open;
        }
        egui::Window::new("log")
            .default_width(400.)
            .open(&mut self.console_open)
            .show(ctx, console::show_ui);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(render::BACKGROUND))
            .show(ctx, |ui| self.show_canvas(ui));
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn button(x: f32, y: f32, button: egui::PointerButton, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos: egui::pos2(x, y),
            button,
            pressed,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn events_are_relative_to_the_canvas() {
        let origin = egui::pos2(8.0, 8.0);
        assert_eq!(
            translate_event(&button(108.5, 58.0, egui::PointerButton::Primary, true), origin),
            Some(PointerEvent::Down { x: 100, y: 50 })
        );
        assert_eq!(
            translate_event(&egui::Event::PointerMoved(egui::pos2(10.0, 7.0)), origin),
            Some(PointerEvent::Move { x: 2, y: -1 })
        );
        assert_eq!(
            translate_event(&button(0.0, 0.0, egui::PointerButton::Primary, false), origin),
            Some(PointerEvent::Up)
        );
    }

    #[test]
    fn other_events_are_ignored() {
        let origin = egui::Pos2::ZERO;
        assert_eq!(
            translate_event(&button(1.0, 1.0, egui::PointerButton::Secondary, true), origin),
            None
        );
        assert_eq!(translate_event(&egui::Event::PointerGone, origin), None);
    }

    #[test]
    fn presses_on_other_layers_are_dropped() {
        let canvas = egui::LayerId::background();
        let window = egui::LayerId::new(egui::Order::Middle, egui::Id::new("log"));
        let over_window = |pos: egui::Pos2| Some(if pos.x > 500.0 { window } else { canvas });
        let press = |x| button(x, 10.0, egui::PointerButton::Primary, true);
        assert!(reaches_canvas(&press(100.0), canvas, over_window));
        assert!(!reaches_canvas(&press(600.0), canvas, over_window));
        assert!(reaches_canvas(
            &button(600.0, 10.0, egui::PointerButton::Primary, false),
            canvas,
            over_window
        ));
        assert!(reaches_canvas(
            &egui::Event::PointerMoved(egui::pos2(600.0, 10.0)),
            canvas,
            over_window
        ));
        assert!(reaches_canvas(&press(600.0), canvas, |_| None));
    }
}
