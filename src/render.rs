//! The drawing surface scenes and widgets paint on. Implemented by
//! [`crate::gui::painter::PainterSurface`] on top of egui.

use egui::{Color32, Pos2};

pub const BACKGROUND: Color32 = Color32::from_rgb(18, 18, 18);
pub const FOREGROUND: Color32 = Color32::WHITE;
pub const CARET: Color32 = Color32::from_rgb(100, 100, 100);
pub const ACCENT: Color32 = Color32::from_rgb(255, 0, 0);
pub const DIM: Color32 = Color32::from_rgb(90, 90, 140);
pub const EMITTER: Color32 = Color32::from_rgb(230, 180, 40);
pub const LISTENER: Color32 = Color32::from_rgb(60, 200, 120);

/// Primitive drawing operations, in canvas pixels with the origin at the
/// top-left corner.
pub trait Surface {
    fn line(&mut self, from: Pos2, to: Pos2, color: Color32);
    fn filled_circle(&mut self, center: Pos2, radius: f32, color: Color32);
    /// Anti-aliased outline of a circle.
    fn aa_circle(&mut self, center: Pos2, radius: f32, color: Color32);
    fn filled_rect(&mut self, rect: egui::Rect, color: Color32);
    fn outlined_rect(&mut self, rect: egui::Rect, color: Color32);
    /// Draws `text` with its top-left corner at `pos`.
    fn text(&mut self, text: &str, pos: Pos2, color: Color32);
    /// Width and height `text` would occupy.
    fn text_size(&self, text: &str) -> egui::Vec2;

    fn polyline(&mut self, points: &[Pos2], color: Color32) {
        for pair in points.windows(2) {
            self.line(pair[0], pair[1], color);
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    pub enum Cmd {
        Line(Pos2, Pos2),
        FilledCircle(Pos2, f32, Color32),
        AaCircle(Pos2, f32, Color32),
        FilledRect(egui::Rect, Color32),
        OutlinedRect(egui::Rect),
        Text(String, Pos2),
    }

    /// Surface that only remembers what was drawn. Text is 8 px per
    /// character and 16 px high.
    #[derive(Default)]
    pub struct Recorder {
        pub cmds: Vec<Cmd>,
    }

    impl Recorder {
        pub fn texts(&self) -> Vec<&str> {
            self.cmds
                .iter()
                .filter_map(|c| match c {
                    Cmd::Text(s, _) => Some(s.as_str()),
                    _ => None,
                })
                .collect()
        }
    }

    impl Surface for Recorder {
        fn line(&mut self, from: Pos2, to: Pos2, _color: Color32) {
            self.cmds.push(Cmd::Line(from, to));
        }
        fn filled_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
            self.cmds.push(Cmd::FilledCircle(center, radius, color));
        }
        fn aa_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
            self.cmds.push(Cmd::AaCircle(center, radius, color));
        }
        fn filled_rect(&mut self, rect: egui::Rect, color: Color32) {
            self.cmds.push(Cmd::FilledRect(rect, color));
        }
        fn outlined_rect(&mut self, rect: egui::Rect, _color: Color32) {
            self.cmds.push(Cmd::OutlinedRect(rect));
        }
        fn text(&mut self, text: &str, pos: Pos2, _color: Color32) {
            self.cmds.push(Cmd::Text(text.to_string(), pos));
        }
        fn text_size(&self, text: &str) -> egui::Vec2 {
            egui::vec2(text.chars().count() as f32 * 8.0, 16.0)
        }
    }
}
