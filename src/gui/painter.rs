use egui::{Align2, Color32, FontId, Pos2, Stroke, Vec2};

use crate::render::Surface;

const FONT_SIZE: f32 = 16.0;

/// [`Surface`] over an [`egui::Painter`]. Canvas coordinates are offset by
/// the top-left corner of the area the painter was allocated for.
pub struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    origin: Vec2,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a egui::Painter, origin: Pos2) -> Self {
        Self {
            painter,
            origin: origin.to_vec2(),
        }
    }
    fn font() -> FontId {
        FontId::proportional(FONT_SIZE)
    }
}

impl<'a> Surface for PainterSurface<'a> {
    fn line(&mut self, from: Pos2, to: Pos2, color: Color32) {
        self.painter.line_segment(
            [from + self.origin, to + self.origin],
            Stroke::new(1.0, color),
        );
    }
    fn filled_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.painter
            .circle_filled(center + self.origin, radius, color);
    }
    fn aa_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        // egui feathers every shape edge
        self.painter
            .circle_stroke(center + self.origin, radius, Stroke::new(1.0, color));
    }
    fn filled_rect(&mut self, rect: egui::Rect, color: Color32) {
        self.painter
            .rect_filled(rect.translate(self.origin), 0.0, color);
    }
    fn outlined_rect(&mut self, rect: egui::Rect, color: Color32) {
        self.painter
            .rect_stroke(rect.translate(self.origin), 0.0, Stroke::new(1.0, color));
    }
    fn text(&mut self, text: &str, pos: Pos2, color: Color32) {
        self.painter
            .text(pos + self.origin, Align2::LEFT_TOP, text, Self::font(), color);
    }
    fn text_size(&self, text: &str) -> Vec2 {
        self.painter
            .layout_no_wrap(text.to_string(), Self::font(), Color32::WHITE)
            .size()
    }
}
