//! Buttons and sliders placed on a scene, and how they are drawn.

use egui::pos2;

use crate::callback::Callback;
use crate::error::Error;
use crate::geom::Rect;
use crate::parameter::Binding;
use crate::render::{self, Surface};

/// half of the bar thickness of a slider in pixels.
const SLIDER_THICKNESS: f32 = 5.0;

pub struct Widget {
    pub rect: Rect,
    pub label: String,
    pub callback: Option<Callback>,
    pub kind: WidgetKind,
}

pub enum WidgetKind {
    Button,
    Slider(Slider),
}

pub struct Slider {
    min: f64,
    max: f64,
    value: f64,
    binding: Option<Binding>,
}

impl Slider {
    /// The initial value mirrors the bound cell, clamped into `min..=max`.
    pub fn new(min: f64, max: f64, binding: Option<Binding>) -> Result<Self, Error> {
        if !(min < max) {
            return Err(Error::EmptyRange(min, max));
        }
        let value = binding
            .as_ref()
            .map_or(min, |b| b.read())
            .clamp(min, max);
        Ok(Self {
            min,
            max,
            value,
            binding,
        })
    }
    pub fn min(&self) -> f64 {
        self.min
    }
    pub fn max(&self) -> f64 {
        self.max
    }
    pub fn value(&self) -> f64 {
        self.value
    }
    pub fn binding(&self) -> Option<&Binding> {
        self.binding.as_ref()
    }
    /// Moves the caret to the horizontal cursor position `x` on a bar
    /// occupying `rect`, then writes the new value through to the bound cell.
    pub fn set_from_cursor(&mut self, x: i32, rect: &Rect) {
        let width = rect.width();
        let offset = (x - rect.x1()).clamp(0, width);
        self.value = self.min + (self.max - self.min) * (offset as f64 / width as f64);
        if let Some(b) = &self.binding {
            b.write(self.value);
        }
    }
    /// Caret offset in pixels from the left end of a bar `width` pixels long.
    pub fn progress(&self, width: i32) -> i32 {
        (width as f64 * ((self.value - self.min) / (self.max - self.min)).abs()) as i32
    }
}

impl Widget {
    pub fn button(label: impl Into<String>, rect: Rect, callback: Option<Callback>) -> Self {
        Self {
            rect,
            label: label.into(),
            callback,
            kind: WidgetKind::Button,
        }
    }
    pub fn slider(
        label: impl Into<String>,
        rect: Rect,
        min: f64,
        max: f64,
        binding: Option<Binding>,
        callback: Option<Callback>,
    ) -> Result<Self, Error> {
        Ok(Self {
            rect,
            label: label.into(),
            callback,
            kind: WidgetKind::Slider(Slider::new(min, max, binding)?),
        })
    }
    pub fn is_slider(&self) -> bool {
        matches!(self.kind, WidgetKind::Slider(_))
    }
    pub fn as_slider(&self) -> Option<&Slider> {
        match &self.kind {
            WidgetKind::Slider(s) => Some(s),
            WidgetKind::Button => None,
        }
    }
    pub fn hit_test(&self, x: i32, y: i32) -> bool {
        self.rect.contains(x, y)
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        match &self.kind {
            WidgetKind::Button => draw_button(&self.label, &self.rect, surface),
            WidgetKind::Slider(s) => draw_slider(&self.label, &self.rect, s, surface),
        }
    }
}

/// Whether (x, y) lies on the bar of a slider occupying `rect`, with `pad`
/// pixels of tolerance to the left and right.
pub fn hit_test_drag(rect: &Rect, x: i32, y: i32, pad: i32) -> bool {
    rect.contains_padded(x, y, pad)
}

fn draw_button(label: &str, rect: &Rect, surface: &mut dyn Surface) {
    surface.outlined_rect((*rect).into(), render::FOREGROUND);
    let text = surface.text_size(label);
    let (cx, cy) = rect.center();
    surface.text(
        label,
        pos2(cx as f32 - text.x / 2.0, cy as f32 - text.y / 2.0),
        render::FOREGROUND,
    );
}

fn draw_slider(label: &str, rect: &Rect, slider: &Slider, surface: &mut dyn Surface) {
    let (x1, x2) = (rect.x1() as f32, rect.x2() as f32);
    let mid = (rect.y1() + rect.height() / 2) as f32;
    let progress = slider.progress(rect.width()) as f32;

    surface.filled_rect(
        egui::Rect::from_min_max(
            pos2(x1, mid - SLIDER_THICKNESS),
            pos2(x2, mid + SLIDER_THICKNESS),
        ),
        render::FOREGROUND,
    );
    surface.filled_rect(
        egui::Rect::from_min_max(
            pos2(x1 + progress, mid - SLIDER_THICKNESS * 5.0),
            pos2(x1 + progress + SLIDER_THICKNESS * 2.0, mid + SLIDER_THICKNESS * 5.0),
        ),
        render::CARET,
    );
    surface.text(label, pos2(x1, rect.y1() as f32 - 10.0), render::FOREGROUND);
    surface.text(
        &format!("{:.2}", slider.value()),
        pos2(x1, rect.y2() as f32 - 10.0),
        render::FOREGROUND,
    );
}
