//! A scene pairs an optional simulation routine with the widgets drawn on
//! top of it. The set of scenes is fixed at startup; only which one is
//! active changes afterwards.

use crate::callback::{Callback, WidgetRef};
use crate::error::Error;
use crate::geom::Rect;
use crate::parameter::{Binding, SimulationParameters};
use crate::render::Surface;
use crate::widget::Widget;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneId {
    Menu,
    BasicWave,
    Interference,
    Doppler,
}

impl SceneId {
    pub const ALL: [SceneId; 4] = [
        SceneId::Menu,
        SceneId::BasicWave,
        SceneId::Interference,
        SceneId::Doppler,
    ];
    pub fn name(&self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::BasicWave => "basic wave",
            Self::Interference => "interference",
            Self::Doppler => "doppler",
        }
    }
    fn index(self) -> usize {
        self as usize
    }
}

/// The simulation or static art behind a scene's widgets.
pub trait Routine {
    /// Advance by one tick.
    fn advance(&mut self, params: &SimulationParameters);
    fn draw(&self, params: &SimulationParameters, surface: &mut dyn Surface);
    /// Return to the state right after construction.
    fn reset(&mut self) {}
}

pub struct Scene {
    id: SceneId,
    routine: Option<Box<dyn Routine>>,
    widgets: Vec<Widget>,
}

impl Scene {
    pub fn builder(id: SceneId) -> SceneBuilder {
        SceneBuilder {
            id,
            routine: None,
            widgets: vec![],
        }
    }
    pub fn id(&self) -> SceneId {
        self.id
    }
    /// Widgets in declaration order. All sliders come before any other widget.
    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }
    pub fn widgets_mut(&mut self) -> &mut [Widget] {
        &mut self.widgets
    }
    pub fn advance(&mut self, params: &SimulationParameters) {
        if let Some(r) = self.routine.as_mut() {
            r.advance(params);
        }
    }
    /// Draws the routine first, then every widget in order, so later widgets
    /// end up on top.
    pub fn render(&self, params: &SimulationParameters, surface: &mut dyn Surface) {
        if let Some(r) = self.routine.as_ref() {
            r.draw(params, surface);
        }
        for w in self.widgets.iter() {
            w.draw(surface);
        }
    }
    pub fn reset(&mut self) {
        if let Some(r) = self.routine.as_mut() {
            r.reset();
        }
    }
}

pub struct SceneBuilder {
    id: SceneId,
    routine: Option<Box<dyn Routine>>,
    widgets: Vec<Widget>,
}

impl SceneBuilder {
    fn next_ref(&self) -> WidgetRef {
        WidgetRef {
            scene: self.id,
            index: self.widgets.len(),
        }
    }
    pub fn routine(mut self, routine: impl Routine + 'static) -> Self {
        self.routine = Some(Box::new(routine));
        self
    }
    pub fn button(mut self, label: impl Into<String>, rect: Rect, callback: Callback) -> Self {
        self.widgets.push(Widget::button(label, rect, Some(callback)));
        self
    }
    /// Static text in a box. Pressing it does nothing.
    pub fn label(mut self, text: impl Into<String>, rect: Rect) -> Self {
        self.widgets.push(Widget::button(text, rect, None));
        self
    }
    /// Slider spanning the whole range of `binding`, labelled after it, that
    /// re-applies its value to the binding on every drag.
    pub fn slider(self, rect: Rect, binding: Binding) -> Result<Self, Error> {
        let range = binding.range();
        let label = binding.get_label().to_string();
        let callback = Callback::ApplySlider(self.next_ref());
        self.slider_with(
            label,
            rect,
            *range.start(),
            *range.end(),
            binding,
            Some(callback),
        )
    }
    pub fn slider_with(
        mut self,
        label: impl Into<String>,
        rect: Rect,
        min: f64,
        max: f64,
        binding: Binding,
        callback: Option<Callback>,
    ) -> Result<Self, Error> {
        let w = Widget::slider(label, rect, min, max, Some(binding), callback)?;
        self.widgets.push(w);
        Ok(self)
    }
    /// Fails if a slider is declared after a non-slider widget, because the
    /// drag scan stops at the first non-slider.
    pub fn build(self) -> Result<Scene, Error> {
        if let Some(first_other) = self.widgets.iter().position(|w| !w.is_slider()) {
            if let Some(offset) = self.widgets[first_other..]
                .iter()
                .position(|w| w.is_slider())
            {
                return Err(Error::SliderOrdering(self.id, first_other + offset));
            }
        }
        Ok(Scene {
            id: self.id,
            routine: self.routine,
            widgets: self.widgets,
        })
    }
}

/// One scene per [`SceneId`].
pub struct SceneRegistry {
    scenes: Vec<Scene>,
}

impl SceneRegistry {
    /// Builds every scene in [`SceneId::ALL`] order with `make`.
    pub fn build(mut make: impl FnMut(SceneId) -> Result<Scene, Error>) -> Result<Self, Error> {
        let scenes = SceneId::ALL
            .iter()
            .map(|id| {
                let scene = make(*id)?;
                debug_assert_eq!(scene.id(), *id);
                Ok(scene)
            })
            .collect::<Result<Vec<_>, Error>>()?;
        Ok(Self { scenes })
    }
    pub fn get(&self, id: SceneId) -> &Scene {
        &self.scenes[id.index()]
    }
    pub fn get_mut(&mut self, id: SceneId) -> &mut Scene {
        &mut self.scenes[id.index()]
    }
    pub fn widget(&self, w: WidgetRef) -> Option<&Widget> {
        self.get(w.scene).widgets.get(w.index)
    }
    pub fn widget_mut(&mut self, w: WidgetRef) -> Option<&mut Widget> {
        self.get_mut(w.scene).widgets.get_mut(w.index)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parameter::{FloatParameter, Parameter};
    use crate::render::testing::{Cmd, Recorder};
    use std::cell::Cell;
    use std::rc::Rc;
    use std::sync::Arc;

    fn rect(x: i32, y: i32) -> Rect {
        Rect::from_origin_size(x, y, 100, 30).unwrap()
    }
    fn cell() -> Binding {
        Binding::Float(Arc::new(FloatParameter::new(0.5, 0.0..=1.0, "cell")))
    }

    struct Counter(Rc<Cell<u32>>);
    impl Routine for Counter {
        fn advance(&mut self, _params: &SimulationParameters) {
            self.0.set(self.0.get() + 1);
        }
        fn draw(&self, _params: &SimulationParameters, surface: &mut dyn Surface) {
            surface.text("routine", egui::pos2(0.0, 0.0), crate::render::FOREGROUND);
        }
        fn reset(&mut self) {
            self.0.set(0);
        }
    }

    #[test]
    fn slider_after_button_is_rejected() {
        let res = Scene::builder(SceneId::BasicWave)
            .slider(rect(0, 0), cell())
            .unwrap()
            .button("menu", rect(0, 50), Callback::SwitchScene(SceneId::Menu))
            .slider(rect(0, 100), cell())
            .unwrap()
            .build();
        assert!(matches!(
            res,
            Err(Error::SliderOrdering(SceneId::BasicWave, 2))
        ));
    }

    #[test]
    fn sliders_point_at_themselves() {
        let scene = Scene::builder(SceneId::Doppler)
            .slider(rect(0, 0), cell())
            .unwrap()
            .slider(rect(0, 50), cell())
            .unwrap()
            .build()
            .unwrap();
        for (i, w) in scene.widgets().iter().enumerate() {
            match &w.callback {
                Some(Callback::ApplySlider(r)) => {
                    assert_eq!(r.scene, SceneId::Doppler);
                    assert_eq!(r.index, i);
                }
                other => panic!("unexpected callback {other:?}"),
            }
            assert_eq!(w.label, "cell");
        }
    }

    #[test]
    fn routine_draws_below_widgets() {
        let count = Rc::new(Cell::new(0));
        let mut scene = Scene::builder(SceneId::Menu)
            .routine(Counter(count.clone()))
            .button("a", rect(0, 0), Callback::SwitchScene(SceneId::Doppler))
            .button("b", rect(0, 50), Callback::SwitchScene(SceneId::Doppler))
            .build()
            .unwrap();
        let params = SimulationParameters::default();
        scene.advance(&params);
        scene.advance(&params);
        assert_eq!(count.get(), 2);
        scene.reset();
        assert_eq!(count.get(), 0);

        let mut rec = Recorder::default();
        scene.render(&params, &mut rec);
        assert_eq!(rec.texts(), vec!["routine", "a", "b"]);
        assert!(matches!(rec.cmds[1], Cmd::OutlinedRect(_)));
    }

    #[test]
    fn scene_without_routine_draws_only_widgets() {
        let scene = Scene::builder(SceneId::Menu)
            .button("a", rect(0, 0), Callback::SwitchScene(SceneId::Doppler))
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        scene.render(&SimulationParameters::default(), &mut rec);
        assert_eq!(rec.texts(), vec!["a"]);
    }

    #[test]
    fn registry_resolves_widget_refs() {
        let registry = SceneRegistry::build(|id| {
            Scene::builder(id)
                .button(id.name(), rect(0, 0), Callback::SwitchScene(SceneId::Menu))
                .build()
        })
        .unwrap();
        for id in SceneId::ALL {
            assert_eq!(registry.get(id).id(), id);
            let w = registry.widget(WidgetRef { scene: id, index: 0 }).unwrap();
            assert_eq!(w.label, id.name());
            assert!(registry.widget(WidgetRef { scene: id, index: 1 }).is_none());
        }
    }

    #[test]
    fn registry_propagates_errors() {
        let res = SceneRegistry::build(|id| {
            Scene::builder(id)
                .slider_with("bad", rect(0, 0), 1.0, 0.0, cell(), None)?
                .build()
        });
        assert!(matches!(res, Err(Error::EmptyRange(_, _))));
    }
}
