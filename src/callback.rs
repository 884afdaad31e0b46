//! What a widget does when it is pressed or dragged.

use std::rc::Rc;

use crate::context::Context;
use crate::scene::SceneId;

/// Stable address of a widget inside the scene registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WidgetRef {
    pub scene: SceneId,
    pub index: usize,
}

#[derive(Clone)]
pub enum Callback {
    /// Make the given scene the active one.
    SwitchScene(SceneId),
    /// Copy the current value of the referenced slider into its bound cell.
    /// Sliders usually point this at themselves.
    ApplySlider(WidgetRef),
    Custom(Rc<dyn Fn(&mut Context)>),
}

impl std::fmt::Debug for Callback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SwitchScene(id) => write!(f, "SwitchScene({id:?})"),
            Self::ApplySlider(w) => write!(f, "ApplySlider({w:?})"),
            Self::Custom(_) => write!(f, "Custom"),
        }
    }
}

pub fn dispatch(ctx: &mut Context, callback: &Callback) {
    match callback {
        Callback::SwitchScene(id) => switch_active_scene(ctx, *id),
        Callback::ApplySlider(w) => apply_slider_to_bound_variable(ctx, *w),
        Callback::Custom(f) => f(ctx),
    }
}

pub fn switch_active_scene(ctx: &mut Context, scene: SceneId) {
    if ctx.active_scene() != scene {
        log::info!("scene {} -> {}", ctx.active_scene().name(), scene.name());
    }
    ctx.set_active_scene(scene);
}

/// Re-reads the slider's value and stores it in the bound cell. Integer cells
/// receive the value truncated toward zero. A reference that does not resolve
/// to a bound slider does nothing.
pub fn apply_slider_to_bound_variable(ctx: &Context, widget: WidgetRef) {
    let Some(slider) = ctx.scenes().widget(widget).and_then(|w| w.as_slider()) else {
        log::warn!("{widget:?} does not refer to a slider");
        return;
    };
    if let Some(binding) = slider.binding() {
        binding.write(slider.value());
        log::trace!("{} = {:.2}", binding.get_label(), binding.read());
    }
}
