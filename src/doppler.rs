//! Doppler effect: an emitter sweeping along a horizontal line sends out a
//! circular wavefront every `emission_interval` ticks. A fixed listener
//! registers each wavefront once, and the spacing between consecutive hits
//! gives the frequency it perceives.

use egui::{pos2, Color32, Pos2};
use ringbuf::{HeapRb, Rb};

use crate::config::DopplerConfig;
use crate::error::Error;
use crate::parameter::{Parameter, SimulationParameters};
use crate::render::{self, Surface};
use crate::scene::Routine;

/// alpha lost every `ALPHA_INTERVAL` ticks.
const ALPHA_STEP: u8 = 5;
const ALPHA_INTERVAL: u64 = 5;
const INITIAL_RADIUS: f64 = 1.0;

/// frequency axis of the history plot
const PLOT_F_MIN: f32 = -10.0;
const PLOT_F_MAX: f32 = 30.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wavefront {
    pub origin_x: f64,
    pub radius: f64,
    pub alpha: u8,
    pub hit: bool,
}

impl Wavefront {
    fn emit(origin_x: f64) -> Self {
        Self {
            origin_x,
            radius: INITIAL_RADIUS,
            alpha: u8::MAX,
            hit: false,
        }
    }
    pub fn is_alive(&self) -> bool {
        self.alpha > 0
    }
}

/// Perceived frequency for two hits `dt` ticks apart, in display units.
pub fn frequency_sample(dt: u64) -> i32 {
    (1.0 / dt as f64 * 400.0).round() as i32 - 10
}

pub struct DopplerSim {
    tick: u64,
    source_x: f64,
    source_y: f64,
    track_width: f64,
    listener: Pos2,
    prev_hit_tick: Option<u64>,
    wavefronts: HeapRb<Wavefront>,
    history: HeapRb<i32>,
    plot: egui::Rect,
}

impl DopplerSim {
    /// `canvas` is the drawing area. The emitter wraps at its width unless
    /// the config sets a track width, and the history plot sits in its
    /// bottom-right corner.
    pub fn new(config: &DopplerConfig, canvas: egui::Vec2) -> Result<Self, Error> {
        let track_width = config.track_width.unwrap_or(canvas.x as f64);
        if !(track_width.is_finite() && track_width > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "doppler track width must be positive, got {track_width}"
            )));
        }
        if config.wavefront_capacity == 0 || config.history_capacity == 0 {
            return Err(Error::InvalidConfig(
                "doppler wavefront and history capacities must be nonzero".to_string(),
            ));
        }
        let plot_max = pos2(canvas.x - 20.0, canvas.y - 20.0);
        Ok(Self {
            tick: 0,
            source_x: 0.0,
            source_y: config.source_y,
            track_width,
            listener: pos2(config.listener_x as f32, config.listener_y as f32),
            prev_hit_tick: None,
            wavefronts: HeapRb::new(config.wavefront_capacity),
            history: HeapRb::new(config.history_capacity),
            plot: egui::Rect::from_min_max(plot_max - egui::vec2(320.0, 160.0), plot_max),
        })
    }
    pub fn tick(&self) -> u64 {
        self.tick
    }
    pub fn source_x(&self) -> f64 {
        self.source_x
    }
    /// Tracked wavefronts, oldest first.
    pub fn wavefronts(&self) -> impl Iterator<Item = &Wavefront> + '_ {
        self.wavefronts.iter()
    }
    /// Frequency samples, oldest first. Only holds samples actually recorded.
    pub fn frequency_history(&self) -> impl Iterator<Item = i32> + '_ {
        self.history.iter().copied()
    }

    fn emit(&mut self) {
        let wf = Wavefront::emit(self.source_x);
        if let Some(old) = self.wavefronts.push_overwrite(wf) {
            log::debug!(
                "wavefront from x={:.1} dropped at radius {:.1}{}",
                old.origin_x,
                old.radius,
                if old.hit { "" } else { " before reaching the listener" }
            );
        }
    }

    fn propagate(&mut self, speed: f64) {
        let decay = self.tick % ALPHA_INTERVAL == 0;
        for wf in self.wavefronts.iter_mut().filter(|w| w.is_alive()) {
            wf.radius += speed;
            if decay {
                wf.alpha = wf.alpha.saturating_sub(ALPHA_STEP);
            }
        }
    }

    /// Marks wavefronts whose shell is within one step of the listener and
    /// returns how many were hit for the first time.
    fn detect_hits(&mut self, speed: f64) -> usize {
        let (lx, ly) = (self.listener.x as f64, self.listener.y as f64);
        let source_y = self.source_y;
        let mut first_hits = 0;
        for wf in self.wavefronts.iter_mut().filter(|w| !w.hit) {
            let d = (lx - wf.origin_x).hypot(ly - source_y);
            if (d - wf.radius).abs() < speed {
                wf.hit = true;
                first_hits += 1;
            }
        }
        first_hits
    }

    fn record_hit(&mut self) {
        if let Some(prev) = self.prev_hit_tick {
            let dt = self.tick.wrapping_sub(prev);
            // a second hit within the same tick has no defined frequency
            if dt > 0 {
                let f = frequency_sample(dt);
                log::trace!("hit at tick {} (dt={dt}): f={f}", self.tick);
                self.history.push_overwrite(f);
            }
        }
        self.prev_hit_tick = Some(self.tick);
    }

    fn draw_history(&self, surface: &mut dyn Surface) {
        let plot = self.plot;
        let to_y = |f: f32| {
            let f = f.clamp(PLOT_F_MIN, PLOT_F_MAX);
            plot.bottom() - (f - PLOT_F_MIN) / (PLOT_F_MAX - PLOT_F_MIN) * plot.height()
        };
        surface.line(plot.left_top(), plot.left_bottom(), render::FOREGROUND);
        surface.line(
            pos2(plot.left(), to_y(0.0)),
            pos2(plot.right(), to_y(0.0)),
            render::FOREGROUND,
        );
        let step = plot.width() / (self.history.capacity().max(2) - 1) as f32;
        let points: Vec<_> = self
            .frequency_history()
            .enumerate()
            .map(|(i, f)| pos2(plot.left() + i as f32 * step, to_y(f as f32)))
            .collect();
        surface.polyline(&points, render::ACCENT);
    }
}

impl Routine for DopplerSim {
    fn advance(&mut self, params: &SimulationParameters) {
        self.tick = self.tick.wrapping_add(1);
        self.source_x = (self.source_x + params.source_velocity.get()).rem_euclid(self.track_width);

        let interval = params.emission_interval.get().max(1) as u64;
        if self.tick % interval == 0 {
            self.emit();
        }

        let speed = params.wave_speed.get() as f64;
        self.propagate(speed);
        for _ in 0..self.detect_hits(speed) {
            self.record_hit();
        }
    }

    fn draw(&self, _params: &SimulationParameters, surface: &mut dyn Surface) {
        let source_y = self.source_y as f32;
        surface.filled_circle(pos2(self.source_x as f32, source_y), 8.0, render::EMITTER);
        surface.filled_circle(self.listener, 8.0, render::LISTENER);
        for wf in self.wavefronts().filter(|w| w.is_alive()) {
            surface.aa_circle(
                pos2(wf.origin_x as f32, source_y),
                wf.radius as f32,
                Color32::from_rgba_unmultiplied(255, 255, 255, wf.alpha),
            );
        }
        self.draw_history(surface);
    }

    fn reset(&mut self) {
        self.tick = 0;
        self.source_x = 0.0;
        self.prev_hit_tick = None;
        self.wavefronts.clear();
        self.history.clear();
    }
}
