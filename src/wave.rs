//! Sinusoidal travelling waves: the basic propagation scene, two-source
//! interference and the animated menu background.

use egui::{pos2, Pos2};
use std::f64::consts::TAU;

use crate::parameter::{Parameter, SimulationParameters};
use crate::render::{self, Surface};
use crate::scene::Routine;

/// pixels per unit of the wave function
const SCALE: f64 = 50.0;

pub fn wave_func(t: f64, x: f64, period: f64, lambda: f64, amplitude: f64, phi: f64) -> f64 {
    amplitude * (TAU * (t / period - x / lambda) + phi).sin()
}

/// A single wave travelling to the right.
pub struct BasicWave {
    t: f64,
    baseline: f64,
    x_range: std::ops::Range<i32>,
}

impl BasicWave {
    pub fn new(baseline: f64) -> Self {
        Self {
            t: 0.0,
            baseline,
            x_range: 10..500,
        }
    }
    pub fn time(&self) -> f64 {
        self.t
    }
    fn points(&self, params: &SimulationParameters) -> Vec<Pos2> {
        let (period, lambda) = (params.period.get(), params.wavelength.get());
        let (amp, phi) = (params.amplitude.get(), params.phase.get());
        self.x_range
            .clone()
            .map(|x| {
                let y = SCALE * wave_func(self.t, x as f64 / SCALE, period, lambda, amp, phi);
                pos2(x as f32, (y + self.baseline) as f32)
            })
            .collect()
    }
}

impl Routine for BasicWave {
    fn advance(&mut self, params: &SimulationParameters) {
        self.t += params.time_step.get();
    }
    fn draw(&self, params: &SimulationParameters, surface: &mut dyn Surface) {
        surface.polyline(&self.points(params), render::ACCENT);
    }
    fn reset(&mut self) {
        self.t = 0.0;
    }
}

/// Two coherent point sources on a line. Each wave travels outward from its
/// source; the second one is shifted by the phase parameter.
pub struct Interference {
    t: f64,
    width: f64,
    components_y: f64,
    sum_y: f64,
}

impl Interference {
    pub fn new(width: f64) -> Self {
        Self {
            t: 0.0,
            width,
            components_y: 170.0,
            sum_y: 390.0,
        }
    }
    pub fn sources(&self, params: &SimulationParameters) -> (f64, f64) {
        let half = params.source_separation.get() / 2.0;
        (self.width / 2.0 - half, self.width / 2.0 + half)
    }
    /// Displacement of each component and of their superposition at `x`.
    pub fn sample(&self, params: &SimulationParameters, x: f64) -> (f64, f64, f64) {
        let (s1, s2) = self.sources(params);
        let (period, lambda) = (params.period.get(), params.wavelength.get());
        let amp = params.amplitude.get();
        let a = wave_func(self.t, (x - s1).abs() / SCALE, period, lambda, amp, 0.0);
        let b = wave_func(
            self.t,
            (x - s2).abs() / SCALE,
            period,
            lambda,
            amp,
            params.phase.get(),
        );
        (a, b, a + b)
    }
}

impl Routine for Interference {
    fn advance(&mut self, params: &SimulationParameters) {
        self.t += params.time_step.get();
    }
    fn draw(&self, params: &SimulationParameters, surface: &mut dyn Surface) {
        let samples: Vec<_> = (10..(self.width as i32 - 10))
            .map(|x| (x as f32, self.sample(params, x as f64)))
            .collect();
        let row = |y0: f64, f: fn(&(f64, f64, f64)) -> f64| {
            samples
                .iter()
                .map(|(x, s)| pos2(*x, (y0 + SCALE * 0.5 * f(s)) as f32))
                .collect::<Vec<_>>()
        };
        surface.polyline(&row(self.components_y, |s| s.0), render::DIM);
        surface.polyline(&row(self.components_y, |s| s.1), render::DIM);
        surface.polyline(&row(self.sum_y, |s| s.2), render::ACCENT);

        let (s1, s2) = self.sources(params);
        for s in [s1, s2] {
            surface.filled_circle(pos2(s as f32, self.components_y as f32), 6.0, render::EMITTER);
        }
    }
    fn reset(&mut self) {
        self.t = 0.0;
    }
}

/// Title and a slowly drifting wave behind the menu buttons.
pub struct MenuArt {
    t: f64,
    width: f64,
}

impl MenuArt {
    pub fn new(width: f64) -> Self {
        Self { t: 0.0, width }
    }
}

impl Routine for MenuArt {
    fn advance(&mut self, _params: &SimulationParameters) {
        self.t += 0.05;
    }
    fn draw(&self, _params: &SimulationParameters, surface: &mut dyn Surface) {
        let title = "Mechanical Waves";
        let size = surface.text_size(title);
        surface.text(
            title,
            pos2((self.width as f32 - size.x) / 2.0, 60.0),
            render::FOREGROUND,
        );
        let points: Vec<_> = (0..self.width as i32)
            .step_by(4)
            .map(|x| {
                let y = 20.0 * wave_func(self.t, x as f64 / SCALE, 8.0, 6.0, 1.0, 0.0);
                pos2(x as f32, (520.0 + y) as f32)
            })
            .collect();
        surface.polyline(&points, render::DIM);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::render::testing::{Cmd, Recorder};

    #[test]
    fn wave_func_values() {
        assert!(wave_func(0.0, 0.0, 5.0, 30.0, 1.0, 0.0).abs() < 1e-12);
        // a quarter period later the origin is at the crest
        assert!((wave_func(1.25, 0.0, 5.0, 30.0, 2.0, 0.0) - 2.0).abs() < 1e-12);
        // a quarter wavelength further right is a trough
        assert!((wave_func(0.0, 7.5, 5.0, 30.0, 1.0, 0.0) + 1.0).abs() < 1e-12);
        // phase shifts the argument
        let a = wave_func(0.3, 1.0, 5.0, 30.0, 1.0, std::f64::consts::PI);
        let b = wave_func(0.3, 1.0, 5.0, 30.0, 1.0, 0.0);
        assert!((a + b).abs() < 1e-12);
    }

    #[test]
    fn basic_wave_advances_by_time_step() {
        let params = SimulationParameters::default();
        params.time_step.set(0.25);
        let mut w = BasicWave::new(300.0);
        w.advance(&params);
        w.advance(&params);
        assert!((w.time() - 0.5).abs() < 1e-12);
        w.reset();
        assert_eq!(w.time(), 0.0);
    }

    #[test]
    fn basic_wave_draws_a_connected_curve() {
        let params = SimulationParameters::default();
        let w = BasicWave::new(300.0);
        let mut rec = Recorder::default();
        w.draw(&params, &mut rec);
        assert_eq!(rec.cmds.len(), 489);
        let ys: Vec<f32> = rec
            .cmds
            .iter()
            .map(|c| match c {
                Cmd::Line(a, _) => a.y,
                _ => panic!("only lines expected"),
            })
            .collect();
        let amp = (SCALE * params.amplitude.get()) as f32;
        assert!(ys.iter().all(|y| (y - 300.0).abs() <= amp + 1e-3));
    }

    #[test]
    fn coincident_sources_interfere_constructively() {
        let params = SimulationParameters::default();
        params.source_separation.set(0.0);
        params.phase.set(0.0);
        let w = Interference::new(800.0);
        for x in [10.0, 123.0, 400.0, 650.0] {
            let (a, b, sum) = w.sample(&params, x);
            assert!((a - b).abs() < 1e-12);
            assert!((sum - 2.0 * a).abs() < 1e-12);
        }
    }

    #[test]
    fn opposite_phase_cancels_between_coincident_sources() {
        let params = SimulationParameters::default();
        params.source_separation.set(0.0);
        params.phase.set(std::f64::consts::PI);
        let w = Interference::new(800.0);
        for x in [10.0, 300.0, 777.0] {
            assert!(w.sample(&params, x).2.abs() < 1e-9);
        }
    }

    #[test]
    fn interference_marks_both_sources() {
        let params = SimulationParameters::default();
        params.source_separation.set(200.0);
        let w = Interference::new(800.0);
        assert_eq!(w.sources(&params), (300.0, 500.0));
        let mut rec = Recorder::default();
        w.draw(&params, &mut rec);
        let circles: Vec<_> = rec
            .cmds
            .iter()
            .filter_map(|c| match c {
                Cmd::FilledCircle(p, _, _) => Some(p.x),
                _ => None,
            })
            .collect();
        assert_eq!(circles, vec![300.0, 500.0]);
    }
}
