use atomic_float::AtomicF64;
use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use crate::config::Config;

pub trait Parameter<T> {
    fn new(init: T, range: RangeInclusive<T>, label: impl Into<String>) -> Self;
    fn get(&self) -> T;
    fn set(&self, v: T);
    fn get_label(&self) -> &str;
    fn range(&self) -> &RangeInclusive<T>;
}

/// A numeric cell the simulation reads every frame and sliders write into.
#[derive(Debug)]
pub struct FloatParameter {
    value: AtomicF64,
    range: RangeInclusive<f64>,
    label: String,
}

impl Parameter<f64> for FloatParameter {
    fn new(init: f64, range: RangeInclusive<f64>, label: impl Into<String>) -> Self {
        let res = Self {
            value: AtomicF64::new(*range.start()),
            range,
            label: label.into(),
        };
        res.set(init);
        res
    }

    fn get(&self) -> f64 {
        self.value.load(Ordering::Relaxed)
    }
    // note that no need to be "&mut self" here.
    fn set(&self, v: f64) {
        self.value.store(
            v.max(*self.range.start()).min(*self.range.end()),
            Ordering::Relaxed,
        );
    }
    fn get_label(&self) -> &str {
        &self.label
    }
    fn range(&self) -> &RangeInclusive<f64> {
        &self.range
    }
}

#[derive(Debug)]
pub struct IntParameter {
    value: AtomicI64,
    range: RangeInclusive<i64>,
    label: String,
}

impl IntParameter {
    /// Writes a real value, truncating toward zero before clamping.
    pub fn set_from_f64(&self, v: f64) {
        self.set(v as i64)
    }
}

impl Parameter<i64> for IntParameter {
    fn new(init: i64, range: RangeInclusive<i64>, label: impl Into<String>) -> Self {
        let res = Self {
            value: AtomicI64::new(*range.start()),
            range,
            label: label.into(),
        };
        res.set(init);
        res
    }

    fn get(&self) -> i64 {
        self.value.load(Ordering::Relaxed)
    }
    fn set(&self, v: i64) {
        self.value.store(
            v.max(*self.range.start()).min(*self.range.end()),
            Ordering::Relaxed,
        );
    }
    fn get_label(&self) -> &str {
        &self.label
    }
    fn range(&self) -> &RangeInclusive<i64> {
        &self.range
    }
}

/// Non-owning view of a parameter cell held by a slider. Cloning it never
/// duplicates the cell.
#[derive(Clone, Debug)]
pub enum Binding {
    Float(Arc<FloatParameter>),
    Int(Arc<IntParameter>),
}

impl Binding {
    pub fn read(&self) -> f64 {
        match self {
            Self::Float(p) => p.get(),
            Self::Int(p) => p.get() as f64,
        }
    }
    pub fn write(&self, v: f64) {
        match self {
            Self::Float(p) => p.set(v),
            Self::Int(p) => p.set_from_f64(v),
        }
    }
    pub fn get_label(&self) -> &str {
        match self {
            Self::Float(p) => p.get_label(),
            Self::Int(p) => p.get_label(),
        }
    }
    pub fn range(&self) -> RangeInclusive<f64> {
        match self {
            Self::Float(p) => p.range().clone(),
            Self::Int(p) => *p.range().start() as f64..=*p.range().end() as f64,
        }
    }
}

impl From<&Arc<FloatParameter>> for Binding {
    fn from(p: &Arc<FloatParameter>) -> Self {
        Self::Float(Arc::clone(p))
    }
}
impl From<&Arc<IntParameter>> for Binding {
    fn from(p: &Arc<IntParameter>) -> Self {
        Self::Int(Arc::clone(p))
    }
}

/// Every tunable value of the simulations. Owned by the simulation context;
/// widgets only hold [`Binding`]s into it.
#[derive(Debug)]
pub struct SimulationParameters {
    pub amplitude: Arc<FloatParameter>,
    pub wavelength: Arc<FloatParameter>,
    pub period: Arc<FloatParameter>,
    pub phase: Arc<FloatParameter>,
    pub time_step: Arc<FloatParameter>,
    /// distance between the two sources of the interference scene
    pub source_separation: Arc<FloatParameter>,
    /// pixels per tick travelled by the Doppler emitter
    pub source_velocity: Arc<FloatParameter>,
    /// pixels per tick a wavefront grows
    pub wave_speed: Arc<IntParameter>,
    /// ticks between two emitted wavefronts
    pub emission_interval: Arc<IntParameter>,
}

impl SimulationParameters {
    pub fn from_config(config: &Config) -> Self {
        let w = &config.wave;
        let d = &config.doppler;
        Self {
            amplitude: Arc::new(FloatParameter::new(w.amplitude, 0.1..=3.0, "amplitude")),
            wavelength: Arc::new(FloatParameter::new(w.wavelength, 5.0..=60.0, "wavelength")),
            period: Arc::new(FloatParameter::new(w.period, 1.0..=20.0, "period")),
            phase: Arc::new(FloatParameter::new(
                w.phase,
                0.0..=std::f64::consts::TAU,
                "phase",
            )),
            time_step: Arc::new(FloatParameter::new(w.time_step, 0.01..=0.5, "time step")),
            source_separation: Arc::new(FloatParameter::new(
                w.source_separation,
                0.0..=400.0,
                "separation",
            )),
            source_velocity: Arc::new(FloatParameter::new(
                d.source_velocity,
                0.0..=8.0,
                "source speed",
            )),
            wave_speed: Arc::new(IntParameter::new(d.wave_speed, 1..=10, "wave speed")),
            emission_interval: Arc::new(IntParameter::new(
                d.emission_interval,
                5..=90,
                "emission interval",
            )),
        }
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
