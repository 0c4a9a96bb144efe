//! Speed, distance and cadence derived from successive Cycling Speed and
//! Cadence measurements.

use log::{debug, trace};

use crate::sans::cycling::{CrankRevolutions, WheelRevolutions};

use super::CscMeasurement;

/// Wheel circumference assumed when none is configured, in millimetres.
pub const DEFAULT_WHEEL_CIRCUMFERENCE: u32 = 2340;

/// Values derived from a measurement and those received before it.
///
/// Rates are only available once two measurements with distinct event times
/// have been received.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CscStatistics {
    /// Speed over the latest wheel interval, in metres per second.
    pub speed: Option<f64>,
    /// Distance since the first measurement received, in metres.
    pub distance: Option<f64>,
    /// Distance recorded by the sensor's cumulative counter, in metres.
    pub total_distance: Option<f64>,
    /// Wheel revolutions per minute.
    pub wheel_cadence: Option<f64>,
    /// Crank revolutions per minute.
    pub cadence: Option<f64>,
    /// Wheel revolutions per crank revolution.
    pub gear_ratio: Option<f64>,
}

/// Accumulator turning cumulative revolution counters into rates.
#[derive(Debug, Clone)]
pub struct CscTracker {
    circumference: u32,
    first_wheel: Option<u32>,
    last_wheel: Option<WheelRevolutions>,
    last_crank: Option<CrankRevolutions>,
    wheel_cadence: Option<f64>,
}

impl Default for CscTracker {
    fn default() -> Self {
        Self::new(DEFAULT_WHEEL_CIRCUMFERENCE)
    }
}

impl CscTracker {
    /// Create a tracker for a wheel of the given circumference, in
    /// millimetres.
    pub fn new(circumference: u32) -> Self {
        Self {
            circumference,
            first_wheel: None,
            last_wheel: None,
            last_crank: None,
            wheel_cadence: None,
        }
    }

    /// The configured wheel circumference, in millimetres.
    pub fn circumference(&self) -> u32 {
        self.circumference
    }

    /// Forget all previous measurements.
    pub fn reset(&mut self) {
        *self = Self::new(self.circumference);
    }

    /// Accumulate a measurement.
    ///
    /// A gear ratio is only derived when the same measurement carries wheel
    /// data, so a stale wheel cadence never pairs with fresh crank data.
    pub fn update(&mut self, m: &CscMeasurement) -> CscStatistics {
        let mut stats = CscStatistics::default();

        match m.wheel {
            Some(wheel) => self.update_wheel(wheel, &mut stats),
            None => self.wheel_cadence = None,
        }
        if let Some(crank) = m.crank {
            self.update_crank(crank, &mut stats);
        }

        stats
    }

    fn update_wheel(&mut self, wheel: WheelRevolutions, stats: &mut CscStatistics) {
        let circumference = f64::from(self.circumference);
        let metres = |revolutions: u32| f64::from(revolutions) * circumference / 1000.0;

        // The cumulative counter only decreases when the sensor is reset.
        if let Some(last) = self
            .last_wheel
            .filter(|last| wheel.revolutions < last.revolutions)
        {
            debug!(
                "Wheel revolutions reset from {} to {}.",
                last.revolutions, wheel.revolutions
            );
            self.first_wheel = None;
            self.last_wheel = None;
            self.wheel_cadence = None;
        }

        let first = *self.first_wheel.get_or_insert(wheel.revolutions);

        stats.total_distance = Some(metres(wheel.revolutions));
        stats.distance = Some(metres(wheel.revolutions.saturating_sub(first)));

        if let Some(last) = self.last_wheel {
            if last.event_time == wheel.event_time {
                trace!("No new wheel event since {}.", last.event_time);
                return;
            }

            let seconds = interval(last.event_time, wheel.event_time);
            let revolutions = wheel.revolutions - last.revolutions;

            let cadence = f64::from(revolutions) * 60.0 / seconds;

            stats.speed = Some(metres(revolutions) / seconds);
            stats.wheel_cadence = Some(cadence);
            self.wheel_cadence = Some(cadence);
        }

        self.last_wheel = Some(wheel);
    }

    fn update_crank(&mut self, crank: CrankRevolutions, stats: &mut CscStatistics) {
        if let Some(last) = self.last_crank {
            if last.event_time == crank.event_time {
                trace!("No new crank event since {}.", last.event_time);
                return;
            }

            let seconds = interval(last.event_time, crank.event_time);
            let revolutions = crank.revolutions.wrapping_sub(last.revolutions);

            let cadence = f64::from(revolutions) * 60.0 / seconds;

            stats.cadence = Some(cadence);
            if cadence > 0.0 {
                stats.gear_ratio = self.wheel_cadence.map(|w| w / cadence);
            }
        }

        self.last_crank = Some(crank);
    }
}

/// Seconds between two event times, allowing for the counter wrapping.
fn interval(from: u16, to: u16) -> f64 {
    f64::from(to.wrapping_sub(from)) / 1024.0
}
