use gattcodec::{
    avec::{
        CscMeasurement,
        tracker::{CscStatistics, CscTracker, DEFAULT_WHEEL_CIRCUMFERENCE},
    },
    sans::cycling::{CrankRevolutions, WheelRevolutions},
};

fn wheel(revolutions: u32, event_time: u16) -> CscMeasurement {
    CscMeasurement {
        wheel: Some(WheelRevolutions {
            revolutions,
            event_time,
        }),
        crank: None,
    }
}

fn both(wheel: (u32, u16), crank: (u16, u16)) -> CscMeasurement {
    CscMeasurement {
        wheel: Some(WheelRevolutions {
            revolutions: wheel.0,
            event_time: wheel.1,
        }),
        crank: Some(CrankRevolutions {
            revolutions: crank.0,
            event_time: crank.1,
        }),
    }
}

fn approx(found: Option<f64>, expected: f64) {
    let found = found.expect("value missing");
    assert!((found - expected).abs() < 1e-9, "{found} != {expected}");
}

#[test]
fn default_circumference() {
    let tracker = CscTracker::default();
    assert_eq!(tracker.circumference(), DEFAULT_WHEEL_CIRCUMFERENCE);
    assert_eq!(DEFAULT_WHEEL_CIRCUMFERENCE, 2340);
}

#[test]
fn first_measurement_has_distance_only() {
    let mut tracker = CscTracker::default();
    let stats = tracker.update(&wheel(100, 0));

    approx(stats.total_distance, 234.0);
    approx(stats.distance, 0.0);
    assert_eq!(stats.speed, None);
    assert_eq!(stats.wheel_cadence, None);
}

#[test]
fn speed_and_distance() {
    let mut tracker = CscTracker::default();
    tracker.update(&wheel(100, 0));
    let stats = tracker.update(&wheel(102, 1024));

    approx(stats.speed, 4.68);
    approx(stats.distance, 4.68);
    approx(stats.total_distance, 238.68);
    approx(stats.wheel_cadence, 120.0);
}

#[test]
fn event_time_wraps() {
    let mut tracker = CscTracker::new(2000);
    tracker.update(&wheel(10, 65_000));
    let stats = tracker.update(&wheel(12, 488));

    approx(stats.speed, 4.0);
}

#[test]
fn repeated_event_time_yields_no_rate() {
    let mut tracker = CscTracker::default();
    tracker.update(&wheel(100, 0));
    tracker.update(&wheel(102, 1024));
    let stats = tracker.update(&wheel(102, 1024));

    assert_eq!(stats.speed, None);
    approx(stats.distance, 4.68);
}

#[test]
fn cadence_and_gear_ratio() {
    let mut tracker = CscTracker::default();
    tracker.update(&both((100, 0), (10, 0)));
    let stats = tracker.update(&both((102, 1024), (11, 1024)));

    approx(stats.cadence, 60.0);
    approx(stats.gear_ratio, 2.0);
}

#[test]
fn stationary_crank_has_no_gear_ratio() {
    let mut tracker = CscTracker::default();
    tracker.update(&both((100, 0), (10, 0)));
    let stats = tracker.update(&both((102, 1024), (10, 1024)));

    approx(stats.cadence, 0.0);
    assert_eq!(stats.gear_ratio, None);
}

#[test]
fn empty_measurement() {
    let mut tracker = CscTracker::default();
    let stats = tracker.update(&CscMeasurement::default());
    assert_eq!(stats, CscStatistics::default());
}

#[test]
fn reset_forgets_history() {
    let mut tracker = CscTracker::new(1000);
    tracker.update(&wheel(100, 0));
    tracker.reset();

    assert_eq!(tracker.circumference(), 1000);

    let stats = tracker.update(&wheel(150, 1024));
    assert_eq!(stats.speed, None);
    approx(stats.distance, 0.0);
}

#[test]
fn decreasing_wheel_counter_restarts_tracking() {
    let mut tracker = CscTracker::default();
    tracker.update(&wheel(1000, 0));
    let stats = tracker.update(&wheel(5, 1024));

    assert_eq!(stats.speed, None);
    assert_eq!(stats.wheel_cadence, None);
    approx(stats.distance, 0.0);
    approx(stats.total_distance, 11.7);

    let stats = tracker.update(&wheel(7, 2048));
    approx(stats.speed, 4.68);
    approx(stats.distance, 4.68);
}

#[test]
fn crank_only_measurement_has_no_gear_ratio() {
    let mut tracker = CscTracker::default();
    tracker.update(&both((100, 0), (10, 0)));
    tracker.update(&both((102, 1024), (11, 1024)));

    let crank_only = CscMeasurement {
        wheel: None,
        crank: Some(CrankRevolutions {
            revolutions: 12,
            event_time: 2048,
        }),
    };
    let stats = tracker.update(&crank_only);

    approx(stats.cadence, 60.0);
    assert_eq!(stats.gear_ratio, None);
}
