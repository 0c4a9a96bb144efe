use either::Either::{Left, Right};
use gattcodec::{
    avec::{
        TemperatureMeasurement,
        slice::{self, Error},
    },
    sans::{
        enumerated::{TemperatureType, TemperatureUnit},
        float::Float,
        thermometer::{DateTime, MeasurementHeader, Temperature},
    },
};

#[test]
fn decode_zero() {
    assert_eq!(slice::decode_temperature(&[0x00; 5]), Ok(0.0));
}

#[test]
fn decode_reference_vector() {
    let r = [0x00, 0x4E, 0x02, 0x00, 0xFE];
    assert_eq!(slice::decode_temperature(&r), Ok(5.9));
}

#[test]
fn decode_fahrenheit() {
    // 212.0 F
    let r = [0x01, 0x48, 0x08, 0x00, 0xFF];
    let celsius = slice::decode_temperature(&r).unwrap();
    assert!((celsius - 100.0).abs() < 1e-9, "{celsius}");
}

#[test]
fn decode_short_value() {
    for len in 0..5 {
        let r = [0x00, 0x4E, 0x02, 0x00, 0xFE];
        assert_eq!(
            slice::decode_temperature(&r[..len]),
            Err(Error::MalformedLength {
                required: 5,
                found: len
            })
        );
    }
}

#[test]
fn minimal_decoding_ignores_optional_fields() {
    // Timestamp and type announced but absent.
    let r = [0x06, 0x6D, 0x01, 0x00, 0xFF];
    assert_eq!(slice::decode_temperature(&r), Ok(36.5));
}

#[test]
fn measurement_bytes_survive_decoding() {
    for flags in [0x00, 0x01] {
        for value in [[0x00, 0x00, 0x00, 0x00], [0x4E, 0x02, 0x00, 0xFE], [0x93, 0xFE, 0xFF, 0xFF]] {
            let [b0, b1, b2, b3] = value;
            let r = [flags, b0, b1, b2, b3];

            let (temperature, successor) = MeasurementHeader::advance(r);
            assert!(successor.is_none());
            assert_eq!(temperature.to_bytes(), r);
        }
    }
}

#[test]
fn decode_full_measurement() {
    let r = [
        0x06, // Timestamp and type present.
        0x6D, 0x01, 0x00, 0xFF, // 36.5
        0xE8, 0x07, 0x03, 0x0F, 0x0C, 0x1E, 0x2D, // 2024-03-15 12:30:45
        0x03, // Ear
    ];

    let measurement = slice::decode_temperature_measurement(&r).unwrap();

    assert_eq!(
        measurement,
        TemperatureMeasurement {
            temperature: Temperature {
                value: Float {
                    mantissa: 365,
                    exponent: -1
                },
                unit: TemperatureUnit::Celsius,
            },
            timestamp: Some(DateTime {
                year: 2024,
                month: 3,
                day: 15,
                hours: 12,
                minutes: 30,
                seconds: 45,
            }),
            temperature_type: Some(TemperatureType::Ear),
        }
    );

    assert_eq!(
        measurement.to_string(),
        "36.50°C\nTime: 2024-03-15 12:30:45\nType: Ear"
    );
}

#[test]
fn decode_measurement_with_type_only() {
    let r = [0x04, 0x6D, 0x01, 0x00, 0xFF, 0x01];

    let measurement = slice::decode_temperature_measurement(&r).unwrap();

    assert_eq!(measurement.timestamp, None);
    assert_eq!(measurement.temperature_type, Some(TemperatureType::Armpit));
    assert_eq!(measurement.to_string(), "36.50°C\nType: Armpit");
}

#[test]
fn decode_measurement_without_optional_fields() {
    let r = [0x00, 0x6D, 0x01, 0x00, 0xFF, 0xAA, 0xBB];

    let measurement = slice::decode_temperature_measurement(&r).unwrap();

    assert_eq!(measurement.timestamp, None);
    assert_eq!(measurement.temperature_type, None);
    assert_eq!(measurement.to_string(), "36.50°C");
}

#[test]
fn decode_measurement_missing_announced_fields() {
    let header = [0x6D, 0x01, 0x00, 0xFF];

    let cases: [(u8, usize, usize); 4] = [
        (0x02, 0, 12),
        (0x02, 6, 12),
        (0x04, 0, 6),
        (0x06, 7, 13),
    ];

    for (flags, extra, required) in cases {
        let mut r = vec![flags];
        r.extend_from_slice(&header);
        r.extend(std::iter::repeat_n(0x01, extra));

        assert_eq!(
            slice::decode_temperature_measurement(&r),
            Err(Error::MalformedLength {
                required,
                found: r.len()
            }),
            "flags {flags:#04x}"
        );
    }
}

#[test]
fn header_successors_follow_flags() {
    let value = [0x6D, 0x01, 0x00, 0xFF];
    let with_flags = |flags| {
        let [b0, b1, b2, b3] = value;
        MeasurementHeader::advance([flags, b0, b1, b2, b3]).1
    };

    assert!(with_flags(0x00).is_none());
    assert!(with_flags(0x01).is_none());

    match with_flags(0x02) {
        Some(Left(state)) => assert_eq!(state.remaining(), 7),
        _ => panic!("expected a timestamp"),
    }
    match with_flags(0x04) {
        Some(Right(state)) => assert_eq!(state.remaining(), 1),
        _ => panic!("expected a temperature type"),
    }
    match with_flags(0x06) {
        Some(Left(state)) => {
            assert_eq!(state.remaining(), 8);
            let (_, successor) = state.advance([0; 7]);
            assert_eq!(successor.map(|s| s.advance([0x09])), Some(TemperatureType::Tympanum));
        }
        _ => panic!("expected a timestamp"),
    }
}
