//! The closed table of CayenneLPP data types.
//!
//! Identifiers follow the IPSO Smart Object numbering minus 3200, as used by
//! the Cayenne LPP convention.

use bytes::BytesMut;

use crate::descriptor::{Field, TypeDescriptor};
use crate::error::{Result, TypeError};
use crate::values::Values;

pub const DIGITAL_INPUT: u8 = 0;
pub const DIGITAL_OUTPUT: u8 = 1;
pub const ANALOG_INPUT: u8 = 2;
pub const ANALOG_OUTPUT: u8 = 3;
pub const GENERIC: u8 = 100;
pub const ILLUMINANCE: u8 = 101;
pub const PRESENCE: u8 = 102;
pub const TEMPERATURE: u8 = 103;
pub const HUMIDITY: u8 = 104;
pub const ACCELEROMETER: u8 = 113;
pub const BAROMETER: u8 = 115;
pub const VOLTAGE: u8 = 116;
pub const CURRENT: u8 = 117;
pub const FREQUENCY: u8 = 118;
pub const PERCENTAGE: u8 = 120;
pub const ALTITUDE: u8 = 121;
pub const LOAD: u8 = 122;
pub const CONCENTRATION: u8 = 125;
pub const POWER: u8 = 128;
pub const DISTANCE: u8 = 130;
pub const ENERGY: u8 = 131;
pub const DIRECTION: u8 = 132;
pub const UNIX_TIME: u8 = 133;
pub const GYROMETER: u8 = 134;
pub const COLOUR: u8 = 135;
pub const GPS_LOCATION: u8 = 136;
pub const SWITCH: u8 = 142;

const fn descriptor(id: u8, name: &'static str, fields: &'static [Field]) -> TypeDescriptor {
    TypeDescriptor { id, name, fields }
}

// Sorted by id; `lookup` relies on it.
static REGISTRY: [TypeDescriptor; 27] = [
    descriptor(DIGITAL_INPUT, "Digital Input", &[Field::unsigned(1, 1)]),
    descriptor(DIGITAL_OUTPUT, "Digital Output", &[Field::unsigned(1, 1)]),
    descriptor(ANALOG_INPUT, "Analog Input", &[Field::signed(2, 100)]),
    descriptor(ANALOG_OUTPUT, "Analog Output", &[Field::signed(2, 100)]),
    descriptor(GENERIC, "Generic", &[Field::unsigned(4, 1)]),
    descriptor(ILLUMINANCE, "Illuminance", &[Field::unsigned(2, 1)]),
    descriptor(PRESENCE, "Presence", &[Field::unsigned(1, 1)]),
    descriptor(TEMPERATURE, "Temperature", &[Field::signed(2, 10)]),
    descriptor(HUMIDITY, "Humidity", &[Field::unsigned(1, 2)]),
    TypeDescriptor {
        id: ACCELEROMETER,
        name: "Accelerometer",
        fields: &[
            Field::signed(2, 1000),
            Field::signed(2, 1000),
            Field::signed(2, 1000),
        ],
    },
    descriptor(BAROMETER, "Barometer", &[Field::unsigned(2, 10)]),
    descriptor(VOLTAGE, "Voltage", &[Field::unsigned(2, 100)]),
    descriptor(CURRENT, "Current", &[Field::unsigned(2, 1000)]),
    descriptor(FREQUENCY, "Frequency", &[Field::unsigned(4, 1)]),
    descriptor(PERCENTAGE, "Percentage", &[Field::unsigned(1, 1)]),
    descriptor(ALTITUDE, "Altitude", &[Field::signed(2, 1)]),
    descriptor(LOAD, "Load", &[Field::signed(3, 1000)]),
    descriptor(CONCENTRATION, "Concentration", &[Field::unsigned(2, 1)]),
    descriptor(POWER, "Power", &[Field::unsigned(2, 1)]),
    descriptor(DISTANCE, "Distance", &[Field::unsigned(4, 1000)]),
    descriptor(ENERGY, "Energy", &[Field::unsigned(4, 1000)]),
    descriptor(DIRECTION, "Direction", &[Field::unsigned(2, 1)]),
    descriptor(UNIX_TIME, "Unix Time", &[Field::unsigned(4, 1)]),
    TypeDescriptor {
        id: GYROMETER,
        name: "Gyrometer",
        fields: &[
            Field::signed(2, 100),
            Field::signed(2, 100),
            Field::signed(2, 100),
        ],
    },
    TypeDescriptor {
        id: COLOUR,
        name: "Colour",
        fields: &[
            Field::unsigned(1, 1),
            Field::unsigned(1, 1),
            Field::unsigned(1, 1),
        ],
    },
    TypeDescriptor {
        id: GPS_LOCATION,
        name: "GPS Location",
        fields: &[
            Field::signed(3, 10000),
            Field::signed(3, 10000),
            Field::signed(3, 100),
        ],
    },
    descriptor(SWITCH, "Switch", &[Field::unsigned(1, 1)]),
];

/// Look up a data type by identifier.
///
/// Returns `None` for identifiers outside the registry, including values
/// that do not fit the one-byte wire field.
pub fn lookup(type_id: u16) -> Option<&'static TypeDescriptor> {
    REGISTRY
        .binary_search_by_key(&type_id, |desc| u16::from(desc.id))
        .ok()
        .map(|idx| &REGISTRY[idx])
}

/// Look up a data type by name (case-insensitive, surrounding whitespace ignored).
pub fn lookup_by_name(name: &str) -> Option<&'static TypeDescriptor> {
    let name = name.trim();
    REGISTRY
        .iter()
        .find(|desc| desc.name.eq_ignore_ascii_case(name))
}

/// All registered data types, in identifier order.
pub fn iter() -> impl Iterator<Item = &'static TypeDescriptor> {
    REGISTRY.iter()
}

/// Decode a payload for the given data type.
pub fn decode(type_id: u16, src: &[u8]) -> Result<Values> {
    resolve(type_id)?.decode(src)
}

/// Encode values for the given data type, appending to `dst`.
pub fn encode(type_id: u16, values: &[f64], dst: &mut BytesMut) -> Result<()> {
    resolve(type_id)?.encode(values, dst)
}

fn resolve(type_id: u16) -> Result<&'static TypeDescriptor> {
    lookup(type_id).ok_or(TypeError::UnknownType(type_id))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn registry_is_sorted_and_unique() {
        assert!(REGISTRY.windows(2).all(|pair| pair[0].id < pair[1].id));
    }

    #[test]
    fn lookup_known_and_unknown() {
        assert_eq!(lookup(103).map(|d| d.name), Some("Temperature"));
        assert!(lookup(999).is_none());
        assert!(lookup(99).is_none());
    }

    #[test]
    fn lookup_by_name_is_case_insensitive() {
        assert_eq!(lookup_by_name("  gps location ").map(|d| d.id), Some(136));
        assert!(lookup_by_name("gps").is_none());
    }

    #[test]
    fn decode_unknown_type_is_distinct_from_bad_length() {
        assert!(matches!(decode(999, &[0x00]), Err(TypeError::UnknownType(999))));
        assert!(matches!(
            decode(u16::from(TEMPERATURE), &[0x00]),
            Err(TypeError::InvalidBufferLength { .. })
        ));
    }

    #[test]
    fn accelerometer_bytes() {
        let values = decode(
            u16::from(ACCELEROMETER),
            &[0x04, 0xD2, 0xFB, 0x2E, 0x00, 0x00],
        )
        .unwrap();
        assert_eq!(values.as_slice(), &[1.234, -1.234, 0.0]);
    }

    #[test]
    fn generic_upper_bound() {
        let mut buf = BytesMut::new();
        let err = encode(u16::from(GENERIC), &[4_294_967_296.0], &mut buf).unwrap_err();
        assert!(matches!(err, TypeError::ValueOutOfRange { .. }));

        encode(u16::from(GENERIC), &[4_294_967_295.0], &mut buf).unwrap();
        assert_eq!(buf.as_ref(), &[0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(
            decode(u16::from(GENERIC), &buf).unwrap().as_slice(),
            &[4_294_967_295.0]
        );
    }

    #[test]
    fn frequency_rejects_instead_of_wrapping() {
        let mut buf = BytesMut::new();
        assert!(encode(u16::from(FREQUENCY), &[5e9], &mut buf).is_err());
    }

    #[test]
    fn humidity_half_percent_steps() {
        let mut buf = BytesMut::new();
        encode(u16::from(HUMIDITY), &[50.75], &mut buf).unwrap();
        assert_eq!(decode(u16::from(HUMIDITY), &buf).unwrap().as_slice(), &[50.5]);
    }

    #[test]
    fn every_type_rejects_wrong_arity() {
        for desc in iter() {
            let too_many = vec![0.0; desc.dimension() + 1];
            let mut buf = BytesMut::new();
            assert!(
                matches!(
                    desc.encode(&too_many, &mut buf),
                    Err(TypeError::DimensionMismatch { .. })
                ),
                "{} accepted {} values",
                desc.name,
                too_many.len()
            );
            if desc.dimension() > 1 {
                assert!(matches!(
                    desc.encode(&[0.0], &mut buf),
                    Err(TypeError::DimensionMismatch { .. })
                ));
            }
        }
    }

    #[test]
    fn every_unsigned_field_rejects_negatives() {
        for desc in iter() {
            for (idx, field) in desc.fields.iter().enumerate() {
                if field.signed {
                    continue;
                }
                let mut values = vec![0.0; desc.dimension()];
                values[idx] = -1.0;
                let mut buf = BytesMut::new();
                assert!(
                    matches!(
                        desc.encode(&values, &mut buf),
                        Err(TypeError::NegativeValueNotAllowed { field, .. }) if field == idx
                    ),
                    "{} field {idx} accepted a negative value",
                    desc.name
                );
            }
        }
    }

    proptest! {
        #[test]
        fn raw_values_round_trip(type_idx in 0..REGISTRY.len(), seed in any::<[u32; 3]>()) {
            let desc = &REGISTRY[type_idx];
            let values: Vec<f64> = desc
                .fields
                .iter()
                .zip(seed)
                .map(|(field, seed)| {
                    let span = (field.max_raw() - field.min_raw()) as u64 + 1;
                    let raw = field.min_raw() + (u64::from(seed) % span) as i64;
                    raw as f64 / f64::from(field.scale)
                })
                .collect();

            let mut buf = BytesMut::new();
            desc.encode(&values, &mut buf).unwrap();
            prop_assert_eq!(buf.len(), desc.total_width());
            let decoded = desc.decode(&buf).unwrap();
            prop_assert_eq!(decoded.as_slice(), values.as_slice());
        }

        #[test]
        fn off_grid_values_truncate_within_resolution(
            type_idx in 0..REGISTRY.len(),
            fractions in prop::array::uniform3(0.0f64..1.0),
        ) {
            let desc = &REGISTRY[type_idx];
            let values: Vec<f64> = desc
                .fields
                .iter()
                .zip(fractions)
                .map(|(field, t)| {
                    let scale = f64::from(field.scale);
                    let lo = field.min_raw() as f64 / scale;
                    let hi = field.max_raw() as f64 / scale;
                    lo + t * (hi - lo)
                })
                .collect();

            let mut buf = BytesMut::new();
            desc.encode(&values, &mut buf).unwrap();
            let decoded = desc.decode(&buf).unwrap();

            for ((field, &value), &back) in desc.fields.iter().zip(&values).zip(decoded.iter()) {
                let slack = 1e-9 * value.abs().max(1.0);
                prop_assert!(
                    (back - value).abs() < 1.0 / f64::from(field.scale) + slack,
                    "{}: {} decoded as {}", desc.name, value, back
                );
                prop_assert!(
                    back.abs() <= value.abs() + slack,
                    "{}: {} moved away from zero to {}", desc.name, value, back
                );
            }
        }
    }
}
