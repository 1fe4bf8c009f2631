use chrono::{DateTime, NaiveDateTime, NaiveTime};
use proptest::collection::{btree_map, vec};
use proptest::prelude::*;

use protean_wire::{decode, encode, ExceptionData, Variant};

// Generators stay inside what the wire carries exactly: whole-millisecond
// times, whole-second datetimes, finite doubles.  Values outside that
// (NaN, sub-second datetimes) are lossy by design and are covered by the
// targeted tests instead.

fn arb_time() -> impl Strategy<Value = NaiveTime> {
    (0i64..86_400_000).prop_map(|ms| {
        NaiveTime::from_num_seconds_from_midnight_opt(
            (ms / 1000) as u32,
            (ms % 1000) as u32 * 1_000_000,
        )
        .unwrap()
    })
}

fn arb_datetime() -> impl Strategy<Value = NaiveDateTime> {
    // Roughly years 1000 through 2900.
    (-30_000_000_000i64..30_000_000_000).prop_map(|secs| {
        DateTime::from_timestamp(secs, 0).unwrap().naive_utc()
    })
}

fn arb_double() -> impl Strategy<Value = f64> {
    -1.0e12f64..1.0e12
}

fn arb_exception() -> impl Strategy<Value = ExceptionData> {
    (
        vec(any::<u8>(), 0..16),
        vec(any::<u8>(), 0..32),
        vec(any::<u8>(), 0..16),
        vec(any::<u8>(), 0..64),
    )
        .prop_map(|(type_name, message, source, stack)| ExceptionData {
            type_name,
            message,
            source,
            stack,
        })
}

fn arb_scalar() -> impl Strategy<Value = Variant> {
    prop_oneof![
        Just(Variant::Null),
        any::<bool>().prop_map(Variant::Bool),
        any::<i32>().prop_map(Variant::Int32),
        any::<u32>().prop_map(Variant::UInt32),
        any::<i64>().prop_map(Variant::Int64),
        any::<u64>().prop_map(Variant::UInt64),
        arb_double().prop_map(Variant::Double),
    ]
}

fn arb_leaf() -> impl Strategy<Value = Variant> {
    prop_oneof![
        arb_scalar(),
        vec(any::<u8>(), 0..48).prop_map(Variant::String),
        vec(any::<u8>(), 0..48).prop_map(Variant::Buffer),
        arb_time().prop_map(Variant::Time),
        arb_datetime().prop_map(Variant::DateTime),
        vec(arb_double(), 0..24).prop_map(Variant::Array),
        arb_exception().prop_map(Variant::Exception),
    ]
}

fn arb_variant() -> impl Strategy<Value = Variant> {
    arb_leaf().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            vec(inner.clone(), 0..6).prop_map(Variant::List),
            vec(inner.clone(), 0..6).prop_map(Variant::Tuple),
            btree_map(vec(any::<u8>(), 0..10), inner.clone(), 0..6).prop_map(Variant::Mapping),
            vec((arb_datetime(), inner), 0..5).prop_map(Variant::TimeSeries),
        ]
    })
}

proptest! {
    #[test]
    fn prop_roundtrip_plain(value in arb_variant()) {
        let bytes = encode(&value, false).unwrap();
        prop_assert_eq!(decode(&bytes).unwrap(), value);
    }

    #[test]
    fn prop_roundtrip_compressed(value in arb_variant()) {
        let bytes = encode(&value, true).unwrap();
        prop_assert_eq!(decode(&bytes).unwrap(), value);
    }

    #[test]
    fn prop_compression_modes_agree(value in arb_variant()) {
        let plain = decode(&encode(&value, false).unwrap()).unwrap();
        let packed = decode(&encode(&value, true).unwrap()).unwrap();
        prop_assert_eq!(plain, packed);
    }

    #[test]
    fn prop_encoding_is_deterministic(value in arb_variant()) {
        prop_assert_eq!(encode(&value, true).unwrap(), encode(&value, true).unwrap());
        prop_assert_eq!(encode(&value, false).unwrap(), encode(&value, false).unwrap());
    }

    #[test]
    fn prop_any_truncation_is_an_error(value in arb_variant(), cut in 1usize..64) {
        // The root value consumes the whole uncompressed body, so losing
        // any tail byte must surface as an error, never a panic or a value.
        let bytes = encode(&value, false).unwrap();
        let keep = bytes.len().saturating_sub(cut);
        prop_assert!(decode(&bytes[..keep]).is_err());
    }

    #[test]
    fn prop_garbage_never_panics(bytes in vec(any::<u8>(), 0..96)) {
        let _ = decode(&bytes);
    }
}
