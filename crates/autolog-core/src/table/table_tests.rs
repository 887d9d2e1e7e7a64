#![allow(non_snake_case)]

use super::*;

#[test]
fn LogTable___put_then_get___returns_stored_scalars() {
    let mut table = LogTable::new();
    table.put("Enabled", true);
    table.put("Count", 42_i64);
    table.put("Ratio", 0.5_f32);
    table.put("AngleRad", 1.5_f64);
    table.put("Mode", "auto");

    assert!(table.get_boolean("Enabled", false));
    assert_eq!(table.get_integer("Count", 0), 42);
    assert_eq!(table.get_float("Ratio", 0.0), 0.5);
    assert_eq!(table.get_double("AngleRad", 0.0), 1.5);
    assert_eq!(table.get_string("Mode", ""), "auto");
}

#[test]
fn LogTable___put_then_get___returns_stored_arrays() {
    let mut table = LogTable::new();
    table.put("Raw", [1_u8, 2, 3].as_slice());
    table.put("Flags", vec![true, false]);
    table.put("Ids", [7_i64, 8].as_slice());
    table.put("Temps", [20.5_f32].as_slice());
    table.put("CurrentAmps", [2.0_f64, 3.0].as_slice());
    table.put("Names", vec!["a".to_string(), "b".to_string()]);

    assert_eq!(table.get_raw("Raw", &[]), vec![1, 2, 3]);
    assert_eq!(table.get_boolean_array("Flags", &[]), vec![true, false]);
    assert_eq!(table.get_integer_array("Ids", &[]), vec![7, 8]);
    assert_eq!(table.get_float_array("Temps", &[]), vec![20.5]);
    assert_eq!(table.get_double_array("CurrentAmps", &[]), vec![2.0, 3.0]);
    assert_eq!(
        table.get_string_array("Names", &[]),
        vec!["a".to_string(), "b".to_string()]
    );
}

#[test]
fn LogTable___get_absent_key___returns_default() {
    let table = LogTable::new();

    assert_eq!(table.get_double("Missing", 9.0), 9.0);
    assert_eq!(table.get_string("Missing", "fallback"), "fallback");
    assert_eq!(table.get_double_array("Missing", &[1.0]), vec![1.0]);
}

#[test]
fn LogTable___get_mismatched_type___returns_default() {
    let mut table = LogTable::new();
    table.put("Value", 3_i64);

    assert_eq!(table.get_double("Value", -1.0), -1.0);
    assert!(!table.get_boolean("Value", false));
    assert_eq!(table.get_integer_array("Value", &[]), Vec::<i64>::new());
}

#[test]
fn LogTable___put_existing_key___replaces_value() {
    let mut table = LogTable::new();
    table.put("AngleRad", 1.0_f64);

    table.put("AngleRad", 2.0_f64);

    assert_eq!(table.len(), 1);
    assert_eq!(table.get_double("AngleRad", 0.0), 2.0);
}

#[test]
fn LogTable___keys___sorted() {
    let mut table = LogTable::new();
    table.put("B", 1_i64);
    table.put("A", 2_i64);

    let keys: Vec<&str> = table.keys().collect();

    assert_eq!(keys, vec!["A", "B"]);
}

#[test]
fn LogTable___remove___drops_key() {
    let mut table = LogTable::new();
    table.put("A", true);

    let removed = table.remove("A");

    assert_eq!(removed, Some(LogValue::Boolean(true)));
    assert!(table.is_empty());
    assert!(!table.contains_key("A"));
}

#[test]
fn LogValue___type_name___matches_accessor_stem() {
    assert_eq!(LogValue::from(1.0_f64).type_name(), "Double");
    assert_eq!(LogValue::from(vec![1_u8]).type_name(), "Raw");
    assert_eq!(LogValue::from(vec![1_i64]).type_name(), "IntegerArray");
}

#[test]
fn LogValue___type_name___agrees_with_codec_tags() {
    use crate::classify::CodecTag;

    let samples = [
        (CodecTag::Boolean, LogValue::from(true)),
        (CodecTag::Integer64, LogValue::from(1_i64)),
        (CodecTag::Float32, LogValue::from(1.0_f32)),
        (CodecTag::Float64, LogValue::from(1.0_f64)),
        (CodecTag::Text, LogValue::from("x")),
        (CodecTag::RawBytes, LogValue::from(vec![1_u8])),
        (CodecTag::BooleanList, LogValue::from(vec![true])),
        (CodecTag::Integer64List, LogValue::from(vec![1_i64])),
        (CodecTag::Float32List, LogValue::from(vec![1.0_f32])),
        (CodecTag::Float64List, LogValue::from(vec![1.0_f64])),
        (CodecTag::TextList, LogValue::from(vec!["x".to_string()])),
    ];

    for (tag, value) in samples {
        assert_eq!(tag.accessor(), value.type_name());
    }
}
