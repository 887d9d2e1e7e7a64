#![allow(non_snake_case)]

use super::*;

// derive_log_key tests

#[test]
fn derive_log_key___camel_case___uppercases_first_letter() {
    assert_eq!(derive_log_key("armAngle"), "ArmAngle");
    assert_eq!(derive_log_key("angleRad"), "AngleRad");
}

#[test]
fn derive_log_key___already_capitalized___unchanged() {
    assert_eq!(derive_log_key("ArmAngle"), "ArmAngle");
}

#[test]
fn derive_log_key___preserves_rest_of_name() {
    assert_eq!(derive_log_key("aBC_def"), "ABC_def");
}

#[test]
fn derive_log_key___dotless_i___is_not_locale_mapped() {
    // A Turkish locale would map `i` to `İ`; ASCII rules always give `I`.
    assert_eq!(derive_log_key("iterations"), "Iterations");
}

#[test]
fn derive_log_key___non_ascii_first_char___unchanged() {
    assert_eq!(derive_log_key("ärm"), "ärm");
}

#[test]
fn derive_log_key___empty___returns_empty() {
    assert_eq!(derive_log_key(""), "");
}

// derive_accessors tests

#[test]
fn derive_accessors___builds_get_and_set_names() {
    let accessors = derive_accessors("currentAmps");

    assert_eq!(accessors.getter, "getCurrentAmps");
    assert_eq!(accessors.setter, "setCurrentAmps");
}

// auto_logged_name tests

#[test]
fn auto_logged_name___appends_suffix() {
    assert_eq!(auto_logged_name("Arm"), "ArmAutoLogged");
}

// to_camel_case tests

#[test]
fn to_camel_case___converts_snake_case() {
    assert_eq!(to_camel_case("angle_rad"), "angleRad");
    assert_eq!(to_camel_case("current_amps_per_motor"), "currentAmpsPerMotor");
}

#[test]
fn to_camel_case___handles_edge_underscores() {
    assert_eq!(to_camel_case("_leading"), "leading");
    assert_eq!(to_camel_case("trailing_"), "trailing");
    assert_eq!(to_camel_case("foo__bar"), "fooBar");
}

#[test]
fn to_camel_case___simple_word___unchanged() {
    assert_eq!(to_camel_case("voltage"), "voltage");
    assert_eq!(to_camel_case(""), "");
}
