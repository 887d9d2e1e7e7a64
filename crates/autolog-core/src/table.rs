//! Log table runtime targeted by generated code.

use std::collections::BTreeMap;

/// A value stored in a [`LogTable`].
#[derive(Debug, Clone, PartialEq)]
pub enum LogValue {
    Boolean(bool),
    Integer(i64),
    Float(f32),
    Double(f64),
    String(String),
    Raw(Vec<u8>),
    BooleanArray(Vec<bool>),
    IntegerArray(Vec<i64>),
    FloatArray(Vec<f32>),
    DoubleArray(Vec<f64>),
    StringArray(Vec<String>),
}

impl LogValue {
    /// Name of the wire type, matching the table accessor stem.
    pub fn type_name(&self) -> &'static str {
        match self {
            LogValue::Boolean(_) => "Boolean",
            LogValue::Integer(_) => "Integer",
            LogValue::Float(_) => "Float",
            LogValue::Double(_) => "Double",
            LogValue::String(_) => "String",
            LogValue::Raw(_) => "Raw",
            LogValue::BooleanArray(_) => "BooleanArray",
            LogValue::IntegerArray(_) => "IntegerArray",
            LogValue::FloatArray(_) => "FloatArray",
            LogValue::DoubleArray(_) => "DoubleArray",
            LogValue::StringArray(_) => "StringArray",
        }
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for LogValue {
                fn from(value: $ty) -> Self {
                    LogValue::$variant(value)
                }
            }
        )*
    };
}

macro_rules! impl_from_array {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<&[$ty]> for LogValue {
                fn from(value: &[$ty]) -> Self {
                    LogValue::$variant(value.to_vec())
                }
            }

            impl From<Vec<$ty>> for LogValue {
                fn from(value: Vec<$ty>) -> Self {
                    LogValue::$variant(value)
                }
            }
        )*
    };
}

impl_from_scalar! {
    bool => Boolean,
    i64 => Integer,
    f32 => Float,
    f64 => Double,
    String => String,
}

impl_from_array! {
    u8 => Raw,
    bool => BooleanArray,
    i64 => IntegerArray,
    f32 => FloatArray,
    f64 => DoubleArray,
    String => StringArray,
}

impl From<&str> for LogValue {
    fn from(value: &str) -> Self {
        LogValue::String(value.to_string())
    }
}

/// Key/value table that auto-logged inputs are written to and read from.
///
/// Keys are kept in sorted order. Typed getters return the supplied default
/// when the key is absent or holds a value of another type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogTable {
    values: BTreeMap<String, LogValue>,
}

macro_rules! typed_getter {
    ($(#[$doc:meta])* $name:ident, $variant:ident, $ty:ty) => {
        $(#[$doc])*
        pub fn $name(&self, key: &str, default: $ty) -> $ty {
            match self.values.get(key) {
                Some(LogValue::$variant(value)) => *value,
                _ => default,
            }
        }
    };
}

macro_rules! array_getter {
    ($(#[$doc:meta])* $name:ident, $variant:ident, $ty:ty) => {
        $(#[$doc])*
        pub fn $name(&self, key: &str, default: &[$ty]) -> Vec<$ty> {
            match self.values.get(key) {
                Some(LogValue::$variant(value)) => value.clone(),
                _ => default.to_vec(),
            }
        }
    };
}

impl LogTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`, replacing any previous value.
    pub fn put(&mut self, key: &str, value: impl Into<LogValue>) {
        self.values.insert(key.to_string(), value.into());
    }

    /// Raw value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&LogValue> {
        self.values.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Remove `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<LogValue> {
        self.values.remove(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    typed_getter!(get_boolean, Boolean, bool);
    typed_getter!(get_integer, Integer, i64);
    typed_getter!(get_float, Float, f32);
    typed_getter!(get_double, Double, f64);

    pub fn get_string(&self, key: &str, default: &str) -> String {
        match self.values.get(key) {
            Some(LogValue::String(value)) => value.clone(),
            _ => default.to_string(),
        }
    }

    array_getter!(
        /// Raw bytes under `key`.
        get_raw, Raw, u8
    );
    array_getter!(get_boolean_array, BooleanArray, bool);
    array_getter!(get_integer_array, IntegerArray, i64);
    array_getter!(get_float_array, FloatArray, f32);
    array_getter!(get_double_array, DoubleArray, f64);
    array_getter!(get_string_array, StringArray, String);
}

/// Capability of inputs that can be written to and read back from a [`LogTable`].
pub trait LoggableInputs {
    /// Write every logged field into `table`.
    fn to_log(&self, table: &mut LogTable);

    /// Read every logged field from `table`, keeping current values for absent keys.
    fn from_log(&mut self, table: &LogTable);
}

#[cfg(test)]
#[path = "table/table_tests.rs"]
mod table_tests;
