//! Payload conversions used by [`Response::change_type`](crate::Response::change_type)
//!
//! Every supported source/target pair is listed explicitly through the
//! [`Convert`] trait:
//!
//! | Source | Target | Rule |
//! |---|---|---|
//! | any scalar | same type | copied |
//! | `String` / `&str` | integers, floats, `bool`, `char` | parsed (trimmed, `bool` case-insensitive, out-of-range integers are `Overflow`) |
//! | integer | integer | range-checked |
//! | integer | float | widened |
//! | float | integer | rounded half to even, range-checked |
//! | `bool` / integer | integer / `bool` | `1`/`0`, non-zero is `true` |
//! | scalar | `String` | `Display` |
//! | `()` | anything with `Default` | default value |
//! | `Option<S>` / `Vec<S>` | `Option<Y>` / `Vec<Y>` | element-wise |
//! | `serde_json::Value` | any `DeserializeOwned` | deserialized |

use crate::error::{ConversionError, ConversionResult};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

/// Fallible conversion from a borrowed `S` into `Self`
pub trait Convert<S>: Sized {
    fn try_convert(value: &S) -> ConversionResult<Self>;
}

fn parse_text<Y>(value: &str) -> ConversionResult<Y>
where
    Y: FromStr,
    Y::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .trim()
        .parse::<Y>()
        .map_err(|e| ConversionError::format(value, e))
}

fn parse_int<Y>(value: &str, target: &'static str) -> ConversionResult<Y>
where
    Y: FromStr<Err = ParseIntError>,
{
    let trimmed = value.trim();
    trimmed.parse::<Y>().map_err(|e| {
        if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) {
            ConversionError::overflow(trimmed, target)
        } else {
            ConversionError::format(value, e)
        }
    })
}

macro_rules! impl_int_from_text {
    ($($dst:ty),*) => {
        $(
            impl Convert<String> for $dst {
                fn try_convert(value: &String) -> ConversionResult<Self> {
                    parse_int(value, stringify!($dst))
                }
            }

            impl<'a> Convert<&'a str> for $dst {
                fn try_convert(value: &&'a str) -> ConversionResult<Self> {
                    parse_int(value, stringify!($dst))
                }
            }
        )*
    };
}

macro_rules! impl_from_text {
    ($($dst:ty),*) => {
        $(
            impl Convert<String> for $dst {
                fn try_convert(value: &String) -> ConversionResult<Self> {
                    parse_text(value)
                }
            }

            impl<'a> Convert<&'a str> for $dst {
                fn try_convert(value: &&'a str) -> ConversionResult<Self> {
                    parse_text(value)
                }
            }
        )*
    };
}

macro_rules! impl_int_to_int {
    ($src:ty => $($dst:ty),*) => {
        $(
            impl Convert<$src> for $dst {
                fn try_convert(value: &$src) -> ConversionResult<Self> {
                    <$dst>::try_from(*value)
                        .map_err(|_| ConversionError::overflow(value, stringify!($dst)))
                }
            }
        )*
    };
}

macro_rules! impl_int_conversions {
    ($($src:ty),*) => {
        $(
            impl_int_to_int!($src => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

            impl Convert<$src> for f32 {
                fn try_convert(value: &$src) -> ConversionResult<Self> {
                    Ok(*value as f32)
                }
            }

            impl Convert<$src> for f64 {
                fn try_convert(value: &$src) -> ConversionResult<Self> {
                    Ok(*value as f64)
                }
            }

            impl Convert<$src> for bool {
                fn try_convert(value: &$src) -> ConversionResult<Self> {
                    Ok(*value != 0)
                }
            }

            impl Convert<bool> for $src {
                fn try_convert(value: &bool) -> ConversionResult<Self> {
                    Ok(<$src>::from(*value))
                }
            }
        )*
    };
}

macro_rules! impl_float_to_int {
    ($src:ty => $($dst:ty),*) => {
        $(
            impl Convert<$src> for $dst {
                fn try_convert(value: &$src) -> ConversionResult<Self> {
                    let rounded = value.round_ties_even();
                    if !rounded.is_finite()
                        || rounded < <$dst>::MIN as $src
                        || rounded >= <$dst>::MAX as $src + 1.0
                    {
                        return Err(ConversionError::overflow(value, stringify!($dst)));
                    }
                    Ok(rounded as $dst)
                }
            }
        )*
    };
}

macro_rules! impl_float_conversions {
    ($($src:ty),*) => {
        $(
            impl_float_to_int!($src => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

            impl Convert<$src> for f32 {
                fn try_convert(value: &$src) -> ConversionResult<Self> {
                    Ok(*value as f32)
                }
            }

            impl Convert<$src> for f64 {
                fn try_convert(value: &$src) -> ConversionResult<Self> {
                    Ok(*value as f64)
                }
            }
        )*
    };
}

macro_rules! impl_to_text {
    ($($src:ty),*) => {
        $(
            impl Convert<$src> for String {
                fn try_convert(value: &$src) -> ConversionResult<Self> {
                    Ok(value.to_string())
                }
            }
        )*
    };
}

impl_int_from_text!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_from_text!(f32, f64);
impl_int_conversions!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float_conversions!(f32, f64);
impl_to_text!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char
);

// bool and char get their own text rules: case-insensitive, untrimmed respectively

fn parse_bool(value: &str) -> ConversionResult<bool> {
    value
        .trim()
        .to_ascii_lowercase()
        .parse::<bool>()
        .map_err(|e| ConversionError::format(value, e))
}

impl Convert<String> for bool {
    fn try_convert(value: &String) -> ConversionResult<Self> {
        parse_bool(value)
    }
}

impl<'a> Convert<&'a str> for bool {
    fn try_convert(value: &&'a str) -> ConversionResult<Self> {
        parse_bool(value)
    }
}

impl Convert<String> for char {
    fn try_convert(value: &String) -> ConversionResult<Self> {
        value
            .parse::<char>()
            .map_err(|e| ConversionError::format(value.as_str(), e))
    }
}

impl<'a> Convert<&'a str> for char {
    fn try_convert(value: &&'a str) -> ConversionResult<Self> {
        value
            .parse::<char>()
            .map_err(|e| ConversionError::format(*value, e))
    }
}

impl Convert<bool> for bool {
    fn try_convert(value: &bool) -> ConversionResult<Self> {
        Ok(*value)
    }
}

impl Convert<char> for char {
    fn try_convert(value: &char) -> ConversionResult<Self> {
        Ok(*value)
    }
}

impl Convert<String> for String {
    fn try_convert(value: &String) -> ConversionResult<Self> {
        Ok(value.clone())
    }
}

impl<'a> Convert<&'a str> for String {
    fn try_convert(value: &&'a str) -> ConversionResult<Self> {
        Ok((*value).to_string())
    }
}

impl<Y: Default> Convert<()> for Y {
    fn try_convert(_: &()) -> ConversionResult<Self> {
        Ok(Y::default())
    }
}

impl<S, Y: Convert<S>> Convert<Option<S>> for Option<Y> {
    fn try_convert(value: &Option<S>) -> ConversionResult<Self> {
        value.as_ref().map(Y::try_convert).transpose()
    }
}

impl<S, Y: Convert<S>> Convert<Vec<S>> for Vec<Y> {
    fn try_convert(value: &Vec<S>) -> ConversionResult<Self> {
        value.iter().map(Y::try_convert).collect()
    }
}

impl<Y: DeserializeOwned> Convert<Value> for Y {
    fn try_convert(value: &Value) -> ConversionResult<Self> {
        Ok(Y::deserialize(value)?)
    }
}

/// Type name with module paths stripped, e.g. `Option<String>`
pub fn short_type_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let mut out = String::with_capacity(full.len());
    let mut ident = String::new();

    for c in full.chars() {
        if c.is_alphanumeric() || c == '_' || c == ':' {
            ident.push(c);
            continue;
        }
        if let Some(last) = ident.rsplit("::").next() {
            out.push_str(last);
        }
        ident.clear();
        out.push(c);
    }
    if let Some(last) = ident.rsplit("::").next() {
        out.push_str(last);
    }
    out
}
