macro_rules! impl_from_for_signedint {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::SignedInt(v as i64)
                }
            }
        )+
    };
}

macro_rules! impl_from_for_unsignedint {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::UnsignedInt(v as u64)
                }
            }
        )+
    };
}

macro_rules! impl_from_for_float {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::Float(v as f64)
                }
            }
        )+
    };
}

macro_rules! impl_from_for_str {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::Str(v.to_string())
                }
            }
        )+
    };
}

/// Bind value handed to the execution layer alongside the rendered sql.
///
/// The builder never inspects these, it only keeps them in placeholder order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum Value {
    Null,
    Bool(bool),
    SignedInt(i64),
    UnsignedInt(u64),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }
}

impl_from_for_signedint! {i8, i16, i32, i64, isize}
impl_from_for_unsignedint! {u8, u16, u32, u64, usize}
impl_from_for_float! {f32, f64}
impl_from_for_str! {&str, String, &String}

/// Build a `Vec<Value>` from a list of heterogeneous expressions
///
/// # Examples
///
/// ```
/// use sqlb::{values, Value};
///
/// let list = values![1, "abc", 2.5, None::<i32>];
///
/// assert_eq!(
///     list,
///     vec![
///         Value::SignedInt(1),
///         Value::Str("abc".into()),
///         Value::Float(2.5),
///         Value::Null,
///     ]
/// );
/// ```
#[macro_export]
macro_rules! values {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($value:expr),+ $(,)?) => {
        vec![$($crate::Value::from($value)),+]
    };
}

#[cfg(test)]
mod test {
    use crate::Value;

    #[test]
    fn test_from() {
        assert_eq!(Value::from(-3i8), Value::SignedInt(-3));
        assert_eq!(Value::from(7usize), Value::UnsignedInt(7));
        assert_eq!(Value::from(1.5f32), Value::Float(1.5));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(String::from("x")), Value::Str("x".into()));
        assert_eq!(Value::from(vec![1u8, 2]), Value::Bytes(vec![1, 2]));
        assert_eq!(Value::from(Some(4u32)), Value::UnsignedInt(4));
        assert_eq!(Value::from(None::<&str>), Value::Null);
    }

    #[test]
    fn test_values_macro() {
        assert!(values![].is_empty());
        assert_eq!(
            values!["a", 2, false,],
            vec![Value::Str("a".into()), Value::SignedInt(2), Value::Bool(false)]
        );
    }
}
