//! Entry keys
//!
//! A key is either a non-negative integer or a string. Strings holding the
//! canonical decimal form of a non-negative integer normalize to the integer
//! key, so `Key::from("7") == Key::from(7u64)`.

use std::borrow::Cow;
use std::fmt;

/// Key of a collection entry
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Positional or explicit integer key
    Int(u64),
    /// String key
    Str(String),
}

impl Key {
    /// Integer value of the key, if it is an integer key
    pub fn as_int(&self) -> Option<u64> {
        match self {
            Self::Int(i) => Some(*i),
            Self::Str(_) => None,
        }
    }

    /// String value of the key, if it is a string key
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Int(_) => None,
            Self::Str(s) => Some(s),
        }
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    pub fn is_str(&self) -> bool {
        matches!(self, Self::Str(_))
    }

    /// Textual form used by string and natural comparisons
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Self::Int(i) => Cow::Owned(i.to_string()),
            Self::Str(s) => Cow::Borrowed(s),
        }
    }
}

/// Parse `s` as a canonical non-negative decimal integer.
///
/// Rejects empty strings, signs, whitespace, leading zeros and values that
/// overflow `u64`.
pub(crate) fn canonical_int(s: &str) -> Option<u64> {
    let bytes = s.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    s.parse().ok()
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{}", i),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<u64> for Key {
    fn from(value: u64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Self::Int(u64::from(value))
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Self::Int(value as u64)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        match canonical_int(value) {
            Some(i) => Self::Int(i),
            None => Self::Str(value.to_string()),
        }
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        match canonical_int(&value) {
            Some(i) => Self::Int(i),
            None => Self::Str(value),
        }
    }
}

impl From<&String> for Key {
    fn from(value: &String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<&Key> for Key {
    fn from(value: &Key) -> Self {
        value.clone()
    }
}

/// Values that can serve as keys when a collection is flipped
///
/// Returns `None` for values with no key form (negative integers, floats,
/// booleans, arbitrary payloads).
pub trait ToKey {
    fn to_key(&self) -> Option<Key>;
}

macro_rules! unsigned_to_key {
    ($($t:ty),*) => {
        $(
            impl ToKey for $t {
                fn to_key(&self) -> Option<Key> {
                    Some(Key::Int(*self as u64))
                }
            }
        )*
    };
}

macro_rules! signed_to_key {
    ($($t:ty),*) => {
        $(
            impl ToKey for $t {
                fn to_key(&self) -> Option<Key> {
                    u64::try_from(*self).ok().map(Key::Int)
                }
            }
        )*
    };
}

unsigned_to_key!(u8, u16, u32, u64, usize);
signed_to_key!(i8, i16, i32, i64, isize);

impl ToKey for str {
    fn to_key(&self) -> Option<Key> {
        Some(Key::from(self))
    }
}

impl ToKey for String {
    fn to_key(&self) -> Option<Key> {
        Some(Key::from(self.as_str()))
    }
}

impl ToKey for char {
    fn to_key(&self) -> Option<Key> {
        let mut buf = [0u8; 4];
        Some(Key::from(&*self.encode_utf8(&mut buf)))
    }
}

impl ToKey for Key {
    fn to_key(&self) -> Option<Key> {
        Some(self.clone())
    }
}

impl ToKey for f32 {
    fn to_key(&self) -> Option<Key> {
        None
    }
}

impl ToKey for f64 {
    fn to_key(&self) -> Option<Key> {
        None
    }
}

impl ToKey for bool {
    fn to_key(&self) -> Option<Key> {
        None
    }
}

impl<T: ToKey + ?Sized> ToKey for &T {
    fn to_key(&self) -> Option<Key> {
        (**self).to_key()
    }
}
