// Type-directed emptiness

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, SyncSender};

/// How a value answers "is it empty?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// No value at all (`None`)
    Absent,
    /// Sequence or mapping, empty when it holds nothing
    Collection { len: usize },
    /// Any other value, empty when it equals its zero value
    Scalar { zero: bool },
    /// No emptiness rule exists for this type
    Unsupported(&'static str),
}

impl Kind {
    /// Whether the value counts as empty.
    ///
    /// # Panics
    ///
    /// Panics on [`Kind::Unsupported`]. Asking whether a channel or a function
    /// is empty is a bug in the calling code, not a validation failure.
    pub fn is_empty(self) -> bool {
        match self {
            Kind::Absent => true,
            Kind::Collection { len } => len == 0,
            Kind::Scalar { zero } => zero,
            Kind::Unsupported(name) => panic!("unsupported kind for emptiness: {}", name),
        }
    }
}

/// Values that [`not_empty`](crate::not_empty) and [`empty`](crate::empty)
/// can inspect.
///
/// Records opt in with [`impl_emptiness!`](crate::impl_emptiness), which
/// treats a record as empty when it equals its `Default`.
///
/// Smart pointers and references are transparent: `Box::new(0)`, `Rc::new(0)`
/// and `Some(Box::new(0))` are all empty because the pointee is zero.
/// Timestamps compare against the Unix epoch, so a real
/// `1970-01-01T00:00:00Z` also counts as empty.
pub trait Emptiness {
    fn kind(&self) -> Kind;
}

/// Implement [`Emptiness`] by comparing against `Default::default()`.
///
/// ```
/// use fieldcheck_core::{impl_emptiness, not_empty};
///
/// #[derive(Default, PartialEq)]
/// struct Address {
///     line1: String,
///     city: String,
/// }
///
/// impl_emptiness!(Address);
///
/// let blank = Address::default();
/// assert!(not_empty(&blank).evaluate().is_err());
///
/// let home = Address { line1: "1 High St".into(), city: String::new() };
/// assert!(not_empty(&home).evaluate().is_ok());
/// ```
#[macro_export]
macro_rules! impl_emptiness {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Emptiness for $ty {
                fn kind(&self) -> $crate::Kind {
                    $crate::Kind::Scalar {
                        zero: *self == <$ty as ::core::default::Default>::default(),
                    }
                }
            }
        )+
    };
}

impl_emptiness!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, (),
    String
);

impl_emptiness!(chrono::NaiveDate, chrono::NaiveTime, chrono::NaiveDateTime);

impl Emptiness for str {
    fn kind(&self) -> Kind {
        Kind::Scalar {
            zero: self.is_empty(),
        }
    }
}

// The zero timestamp is the Unix epoch, matching chrono's `Default`.
impl<Tz: chrono::TimeZone> Emptiness for chrono::DateTime<Tz> {
    fn kind(&self) -> Kind {
        Kind::Scalar {
            zero: self.timestamp() == 0 && self.timestamp_subsec_nanos() == 0,
        }
    }
}

impl<T: Emptiness> Emptiness for Option<T> {
    fn kind(&self) -> Kind {
        match self {
            Some(value) => value.kind(),
            None => Kind::Absent,
        }
    }
}

// Fixed-size arrays are values, not containers: empty when every element is.
impl<T: Emptiness, const N: usize> Emptiness for [T; N] {
    fn kind(&self) -> Kind {
        Kind::Scalar {
            zero: self.iter().all(|item| item.kind().is_empty()),
        }
    }
}

macro_rules! impl_collection {
    ($(impl<$($param:ident),*> for $ty:ty;)+) => {
        $(
            impl<$($param),*> Emptiness for $ty {
                fn kind(&self) -> Kind {
                    Kind::Collection { len: self.len() }
                }
            }
        )+
    };
}

impl_collection! {
    impl<T> for [T];
    impl<T> for Vec<T>;
    impl<T> for VecDeque<T>;
    impl<T, S> for HashSet<T, S>;
    impl<T> for BTreeSet<T>;
    impl<K, V, S> for HashMap<K, V, S>;
    impl<K, V> for BTreeMap<K, V>;
}

macro_rules! impl_delegate {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl<T: Emptiness + ?Sized> Emptiness for $ty {
                fn kind(&self) -> Kind {
                    (**self).kind()
                }
            }
        )+
    };
}

impl_delegate!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

impl<T> Emptiness for Sender<T> {
    fn kind(&self) -> Kind {
        Kind::Unsupported("channel sender")
    }
}

impl<T> Emptiness for SyncSender<T> {
    fn kind(&self) -> Kind {
        Kind::Unsupported("channel sender")
    }
}

impl<T> Emptiness for Receiver<T> {
    fn kind(&self) -> Kind {
        Kind::Unsupported("channel receiver")
    }
}

impl<R> Emptiness for fn() -> R {
    fn kind(&self) -> Kind {
        Kind::Unsupported("function")
    }
}

impl<A, R> Emptiness for fn(A) -> R {
    fn kind(&self) -> Kind {
        Kind::Unsupported("function")
    }
}
