//! Builder arguments and their classification.
//!
//! A builder call takes a flat, heterogeneous list of [`Arg`]s. The
//! [`Drain`] turns that list into a stream of classified [`Item`]s,
//! splicing nested lists back in place and dropping absent values.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use smallvec::SmallVec;

/// Most builder calls carry only a handful of arguments
const TYPICAL_ARG_COUNT: usize = 8;

/// Deferred content producer, invoked once per render
pub type Lazy = Arc<dyn Fn() -> String + Send + Sync>;

/// A numeric scalar
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Int(n) => write!(f, "{}", n),
            Number::Float(n) if n.is_nan() => f.write_str("NaN"),
            Number::Float(n) if n.is_infinite() => {
                f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Number::Float(n) => write!(f, "{}", n),
        }
    }
}

macro_rules! number_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::Int(i64::from(value))
                }
            }
        )*
    };
}

number_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        i64::try_from(value)
            .map(Number::Int)
            .unwrap_or(Number::Float(value as f64))
    }
}

impl From<usize> for Number {
    fn from(value: usize) -> Self {
        Number::from(value as u64)
    }
}

impl From<isize> for Number {
    fn from(value: isize) -> Self {
        Number::Int(value as i64)
    }
}

impl From<f32> for Number {
    /// Goes through the f32's own shortest decimal, so `0.1f32` stays `0.1`
    fn from(value: f32) -> Self {
        Number::Float(
            value
                .to_string()
                .parse::<f64>()
                .unwrap_or(f64::from(value)),
        )
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

/// Value of one attribute mapping entry
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Text(String),
    Number(Number),
    /// `true` renders as a bare attribute name in markup
    Bool(bool),
    Null,
}

impl AttrValue {
    /// Raw string form as a live node would store it.
    ///
    /// Returns `None` for [`AttrValue::Null`].
    pub fn to_raw(&self) -> Option<String> {
        match self {
            AttrValue::Text(s) => Some(s.clone()),
            AttrValue::Number(n) => Some(n.to_string()),
            AttrValue::Bool(b) => Some(b.to_string()),
            AttrValue::Null => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        AttrValue::Text(value.clone())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<Number> for AttrValue {
    fn from(value: Number) -> Self {
        AttrValue::Number(value)
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(AttrValue::Null)
    }
}

macro_rules! attr_value_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for AttrValue {
                fn from(value: $ty) -> Self {
                    AttrValue::Number(Number::from(value))
                }
            }
        )*
    };
}

attr_value_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Attribute mapping: unique names, kept in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attrs(IndexMap<String, AttrValue>);

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, replacing any previous value under the same name
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.0.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Attrs
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attrs::new();
        for (k, v) in iter {
            attrs.insert(k, v);
        }
        attrs
    }
}

/// One builder argument.
///
/// `N` is the node type of the document model the builder targets.
pub enum Arg<N> {
    /// Text scalar
    Text(String),
    /// Numeric scalar
    Number(Number),
    /// Attributes to apply, never a child
    Attrs(Attrs),
    /// Ordered sequence, spliced in place
    List(Vec<Arg<N>>),
    /// Already constructed node
    Node(N),
    /// Pre-rendered markup producer (markup mode only)
    Lazy(Lazy),
    /// Anything with a textual form
    Display(Arc<dyn fmt::Display + Send + Sync>),
    /// Null-like absence, always skipped
    Absent,
}

/// Classification tag of an [`Arg`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    Text,
    Number,
    Attrs,
    List,
    Node,
    Lazy,
    Display,
    Absent,
}

impl<N> Arg<N> {
    pub fn node(node: N) -> Self {
        Arg::Node(node)
    }

    pub fn lazy<F>(f: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Arg::Lazy(Arc::new(f))
    }

    pub fn display<T>(value: T) -> Self
    where
        T: fmt::Display + Send + Sync + 'static,
    {
        Arg::Display(Arc::new(value))
    }

    pub fn kind(&self) -> ArgKind {
        match self {
            Arg::Text(_) => ArgKind::Text,
            Arg::Number(_) => ArgKind::Number,
            Arg::Attrs(_) => ArgKind::Attrs,
            Arg::List(_) => ArgKind::List,
            Arg::Node(_) => ArgKind::Node,
            Arg::Lazy(_) => ArgKind::Lazy,
            Arg::Display(_) => ArgKind::Display,
            Arg::Absent => ArgKind::Absent,
        }
    }
}

impl<N: Clone> Clone for Arg<N> {
    fn clone(&self) -> Self {
        match self {
            Arg::Text(s) => Arg::Text(s.clone()),
            Arg::Number(n) => Arg::Number(*n),
            Arg::Attrs(a) => Arg::Attrs(a.clone()),
            Arg::List(items) => Arg::List(items.clone()),
            Arg::Node(n) => Arg::Node(n.clone()),
            Arg::Lazy(f) => Arg::Lazy(Arc::clone(f)),
            Arg::Display(d) => Arg::Display(Arc::clone(d)),
            Arg::Absent => Arg::Absent,
        }
    }
}

impl<N: fmt::Debug> fmt::Debug for Arg<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Arg::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Arg::Attrs(a) => f.debug_tuple("Attrs").field(a).finish(),
            Arg::List(items) => f.debug_tuple("List").field(items).finish(),
            Arg::Node(n) => f.debug_tuple("Node").field(n).finish(),
            Arg::Lazy(_) => f.write_str("Lazy(..)"),
            Arg::Display(d) => f.debug_tuple("Display").field(&d.to_string()).finish(),
            Arg::Absent => f.write_str("Absent"),
        }
    }
}

impl<N> From<&str> for Arg<N> {
    fn from(value: &str) -> Self {
        Arg::Text(value.to_string())
    }
}

impl<N> From<String> for Arg<N> {
    fn from(value: String) -> Self {
        Arg::Text(value)
    }
}

impl<N> From<&String> for Arg<N> {
    fn from(value: &String) -> Self {
        Arg::Text(value.clone())
    }
}

impl<N> From<Number> for Arg<N> {
    fn from(value: Number) -> Self {
        Arg::Number(value)
    }
}

impl<N> From<Attrs> for Arg<N> {
    fn from(value: Attrs) -> Self {
        Arg::Attrs(value)
    }
}

impl<N, T: Into<Arg<N>>> From<Vec<T>> for Arg<N> {
    fn from(value: Vec<T>) -> Self {
        Arg::List(value.into_iter().map(Into::into).collect())
    }
}

impl<N, T: Into<Arg<N>>, const K: usize> From<[T; K]> for Arg<N> {
    fn from(value: [T; K]) -> Self {
        Arg::List(value.into_iter().map(Into::into).collect())
    }
}

impl<N, T: Into<Arg<N>>> From<Option<T>> for Arg<N> {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Arg::Absent)
    }
}

macro_rules! arg_from_number {
    ($($ty:ty),*) => {
        $(
            impl<N> From<$ty> for Arg<N> {
                fn from(value: $ty) -> Self {
                    Arg::Number(Number::from(value))
                }
            }
        )*
    };
}

arg_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// A classified argument, as produced by [`Drain`].
///
/// Lists and absent values never surface here.
pub enum Item<N> {
    Text(String),
    Number(Number),
    Attrs(Attrs),
    Node(N),
    Lazy(Lazy),
    Display(Arc<dyn fmt::Display + Send + Sync>),
}

/// Front-to-back drain over a work list of arguments.
///
/// Nested lists are spliced back at the front, so their elements are
/// yielded before anything that followed the list. Nesting depth is
/// unbounded.
pub struct Drain<N> {
    /// Remaining work, front of the list at the end of the stack
    stack: SmallVec<[Arg<N>; TYPICAL_ARG_COUNT]>,
}

impl<N> Drain<N> {
    pub fn new<I>(args: I) -> Self
    where
        I: IntoIterator<Item = Arg<N>>,
    {
        let mut stack: SmallVec<[Arg<N>; TYPICAL_ARG_COUNT]> = args.into_iter().collect();
        stack.reverse();
        Self { stack }
    }

    /// Drain `defaults` (leaves cloned) followed by `args`
    pub fn with_defaults<I>(defaults: &[Arg<N>], args: I) -> Self
    where
        N: Clone,
        I: IntoIterator<Item = Arg<N>>,
    {
        Self::new(Walk::new(defaults).map(Arg::from).chain(args))
    }
}

impl<N> Iterator for Drain<N> {
    type Item = Item<N>;

    fn next(&mut self) -> Option<Item<N>> {
        while let Some(arg) = self.stack.pop() {
            match arg {
                Arg::Text(s) => return Some(Item::Text(s)),
                Arg::Number(n) => return Some(Item::Number(n)),
                Arg::Attrs(a) => return Some(Item::Attrs(a)),
                Arg::List(items) => {
                    tracing::trace!(len = items.len(), "splicing argument list");
                    self.stack.extend(items.into_iter().rev());
                }
                Arg::Node(n) => return Some(Item::Node(n)),
                Arg::Lazy(f) => return Some(Item::Lazy(f)),
                Arg::Display(d) => return Some(Item::Display(d)),
                Arg::Absent => tracing::trace!("skipping absent argument"),
            }
        }
        None
    }
}

/// Borrowing counterpart of [`Drain`].
///
/// Walks nested lists through a stack of slice iterators and clones only
/// the leaves it yields, so neither walking nor cloning recurses.
pub struct Walk<'a, N> {
    stack: SmallVec<[std::slice::Iter<'a, Arg<N>>; TYPICAL_ARG_COUNT]>,
}

impl<'a, N> Walk<'a, N> {
    pub fn new(args: &'a [Arg<N>]) -> Self {
        let mut stack = SmallVec::new();
        stack.push(args.iter());
        Self { stack }
    }
}

impl<'a, N: Clone> Iterator for Walk<'a, N> {
    type Item = Item<N>;

    fn next(&mut self) -> Option<Item<N>> {
        while let Some(top) = self.stack.last_mut() {
            let Some(arg) = top.next() else {
                self.stack.pop();
                continue;
            };
            match arg {
                Arg::Text(s) => return Some(Item::Text(s.clone())),
                Arg::Number(n) => return Some(Item::Number(*n)),
                Arg::Attrs(a) => return Some(Item::Attrs(a.clone())),
                Arg::List(items) => self.stack.push(items.iter()),
                Arg::Node(n) => return Some(Item::Node(n.clone())),
                Arg::Lazy(f) => return Some(Item::Lazy(Arc::clone(f))),
                Arg::Display(d) => return Some(Item::Display(Arc::clone(d))),
                Arg::Absent => tracing::trace!("skipping absent argument"),
            }
        }
        None
    }
}

impl<N> From<Item<N>> for Arg<N> {
    fn from(item: Item<N>) -> Self {
        match item {
            Item::Text(s) => Arg::Text(s),
            Item::Number(n) => Arg::Number(n),
            Item::Attrs(a) => Arg::Attrs(a),
            Item::Node(n) => Arg::Node(n),
            Item::Lazy(f) => Arg::Lazy(f),
            Item::Display(d) => Arg::Display(d),
        }
    }
}
