//! Allowlist of platform (runtime built-in) class and interface names.

use rustc_hash::FxHashSet;

/// Classes and interfaces shipped by the PHP runtime and its bundled
/// extensions. Names a project neither declares nor aliases to something
/// declared usually point here.
const PHP_RUNTIME: &[&str] = &[
    // language core
    "stdClass",
    "Closure",
    "Generator",
    "WeakReference",
    "WeakMap",
    "Traversable",
    "Iterator",
    "IteratorAggregate",
    "ArrayAccess",
    "Countable",
    "Serializable",
    "Stringable",
    "JsonSerializable",
    // throwables
    "Throwable",
    "Exception",
    "ErrorException",
    "Error",
    "TypeError",
    "ValueError",
    "ArgumentCountError",
    "ArithmeticError",
    "DivisionByZeroError",
    // SPL exceptions
    "RuntimeException",
    "LogicException",
    "InvalidArgumentException",
    "OutOfBoundsException",
    "OutOfRangeException",
    "LengthException",
    "DomainException",
    "RangeException",
    "UnexpectedValueException",
    "BadFunctionCallException",
    "BadMethodCallException",
    "OverflowException",
    "UnderflowException",
    "JsonException",
    // SPL containers
    "ArrayObject",
    "ArrayIterator",
    "SplDoublyLinkedList",
    "SplStack",
    "SplQueue",
    "SplHeap",
    "SplMinHeap",
    "SplMaxHeap",
    "SplPriorityQueue",
    "SplFixedArray",
    "SplObjectStorage",
    // date/time
    "DateTimeInterface",
    "DateTime",
    "DateTimeImmutable",
    "DateTimeZone",
    "DateInterval",
    "DatePeriod",
    // reflection
    "ReflectionClass",
    "ReflectionObject",
    "ReflectionMethod",
    "ReflectionProperty",
    "ReflectionFunction",
    "ReflectionException",
    // common extensions
    "PDO",
    "PDOStatement",
    "PDOException",
    "SimpleXMLElement",
    "DOMDocument",
    "DOMNode",
    "DOMElement",
];

/// Configurable set of names classified as platform references.
///
/// Defaults to the PHP runtime set; callers documenting another language
/// swap in their own list.
#[derive(Debug, Clone)]
pub struct PlatformIndex {
    names: FxHashSet<String>,
}

impl PlatformIndex {
    /// An empty allowlist: every unresolved name becomes external-library.
    pub fn empty() -> Self {
        Self {
            names: FxHashSet::default(),
        }
    }

    /// The PHP runtime class/interface set.
    pub fn php_runtime() -> Self {
        Self {
            names: PHP_RUNTIME.iter().map(|name| (*name).to_string()).collect(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    pub fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for PlatformIndex {
    fn default() -> Self {
        Self::php_runtime()
    }
}
