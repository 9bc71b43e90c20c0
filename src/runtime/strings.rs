use core::fmt;
use core::cell::RefCell;
use core::marker::PhantomData;
use string_interner::{self, DefaultBackend};
use string_interner::symbol::Symbol;

use crate::language::InternSymbol;
use crate::runtime::DefaultBuildHasher;


thread_local! {
    pub static STRING_TABLE: RefCell<StringTable> = RefCell::new(StringTable::new());
}


// Interned Strings

type PhantomUnsend = PhantomData<*mut ()>;

/// An interned identifier name.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StringSymbol(InternSymbol, PhantomUnsend);

// Not Send because we depend on the thread-local string table.

impl StringSymbol {
    fn as_usize(&self) -> usize {
        self.0.to_usize()
    }

    /// Interns a string slice, creating a `StringSymbol`
    pub fn intern(string: &str) -> Self {
        STRING_TABLE.with(|string_table| string_table.borrow_mut().get_or_intern(string))
    }

    /// Call `f` with the resolved string. The table is borrowed for the duration of the call.
    pub fn with_str<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        STRING_TABLE.with(|string_table| f(string_table.borrow().resolve(self)))
    }

    pub fn write(&self, buf: &mut impl fmt::Write) -> fmt::Result {
        self.with_str(|string| buf.write_str(string))
    }
}

impl From<&str> for StringSymbol {
    fn from(string: &str) -> Self {
        Self::intern(string)
    }
}

impl From<InternSymbol> for StringSymbol {
    fn from(symbol: InternSymbol) -> Self {
        Self(symbol, PhantomData)
    }
}

impl fmt::Debug for StringSymbol {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "StringSymbol({}, ", self.as_usize())?;
        self.with_str(|string| write!(fmt, "{:?})", string))
    }
}

impl fmt::Display for StringSymbol {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(fmt)
    }
}


type InternBackend = DefaultBackend<InternSymbol>;

pub type StringInterner = string_interner::StringInterner<InternBackend, DefaultBuildHasher>;

#[derive(Clone)]
pub struct StringTable {
    interner: StringInterner,
}

impl Default for StringTable {
    fn default() -> Self { Self::new() }
}

impl StringTable {
    pub fn new() -> Self {
        StringTable {
            interner: StringInterner::new(),
        }
    }

    pub fn get_or_intern(&mut self, string: &str) -> StringSymbol {
        self.interner.get_or_intern(string).into()
    }

    // symbols are only ever created by this table, so resolution cannot fail
    pub fn resolve(&self, symbol: &StringSymbol) -> &str {
        self.interner.resolve(symbol.0).unwrap_or_default()
    }

    pub fn len(&self) -> usize { self.interner.len() }

    pub fn is_empty(&self) -> bool { self.interner.is_empty() }
}
