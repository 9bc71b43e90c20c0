pub mod strings;
pub mod object;
pub mod function;
pub mod environment;
pub mod errors;


pub use object::{Object, HashKey, HashPair, HashObject};
pub use function::{Function, Builtin, BuiltinFn};
pub use environment::{EnvArena, EnvId, CapturedEnv, Environment};
pub use errors::{RuntimeError, ErrorKind, ExecResult};


// Default Hasher

pub type DefaultBuildHasher = ahash::RandomState;

pub type HashMap<K, V> = std::collections::HashMap<K, V, DefaultBuildHasher>;
