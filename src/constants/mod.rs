//! Built-in machine definitions

mod machines;

pub use machines::builtin_profiles;
