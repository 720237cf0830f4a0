/// Error type and result alias used throughout the runtime.
pub mod error;

/// The core data structures of the virtual machine, the value cells and the word dictionary.
pub mod data_structures;

/// The interpreter itself.  Holds all of the session state and implements both the outer and the
/// inner interpreter loops.
pub mod interpreter;

/// Registration of the native words that seed the dictionary.
pub mod built_ins;
