/// The value cell held on the data stack and inside parameter fields.
pub mod value;

/// The word dictionary and the threaded code instruction set.
pub mod dictionary;
