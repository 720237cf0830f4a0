/// The input buffer and token extraction for the outer interpreter.
pub mod source_buffer;
