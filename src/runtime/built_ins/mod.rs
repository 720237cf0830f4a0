use crate::runtime::interpreter::ForthInterpreter;

pub mod arithmetic_words;
pub mod comparison_words;
pub mod control_words;
pub mod memory_words;
pub mod output_words;
pub mod stack_words;
pub mod string_words;
pub mod tool_words;
pub mod word_creation_words;

/// Seed a fresh interpreter's dictionary with the complete primitive word set.  Called once per
/// session, after which the dictionary fence is recorded.
pub fn register_built_in_words(interpreter: &mut ForthInterpreter) {
    stack_words::register_stack_words(interpreter);
    arithmetic_words::register_arithmetic_words(interpreter);
    comparison_words::register_comparison_words(interpreter);
    output_words::register_output_words(interpreter);
    string_words::register_string_words(interpreter);
    control_words::register_control_words(interpreter);
    word_creation_words::register_word_creation_words(interpreter);
    memory_words::register_memory_words(interpreter);
    tool_words::register_tool_words(interpreter);
}
