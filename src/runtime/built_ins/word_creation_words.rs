use log::debug;

use crate::runtime::data_structures::dictionary::{Instr, Word};
use crate::runtime::data_structures::value::Cell;
use crate::runtime::error;
use crate::runtime::interpreter::ForthInterpreter;
use crate::{add_native_immediate_word, add_native_word};

/// Register the defining words.
pub fn register_word_creation_words(interpreter: &mut ForthInterpreter) {
    add_native_word!(
        interpreter,
        ":",
        |interp: &mut ForthInterpreter| {
            let name = interp.parse_token(None)?;

            debug!("defining {}", name);

            interp.dictionary_mut().add(Word::nest(&name));
            interp.set_compiling(true);
            Ok(())
        },
        "Begin a new colon definition named by the next token.",
        "( -- )"
    );

    add_native_immediate_word!(
        interpreter,
        ";",
        |interp: &mut ForthInterpreter| {
            interp.require_compiling(";")?;

            if !interp.control_stack_empty() {
                return error::control_mismatch("unfinished structure in definition");
            }

            interp.compile_call("exit")?;
            interp.set_compiling(false);
            Ok(())
        },
        "End the current colon definition.",
        "( -- )"
    );

    add_native_word!(
        interpreter,
        "create",
        |interp: &mut ForthInterpreter| {
            let name = interp.parse_token(None)?;
            interp.dictionary_mut().add(Word::variable(&name));
            Ok(())
        },
        "Create a word that pushes its own dictionary index.",
        "( -- )"
    );

    add_native_word!(
        interpreter,
        "constant",
        |interp: &mut ForthInterpreter| {
            let name = interp.parse_token(None)?;
            let value = interp.pop()?;
            interp.dictionary_mut().add(Word::constant(&name, value));
            Ok(())
        },
        "Create a word that pushes the value popped now.",
        "( a -- )"
    );

    add_native_word!(
        interpreter,
        ",",
        |interp: &mut ForthInterpreter| {
            let value = interp.pop()?;
            interp.compile(Instr::Lit(value))
        },
        "Append the popped value to the newest word's parameter field.",
        "( a -- )"
    );

    add_native_word!(
        interpreter,
        "allot",
        |interp: &mut ForthInterpreter| {
            let count = interp.pop_index()?;

            for _ in 0..count {
                interp.compile(Instr::Lit(Cell::Number(0.0)))?;
            }

            Ok(())
        },
        "Append the given number of zero cells to the newest word.",
        "( n -- )"
    );

    add_native_word!(
        interpreter,
        "does>",
        |interp: &mut ForthInterpreter| { interp.retrofit_latest() },
        "Give the newest word the behaviour of the code that follows.",
        "( -- )"
    );
}
