use crate::runtime::data_structures::dictionary::Instr;
use crate::runtime::data_structures::value::Cell;
use crate::runtime::interpreter::ForthInterpreter;
use crate::{add_native_immediate_word, add_native_word};

/// Register the string and token handling words, along with the mode switching brackets.
pub fn register_string_words(interpreter: &mut ForthInterpreter) {
    add_native_immediate_word!(
        interpreter,
        "[",
        |interp: &mut ForthInterpreter| {
            interp.set_compiling(false);
            Ok(())
        },
        "Leave compiling mode.",
        "( -- )"
    );

    add_native_word!(
        interpreter,
        "]",
        |interp: &mut ForthInterpreter| {
            interp.set_compiling(true);
            Ok(())
        },
        "Enter compiling mode.",
        "( -- )"
    );

    add_native_word!(
        interpreter,
        "find",
        |interp: &mut ForthInterpreter| {
            let token = interp.parse_token(None)?;

            let result = match interp.dictionary().find(&token) {
                Some(index) => index as f64,
                None => -1.0,
            };

            interp.push(Cell::Number(result));
            Ok(())
        },
        "Look up the next token, pushing its index or -1.",
        "( -- index|-1 )"
    );

    add_native_word!(
        interpreter,
        "'",
        |interp: &mut ForthInterpreter| {
            let index = interp.tick()?;
            interp.push(Cell::from(index));
            Ok(())
        },
        "Push the dictionary index of the next word.",
        "( -- index )"
    );

    add_native_immediate_word!(
        interpreter,
        "[']",
        |interp: &mut ForthInterpreter| {
            interp.require_compiling("[']")?;
            let index = interp.tick()?;
            interp.compile(Instr::Lit(Cell::from(index)))
        },
        "Compile the dictionary index of the next word as a literal.",
        "( -- )"
    );

    add_native_immediate_word!(
        interpreter,
        "s\"",
        |interp: &mut ForthInterpreter| {
            let text = interp.parse_token(Some('"'))?;

            if interp.compiling() {
                interp.compile(Instr::Lit(Cell::Text(text)))
            } else {
                interp.push(Cell::Text(text));
                Ok(())
            }
        },
        "Collect text up to the closing quote as a string literal.",
        "( -- text )"
    );

    add_native_immediate_word!(
        interpreter,
        ".\"",
        |interp: &mut ForthInterpreter| {
            let text = interp.parse_token(Some('"'))?;

            if interp.compiling() {
                interp.compile(Instr::Print(text))
            } else {
                interp.write_text(&text);
                Ok(())
            }
        },
        "Collect text up to the closing quote and print it.",
        "( -- )"
    );

    add_native_immediate_word!(
        interpreter,
        "(",
        |interp: &mut ForthInterpreter| {
            let _ = interp.parse_token(Some(')'))?;
            Ok(())
        },
        "Skip a comment up to the closing paren.",
        "( -- )"
    );

    add_native_immediate_word!(
        interpreter,
        ".(",
        |interp: &mut ForthInterpreter| {
            let text = interp.parse_token(Some(')'))?;
            interp.write_text(&text);
            Ok(())
        },
        "Print text up to the closing paren immediately.",
        "( -- )"
    );

    add_native_immediate_word!(
        interpreter,
        "\\",
        |interp: &mut ForthInterpreter| {
            let _ = interp.parse_token(Some('\n'))?;
            Ok(())
        },
        "Skip the rest of the line.",
        "( -- )"
    );
}
