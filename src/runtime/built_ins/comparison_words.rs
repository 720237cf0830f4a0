use crate::add_native_word;
use crate::runtime::data_structures::value::Cell;
use crate::runtime::interpreter::ForthInterpreter;

/// Register the comparison words.  All of them push the canonical truth values, -1 for true and
/// 0 for false.
pub fn register_comparison_words(interpreter: &mut ForthInterpreter) {
    add_native_word!(
        interpreter,
        "0=",
        |interp: &mut ForthInterpreter| {
            let a = interp.pop_number()?;
            interp.push(Cell::truth(a == 0.0));
            Ok(())
        },
        "Is the top of the stack zero?",
        "( a -- flag )"
    );

    add_native_word!(
        interpreter,
        "0<",
        |interp: &mut ForthInterpreter| {
            let a = interp.pop_number()?;
            interp.push(Cell::truth(a < 0.0));
            Ok(())
        },
        "Is the top of the stack negative?",
        "( a -- flag )"
    );

    add_native_word!(
        interpreter,
        "0>",
        |interp: &mut ForthInterpreter| {
            let a = interp.pop_number()?;
            interp.push(Cell::truth(a > 0.0));
            Ok(())
        },
        "Is the top of the stack positive?",
        "( a -- flag )"
    );

    add_native_word!(
        interpreter,
        "0<>",
        |interp: &mut ForthInterpreter| {
            let a = interp.pop_number()?;
            interp.push(Cell::truth(a != 0.0));
            Ok(())
        },
        "Is the top of the stack non-zero?",
        "( a -- flag )"
    );

    add_native_word!(
        interpreter,
        "0<=",
        |interp: &mut ForthInterpreter| {
            let a = interp.pop_number()?;
            interp.push(Cell::truth(a <= 0.0));
            Ok(())
        },
        "Is the top of the stack zero or negative?",
        "( a -- flag )"
    );

    add_native_word!(
        interpreter,
        "0>=",
        |interp: &mut ForthInterpreter| {
            let a = interp.pop_number()?;
            interp.push(Cell::truth(a >= 0.0));
            Ok(())
        },
        "Is the top of the stack zero or positive?",
        "( a -- flag )"
    );

    add_native_word!(
        interpreter,
        "=",
        |interp: &mut ForthInterpreter| {
            let b = interp.pop()?;
            let a = interp.pop()?;
            interp.push(Cell::truth(a == b));
            Ok(())
        },
        "Are the top two items equal?",
        "( a b -- flag )"
    );

    // Kept alongside `=` for compatibility with older sources.
    add_native_word!(
        interpreter,
        "==",
        |interp: &mut ForthInterpreter| {
            let b = interp.pop()?;
            let a = interp.pop()?;
            interp.push(Cell::truth(a == b));
            Ok(())
        },
        "Are the top two items equal?",
        "( a b -- flag )"
    );

    add_native_word!(
        interpreter,
        "<>",
        |interp: &mut ForthInterpreter| {
            let b = interp.pop()?;
            let a = interp.pop()?;
            interp.push(Cell::truth(a != b));
            Ok(())
        },
        "Are the top two items different?",
        "( a b -- flag )"
    );

    add_native_word!(
        interpreter,
        "<",
        |interp: &mut ForthInterpreter| {
            let b = interp.pop_number()?;
            let a = interp.pop_number()?;
            interp.push(Cell::truth(a < b));
            Ok(())
        },
        "Is the second number less than the top?",
        "( a b -- flag )"
    );

    add_native_word!(
        interpreter,
        ">",
        |interp: &mut ForthInterpreter| {
            let b = interp.pop_number()?;
            let a = interp.pop_number()?;
            interp.push(Cell::truth(a > b));
            Ok(())
        },
        "Is the second number greater than the top?",
        "( a b -- flag )"
    );

    add_native_word!(
        interpreter,
        "<=",
        |interp: &mut ForthInterpreter| {
            let b = interp.pop_number()?;
            let a = interp.pop_number()?;
            interp.push(Cell::truth(a <= b));
            Ok(())
        },
        "Is the second number at most the top?",
        "( a b -- flag )"
    );

    add_native_word!(
        interpreter,
        ">=",
        |interp: &mut ForthInterpreter| {
            let b = interp.pop_number()?;
            let a = interp.pop_number()?;
            interp.push(Cell::truth(a >= b));
            Ok(())
        },
        "Is the second number at least the top?",
        "( a b -- flag )"
    );
}
