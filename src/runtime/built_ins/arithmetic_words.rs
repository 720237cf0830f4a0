use crate::add_native_word;
use crate::runtime::data_structures::value::Cell;
use crate::runtime::interpreter::ForthInterpreter;

pub fn register_arithmetic_words(interpreter: &mut ForthInterpreter) {
    add_native_word!(
        interpreter,
        "+",
        |interp: &mut ForthInterpreter| {
            let b = interp.pop_number()?;
            let a = interp.pop_number()?;
            interp.push(Cell::Number(a + b));
            Ok(())
        },
        "Add the top two numbers.",
        "( a b -- a+b )"
    );

    add_native_word!(
        interpreter,
        "-",
        |interp: &mut ForthInterpreter| {
            let b = interp.pop_number()?;
            let a = interp.pop_number()?;
            interp.push(Cell::Number(a - b));
            Ok(())
        },
        "Subtract the top number from the second.",
        "( a b -- a-b )"
    );

    add_native_word!(
        interpreter,
        "*",
        |interp: &mut ForthInterpreter| {
            let b = interp.pop_number()?;
            let a = interp.pop_number()?;
            interp.push(Cell::Number(a * b));
            Ok(())
        },
        "Multiply the top two numbers.",
        "( a b -- a*b )"
    );

    add_native_word!(
        interpreter,
        "/",
        |interp: &mut ForthInterpreter| {
            let b = interp.pop_number()?;
            let a = interp.pop_number()?;
            interp.push(Cell::Number(a / b));
            Ok(())
        },
        "Divide the second number by the top.",
        "( a b -- a/b )"
    );

    add_native_word!(
        interpreter,
        "mod",
        |interp: &mut ForthInterpreter| {
            let b = interp.pop_number()?;
            let a = interp.pop_number()?;
            interp.push(Cell::Number(a % b));
            Ok(())
        },
        "Remainder after dividing the second number by the top.",
        "( a b -- a%b )"
    );

    // The bitwise words truncate to integers first, the way the runtime always has.
    add_native_word!(
        interpreter,
        "and",
        |interp: &mut ForthInterpreter| {
            let b = interp.pop_number()? as i64;
            let a = interp.pop_number()? as i64;
            interp.push(Cell::from(a & b));
            Ok(())
        },
        "Bitwise and of the top two numbers.",
        "( a b -- a&b )"
    );

    add_native_word!(
        interpreter,
        "or",
        |interp: &mut ForthInterpreter| {
            let b = interp.pop_number()? as i64;
            let a = interp.pop_number()? as i64;
            interp.push(Cell::from(a | b));
            Ok(())
        },
        "Bitwise or of the top two numbers.",
        "( a b -- a|b )"
    );

    add_native_word!(
        interpreter,
        "xor",
        |interp: &mut ForthInterpreter| {
            let b = interp.pop_number()? as i64;
            let a = interp.pop_number()? as i64;
            interp.push(Cell::from(a ^ b));
            Ok(())
        },
        "Bitwise exclusive or of the top two numbers.",
        "( a b -- a^b )"
    );

    add_native_word!(
        interpreter,
        "negate",
        |interp: &mut ForthInterpreter| {
            let a = interp.pop_number()?;
            interp.push(Cell::Number(0.0 - a));
            Ok(())
        },
        "Negate the top of the stack.",
        "( a -- -a )"
    );
}
