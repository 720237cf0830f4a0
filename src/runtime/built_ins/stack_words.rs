use crate::add_native_word;
use crate::runtime::data_structures::value::Cell;
use crate::runtime::interpreter::ForthInterpreter;

pub fn register_stack_words(interpreter: &mut ForthInterpreter) {
    add_native_word!(
        interpreter,
        "dup",
        |interp: &mut ForthInterpreter| {
            let a = interp.pop()?;
            interp.push(a.clone());
            interp.push(a);
            Ok(())
        },
        "Duplicate the top of the stack.",
        "( a -- a a )"
    );

    add_native_word!(
        interpreter,
        "over",
        |interp: &mut ForthInterpreter| {
            let a = interp.pick(1)?;
            interp.push(a);
            Ok(())
        },
        "Copy the second item to the top.",
        "( a b -- a b a )"
    );

    add_native_word!(
        interpreter,
        "2dup",
        |interp: &mut ForthInterpreter| {
            let a = interp.pick(1)?;
            let b = interp.pick(0)?;
            interp.push(a);
            interp.push(b);
            Ok(())
        },
        "Duplicate the top pair.",
        "( a b -- a b a b )"
    );

    add_native_word!(
        interpreter,
        "2over",
        |interp: &mut ForthInterpreter| {
            let a = interp.pick(3)?;
            let b = interp.pick(2)?;
            interp.push(a);
            interp.push(b);
            Ok(())
        },
        "Copy the second pair to the top.",
        "( a b c d -- a b c d a b )"
    );

    add_native_word!(
        interpreter,
        "4dup",
        |interp: &mut ForthInterpreter| {
            // Each push shifts the stack, so the source stays four deep the whole time.
            for _ in 0..4 {
                let value = interp.pick(3)?;
                interp.push(value);
            }
            Ok(())
        },
        "Duplicate the top four items.",
        "( a b c d -- a b c d a b c d )"
    );

    add_native_word!(
        interpreter,
        "swap",
        |interp: &mut ForthInterpreter| {
            let b = interp.pop()?;
            let a = interp.pop()?;
            interp.push(b);
            interp.push(a);
            Ok(())
        },
        "Exchange the top two items.",
        "( a b -- b a )"
    );

    add_native_word!(
        interpreter,
        "rot",
        |interp: &mut ForthInterpreter| {
            let a = interp.roll(2)?;
            interp.push(a);
            Ok(())
        },
        "Rotate the third item to the top.",
        "( a b c -- b c a )"
    );

    add_native_word!(
        interpreter,
        "-rot",
        |interp: &mut ForthInterpreter| {
            let c = interp.pop()?;
            let b = interp.pop()?;
            let a = interp.pop()?;
            interp.push(c);
            interp.push(a);
            interp.push(b);
            Ok(())
        },
        "Rotate the top down to third place.",
        "( a b c -- c a b )"
    );

    add_native_word!(
        interpreter,
        "2swap",
        |interp: &mut ForthInterpreter| {
            // Each roll shrinks the stack by one, so the cell has to go back on before the
            // next roll reaches to the same depth.
            let a = interp.roll(3)?;
            interp.push(a);
            let b = interp.roll(3)?;
            interp.push(b);
            Ok(())
        },
        "Exchange the top two pairs.",
        "( a b c d -- c d a b )"
    );

    add_native_word!(
        interpreter,
        "pick",
        |interp: &mut ForthInterpreter| {
            let depth = interp.pop_index()?;
            let value = interp.pick(depth)?;
            interp.push(value);
            Ok(())
        },
        "Copy the n-th item to the top, 0 being the top itself.",
        "( ... n -- ... a )"
    );

    add_native_word!(
        interpreter,
        "roll",
        |interp: &mut ForthInterpreter| {
            let depth = interp.pop_index()?;
            let value = interp.roll(depth)?;
            interp.push(value);
            Ok(())
        },
        "Move the n-th item to the top.",
        "( ... n -- ... a )"
    );

    add_native_word!(
        interpreter,
        "drop",
        |interp: &mut ForthInterpreter| {
            let _ = interp.pop()?;
            Ok(())
        },
        "Discard the top of the stack.",
        "( a -- )"
    );

    add_native_word!(
        interpreter,
        "nip",
        |interp: &mut ForthInterpreter| {
            let b = interp.pop()?;
            let _ = interp.pop()?;
            interp.push(b);
            Ok(())
        },
        "Discard the second item.",
        "( a b -- b )"
    );

    add_native_word!(
        interpreter,
        "2drop",
        |interp: &mut ForthInterpreter| {
            let _ = interp.pop()?;
            let _ = interp.pop()?;
            Ok(())
        },
        "Discard the top two items.",
        "( a b -- )"
    );

    add_native_word!(
        interpreter,
        ">r",
        |interp: &mut ForthInterpreter| {
            let value = interp.pop_number()?;
            interp.rpush(value)
        },
        "Move the top of the data stack to the return stack.",
        "( n -- )"
    );

    add_native_word!(
        interpreter,
        "r>",
        |interp: &mut ForthInterpreter| {
            let value = interp.rpop()?;
            interp.push(Cell::Number(value));
            Ok(())
        },
        "Move the top of the return stack to the data stack.",
        "( -- n )"
    );

    add_native_word!(
        interpreter,
        "r@",
        |interp: &mut ForthInterpreter| {
            let value = interp.rpeek()?;
            interp.push(Cell::Number(value));
            Ok(())
        },
        "Copy the top of the return stack.",
        "( -- n )"
    );

    // Historical aliases for >r and r>.
    add_native_word!(
        interpreter,
        "push",
        |interp: &mut ForthInterpreter| {
            let value = interp.pop_number()?;
            interp.rpush(value)
        },
        "Move the top of the data stack to the return stack.",
        "( n -- )"
    );

    add_native_word!(
        interpreter,
        "pop",
        |interp: &mut ForthInterpreter| {
            let value = interp.rpop()?;
            interp.push(Cell::Number(value));
            Ok(())
        },
        "Move the top of the return stack to the data stack.",
        "( -- n )"
    );
}
