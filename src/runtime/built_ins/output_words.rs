use crate::add_native_word;
use crate::runtime::error;
use crate::runtime::data_structures::value::Cell;
use crate::runtime::interpreter::ForthInterpreter;

pub fn register_output_words(interpreter: &mut ForthInterpreter) {
    add_native_word!(
        interpreter,
        ".",
        |interp: &mut ForthInterpreter| {
            let value = interp.pop()?;
            let text = format!("{} ", value.to_text_in_base(interp.base()));
            interp.write_text(&text);
            Ok(())
        },
        "Pop and print the top of the stack in the current base.",
        "( a -- )"
    );

    add_native_word!(
        interpreter,
        ".r",
        |interp: &mut ForthInterpreter| {
            let width = interp.pop_index()?;
            let value = interp.pop()?;
            let text = format!("{:>width$}", value.to_string(), width = width);
            interp.write_text(&text);
            Ok(())
        },
        "Print the second item right-justified in a field of the given width.",
        "( a width -- )"
    );

    add_native_word!(
        interpreter,
        "cr",
        |interp: &mut ForthInterpreter| {
            interp.write_text("\n");
            Ok(())
        },
        "Write a line break.",
        "( -- )"
    );

    add_native_word!(
        interpreter,
        "emit",
        |interp: &mut ForthInterpreter| {
            let code = interp.pop_number()?;

            match char::from_u32(code as u32) {
                Some(character) => {
                    interp.write_text(&character.to_string());
                    Ok(())
                }

                None => error::host_fault(format!("{} is not a character code", code)),
            }
        },
        "Write the character with the given code.",
        "( code -- )"
    );

    add_native_word!(
        interpreter,
        "space",
        |interp: &mut ForthInterpreter| {
            interp.write_text(" ");
            Ok(())
        },
        "Write a single space.",
        "( -- )"
    );

    add_native_word!(
        interpreter,
        "spaces",
        |interp: &mut ForthInterpreter| {
            let count = interp.pop_index()?;
            interp.write_text(&" ".repeat(count));
            Ok(())
        },
        "Write the given number of spaces.",
        "( n -- )"
    );

    add_native_word!(
        interpreter,
        "base@",
        |interp: &mut ForthInterpreter| {
            let base = interp.base();
            interp.push(Cell::from(base as i64));
            Ok(())
        },
        "Push the current numeric base.",
        "( -- base )"
    );

    add_native_word!(
        interpreter,
        "base!",
        |interp: &mut ForthInterpreter| {
            let base = interp.pop_number()?;

            if !(2.0..=36.0).contains(&base) {
                return error::host_fault(format!("invalid base {}", base));
            }

            interp.set_base(base as u32)
        },
        "Set the numeric base.",
        "( base -- )"
    );

    add_native_word!(
        interpreter,
        "hex",
        |interp: &mut ForthInterpreter| { interp.set_base(16) },
        "Switch to base 16.",
        "( -- )"
    );

    add_native_word!(
        interpreter,
        "decimal",
        |interp: &mut ForthInterpreter| { interp.set_base(10) },
        "Switch to base 10.",
        "( -- )"
    );
}
