use crate::runtime::data_structures::value::Cell;
use crate::runtime::error;
use crate::add_native_word;
use crate::runtime::interpreter::ForthInterpreter;

/// Register the storage and vectoring words.  All of them address words through dictionary
/// indices popped from the data stack; an index with no entry behind it is a host fault.
pub fn register_memory_words(interpreter: &mut ForthInterpreter) {
    add_native_word!(
        interpreter,
        "@",
        |interp: &mut ForthInterpreter| {
            let index = interp.pop_index()?;
            let value = interp.dictionary().get(index)?.data_slot(0)?;
            interp.push(value);
            Ok(())
        },
        "Fetch slot 0 of the addressed word.",
        "( index -- a )"
    );

    add_native_word!(
        interpreter,
        "!",
        |interp: &mut ForthInterpreter| {
            let index = interp.pop_index()?;
            let value = interp.pop()?;
            interp.dictionary_mut().get_mut(index)?.set_data_slot(0, value)
        },
        "Store into slot 0 of the addressed word.",
        "( a index -- )"
    );

    add_native_word!(
        interpreter,
        "+!",
        |interp: &mut ForthInterpreter| {
            let index = interp.pop_index()?;
            let amount = interp.pop_number()?;

            let current = match interp.dictionary().get(index)?.data_slot(0)?.as_number() {
                Some(number) => number,
                None => return error::host_fault_str("+! target is not a number"),
            };

            interp
                .dictionary_mut()
                .get_mut(index)?
                .set_data_slot(0, Cell::Number(current + amount))
        },
        "Add to slot 0 of the addressed word.",
        "( n index -- )"
    );

    add_native_word!(
        interpreter,
        "?",
        |interp: &mut ForthInterpreter| {
            let index = interp.pop_index()?;
            let value = interp.dictionary().get(index)?.data_slot(0)?;
            let text = format!("{} ", value.to_text_in_base(interp.base()));
            interp.write_text(&text);
            Ok(())
        },
        "Print slot 0 of the addressed word.",
        "( index -- )"
    );

    add_native_word!(
        interpreter,
        "array@",
        |interp: &mut ForthInterpreter| {
            let slot = interp.pop_index()?;
            let index = interp.pop_index()?;
            let value = interp.dictionary().get(index)?.data_slot(slot)?;
            interp.push(value);
            Ok(())
        },
        "Fetch an indexed slot of the addressed word.",
        "( index slot -- a )"
    );

    add_native_word!(
        interpreter,
        "array!",
        |interp: &mut ForthInterpreter| {
            let slot = interp.pop_index()?;
            let index = interp.pop_index()?;
            let value = interp.pop()?;
            interp.dictionary_mut().get_mut(index)?.set_data_slot(slot, value)
        },
        "Store into an indexed slot of the addressed word.",
        "( a index slot -- )"
    );

    // Reads the word currently nesting, designed for does> bodies.
    add_native_word!(
        interpreter,
        "q@",
        |interp: &mut ForthInterpreter| {
            let slot = interp.pop_index()?;
            let nesting = interp.wp();
            let value = interp.dictionary().get(nesting)?.data_slot(slot)?;
            interp.push(value);
            Ok(())
        },
        "Fetch a slot of the currently executing word.",
        "( slot -- a )"
    );

    add_native_word!(
        interpreter,
        "here",
        |interp: &mut ForthInterpreter| {
            let length = interp.dictionary().len();
            interp.push(Cell::from(length));
            Ok(())
        },
        "Push the current dictionary length.",
        "( -- n )"
    );

    add_native_word!(
        interpreter,
        "is",
        |interp: &mut ForthInterpreter| {
            let target = interp.tick()?;
            let source = interp.pop_index()?;

            let code = interp.dictionary().get(source)?.pf.clone();
            interp.dictionary_mut().get_mut(target)?.pf = code;
            Ok(())
        },
        "Vector the next word to a snapshot of the addressed one's code.",
        "( index -- )"
    );

    add_native_word!(
        interpreter,
        "to",
        |interp: &mut ForthInterpreter| {
            let target = interp.read_inline_index()?;
            let value = interp.pop()?;
            interp.dictionary_mut().get_mut(target)?.set_data_slot(0, value)
        },
        "Store into slot 0 of the word compiled directly after to.",
        "( a -- )"
    );
}
