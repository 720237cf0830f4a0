use log::debug;

use crate::add_native_word;
use crate::runtime::data_structures::dictionary::Instr;
use crate::runtime::error;
use crate::runtime::interpreter::ForthInterpreter;

/// Register the introspection and maintenance words.
pub fn register_tool_words(interpreter: &mut ForthInterpreter) {
    add_native_word!(
        interpreter,
        "words",
        |interp: &mut ForthInterpreter| {
            let mut listing = String::new();

            for word in interp.dictionary().iter().rev() {
                listing.push_str(&word.name);
                listing.push(' ');
            }

            interp.write_text(&listing);
            Ok(())
        },
        "List every word name, newest first.",
        "( -- )"
    );

    add_native_word!(
        interpreter,
        "see",
        |interp: &mut ForthInterpreter| {
            let index = interp.tick()?;
            let word = interp.dictionary().get(index)?;

            let mut listing = String::new();

            for instr in word.pf.iter() {
                let text = match instr {
                    // A call prints as the callee's name.  A dangling reference left behind by
                    // forget prints as the raw index rather than failing the whole listing.
                    Instr::Call(callee) => match interp.dictionary().get(*callee) {
                        Ok(callee) => callee.name.clone(),
                        Err(_) => instr.to_string(),
                    },

                    _ => instr.to_string(),
                };

                listing.push_str(&text);
                listing.push(' ');
            }

            interp.write_text(&listing);
            Ok(())
        },
        "Decompile the next word's parameter field.",
        "( -- )"
    );

    add_native_word!(
        interpreter,
        "dump",
        |interp: &mut ForthInterpreter| {
            let mut listing = String::from("words[\n");

            for (index, word) in interp.dictionary().iter().enumerate() {
                listing.push_str(&format!("{}: {:?},\n", index, word));
            }

            listing.push_str("]\n");
            interp.write_text(&listing);
            Ok(())
        },
        "Raw listing of the whole dictionary.",
        "( -- )"
    );

    add_native_word!(
        interpreter,
        "forget",
        |interp: &mut ForthInterpreter| {
            let index = interp.tick()?;
            let token = interp.last_token().clone();

            if index < interp.dictionary().fence() {
                return error::protected_fence(&token);
            }

            debug!("forgetting {} and {} later words", token, interp.dictionary().len() - index - 1);

            interp.dictionary_mut().truncate_to(index);
            Ok(())
        },
        "Remove the next word and everything defined after it.",
        "( -- )"
    );

    add_native_word!(
        interpreter,
        "boot",
        |interp: &mut ForthInterpreter| {
            let fence = interp.dictionary().fence();

            debug!("boot: truncating dictionary to fence at {}", fence);

            interp.dictionary_mut().truncate_to(fence);
            Ok(())
        },
        "Remove every user defined word.",
        "( -- )"
    );

    add_native_word!(
        interpreter,
        "date",
        |interp: &mut ForthInterpreter| {
            let now = chrono::Local::now();
            let text = format!("{}\n", now.format("%a %b %e %Y %H:%M:%S"));
            interp.write_text(&text);
            Ok(())
        },
        "Print the current date and time.",
        "( -- )"
    );
}
