use crate::runtime::data_structures::dictionary::Instr;
use crate::runtime::interpreter::{ControlFrame, ForthInterpreter};
use crate::{add_native_immediate_word, add_native_word};

/// Register the structure words.
///
/// All of them are immediate and compile only.  They emit branch instructions with placeholder
/// targets into the definition under construction and bookkeep the pending patches on the typed
/// compile time control stack, so an unbalanced structure fails fast instead of silently
/// patching the wrong slot.  Branch targets are always parameter field offsets taken at emission
/// time.
pub fn register_control_words(interpreter: &mut ForthInterpreter) {
    add_native_word!(
        interpreter,
        "exit",
        |interp: &mut ForthInterpreter| {
            interp.signal_exit();
            Ok(())
        },
        "Return from the current definition.",
        "( -- )"
    );

    add_native_immediate_word!(
        interpreter,
        "if",
        |interp: &mut ForthInterpreter| {
            interp.require_compiling("if")?;
            interp.compile(Instr::ZeroBranch(0))?;
            let slot = interp.compile_offset()? - 1;
            interp.push_control(ControlFrame::Orig(slot));
            Ok(())
        },
        "Begin a conditional; the false branch target is patched later.",
        "( -- )"
    );

    add_native_immediate_word!(
        interpreter,
        "else",
        |interp: &mut ForthInterpreter| {
            interp.require_compiling("else")?;
            let pending = interp.pop_orig("else")?;

            interp.compile(Instr::Branch(0))?;
            let slot = interp.compile_offset()? - 1;

            let here = interp.compile_offset()?;
            interp.patch_branch(pending, here)?;

            interp.push_control(ControlFrame::Orig(slot));
            Ok(())
        },
        "Begin the false branch of a conditional.",
        "( -- )"
    );

    add_native_immediate_word!(
        interpreter,
        "then",
        |interp: &mut ForthInterpreter| {
            interp.require_compiling("then")?;
            let pending = interp.pop_orig("then")?;
            let here = interp.compile_offset()?;
            interp.patch_branch(pending, here)
        },
        "Close a conditional, patching the pending branch to here.",
        "( -- )"
    );

    add_native_immediate_word!(
        interpreter,
        "begin",
        |interp: &mut ForthInterpreter| {
            interp.require_compiling("begin")?;
            let here = interp.compile_offset()?;
            interp.push_control(ControlFrame::Dest(here));
            Ok(())
        },
        "Mark the start of a loop.",
        "( -- )"
    );

    add_native_immediate_word!(
        interpreter,
        "again",
        |interp: &mut ForthInterpreter| {
            interp.require_compiling("again")?;
            let target = interp.pop_dest("again")?;
            interp.compile(Instr::Branch(target))
        },
        "Close an endless loop back to its begin.",
        "( -- )"
    );

    add_native_immediate_word!(
        interpreter,
        "until",
        |interp: &mut ForthInterpreter| {
            interp.require_compiling("until")?;
            let target = interp.pop_dest("until")?;
            interp.compile(Instr::ZeroBranch(target))
        },
        "Close a loop that repeats until the popped flag is true.",
        "( flag -- )"
    );

    add_native_immediate_word!(
        interpreter,
        "while",
        |interp: &mut ForthInterpreter| {
            interp.require_compiling("while")?;
            interp.compile(Instr::ZeroBranch(0))?;
            let slot = interp.compile_offset()? - 1;
            interp.push_control(ControlFrame::Orig(slot));
            Ok(())
        },
        "Exit the surrounding begin loop when the popped flag is false.",
        "( flag -- )"
    );

    add_native_immediate_word!(
        interpreter,
        "repeat",
        |interp: &mut ForthInterpreter| {
            interp.require_compiling("repeat")?;
            let pending = interp.pop_orig("repeat")?;
            let target = interp.pop_dest("repeat")?;

            interp.compile(Instr::Branch(target))?;

            let here = interp.compile_offset()?;
            interp.patch_branch(pending, here)
        },
        "Close a begin/while loop.",
        "( -- )"
    );

    add_native_immediate_word!(
        interpreter,
        "for",
        |interp: &mut ForthInterpreter| {
            interp.require_compiling("for")?;
            interp.compile_call(">r")?;
            let here = interp.compile_offset()?;
            interp.push_control(ControlFrame::Dest(here));
            Ok(())
        },
        "Begin a counted loop; the count moves to the return stack.",
        "( count -- )"
    );

    add_native_immediate_word!(
        interpreter,
        "next",
        |interp: &mut ForthInterpreter| {
            interp.require_compiling("next")?;
            let target = interp.pop_dest("next")?;
            interp.compile(Instr::DecNext(target))
        },
        "Close a counted loop.",
        "( -- )"
    );

    add_native_immediate_word!(
        interpreter,
        "aft",
        |interp: &mut ForthInterpreter| {
            interp.require_compiling("aft")?;

            // The loop start recorded by `for` is replaced with one that skips the code between
            // `for` and `aft` on every pass but the first.
            let _ = interp.pop_dest("aft")?;

            interp.compile(Instr::Branch(0))?;
            let slot = interp.compile_offset()? - 1;

            let here = interp.compile_offset()?;
            interp.push_control(ControlFrame::Dest(here));
            interp.push_control(ControlFrame::Orig(slot));
            Ok(())
        },
        "Run the code before aft only on the first pass of a for loop.",
        "( -- )"
    );
}
