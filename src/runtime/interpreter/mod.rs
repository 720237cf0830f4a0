use std::{cell::RefCell, io::Write, rc::Rc};

pub mod forth_interpreter;

pub use forth_interpreter::ForthInterpreter;

/// The single output capability of the runtime.
///
/// Every word that produces user visible text (`.`, `emit`, `words`, the ok prompt, ...) goes
/// through this trait.  The host decides what the text means: a terminal, a DOM node, a log.
/// The runtime never reads anything back.
pub trait OutputSink {
    /// Write a piece of text to wherever the host renders output.
    fn write_text(&mut self, text: &str);
}

/// Sink that writes directly to standard out.  Used by the REPL binary.
#[derive(Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write_text(&mut self, text: &str) {
        print!("{}", text);
        let _ = std::io::stdout().flush();
    }
}

/// Sink that collects everything written into a shared string buffer.  Used by the tests and by
/// hosts that want to render the output themselves after the line completes.
pub struct BufferSink {
    buffer: Rc<RefCell<String>>,
}

impl BufferSink {
    /// Create a new sink along with the shared handle the host keeps to read the output back.
    pub fn new() -> (BufferSink, Rc<RefCell<String>>) {
        let buffer = Rc::new(RefCell::new(String::new()));
        let sink = BufferSink {
            buffer: buffer.clone(),
        };

        (sink, buffer)
    }
}

impl OutputSink for BufferSink {
    fn write_text(&mut self, text: &str) {
        self.buffer.borrow_mut().push_str(text);
    }
}

/// One pending item on the compile time control stack.
///
/// The structure words bookkeep their branch patching here instead of on the run time data
/// stack, so user code manipulating the data stack mid-definition can not corrupt a loop, and an
/// unbalanced structure is caught as a typed mismatch instead of silently patching the wrong
/// slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlFrame {
    /// A forward branch waiting to be patched, recorded as the parameter field slot holding the
    /// branch.  Pushed by `if`, `else`, `while` and `aft`, resolved by `then`, `else` and
    /// `repeat`.
    Orig(usize),

    /// A backward jump target, recorded as a parameter field offset.  Pushed by `begin`, `for`
    /// and `aft`, consumed by `again`, `until`, `repeat` and `next`.
    Dest(usize),
}

/// Simplify registering a native word with the interpreter.
///
/// Required parameters are, the interpreter instance to register with.  The name of the word to
/// register.  The word function handler to execute for the word.  A simple description of the
/// word.  As well as the word's stack signature.
#[macro_export]
macro_rules! add_native_word {
    (
        $interpreter:expr ,
        $name:expr ,
        $function:expr ,
        $description:expr ,
        $signature:expr
    ) => {{
        use std::rc::Rc;

        $interpreter.add_word(
            $name,                // Name.
            Rc::new($function),   // Function handler.
            $description,         // Word description.
            $signature,           // Word signature.
            false,                // The word runs at run time.
        );
    }};
}

/// Simplify registering a native immediate word with the interpreter.  That is, this word is
/// intended to be executed at compile time.
///
/// Required parameters are, the interpreter instance to register with.  The name of the word to
/// register.  The word function handler to execute for the word.  A simple description of the
/// word.  As well as the word's stack signature.
#[macro_export]
macro_rules! add_native_immediate_word {
    (
        $interpreter:expr ,
        $name:expr ,
        $function:expr ,
        $description:expr ,
        $signature:expr
    ) => {{
        use std::rc::Rc;

        $interpreter.add_word(
            $name,                // Name.
            Rc::new($function),   // Function handler.
            $description,         // Word description.
            $signature,           // Word signature.
            true,                 // The word runs at compile time.
        );
    }};
}
