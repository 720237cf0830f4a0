use std::{
    fmt::{self, Debug, Display, Formatter},
    rc::Rc,
};

use crate::runtime::{
    data_structures::value::Cell,
    error::{self},
    interpreter::ForthInterpreter,
};

/// Definition of a native word's handler function.  This is the Rust code that runs when the word
/// is executed.  Can be a closure or a plain function.
pub type PrimitiveFn = dyn Fn(&mut ForthInterpreter) -> error::Result<()>;

/// One slot of threaded code inside a word's parameter field.
///
/// The parameter field is a flat instruction stream executed by the inner interpreter.  Data
/// words store their cells in `Lit` slots, so a variable's storage and a colon definition's code
/// share one representation and the reflection words (`see`, `array@`, `is`, ...) can treat every
/// word uniformly.
#[derive(Clone, Debug, PartialEq)]
pub enum Instr {
    /// Execute the word at this dictionary index.
    Call(usize),

    /// Push the cell onto the data stack.  Doubles as the storage slot for variables, constants
    /// and comma-compiled data.
    Lit(Cell),

    /// Unconditional jump to the given parameter field offset.
    Branch(usize),

    /// Pop a cell; jump to the offset when it is falsy, fall through otherwise.
    ZeroBranch(usize),

    /// Decrement the loop counter on top of the return stack; jump back while it is still zero
    /// or more, drop it and fall through otherwise.
    DecNext(usize),

    /// Write the text to the output sink, compiled by `."`.
    Print(String),
}

impl Instr {
    /// Patch the jump target of a branch style instruction.  Reports whether the slot really was
    /// a branch; the structure words treat a refusal as a mismatch.
    pub fn set_branch_target(&mut self, target: usize) -> bool {
        match self {
            Instr::Branch(slot) | Instr::ZeroBranch(slot) | Instr::DecNext(slot) => {
                *slot = target;
                true
            }

            _ => false,
        }
    }
}

/// Decompiled, mnemonic form of an instruction as shown by `see`.  Branch targets and literal
/// operands print as-is rather than being looked up as dictionary indices.
impl Display for Instr {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Instr::Call(index) => write!(f, "call {}", index),
            Instr::Lit(cell) => write!(f, "{}", cell),
            Instr::Branch(target) => write!(f, "branch {}", target),
            Instr::ZeroBranch(target) => write!(f, "0branch {}", target),
            Instr::DecNext(target) => write!(f, "donext {}", target),
            Instr::Print(text) => write!(f, ".\" {}\"", text),
        }
    }
}

/// How a word behaves when executed.
#[derive(Clone)]
pub enum WordAction {
    /// A host level operation written in Rust.
    Primitive(Rc<PrimitiveFn>),

    /// Run the inner interpreter over this word's parameter field.  Colon definitions.
    Nest,

    /// Push parameter field slot 0.  Words made by `constant`.
    Constant,

    /// Push the word's own dictionary index, so that `@`, `!` and the array words can address its
    /// parameter field.  Words made by `create`.
    Variable,

    /// Same execution as Nest, but the parameter field was retrofitted by `does>`.  Kept distinct
    /// so the tooling words can show how the word came to be.
    DoesCustom,
}

impl Debug for WordAction {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let name = match self {
            WordAction::Primitive(_) => "primitive",
            WordAction::Nest => "nest",
            WordAction::Constant => "constant",
            WordAction::Variable => "variable",
            WordAction::DoesCustom => "does",
        };

        write!(f, "{}", name)
    }
}

/// One named definition in the dictionary.
#[derive(Clone)]
pub struct Word {
    /// The name the outer interpreter looks the word up by.
    pub name: String,

    /// What happens when the word executes.
    pub action: WordAction,

    /// The word's threaded code and/or data slots.
    pub pf: Vec<Instr>,

    /// Immediate words execute at compile time even while a definition is open.
    pub immediate: bool,

    /// A simple description of the word for the tooling words.
    pub description: String,

    /// The stack signature of the word.
    pub signature: String,
}

impl Word {
    /// Create a native word backed by a Rust handler.
    pub fn primitive(
        name: &str,
        handler: Rc<PrimitiveFn>,
        description: &str,
        signature: &str,
        immediate: bool,
    ) -> Word {
        Word {
            name: name.to_string(),
            action: WordAction::Primitive(handler),
            pf: Vec::new(),
            immediate,
            description: description.to_string(),
            signature: signature.to_string(),
        }
    }

    /// Create an empty colon definition, ready to have code compiled into it.
    pub fn nest(name: &str) -> Word {
        Word {
            name: name.to_string(),
            action: WordAction::Nest,
            pf: Vec::new(),
            immediate: false,
            description: String::new(),
            signature: String::new(),
        }
    }

    /// Create a `create`d word.  It pushes its own index until `does>` gives it behaviour.
    pub fn variable(name: &str) -> Word {
        Word {
            name: name.to_string(),
            action: WordAction::Variable,
            pf: Vec::new(),
            immediate: false,
            description: String::new(),
            signature: String::new(),
        }
    }

    /// Create a `constant` word holding the given cell in slot 0.
    pub fn constant(name: &str, value: Cell) -> Word {
        Word {
            name: name.to_string(),
            action: WordAction::Constant,
            pf: vec![Instr::Lit(value)],
            immediate: false,
            description: String::new(),
            signature: String::new(),
        }
    }

    /// Read a data slot of the parameter field as a cell.  Code slots have no cell reading and
    /// report a fault, as does an out of range index.
    pub fn data_slot(&self, index: usize) -> error::Result<Cell> {
        match self.pf.get(index) {
            Some(Instr::Lit(cell)) => Ok(cell.clone()),
            Some(_) => error::host_fault(format!("slot {} of {} is not data", index, self.name)),
            None => error::host_fault(format!("slot {} of {} out of range", index, self.name)),
        }
    }

    /// Overwrite a data slot of the parameter field.  Writing to slot 0 of an empty field
    /// creates it, which is how a bare `create`d word becomes a one cell variable.
    pub fn set_data_slot(&mut self, index: usize, value: Cell) -> error::Result<()> {
        if index == self.pf.len() && index == 0 {
            self.pf.push(Instr::Lit(value));
            return Ok(());
        }

        match self.pf.get_mut(index) {
            Some(slot) => {
                *slot = Instr::Lit(value);
                Ok(())
            }

            None => error::host_fault(format!("slot {} of {} out of range", index, self.name)),
        }
    }
}

/// Raw listing of a word as shown by `dump`.
impl Debug for Word {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{{ name: {:?}, action: {:?}", self.name, self.action)?;

        if !self.pf.is_empty() {
            let slots: Vec<String> = self.pf.iter().map(|slot| slot.to_string()).collect();
            write!(f, ", pf: [{}]", slots.join(", "))?;
        }

        if self.immediate {
            write!(f, ", immediate")?;
        }

        write!(f, " }}")
    }
}

/// The word dictionary used by the interpreter.
///
/// An append only, index addressed sequence of words.  Lookup scans from the newest entry down,
/// so redefining a name shadows the old entry rather than replacing it; code compiled against the
/// old entry keeps the index it captured at compile time.  The `fence` marks the end of the
/// seeded primitives, and nothing below it can ever be removed.
#[derive(Default)]
pub struct Dictionary {
    words: Vec<Word>,
    fence: usize,
}

impl Dictionary {
    /// Create a new empty dictionary.  The caller is expected to seed it with the primitive words
    /// and then record the fence.
    pub fn new() -> Dictionary {
        Dictionary {
            words: Vec::new(),
            fence: 0,
        }
    }

    /// Append a new word.  It immediately becomes the newest definition of its name.
    pub fn add(&mut self, word: Word) {
        self.words.push(word);
    }

    /// Find the newest entry with the given name.
    pub fn find(&self, name: &str) -> Option<usize> {
        for index in (0..self.words.len()).rev() {
            if self.words[index].name == name {
                return Some(index);
            }
        }

        None
    }

    /// Borrow the word at the given index.  Out of range indices are a host fault, not a panic.
    pub fn get(&self, index: usize) -> error::Result<&Word> {
        match self.words.get(index) {
            Some(word) => Ok(word),
            None => error::host_fault(format!("dictionary index {} out of range", index)),
        }
    }

    /// Mutably borrow the word at the given index.
    pub fn get_mut(&mut self, index: usize) -> error::Result<&mut Word> {
        match self.words.get_mut(index) {
            Some(word) => Ok(word),
            None => error::host_fault(format!("dictionary index {} out of range", index)),
        }
    }

    /// The entry currently under construction, i.e. the newest one.
    pub fn latest_mut(&mut self) -> error::Result<&mut Word> {
        match self.words.last_mut() {
            Some(word) => Ok(word),
            None => error::host_fault_str("dictionary is empty"),
        }
    }

    /// Drop the newest entry.  Used to discard a definition that failed mid-compile.  The seeded
    /// primitives are never dropped.
    pub fn discard_latest(&mut self) {
        if self.words.len() > self.fence {
            let _ = self.words.pop();
        }
    }

    /// Remove the entry at `index` and everything defined after it.  Callers are responsible for
    /// checking the fence first; the truncation itself never reaches below it.
    pub fn truncate_to(&mut self, index: usize) {
        let target = index.max(self.fence);
        self.words.truncate(target);
    }

    /// Record the current length as the protected fence.  Called once the primitive seeding is
    /// complete.
    pub fn seal(&mut self) {
        self.fence = self.words.len();
    }

    /// The protected boundary below which entries are never removed.
    pub fn fence(&self) -> usize {
        self.fence
    }

    /// The number of entries currently defined.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when no words have been defined at all.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate the entries from oldest to newest.
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}
