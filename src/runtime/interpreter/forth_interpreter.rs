use std::rc::Rc;

use log::{debug, trace};

use crate::{
    lang::source_buffer::SourceBuffer,
    runtime::{
        built_ins,
        data_structures::{
            dictionary::{Dictionary, Instr, PrimitiveFn, Word, WordAction},
            value::Cell,
        },
        error::{self, ErrorKind, ForthError},
        interpreter::{ControlFrame, OutputSink, StdoutSink},
    },
};

/// Bound on the return stack depth.  Runaway recursion and unbounded loops that push loop
/// counters hit this limit and fail the current line instead of exhausting the host stack.
pub const RETURN_STACK_LIMIT: usize = 1024;

/// The complete state of one interpreter session.
///
/// Everything the virtual machine knows lives in this one struct, so hosting several independent
/// sessions is simply a matter of owning several values.  The dictionary, the data stack, the
/// numeric base and the fence persist across input lines; the call frame state (`rstack`, `wp`,
/// `ip`, `w`, `compiling` and the compile time control stack) is reset at the start of every
/// line, so a crashed nested call can never leak stale frames into the next line.
pub struct ForthInterpreter {
    /// The word dictionary.
    dictionary: Dictionary,

    /// The data stack.
    stack: Vec<Cell>,

    /// The return stack.  Holds both `(wp, ip)` call frame pairs and `for`/`next` loop
    /// counters, interleaved by the usual push/pop discipline.
    rstack: Vec<f64>,

    /// Index into the executing word's parameter field.  -1 is the return sentinel.
    ip: isize,

    /// Dictionary index of the word currently being run by the inner interpreter.
    wp: usize,

    /// Dictionary index of the word currently being dispatched.
    w: usize,

    /// True while a colon definition is open.
    compiling: bool,

    /// The numeric radix used for parsing and printing numbers.
    base: u32,

    /// The line of text being parsed.
    input: SourceBuffer,

    /// The most recently parsed token.
    last_token: String,

    /// Pending branch patches for the structure words, local to the definition being compiled.
    control_stack: Vec<ControlFrame>,

    /// Where all user visible text goes.
    output: Box<dyn OutputSink>,
}

impl Default for ForthInterpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl ForthInterpreter {
    /// Create a new session writing to standard out, with the dictionary seeded with the full
    /// primitive word set and the fence recorded.
    pub fn new() -> ForthInterpreter {
        ForthInterpreter::with_sink(Box::new(StdoutSink))
    }

    /// Create a new seeded session writing to the given sink.
    pub fn with_sink(output: Box<dyn OutputSink>) -> ForthInterpreter {
        let mut interpreter = ForthInterpreter {
            dictionary: Dictionary::new(),
            stack: Vec::new(),
            rstack: Vec::new(),
            ip: 0,
            wp: 0,
            w: 0,
            compiling: false,
            base: 10,
            input: SourceBuffer::new(),
            last_token: String::new(),
            control_stack: Vec::new(),
            output,
        };

        built_ins::register_built_in_words(&mut interpreter);
        interpreter.dictionary.seal();

        debug!(
            "seeded dictionary with {} words, fence at {}",
            interpreter.dictionary.len(),
            interpreter.dictionary.fence()
        );

        interpreter
    }

    // ------------------------------------------------------------------------------------------
    // External interface.
    // ------------------------------------------------------------------------------------------

    /// Process one line of source text.
    ///
    /// The transient call frame state is reset, then tokens are parsed and evaluated until the
    /// line is exhausted, which writes the ` < .. >ok` prompt with a snapshot of the data stack
    /// and returns Ok.  On any other condition the recovery for that error kind runs, the report
    /// is written to the sink, and the error is returned for the host to pattern match on.
    pub fn process_line(&mut self, text: &str) -> error::Result<()> {
        trace!("processing line: {:?}", text);

        self.rstack.clear();
        self.control_stack.clear();
        self.ip = 0;
        self.wp = 0;
        self.w = 0;
        self.compiling = false;
        self.input.reset(text);

        loop {
            let token = match self.parse_token(None) {
                Ok(token) => token,
                Err(err) => return self.recover(err),
            };

            if let Err(err) = self.evaluate(&token) {
                return self.recover(err);
            }
        }
    }

    /// Write a piece of text to the output sink.
    pub fn write_text(&mut self, text: &str) {
        self.output.write_text(text);
    }

    // ------------------------------------------------------------------------------------------
    // Parser.
    // ------------------------------------------------------------------------------------------

    /// Extract the next token from the input line, remembering it as the last token parsed.
    /// An empty token is the end of input condition.
    pub fn parse_token(&mut self, delimiter: Option<char>) -> error::Result<String> {
        match self.input.parse_token(delimiter) {
            Some(token) => {
                self.last_token = token.clone();
                Ok(token)
            }

            None => error::end_of_input(),
        }
    }

    /// Try to read a token as a number in the current base.  Base 10 accepts general numeric
    /// text including floats; any other base is strict integer parsing in that radix.
    pub fn parse_number(&self, token: &str) -> Option<f64> {
        if self.base == 10 {
            token.parse::<f64>().ok()
        } else {
            i64::from_str_radix(token, self.base).ok().map(|v| v as f64)
        }
    }

    /// Parse the next token and look it up, failing with UndefinedWord when it is unknown.
    /// The classic `'` operation, also used by `forget`, `see` and `is`.
    pub fn tick(&mut self) -> error::Result<usize> {
        let token = self.parse_token(None)?;

        match self.dictionary.find(&token) {
            Some(index) => Ok(index),
            None => error::undefined_word(&token),
        }
    }

    // ------------------------------------------------------------------------------------------
    // Outer interpreter.
    // ------------------------------------------------------------------------------------------

    /// Decide what one token means: execute a word, compile a call to it, push or compile a
    /// literal, or fail with UndefinedWord.
    pub fn evaluate(&mut self, token: &str) -> error::Result<()> {
        trace!("evaluate {:?}, compiling = {}", token, self.compiling);

        if let Some(index) = self.dictionary.find(token) {
            if self.compiling && !self.dictionary.get(index)?.immediate {
                return self.compile(Instr::Call(index));
            }

            return self.execute(index);
        }

        if let Some(value) = self.parse_number(token) {
            if self.compiling {
                return self.compile(Instr::Lit(Cell::Number(value)));
            }

            self.push(Cell::Number(value));
            return Ok(());
        }

        error::undefined_word(token)
    }

    /// Run the per-kind recovery for an error raised while processing the current line, write
    /// the user report to the sink, and hand the error back to the host.  End of input is not an
    /// error; it produces the ok prompt and a successful result.
    fn recover(&mut self, err: ForthError) -> error::Result<()> {
        match err.kind() {
            ErrorKind::EndOfInput => {
                self.write_ok_prompt();
                Ok(())
            }

            ErrorKind::UndefinedWord | ErrorKind::ControlMismatch => {
                debug!("recovering from {:?}", err);

                // A definition in progress is defective, drop it.
                if self.compiling {
                    self.dictionary.discard_latest();
                    self.compiling = false;
                    self.control_stack.clear();
                }

                if err.kind() == ErrorKind::UndefinedWord {
                    self.stack.clear();
                }

                let report = err.message().clone();
                self.write_text(&report);
                Err(err)
            }

            ErrorKind::ProtectedFence => {
                debug!("recovering from {:?}", err);

                self.stack.clear();
                let report = err.message().clone();
                self.write_text(&report);
                Err(err)
            }

            // The dictionary and data stack stay untouched so the user can inspect the wreckage.
            ErrorKind::HostFault | ErrorKind::StackOverflow => {
                debug!("recovering from {:?}", err);

                let report = err.message().clone();
                self.write_text(&report);
                Err(err)
            }
        }
    }

    /// The standard acknowledgment written when a line completes: the data stack snapshot
    /// between angle brackets followed by `ok`.
    fn write_ok_prompt(&mut self) {
        let cells: Vec<String> = self.stack.iter().map(|cell| cell.to_string()).collect();
        let prompt = format!(" < {} >ok", cells.join(" "));

        self.write_text(&prompt);
    }

    // ------------------------------------------------------------------------------------------
    // Dispatch and the inner interpreter.
    // ------------------------------------------------------------------------------------------

    /// Execute the word at the given dictionary index, dispatching on its action.
    pub fn execute(&mut self, index: usize) -> error::Result<()> {
        self.w = index;

        let action = self.dictionary.get(index)?.action.clone();

        match action {
            WordAction::Primitive(handler) => handler(self),

            WordAction::Constant => {
                let value = self.dictionary.get(index)?.data_slot(0)?;
                self.push(value);
                Ok(())
            }

            WordAction::Variable => {
                self.push(Cell::from(index));
                Ok(())
            }

            WordAction::Nest | WordAction::DoesCustom => self.nest(index),
        }
    }

    /// The inner interpreter.  Pushes the caller's `(wp, ip)` frame, then walks the word's
    /// parameter field dispatching each instruction until something sets `ip` to the return
    /// sentinel (every colon definition ends with a compiled `exit`), and finally restores the
    /// caller's frame.
    fn nest(&mut self, index: usize) -> error::Result<()> {
        if self.rstack.len() + 2 > RETURN_STACK_LIMIT {
            return error::stack_overflow();
        }

        self.rstack.push(self.wp as f64);
        self.rstack.push(self.ip as f64);
        self.wp = index;
        self.ip = 0;

        while self.ip >= 0 {
            let offset = self.ip as usize;
            let instr = {
                let word = self.dictionary.get(self.wp)?;

                match word.pf.get(offset) {
                    Some(instr) => instr.clone(),
                    None => {
                        return error::host_fault(format!(
                            "instruction offset {} of {} out of range",
                            offset, word.name
                        ));
                    }
                }
            };

            self.ip += 1;

            match instr {
                Instr::Call(callee) => self.execute(callee)?,

                Instr::Lit(cell) => self.push(cell),

                Instr::Branch(target) => self.ip = target as isize,

                Instr::ZeroBranch(target) => {
                    if !self.pop()?.is_truthy() {
                        self.ip = target as isize;
                    }
                }

                Instr::DecNext(target) => {
                    let counter = self.rpop()? - 1.0;

                    if counter >= 0.0 {
                        self.ip = target as isize;
                        self.rstack.push(counter);
                    }
                }

                Instr::Print(text) => self.write_text(&text),
            }
        }

        self.ip = self.rpop()? as isize;
        self.wp = self.rpop()? as usize;

        Ok(())
    }

    /// Terminate the current parameter field walk.  The behaviour of the `exit` word.
    pub fn signal_exit(&mut self) {
        self.ip = -1;
    }

    /// Retrofit the most recently defined word: its parameter field becomes a copy of the
    /// remainder of the currently nesting word's code, its action is marked as customized, and
    /// the enclosing word stops executing.  The mechanism behind `does>`.
    pub fn retrofit_latest(&mut self) -> error::Result<()> {
        if self.ip < 0 {
            return error::host_fault_str("does> used outside a definition");
        }

        let start = self.ip as usize;
        let code: Vec<Instr> = {
            let enclosing = self.dictionary.get(self.wp)?;

            if start > enclosing.pf.len() {
                return error::host_fault_str("does> ran past the end of its definition");
            }

            enclosing.pf[start..].to_vec()
        };

        let latest = self.dictionary.latest_mut()?;
        latest.pf = code;
        latest.action = WordAction::DoesCustom;

        debug!("retrofitted {} with does> code", latest.name);

        self.signal_exit();
        Ok(())
    }

    /// Read the next slot of the nesting word's parameter field as a dictionary index and step
    /// over it.  Used by `to`, which addresses the word compiled directly after it.
    pub fn read_inline_index(&mut self) -> error::Result<usize> {
        if self.ip < 0 {
            return error::host_fault_str("no inline operand outside a definition");
        }

        let offset = self.ip as usize;
        let word = self.dictionary.get(self.wp)?;

        let index = match word.pf.get(offset) {
            Some(Instr::Call(index)) => *index,
            Some(Instr::Lit(cell)) => match cell.as_index() {
                Some(index) => index,
                None => return error::host_fault_str("inline operand is not an index"),
            },
            _ => return error::host_fault_str("inline operand is not an index"),
        };

        self.ip += 1;
        Ok(index)
    }

    // ------------------------------------------------------------------------------------------
    // Compiler support.
    // ------------------------------------------------------------------------------------------

    /// Append an instruction to the parameter field of the entry under construction.
    pub fn compile(&mut self, instr: Instr) -> error::Result<()> {
        self.dictionary.latest_mut()?.pf.push(instr);
        Ok(())
    }

    /// Compile a call to a word looked up by name.
    pub fn compile_call(&mut self, name: &str) -> error::Result<()> {
        match self.dictionary.find(name) {
            Some(index) => self.compile(Instr::Call(index)),
            None => error::undefined_word(name),
        }
    }

    /// The current length of the parameter field under construction.  Branch targets are always
    /// recorded as this offset at emission time.
    pub fn compile_offset(&mut self) -> error::Result<usize> {
        Ok(self.dictionary.latest_mut()?.pf.len())
    }

    /// Patch the branch instruction at `slot` of the entry under construction to jump to
    /// `target`.  Patching a slot that is not a branch is a structure mismatch.
    pub fn patch_branch(&mut self, slot: usize, target: usize) -> error::Result<()> {
        let word = self.dictionary.latest_mut()?;

        match word.pf.get_mut(slot) {
            Some(instr) => {
                if instr.set_branch_target(target) {
                    Ok(())
                } else {
                    error::control_mismatch("structure patch out of place")
                }
            }

            None => error::control_mismatch("structure patch out of place"),
        }
    }

    /// Fail unless a definition is open.  The structure words are compile only.
    pub fn require_compiling(&self, word: &str) -> error::Result<()> {
        if self.compiling {
            Ok(())
        } else {
            error::control_mismatch(&format!("{} outside a definition", word))
        }
    }

    /// Push a frame onto the compile time control stack.
    pub fn push_control(&mut self, frame: ControlFrame) {
        self.control_stack.push(frame);
    }

    /// Pop a pending forward branch slot, failing fast when the structure is unbalanced.
    pub fn pop_orig(&mut self, word: &str) -> error::Result<usize> {
        match self.control_stack.pop() {
            Some(ControlFrame::Orig(slot)) => Ok(slot),
            _ => error::control_mismatch(&format!("{} without matching structure", word)),
        }
    }

    /// Pop a pending backward jump target, failing fast when the structure is unbalanced.
    pub fn pop_dest(&mut self, word: &str) -> error::Result<usize> {
        match self.control_stack.pop() {
            Some(ControlFrame::Dest(offset)) => Ok(offset),
            _ => error::control_mismatch(&format!("{} without matching structure", word)),
        }
    }

    /// True when no structure is left open.  Checked by `;`.
    pub fn control_stack_empty(&self) -> bool {
        self.control_stack.is_empty()
    }

    // ------------------------------------------------------------------------------------------
    // Stacks.
    // ------------------------------------------------------------------------------------------

    /// Push a cell onto the data stack.
    pub fn push(&mut self, value: Cell) {
        self.stack.push(value);
    }

    /// Pop a cell from the data stack.  An empty stack is a host fault.
    pub fn pop(&mut self) -> error::Result<Cell> {
        match self.stack.pop() {
            Some(value) => Ok(value),
            None => error::host_fault_str("data stack underflow"),
        }
    }

    /// Pop the top cell with its numeric reading.
    pub fn pop_number(&mut self) -> error::Result<f64> {
        let value = self.pop()?;

        match value.as_number() {
            Some(number) => Ok(number),
            None => error::host_fault_str("expected a number"),
        }
    }

    /// Pop the top cell read as a dictionary index.
    pub fn pop_index(&mut self) -> error::Result<usize> {
        let value = self.pop()?;

        match value.as_index() {
            Some(index) => Ok(index),
            None => error::host_fault_str("expected a dictionary index"),
        }
    }

    /// Use to examine the full data stack when required.
    pub fn stack(&self) -> &Vec<Cell> {
        &self.stack
    }

    /// Copy the cell `depth` items down from the top of the stack.  A depth of 0 is the top
    /// itself.
    pub fn pick(&self, depth: usize) -> error::Result<Cell> {
        let len = self.stack.len();

        if depth >= len {
            return error::host_fault_str("data stack underflow");
        }

        Ok(self.stack[len - 1 - depth].clone())
    }

    /// Remove and return the cell `depth` items down from the top of the stack.
    pub fn roll(&mut self, depth: usize) -> error::Result<Cell> {
        let len = self.stack.len();

        if depth >= len {
            return error::host_fault_str("data stack underflow");
        }

        Ok(self.stack.remove(len - 1 - depth))
    }

    /// Push a number onto the return stack, respecting the depth bound.
    pub fn rpush(&mut self, value: f64) -> error::Result<()> {
        if self.rstack.len() >= RETURN_STACK_LIMIT {
            return error::stack_overflow();
        }

        self.rstack.push(value);
        Ok(())
    }

    /// Pop a number from the return stack.
    pub fn rpop(&mut self) -> error::Result<f64> {
        match self.rstack.pop() {
            Some(value) => Ok(value),
            None => error::host_fault_str("return stack underflow"),
        }
    }

    /// Copy the top of the return stack.
    pub fn rpeek(&self) -> error::Result<f64> {
        match self.rstack.last() {
            Some(value) => Ok(*value),
            None => error::host_fault_str("return stack underflow"),
        }
    }

    // ------------------------------------------------------------------------------------------
    // Dictionary and session state access.
    // ------------------------------------------------------------------------------------------

    /// Add a native word to the dictionary.  Usually called through the `add_native_word!` and
    /// `add_native_immediate_word!` macros.
    pub fn add_word(
        &mut self,
        name: &str,
        handler: Rc<PrimitiveFn>,
        description: &str,
        signature: &str,
        immediate: bool,
    ) {
        self.dictionary
            .add(Word::primitive(name, handler, description, signature, immediate));
    }

    /// The word dictionary.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Mutable access to the word dictionary, for the defining and maintenance words.
    pub fn dictionary_mut(&mut self) -> &mut Dictionary {
        &mut self.dictionary
    }

    /// The current numeric radix.
    pub fn base(&self) -> u32 {
        self.base
    }

    /// Change the numeric radix.  Anything outside 2..=36 is a host fault.
    pub fn set_base(&mut self, base: u32) -> error::Result<()> {
        if !(2..=36).contains(&base) {
            return error::host_fault(format!("invalid base {}", base));
        }

        self.base = base;
        Ok(())
    }

    /// Is a colon definition currently open?
    pub fn compiling(&self) -> bool {
        self.compiling
    }

    /// Enter or leave compiling mode.  Used by `:`, `;`, `[` and `]`.
    pub fn set_compiling(&mut self, compiling: bool) {
        self.compiling = compiling;
    }

    /// The most recently parsed token, as remembered for error reports.
    pub fn last_token(&self) -> &String {
        &self.last_token
    }

    /// The dictionary index of the word currently nesting in the inner interpreter.
    pub fn wp(&self) -> usize {
        self.wp
    }
}
