use std::{
    error::Error,
    fmt::{self, Debug, Display, Formatter},
};

pub type Result<T> = std::result::Result<T, ForthError>;

/// Classification of everything that can interrupt the processing of an input line.
///
/// These are kinds rather than separate error types because every one of them terminates only the
/// current line, and the host is expected to pattern match on the kind to decide what, if
/// anything, it wants to do beyond showing the report already written to the output sink.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ErrorKind {
    /// The parser found no more tokens on the current line.  This is the normal end of line
    /// signal and produces the ok prompt, not an error report.
    EndOfInput,

    /// A token is neither a known dictionary name nor a valid number in the current base.
    UndefinedWord,

    /// `forget` targeted a dictionary index below the protected fence.
    ProtectedFence,

    /// A control flow word was used outside a definition or without its matching opener.
    ControlMismatch,

    /// The return stack exceeded its depth bound.
    StackOverflow,

    /// Stack underflow, an out of range dictionary index, or a parameter field slot that does not
    /// hold what the operation expects.  Fatal to the current line, but the dictionary and data
    /// stack are left as-is for inspection.
    HostFault,
}

/// Any error that occurs while the interpreter is processing a line of source text.
#[derive(Clone)]
pub struct ForthError {
    /// What kind of condition this is.  Hosts match on this.
    kind: ErrorKind,

    /// The report text, in the terse style the runtime has always used, e.g. " bogus ? ".
    message: String,
}

impl Error for ForthError {}

impl Display for ForthError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Debug for ForthError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl ForthError {
    /// Create a new ForthError.
    pub fn new(kind: ErrorKind, message: String) -> ForthError {
        ForthError { kind, message }
    }

    /// Create a new ForthError and wrap it in a Result::Err.
    pub fn new_as_result<T>(kind: ErrorKind, message: String) -> Result<T> {
        Err(ForthError::new(kind, message))
    }

    /// What kind of condition this is.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The report text for the user.
    pub fn message(&self) -> &String {
        &self.message
    }
}

/// The parser ran out of tokens on the current line.
pub fn end_of_input<T>() -> Result<T> {
    ForthError::new_as_result(ErrorKind::EndOfInput, String::new())
}

/// A token was neither a word nor a number.  The report mirrors the classic ` token ? ` form.
pub fn undefined_word<T>(token: &str) -> Result<T> {
    ForthError::new_as_result(ErrorKind::UndefinedWord, format!(" {} ? ", token))
}

/// `forget` tried to reach below the protected fence.
pub fn protected_fence<T>(token: &str) -> Result<T> {
    ForthError::new_as_result(ErrorKind::ProtectedFence, format!(" {} below fence ", token))
}

/// A structure word was unbalanced, e.g. `then` without `if`.
pub fn control_mismatch<T>(message: &str) -> Result<T> {
    ForthError::new_as_result(ErrorKind::ControlMismatch, format!(" {} ", message))
}

/// The return stack hit its depth bound.
pub fn stack_overflow<T>() -> Result<T> {
    ForthError::new_as_result(ErrorKind::StackOverflow, " return stack overflow ".to_string())
}

/// A host level fault, see ErrorKind::HostFault.
pub fn host_fault<T>(message: String) -> Result<T> {
    ForthError::new_as_result(ErrorKind::HostFault, format!(" {} ", message))
}

/// A host level fault with a static description.
pub fn host_fault_str<T>(message: &str) -> Result<T> {
    host_fault(message.to_string())
}
