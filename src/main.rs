use std::io::{self, BufRead, Write};

use eforth::runtime::interpreter::ForthInterpreter;

/// A minimal line oriented REPL over the runtime.  Reads one line at a time from standard in and
/// feeds it to the interpreter; everything the words print arrives through the stdout sink the
/// interpreter was created with.
fn main() {
    env_logger::init();

    let mut interpreter = ForthInterpreter::new();

    println!("eForth ready.  One line of source per prompt, ctrl-d to quit.");

    let stdin = io::stdin();

    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();

        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,

            Ok(_) => {
                // Errors have already been reported through the output sink.
                let _ = interpreter.process_line(line.trim_end());
                println!();
            }
        }
    }
}
