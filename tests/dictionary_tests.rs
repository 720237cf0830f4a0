// Dictionary behaviour: redefinition, the fence, forget and boot, vectoring, and what each error
// kind leaves behind.

use eforth::runtime::data_structures::value::Cell;
use eforth::runtime::error::ErrorKind;
use eforth::runtime::interpreter::{BufferSink, ForthInterpreter};

fn session() -> ForthInterpreter {
    let (sink, _output) = BufferSink::new();
    ForthInterpreter::with_sink(Box::new(sink))
}

#[test]
fn redefinition_shadows_but_old_callers_keep_the_old_meaning() {
    let mut interp = session();

    interp.process_line(": x 1 ;").unwrap();
    interp.process_line(": y x ;").unwrap();
    interp.process_line(": x 2 ;").unwrap();

    // y captured the index of the first x at compile time; new code sees the new x.
    interp.process_line("y x").unwrap();
    assert_eq!(interp.stack(), &vec![Cell::Number(1.0), Cell::Number(2.0)]);
}

#[test]
fn primitives_can_be_shadowed() {
    let mut interp = session();

    interp.process_line(": dup 9 ;").unwrap();
    interp.process_line("5 dup").unwrap();

    assert_eq!(interp.stack(), &vec![Cell::Number(5.0), Cell::Number(9.0)]);
}

#[test]
fn forget_removes_the_word_and_everything_after_it() {
    let mut interp = session();

    let before = interp.dictionary().len();

    interp.process_line(": a 1 ;").unwrap();
    interp.process_line(": b 2 ;").unwrap();
    interp.process_line(": c 3 ;").unwrap();

    interp.process_line("forget b").unwrap();

    assert_eq!(interp.dictionary().len(), before + 1);
    assert!(interp.dictionary().find("a").is_some());
    assert!(interp.dictionary().find("b").is_none());
    assert!(interp.dictionary().find("c").is_none());
}

#[test]
fn forget_below_the_fence_is_refused() {
    let (sink, output) = BufferSink::new();
    let mut interp = ForthInterpreter::with_sink(Box::new(sink));

    let before = interp.dictionary().len();

    interp.process_line("1 2").unwrap();
    let err = interp.process_line("forget dup").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ProtectedFence);
    assert_eq!(interp.dictionary().len(), before);
    assert!(interp.stack().is_empty());
    assert!(output.borrow().contains("below fence"));
}

#[test]
fn boot_clears_every_user_word() {
    let mut interp = session();

    interp.process_line(": a 1 ;").unwrap();
    interp.process_line(": b 2 ;").unwrap();
    interp.process_line("boot").unwrap();

    assert_eq!(interp.dictionary().len(), interp.dictionary().fence());
    assert!(interp.dictionary().find("a").is_none());
    assert!(interp.dictionary().find("dup").is_some());
}

#[test]
fn does_retrofits_the_created_word_and_ends_the_definer() {
    let mut interp = session();

    interp.process_line(": mk create does> 5 ;").unwrap();

    // The code after does> belongs to the created word, not to this call of mk.
    interp.process_line("mk x").unwrap();
    assert!(interp.stack().is_empty());

    interp.process_line("x x +").unwrap();
    assert_eq!(interp.stack(), &vec![Cell::Number(10.0)]);
}

#[test]
fn q_fetch_reads_a_slot_of_the_nesting_word() {
    let mut interp = session();

    interp.process_line(": mk create does> 0 q@ ;").unwrap();
    interp.process_line("mk x").unwrap();

    // x's retrofitted field is [0, q@, exit]; running x makes q@ fetch slot 0 of x itself,
    // which is the literal 0 its own code just pushed.
    interp.process_line("x").unwrap();
    assert_eq!(interp.stack(), &vec![Cell::Number(0.0)]);
}

#[test]
fn is_revectors_a_word_to_another_ones_behaviour() {
    let mut interp = session();

    interp.process_line(": one 1 ;").unwrap();
    interp.process_line(": two 2 ;").unwrap();

    interp.process_line("' two is one one").unwrap();
    assert_eq!(interp.stack(), &vec![Cell::Number(2.0)]);
}

#[test]
fn is_takes_a_snapshot_not_an_alias() {
    let mut interp = session();

    interp.process_line(": one 1 ;").unwrap();
    interp.process_line(": two 2 ;").unwrap();
    interp.process_line("' two is one").unwrap();

    // Rewriting two's code afterwards does not reach back into one.
    interp.process_line("3 ' two 0 array!").unwrap();
    interp.process_line("one two").unwrap();

    assert_eq!(interp.stack(), &vec![Cell::Number(2.0), Cell::Number(3.0)]);
}

#[test]
fn to_stores_into_the_word_compiled_after_it() {
    let mut interp = session();

    interp.process_line("create val 0 ,").unwrap();
    interp.process_line(": setval 99 to val ;").unwrap();
    interp.process_line("setval val @").unwrap();

    assert_eq!(interp.stack(), &vec![Cell::Number(99.0)]);
}

#[test]
fn bracket_words_evaluate_at_compile_time() {
    let mut interp = session();

    interp.process_line(": t [ 5 ] 7 ;").unwrap();
    assert_eq!(interp.stack(), &vec![Cell::Number(5.0)]);

    interp.process_line("t").unwrap();
    assert_eq!(
        interp.stack(),
        &vec![Cell::Number(5.0), Cell::Number(7.0)]
    );
}

#[test]
fn bracket_tick_compiles_an_index_literal() {
    let mut interp = session();

    interp.process_line(": t ['] dup ; t ' dup =").unwrap();
    assert_eq!(interp.stack(), &vec![Cell::truth(true)]);
}

#[test]
fn undefined_word_clears_the_stack_but_not_the_dictionary() {
    let (sink, output) = BufferSink::new();
    let mut interp = ForthInterpreter::with_sink(Box::new(sink));

    let before = interp.dictionary().len();

    let err = interp.process_line("1 2 bogus").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UndefinedWord);
    assert!(interp.stack().is_empty());
    assert_eq!(interp.dictionary().len(), before);
    assert!(output.borrow().contains(" bogus ? "));
}

#[test]
fn undefined_word_mid_definition_discards_the_definition() {
    let mut interp = session();

    let before = interp.dictionary().len();

    let err = interp.process_line(": t 1 bogus ;").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UndefinedWord);
    assert_eq!(interp.dictionary().len(), before);
    assert!(!interp.compiling());
    assert!(interp.dictionary().find("t").is_none());
}

#[test]
fn host_fault_leaves_the_stack_for_inspection() {
    let mut interp = session();

    let err = interp.process_line("1 2 @").unwrap_err();

    // @ popped the 2 and faulted on a primitive with no data; the 1 survives.
    assert_eq!(err.kind(), ErrorKind::HostFault);
    assert_eq!(interp.stack(), &vec![Cell::Number(1.0)]);
}

#[test]
fn a_bare_colon_defines_nothing() {
    let mut interp = session();

    let before = interp.dictionary().len();

    interp.process_line(": ").unwrap();

    assert_eq!(interp.dictionary().len(), before);
    assert!(!interp.compiling());
}

#[test]
fn sessions_are_independent() {
    let mut first = session();
    let mut second = session();

    first.process_line(": greet 1 ;").unwrap();

    assert!(first.dictionary().find("greet").is_some());
    assert!(second.dictionary().find("greet").is_none());

    let err = second.process_line("greet").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UndefinedWord);
}
