// Parameterized single-line evaluation tests covering the seeded word set.

use eforth::runtime::data_structures::value::Cell;
use eforth::runtime::error::Result;
use eforth::runtime::interpreter::{BufferSink, ForthInterpreter};
use test_case::test_case;

/// Evaluate one line of source against a fresh interpreter whose stack has been primed with the
/// given numbers, and return the numeric stack left behind.
fn eval_and_stack(source: &str, init_stack: &[f64]) -> Result<Vec<f64>> {
    let (sink, _output) = BufferSink::new();
    let mut interp = ForthInterpreter::with_sink(Box::new(sink));

    for &value in init_stack {
        interp.push(Cell::Number(value));
    }

    interp.process_line(source)?;

    let stack = interp
        .stack()
        .iter()
        .map(|cell| cell.as_number().expect("non numeric cell on stack"))
        .collect();

    Ok(stack)
}

#[test_case("0", &[], &[0.0]; "zero literal")]
#[test_case("42", &[], &[42.0]; "number literal")]
#[test_case("-7", &[], &[-7.0]; "negative literal")]
#[test_case("2.5", &[], &[2.5]; "float literal")]
#[test_case("+", &[2.0, 2.0], &[4.0]; "simple add")]
#[test_case("-", &[5.0, 2.0], &[3.0]; "simple sub")]
#[test_case("*", &[3.0, 4.0], &[12.0]; "simple mul")]
#[test_case("/", &[12.0, 3.0], &[4.0]; "simple div")]
#[test_case("/", &[1.0, 2.0], &[0.5]; "fractional div")]
#[test_case("mod", &[13.0, 5.0], &[3.0]; "simple mod")]
#[test_case("negate", &[9.0], &[-9.0]; "negate positive")]
#[test_case("negate", &[-9.0], &[9.0]; "negate negative")]
#[test_case("and", &[6.0, 3.0], &[2.0]; "bitwise and")]
#[test_case("or", &[6.0, 3.0], &[7.0]; "bitwise or")]
#[test_case("xor", &[6.0, 3.0], &[5.0]; "bitwise xor")]
#[test_case("and", &[-1.0, -1.0], &[-1.0]; "and of true flags")]
fn arithmetic(source: &str, init_stack: &[f64], expected: &[f64]) {
    assert_eq!(eval_and_stack(source, init_stack).unwrap(), expected);
}

#[test_case("0=", &[0.0], &[-1.0]; "zero equal true")]
#[test_case("0=", &[5.0], &[0.0]; "zero equal false")]
#[test_case("0<", &[-2.0], &[-1.0]; "zero less true")]
#[test_case("0<", &[0.0], &[0.0]; "zero less of zero")]
#[test_case("0>", &[2.0], &[-1.0]; "zero greater true")]
#[test_case("0<>", &[2.0], &[-1.0]; "zero not equal true")]
#[test_case("0<=", &[0.0], &[-1.0]; "zero or less of zero")]
#[test_case("0>=", &[-1.0], &[0.0]; "zero or greater false")]
#[test_case("=", &[2.0, 2.0], &[-1.0]; "equal true")]
#[test_case("=", &[1.0, 2.0], &[0.0]; "equal false")]
#[test_case("==", &[2.0, 2.0], &[-1.0]; "double equal")]
#[test_case("<>", &[1.0, 2.0], &[-1.0]; "not equal true")]
#[test_case("<", &[1.0, 2.0], &[-1.0]; "less true")]
#[test_case("<", &[2.0, 1.0], &[0.0]; "less false")]
#[test_case(">", &[2.0, 1.0], &[-1.0]; "greater true")]
#[test_case("<=", &[1.0, 1.0], &[-1.0]; "at most of equal")]
#[test_case(">=", &[1.0, 2.0], &[0.0]; "at least false")]
fn comparisons(source: &str, init_stack: &[f64], expected: &[f64]) {
    assert_eq!(eval_and_stack(source, init_stack).unwrap(), expected);
}

#[test_case("dup", &[42.0], &[42.0, 42.0]; "dup")]
#[test_case("over", &[1.0, 2.0], &[1.0, 2.0, 1.0]; "over")]
#[test_case("2dup", &[1.0, 2.0], &[1.0, 2.0, 1.0, 2.0]; "two dup")]
#[test_case("2over", &[1.0, 2.0, 3.0, 4.0], &[1.0, 2.0, 3.0, 4.0, 1.0, 2.0]; "two over")]
#[test_case("4dup", &[1.0, 2.0, 3.0, 4.0], &[1.0, 2.0, 3.0, 4.0, 1.0, 2.0, 3.0, 4.0]; "four dup")]
#[test_case("swap", &[1.0, 2.0], &[2.0, 1.0]; "swap")]
#[test_case("rot", &[1.0, 2.0, 3.0], &[2.0, 3.0, 1.0]; "rot")]
#[test_case("-rot", &[1.0, 2.0, 3.0], &[3.0, 1.0, 2.0]; "minus rot")]
#[test_case("2swap", &[1.0, 2.0, 3.0, 4.0], &[3.0, 4.0, 1.0, 2.0]; "two swap")]
#[test_case("2swap", &[9.0, 1.0, 2.0, 3.0, 4.0], &[9.0, 3.0, 4.0, 1.0, 2.0]; "two swap leaves deeper cells")]
#[test_case("drop", &[1.0, 2.0], &[1.0]; "drop")]
#[test_case("nip", &[1.0, 2.0], &[2.0]; "nip")]
#[test_case("2drop", &[1.0, 2.0, 3.0], &[1.0]; "two drop")]
#[test_case("0 pick", &[7.0], &[7.0, 7.0]; "pick top")]
#[test_case("1 pick", &[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0, 2.0]; "pick second")]
#[test_case("2 roll", &[1.0, 2.0, 3.0], &[2.0, 3.0, 1.0]; "roll third")]
#[test_case("5 >r r@ r> +", &[], &[10.0]; "return stack round trip")]
#[test_case("5 push pop", &[], &[5.0]; "push pop aliases")]
fn stack_shuffles(source: &str, init_stack: &[f64], expected: &[f64]) {
    assert_eq!(eval_and_stack(source, init_stack).unwrap(), expected);
}

#[test_case("hex ff", &[], &[255.0]; "hex parsing")]
#[test_case("hex 10 decimal", &[], &[16.0]; "hex then decimal")]
#[test_case("2 base! 101", &[], &[5.0]; "binary parsing")]
#[test_case("base@", &[], &[10.0]; "default base")]
#[test_case("hex base@ decimal", &[], &[16.0]; "base after hex")]
fn numeric_base(source: &str, init_stack: &[f64], expected: &[f64]) {
    assert_eq!(eval_and_stack(source, init_stack).unwrap(), expected);
}

#[test_case(": f 42 ; f", &[], &[42.0]; "trivial definition")]
#[test_case(": sq dup * ; 5 sq", &[], &[25.0]; "square definition")]
#[test_case("7 constant seven seven seven +", &[], &[14.0]; "constant")]
#[test_case("create x 1 x ! x @", &[], &[1.0]; "variable store fetch")]
#[test_case("create y 0 , 5 y +! y @", &[], &[5.0]; "plus store")]
#[test_case("create arr 3 allot 7 arr 2 array! arr 2 array@", &[], &[7.0]; "array slots")]
#[test_case("' dup ' dup -", &[], &[0.0]; "tick is stable")]
#[test_case("s\" hi\" s\" hi\" =", &[], &[-1.0]; "string equality")]
fn definitions(source: &str, init_stack: &[f64], expected: &[f64]) {
    assert_eq!(eval_and_stack(source, init_stack).unwrap(), expected);
}

#[test]
fn here_matches_dictionary_length() {
    let (sink, _output) = BufferSink::new();
    let mut interp = ForthInterpreter::with_sink(Box::new(sink));

    let length = interp.dictionary().len();

    interp.process_line("here").unwrap();
    assert_eq!(interp.stack(), &vec![Cell::from(length)]);
}

#[test]
fn find_pushes_minus_one_for_unknown_names() {
    assert_eq!(eval_and_stack("find nonsense", &[]).unwrap(), vec![-1.0]);
}

#[test]
fn data_stack_persists_across_lines() {
    let (sink, _output) = BufferSink::new();
    let mut interp = ForthInterpreter::with_sink(Box::new(sink));

    interp.process_line("1 2").unwrap();
    interp.process_line("+").unwrap();

    assert_eq!(interp.stack(), &vec![Cell::Number(3.0)]);
}

#[test]
fn arithmetic_round_trip_restores_the_first_operand() {
    assert_eq!(eval_and_stack("17 5 + 5 -", &[]).unwrap(), vec![17.0]);
}
