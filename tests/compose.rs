use parsette::parsers;
use parsette::{Optional, Parser, ParserExt};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Gender {
    Male,
    Female,
}

fn gender() -> impl Parser<str, Output = Gender> {
    parsers::rest().literal("male".to_owned(), Gender::Male)
        | parsers::rest().literal("female".to_owned(), Gender::Female)
        | parsers::rest().literal("dude".to_owned(), Gender::Male)
}

#[test]
fn test_gender_alternation() {
    let parser = gender();

    assert_eq!(parser.parse("male"), Optional::present(Gender::Male));
    assert_eq!(parser.parse("female"), Optional::present(Gender::Female));
    assert_eq!(parser.parse("dude"), Optional::present(Gender::Male));
    assert_eq!(parser.parse("xxx"), Optional::absent());
}

#[test]
fn test_truncating_number() {
    let parser = parsers::number::<f64, str>().map(|value| value.trunc() as i64);

    assert_eq!(parser.parse("123.321"), Optional::present(123));
    assert_eq!(parser.parse("haha"), Optional::absent());
}

#[test]
fn test_rendering() {
    let text: parsers::Rest = parsers::rest();
    let number: parsers::Number<f64> = parsers::number();
    let int = parsers::number::<f64, str>().map(|value| value.trunc() as i64);

    assert_eq!(text.parse("123").to_string(), "some(123)");
    assert_eq!(number.parse("123.321").to_string(), "some(123.321)");
    assert_eq!(number.parse("haha").to_string(), "nil");
    assert_eq!(int.parse("123.321").to_string(), "some(123)");
}

#[test]
fn test_parsing_is_repeatable() {
    let parser = gender();

    assert_eq!(parser.parse("dude"), parser.parse("dude"));
    assert_eq!(parser.parse("nope"), parser.parse("nope"));
}

#[test]
fn test_composition_is_lazy() {
    use std::cell::Cell;

    let invocations = Cell::new(0);

    let counting = parsers::from_fn(|input: &str| {
        invocations.set(invocations.get() + 1);
        Optional::present(input.len())
    });

    let composed = counting.map(|length| length * 2).flat_map(parsers::unit);

    // Building the parser invoked nothing.
    assert_eq!(invocations.get(), 0);

    assert_eq!(composed.parse("abc"), Optional::present(6));
    assert_eq!(invocations.get(), 1);
}
