//! Grammar throughput. Run with `cargo bench --bench parser_bench`.

use basis::grammar::Grammar;
use basis::lexer::Lexer;
use basis::parser::Parser;
use std::hint::black_box;
use std::time::Instant;

fn time_it(label: &str, iterations: u32, mut f: impl FnMut()) {
    let start = Instant::now();
    for _ in 0..iterations {
        f();
    }
    let elapsed = start.elapsed();
    println!(
        "{label}: {:?} total, {:?}/iter over {iterations} iterations",
        elapsed,
        elapsed / iterations
    );
}

fn parses(source: &str) -> bool {
    let tokens = Lexer::new(source, 4).scan().expect("well-formed source");
    let grammar = Grammar::new();
    let outcome = Parser::new(&tokens, grammar.compilation_unit).parse();
    outcome.all_tokens_consumed(tokens.len())
}

fn main() {
    let enum_src = ".enum Fish: sockeye = 0, salmon = 1, chinook = 2\n";
    time_it("enum_decl", 2_000, || {
        black_box(parses(black_box(enum_src)));
    });

    let class_src = concat!(
        ".class Foo:\n",
        "  .cmd bar: Int x -> r\n",
        "  .cmd baz\n",
        "  .cmd qux = foo: a b\n",
    );
    time_it("class_with_members", 2_000, || {
        black_box(parses(black_box(class_src)));
    });

    let record_and_instance = concat!(
        ".record Point: Int x, Int y\n",
        ".instance Shape: Point(origin)\n",
    );
    time_it("record_and_instance", 2_000, || {
        black_box(parses(black_box(record_and_instance)));
    });
}
