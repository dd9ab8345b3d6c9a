//! Lexer throughput. Run with `cargo bench --bench lexer_bench`.

use basis::lexer::Lexer;
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

fn token_count(source: &str) -> usize {
    Lexer::new(source, 4).scan().expect("well-formed source").len()
}

fn main() {
    let simple = "x = 1\n";
    time_it("simple_assignment", 10_000, || {
        black_box(token_count(black_box(simple)));
    });

    let class_body = concat!(
        ".class Foo:\n",
        "  .cmd bar: Int x -> r\n",
        "  .cmd baz: Str name -> ok\n",
        "  .cmd qux\n",
    );
    time_it("class_with_signatures", 5_000, || {
        black_box(token_count(black_box(class_body)));
    });

    let nested_class = concat!(
        ".class Outer:\n",
        "  .cmd step: Int n -> r\n",
        "  .cmd finish = foo: a b\n",
    );
    time_it("nested_class_body", 5_000, || {
        black_box(token_count(black_box(nested_class)));
    });
}
