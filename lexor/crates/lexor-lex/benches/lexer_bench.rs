//! Lexer Benchmarks
//!
//! Measures scanner throughput on typical Lexor sources.
//! Run with: `cargo bench --package lexor-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use lexor_lex::Lexer;
use lexor_util::Handler;

fn lexer_token_count(source: &str) -> usize {
    Lexer::new(source).count()
}

fn bench_lexer_statements(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "DECLARE INT x = 42$ PRINT: x + 1$";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_declare", |b| {
        b.iter(|| lexer_token_count(black_box("DECLARE INT x = 42$")))
    });

    group.bench_function("two_statements", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_program(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_program");

    let source = r#"
        SCRIPT AREA
        START
            DECLARE INT i = 0, total = 0$
            DECLARE FLOAT ratio = 0.75$
            DECLARE CHAR grade = 'A'$
            DECLARE BOOL done = FALSE$

            FOR (i = 1, i <= 100, i = i + 1)
            [
                IF (i % 3 == 0 OR i % 5 == 0)
                [
                    total = total + i$
                ]
                ELSE
                [
                    PRINT: "skip " & i$
                ]
            ]

            REPEAT WHEN (NOT done AND total <> 0)
            [
                SCAN: total$
                done = total >= 10$
            ]

            PRINT: "total: " & total & "\n"$
        END
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("full_program", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    let repeated = source.repeat(64);
    group.throughput(Throughput::Bytes(repeated.len() as u64));

    group.bench_function("large_program", |b| {
        b.iter(|| lexer_token_count(black_box(&repeated)))
    });

    group.finish();
}

fn bench_lexer_literals(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_literals");

    group.bench_function("short_string", |b| {
        b.iter(|| lexer_token_count(black_box("PRINT: \"hello\"$")))
    });

    group.bench_function("escaped_string", |b| {
        let source = r#"PRINT: "tab\there, quote\" and newline\n for benchmarking purposes"$"#;
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.bench_function("numbers", |b| {
        b.iter(|| lexer_token_count(black_box("x = 123456 + 3.14159 * 2.5 - 7$")))
    });

    group.finish();
}

fn bench_lexer_errors(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_errors");

    let source = "x = 1.2.3$ @ # \"open\ny = ''$ 'ab'$";

    group.bench_function("without_handler", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.bench_function("with_handler", |b| {
        b.iter(|| {
            let handler = Handler::new();
            Lexer::new(black_box(source)).with_handler(&handler).count()
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_statements,
    bench_lexer_program,
    bench_lexer_literals,
    bench_lexer_errors
);
criterion_main!(benches);
