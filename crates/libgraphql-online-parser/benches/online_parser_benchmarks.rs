mod fixtures;

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use libgraphql_online_parser::OnlineParser;
use libgraphql_online_parser::lexer;
use libgraphql_online_parser::CharacterCursor;
use libgraphql_online_parser::LexDialect;

/// Lexes every line of `source`, threading state the way an editor does.
fn lex_document(parser: &OnlineParser, source: &str) -> usize {
    let mut state = parser.start_state();
    let mut count = 0;
    for line in source.lines() {
        let (tokens, next) = parser.lex_line(line, &state);
        count += tokens.len();
        state = next;
    }
    count
}

// ─── Group 1: Whole Documents ────────────────────────────

fn documents(c: &mut Criterion) {
    let mut group = c.benchmark_group("documents");

    let inputs: &[(&str, OnlineParser, &str)] = &[
        ("schema", OnlineParser::graphql(), fixtures::SCHEMA),
        ("query", OnlineParser::graphql(), fixtures::QUERY),
        ("variables", OnlineParser::variables(), fixtures::VARIABLES),
    ];
    for (label, parser, input) in inputs {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_function(*label, |b| {
            b.iter(|| black_box(lex_document(parser, input)))
        });
    }

    let parser = OnlineParser::graphql();
    for depth in [10, 30] {
        let nested = fixtures::deeply_nested_query(depth);
        group.bench_with_input(
            BenchmarkId::new("nested_depth", depth),
            &nested,
            |b, input| b.iter(|| black_box(lex_document(&parser, input))),
        );
    }

    let damaged = fixtures::damaged_queries(20);
    group.bench_function("damaged_queries_20", |b| {
        b.iter(|| black_box(lex_document(&parser, &damaged)))
    });

    group.finish();
}

// ─── Group 2: Single-Line Re-Lex ─────────────────────────

/// The editor hot path: one edited line re-lexed from a saved state.
fn relex_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("relex_line");

    let parser = OnlineParser::graphql();
    let mut state = parser.start_state();
    for line in fixtures::QUERY.lines().take(3) {
        state = parser.lex_line(line, &state).1;
    }
    let line = "    height(unit: FOOT) @include(if: $withHeight) { value }";
    group.bench_function("nested_field", |b| {
        b.iter(|| black_box(parser.lex_line(line, &state)))
    });

    group.finish();
}

// ─── Group 3: Lexer (Tokenization Only) ──────────────────

fn lexer(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    group.throughput(Throughput::Bytes(fixtures::SCHEMA.len() as u64));
    group.bench_function("schema", |b| {
        b.iter(|| {
            for line in fixtures::SCHEMA.lines() {
                let mut cursor = CharacterCursor::new(line);
                while !cursor.eol() {
                    if !lexer::eat_ignored(&mut cursor, LexDialect::GraphQL) {
                        black_box(lexer::lex(&mut cursor, LexDialect::GraphQL));
                    }
                }
            }
        })
    });

    group.finish();
}

// ─── Group 4: Cross-Parser Comparison ────────────────────

fn compare_document_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare_document_parse");

    let parser = OnlineParser::graphql();
    let inputs: &[(&str, &str)] = &[
        ("schema", fixtures::SCHEMA),
        ("query", fixtures::QUERY),
    ];
    for &(label, input) in inputs {
        group.bench_with_input(
            BenchmarkId::new("libgraphql_online_parser", label),
            &input,
            |b, input| b.iter(|| black_box(lex_document(&parser, input))),
        );

        group.bench_with_input(
            BenchmarkId::new("apollo_parser", label),
            &input,
            |b, input| {
                b.iter(|| {
                    let parser = apollo_parser::Parser::new(input);
                    black_box(parser.parse())
                })
            },
        );
    }

    group.finish();
}

// ─── Criterion Entrypoint ────────────────────────────────

criterion_group!(
    benches,
    documents,
    relex_line,
    lexer,
    compare_document_parse,
);
criterion_main!(benches);
