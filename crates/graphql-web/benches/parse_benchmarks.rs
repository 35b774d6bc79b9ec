mod fixtures;

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use graphql_web::ParseOptions;
use graphql_web::ast::Kind;
use graphql_web::ast::Node;
use graphql_web::parse_document;
use graphql_web::print;
use graphql_web::token_source::StrGraphQLTokenSource;
use graphql_web::visitor::VisitAction;
use graphql_web::visitor::Visitor;
use graphql_web::visitor::visit;

fn parsed(source: &str) -> Node {
    Node::from(
        parse_document(source, ParseOptions::default())
            .expect("benchmark fixture should parse"),
    )
}

// ─── Group 1: Document Parsing ───────────────────────────

fn document_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("document_parse");

    group.bench_function("simple_query", |b| {
        b.iter(|| {
            black_box(parse_document(
                fixtures::SIMPLE_QUERY,
                ParseOptions::default(),
            ))
        })
    });

    group.bench_function("complex_query", |b| {
        b.iter(|| {
            black_box(parse_document(
                fixtures::COMPLEX_QUERY,
                ParseOptions::default(),
            ))
        })
    });

    let nested_10 =
        fixtures::operations::deeply_nested_query(10);
    group.bench_function("nested_depth_10", |b| {
        b.iter(|| {
            black_box(parse_document(
                nested_10.as_str(),
                ParseOptions::default(),
            ))
        })
    });

    let nested_30 =
        fixtures::operations::deeply_nested_query(30);
    group.bench_function("nested_depth_30", |b| {
        b.iter(|| {
            black_box(parse_document(
                nested_30.as_str(),
                ParseOptions::default(),
            ))
        })
    });

    let many_ops =
        fixtures::operations::many_operations(50);
    group.bench_function("many_operations_50", |b| {
        b.iter(|| {
            black_box(parse_document(
                many_ops.as_str(),
                ParseOptions::default(),
            ))
        })
    });

    let large_value =
        fixtures::operations::large_input_value(200);
    group.bench_function("large_input_value_200", |b| {
        b.iter(|| {
            black_box(parse_document(
                large_value.as_str(),
                ParseOptions::default(),
            ))
        })
    });

    group.finish();
}

// ─── Group 2: Locations On vs Off ────────────────────────

fn locations(c: &mut Criterion) {
    let mut group = c.benchmark_group("locations");

    let inputs: &[(&str, &str)] = &[
        ("simple", fixtures::SIMPLE_QUERY),
        ("complex", fixtures::COMPLEX_QUERY),
    ];

    for &(label, input) in inputs {
        group.bench_with_input(
            BenchmarkId::new("with_locations", label),
            &input,
            |b, input| {
                b.iter(|| {
                    black_box(parse_document(
                        *input,
                        ParseOptions::default(),
                    ))
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("without_locations", label),
            &input,
            |b, input| {
                b.iter(|| {
                    black_box(parse_document(
                        *input,
                        ParseOptions::without_locations(),
                    ))
                })
            },
        );
    }

    group.finish();
}

// ─── Group 3: Lexer (Tokenization Only) ──────────────────

fn lexer(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let large_value =
        fixtures::operations::large_input_value(200);
    let inputs: &[(&str, &str)] = &[
        ("simple_query", fixtures::SIMPLE_QUERY),
        ("complex_query", fixtures::COMPLEX_QUERY),
        ("large_input_value_200", &large_value),
    ];

    for &(label, input) in inputs {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_function(label, |b| {
            b.iter(|| {
                let source = StrGraphQLTokenSource::new(input);
                for token in source {
                    black_box(token);
                }
            })
        });
    }

    group.finish();
}

// ─── Group 4: Printing ───────────────────────────────────

fn printing(c: &mut Criterion) {
    let mut group = c.benchmark_group("print");

    let complex = parsed(fixtures::COMPLEX_QUERY);
    group.bench_function("complex_query", |b| {
        b.iter(|| black_box(print(&complex)))
    });

    let many_ops = parsed(
        &fixtures::operations::many_operations(50),
    );
    group.bench_function("many_operations_50", |b| {
        b.iter(|| black_box(print(&many_ops)))
    });

    let large_value = parsed(
        &fixtures::operations::large_input_value(200),
    );
    group.bench_function("large_input_value_200", |b| {
        b.iter(|| black_box(print(&large_value)))
    });

    group.finish();
}

// ─── Group 5: Visiting ───────────────────────────────────

fn visiting(c: &mut Criterion) {
    let mut group = c.benchmark_group("visit");

    let complex = parsed(fixtures::COMPLEX_QUERY);

    group.bench_function("identity", |b| {
        b.iter(|| {
            let mut visitor = Visitor::new();
            black_box(visit(complex.clone(), &mut visitor))
        })
    });

    group.bench_function("remove_typename", |b| {
        b.iter(|| {
            let mut visitor = Visitor::new().enter_kind(
                Kind::Field,
                |node, _| {
                    Ok(match node {
                        Node::Field(field)
                            if field.name.value == "__typename" =>
                        {
                            VisitAction::Remove
                        },
                        _ => VisitAction::Continue,
                    })
                },
            );
            black_box(visit(complex.clone(), &mut visitor))
        })
    });

    group.finish();
}

// ─── Criterion Entrypoint ────────────────────────────────

criterion_group!(
    benches,
    document_parse,
    locations,
    lexer,
    printing,
    visiting,
);
criterion_main!(benches);
