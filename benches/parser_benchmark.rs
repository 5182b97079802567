//! Benchmarks for the `.bru` block parser and the document index.
//!
//! Request files are usually small, but collection-level files and generated
//! fixtures can reach tens of thousands of lines. Parsing a 10,000 line file
//! should stay well below 100ms.

use bru_syntax::document::Document;
use bru_syntax::models::Position;
use bru_syntax::parser::parse_bru_file;
use bru_syntax::variables::get_variable_references_from_code;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Generate a synthetic request file with the given number of header fields
/// and variable assignments.
fn generate_bru_file(num_entries: usize) -> String {
    let mut content = String::from(
        "meta {\n  name: Generated request\n  type: http\n  seq: 1\n}\n\n\
         get {\n  url: {{baseUrl}}/users\n  body: json\n  auth: bearer\n}\n\n",
    );

    content.push_str("headers {\n");
    for i in 0..num_entries {
        content.push_str(&format!("  x-header-{}: {{{{value{}}}}}\n", i, i));
    }
    content.push_str("}\n\n");

    content.push_str("body:json {\n  {\n");
    for i in 0..num_entries {
        content.push_str(&format!(
            "    \"field{}\": {{ \"id\": {}, \"name\": \"{{{{name{}}}}}\" }},\n",
            i, i, i
        ));
    }
    content.push_str("    \"last\": true\n  }\n}\n\n");

    content.push_str("vars:secret [\n");
    for i in 0..num_entries {
        content.push_str(&format!("  secret{},\n", i));
    }
    content.push_str("  lastSecret\n]\n\n");

    content.push_str("script:post-response {\n");
    content.push_str(&generate_script(num_entries));
    content.push_str("}\n");

    content
}

fn generate_script(num_statements: usize) -> String {
    let mut script = String::new();
    for i in 0..num_statements {
        script.push_str(&format!(
            "  if (res.status === {}) {{\n    bru.setVar(\"result{}\", bru.getEnvVar(\"input{}\"));\n  }}\n",
            200 + i % 5,
            i,
            i
        ));
    }
    script
}

/// Benchmark parsing small files (~50 lines).
fn bench_parse_small(c: &mut Criterion) {
    let content = generate_bru_file(10);

    c.bench_function("parse_small_10_entries", |b| {
        b.iter(|| parse_bru_file(black_box(&content)))
    });
}

/// Benchmark parsing files of increasing size.
fn bench_parse_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_sizes");

    for size in [100, 500, 1000].iter() {
        let content = generate_bru_file(*size);
        let lines = Document::new(content.as_str()).line_count();

        group.throughput(Throughput::Elements(lines as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_entries", size)),
            size,
            |b, _| b.iter(|| parse_bru_file(black_box(&content))),
        );
    }

    group.finish();
}

/// Benchmark parsing a file with an unterminated block near the top, which
/// turns the rest of the document into text outside of blocks.
fn bench_parse_unterminated(c: &mut Criterion) {
    let mut content = String::from("headers {\n  a: 1\n\n");
    content.push_str(&generate_bru_file(1000));

    let mut group = c.benchmark_group("parse_unterminated");
    group.sample_size(20);

    group.bench_function("parse_unterminated_1000_entries", |b| {
        b.iter(|| parse_bru_file(black_box(&content)))
    });

    group.finish();
}

/// Benchmark building the line index and resolving offsets on a large
/// document.
fn bench_document_offsets(c: &mut Criterion) {
    let content = generate_bru_file(2000);
    let document = Document::new(content.as_str());
    let length = content.len();

    c.bench_function("document_build_2000_entries", |b| {
        b.iter(|| Document::new(black_box(content.as_str())))
    });

    c.bench_function("document_position_lookup_2000_entries", |b| {
        b.iter(|| {
            for offset in (0..length).step_by(997) {
                let position = document.position_at(black_box(offset));
                black_box(position.map(|p| document.offset_for_position(p)));
            }
        })
    });
}

/// Benchmark scanning a script for inbuilt variable accessors.
fn bench_code_references(c: &mut Criterion) {
    let script = generate_script(500);

    let mut group = c.benchmark_group("code_references");
    group.sample_size(20);

    group.bench_function("script_500_statements", |b| {
        b.iter(|| get_variable_references_from_code(black_box(&script), Position::new(10, 0)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_small,
    bench_parse_sizes,
    bench_parse_unterminated,
    bench_document_offsets,
    bench_code_references
);

criterion_main!(benches);
