use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use doclint::{DocumentText, validate_lines, validate_text};
use std::hint::black_box;

/// Generate a product catalogue with a given issue density
fn generate_catalogue(products: usize, scenario: &str) -> Vec<String> {
    let mut content = vec!["Required Information".to_string()];

    for i in 0..products {
        content.push(format!("Product {}", i));
        content.push(format!("Category: Category {}", i % 12));

        match scenario {
            "all_valid" => {
                content.push("Tags (comma separated):".to_string());
                content.push(format!("tag-{}a, tag-{}b, tag-{}c", i, i, i));
                content.push("Filter Option: Colour".to_string());
                content.push(format!("Colour {}‚ Shade {}", i, i));
                content.push("Variation Type: Size".to_string());
            }
            "duplicate_tags" => {
                content.push("Tags (comma separated):".to_string());
                // half the tags are shared across products
                content.push(format!("shared-{}, own-{}", i % 50, i));
            }
            "bad_filters" => {
                content.push("Filter Option: Size".to_string());
                content.push(format!("Size {}, Large (L)", i));
                content.push("Small".to_string());
                content.push("Variation Type: Size, Colour".to_string());
            }
            _ => {
                content.push("Tags (comma separated):".to_string());
                content.push(format!("shared-{}, own-{}", i % 50, i));
                content.push("Filter Option: Colour".to_string());
                content.push(format!("Red (dark), Blue {}", i));
            }
        }

        content.push("Row 1".to_string());
        content.push(String::new());
    }

    content
}

/// Benchmark validation with different issue densities
fn bench_validation_issue_density(c: &mut Criterion) {
    let scenarios = vec!["all_valid", "duplicate_tags", "bad_filters", "mixed"];

    let mut group = c.benchmark_group("validation_issue_density");

    for scenario in scenarios {
        let lines = generate_catalogue(1_000, scenario);

        group.throughput(Throughput::Elements(lines.len() as u64));
        group.bench_with_input(BenchmarkId::new("scenario", scenario), &lines, |b, lines| {
            b.iter(|| black_box(validate_lines(black_box(lines))))
        });
    }

    group.finish();
}

/// Benchmark validation scalability with different document sizes
fn bench_validation_scalability(c: &mut Criterion) {
    let sizes = vec![10, 100, 1_000, 10_000];

    let mut group = c.benchmark_group("validation_scalability");

    for &size in &sizes {
        let content = generate_catalogue(size, "mixed").join("\r\n");

        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(BenchmarkId::new("products", size), &content, |b, content| {
            b.iter(|| black_box(validate_text(black_box(content))))
        });
    }

    group.finish();
}

/// Benchmark line splitting on its own
fn bench_line_splitting(c: &mut Criterion) {
    let content = generate_catalogue(10_000, "mixed").join("\n");

    c.bench_function("split_document", |b| {
        b.iter(|| black_box(DocumentText::from_text(black_box(&content))))
    });
}

criterion_group!(
    validation_benches,
    bench_validation_issue_density,
    bench_validation_scalability,
    bench_line_splitting
);

criterion_main!(validation_benches);
