use actdef::{parse, Field, Tree};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn build_tree(records: usize) -> Tree {
    let mut tree = Tree::new();
    for i in 0..records {
        let property = format!("prop{i}");
        let record = tree
            .add_record("entity", Some(property.as_str()), Some("update"), Some("Benchmark record"))
            .unwrap();
        record
            .add_field(Field::required("id").unwrap().with_attribute("min", 1))
            .unwrap();
        record
            .add_field(
                Field::optional("name", Some("anonymous"))
                    .unwrap()
                    .with_attribute("maxLength", 64)
                    .with_description("Display \"name\""),
            )
            .unwrap();
        record
            .add_field_to("audit", Field::optional("reason", None).unwrap())
            .unwrap();
    }
    tree
}

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for size in [10, 100, 1000].iter() {
        let text = build_tree(*size).serialize();
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| parse(black_box(text)))
        });
    }

    group.finish();
}

fn benchmark_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");

    for size in [10, 100, 1000].iter() {
        let tree = build_tree(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &tree, |b, tree| {
            b.iter(|| black_box(tree).serialize())
        });
    }

    group.finish();
}

fn benchmark_parse_field(c: &mut Criterion) {
    let line = r#"[port="8080"] min="1" max="65535" unique // Port number"#;
    c.bench_function("parse_field", |b| {
        b.iter(|| actdef::parse_field(black_box(line)))
    });
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_serialize,
    benchmark_parse_field
);
criterion_main!(benches);
