use criterion::{criterion_group, criterion_main, Criterion};
use marklet::{parse, render, tokenize, Options};

const SECTION: &str = "## Section\n\n\
Paragraph with **bold**, *italic*, `code` and a [link](https://example.com \"Example\").\n\n\
- [x] done item\n- open item with ~~strike~~\n\n\
1. first\n2. second\n\n\
> quoted line\n> another line\n\n\
| Name | Value |\n|:-----|------:|\n| a | 1 |\n| `b|c` | 2 |\n\n\
```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n\
---\n\n";

fn generate_markdown_content(sections: usize) -> String {
    let mut content = String::from("# Title\n\n");
    content.push_str(&SECTION.repeat(sections));
    content
}

fn bench_documents(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let options = Options::default();

    for (name, sections) in [("small", 1), ("medium", 8), ("large", 150)] {
        let content = generate_markdown_content(sections);
        group.bench_function(name, |b| {
            b.iter(|| {
                let html = parse(std::hint::black_box(&content), &options);
                std::hint::black_box(html);
            });
        });
    }

    group.finish();
}

fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages");
    let options = Options::default();
    let content = generate_markdown_content(50);
    let tokens = tokenize(&content, &options);

    group.bench_function("tokenize", |b| {
        b.iter(|| {
            let tokens = tokenize(std::hint::black_box(&content), &options);
            std::hint::black_box(tokens);
        });
    });

    group.bench_function("render", |b| {
        b.iter(|| {
            let html = render(std::hint::black_box(&tokens), &options);
            std::hint::black_box(html);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_documents, bench_stages);
criterion_main!(benches);
