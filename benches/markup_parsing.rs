// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use ui_lens::domain::analysis::{extract_scores, parse_markup};

/// A critique the size the service typically returns, repeated a few times.
fn sample_critique() -> String {
    let section = "\
### Visual design
visual_design: 7 overall, **strong** hierarchy but crowded hero.

- **Contrast** between body text and background is low
- Buttons use three different corner radii
- Icons mix outline and **filled** styles

### Usability
ux: 6
- Primary action is below the fold on small screens
- Form labels disappear on focus

### Accessibility
accessibility: 5
- Several images lack alt text
- Focus ring is removed on links
";
    section.repeat(8)
}

fn markup_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("markup_parsing");
    let content = sample_critique();

    group.bench_function("parse_markup", |b| {
        b.iter(|| black_box(parse_markup(black_box(&content))));
    });

    group.bench_function("extract_scores", |b| {
        b.iter(|| black_box(extract_scores(black_box(&content))));
    });

    group.finish();
}

criterion_group!(benches, markup_benchmark);
criterion_main!(benches);
