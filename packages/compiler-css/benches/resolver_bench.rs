use criterion::{black_box, criterion_group, criterion_main, Criterion};
use headline_compiler_css::{letter_schedule, resolve_headline_style, resolve_word_styles};
use headline_model::{HeadlineSettings, WordStyle, WordStyling};
use std::sync::Arc;

fn styled_settings() -> HeadlineSettings {
    let mut settings = HeadlineSettings::default();
    settings.text = "Ship faster with headlines that actually grab attention".to_string();
    let styling: WordStyling = vec![
        (0, WordStyle { background: true, ..Default::default() }),
        (2, WordStyle { highlight: true, underline: true, ..Default::default() }),
        (5, WordStyle { color: Some("#ff6b6b".to_string()), ..Default::default() }),
    ]
    .into_iter()
    .collect();
    settings.word_styling = Arc::new(styling);
    settings
}

fn resolve_headline(c: &mut Criterion) {
    let settings = styled_settings();

    c.bench_function("resolve_headline_style", |b| {
        b.iter(|| resolve_headline_style(black_box(&settings)))
    });
}

fn resolve_words(c: &mut Criterion) {
    let settings = styled_settings();

    c.bench_function("resolve_word_styles", |b| {
        b.iter(|| resolve_word_styles(black_box(&settings), Some(2)))
    });
}

fn schedule_letters(c: &mut Criterion) {
    let settings = styled_settings();
    let words = settings.words();

    c.bench_function("letter_schedule", |b| b.iter(|| letter_schedule(black_box(&words))));
}

criterion_group!(benches, resolve_headline, resolve_words, schedule_letters);
criterion_main!(benches);
