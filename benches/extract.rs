// benches/extract.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scraper::Html;

use wiki_scrape::extract::{self, words::count_tokens};

/// A long article: many paragraphs and a few big tables.
fn synthetic_page() -> String {
    let mut html = String::from(r#"<html><body><div class="mw-content-ltr mw-parser-output">"#);
    for i in 0..400 {
        html.push_str(&format!(
            "<p>The creeper number {i} approaches the player and explodes near the <a href=\"#\">village</a>.</p>"
        ));
    }
    for t in 0..3 {
        html.push_str("<table><tr><th>Name</th><th>Health</th><th>Drops</th></tr>");
        for r in 0..300 {
            html.push_str(&format!("<tr><td>Mob {t}-{r}</td><td>{}</td><td>Gunpowder</td></tr>", r % 20));
        }
        html.push_str("</table>");
    }
    html.push_str("</div></body></html>");
    html
}

fn bench_extract(c: &mut Criterion) {
    let page = synthetic_page();
    let doc = Html::parse_document(&page);

    c.bench_function("parse_document", |b| {
        b.iter(|| black_box(Html::parse_document(black_box(&page))))
    });

    c.bench_function("count_words", |b| {
        b.iter(|| {
            let region = extract::locate(&doc);
            let counts = extract::count_words(region.as_ref());
            black_box(counts.map(|c| c.total()).unwrap_or(0))
        })
    });

    let text = "the quick brown fox jumps over the lazy dog 42 times ".repeat(2000);
    c.bench_function("count_tokens", |b| {
        b.iter(|| black_box(count_tokens(black_box(&text)).len()))
    });

    c.bench_function("extract_table", |b| {
        b.iter(|| {
            let Some(region) = extract::locate(&doc) else { return 0 };
            let table = extract::extract_table(&region, black_box(2), true);
            black_box(table.map(|t| t.len()).unwrap_or(0))
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
