// benches/listing.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use scraper::Html;
use url::Url;

use botdir::specs::listing;

fn synthetic_listing(rows: usize) -> String {
    let mut html = String::from("<ul class=\"media_list\">\n");
    for i in 0..rows {
        html.push_str(&format!(
            "<li><a href=\"/apps/A{i}-bot\"><span>Bot {i}</span><span>Tagline {i}</span></a></li>\n"
        ));
    }
    html.push_str("</ul>");
    html
}

fn bench_listing(c: &mut Criterion) {
    let base = Url::parse("https://slack.test").unwrap();

    for rows in [20usize, 200] {
        let html = synthetic_listing(rows);
        c.bench_function(&format!("listing_parse_{rows}"), |b| {
            b.iter(|| {
                let doc = Html::parse_document(black_box(&html));
                let parsed = listing::bots(&doc, &base);
                black_box(parsed.len())
            })
        });
    }
}

criterion_group!(benches, bench_listing);
criterion_main!(benches);
