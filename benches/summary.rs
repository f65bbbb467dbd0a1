// benches/summary.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fight_scrape::{runner, scrape};

/// Synthetic profile page with `bouts` record rows.
fn sample_page(bouts: usize) -> String {
    let mut doc = String::from(
        "<html><body><div class=\"middle\"><div class=\"b\">\
         <table class=\"record\">\
         <tr><th>Result</th><th>Style</th><th>Opponent</th><th>Style</th><th>Org</th><th>Method</th></tr>",
    );
    for i in 0..bouts {
        let marker = ["win", "loss", "winTitle", "lossTitle"][i % 4];
        let method = ["KO (slam)", "Submission (armbar)", "Unanimous Decision"][i % 3];
        doc.push_str(&format!(
            "<tr><td class=\"{marker}\">R</td><td>Boxing</td>\
             <td><a href=\"fighter.php?i={id}\">Opponent {id}</a></td>\
             <td>Wrestling</td><td>Org {org}</td><td>{method}</td></tr>",
            id = i % 40,
            org = i % 5,
        ));
    }
    doc.push_str("</table></div></div></body></html>");
    doc
}

fn bench_summary(c: &mut Criterion) {
    let doc = sample_page(500);

    c.bench_function("parse_table", |b| {
        b.iter(|| {
            let (s, e) = scrape::find_record_table(black_box(&doc)).unwrap();
            scrape::parse_table(&doc[s..e]).records.len()
        })
    });

    c.bench_function("augment", |b| {
        b.iter(|| runner::augment(black_box(&doc)).map(|out| out.len()))
    });
}

criterion_group!(benches, bench_summary);
criterion_main!(benches);
