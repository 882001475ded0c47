// benches/stream_parser.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use depth_scrape::core::html;
use depth_scrape::depth;

// A full printer-friendly page in line form: three units, a dozen positions each.
fn synthetic_lines() -> Vec<String> {
    let mut lines = vec![
        String::from("Army Depth Chart"),
        String::from("Pos"),
        String::from("No."),
        String::from("Player 1"),
        String::from("Updated 08/01/2025"),
    ];
    for unit in ["Offense", "Defense", "Special Teams"] {
        lines.push(unit.to_string());
        for p in 0..12u8 {
            lines.push(format!("P{}", (b'A' + p) as char));
            for d in 0..4 {
                lines.push(format!("{}", 10 + d));
                lines.push(format!("player-number-{d}"));
            }
        }
    }
    lines
}

fn synthetic_html(lines: &[String]) -> String {
    let mut doc = String::from("<html><head><title>Army Depth Chart</title><style>td{}</style></head><body>");
    for l in lines {
        doc.push_str("<div>");
        doc.push_str(l);
        doc.push_str("</div>");
    }
    doc.push_str("</body></html>");
    doc
}

fn bench_stream(c: &mut Criterion) {
    let lines = synthetic_lines();
    let doc = synthetic_html(&lines);

    c.bench_function("parse_lines", |b| {
        b.iter(|| {
            let records = depth::parse_lines(black_box(&lines));
            black_box(records.len())
        })
    });

    c.bench_function("visible_lines+parse_lines", |b| {
        b.iter(|| {
            let lines = html::visible_lines(black_box(&doc));
            black_box(depth::parse_lines(&lines).len())
        })
    });
}

criterion_group!(benches, bench_stream);
criterion_main!(benches);
