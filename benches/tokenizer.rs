//! Benchmarks for template tokenizing
//!
//! Run with: cargo bench --bench tokenizer

use jinja_highlight::syntax::{scan, PositionMapper, SyntaxHighlights};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

const SAMPLE: &str = include_str!("../samples/page.html.j2");

fn generate_large_template(blocks: usize) -> String {
    let mut out = String::with_capacity(blocks * SAMPLE.len());
    for i in 0..blocks {
        out.push_str(&format!("{{# block {} #}}\n", i));
        out.push_str(SAMPLE);
    }
    out
}

// ============================================================================
// Scanning
// ============================================================================

#[divan::bench]
fn scan_sample() {
    divan::black_box(scan(divan::black_box(SAMPLE)));
}

#[divan::bench(args = [10, 100, 1000])]
fn scan_large(bencher: divan::Bencher, blocks: usize) {
    let text = generate_large_template(blocks);
    bencher.bench(|| divan::black_box(scan(&text)));
}

#[divan::bench(args = [10, 100, 1000])]
fn scan_plain_text(bencher: divan::Bencher, lines: usize) {
    let text = "just some prose without any template markup\n".repeat(lines);
    bencher.bench(|| divan::black_box(scan(&text)));
}

// ============================================================================
// Position mapping
// ============================================================================

#[divan::bench(args = [10, 100, 1000])]
fn map_positions_forward(bencher: divan::Bencher, blocks: usize) {
    let text = generate_large_template(blocks);
    let offsets: Vec<usize> = text.char_indices().map(|(i, _)| i).step_by(7).collect();
    bencher.bench(|| {
        let mut mapper = PositionMapper::new(&text);
        for &offset in &offsets {
            divan::black_box(mapper.position(offset));
        }
    });
}

// ============================================================================
// Per-line conversion
// ============================================================================

#[divan::bench(args = [10, 100])]
fn split_into_lines(bencher: divan::Bencher, blocks: usize) {
    let text = generate_large_template(blocks);
    let highlights = scan(&text);
    bencher.bench(|| divan::black_box(SyntaxHighlights::from_highlights(&text, &highlights)));
}
