use criterion::{black_box, criterion_group, criterion_main, Criterion};
use isbn2::{Isbn, Isbn10, Isbn13};
use std::str::FromStr;

const ISBN10: [u8; 10] = [9, 9, 7, 1, 5, 0, 2, 1, 0, 0];
const ISBN13: [u8; 13] = [9, 7, 8, 3, 1, 6, 1, 4, 8, 4, 1, 0, 0];

fn bench_calculate_check_digit(c: &mut Criterion) {
    c.bench_function("isbn10_new_valid", |b| {
        b.iter(|| Isbn10::new(black_box(ISBN10)))
    });
    c.bench_function("isbn13_new_valid", |b| {
        b.iter(|| Isbn13::new(black_box(ISBN13)))
    });
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_isbn10", |b| {
        b.iter(|| Isbn::from_str(black_box("9971-5-0210-0")))
    });
    c.bench_function("parse_isbn13", |b| {
        b.iter(|| Isbn::from_str(black_box("978-3-16-148410-0")))
    });
}

criterion_group!(benches, bench_calculate_check_digit, bench_parse);
criterion_main!(benches);
