use criterion::{criterion_group, criterion_main, Criterion};
use rotoku::Sudoku;

fn read_sudokus(sudokus_str: &str) -> Vec<Sudoku> {
    sudokus_str.lines().map(Sudoku::from_str_line).collect()
}

fn easy_sudokus_solve_one(c: &mut Criterion) {
    let sudokus = read_sudokus(include_str!("../sudokus/easy.txt"));
    let mut iter = sudokus.iter().cycle();
    c.bench_function("easy_sudokus_solve_one", |b| {
        b.iter(|| iter.next().unwrap().solve_one())
    });
}

fn easy_sudokus_solve_canonicalized(c: &mut Criterion) {
    let sudokus = read_sudokus(include_str!("../sudokus/easy.txt"));
    let mut iter = sudokus.iter().cycle();
    c.bench_function("easy_sudokus_solve_canonicalized", |b| {
        b.iter(|| iter.next().unwrap().solve_canonicalized())
    });
}

criterion_group!(
    benches,
    easy_sudokus_solve_one,
    easy_sudokus_solve_canonicalized
);
criterion_main!(benches);
