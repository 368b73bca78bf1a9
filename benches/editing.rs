//! Benchmarks for editing and undo
//!
//! Run with: cargo bench editing

use quill::editable::{Direction, Position, TextEditor};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn large_editor(lines: usize) -> TextEditor {
    TextEditor::with_text(&vec!["foo bar baz qux"; lines].join("\n"))
}

// ============================================================================
// Typing
// ============================================================================

#[divan::bench(args = [100, 1_000, 10_000])]
fn type_word_mid_document(bencher: divan::Bencher, lines: usize) {
    bencher
        .with_inputs(|| {
            let mut editor = large_editor(lines);
            editor.set_cursor(Position::new(lines / 2, 4));
            editor
        })
        .bench_local_values(|mut editor| {
            for ch in divan::black_box("inserted").chars() {
                editor.insert(ch);
            }
            editor
        });
}

#[divan::bench]
fn enter_every_line_10k(bencher: divan::Bencher) {
    bencher
        .with_inputs(|| large_editor(10_000))
        .bench_local_values(|mut editor| {
            for line in (0..10_000).step_by(100) {
                editor.set_cursor(Position::new(line, 3));
                editor.enter();
            }
            editor
        });
}

// ============================================================================
// Deleting
// ============================================================================

#[divan::bench]
fn backspace_join_lines_1k(bencher: divan::Bencher) {
    bencher
        .with_inputs(|| {
            let mut editor = large_editor(1_000);
            editor.set_cursor(Position::new(999, 0));
            editor
        })
        .bench_local_values(|mut editor| {
            for _ in 0..500 {
                editor.move_cursor(Direction::Home);
                editor.backspace();
            }
            editor
        });
}

// ============================================================================
// Undo
// ============================================================================

#[divan::bench(args = [10, 100, 1_000])]
fn undo_all_separate_edits(bencher: divan::Bencher, edits: usize) {
    bencher
        .with_inputs(|| {
            let mut editor = large_editor(1_000);
            for i in 0..edits {
                editor.set_cursor(Position::new(i % 1_000, 0));
                editor.insert('x');
            }
            editor
        })
        .bench_local_values(|mut editor| {
            while editor.undo() {}
            editor
        });
}

#[divan::bench]
fn undo_single_long_run(bencher: divan::Bencher) {
    bencher
        .with_inputs(|| {
            let mut editor = TextEditor::new();
            for _ in 0..10_000 {
                editor.insert('a');
            }
            editor
        })
        .bench_local_values(|mut editor| {
            editor.undo();
            editor
        });
}
