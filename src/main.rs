use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use log::debug;
use rotoku::Sudoku;

/// Solves or displays a 9x9 sudoku puzzle read from a text file.
///
/// The puzzle file holds up to 9 lines, one row per line, with the digits
/// 1-9 as clues and any other character as an empty cell. Invoked as
/// `solve`, the puzzle is solved and the solution printed; invoked under any
/// other name (e.g. through a `display` link), the parsed grid is only
/// printed back.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Path to the puzzle file.
    puzzle: PathBuf,

    /// Print the grid as a pipe-delimited table.
    #[arg(long)]
    tex: bool,
}

/// The executable's own file name, directories and extension stripped.
fn invocation_name() -> Option<String> {
    let arg0 = std::env::args().next()?;
    let stem = Path::new(&arg0).file_stem()?;
    Some(stem.to_string_lossy().into_owned())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let text = match std::fs::read_to_string(&cli.puzzle) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("{}: {}", cli.puzzle.display(), err);
            process::exit(1);
        }
    };
    let sudoku = Sudoku::from_str_lines(&text);

    let solve_mode = invocation_name().as_deref() == Some("solve");
    debug!(
        "mode: {}, {} clues",
        if solve_mode { "solve" } else { "display" },
        sudoku.n_clues()
    );

    let output = if solve_mode {
        match sudoku.solve_canonicalized() {
            Some(solution) => solution,
            None => {
                eprintln!("{}: no solution exists", cli.puzzle.display());
                process::exit(1);
            }
        }
    } else {
        sudoku
    };

    if cli.tex {
        print!("{}", output.display_tex());
    } else {
        print!("{}", output);
    }
}
