#![cfg(feature = "std")]

use crate::{
    board::CellState,
    engine::TargetingEngine,
    grid::{Dimensions, Grid},
    targeting::Mode,
};

fn column_label(c: usize) -> char {
    if c < 26 {
        (b'A' + c as u8) as char
    } else {
        '?'
    }
}

fn print_header(columns: usize, width: usize) {
    std::print!("   ");
    for c in 0..columns {
        std::print!(" {:>width$}", column_label(c), width = width);
    }
    std::println!();
}

/// Print a normalized probability distribution matrix.
pub fn print_probability_board(pdf: &Grid<f64>) {
    let Dimensions { rows, columns } = pdf.dimensions();
    std::println!("\nProbability distribution:");
    print_header(columns, 4);
    for r in 0..rows {
        std::print!("{:2} ", r + 1);
        for v in pdf.row(r) {
            std::print!(" {:4.2}", v);
        }
        std::println!();
    }
}

/// Print what the engine knows about the opponent board alongside its
/// current total configuration counts.
pub fn print_player_view(engine: &TargetingEngine) {
    let board = engine.board();
    let total = engine.probability().total();
    let Dimensions { rows, columns } = board.dimensions();

    match engine.mode() {
        Mode::Hunting => std::println!("\nMode: hunting"),
        Mode::Targeting(cursor) => std::println!(
            "\nMode: targeting from {} heading {:?} at distance {}",
            cursor.anchor,
            cursor.direction,
            cursor.distance
        ),
    }
    print_header(columns, 1);
    for r in 0..rows {
        std::print!("{:2} ", r + 1);
        for (c, state) in board.iter().skip(r * columns).take(columns) {
            let ch = match state {
                CellState::Hit => 'X',
                CellState::Miss => 'o',
                CellState::Unknown if total[c] == 0 => '-',
                CellState::Unknown => '.',
            };
            std::print!(" {}", ch);
        }
        std::println!();
    }
    std::println!("    Legend: X=Hit  o=Miss  .=Unknown  -=No placement fits");
}
