//! A terminal Connect Four game against the MCTS AI.

use std::fmt;
use std::io::{self, Write};

use connect_four_mcts::{Budget, Color, GameSession, Mcts, MctsConfig, Outcome};

const ITERATIONS: u64 = 20_000;

fn main() {
    env_logger::init();

    println!("Connect Four vs. MCTS");
    println!("======================");
    println!();

    let mut session = GameSession::new();
    let mut mcts = Mcts::new(MctsConfig::default().with_exploration_constant(std::f64::consts::SQRT_2));
    let human = Color::Yellow;

    loop {
        println!("{}", Display(&session));

        let snapshot = session.look();
        if snapshot.result.is_terminal() {
            break;
        }

        let to_move = if session.look().history.len() % 2 == 0 {
            Color::Yellow
        } else {
            Color::Red
        };

        if to_move == human {
            let column = prompt_for_column(&session);
            session.play(column).expect("prompt only returns legal columns");
        } else {
            println!("AI is thinking...");
            let history = session.look().history;
            match mcts.search(&history, Budget::Iterations(ITERATIONS)) {
                Ok(column) => {
                    println!("AI chooses column {}", column + 1);
                    session.play(column).expect("search only returns legal columns");
                    println!("{}", mcts.statistics().summary());
                }
                Err(err) => {
                    println!("search failed: {err}");
                    break;
                }
            }
        }
    }

    println!("{}", Display(&session));
    match session.look().result {
        Outcome::YellowWins if human == Color::Yellow => println!("You win!"),
        Outcome::YellowWins => println!("AI wins!"),
        Outcome::RedWins if human == Color::Red => println!("You win!"),
        Outcome::RedWins => println!("AI wins!"),
        Outcome::Draw => println!("The game is a draw!"),
        Outcome::None => unreachable!("loop only exits on a terminal result"),
    }
}

fn prompt_for_column(session: &GameSession) -> connect_four_mcts::Column {
    loop {
        print!("Your move (column 1-7): ");
        io::stdout().flush().unwrap();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            continue;
        }

        let column = match input.trim().parse::<u8>() {
            Ok(n) if (1..=7).contains(&n) => n - 1,
            _ => {
                println!("Please enter a number between 1 and 7.");
                continue;
            }
        };

        if session.legal_moves().contains(&column) {
            return column;
        }
        println!("Column {} is full, choose another.", column + 1);
    }
}

struct Display<'a>(&'a GameSession);

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let history = self.0.look().history;

        // Replay the history into a column-major grid of colors, since
        // `GameSession` only exposes the move list, not a 2-D view.
        let mut grid: [Vec<Color>; 7] = Default::default();
        for (ply, &column) in history.iter().enumerate() {
            let color = if ply % 2 == 0 { Color::Yellow } else { Color::Red };
            grid[column as usize].push(color);
        }

        writeln!(f, " 1 2 3 4 5 6 7")?;
        for row in (0..6).rev() {
            write!(f, "|")?;
            for column in 0..7usize {
                let symbol = match grid[column].get(row) {
                    Some(Color::Yellow) => '○',
                    Some(Color::Red) => '●',
                    None => ' ',
                };
                write!(f, "{}|", symbol)?;
            }
            writeln!(f)?;
        }
        write!(f, "+")?;
        for _ in 0..7 {
            write!(f, "-+")?;
        }
        writeln!(f)
    }
}
