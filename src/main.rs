//! Gomoku AI demo CLI
//!
//! Runs the engine through a few fixed scenarios and prints the chosen
//! moves, timings and search statistics.

use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use gomoku::{AIEngine, AIMove, Board, Difficulty, EngineConfig, Pos, Stone};

#[derive(Parser, Debug)]
#[command(author, version, about = "Exercise the Gomoku move search on fixed positions")]
struct Cli {
    /// Scenario to run
    #[arg(value_enum, default_value_t = Scenario::All)]
    scenario: Scenario,

    /// Restrict to one difficulty (easy, medium, hard, expert)
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Wall-clock budget per move, overriding GOMOKU_AI_TIME_LIMIT_MS
    #[arg(long)]
    time_limit_ms: Option<u64>,

    /// Print results as JSON lines instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Scenario {
    Empty,
    Win,
    Block,
    Compare,
    Stats,
    All,
}

struct Demo {
    engine: AIEngine,
    difficulty: Option<Difficulty>,
    json: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match EngineConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(ms) = cli.time_limit_ms {
        config = config.with_time_limit(Duration::from_millis(ms));
    }
    if let Err(e) = config.validate() {
        eprintln!("configuration error: {e}");
        return ExitCode::FAILURE;
    }

    let demo = Demo {
        engine: AIEngine::with_config(config),
        difficulty: cli.difficulty,
        json: cli.json,
    };

    let scenarios = if cli.scenario == Scenario::All {
        vec![
            Scenario::Empty,
            Scenario::Win,
            Scenario::Block,
            Scenario::Compare,
            Scenario::Stats,
        ]
    } else {
        vec![cli.scenario]
    };

    for scenario in scenarios {
        if !demo.json {
            println!("\n--- {scenario:?} ---");
        }
        match scenario {
            Scenario::Empty => demo.empty_board(),
            Scenario::Win => demo.win_detection(),
            Scenario::Block => demo.block_detection(),
            Scenario::Compare => demo.compare(),
            Scenario::Stats => demo.statistics(),
            Scenario::All => {}
        }
    }

    ExitCode::SUCCESS
}

impl Demo {
    fn difficulties(&self) -> Vec<Difficulty> {
        self.difficulty.map_or_else(|| Difficulty::ALL.to_vec(), |d| vec![d])
    }

    fn run(&self, label: &str, board: &Board, last: Option<Pos>, difficulty: Difficulty) -> AIMove {
        let start = Instant::now();
        let mv = self.engine.compute_move(board, last, difficulty);
        let elapsed = start.elapsed();

        if self.json {
            let line = serde_json::json!({
                "scenario": label,
                "difficulty": difficulty,
                "move": mv,
                "elapsed_ms": elapsed.as_secs_f64() * 1000.0,
            });
            println!("{line}");
        } else {
            println!(
                "  {:<6}: ({:2},{:2}) score:{:7} time:{elapsed:?}",
                difficulty.as_str(),
                mv.x,
                mv.y,
                mv.score
            );
        }
        mv
    }

    fn empty_board(&self) {
        let board = Board::new();
        for difficulty in self.difficulties() {
            self.run("empty", &board, None, difficulty);
        }
    }

    fn win_detection(&self) {
        let board = four_in_a_row(Stone::Engine);
        let difficulty = self.difficulty.unwrap_or(Difficulty::Medium);
        let mv = self.run("win", &board, Some(Pos::new(6, 6)), difficulty);
        self.report(is_line_end(mv), "winning move at (4,7) or (9,7)");
    }

    fn block_detection(&self) {
        let board = four_in_a_row(Stone::Human);
        let difficulty = self.difficulty.unwrap_or(Difficulty::Medium);
        let mv = self.run("block", &board, Some(Pos::new(8, 7)), difficulty);
        self.report(is_line_end(mv), "block at (4,7) or (9,7)");
    }

    fn compare(&self) {
        let board = complex_board();
        if !self.json {
            println!("  {} stones on the board", board.stone_count());
            print_board(&board);
        }
        for difficulty in self.difficulties() {
            self.engine.clear_cache();
            self.run("compare", &board, Some(Pos::new(7, 7)), difficulty);
        }
    }

    fn statistics(&self) {
        let stats = self.engine.stats();
        if self.json {
            println!("{}", serde_json::json!({ "scenario": "stats", "stats": stats }));
        } else {
            println!("  Nodes searched:     {}", stats.nodes_searched);
            println!("  Cutoffs:            {}", stats.cutoffs);
            println!("  Pruning efficiency: {:.1}%", stats.pruning_efficiency());
            println!("  Depth reached:      {}", stats.depth_reached);
            println!("  Cache entries:      {}", stats.cache_entries);
            println!("  Cache hits/misses:  {}/{}", stats.cache_hits, stats.cache_misses);
            println!("  Last search:        {:?}", stats.last_search_duration);
        }

        self.engine.clear_cache();
        if !self.json {
            println!("  Entries after clear: {}", self.engine.stats().cache_entries);
        }
    }

    fn report(&self, ok: bool, expected: &str) {
        if self.json {
            return;
        }
        if ok {
            println!("  Result: PASS");
        } else {
            println!("  Result: FAIL - expected {expected}");
        }
    }
}

/// Text diagram: `X` human, `O` engine, `.` empty.
fn print_board(board: &Board) {
    for row in board.to_grid() {
        let line: String = row
            .iter()
            .map(|&code| match code {
                1 => 'X',
                2 => 'O',
                _ => '.',
            })
            .collect();
        println!("  {line}");
    }
}

/// Four stones at (5,7)..(8,7), open at both ends.
fn four_in_a_row(side: Stone) -> Board {
    let mut board = Board::new();
    for x in 5..9 {
        board.place_stone(Pos::new(x, 7), side);
    }
    board
}

fn is_line_end(mv: AIMove) -> bool {
    mv.pos() == Pos::new(4, 7) || mv.pos() == Pos::new(9, 7)
}

/// Clustered middle-game position with alternating sides.
fn complex_board() -> Board {
    const STONES: [(u8, u8); 21] = [
        (7, 7),
        (7, 8),
        (6, 7),
        (6, 8),
        (8, 7),
        (5, 5),
        (5, 6),
        (6, 5),
        (6, 6),
        (8, 8),
        (8, 9),
        (9, 8),
        (9, 9),
        (3, 3),
        (3, 4),
        (4, 3),
        (4, 4),
        (10, 10),
        (10, 11),
        (11, 10),
        (11, 11),
    ];

    let mut board = Board::new();
    for (i, &(x, y)) in STONES.iter().enumerate() {
        let side = if i % 2 == 0 { Stone::Human } else { Stone::Engine };
        board.place_stone(Pos::new(x, y), side);
    }
    board
}
