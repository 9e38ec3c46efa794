use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use chess_duel::config::GameConfig;
use chess_duel::models::GameModel;
use chess_duel::ui::{parse_click, render_board};

fn init_logging(config: &GameConfig) {
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, &config.log_level),
    )
    .format_timestamp(None)
    .init();
}

fn main() -> Result<()> {
    let config = GameConfig::discover().context("loading configuration")?;
    init_logging(&config);

    let mut game = GameModel::from_config(&config).context("setting up the board")?;
    log::info!("starting game: {}", game.to_fen());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print!("{}", render_board(&game));

    for line in stdin.lock().lines() {
        let line = line.context("reading input")?;
        let command = line.trim();
        match command {
            "" => continue,
            "q" | "quit" => break,
            "fen" => println!("{}", game.to_fen()),
            _ => match parse_click(command) {
                Ok(square) => {
                    game.process_click(square);
                    print!("{}", render_board(&game));
                }
                Err(e) => eprintln!("{e}"),
            },
        }
        stdout.flush().context("writing board")?;
    }

    Ok(())
}
