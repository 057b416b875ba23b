use ludo::{LudoGame, Seat, TokenSlot};
use rand::random_range;

const TURNS: usize = 300;

fn main() {
    env_logger::init();

    let players = ['A', 'B', 'C', 'D'];
    let turns: Vec<(char, u8)> = (0..TURNS)
        .map(|_| {
            let seat = players[random_range(0..players.len())];
            (seat, random_range(1..=6))
        })
        .collect();

    let mut game = LudoGame::new();
    match game.play_game(&players, &turns) {
        Ok(positions) => {
            println!("Final positions after {} scripted turns:", turns.len());
            for (i, &letter) in players.iter().enumerate() {
                println!(
                    "  Seat {}: {:>3}  {:>3}",
                    letter,
                    positions[2 * i],
                    positions[2 * i + 1]
                );
            }
            let finish = game.board().finish();
            if finish.is_empty() {
                println!("No token made it to the finish.");
            } else {
                let order = finish
                    .iter()
                    .map(|t| t.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("Finish order: {}", order);
            }
            for seat in Seat::ALL {
                let state = game.player(seat);
                if state.doubled() {
                    println!(
                        "Seat {} ended doubled on {}",
                        seat,
                        state.space(TokenSlot::First)
                    );
                }
            }
        }
        Err(err) => eprintln!("Match setup failed: {}", err),
    }
}
