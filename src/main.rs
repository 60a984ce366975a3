//! Piece supply simulator (interactive menu binary).
//!
//! Reads numeric menu selections from stdin, one per line, and reprints
//! the queue/reserve state after every command. Anything that does not
//! parse as a known option is reported as invalid and the menu is shown
//! again; EOF exits cleanly like the exit command.

use std::env;
use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

use piece_supply::core::Supply;
use piece_supply::term::SupplyView;

fn main() -> Result<()> {
    let seed = match parse_seed_arg()? {
        Some(seed) => seed,
        None => clock_seed(),
    };

    let mut supply = Supply::new(seed);
    let view = SupplyView::new();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        println!("{}", view.queue_line(supply.queue()));
        println!("{}", view.reserve_line(supply.reserve_stack()));
        println!();
        print!("{}", view.menu());
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            // EOF behaves like the exit command.
            None => break,
        };

        match line.trim().parse::<u32>() {
            Ok(0) => {
                println!("exiting");
                break;
            }
            Ok(1) => match supply.play() {
                Ok(piece) => println!("played {}", view.cell(&piece)),
                Err(err) => println!("cannot play: {}", err),
            },
            Ok(2) => match supply.reserve() {
                Ok(piece) => println!("reserved {}", view.cell(&piece)),
                Err(err) => println!("cannot reserve: {}", err),
            },
            Ok(3) => match supply.use_reserve() {
                Ok(piece) => println!("used {} from the reserve", view.cell(&piece)),
                Err(err) => println!("cannot use reserve: {}", err),
            },
            Ok(4) => match supply.swap_one() {
                Ok(()) => println!("swapped queue head with reserve top"),
                Err(err) => println!("cannot swap: {}", err),
            },
            Ok(5) => match supply.swap_three() {
                Ok(()) => println!("swapped the first three pieces with the reserve"),
                Err(err) => println!("cannot swap: {}", err),
            },
            Ok(_) | Err(_) => println!("invalid option"),
        }
    }

    Ok(())
}

/// Optional first CLI argument pins the RNG seed for reproducible sessions.
fn parse_seed_arg() -> Result<Option<u32>> {
    match env::args().nth(1) {
        None => Ok(None),
        Some(raw) => raw
            .parse::<u32>()
            .map(Some)
            .map_err(|_| anyhow!("invalid seed: {}", raw)),
    }
}

/// Seed from the system clock (sub-second bits mixed with the seconds).
fn clock_seed() -> u32 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.subsec_nanos() ^ elapsed.as_secs() as u32,
        Err(_) => 1,
    }
}
