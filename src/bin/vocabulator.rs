// This file is part of vocabulator.
//
// vocabulator is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// vocabulator is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::io::{self, Write};

use clap::{CommandFactory, Parser};
use log::debug;

use vocabulator::{
    COPYRIGHT, LONG_VERSION, ROUNDS,
    picker::PickerRandom,
    quiz::{Outcome, Quiz},
    utils,
    words::WordStore,
};

/// Vocabulator
///
/// A German and English vocabulary quiz. Each round choose a direction,
/// then type the translation of the word shown.
#[derive(Parser, Debug)]
#[command(long_version = LONG_VERSION, about)]
struct Args {
    /// How many rounds to play
    #[arg(default_value_t = ROUNDS as u64, long, value_parser = clap::value_parser!(u64).range(1..))]
    rounds: u64,

    /// Seed the word picker to replay the same session
    #[arg(long)]
    seed: Option<u64>,

    /// Mark answers with plain text instead of color
    #[arg(long)]
    ascii: bool,

    /// Log at the debug level
    #[arg(long, short)]
    verbose: bool,

    /// Build the manpage
    #[arg(long)]
    man: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    utils::init_logger(args.verbose);

    if args.man {
        let mut buffer: Vec<u8> = Vec::default();
        let cmd = Args::command().name("vocabulator").long_version(None);
        let man = clap_mangen::Man::new(cmd).date("2026-10-18");

        man.render(&mut buffer)?;
        write!(buffer, "{COPYRIGHT}")?;

        io::stdout().write_all(&buffer)?;
        return Ok(());
    }

    debug!("{args:?}");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut quiz = Quiz::new(
        WordStore::default(),
        stdin.lock(),
        stdout.lock(),
        PickerRandom::new(args.seed),
    );
    quiz.rounds = usize::try_from(args.rounds)?;

    if args.ascii {
        quiz.style.ascii();
    }

    match quiz.run()? {
        Outcome::Completed(summary) => debug!("completed: {summary}"),
        Outcome::Quit => debug!("quit"),
        Outcome::InputExhausted => debug!("the input ended"),
    }

    Ok(())
}
