use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::time::{sleep, Duration};

use crate::game::commentary;
use crate::game::entity::card::RepoCard;
use crate::game::entity::player::SeatId;
use crate::game::entity::stat::StatKind;
use crate::game::phase::GamePhase;
use crate::game::session::GameSession;
use crate::models::battle_log::LogKind;

/// Line-oriented terminal front end. All rules live in the session; this
/// loop only prompts, paces the reveals, and prints the battle log.
pub async fn run() -> Result<(), std::io::Error> {
    let mut input = BufReader::new(tokio::io::stdin()).lines();
    let mut session = GameSession::new();
    let mut log_cursor = 0usize;

    println!("== GIT TRUNFO ==");
    println!("Decks are dealt from each player's strongest repositories.");
    println!();

    loop {
        match session.phase() {
            GamePhase::Setup => {
                let Some(one) = prompt(&mut input, "PLAYER_ONE_ID > ").await? else {
                    return Ok(());
                };
                if one.eq_ignore_ascii_case("exit") {
                    return Ok(());
                }
                let Some(two) = prompt(&mut input, "OPPONENT_ID (or 'cpu') > ").await? else {
                    return Ok(());
                };
                if two.eq_ignore_ascii_case("exit") {
                    return Ok(());
                }

                println!("LOADING...");
                log_cursor = 0;
                if let Err(error) = session.start(&one, &two).await {
                    println!("ERROR: {error}");
                }
                drain_log(&session, &mut log_cursor);
            }
            // start() drives loading to completion before returning.
            GamePhase::Loading => sleep(Duration::from_millis(50)).await,
            GamePhase::BattleStart => {
                sleep(Duration::from_millis(crate::settings().battle_start_delay_ms)).await;
                if let Err(error) = session.battle_ready() {
                    println!("ERROR: {error}");
                }
            }
            GamePhase::TurnPlayerSelect => {
                render_table(&session);
                let Some(command) = prompt(&mut input, "stat [1-5] / auto / quit > ").await?
                else {
                    return Ok(());
                };

                let stat = match command.to_ascii_lowercase().as_str() {
                    "quit" | "q" => {
                        if let Err(error) = session.quit() {
                            println!("ERROR: {error}");
                        }
                        continue;
                    }
                    "auto" | "a" => match auto_pick(&session) {
                        Some(stat) => {
                            println!("AUTO pick: {stat}");
                            stat
                        }
                        None => continue,
                    },
                    other => match parse_stat(other) {
                        Some(stat) => stat,
                        None => {
                            println!("Unrecognized command: {other}");
                            continue;
                        }
                    },
                };

                match session.select_stat(stat) {
                    Ok(round) => reveal(&session, round.stat),
                    Err(error) => println!("ERROR: {error}"),
                }
                drain_log(&session, &mut log_cursor);
            }
            GamePhase::TurnResolve => {
                sleep(Duration::from_millis(crate::settings().resolve_delay_ms)).await;
                if let Err(error) = session.resolve_round() {
                    println!("ERROR: {error}");
                }
                drain_log(&session, &mut log_cursor);
            }
            GamePhase::GameOver => {
                if let Some(victor) = session.winner() {
                    println!();
                    println!("== GAME OVER ==  VICTOR: {}", victor.profile.login);
                }
                let Some(command) = prompt(&mut input, "restart / exit > ").await? else {
                    return Ok(());
                };
                match command.to_ascii_lowercase().as_str() {
                    "restart" | "r" => {
                        if let Err(error) = session.restart() {
                            println!("ERROR: {error}");
                        }
                        log_cursor = 0;
                    }
                    "exit" | "quit" | "q" => return Ok(()),
                    other => println!("Unrecognized command: {other}"),
                }
            }
        }
    }
}

async fn prompt(
    input: &mut Lines<BufReader<Stdin>>,
    label: &str,
) -> Result<Option<String>, std::io::Error> {
    print!("{label}");
    std::io::stdout().flush()?;
    Ok(input.next_line().await?.map(|line| line.trim().to_string()))
}

fn parse_stat(command: &str) -> Option<StatKind> {
    let index: usize = command.parse().ok()?;
    StatKind::ALL.get(index.checked_sub(1)?).copied()
}

/// Greedy pick for the human seat's own top card.
fn auto_pick(session: &GameSession) -> Option<StatKind> {
    let card = session.player(SeatId::One)?.deck.front()?;
    commentary::choose_stat(card, &StatKind::ALL)
}

fn drain_log(session: &GameSession, cursor: &mut usize) {
    let entries = session.log().entries();
    if *cursor > entries.len() {
        *cursor = 0;
    }
    for entry in &entries[*cursor..] {
        let tag = match entry.kind {
            LogKind::Info => "INFO",
            LogKind::Commentary => "CMNT",
            LogKind::Combat => "CMBT",
        };
        println!("[{tag}] {}", entry.text);
    }
    *cursor = session.log().len();
}

fn render_table(session: &GameSession) {
    let Some((one, two)) = session.players() else {
        return;
    };
    println!();
    println!(
        "{} [{} cards, score {:02}]  vs  {} [{} cards, score {:02}]",
        one.profile.login,
        one.deck.len(),
        one.score,
        two.profile.login,
        two.deck.len(),
        two.score,
    );
    if let Some(card) = one.deck.front() {
        println!("Your card:");
        render_card(card);
    }
    println!("Opponent's card is face down.");
}

fn reveal(session: &GameSession, stat: StatKind) {
    let Some((one, two)) = session.players() else {
        return;
    };
    if let (Some(own), Some(theirs)) = (one.deck.front(), two.deck.front()) {
        println!();
        println!("Comparing {}:", stat.label());
        println!(
            "  {:<24} {:>8}",
            format!("{} ({})", own.name, one.profile.login),
            stat.value_of(own)
        );
        println!(
            "  {:<24} {:>8}",
            format!("{} ({})", theirs.name, two.profile.login),
            stat.value_of(theirs)
        );
    }
}

fn render_card(card: &RepoCard) {
    println!("  +-- {} ", card.name);
    if let Some(language) = &card.language {
        println!("  | {language}");
    }
    for (index, stat) in StatKind::ALL.iter().enumerate() {
        println!(
            "  | [{}] {:<12} {:>8}",
            index + 1,
            stat.label(),
            stat.value_of(card)
        );
    }
    println!("  +--");
}
