//! Interactive host shim and entry point.
//!
//! This binary is the thin integration layer between the rentlens library and
//! a terminal host: it loads the catalog and configuration, seeds the session
//! from an optional incoming query string, then maps line-based commands to
//! engine events and executes the resulting actions.
//!
//! # Usage
//!
//! ```text
//! rentlens <catalog.json> [query] [config.toml]
//! ```
//!
//! # Commands
//!
//! - `type <label>` — toggle a type (use `All` to clear)
//! - `feature <label>` — toggle a required feature
//! - `price <min> <max>` — set the price range
//! - `size min|max <text>` — edit a size bound (blank clears)
//! - `query <encoded>` — adopt an external query string
//! - `fav <id>` — toggle a favourite
//! - `reset` — clear all filters
//! - `quit`
//!
//! # Action Execution
//!
//! `ReplaceQuery` replaces the printed address line; `ScheduleSettle` is kept
//! as the single pending timer and delivered (or discarded, if superseded)
//! before the next command is processed — the CLI analogue of last-transition-
//! wins timer cancellation.

use std::io::BufRead;
use std::time::{Duration, Instant};

use rentlens::filter::{codec, RangeSide};
use rentlens::{handle_event, Action, AppState, Config, Event};

/// The armed settle timer, at most one at a time.
struct PendingSettle {
    generation: u64,
    deadline: Instant,
}

fn main() -> rentlens::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(catalog_path) = args.first() else {
        eprintln!("usage: rentlens <catalog.json> [query] [config.toml]");
        std::process::exit(2);
    };
    let incoming_query = args.get(1).map(String::as_str).unwrap_or("");

    let config = match args.get(2) {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    rentlens::observability::init_tracing(&config);

    let catalog = rentlens::catalog::load_catalog(catalog_path)?;
    let pairs = codec::parse_query(incoming_query);
    let mut state = rentlens::initialize(&config, catalog, &pairs);
    let mut pending: Option<PendingSettle> = None;

    render(&state);

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;

        deliver_pending_settle(&mut state, &mut pending);

        let Some(event) = parse_command(line.trim()) else {
            if line.trim() == "quit" {
                break;
            }
            eprintln!("unrecognized command: {line}");
            continue;
        };

        match handle_event(&mut state, &event) {
            Ok((should_render, actions)) => {
                for action in actions {
                    execute_action(&action, &mut pending);
                }
                if should_render {
                    render(&state);
                }
            }
            Err(e) => eprintln!("error: {e}"),
        }
    }

    Ok(())
}

/// Maps a command line to an engine event.
fn parse_command(line: &str) -> Option<Event> {
    let mut words = line.split_whitespace();
    match words.next()? {
        "type" => Some(Event::ToggleType(words.next()?.to_string())),
        "feature" => Some(Event::ToggleFeature(words.next()?.to_string())),
        "price" => {
            let min = words.next()?.parse().ok()?;
            let max = words.next()?.parse().ok()?;
            Some(Event::SetPriceRange { min, max })
        }
        "size" => {
            let side = match words.next()? {
                "min" => RangeSide::Min,
                "max" => RangeSide::Max,
                _ => return None,
            };
            // remaining text may be blank, which clears the bound
            Some(Event::SetSizeBound {
                side,
                raw: words.collect::<Vec<_>>().join(" "),
            })
        }
        "query" => Some(Event::QueryChanged {
            pairs: codec::parse_query(words.next().unwrap_or("")),
        }),
        "fav" => Some(Event::ToggleFavorite {
            id: words.next()?.parse().ok()?,
        }),
        "reset" => Some(Event::ResetFilters),
        _ => None,
    }
}

/// Executes a host action. A new settle timer replaces any pending one.
fn execute_action(action: &Action, pending: &mut Option<PendingSettle>) {
    match action {
        Action::ReplaceQuery { pairs } => {
            println!("address: ?{}", codec::format_query(pairs));
        }
        Action::ScheduleSettle { generation, delay_ms } => {
            *pending = Some(PendingSettle {
                generation: *generation,
                deadline: Instant::now() + Duration::from_millis(*delay_ms),
            });
        }
    }
}

/// Delivers the pending settle signal if its deadline has already passed.
///
/// A timer whose deadline is still ahead stays pending: a rapid follow-up
/// edit replaces it through `ScheduleSettle` instead of waiting it out, which
/// is what makes last-transition-wins cancellation observable in this host.
/// Stale generations are handled inside the engine; the shim just feeds the
/// signal back as an event.
fn deliver_pending_settle(state: &mut AppState, pending: &mut Option<PendingSettle>) {
    let due = pending
        .as_ref()
        .map_or(false, |timer| Instant::now() >= timer.deadline);
    if !due {
        return;
    }
    let Some(timer) = pending.take() else {
        return;
    };
    if let Ok((true, _)) = handle_event(
        state,
        &Event::SettleElapsed {
            generation: timer.generation,
        },
    ) {
        render(state);
    }
}

/// Prints facets, the projected listings, and the session status line.
fn render(state: &AppState) {
    println!(
        "types: {}  features: {}",
        state.index.types.join(", "),
        state.index.features.join(", ")
    );
    println!(
        "{} result(s){}",
        state.visible.len(),
        if state.busy { " [loading]" } else { "" }
    );
    for listing in &state.visible {
        let fav = if state.favorites.contains(listing.id) { "*" } else { " " };
        println!(
            " {fav} #{id} {kind:<8} ${price}/mo  {size} sqft  [{features}]",
            id = listing.id,
            kind = listing.kind,
            price = listing.price,
            size = listing.size,
            features = listing.features.join(", ")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn busy_state() -> AppState {
        let mut state = AppState::new(vec![]);
        let _ = handle_event(&mut state, &Event::ToggleType("1BR".to_string()));
        assert!(state.busy);
        state
    }

    #[test]
    fn undue_timer_stays_pending_and_is_replaced_by_the_next_transition() {
        let mut state = busy_state();
        let mut pending = Some(PendingSettle {
            generation: state.generation,
            deadline: Instant::now() + Duration::from_secs(60),
        });

        deliver_pending_settle(&mut state, &mut pending);
        assert!(state.busy, "a timer that is not due must not be waited out");
        assert!(pending.is_some());

        // a rapid follow-up edit re-arms the timer for its own generation
        execute_action(
            &Action::ScheduleSettle {
                generation: state.generation + 1,
                delay_ms: 10,
            },
            &mut pending,
        );
        assert_eq!(
            pending.as_ref().map(|t| t.generation),
            Some(state.generation + 1)
        );
    }

    #[test]
    fn due_timer_is_delivered_and_settles() {
        let mut state = busy_state();
        let mut pending = Some(PendingSettle {
            generation: state.generation,
            deadline: Instant::now() - Duration::from_millis(1),
        });

        deliver_pending_settle(&mut state, &mut pending);
        assert!(!state.busy);
        assert!(pending.is_none());
    }

    #[test]
    fn due_timer_of_a_superseded_transition_is_discarded() {
        let mut state = busy_state();
        let superseded = state.generation;
        let _ = handle_event(&mut state, &Event::ToggleType("Studio".to_string()));
        let mut pending = Some(PendingSettle {
            generation: superseded,
            deadline: Instant::now() - Duration::from_millis(1),
        });

        deliver_pending_settle(&mut state, &mut pending);
        assert!(state.busy, "the in-flight transition must keep its busy flag");
        assert!(pending.is_none());
    }
}
