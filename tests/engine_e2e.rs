//! End-to-end tests: catalog file → session → edits → shareable address.

use std::io::Write;

use rentlens::filter::{codec, RangeSide};
use rentlens::{handle_event, Action, AppState, Config, Event, FilterState};

fn write_catalog() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"[
            {{"id": 1, "type": "Studio", "price": 2000, "size": 400, "features": ["Pool"], "title": "Compact studio", "location": "SoMa"}},
            {{"id": 2, "type": "1BR", "price": 3000, "size": 650, "features": ["Gym", "Pool"], "title": "Bright one-bedroom", "location": "Mission"}},
            {{"id": 3, "type": "1BR", "price": 4200, "size": 700, "features": ["Gym"], "title": "Corner one-bedroom", "location": "Nob Hill"}}
        ]"#
    )
    .expect("write catalog");
    file
}

fn dispatch(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
    handle_event(state, &event).expect("handler is infallible")
}

fn published_query(actions: &[Action]) -> Option<String> {
    actions.iter().find_map(|a| match a {
        Action::ReplaceQuery { pairs } => Some(codec::format_query(pairs)),
        Action::ScheduleSettle { .. } => None,
    })
}

#[test]
fn shared_address_reproduces_the_same_view() {
    let file = write_catalog();
    let catalog = rentlens::catalog::load_catalog(file.path()).expect("load catalog");

    // one user narrows the view through edits
    let mut first = AppState::new(catalog.clone());
    dispatch(&mut first, Event::ToggleType("1BR".to_string()));
    dispatch(&mut first, Event::SetPriceRange { min: 100, max: 4000 });
    let (_, actions) = dispatch(
        &mut first,
        Event::SetSizeBound {
            side: RangeSide::Min,
            raw: "600".to_string(),
        },
    );
    let address = published_query(&actions).expect("query published");

    // another session opens the shared address and sees the same listings
    let second = AppState::with_query(catalog, &codec::parse_query(&address));
    assert_eq!(second.filters, first.filters);
    let ids: Vec<u32> = second.visible.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![2]);
}

#[test]
fn the_default_view_has_a_canonical_empty_address() {
    let file = write_catalog();
    let catalog = rentlens::catalog::load_catalog(file.path()).expect("load catalog");

    let mut state = AppState::with_query(catalog, &codec::parse_query("types=1BR"));
    let (_, actions) = dispatch(&mut state, Event::ResetFilters);

    assert_eq!(published_query(&actions).as_deref(), Some(""));
    assert_eq!(state.filters, FilterState::default());
    assert_eq!(state.visible.len(), 3);
}

#[test]
fn rapid_edits_settle_exactly_once() {
    let file = write_catalog();
    let catalog = rentlens::catalog::load_catalog(file.path()).expect("load catalog");
    let config = Config {
        settle_delay_ms: 10,
        trace_level: None,
    };
    let mut state = rentlens::initialize(&config, catalog, &[]);

    // three edits in quick succession, timers still pending
    let mut generations = vec![];
    for label in ["Gym", "Pool", "Gym"] {
        let (_, actions) = dispatch(&mut state, Event::ToggleFeature(label.to_string()));
        for action in actions {
            if let Action::ScheduleSettle { generation, delay_ms } = action {
                assert_eq!(delay_ms, 10);
                generations.push(generation);
            }
        }
    }
    assert_eq!(generations, vec![1, 2, 3]);

    // all three timers fire; only the last one settles
    let mut settles = 0;
    for generation in generations {
        let (rendered, _) = dispatch(&mut state, Event::SettleElapsed { generation });
        if rendered {
            settles += 1;
        }
    }
    assert_eq!(settles, 1);
    assert!(!state.busy);

    // net effect of the three toggles: only "Pool" remains required
    assert_eq!(state.filters.selected_features, vec!["Pool"]);
    let ids: Vec<u32> = state.visible.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn favourites_survive_filtering_but_not_the_address() {
    let file = write_catalog();
    let catalog = rentlens::catalog::load_catalog(file.path()).expect("load catalog");
    let mut state = AppState::new(catalog);

    dispatch(&mut state, Event::ToggleFavorite { id: 3 });
    let (_, actions) = dispatch(&mut state, Event::ToggleType("Studio".to_string()));

    // listing 3 is filtered out of view but stays favourited,
    // and the published address knows nothing about favourites
    assert!(state.favorites.contains(3));
    assert!(!state.visible.iter().any(|l| l.id == 3));
    assert_eq!(published_query(&actions).as_deref(), Some("types=Studio"));

    let snapshot = state.favorites.snapshot();
    assert_eq!(snapshot, "[3]");
}
