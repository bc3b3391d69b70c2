//! Integration tests for pricedash-catalog across selection, derivation and scaling.

use pricedash_catalog::{
    Catalog, Dashboard, ModelRecord, Provider, SelectionState, SettingsControls, ToggleOutcome,
    axis_bound, derive_chart_data,
};

/// Six-model catalog with the price spread of the real one.
fn test_catalog() -> Catalog {
    Catalog::new(vec![
        ModelRecord::new("flash-lite", "Flash-Lite", Provider::Google, 0.075, 0.3),
        ModelRecord::new("small", "Small", Provider::MistralAI, 0.1, 0.3),
        ModelRecord::new("v3", "V3", Provider::DeepSeek, 0.27, 1.1),
        ModelRecord::new("sonnet", "Sonnet", Provider::Anthropic, 3.0, 15.0),
        ModelRecord::new("o1", "o1", Provider::OpenAI, 15.0, 60.0),
        ModelRecord::new("pro", "Pro", Provider::XAi, 150.0, 600.0),
    ])
    .unwrap()
}

/// Selection containing exactly the catalog entries whose bit is set in `mask`.
fn selection_from_mask(catalog: &Catalog, mask: u32) -> SelectionState {
    let mut state = SelectionState::new(catalog);
    state.deselect_all();
    for (i, model) in catalog.models().iter().enumerate() {
        if mask & (1u32 << i) != 0 {
            state.toggle(catalog, &model.id);
        }
    }
    state
}

#[test]
fn test_derive_matches_every_subset() {
    let catalog = test_catalog();
    let n = catalog.len();

    for mask in 0..(1u32 << n) {
        let state = selection_from_mask(&catalog, mask);
        let rows = derive_chart_data(&catalog, &state);

        let expected: Vec<&str> = catalog
            .models()
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1u32 << *i) != 0)
            .map(|(_, m)| m.id.as_str())
            .collect();
        let actual: Vec<&str> = rows.iter().map(|m| m.id.as_str()).collect();

        assert_eq!(actual, expected, "mask {mask:#b}");
        assert_eq!(rows.len(), state.len());
    }
}

#[test]
fn test_axis_bound_covers_every_subset() {
    let catalog = test_catalog();

    for mask in 1..(1u32 << catalog.len()) {
        let state = selection_from_mask(&catalog, mask);
        let rows = derive_chart_data(&catalog, &state);
        let bound = axis_bound(&rows);
        let max = rows.iter().map(|r| r.max_price()).fold(0.0, f64::max);

        assert!(bound >= max, "mask {mask:#b}: {bound} < {max}");
        if max < 10.0 {
            assert_eq!(bound, max.ceil());
        } else {
            assert_eq!(bound % 20.0, 0.0);
            assert!(bound - max < 20.0);
        }
    }
}

#[test]
fn test_toggle_round_trip_from_every_subset() {
    let catalog = test_catalog();

    for mask in 1..(1u32 << catalog.len()) {
        let original = selection_from_mask(&catalog, mask);
        for model in catalog.models() {
            let mut state = original.clone();
            let first = state.toggle(&catalog, &model.id);
            let second = state.toggle(&catalog, &model.id);
            assert_eq!(state, original, "mask {mask:#b}, id {}", model.id);
            if first == ToggleOutcome::RejectedLastSelected {
                assert_eq!(second, ToggleOutcome::RejectedLastSelected);
            }
        }
    }
}

#[test]
fn test_toggle_out_of_empty_selection_sticks() {
    let catalog = test_catalog();
    let mut state = selection_from_mask(&catalog, 0);

    assert_eq!(state.toggle(&catalog, "v3"), ToggleOutcome::Enabled);
    assert_eq!(
        state.toggle(&catalog, "v3"),
        ToggleOutcome::RejectedLastSelected
    );
    assert_eq!(state.len(), 1);
}

#[test]
fn test_single_toggles_never_empty_the_selection() {
    let catalog = test_catalog();
    let mut state = SelectionState::new(&catalog);

    for _ in 0..3 {
        for model in catalog.models() {
            if state.is_enabled(&model.id) {
                state.toggle(&catalog, &model.id);
            }
        }
    }

    assert_eq!(state.len(), 1);
}

#[test]
fn test_default_excludes_last_two_by_position() {
    // The last two are not the two most expensive here.
    let catalog = Catalog::new(vec![
        ModelRecord::new("costly", "Costly", Provider::OpenAI, 150.0, 600.0),
        ModelRecord::new("mid", "Mid", Provider::Google, 1.0, 4.0),
        ModelRecord::new("cheap", "Cheap", Provider::Google, 0.1, 0.4),
        ModelRecord::new("cheaper", "Cheaper", Provider::Google, 0.05, 0.1),
    ])
    .unwrap();
    let state = SelectionState::new(&catalog);

    assert!(state.is_enabled("costly"));
    assert!(state.is_enabled("mid"));
    assert!(!state.is_enabled("cheap"));
    assert!(!state.is_enabled("cheaper"));
}

#[test]
fn test_builtin_dashboard_session() {
    let mut dashboard = Dashboard::new(Catalog::builtin().unwrap());
    assert_eq!(dashboard.rows().len(), 17);
    assert_eq!(dashboard.axis_bound(), 60.0);

    dashboard.select_all();
    assert_eq!(dashboard.axis_bound(), 600.0);

    dashboard.deselect_all();
    assert!(dashboard.rows().is_empty());
    assert_eq!(dashboard.axis_bound(), 20.0);

    assert_eq!(dashboard.toggle("deepseek-r1"), ToggleOutcome::Enabled);
    assert_eq!(dashboard.axis_bound(), 3.0);
    assert_eq!(
        dashboard.toggle("deepseek-r1"),
        ToggleOutcome::RejectedLastSelected
    );

    assert_eq!(dashboard.toggle("not-a-model"), ToggleOutcome::UnknownId);
    assert_eq!(dashboard.rows().len(), 1);
}
