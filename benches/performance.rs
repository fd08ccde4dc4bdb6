use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fantasy::columns::Column;
use fantasy::controller::{SortDirection, TableController};
use fantasy::fixtures::create_mock_record;
use fantasy::roster::{ColumnStats, PositionFilter, Roster};
use fantasy::scoring::score;
use fantasy::tui::action::{Action, TableAction};
use fantasy::tui::reducer::reduce;
use fantasy::tui::state::AppState;
use fantasy::types::{Dataset, RawRecord};
use std::sync::Arc;

/// Create a large roster's worth of raw records
fn create_sample_records(count: usize) -> Vec<RawRecord> {
    (0..count)
        .map(|i| {
            let position = (i % 5) as u8 + 1;
            let kills = 1.0 + (i * 37 % 90) as f64 / 10.0;
            create_mock_record(&format!("player{:03}", i), &format!("Team {}", i % 20), position, kills)
        })
        .collect()
}

/// Benchmark scoring and roster construction
fn bench_roster(c: &mut Criterion) {
    let records = create_sample_records(200);

    let mut group = c.benchmark_group("roster");

    group.bench_function("score_one", |b| {
        b.iter(|| score(black_box(&records[0].stats)))
    });

    group.bench_function("load_200", |b| {
        b.iter(|| Roster::load(black_box(Dataset::Regular), black_box(&records)))
    });

    let roster = Roster::load(Dataset::Regular, &records);
    group.bench_function("column_stats_200", |b| {
        b.iter(|| {
            let view = roster.filtered(&PositionFilter::default());
            ColumnStats::compute(black_box(&view))
        })
    });

    group.finish();
}

/// Benchmark table controller operations
fn bench_controller(c: &mut Criterion) {
    let roster = Roster::load(Dataset::Regular, &create_sample_records(200));
    let mut controller = TableController::default();
    controller.bind(&roster);

    let mut group = c.benchmark_group("controller");

    group.bench_function("sort_by_gpm", |b| {
        b.iter(|| {
            let mut c = controller.clone();
            c.sort_by(&roster, black_box(Column::Gpm), SortDirection::Descending);
            c
        })
    });

    group.bench_function("sort_by_nickname", |b| {
        b.iter(|| {
            let mut c = controller.clone();
            c.sort_by(&roster, black_box(Column::Nickname), SortDirection::Ascending);
            c
        })
    });

    group.finish();
}

/// Benchmark reducer action dispatch
fn bench_reducer_dispatch(c: &mut Criterion) {
    let roster = Arc::new(Roster::load(Dataset::Regular, &create_sample_records(200)));
    let (state, _) = reduce(AppState::default(), Action::RosterLoaded(Dataset::Regular, roster));

    let mut group = c.benchmark_group("reducer");

    group.bench_function("click_header", |b| {
        b.iter(|| {
            let (new_state, _effect) = reduce(
                black_box(state.clone()),
                black_box(Action::Table(TableAction::ClickHeader(4))),
            );
            new_state
        })
    });

    group.bench_function("toggle_position", |b| {
        b.iter(|| {
            let (new_state, _effect) = reduce(
                black_box(state.clone()),
                black_box(Action::Table(TableAction::TogglePosition(3))),
            );
            new_state
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_roster,
    bench_controller,
    bench_reducer_dispatch
);
criterion_main!(benches);
