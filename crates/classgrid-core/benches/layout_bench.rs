//! Benchmarks for per-render layout recomputation

use chrono::NaiveDate;
use classgrid_core::models::{AlternationLayout, DayLabel, WeekParity};
use classgrid_core::{
    EnglishMonths, GridLayout, Schedule, SemesterPlanning, Session, ViewMode, ViewState,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Generate a schedule spread over the whole week
fn generate_schedule(count: usize) -> Schedule {
    let sessions = (0..count)
        .map(|i| {
            let start_hour = 7 + (i % 12) as u8;
            Session {
                name: format!("UV{:02}", i),
                kind: Some("TD".to_string()),
                room: None,
                day: DayLabel::all()[i % 7],
                week: match i % 3 {
                    0 => Some(WeekParity::A),
                    1 => Some(WeekParity::B),
                    _ => None,
                },
                start_hour,
                start_min: 15 * (i % 4) as u8,
                end_hour: start_hour + 2,
                end_min: 0,
            }
        })
        .collect();
    Schedule::new(SemesterPlanning::new(WeekParity::A), sessions)
}

fn layout_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_layout");
    let state = ViewState::new(NaiveDate::from_ymd_opt(2026, 10, 21).unwrap())
        .with_mode(ViewMode::Complete);

    for count in [10, 100, 1000] {
        let schedule = generate_schedule(count);
        group.bench_with_input(
            BenchmarkId::new("sessions", count),
            &schedule,
            |b, schedule| {
                b.iter(|| {
                    black_box(GridLayout::compute(
                        schedule,
                        &state,
                        AlternationLayout::FullWidth,
                        &EnglishMonths,
                    ))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, layout_benchmark);
criterion_main!(benches);
