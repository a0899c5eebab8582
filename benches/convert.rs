//! Performance benchmarks for a3s-cron-editor
//!
//! Run with: cargo bench

use a3s_cron_editor::{
    generate, parse, CronEditor, CronOptions, Dialect, MonthWeek, MonthlySchedule, Schedule,
    ScheduleState, SpecificWeekDayState, TimeOfDay, Weekday, WeeklyState,
};
use criterion::{criterion_group, criterion_main, Criterion};
use std::collections::BTreeSet;

fn quartz() -> CronOptions {
    CronOptions::default().with_flavor(Dialect::Quartz)
}

fn bench_generate(c: &mut Criterion) {
    let options = quartz();
    let weekly = Schedule::Weekly(WeeklyState {
        days: BTreeSet::from([Weekday::Mon, Weekday::Wed, Weekday::Fri]),
        time: TimeOfDay::from_24_hour(9, 0, 0, true),
    });
    let monthly = Schedule::Monthly(MonthlySchedule::SpecificWeekDay(SpecificWeekDayState {
        month_week: MonthWeek::First,
        day: Weekday::Mon,
        months: 1,
        time: TimeOfDay::from_24_hour(10, 15, 0, true),
    }));

    c.bench_function("generate weekly", |b| {
        b.iter(|| generate(&weekly, &options).unwrap());
    });

    c.bench_function("generate monthly", |b| {
        b.iter(|| generate(&monthly, &options).unwrap());
    });
}

fn bench_parse(c: &mut Criterion) {
    let options = quartz();

    let mut group = c.benchmark_group("parse");
    for (label, expression) in [
        ("minutely", "0 0/15 * 1/1 * ? *"),
        ("weekly", "0 0 9 ? * MON,WED,FRI *"),
        ("yearly", "0 0 18 ? 3 FRIL *"),
        ("advanced", "0 15 10 L-2 * ? *"),
    ] {
        group.bench_function(label, |b| {
            b.iter(|| parse(expression, &options).unwrap());
        });
    }
    group.finish();
}

fn bench_editor(c: &mut Criterion) {
    c.bench_function("CronEditor::new", |b| {
        b.iter(|| CronEditor::new(quartz()).unwrap());
    });

    let mut editor = CronEditor::new(quartz()).unwrap();
    c.bench_function("CronEditor set_expression", |b| {
        b.iter(|| editor.set_expression("0 30 0/4 1/1 * ? *").unwrap());
    });
}

fn bench_state_serialization(c: &mut Criterion) {
    let state = ScheduleState::defaults(&quartz()).unwrap();

    c.bench_function("ScheduleState serialize", |b| {
        b.iter(|| state.to_json().unwrap());
    });

    let json = state.to_json().unwrap();
    c.bench_function("ScheduleState deserialize", |b| {
        b.iter(|| ScheduleState::from_json(&json).unwrap());
    });
}

criterion_group!(
    benches,
    bench_generate,
    bench_parse,
    bench_editor,
    bench_state_serialization,
);
criterion_main!(benches);
