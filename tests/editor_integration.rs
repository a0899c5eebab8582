//! Cron editor integration tests
//!
//! End-to-end checks of the generator and parser together across both
//! dialects and both hour display modes: round-trips, idempotence, the
//! field-count gate, advanced fallback, and the editor facade.

use a3s_cron_editor::{
    classify, generate, parse, AdvancedState, CronEditor, CronEditorError, CronOptions,
    DailySchedule, Dialect, EveryDaysState, EveryWeekDayState, HourDisplay, HourlyState,
    MinutelyState, MonthDay, MonthWeek, MonthlySchedule, Schedule, Shape, SpecificDayState,
    SpecificMonthDayState, SpecificMonthWeekState, SpecificWeekDayState, Tab, TimeOfDay,
    Weekday, WeeklyState, YearlySchedule,
};
use std::collections::BTreeSet;

fn options(dialect: Dialect, use_24_hour_time: bool) -> CronOptions {
    CronOptions::default()
        .with_flavor(dialect)
        .with_24_hour_time(use_24_hour_time)
}

fn all_configurations() -> Vec<CronOptions> {
    vec![
        options(Dialect::Standard, true),
        options(Dialect::Standard, false),
        options(Dialect::Quartz, true),
        options(Dialect::Quartz, false),
    ]
}

/// A representative schedule per tab and sub-tab; seconds are only
/// non-zero where the dialect can carry them
fn representative_schedules(options: &CronOptions) -> Vec<Schedule> {
    let quartz = options.cron_flavor.is_quartz();
    let second = if quartz { 10 } else { 0 };
    let at = |hour: u32, minute: u32| {
        TimeOfDay::from_24_hour(hour, minute, second, options.use_24_hour_time)
    };

    let mut schedules = vec![
        Schedule::Minutely(MinutelyState {
            minutes: 15,
            seconds: second,
        }),
        Schedule::Minutely(MinutelyState {
            minutes: 1,
            seconds: second,
        }),
        Schedule::Hourly(HourlyState {
            hours: 2,
            minutes: 45,
            seconds: second,
        }),
        Schedule::Hourly(HourlyState {
            hours: 1,
            minutes: 0,
            seconds: second,
        }),
        Schedule::Daily(DailySchedule::EveryDays(EveryDaysState {
            days: 3,
            time: at(6, 30),
        })),
        Schedule::Daily(DailySchedule::EveryDays(EveryDaysState {
            days: 1,
            time: at(0, 0),
        })),
        Schedule::Daily(DailySchedule::EveryWeekDay(EveryWeekDayState {
            time: at(12, 5),
        })),
        Schedule::Weekly(WeeklyState {
            days: BTreeSet::from([Weekday::Mon, Weekday::Wed, Weekday::Fri]),
            time: at(21, 0),
        }),
        Schedule::Weekly(WeeklyState {
            days: Weekday::week(false).into_iter().collect(),
            time: at(13, 59),
        }),
        Schedule::Yearly(YearlySchedule::SpecificMonthDay(SpecificMonthDayState {
            month: 12,
            day: MonthDay::Day(25),
            time: at(7, 0),
        })),
        Schedule::Yearly(YearlySchedule::SpecificMonthWeek(SpecificMonthWeekState {
            month_week: MonthWeek::Last,
            day: Weekday::Fri,
            month: 3,
            time: at(18, 0),
        })),
    ];

    for day in [
        MonthDay::Day(1),
        MonthDay::Day(15),
        MonthDay::Last,
        MonthDay::LastWeekday,
        MonthDay::FirstWeekday,
    ] {
        schedules.push(Schedule::Monthly(MonthlySchedule::SpecificDay(
            SpecificDayState {
                day,
                months: 2,
                time: at(23, 59),
            },
        )));
    }

    for month_week in MonthWeek::ALL {
        schedules.push(Schedule::Monthly(MonthlySchedule::SpecificWeekDay(
            SpecificWeekDayState {
                month_week,
                day: Weekday::Tue,
                months: 1,
                time: at(10, 15),
            },
        )));
    }

    if quartz {
        schedules.push(Schedule::Minutely(MinutelyState {
            minutes: 0,
            seconds: 30,
        }));
    }

    schedules
}

// ─── Round-trip & Idempotence ────────────────────────────────────

#[test]
fn test_parse_generate_roundtrip() {
    for options in all_configurations() {
        for schedule in representative_schedules(&options) {
            let cron = generate(&schedule, &options).unwrap();
            let parsed = parse(&cron, &options).unwrap();
            assert_eq!(
                parsed, schedule,
                "round-trip of '{}' ({}, 24h={})",
                cron, options.cron_flavor, options.use_24_hour_time
            );
        }
    }
}

#[test]
fn test_generate_is_idempotent() {
    for options in all_configurations() {
        for schedule in representative_schedules(&options) {
            let cron = generate(&schedule, &options).unwrap();
            let again = generate(&parse(&cron, &options).unwrap(), &options).unwrap();
            assert_eq!(again, cron);
        }
    }
}

#[test]
fn test_generated_field_count_matches_dialect() {
    for options in all_configurations() {
        for schedule in representative_schedules(&options) {
            let cron = generate(&schedule, &options).unwrap();
            let count = cron.split(' ').count();
            assert!(options.cron_flavor.accepts_field_count(count), "{}", cron);
            assert_eq!(cron.trim(), cron);
            assert!(!cron.contains("  "));
        }
    }
}

#[test]
fn test_roundtrip_across_hour_display_modes() {
    let twenty_four = options(Dialect::Quartz, true);
    let twelve = options(Dialect::Quartz, false);

    for schedule in representative_schedules(&twenty_four) {
        let cron = generate(&schedule, &twenty_four).unwrap();
        let parsed = parse(&cron, &twelve).unwrap();
        assert_eq!(parsed.convert_hours(false, true), schedule);
        assert_eq!(generate(&parsed, &twelve).unwrap(), cron);
    }
}

// ─── Concrete Cases ──────────────────────────────────────────────

#[test]
fn test_standard_concrete_cases() {
    let standard = options(Dialect::Standard, true);

    let minutely = Schedule::Minutely(MinutelyState {
        minutes: 15,
        seconds: 0,
    });
    assert_eq!(generate(&minutely, &standard).unwrap(), "0/15 * 1/1 * *");

    let weekly = Schedule::Weekly(WeeklyState {
        days: BTreeSet::from([Weekday::Mon, Weekday::Wed, Weekday::Fri]),
        time: TimeOfDay::from_24_hour(9, 0, 0, true),
    });
    assert_eq!(generate(&weekly, &standard).unwrap(), "0 9 * * MON,WED,FRI");
    assert_eq!(parse("0 9 * * MON,WED,FRI", &standard).unwrap(), weekly);

    let twelve = options(Dialect::Standard, false);
    let Schedule::Weekly(parsed) = parse("0 9 * * MON,WED,FRI", &twelve).unwrap() else {
        panic!("expected weekly");
    };
    assert_eq!(parsed.time.hour, 9);
    assert_eq!(parsed.time.hour_type, Some(a3s_cron_editor::HourType::AM));
}

#[test]
fn test_quartz_concrete_case() {
    let quartz = options(Dialect::Quartz, true);
    let schedule = Schedule::Monthly(MonthlySchedule::SpecificWeekDay(SpecificWeekDayState {
        month_week: MonthWeek::First,
        day: Weekday::Mon,
        months: 1,
        time: TimeOfDay::from_24_hour(10, 15, 0, true),
    }));
    assert_eq!(
        generate(&schedule, &quartz).unwrap(),
        "0 15 10 ? 1/1 MON#1 *"
    );
    assert_eq!(parse("0 15 10 ? 1/1 MON#1 *", &quartz).unwrap(), schedule);
}

// ─── Field-count Gate & Fallback ─────────────────────────────────

#[test]
fn test_field_count_gate() {
    let expression = |count: usize| vec!["0"; count].join(" ");

    for count in (0..=9).filter(|n| *n != 5) {
        let err = parse(&expression(count), &options(Dialect::Standard, true)).unwrap_err();
        assert!(matches!(err, CronEditorError::InvalidFieldCount { found, .. } if found == count));
    }
    for count in (0..=9).filter(|n| *n != 6 && *n != 7) {
        let err = parse(&expression(count), &options(Dialect::Quartz, true)).unwrap_err();
        assert!(matches!(err, CronEditorError::InvalidFieldCount { found, .. } if found == count));
    }
}

#[test]
fn test_unrecognized_shapes_fall_back_verbatim() {
    let standard = options(Dialect::Standard, true);
    for expression in [
        "*/5 * * * *",
        "0 9-17 * * 1-5",
        "15 10 2 * *",
        "0 0 1,15 * *",
        "0 12 * 1/2 MON",
    ] {
        assert_eq!(
            parse(expression, &standard).unwrap(),
            Schedule::Advanced(AdvancedState::new(expression))
        );
    }

    let quartz = options(Dialect::Quartz, true);
    for expression in ["0 15 10 L-2 * ? *", "0 0 12 ? * WED 2030", "0 0/5 14,18 * * ?"] {
        assert_eq!(
            parse(expression, &quartz).unwrap(),
            Schedule::Advanced(AdvancedState::new(expression))
        );
    }
}

#[test]
fn test_seconds_shape_not_recognized_in_standard() {
    // standard reads the first field as minutes
    assert_eq!(
        classify("*/30 * 1/1 * *", Dialect::Standard).unwrap(),
        None
    );
    assert_eq!(
        classify("*/30 * * 1/1 * ? *", Dialect::Quartz).unwrap(),
        Some(Shape::MinutelySeconds)
    );
}

#[test]
fn test_advanced_roundtrip_is_exact() {
    let quartz = options(Dialect::Quartz, true);
    let raw = "0 15 10 L-2 * ? *";
    let schedule = parse(raw, &quartz).unwrap();
    assert_eq!(generate(&schedule, &quartz).unwrap(), raw);
}

// ─── Editor Facade ───────────────────────────────────────────────

#[test]
fn test_editor_switching_tabs_keeps_edits() {
    let mut editor = CronEditor::new(options(Dialect::Quartz, false)).unwrap();

    editor
        .set_schedule(Schedule::Hourly(HourlyState {
            hours: 4,
            minutes: 30,
            seconds: 0,
        }))
        .unwrap();
    editor.set_expression("0 0 18 ? * SAT,SUN *").unwrap();
    assert_eq!(editor.active_tab(), Tab::Weekly);

    assert_eq!(editor.focus_tab(Tab::Hourly).unwrap(), "0 30 0/4 1/1 * ? *");
    assert_eq!(editor.focus_tab(Tab::Weekly).unwrap(), "0 0 18 ? * SAT,SUN *");
}

#[test]
fn test_editor_exposes_canonical_expression() {
    let mut editor = CronEditor::new(CronOptions::default()).unwrap();
    let schedule = editor.set_expression("  0 9 ?   *  FRI,MON ").unwrap();
    assert_eq!(schedule.tab(), Tab::Weekly);
    assert_eq!(editor.active_tab(), Tab::Weekly);
    assert_eq!(editor.cron(), "0 9 * * MON,FRI");
}

#[test]
fn test_editor_keeps_advanced_expression_verbatim() {
    let mut editor = CronEditor::new(options(Dialect::Quartz, true)).unwrap();
    editor.set_expression("0  15 10 L-2 * ? *").unwrap();
    assert_eq!(editor.active_tab(), Tab::Advanced);
    assert_eq!(editor.cron(), "0  15 10 L-2 * ? *");
}

#[test]
fn test_editor_from_json_options() {
    let options = CronOptions::from_json(
        r#"{"cronFlavor": "quartz", "weekDays": "MON-SAT", "use24HourTime": false, "defaultTime": "08:00:00"}"#,
    )
    .unwrap();
    let mut editor = CronEditor::new(options).unwrap();

    let every_week_day = editor.state().daily.every_week_day;
    assert_eq!(every_week_day.time.hour, 8);
    editor
        .set_schedule(Schedule::Daily(DailySchedule::EveryWeekDay(every_week_day)))
        .unwrap();
    assert_eq!(editor.cron(), "0 0 8 ? * MON-SAT *");

    editor.set_hour_display_mode(HourDisplay::TwentyFourHour).unwrap();
    assert_eq!(editor.cron(), "0 0 8 ? * MON-SAT *");
}

#[test]
fn test_editor_state_snapshot_json() {
    let mut editor = CronEditor::new(CronOptions::default()).unwrap();
    editor.set_expression("30 6 L 1/3 *").unwrap();

    let json = editor.state().to_json().unwrap();
    let restored = a3s_cron_editor::ScheduleState::from_json(&json).unwrap();
    assert_eq!(&restored, editor.state());
    assert_eq!(restored.monthly.specific_day.day, MonthDay::Last);
    assert_eq!(restored.monthly.specific_day.months, 3);
}
