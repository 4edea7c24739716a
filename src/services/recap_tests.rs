use crate::models::config::{SlotConfig, SlotInterval};
use crate::models::planning::{Day, Planning, SlotKey};
use crate::models::time::TimeOfDay;
use crate::services::recap::{
    daily_hours, daily_schedule, employee_recap, shop_daily_schedule, shop_recap,
    total_daily_hours, weekly_hours, weekly_schedule,
};
use crate::services::slots::{partition, SlotBuckets};

fn half_hour_buckets() -> SlotBuckets {
    let config = SlotConfig::new(
        SlotInterval::Half,
        "09:00".parse::<TimeOfDay>().unwrap(),
        TimeOfDay::END_OF_DAY,
    );
    partition(&config).unwrap()
}

fn mark(planning: &mut Planning, day: Day, employee: &str, slots: &[&str]) {
    for slot in slots {
        planning.set(SlotKey::new(day, slot.parse().unwrap(), employee), true);
    }
}

#[test]
fn test_rest_day_placeholder() {
    let buckets = half_hour_buckets();
    let planning = Planning::new();

    let schedule = daily_schedule("Alice", Day::Monday, &planning, &buckets);
    assert_eq!(schedule.periods.len(), 1);
    let period = &schedule.periods[0];
    assert_eq!(period.arrival, "Repos");
    assert_eq!(period.departure, "-");
    assert_eq!(period.return_time, "-");
    assert_eq!(period.end, "-");
    assert_eq!(schedule.total_hours, "0.0");
}

#[test]
fn test_worked_day_with_break() {
    // 09:00-10:00 worked, break, 11:00-11:30 worked.
    let buckets = half_hour_buckets();
    let mut planning = Planning::new();
    mark(
        &mut planning,
        Day::Monday,
        "Alice",
        &["09:00-09:30", "09:30-10:00", "11:00-11:30"],
    );

    let schedule = daily_schedule("Alice", Day::Monday, &planning, &buckets);
    let period = &schedule.periods[0];
    assert_eq!(period.arrival, "09:00");
    assert_eq!(period.departure, "10:00");
    assert_eq!(period.return_time, "11:00");
    assert_eq!(period.end, "11:30");
    assert_eq!(schedule.total_hours, "1.5");
}

#[test]
fn test_continuous_day_has_no_break() {
    let buckets = half_hour_buckets();
    let mut planning = Planning::new();
    mark(
        &mut planning,
        Day::Tuesday,
        "Alice",
        &["14:00-14:30", "14:30-15:00", "15:00-15:30"],
    );

    let schedule = daily_schedule("Alice", Day::Tuesday, &planning, &buckets);
    let period = &schedule.periods[0];
    assert_eq!(period.arrival, "14:00");
    assert_eq!(period.departure, "-");
    assert_eq!(period.return_time, "-");
    assert_eq!(period.end, "15:30");
    assert_eq!(schedule.total_hours, "1.5");
}

#[test]
fn test_only_first_gap_is_reported() {
    // Three separate stints; the second gap (13:00 → 15:00) is not shown.
    let buckets = half_hour_buckets();
    let mut planning = Planning::new();
    mark(
        &mut planning,
        Day::Monday,
        "Alice",
        &["09:00-09:30", "11:00-11:30", "15:00-15:30"],
    );

    let schedule = daily_schedule("Alice", Day::Monday, &planning, &buckets);
    let period = &schedule.periods[0];
    assert_eq!(period.arrival, "09:00");
    assert_eq!(period.departure, "09:30");
    assert_eq!(period.return_time, "11:00");
    assert_eq!(period.end, "15:30");
    assert_eq!(schedule.total_hours, "1.5");
}

#[test]
fn test_slot_ending_at_midnight_counts_fully() {
    let buckets = half_hour_buckets();
    let mut planning = Planning::new();
    mark(&mut planning, Day::Sunday, "Alice", &["23:30-24:00"]);

    let schedule = daily_schedule("Alice", Day::Sunday, &planning, &buckets);
    assert_eq!(schedule.periods[0].arrival, "23:30");
    assert_eq!(schedule.periods[0].end, "24:00");
    assert_eq!(schedule.total_hours, "0.5");
}

#[test]
fn test_weekly_schedule_covers_all_days_in_order() {
    let buckets = half_hour_buckets();
    let mut planning = Planning::new();
    mark(&mut planning, Day::Monday, "Alice", &["09:00-09:30"]);
    mark(&mut planning, Day::Friday, "Alice", &["18:00-18:30", "18:30-19:00"]);

    let week = weekly_schedule("Alice", &planning, &buckets);
    assert_eq!(week.days.len(), 7);
    let days: Vec<Day> = week.days.iter().map(|d| d.day).collect();
    assert_eq!(days, Day::ALL.to_vec());
    assert_eq!(week.days[0].total_hours, "0.5");
    assert_eq!(week.days[4].total_hours, "1.0");
    assert_eq!(week.days[6].periods[0].arrival, "Repos");
    assert_eq!(week.week_total, "1.5");
}

#[test]
fn test_weekly_total_equals_sum_of_daily_totals() {
    let buckets = half_hour_buckets();
    let mut planning = Planning::new();
    mark(
        &mut planning,
        Day::Monday,
        "Alice",
        &["09:00-09:30", "09:30-10:00", "10:30-11:00"],
    );
    mark(&mut planning, Day::Wednesday, "Alice", &["12:00-12:30"]);
    mark(
        &mut planning,
        Day::Saturday,
        "Alice",
        &["20:00-20:30", "23:30-24:00"],
    );

    let summed: f64 = Day::ALL
        .iter()
        .map(|day| {
            daily_hours("Alice", *day, &planning, &buckets)
                .parse::<f64>()
                .unwrap()
        })
        .sum();
    let week = weekly_hours("Alice", &planning, &buckets);
    assert_eq!(week, format!("{summed:.1}"));
    assert_eq!(week, weekly_schedule("Alice", &planning, &buckets).week_total);
}

#[test]
fn test_shop_daily_schedule_preserves_employee_order() {
    let buckets = half_hour_buckets();
    let mut planning = Planning::new();
    mark(&mut planning, Day::Monday, "Bob", &["09:00-09:30"]);

    let employees = vec!["Zoé".to_string(), "Bob".to_string(), "Alice".to_string()];
    let day = shop_daily_schedule(&employees, Day::Monday, &planning, &buckets);
    let names: Vec<&str> = day.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Zoé", "Bob", "Alice"]);
    assert_eq!(day[0].periods[0].arrival, "Repos");
    assert_eq!(day[1].periods[0].arrival, "09:00");
    assert_eq!(day[1].total_hours, "0.5");
}

#[test]
fn test_shop_daily_schedule_empty_roster() {
    let buckets = half_hour_buckets();
    let planning = Planning::new();
    let day = shop_daily_schedule(&[], Day::Monday, &planning, &buckets);
    assert!(day.is_empty());
}

#[test]
fn test_total_daily_hours_sums_across_employees() {
    let buckets = half_hour_buckets();
    let mut planning = Planning::new();
    mark(&mut planning, Day::Monday, "Alice", &["09:00-09:30", "09:30-10:00"]);
    mark(&mut planning, Day::Monday, "Bob", &["18:00-18:30"]);

    let employees = vec!["Alice".to_string(), "Bob".to_string()];
    assert_eq!(
        total_daily_hours(&employees, Day::Monday, &planning, &buckets),
        "1.5"
    );
    assert_eq!(
        total_daily_hours(&employees, Day::Tuesday, &planning, &buckets),
        "0.0"
    );
    assert_eq!(total_daily_hours(&[], Day::Monday, &planning, &buckets), "0.0");
}

#[test]
fn test_empty_slot_set_yields_rest_week() {
    let buckets = SlotBuckets::default();
    let mut planning = Planning::new();
    mark(&mut planning, Day::Monday, "Alice", &["09:00-09:30"]);

    let week = weekly_schedule("Alice", &planning, &buckets);
    assert_eq!(week.week_total, "0.0");
    assert!(week
        .days
        .iter()
        .all(|d| d.periods[0].arrival == "Repos"));
}

#[test]
fn test_recap_exports() {
    let buckets = half_hour_buckets();
    let mut planning = Planning::new();
    mark(&mut planning, Day::Monday, "Alice", &["09:00-09:30", "09:30-10:00"]);
    mark(&mut planning, Day::Monday, "Bob", &["09:00-09:30"]);
    mark(&mut planning, Day::Friday, "Bob", &["18:00-18:30"]);

    let recap = employee_recap("Alice", &planning, &buckets);
    assert_eq!(recap.employee, "Alice");
    assert_eq!(recap.schedule.week_total, "1.0");

    let employees = vec!["Alice".to_string(), "Bob".to_string()];
    let shop = shop_recap(&employees, &planning, &buckets);
    assert_eq!(shop.days.len(), 7);
    assert_eq!(shop.day_totals.len(), 7);
    assert_eq!(shop.day_totals[0], "1.5");
    assert_eq!(shop.day_totals[4], "0.5");
    assert_eq!(shop.week_total, "2.0");
    assert_eq!(shop.days[0].employees[0].name, "Alice");
}
