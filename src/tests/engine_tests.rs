use super::{d, memory_store, seed_employee, seed_location, seed_solo_employee};
use crate::database::models::{AttendanceStatus, EmployeeUpdate};
use crate::engine::absence::{absence_alerts, check_consecutive_absences};
use crate::engine::summary::{
    daily_overview, employee_summary, location_board, DateRange, SettlementStatus,
};
use anyhow::Result;

#[tokio::test]
async fn worked_days_and_one_payment_settle_as_partial() -> Result<()> {
    let store = memory_store().await;
    let employee = seed_solo_employee(&store, 1000).await;

    for date in ["2024-01-01", "2024-01-02", "2024-01-03"] {
        store
            .mark_attendance(employee.id, d(date), AttendanceStatus::Present)
            .await?;
    }
    store
        .register_payment(employee.id, d("2024-01-01"), 1000, 0)
        .await?;

    let range = DateRange::month(2024, 1)?;
    let summary = employee_summary(store.pool(), &employee, range).await?;

    assert_eq!(summary.days_worked, 3);
    assert_eq!(summary.total_earned, 3000);
    assert_eq!(summary.total_paid_base, 1000);
    assert_eq!(summary.pending_balance, 2000);
    assert_eq!(summary.status, SettlementStatus::Partial);
    Ok(())
}

#[tokio::test]
async fn an_advance_reduces_the_settlement_balance() -> Result<()> {
    let store = memory_store().await;
    let employee = seed_solo_employee(&store, 1000).await;

    for date in ["2024-01-01", "2024-01-02", "2024-01-03"] {
        store
            .mark_attendance(employee.id, d(date), AttendanceStatus::Present)
            .await?;
    }
    store
        .register_payment(employee.id, d("2024-01-01"), 1000, 0)
        .await?;
    store
        .register_advance(employee.id, 500, d("2024-01-02"), None)
        .await?;

    let range = DateRange::month(2024, 1)?;
    let summary = employee_summary(store.pool(), &employee, range).await?;

    assert_eq!(summary.total_advances, 500);
    assert_eq!(summary.pending_balance, 1500);
    assert_eq!(summary.status, SettlementStatus::Partial);
    Ok(())
}

#[tokio::test]
async fn an_empty_window_reports_no_activity() -> Result<()> {
    let store = memory_store().await;
    let employee = seed_solo_employee(&store, 1000).await;

    let range = DateRange::month(2024, 6)?;
    let summary = employee_summary(store.pool(), &employee, range).await?;

    assert_eq!(summary.days_worked, 0);
    assert_eq!(summary.pending_balance, 0);
    assert_eq!(summary.status, SettlementStatus::NoActivity);
    Ok(())
}

#[tokio::test]
async fn registered_extras_alone_produce_a_settlement() -> Result<()> {
    let store = memory_store().await;
    let employee = seed_solo_employee(&store, 1000).await;

    store
        .register_extra(employee.id, 800, d("2024-01-10"), Some(4.0), None)
        .await?;

    let range = DateRange::month(2024, 1)?;
    let summary = employee_summary(store.pool(), &employee, range).await?;

    assert_eq!(summary.days_worked, 0);
    assert_eq!(summary.total_registered_extras, 800);
    assert_eq!(summary.pending_balance, 800);
    assert_eq!(summary.status, SettlementStatus::Pending);
    Ok(())
}

#[tokio::test]
async fn duplicate_payment_does_not_move_totals() -> Result<()> {
    let store = memory_store().await;
    let employee = seed_solo_employee(&store, 1000).await;

    store
        .mark_attendance(employee.id, d("2024-01-05"), AttendanceStatus::Present)
        .await?;
    store
        .register_payment(employee.id, d("2024-01-05"), 1000, 0)
        .await?;

    let range = DateRange::month(2024, 1)?;
    let before = employee_summary(store.pool(), &employee, range).await?;

    store
        .register_payment(employee.id, d("2024-01-05"), 1000, 0)
        .await?;

    let after = employee_summary(store.pool(), &employee, range).await?;
    assert_eq!(after, before);
    assert_eq!(after.total_paid_base, 1000);
    Ok(())
}

#[tokio::test]
async fn overwritten_attendance_is_counted_once() -> Result<()> {
    let store = memory_store().await;
    let employee = seed_solo_employee(&store, 1000).await;

    store
        .mark_attendance(employee.id, d("2024-01-05"), AttendanceStatus::Present)
        .await?;
    store
        .mark_attendance(employee.id, d("2024-01-05"), AttendanceStatus::Absent)
        .await?;

    let range = DateRange::month(2024, 1)?;
    let summary = employee_summary(store.pool(), &employee, range).await?;

    assert_eq!(summary.days_worked, 0);
    assert_eq!(summary.total_earned, 0);
    Ok(())
}

#[tokio::test]
async fn the_window_bounds_every_stream() -> Result<()> {
    let store = memory_store().await;
    let employee = seed_solo_employee(&store, 1000).await;

    store
        .mark_attendance(employee.id, d("2024-01-31"), AttendanceStatus::Present)
        .await?;
    store
        .mark_attendance(employee.id, d("2024-02-01"), AttendanceStatus::Present)
        .await?;
    store
        .register_payment(employee.id, d("2024-01-31"), 900, 0)
        .await?;
    store
        .register_advance(employee.id, 100, d("2024-02-15"), None)
        .await?;
    store
        .register_extra(employee.id, 60, d("2024-03-01"), None, None)
        .await?;

    let range = DateRange::month(2024, 2)?;
    let summary = employee_summary(store.pool(), &employee, range).await?;

    assert_eq!(summary.days_worked, 1);
    assert_eq!(summary.total_paid_base, 0);
    assert_eq!(summary.total_advances, 100);
    assert_eq!(summary.total_registered_extras, 0);
    assert_eq!(summary.pending_balance, 1000 - 100);
    Ok(())
}

#[tokio::test]
async fn location_board_ranks_by_balance_then_name() -> Result<()> {
    let store = memory_store().await;
    let umo = seed_location(&store, "UMO").await;
    let brooklyn = seed_location(&store, "BROOKLYN").await;

    let victor = seed_employee(&store, umo.id, "Victor Gaucho", 1000).await;
    let micaela = seed_employee(&store, umo.id, "Micaela", 1000).await;
    let ayelen = seed_employee(&store, umo.id, "ayelen", 1000).await;
    let belen = seed_employee(&store, umo.id, "Belen", 500).await;
    let gregorio = seed_employee(&store, umo.id, "Gregorio", 1000).await;
    let maru = seed_employee(&store, brooklyn.id, "Maru", 1000).await;

    // Victor: 3000 outstanding. Micaela and ayelen: 1000 each (the tie).
    for date in ["2024-01-01", "2024-01-02", "2024-01-03"] {
        store
            .mark_attendance(victor.id, d(date), AttendanceStatus::Present)
            .await?;
    }
    store
        .mark_attendance(micaela.id, d("2024-01-01"), AttendanceStatus::Present)
        .await?;
    store
        .mark_attendance(ayelen.id, d("2024-01-01"), AttendanceStatus::Present)
        .await?;

    // Belen is fully paid, Gregorio is deactivated, Maru works elsewhere.
    store
        .mark_attendance(belen.id, d("2024-01-01"), AttendanceStatus::Present)
        .await?;
    store
        .register_payment(belen.id, d("2024-01-01"), 500, 0)
        .await?;
    store
        .mark_attendance(gregorio.id, d("2024-01-01"), AttendanceStatus::Present)
        .await?;
    store
        .update_employee(
            gregorio.id,
            &EmployeeUpdate {
                active: Some(false),
                ..Default::default()
            },
        )
        .await?;
    store
        .mark_attendance(maru.id, d("2024-01-01"), AttendanceStatus::Present)
        .await?;

    let range = DateRange::month(2024, 1)?;
    let board = location_board(store.pool(), umo.id, range).await?;

    let names: Vec<&str> = board.iter().map(|r| r.employee.name.as_str()).collect();
    assert_eq!(names, vec!["Victor Gaucho", "ayelen", "Micaela", "Belen"]);

    assert_eq!(board[0].summary.pending_balance, 3000);
    assert_eq!(board[3].summary.pending_balance, 0);
    assert_eq!(board[3].summary.status, SettlementStatus::Paid);
    Ok(())
}

#[tokio::test]
async fn daily_overview_reports_the_day_and_its_period() -> Result<()> {
    let store = memory_store().await;
    let umo = seed_location(&store, "UMO").await;
    let trento = seed_location(&store, "TRENTO").await;
    let jose = seed_employee(&store, umo.id, "Jose Humano", 1000).await;
    let ruth = seed_employee(&store, umo.id, "Ruth Coronel", 800).await;

    let today = d("2024-01-15");
    store
        .mark_attendance(jose.id, today, AttendanceStatus::Present)
        .await?;
    store
        .mark_attendance(ruth.id, today, AttendanceStatus::Absent)
        .await?;
    store
        .register_payment(jose.id, d("2024-01-10"), 1000, 200)
        .await?;
    store
        .register_payment(ruth.id, d("2023-12-29"), 700, 0)
        .await?;
    store.toggle_location(trento.id).await?;

    let overview = daily_overview(store.pool(), today).await?;

    assert_eq!(overview.active_employees, 2);
    assert_eq!(overview.active_locations, 1);
    assert_eq!(overview.present_today, 1);
    // Base amounts only, and only within the day's period.
    assert_eq!(overview.paid_this_month, 1000);
    Ok(())
}

#[tokio::test]
async fn consecutive_absences_are_detected_through_the_store() -> Result<()> {
    let store = memory_store().await;
    let employee = seed_solo_employee(&store, 1000).await;

    for date in ["2024-02-05", "2024-02-06", "2024-02-07"] {
        store
            .mark_attendance(employee.id, d(date), AttendanceStatus::Absent)
            .await?;
    }

    assert!(check_consecutive_absences(store.pool(), employee.id, 3).await?);
    assert!(!check_consecutive_absences(store.pool(), employee.id, 4).await?);
    Ok(())
}

#[tokio::test]
async fn gapped_absences_do_not_trip_the_detector() -> Result<()> {
    let store = memory_store().await;
    let employee = seed_solo_employee(&store, 1000).await;

    for date in ["2024-02-05", "2024-02-07", "2024-02-09"] {
        store
            .mark_attendance(employee.id, d(date), AttendanceStatus::Absent)
            .await?;
    }

    assert!(!check_consecutive_absences(store.pool(), employee.id, 3).await?);
    Ok(())
}

#[tokio::test]
async fn present_days_and_unrecorded_days_stay_out_of_the_streak() -> Result<()> {
    let store = memory_store().await;
    let employee = seed_solo_employee(&store, 1000).await;

    // Absent, absent, present, absent; the 9th has no record at all.
    store
        .mark_attendance(employee.id, d("2024-02-05"), AttendanceStatus::Absent)
        .await?;
    store
        .mark_attendance(employee.id, d("2024-02-06"), AttendanceStatus::Absent)
        .await?;
    store
        .mark_attendance(employee.id, d("2024-02-07"), AttendanceStatus::Present)
        .await?;
    store
        .mark_attendance(employee.id, d("2024-02-08"), AttendanceStatus::Absent)
        .await?;

    assert!(!check_consecutive_absences(store.pool(), employee.id, 3).await?);
    assert!(check_consecutive_absences(store.pool(), employee.id, 2).await?);
    Ok(())
}

#[tokio::test]
async fn absence_alerts_list_flagged_active_employees_only() -> Result<()> {
    let store = memory_store().await;
    let umo = seed_location(&store, "UMO").await;
    let flagged = seed_employee(&store, umo.id, "Tito", 1000).await;
    let steady = seed_employee(&store, umo.id, "Sofia Vidal", 1000).await;
    let gone = seed_employee(&store, umo.id, "Marcos Enrique", 1000).await;

    for date in ["2024-02-05", "2024-02-06", "2024-02-07"] {
        store
            .mark_attendance(flagged.id, d(date), AttendanceStatus::Absent)
            .await?;
        store
            .mark_attendance(gone.id, d(date), AttendanceStatus::Absent)
            .await?;
    }
    store
        .mark_attendance(steady.id, d("2024-02-05"), AttendanceStatus::Absent)
        .await?;
    store
        .update_employee(
            gone.id,
            &EmployeeUpdate {
                active: Some(false),
                ..Default::default()
            },
        )
        .await?;

    let alerts = absence_alerts(store.pool(), 3).await?;

    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].name, "Tito");
    Ok(())
}
