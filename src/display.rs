use crate::Console;
use crate::stats;
use anyhow::Result;
use chrono::Local;
use tabled::{Table, Tabled, settings::Style};

/// Pretty prints the dashboard: stat cards plus the seven-day presence chart.
pub fn show_dashboard(console: &Console) -> Result<()> {
    let students = console.api.list_students()?;
    let attendance = console.api.list_attendance()?;

    let today = Local::now().date_naive();
    let summary = stats::dashboard_stats(&students, &attendance, today);

    println!("Total students:  {}", summary.total_students);
    println!("Present today:   {}", summary.present_today);
    println!("Absent today:    {}", summary.absent_today);
    println!("Attendance rate: {:.1}%", summary.attendance_rate);

    #[derive(Tabled)]
    struct ChartRow {
        day: String,
        present: usize,
        chart: String,
    }

    let rows: Vec<ChartRow> = stats::weekly_presence(&attendance, today)
        .into_iter()
        .map(|point| ChartRow {
            day: point.label,
            present: point.present,
            chart: "█".repeat(point.present),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::modern());

    println!("\nLast 7 days attendance:\n{table}");

    Ok(())
}

/// Pretty prints the attendance log, joined with student names and narrowed
/// by the given filters.
pub fn show_attendance_log(console: &Console, name_filter: &str, roll_filter: &str) -> Result<()> {
    let attendance = console.api.list_attendance()?;
    let students = console.api.list_students()?;

    let joined = stats::join_with_names(attendance, &students);
    let filtered = stats::filter_records(&joined, name_filter, roll_filter);

    if filtered.is_empty() {
        println!("No matching records found.");
        return Ok(());
    }

    let mut table = Table::new(filtered);
    table.with(Style::modern());

    println!("Attendance records:\n{table}");

    Ok(())
}

/// Pretty prints the student registry.
pub fn show_students(console: &Console) -> Result<()> {
    let students = console.api.list_students()?;

    if students.is_empty() {
        println!("No students registered.");
        return Ok(());
    }

    let mut table = Table::new(students);
    table.with(Style::modern());

    println!("Registered students:\n{table}");

    Ok(())
}

/// Pretty prints the camera registry.
pub fn show_cameras(console: &Console) -> Result<()> {
    let cameras = console.api.list_cameras()?;

    if cameras.is_empty() {
        println!("No cameras registered.");
        return Ok(());
    }

    let mut table = Table::new(cameras);
    table.with(Style::modern());

    println!("Registered cameras:\n{table}");

    Ok(())
}
