//! Syncs a local roster CSV against the service's student registry.
//!
//! This binary loads the roster at [`ROSTER_PATH`], diffs it against the
//! students already registered on the server, and registers the missing
//! ones. The API has no delete endpoint, so students present on the server
//! but absent from the CSV are only reported.

use anyhow::Result;
use attendance_console::models::Student;
use attendance_console::{create_default_console, roster};

/// The path to the roster of students.
const ROSTER_PATH: &str = "roster.csv";

pub fn main() -> Result<()> {
    let console = create_default_console()?;

    let new_roster = roster::load_roster(ROSTER_PATH)?;
    let curr_roster = console.api.list_students()?;

    let dropped: Vec<&Student> = curr_roster
        .iter()
        .filter(|student| !new_roster.contains(student))
        .collect();
    if !dropped.is_empty() {
        println!("On the server but not in the roster: {:#?}", dropped);
    }

    let added: Vec<&Student> = new_roster
        .iter()
        .filter(|student| !curr_roster.contains(student))
        .collect();
    println!("Students to add: {:#?}", added);

    for student in added {
        let response = console.api.add_student(&student.roll_no, &student.name)?;
        println!("{}", response.message);
    }

    Ok(())
}
