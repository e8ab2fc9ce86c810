//! Loading a local roster CSV for bulk student registration.

use crate::models::Student;
use anyhow::Result;
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

/// Reads a `roll_no,name` CSV file into a list of students.
pub fn load_roster<P: AsRef<Path>>(path: P) -> Result<Vec<Student>> {
    let file = File::open(path)?;
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(file);
    let mut students = Vec::new();
    for result in rdr.deserialize() {
        students.push(result?);
    }
    Ok(students)
}
