//! This module contains the command-line interface [`Cli`] parser for the
//! attendance admin console.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The command line configuration struct, where the command-line interface parser is automatically
/// derived by [`clap::Parser`].
#[derive(Parser, Debug)]
pub struct Cli {
    /// The different commands available for administering the attendance service.
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in to the attendance service; prompts for the password.
    Login { email: String },

    /// Log out, clearing the stored session token.
    Logout,

    /// Show today's summary statistics and the last-7-days chart.
    Dashboard,

    /// Show the attendance log, newest detection first.
    Log {
        /// Keep only records whose student name contains this text.
        #[arg(long, default_value = "")]
        name: String,

        /// Keep only records whose roll number contains this text.
        #[arg(long, default_value = "")]
        roll_no: String,
    },

    /// List the registered students.
    ListStudents,

    /// Register a new student.
    AddStudent { roll_no: String, name: String },

    /// Register multiple students from a `roll_no,name` CSV file.
    BulkAddStudents { file_path: PathBuf },

    /// List the registered cameras.
    ListCameras,

    /// Register a new camera.
    AddCamera { ip_address: String },

    /// Manually record a detection for a student.
    MarkAttendance { roll_no: String, camera_id: i64 },

    /// Check that the attendance service is reachable.
    Health,
}
