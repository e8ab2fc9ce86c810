use anyhow::{Result, bail};
use attendance_console::cli::{Cli, Command};
use attendance_console::{create_default_console, display, roster};
use clap::Parser;
use std::io::{self, Write};

fn prompt_password() -> Result<String> {
    print!("Password: ");
    io::stdout().flush()?;
    let mut password = String::new();
    io::stdin().read_line(&mut password)?;
    Ok(password.trim().to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut console = create_default_console()?;

    // Everything except login and the health check needs a session.
    let needs_session = !matches!(
        cli.command,
        Command::Login { .. } | Command::Logout | Command::Health
    );
    if needs_session && !console.session.is_logged_in() {
        bail!("not logged in; run `attendance-console login <email>` first");
    }

    match cli.command {
        Command::Login { email } => {
            let password = prompt_password()?;
            console.login(&email, &password)?;
            println!("Logged in as {email}");
        }

        Command::Logout => {
            console.logout()?;
            println!("Logged out");
        }

        Command::Dashboard => display::show_dashboard(&console)?,

        Command::Log { name, roll_no } => {
            display::show_attendance_log(&console, &name, &roll_no)?
        }

        Command::ListStudents => display::show_students(&console)?,

        Command::AddStudent { roll_no, name } => {
            let response = console.api.add_student(&roll_no, &name)?;
            println!("{}", response.message);
        }

        Command::BulkAddStudents { file_path } => {
            let students = roster::load_roster(&file_path)?;
            for student in &students {
                let response = console.api.add_student(&student.roll_no, &student.name)?;
                println!("{}", response.message);
            }
            println!("Registered {} students", students.len());
        }

        Command::ListCameras => display::show_cameras(&console)?,

        Command::AddCamera { ip_address } => {
            let response = console.api.add_camera(&ip_address)?;
            println!("{}", response.message);
        }

        Command::MarkAttendance { roll_no, camera_id } => {
            let response = console.api.mark_attendance(&roll_no, camera_id)?;
            println!("{}", response.message);
        }

        Command::Health => {
            let response = console.api.health()?;
            println!("{}", response.message);
        }
    }

    Ok(())
}
