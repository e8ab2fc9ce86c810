use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// A registered student. The roll number is the unique key the server joins
/// attendance detections against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Tabled)]
pub struct Student {
    pub roll_no: String,
    pub name: String,
}

/// A registered camera. IDs are assigned by the server when a camera is added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Tabled)]
pub struct Camera {
    pub camera_id: i64,
    pub ip_address: String,
}

/// A single detection event: one student seen by one camera at one time.
///
/// `date` is `YYYY-MM-DD` and `detected_time` is `YYYY-MM-DD HH:MM:SS`, both
/// formatted by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub attendance_id: i64,
    pub roll_no: String,
    pub date: String,
    pub detected_time: String,
    pub camera_id: i64,
}

/// An attendance record annotated with the student's display name, resolved
/// client-side via the roster.
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct AttendanceRecordWithName {
    pub roll_no: String,
    pub name: String,
    pub date: String,
    pub detected_time: String,
    pub camera_id: i64,
}

/// Successful login body.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Body returned by the mutation endpoints and the health check.
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
