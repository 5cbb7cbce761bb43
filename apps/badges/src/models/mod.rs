pub mod attendee;

pub use attendee::AttendeeRecord;
