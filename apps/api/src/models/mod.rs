pub mod candidate;
pub mod employee;
pub mod job;
pub mod notice;
pub mod profile;
