//! Field schemas binding each contracts aggregate to the list core.

pub mod a001_vehicle_type;
pub mod a002_vehicle_size;
pub mod a003_vehicle_category;
pub mod a004_service;
pub mod a005_job;
pub mod a006_booking;
pub mod a007_dispute;
pub mod a008_ticket;
