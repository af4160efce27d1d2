pub mod averages;
pub mod day;
pub mod reading;
