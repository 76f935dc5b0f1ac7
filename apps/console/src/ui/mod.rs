pub mod charts;
pub mod dashboard;
pub mod icons;
pub mod input;
pub mod layout;
pub mod optimization;
pub mod predictions;
pub mod reports;
pub mod scenarios;
