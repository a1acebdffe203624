pub mod product;
pub mod location;
pub mod care_service;
pub mod submission;
