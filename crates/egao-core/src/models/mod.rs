pub mod adl;
pub mod care_plan;
pub mod client;
pub mod goal;
pub mod usage;
