//! egao-export
//!
//! Care-plan document generation: Tera-rendered plain text, the
//! 第1表/第2表 spreadsheet, a fixed-layout PDF, and a ZIP bundle of all
//! three. Every exporter is a pure byte producer — no filesystem access.

pub mod bundle;
pub mod error;
pub mod pdf;
pub mod render;
pub mod styles;
pub mod xlsx;
