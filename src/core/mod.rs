// src/core/mod.rs

pub mod fields;
pub mod sanitize;
pub mod scan;
pub mod template;
