#![allow(dead_code)]

pub mod runner;
pub mod session;

pub const STATUS_A: &str = "M       src/a.ts\n?       src/b.ts\n";
