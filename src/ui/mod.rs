// Tue Jan 13 2026 - Alex

pub mod cli;
