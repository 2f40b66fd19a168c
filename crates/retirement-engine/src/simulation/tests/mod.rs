mod common;

mod rules;
mod thresholds;
