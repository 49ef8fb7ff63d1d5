pub mod cycle_outcome;
