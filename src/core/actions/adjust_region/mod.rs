pub mod adjust_region;
