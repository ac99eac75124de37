pub mod get_reference_ranges;
