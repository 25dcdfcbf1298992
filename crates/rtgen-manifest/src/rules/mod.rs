pub mod empty_names;
pub mod name_length;
pub mod unique_traces;
