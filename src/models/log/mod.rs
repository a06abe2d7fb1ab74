pub mod log_entry;
pub mod new_log_entry;
