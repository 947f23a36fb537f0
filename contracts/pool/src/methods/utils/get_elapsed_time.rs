use pool_interface::types::error::Error;

/// Returns seconds passed since `last_update_timestamp`.
/// Time moving backward is rejected with `StaleTimestamp`.
pub fn get_elapsed_time(last_update_timestamp: u64, current_time: u64) -> Result<u64, Error> {
    current_time
        .checked_sub(last_update_timestamp)
        .ok_or(Error::StaleTimestamp)
}
