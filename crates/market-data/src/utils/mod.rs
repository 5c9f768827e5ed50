//! Conversion helpers shared by the provider clients.

pub mod numeric;
pub mod time;

pub use numeric::{coerce_decimal, decimal_from_number};
pub use time::{coerce_timestamp, date_to_unix, normalize_to_midnight, unix_to_datetime};
