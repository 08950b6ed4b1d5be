/// English month name for a 1-based month number.
///
/// Out-of-range input yields an empty string rather than panicking, since
/// month values come straight off the wire.
pub fn month_name(month: u32) -> &'static str {
    const MONTHS: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    match month {
        1..=12 => MONTHS[(month - 1) as usize],
        _ => "",
    }
}
