/// Prints a timestamped log line, similar to `info!` in tracing.
/// With a starting time as the first argument it also reports the elapsed
/// seconds since that time.
/// ```
/// # use harvest::info_time;
/// # use chrono::Local;
/// # let n = 7;
/// info_time!("harvested {} pages", n);
/// let start = Local::now();
/// info_time!(start, "harvested {} pages", n);
/// ```
#[macro_export]
macro_rules! info_time {
    ($strfm:literal $(,)? $($arg:expr),*) => {{
        println!("{:<30} : {}", Local::now(), format!($strfm, $($arg),*));
    }};
    ($time:expr, $strfm:literal $(,)? $($arg:expr),*) => {{
        let local_now = Local::now();
        let elapsed_secs = (local_now - $time).num_milliseconds() as f64 / 1000.0;
        println!(
            "{:<30} : {} ({:.3} sec)",
            local_now,
            format!($strfm, $($arg),*),
            elapsed_secs
        );
    }};
}
