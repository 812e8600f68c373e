/// `eprintln!` that only prints while verbose output is enabled.
#[macro_export]
macro_rules! elogln {
    ($fmt:expr $(, $($arg:tt)*)?) => {
        if $crate::ENABLE_PRINTING.with(|e| *e.borrow()) {
            eprintln!($fmt $(, $($arg)*)?);
        }
    };
}
