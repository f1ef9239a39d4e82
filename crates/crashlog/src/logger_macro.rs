#[macro_export]
macro_rules! log {
    ($level:expr, $tag:expr, $($arg:tt)*) => {
        $crate::global().log($level, $tag, &format!($($arg)*))
    }
}

#[macro_export]
macro_rules! verbose {
    ($tag:expr, $($arg:tt)*) => {
        $crate::log!($crate::LogLevel::Verbose, $tag, $($arg)*)
    }
}

#[macro_export]
macro_rules! debug {
    ($tag:expr, $($arg:tt)*) => {
        $crate::log!($crate::LogLevel::Debug, $tag, $($arg)*)
    }
}

#[macro_export]
macro_rules! info {
    ($tag:expr, $($arg:tt)*) => {
        $crate::log!($crate::LogLevel::Info, $tag, $($arg)*)
    }
}

#[macro_export]
macro_rules! warn {
    ($tag:expr, $($arg:tt)*) => {
        $crate::log!($crate::LogLevel::Warn, $tag, $($arg)*)
    }
}

#[macro_export]
macro_rules! error {
    ($tag:expr, $($arg:tt)*) => {
        $crate::log!($crate::LogLevel::Error, $tag, $($arg)*)
    }
}
