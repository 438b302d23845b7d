//===========================================================================//

macro_rules! invalid_data {
    ($e:expr) => {
        return Err($crate::error::DecodeError::InvalidData(
            ::std::string::String::from($e),
        ))
    };
    ($fmt:expr, $($arg:tt)+) => {
        return Err($crate::error::DecodeError::InvalidData(
            format!($fmt, $($arg)+),
        ))
    };
}

macro_rules! limit_exceeded {
    ($fmt:expr, $($arg:tt)+) => {
        return Err($crate::error::DecodeError::LimitExceeded(
            format!($fmt, $($arg)+),
        ))
    };
}

//===========================================================================//
