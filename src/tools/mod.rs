use std::fmt::Debug;

pub mod env_args;
pub mod test;

/// Log the error and replace it with `value_to_return`.
pub fn log_error_and_return<E: Debug, T>(value_to_return: T) -> impl FnOnce(E) -> T {
    |e| {
        error!("{e:#?}");
        value_to_return
    }
}

pub fn log_message_and_return<E: Debug, T>(
    message: &str,
    value_to_return: T,
) -> impl FnOnce(E) -> T {
    move |e| {
        error!("{message}\n{e:#?}");
        value_to_return
    }
}

/// Log the error with some context and pass it along.
pub fn log_message<E: Debug>(message: &str) -> impl FnOnce(E) -> E {
    move |e| {
        error!("{message}\n{e:#?}");
        e
    }
}
