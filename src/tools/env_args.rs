#[cfg(test)]
use std::cell::RefCell;
#[cfg(not(test))]
use std::env;

/// Value of a `--name=value` arg passed to the app, failing with `error_if_missing` otherwise.
/// Only the first `=` separates the name from the value.
///
/// Tests can't set the process args: wrap them with `with_env_args(args, fn)` instead.
pub fn retrieve_expected_arg_value<E>(arg_name: &str, error_if_missing: E) -> Result<String, E> {
    let arg_prefix = format!("{arg_name}=");
    get_env_args()
        .into_iter()
        .find_map(|arg| arg.strip_prefix(&arg_prefix).map(str::to_owned))
        .ok_or(error_if_missing)
}

#[cfg(not(test))]
fn get_env_args() -> Vec<String> {
    env::args().collect()
}

#[cfg(test)]
thread_local! {
    /// Args seen by the app while a test runs within `with_env_args`.
    static ENV_ARGS: RefCell<Vec<String>> = const { RefCell::new(vec![]) };
}
#[cfg(test)]
fn get_env_args() -> Vec<String> {
    ENV_ARGS.with(|vec| vec.borrow().clone())
}

/// Run `function` as if `args` had been passed to the app.
#[cfg(test)]
pub fn with_env_args<F, T>(args: Vec<String>, function: F) -> T
where
    F: FnOnce() -> T,
{
    ENV_ARGS.with(|refcell| {
        let old_value = refcell.replace(args);
        let result = function();
        refcell.replace(old_value);
        result
    })
}

#[cfg(test)]
mod tests {
    use crate::tools::env_args::{retrieve_expected_arg_value, with_env_args};
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        args = {
            vec!["--database-url=club.db".to_owned()],
            vec!["club-registry".to_owned(), "--database-url=/tmp/a=b.db".to_owned()],
            vec!["--database-url-backup=other.db".to_owned(), "--database-url=club.db".to_owned()],
            vec!["--another-arg=wrong".to_owned()],
            vec!["--database-url".to_owned()],
        },
        expected_result = {
            Ok("club.db".to_owned()),
            Ok("/tmp/a=b.db".to_owned()),
            Ok("club.db".to_owned()),
            Err("missing"),
            Err("missing"),
        }
    )]
    fn should_retrieve_expected_arg_value(
        args: Vec<String>,
        expected_result: Result<String, &'static str>,
    ) {
        let result = with_env_args(args, || {
            retrieve_expected_arg_value("--database-url", "missing")
        });

        assert_eq!(expected_result, result);
    }

    #[test]
    fn should_fail_when_no_arg_is_set() {
        let result = retrieve_expected_arg_value("--database-url", "missing");

        assert_eq!(Err("missing"), result);
    }
}
