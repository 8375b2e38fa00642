//! Tests for exit code mapping

use anyhow::Context;
use rhetor::exit::{
    EXIT_CONFIGURATION, EXIT_EMPTY_RESULT, EXIT_INTERNAL, EXIT_UPSTREAM, EXIT_VALIDATION,
    exit_code,
};
use rhetor_domain::Error;

#[test]
fn test_each_error_kind_has_its_code() {
    let cases = [
        (Error::configuration("missing key"), EXIT_CONFIGURATION),
        (Error::validation("empty topic"), EXIT_VALIDATION),
        (Error::embedding("401"), EXIT_UPSTREAM),
        (Error::vector_index("timeout"), EXIT_UPSTREAM),
        (Error::generation("429"), EXIT_UPSTREAM),
        (Error::empty_result("gpt-4"), EXIT_EMPTY_RESULT),
        (Error::internal("bug"), EXIT_INTERNAL),
    ];
    for (err, code) in cases {
        let message = err.to_string();
        assert_eq!(exit_code(&anyhow::Error::new(err)), code, "{message}");
    }
}

#[test]
fn test_domain_error_found_behind_context() {
    let result: Result<(), Error> = Err(Error::validation("bad temperature"));
    let err = result.context("Generating statement").unwrap_err();
    assert_eq!(exit_code(&err), EXIT_VALIDATION);
}

#[test]
fn test_foreign_error_is_internal() {
    let err = anyhow::anyhow!("disk full");
    assert_eq!(exit_code(&err), EXIT_INTERNAL);
}
