//! Process exit codes

use rhetor_domain::{Error, ErrorKind};

/// Unclassified failure
pub const EXIT_INTERNAL: u8 = 1;
/// Invalid or missing configuration
pub const EXIT_CONFIGURATION: u8 = 2;
/// Rejected input
pub const EXIT_VALIDATION: u8 = 3;
/// An external service failed
pub const EXIT_UPSTREAM: u8 = 4;
/// The model answered without text
pub const EXIT_EMPTY_RESULT: u8 = 5;

/// Exit code for an error kind
pub fn code_for_kind(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::Configuration => EXIT_CONFIGURATION,
        ErrorKind::Validation => EXIT_VALIDATION,
        ErrorKind::Upstream(_) => EXIT_UPSTREAM,
        ErrorKind::EmptyResult => EXIT_EMPTY_RESULT,
        ErrorKind::Internal => EXIT_INTERNAL,
    }
}

/// Exit code for any error reaching `main`
///
/// Looks through the context chain for a domain error; anything else is internal.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<Error>())
        .map_or(EXIT_INTERNAL, |domain| code_for_kind(domain.kind()))
}
