//! Decoration chains built through the public macros.

use std::error::Error as _;
use std::fmt;
use std::io;

use errtag::{CallerIdentity, Decorator, Error, ErrorKind, ResultExt, TagConfig};
use pretty_assertions::assert_eq;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::TRACE.into()),
        )
        .with_test_writer()
        .try_init();
}

#[derive(Debug, PartialEq, Eq)]
struct QuotaExceeded {
    id: u64,
}

impl fmt::Display for QuotaExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "quota {} exceeded", self.id)
    }
}

impl std::error::Error for QuotaExceeded {}

mod storage {
    use super::QuotaExceeded;

    pub fn write_page(id: u64) -> errtag::Result<()> {
        Err(errtag::decorate!(QuotaExceeded { id }))
    }
}

mod handlers {
    pub fn save(id: u64) -> errtag::Result<()> {
        super::storage::write_page(id).map_err(|err| errtag::decorate!(err, "save {}", id))
    }
}

#[test]
fn test_unwrap_yields_original() {
    init_tracing();

    let err = storage::write_page(7).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decorated);
    assert_eq!(err.tag(), "[str] ");
    assert_eq!(err.to_string(), "[str]: quota 7 exceeded");
    assert_eq!(err.downcast_source::<QuotaExceeded>().unwrap(), QuotaExceeded { id: 7 });
}

#[test]
fn test_unwrap_yields_same_instance() {
    let cause = errtag::into_cause(QuotaExceeded { id: 9 });
    let cause_ptr = &*cause as *const (dyn std::error::Error + Send + Sync) as *const ();

    let err = errtag::decorate(Some(cause), errtag::caller!().as_ref(), "");
    let borrowed = err.source_ref().unwrap() as *const (dyn std::error::Error + Send + Sync);
    assert!(std::ptr::eq(borrowed as *const (), cause_ptr));

    let taken = err.into_source().unwrap();
    let taken_ptr = &*taken as *const (dyn std::error::Error + Send + Sync) as *const ();
    assert!(std::ptr::eq(taken_ptr, cause_ptr));
    assert_eq!(taken.downcast_ref::<QuotaExceeded>(), Some(&QuotaExceeded { id: 9 }));
}

#[test]
fn test_repeated_wrapping_extends_chain() {
    init_tracing();

    let err = handlers::save(3).unwrap_err();
    assert_eq!(err.to_string(), "[hnd] save 3: [str]: quota 3 exceeded");
    assert_eq!(err.chain().count(), 3);

    let caller = err.caller().unwrap();
    assert_eq!(caller.package(), "handlers");
    assert_eq!(caller.function(), "save");

    let inner = err.source().unwrap().downcast_ref::<Error>().unwrap();
    assert_eq!(inner.tag(), "[str] ");
    assert_eq!(inner.caller().map(|c| c.function()), Some("write_page"));

    let inner = err.downcast_source::<Error>().unwrap();
    let original = inner.downcast_source::<QuotaExceeded>().unwrap();
    assert_eq!(original, QuotaExceeded { id: 3 });
}

#[test]
fn test_standalone_error_has_no_source() {
    let err = errtag::decorate!(None, "limit {} reached", 10);
    assert_eq!(err.to_string(), "[chn] limit 10 reached");
    assert!(err.source().is_none());
    assert!(err.into_source().is_none());
}

#[test]
fn test_invalid_call() {
    let err = errtag::decorate!(None);
    assert_eq!(err.kind(), ErrorKind::InvalidCall);
    assert!(err.to_string().contains("IS INVALID"));
    assert!(err.to_string().starts_with("[chn] "));
}

#[test]
fn test_location_points_at_call_site() {
    let line = line!() + 1;
    let err = errtag::decorate!(io::Error::other("boom"), "ctx");
    let location = err.location().unwrap();
    assert_eq!(location.line(), line);
    assert!(location.file().ends_with("chain.rs"));
}

#[test]
fn test_custom_decorator() {
    let decorator = Decorator::new(TagConfig::new().with_function(true));
    let caller = CallerIdentity::parse("app::handlers::openFile").unwrap();
    let cause = errtag::into_cause(io::Error::other("boom"));
    let err = decorator.decorate(Some(cause), Some(&caller), "");
    assert_eq!(err.to_string(), "[hnd_of]: boom");
}

#[test]
fn test_result_ext_with_macro_caller() {
    let read: std::result::Result<(), io::Error> = Err(io::Error::other("eof"));
    let err = read
        .decorate_err(errtag::caller!().as_ref(), "read header")
        .unwrap_err();
    assert_eq!(err.to_string(), "[chn] read header: eof");
    assert_eq!(
        err.caller().map(|c| c.function()),
        Some("test_result_ext_with_macro_caller")
    );
}
