//! OpenDART API modules.
//!
//! One module per endpoint group (DS001 through DS006). Every method maps to
//! exactly one remote endpoint and returns its [`Envelope`](dart_model::Envelope).
//! Required parameters are validated only by the remote service.

pub mod disclosure;
pub mod financial;
pub mod major_event;
pub mod ownership;
pub mod periodic;
pub mod registration;

pub use disclosure::DisclosureApi;
pub use financial::FinancialStatementApi;
pub use major_event::MajorEventApi;
pub use ownership::OwnershipApi;
pub use periodic::PeriodicReportApi;
pub use registration::RegistrationStatementApi;
