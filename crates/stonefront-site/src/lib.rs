//! Site chrome behavior.
//!
//! The pieces of the site that live outside the portfolio module: each is
//! a small, independent state machine or pure function wired to its own
//! page events, sharing no state with the portfolio beyond element ids
//! and the analytics seam.
//!
//! - [`nav`]: mobile menu toggle and active-link highlighting
//! - [`header`]: sticky-header scroll classes (hide down, show up)
//! - [`scroll`]: smooth-scroll anchor offsets and scroll-depth milestones
//! - [`accordion`]: exclusive-open FAQ accordion with ARIA flags
//! - [`contact`]: quote-request validation and mailto construction

pub mod accordion;
pub mod contact;
pub mod header;
pub mod nav;
pub mod scroll;

pub use accordion::Accordion;
pub use contact::{FormSubmission, QuoteRequest};
pub use header::{HeaderClasses, HeaderScroll};
pub use nav::NavMenu;
pub use scroll::ScrollDepth;
