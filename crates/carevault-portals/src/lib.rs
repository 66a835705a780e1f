//! # carevault-portals
//!
//! Read-only portal content for the CareVault demo: the hospital report
//! table and dashboard, the patient's profile and reports, the feedback
//! history, and the landing page tiles.
//!
//! All data is hardcoded and fictional. The only logic here is the report
//! search used by the hospital Reports tab.

pub mod mock_data;
pub mod search;

pub use search::search_reports;
