// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! Certification record model.
//!
//! Taxonomy enums are closed; an exhaustive match must name every variant.
//!
//! ```compile_fail
//! use cloudpath_model::Provider;
//!
//! fn label(p: Provider) -> &'static str {
//!     match p {
//!         Provider::Aws => "aws",
//!         Provider::Azure => "azure",
//!     }
//! }
//! ```

mod ids;
mod record;
mod record_set;
mod taxonomy;

pub use ids::{CertId, ParseError, ID_MAX_LEN};
pub use record::{CertificationRecord, NumericFacts, Resources, PASS_SCORE_MAX};
pub use record_set::{RecordSet, ValidationError};
pub use taxonomy::{Difficulty, Level, Provider};

pub const CRATE_NAME: &str = "cloudpath-model";
