//! Missing-value remediation for InsightFlow tables.
//!
//! A [`RemediationPolicy`] either drops incomplete rows/columns or fills
//! missing cells (mean, median, mode or a constant). Policies are chosen by
//! key with [`select_policy`] and applied with [`remediate`] or through a
//! [`MissingValueHandler`]. Inputs are never modified; every call returns a
//! new [`flow_model::Table`].

mod error;
mod handler;
mod policy;
mod remediate;
mod selector;

pub use error::{RemediationError, Result};
pub use handler::MissingValueHandler;
pub use policy::{Axis, DropPolicy, FillMethod, FillPolicy, FillValue, RemediationPolicy};
pub use remediate::{drop_missing, fill_missing, remediate};
pub use selector::{RemediationConfig, StrategyKey, policy_for, select_policy};
