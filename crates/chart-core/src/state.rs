// File: crates/chart-core/src/state.rs
// Summary: Serializable chart state for host-driven suspend/resume.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::purchase::PurchaseRecord;

/// Everything a chart needs to be restored verbatim: the current purchase list.
/// Derived geometry is not stored; it is recomputed on the next draw.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartState {
    pub purchases: Vec<PurchaseRecord>,
}

impl ChartState {
    pub fn new(purchases: Vec<PurchaseRecord>) -> Self { Self { purchases } }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}
