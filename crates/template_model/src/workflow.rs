//! Approval workflow entity

use crate::{Prototype, Result};
use serde::{Deserialize, Serialize};

/// Approval routing for documents produced from a template.
///
/// `required_approvals` is business data entered by catalog administrators;
/// it is not validated against the approver list (see
/// [`Workflow::is_satisfiable`]). `timeout_days` is likewise plain data, not
/// an execution timeout.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workflow {
    /// Approver identifiers (emails), in routing order
    pub approvers: Vec<String>,
    /// How many approvals are required before the document is final
    pub required_approvals: u32,
    /// Days an approver has to respond
    pub timeout_days: u32,
}

impl Workflow {
    pub fn new(required_approvals: u32, timeout_days: u32) -> Self {
        Self {
            approvers: Vec::new(),
            required_approvals,
            timeout_days,
        }
    }

    pub fn with_approver(mut self, approver: impl Into<String>) -> Self {
        self.approvers.push(approver.into());
        self
    }

    /// Whether enough approvers are listed to ever reach the required count.
    pub fn is_satisfiable(&self) -> bool {
        self.approvers.len() >= self.required_approvals as usize
    }
}

impl Prototype for Workflow {
    fn deep_clone(&self) -> Result<Self> {
        Ok(Self {
            approvers: self.approvers.iter().cloned().collect(),
            required_approvals: self.required_approvals,
            timeout_days: self.timeout_days,
        })
    }
}
