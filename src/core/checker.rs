//! Sequenced conflict checks.
//!
//! Checks may be answered out of order. Only the answer to the most
//! recently issued check is kept; late answers to older checks are dropped.

use crate::core::conflicts::{ConflictQuery, ConflictReport, detect};
use crate::core::source::EventSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CheckTicket(u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub enum CheckStatus {
    #[default]
    Idle,
    Checking,
    Ready(ConflictReport),
}

#[derive(Debug, Default)]
pub struct ConflictChecker {
    issued: u64,
    status: CheckStatus,
}

impl ConflictChecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> CheckTicket {
        self.issued += 1;
        self.status = CheckStatus::Checking;
        CheckTicket(self.issued)
    }

    /// Returns `true` when `report` was applied.
    pub fn complete(&mut self, ticket: CheckTicket, report: ConflictReport) -> bool {
        if ticket.0 != self.issued {
            log::debug!(
                "dropping stale conflict check #{} (latest is #{})",
                ticket.0,
                self.issued
            );
            return false;
        }

        self.status = CheckStatus::Ready(report);
        true
    }

    pub fn run<S: EventSource + ?Sized>(
        &mut self,
        source: &mut S,
        query: &ConflictQuery,
    ) -> Option<&ConflictReport> {
        let ticket = self.begin();
        let report = detect(source, query);
        self.complete(ticket, report);
        self.report()
    }

    pub fn status(&self) -> &CheckStatus {
        &self.status
    }

    pub fn is_checking(&self) -> bool {
        matches!(self.status, CheckStatus::Checking)
    }

    pub fn report(&self) -> Option<&ConflictReport> {
        match &self.status {
            CheckStatus::Ready(report) => Some(report),
            _ => None,
        }
    }
}
