//! Customer support escalation
//!
//! Participants:
//! - Handler: a support role with the severities it resolves
//! - Concrete handlers: front desk, lead, engineer, manager
//! - Client: submits problems to the front desk

use crate::demonstration::{Category, Demonstration};
use crate::error::DemoError;
use crate::report::DemoReport;
use patterns_escalation::{ChainError, Request, Severity, SupportTeam};

/// Chain of Responsibility demonstration
#[derive(Debug, Clone, Copy, Default)]
pub struct ChainOfResponsibility;

impl Demonstration for ChainOfResponsibility {
    fn name(&self) -> &'static str {
        "chain-of-responsibility"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn intent(&self) -> &'static str {
        "Pass a request along a chain of handlers until one of them handles it."
    }

    fn execute(&self) -> Result<DemoReport, DemoError> {
        let mut report = DemoReport::new(self.name(), self.category());
        let mut team = SupportTeam::assemble();

        let mut simple = Request::new(Severity::Simple);
        team.chain.submit(team.front_desk, &mut simple)?;
        report.check("simple problem is resolved", simple.is_resolved());
        report.check_eq(
            "front desk resolves the simple problem",
            &simple.resolved_by(),
            &Some(team.front_desk),
        );

        let mut critical = Request::new(Severity::Critical);
        let trace = team.chain.submit(team.front_desk, &mut critical)?;
        report.check("critical problem is resolved", critical.is_resolved());
        report.check(
            "front desk does not resolve the critical problem",
            critical.resolved_by() != Some(team.front_desk),
        );
        report.check(
            "lead does not resolve the critical problem",
            critical.resolved_by() != Some(team.lead),
        );
        report.check_eq(
            "engineer resolves the critical problem",
            &critical.resolved_by(),
            &Some(team.engineer),
        );
        report.check_eq(
            "critical problem passes front desk, lead, engineer",
            &trace.visited().to_vec(),
            &vec![team.front_desk, team.lead, team.engineer],
        );

        let loop_back = team.chain.set_successor(team.manager, team.front_desk);
        report.check(
            "linking manager back to front desk is rejected",
            matches!(loop_back, Err(ChainError::WouldCreateCycle { .. })),
        );

        Ok(report)
    }
}
