//! The reference customer support team

use crate::chain::EscalationChain;
use crate::handler::HandlerId;
use crate::severity::Severity;

/// Four-level support hierarchy: front desk, lead, engineer, manager.
///
/// | handler    | resolves                  | escalates to |
/// |------------|---------------------------|--------------|
/// | front desk | `no_problem`, `simple`    | lead         |
/// | lead       | `troublesome`             | engineer     |
/// | engineer   | `critical`                | manager      |
/// | manager    | `urgent`                  | -            |
#[derive(Debug, Clone)]
pub struct SupportTeam {
    /// The wired chain
    pub chain: EscalationChain,
    /// Entry point of the chain
    pub front_desk: HandlerId,
    /// Second level
    pub lead: HandlerId,
    /// Third level
    pub engineer: HandlerId,
    /// Last level
    pub manager: HandlerId,
}

impl SupportTeam {
    /// Build and wire the team
    #[must_use]
    pub fn assemble() -> Self {
        let mut chain = EscalationChain::new();
        let front_desk = chain.add_handler("front-desk", [Severity::NoProblem, Severity::Simple]);
        let lead = chain.add_handler("lead", [Severity::Troublesome]);
        let engineer = chain.add_handler("engineer", [Severity::Critical]);
        let manager = chain.add_handler("manager", [Severity::Urgent]);

        chain.link_fresh(front_desk, lead);
        chain.link_fresh(lead, engineer);
        chain.link_fresh(engineer, manager);

        Self {
            chain,
            front_desk,
            lead,
            engineer,
            manager,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Request;

    #[test]
    fn walk_covers_whole_team() {
        let team = SupportTeam::assemble();
        assert_eq!(
            team.chain.walk(team.front_desk).unwrap(),
            vec![team.front_desk, team.lead, team.engineer, team.manager]
        );
    }

    #[test]
    fn urgent_reaches_manager() {
        let team = SupportTeam::assemble();
        let mut request = Request::new(Severity::Urgent);
        let trace = team.chain.submit(team.front_desk, &mut request).unwrap();
        assert_eq!(request.resolved_by(), Some(team.manager));
        assert_eq!(trace.escalations(), 3);
    }
}
