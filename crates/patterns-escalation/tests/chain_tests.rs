use patterns_escalation::{ChainError, EscalationChain, HandlerId, Request, Severity, SupportTeam};
use patterns_test_utils::{chain_layout_strategy, first_capable, init_tracing, linear_chain, severity_strategy};
use proptest::prelude::*;
use std::collections::HashSet;

#[test]
fn test_simple_problem_resolved_by_front_desk() {
    init_tracing();
    let team = SupportTeam::assemble();

    let mut problem = Request::new(Severity::Simple);
    team.chain.submit(team.front_desk, &mut problem).unwrap();

    assert!(problem.is_resolved());
    assert_eq!(problem.resolved_by(), Some(team.front_desk));
}

#[test]
fn test_critical_problem_escalates_to_engineer() {
    init_tracing();
    let team = SupportTeam::assemble();

    let mut problem = Request::new(Severity::Critical);
    let trace = team.chain.submit(team.front_desk, &mut problem).unwrap();

    // Passes front desk and lead unresolved
    assert!(problem.is_resolved());
    assert_ne!(problem.resolved_by(), Some(team.front_desk));
    assert_ne!(problem.resolved_by(), Some(team.lead));
    assert_eq!(problem.resolved_by(), Some(team.engineer));
    assert_eq!(trace.visited(), &[team.front_desk, team.lead, team.engineer]);
}

#[test]
fn test_no_problem_never_leaves_front_desk() {
    let team = SupportTeam::assemble();
    let mut problem = Request::new(Severity::NoProblem);
    let trace = team.chain.submit(team.front_desk, &mut problem).unwrap();
    assert_eq!(trace.escalations(), 0);
}

#[test]
fn test_chain_without_capable_handler_leaves_request_unresolved() {
    let mut chain = EscalationChain::new();
    let desk = chain.add_handler("desk", [Severity::Simple]);
    let lead = chain.add_handler("lead", [Severity::Troublesome]);
    chain.set_successor(desk, lead).unwrap();

    let mut problem = Request::new(Severity::Critical);
    let trace = chain.submit(desk, &mut problem).unwrap();

    assert!(!problem.is_resolved());
    assert_eq!(trace.visited(), &[desk, lead]);
}

#[test]
fn test_rejects_cycle_back_to_front_desk() {
    let mut team = SupportTeam::assemble();
    let err = team.chain.set_successor(team.manager, team.front_desk).unwrap_err();

    assert_eq!(
        err,
        ChainError::WouldCreateCycle {
            from: team.manager,
            to: team.front_desk
        }
    );
    assert_eq!(team.chain.successor(team.manager), None);
}

#[test]
fn test_handlers_from_other_chain_are_unknown() {
    let team = SupportTeam::assemble();
    let other = SupportTeam::assemble();

    let mut problem = Request::new(Severity::Simple);
    let err = team.chain.submit(other.front_desk, &mut problem).unwrap_err();
    assert_eq!(err, ChainError::HandlerNotFound(other.front_desk));
}

proptest! {
    #[test]
    fn prop_first_capable_handler_wins(
        layout in chain_layout_strategy(6),
        severity in severity_strategy(),
    ) {
        let (chain, ids) = linear_chain(&layout);
        let mut request = Request::new(severity);
        let trace = chain.submit(ids[0], &mut request).unwrap();

        match first_capable(&layout, severity) {
            Some(index) => {
                prop_assert_eq!(request.resolved_by(), Some(ids[index]));
                prop_assert_eq!(trace.visited(), &ids[..=index]);
            }
            None => {
                prop_assert!(!request.is_resolved());
                prop_assert_eq!(trace.visited(), &ids[..]);
            }
        }
    }

    #[test]
    fn prop_dispatch_never_revisits(
        layout in chain_layout_strategy(6),
        links in proptest::collection::vec((0..6usize, 0..6usize), 0..24),
        severity in severity_strategy(),
    ) {
        let mut chain = EscalationChain::new();
        let ids: Vec<HandlerId> = layout
            .iter()
            .enumerate()
            .map(|(i, caps)| chain.add_handler(format!("h{i}"), caps.iter().copied().collect::<patterns_escalation::Capabilities>()))
            .collect();

        for (from, to) in links {
            if from < ids.len() && to < ids.len() {
                // Rejected links leave the chain untouched
                let before = chain.successor(ids[from]);
                if chain.set_successor(ids[from], ids[to]).is_err() {
                    prop_assert_eq!(chain.successor(ids[from]), before);
                }
            }
        }

        for &entry in &ids {
            let mut request = Request::new(severity);
            let trace = chain.submit(entry, &mut request).unwrap();
            let unique: HashSet<HandlerId> = trace.visited().iter().copied().collect();
            prop_assert_eq!(unique.len(), trace.visited().len());
            prop_assert!(trace.visited().len() <= ids.len());
        }
    }
}
