//! Terminal states: the 12-quarter horizon, bankruptcy, and the
//! fail-fast rejection of commands once the game has ended.

use cleanstart_core::error::SimError;
use cleanstart_core::funding::FundingSource;
use cleanstart_core::{Company, QuarterDecisions, TechnologyTrack};

/// A seed whose event draws stay friendly: the default-decision Solar
/// company collects enough partnership and subsidy cash to finish all
/// 12 quarters comfortably clear of the bankruptcy line.
const FRIENDLY_SEED: u64 = 2_984;

#[test]
fn solar_defaults_run_the_full_twelve_quarters() {
    let mut company = Company::new(TechnologyTrack::Solar, FRIENDLY_SEED);
    for _ in 0..12 {
        company
            .advance_quarter(QuarterDecisions::default())
            .expect("advance");
    }
    assert!(company.game_over);
    assert_eq!(
        company.game_over_reason,
        "Game Complete - 12 quarters finished"
    );
    assert_eq!(company.metrics.quarter, 12);
    assert_eq!(company.history.len(), 12);
}

#[test]
fn deep_insolvency_ends_in_bankruptcy() {
    let mut company = Company::new(TechnologyTrack::Solar, 77);
    company.metrics.cash = -1_200_000.0;

    company
        .advance_quarter(QuarterDecisions::default())
        .expect("advance");
    assert!(company.game_over);
    assert!(
        company.game_over_reason.contains("Bankruptcy"),
        "unexpected reason: {}",
        company.game_over_reason
    );
}

#[test]
fn a_finished_game_rejects_every_command() {
    let mut company = Company::new(TechnologyTrack::Solar, 77);
    company.metrics.cash = -1_200_000.0;
    company
        .advance_quarter(QuarterDecisions::default())
        .expect("advance");
    assert!(company.game_over);

    let history_len = company.history.len();
    let quarter = company.metrics.quarter;
    let cash = company.metrics.cash;

    let err = company
        .advance_quarter(QuarterDecisions::default())
        .unwrap_err();
    assert!(matches!(err, SimError::GameOver { .. }));
    assert!(company.raise_funding(FundingSource::Angel).is_err());
    assert!(company.hire_fire("Engineering", 1).is_err());

    // Nothing moved after termination.
    assert_eq!(company.history.len(), history_len);
    assert_eq!(company.metrics.quarter, quarter);
    assert_eq!(company.metrics.cash, cash);
}

#[test]
fn the_game_never_runs_past_quarter_twelve() {
    for seed in [6u64, 16, 26] {
        for track in [TechnologyTrack::Battery, TechnologyTrack::Hydrogen] {
            let mut company = Company::new(track, seed);
            while !company.game_over {
                company
                    .advance_quarter(QuarterDecisions::default())
                    .expect("advance");
                assert!(company.metrics.quarter <= 12);
            }
            assert!(!company.game_over_reason.is_empty());
        }
    }
}
