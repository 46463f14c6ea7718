//! The simulation engine — one company, one playthrough.
//!
//! QUARTER PIPELINE (fixed, documented, never reordered):
//!   1. Apply decision overrides
//!   2. Increment the quarter counter
//!   3. Technology level        (1 RNG draw)
//!   4. Unit cost
//!   5. Demand                  (1 RNG draw)
//!   6. Sales and production
//!   7. Financials
//!   8. Market share
//!   9. Competitor drift        (3 RNG draws per active competitor)
//!  10. Valuation
//!  11. Random event            (1 RNG draw, +1 on fire)
//!  12. Game-over check
//!  13. History snapshot
//!
//! RULES:
//!   - Each stage reads the outputs of the stages before it.
//!   - All validation happens before stage 1; a rejected advance
//!     leaves the prior quarter's state untouched.
//!   - The RNG draw order above is part of the engine contract.

use crate::command::{FundingOutcome, HireOutcome, QuarterDecisions, QuarterReport};
use crate::competitor::{starting_roster, Competitor};
use crate::department::{starting_departments, Department, ENGINEERING};
use crate::error::{SimError, SimResult};
use crate::events::{self, EffectKey, EventLogEntry, RandomEvent, EVENT_PROBABILITY};
use crate::funding::{FundingSource, GRANT_APPROVAL_PROBABILITY, SERIES_B_PRIOR_RAISE};
use crate::market;
use crate::metrics::Metrics;
use crate::rng::GameRng;
use crate::snapshot::CompanyState;
use crate::tech::{TechnologyTrack, TrackParams};
use crate::types::{format_usd, Money, Quarter, Units};

/// The playthrough ends after this many quarters.
pub const FINAL_QUARTER: Quarter = 12;

/// Cash below this is bankruptcy.
pub const BANKRUPTCY_FLOOR: Money = -1_000_000.0;

/// Fixed overhead charged every quarter on top of salaries and spend.
const QUARTERLY_OVERHEAD: Money = 50_000.0;

const REASON_BANKRUPT: &str = "Bankruptcy - Cash balance below -$1M";
const REASON_COMPLETE: &str = "Game Complete - 12 quarters finished";

pub struct Company {
    pub track: TechnologyTrack,
    pub metrics: Metrics,
    pub history: Vec<Metrics>,
    pub departments: Vec<Department>,
    pub competitors: Vec<Competitor>,

    // Current decision inputs, overwritten by each advance_quarter call.
    pub price: Money,
    pub planned_production: Units,
    pub marketing_spend: Money,
    pub rd_spend: Money,

    pub game_over: bool,
    pub game_over_reason: String,
    pub last_event: Option<RandomEvent>,
    pub event_log: Vec<EventLogEntry>,

    params: TrackParams,
    cumulative_rd_spend: Money,
    /// Capital raised through raise_funding, excluding the seed round.
    /// Gates Series B.
    external_capital_raised: Money,
    rng: GameRng,
}

impl Company {
    /// Found a company on the given technology track. No randomness is
    /// drawn at construction: two companies with the same seed are
    /// byte-identical until their command sequences diverge.
    pub fn new(track: TechnologyTrack, seed: u64) -> Self {
        Self {
            track,
            metrics: Metrics::starting(track),
            history: Vec::new(),
            departments: starting_departments(),
            competitors: starting_roster(),
            price: 450.0,
            planned_production: 1_000,
            marketing_spend: 50_000.0,
            rd_spend: 100_000.0,
            game_over: false,
            game_over_reason: String::new(),
            last_event: None,
            event_log: Vec::new(),
            params: track.params(),
            cumulative_rd_spend: 0.0,
            external_capital_raised: 0.0,
            rng: GameRng::from_seed(seed),
        }
    }

    // ── Commands ───────────────────────────────────────────────────

    /// Advance the simulation by one quarter.
    ///
    /// Omitted decision fields keep their previous value. Fails fast,
    /// before any mutation, on a finished game, out-of-range decision
    /// values, or a market with no active competitors.
    pub fn advance_quarter(&mut self, decisions: QuarterDecisions) -> SimResult<QuarterReport> {
        self.reject_if_over()?;
        validate_decisions(&decisions)?;
        if self.active_competitors().next().is_none() {
            return Err(SimError::NoActiveCompetitors);
        }

        // 1. Decisions
        self.apply_decisions(decisions);

        // 2. Quarter counter
        self.metrics.quarter += 1;

        // 3-4. Technology and unit cost
        self.update_technology();
        self.update_unit_cost();

        // 5-6. Demand, sales, production
        let demand = self.calculate_demand();
        self.metrics.units_sold = demand.min(self.planned_production);
        self.metrics.cumulative_production += self.metrics.units_sold;

        // 7. Financials
        self.update_financials();

        // 8. Market share
        self.update_market_share();

        // 9. Competitor drift
        for competitor in self.competitors.iter_mut().filter(|c| c.is_active) {
            competitor.drift(&mut self.rng);
        }

        // 10. Valuation
        self.update_valuation();

        // 11. Random event
        let fired = if self.rng.chance(EVENT_PROBABILITY) {
            Some(self.trigger_random_event())
        } else {
            None
        };

        // 12. Game over
        if self.metrics.cash < BANKRUPTCY_FLOOR {
            self.game_over = true;
            self.game_over_reason = REASON_BANKRUPT.to_string();
        } else if self.metrics.quarter >= FINAL_QUARTER {
            self.game_over = true;
            self.game_over_reason = REASON_COMPLETE.to_string();
        }

        // 13. History
        self.history.push(self.metrics.clone());

        log::info!(
            "Q{}: sold {} @ {:.0}, net {:.0}, cash {:.0}, share {:.3}",
            self.metrics.quarter,
            self.metrics.units_sold,
            self.price,
            self.metrics.net_income,
            self.metrics.cash,
            self.metrics.market_share,
        );

        Ok(QuarterReport {
            quarter: self.metrics.quarter,
            units_sold: self.metrics.units_sold,
            revenue: self.metrics.revenue,
            net_income: self.metrics.net_income,
            cash: self.metrics.cash,
            market_share: self.metrics.market_share,
            tech_level: self.metrics.tech_level,
            unit_cost: self.metrics.unit_cost,
            event: fired,
        })
    }

    /// Attempt a funding round. Declines (Series B before a Series A,
    /// a rejected grant application) are ordinary outcomes; only a
    /// finished game is an error.
    pub fn raise_funding(&mut self, source: FundingSource) -> SimResult<FundingOutcome> {
        self.reject_if_over()?;
        let terms = source.terms();

        if source == FundingSource::VcB && self.external_capital_raised < SERIES_B_PRIOR_RAISE {
            log::warn!("Series B declined: no prior Series A");
            return Ok(FundingOutcome::declined("Need to raise Series A first"));
        }

        if source == FundingSource::Grant && !self.rng.chance(GRANT_APPROVAL_PROBABILITY) {
            log::warn!("grant application declined");
            return Ok(FundingOutcome::declined("Grant application not approved"));
        }

        self.metrics.cash += terms.amount;
        self.metrics.total_funding_raised += terms.amount;
        self.external_capital_raised += terms.amount;
        self.metrics.equity_given += terms.dilution;

        log::info!(
            "raised {} from {} for {:.0}% equity",
            format_usd(terms.amount),
            source.label(),
            terms.dilution * 100.0
        );

        Ok(FundingOutcome {
            success: true,
            amount: terms.amount,
            dilution: terms.dilution,
            message: format!("Successfully raised {}", format_usd(terms.amount)),
        })
    }

    /// Hire (positive delta) or fire (negative delta) in a department.
    /// An unknown department is a usage error; a delta that would go
    /// below zero heads is a rejected order, headcount unchanged.
    pub fn hire_fire(&mut self, department: &str, delta: i32) -> SimResult<HireOutcome> {
        self.reject_if_over()?;
        let dept = self
            .departments
            .iter_mut()
            .find(|d| d.name == department)
            .ok_or_else(|| SimError::UnknownDepartment(department.to_string()))?;

        let new_headcount = dept.headcount as i64 + delta as i64;
        if new_headcount < 0 {
            log::warn!("rejected hire_fire({department}, {delta}): would go negative");
            return Ok(HireOutcome {
                success: false,
                message: "Cannot have negative headcount".to_string(),
                new_headcount: dept.headcount,
            });
        }

        dept.headcount = new_headcount as u32;
        let action = if delta > 0 { "Hired" } else { "Fired" };
        Ok(HireOutcome {
            success: true,
            message: format!(
                "{action} {} employee(s) in {department}",
                delta.unsigned_abs()
            ),
            new_headcount: dept.headcount,
        })
    }

    /// Full read-only snapshot for the presentation layer. Everything
    /// is cloned; the caller cannot reach live state through it.
    pub fn get_current_state(&self) -> CompanyState {
        CompanyState {
            metrics: self.metrics.clone(),
            departments: self.departments.clone(),
            competitors: self.competitors.clone(),
            track: self.track,
            track_params: self.params,
            history: self.history.clone(),
            game_over: self.game_over,
            game_over_reason: self.game_over_reason.clone(),
            last_event: self.last_event.clone(),
            event_log: self.event_log.clone(),
        }
    }

    // ── Pipeline stages ────────────────────────────────────────────

    fn apply_decisions(&mut self, decisions: QuarterDecisions) {
        if let Some(price) = decisions.price {
            self.price = price;
        }
        if let Some(production) = decisions.production {
            self.planned_production = production;
        }
        if let Some(marketing) = decisions.marketing {
            self.marketing_spend = marketing;
        }
        if let Some(rd) = decisions.rd {
            self.rd_spend = rd;
        }
    }

    /// Tech level is recomputed from cumulative R&D each quarter, not
    /// accumulated, so the jitter never compounds.
    fn update_technology(&mut self) {
        self.cumulative_rd_spend += self.rd_spend;
        let rd_factor = (1.0 + self.cumulative_rd_spend / 100_000.0).ln()
            * 0.05
            * self.params.rd_effectiveness;
        let engineer_factor = self.engineering_headcount() as f64 * 0.01;
        let jitter = self.rng.uniform(0.98, 1.02);
        self.metrics.tech_level = (1.0 + rd_factor + engineer_factor) * jitter;
        log::debug!(
            "Q{} tech: rd_factor={rd_factor:.4} engineers={engineer_factor:.2} level={:.4}",
            self.metrics.quarter,
            self.metrics.tech_level
        );
    }

    /// Unit cost is rebuilt from the track's base cost every quarter,
    /// so rounding never compounds either.
    fn update_unit_cost(&mut self) {
        let learning = market::learning_factor(self.metrics.cumulative_production);
        let tech_factor = 1.0 / self.metrics.tech_level;
        self.metrics.unit_cost = self.params.base_unit_cost * learning * tech_factor;
    }

    fn calculate_demand(&mut self) -> Units {
        let current_market =
            market::addressable_market(self.params.initial_market_size, self.metrics.quarter);

        let active: Vec<&Competitor> = self.competitors.iter().filter(|c| c.is_active).collect();
        let avg_price = active.iter().map(|c| c.price).sum::<f64>() / active.len() as f64;
        let avg_tech = active.iter().map(|c| c.tech_level).sum::<f64>() / active.len() as f64;

        let price_effect = market::price_effect(self.price, avg_price, self.params.price_elasticity);
        let marketing_effect = market::marketing_effect(self.marketing_spend);
        let tech_effect = market::tech_effect(self.metrics.tech_level, avg_tech);

        // Our slice of the market, competing against every active rival.
        let our_share = (price_effect * marketing_effect * tech_effect) / (active.len() + 1) as f64;
        let jitter = self.rng.uniform(0.85, 1.15);

        let demand = (current_market * our_share * jitter).max(0.0).floor() as Units;
        log::debug!(
            "Q{} demand: market={current_market:.0} price_fx={price_effect:.3} \
             mkt_fx={marketing_effect:.3} tech_fx={tech_effect:.3} demand={demand}",
            self.metrics.quarter
        );
        demand
    }

    fn update_financials(&mut self) {
        let m = &mut self.metrics;
        m.revenue = m.units_sold as f64 * self.price;
        m.cogs = m.units_sold as f64 * m.unit_cost;
        m.gross_profit = m.revenue - m.cogs;

        let salaries: Money = self.departments.iter().map(|d| d.quarterly_salaries()).sum();
        m.operating_expenses = salaries + self.marketing_spend + self.rd_spend + QUARTERLY_OVERHEAD;
        m.net_income = m.gross_profit - m.operating_expenses;
        m.cash += m.net_income;
    }

    /// Competitor sales are estimated from the INITIAL market size on
    /// purpose: it keeps their "sales" comparable across quarters
    /// without modeling a full demand curve for each of them.
    fn update_market_share(&mut self) {
        let our_sales = self.metrics.units_sold as f64;
        let competitor_sales: f64 = self
            .active_competitors()
            .map(|c| self.params.initial_market_size * c.market_share * 0.9)
            .sum();
        let total = our_sales + competitor_sales;
        self.metrics.market_share = if total > 0.0 { our_sales / total } else { 0.0 };
    }

    fn update_valuation(&mut self) {
        let m = &mut self.metrics;
        let revenue_multiple = if m.revenue > 0.0 { 3.0 } else { 1.0 };
        let revenue_value = m.revenue * 4.0 * revenue_multiple; // annualized
        let tech_premium = m.tech_level * 500_000.0;
        let market_premium = m.market_share * 2_000_000.0;
        let cash_value = m.cash.max(0.0);

        let value = revenue_value + tech_premium + market_premium + cash_value;
        // Floor: valuation never drops below half of all capital raised.
        m.valuation = value.max(m.total_funding_raised * 0.5);
    }

    fn trigger_random_event(&mut self) -> RandomEvent {
        let catalog = events::catalog();
        let event = catalog[self.rng.pick_index(catalog.len())].clone();
        log::info!("event fired in Q{}: {}", self.metrics.quarter, event.title);
        self.apply_event(&event);
        self.event_log.push(EventLogEntry {
            quarter: self.metrics.quarter,
            event: event.clone(),
        });
        self.last_event = Some(event.clone());
        event
    }

    /// Apply an event's effects. Only the keys matched here mutate
    /// state; the remaining catalog keys (demand_boost,
    /// production_limit, market_share_mult, marketing_efficiency,
    /// tech_level) are advisory and deliberately left inert.
    fn apply_event(&mut self, event: &RandomEvent) {
        if let Some(delta) = event.effect(EffectKey::Cash) {
            self.metrics.cash += delta;
        }
        if let Some(mult) = event.effect(EffectKey::TechBoost) {
            self.metrics.tech_level *= mult;
        }
        if let Some(mult) = event.effect(EffectKey::TechLevelMult) {
            self.metrics.tech_level *= mult;
        }
        if let Some(mult) = event.effect(EffectKey::UnitCostMult) {
            self.metrics.unit_cost *= mult;
        }
        if event.effect(EffectKey::EngineerLoss).is_some() {
            if let Some(dept) = self.departments.iter_mut().find(|d| d.name == ENGINEERING) {
                if dept.headcount > 0 {
                    dept.headcount -= 1;
                }
            }
        }
        if let Some(extra) = event.effect(EffectKey::OperatingCost) {
            // Lands on the reported expense line only; the quarter's
            // cash movement is already settled.
            self.metrics.operating_expenses += extra;
        }
        if let Some(mult) = event.effect(EffectKey::ValuationMult) {
            self.metrics.valuation *= mult;
        }
    }

    // ── Helpers ────────────────────────────────────────────────────

    fn reject_if_over(&self) -> SimResult<()> {
        if self.game_over {
            return Err(SimError::GameOver {
                reason: self.game_over_reason.clone(),
            });
        }
        Ok(())
    }

    fn active_competitors(&self) -> impl Iterator<Item = &Competitor> + '_ {
        self.competitors.iter().filter(|c| c.is_active)
    }

    fn engineering_headcount(&self) -> u32 {
        self.departments
            .iter()
            .find(|d| d.name == ENGINEERING)
            .map(|d| d.headcount)
            .unwrap_or(0)
    }
}

fn validate_decisions(decisions: &QuarterDecisions) -> SimResult<()> {
    if let Some(price) = decisions.price {
        if !price.is_finite() || price <= 0.0 {
            return Err(SimError::InvalidDecision(format!(
                "price must be a positive amount, got {price}"
            )));
        }
    }
    if let Some(marketing) = decisions.marketing {
        if !marketing.is_finite() || marketing < 0.0 {
            return Err(SimError::InvalidDecision(format!(
                "marketing spend must be non-negative, got {marketing}"
            )));
        }
    }
    if let Some(rd) = decisions.rd {
        if !rd.is_finite() || rd < 0.0 {
            return Err(SimError::InvalidDecision(format!(
                "R&D spend must be non-negative, got {rd}"
            )));
        }
    }
    Ok(())
}
