//! Currency, score, and the energy ledger.
//!
//! Currency is spent up front and never goes negative; a failed spend is
//! the caller's signal to reject the command. Energy is a reservation
//! ledger: generators add capacity, consumers reserve it, and firing is
//! gated on the balance staying non-negative.

use rampart_core::catalog::EconomyTuning;

#[derive(Debug, Clone)]
pub struct Economy {
    currency: u32,
    points: u32,
    energy_capacity: f64,
    energy_used: f64,
}

impl Economy {
    pub fn new(tuning: &EconomyTuning) -> Self {
        Self {
            currency: tuning.starting_currency,
            points: 0,
            energy_capacity: 0.0,
            energy_used: 0.0,
        }
    }

    pub fn currency(&self) -> u32 {
        self.currency
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn energy_capacity(&self) -> f64 {
        self.energy_capacity
    }

    pub fn energy_used(&self) -> f64 {
        self.energy_used
    }

    pub fn can_afford(&self, cost: u32) -> bool {
        self.currency >= cost
    }

    /// Debit `cost` if the balance covers it. Returns false untouched
    /// otherwise.
    pub fn spend(&mut self, cost: u32) -> bool {
        if self.currency < cost {
            return false;
        }
        self.currency -= cost;
        true
    }

    pub fn grant(&mut self, amount: u32) {
        self.currency = self.currency.saturating_add(amount);
    }

    pub fn award_points(&mut self, amount: u32) {
        self.points = self.points.saturating_add(amount);
    }

    /// Apply an emplacement's energy delta: positive reserves energy,
    /// negative adds capacity.
    pub fn apply_energy_delta(&mut self, delta: f64) {
        if delta >= 0.0 {
            self.energy_used += delta;
        } else {
            self.energy_capacity += -delta;
        }
    }

    /// Undo a previously applied delta (emplacement destroyed).
    pub fn release_energy_delta(&mut self, delta: f64) {
        if delta >= 0.0 {
            self.energy_used = (self.energy_used - delta).max(0.0);
        } else {
            self.energy_capacity = (self.energy_capacity - -delta).max(0.0);
        }
    }

    pub fn energy_available(&self) -> f64 {
        self.energy_capacity - self.energy_used
    }

    /// Whether energy consumers are allowed to fire this tick.
    pub fn has_energy(&self) -> bool {
        self.energy_available() >= 0.0
    }
}
