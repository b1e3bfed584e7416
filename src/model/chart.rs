//! Chart panel state - one doughnut chart per category
//!
//! A chart instance is built from a snapshot of its category's list. Before a
//! new instance is created the previous one for that category is destroyed,
//! so there is never more than one live instance per category.

use super::entry::Category;
use super::ledger::Ledger;
use chrono::Utc;
use tracing::debug;

/// Slice color as RGB components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Small xorshift generator for slice colors
///
/// Colors only need to be arbitrary, not reproducible across rebuilds.
#[derive(Debug, Clone)]
pub struct ColorPicker {
    state: u64,
}

impl ColorPicker {
    pub fn with_seed(seed: u64) -> Self {
        // xorshift has a fixed point at zero
        Self {
            state: seed.max(1),
        }
    }

    pub fn from_clock() -> Self {
        let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
        Self::with_seed(nanos as u64)
    }

    pub fn next_color(&mut self) -> Rgb {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        Rgb((x >> 16) as u8, (x >> 24) as u8, (x >> 32) as u8)
    }
}

/// One sector of a proportional chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlice {
    pub label: String,
    pub value: f64,
    pub color: Rgb,
}

/// A built chart for one category
#[derive(Debug, Clone, PartialEq)]
pub struct ChartInstance {
    pub serial: u64,
    pub category: Category,
    pub slices: Vec<ChartSlice>,
}

impl ChartInstance {
    /// Sum of absolute slice values, used as the full circle
    pub fn magnitude(&self) -> f64 {
        self.slices.iter().map(|s| s.value.abs()).sum()
    }

    /// Fraction of the circle taken by each slice, in slice order
    pub fn fractions(&self) -> Vec<f64> {
        let total = self.magnitude();
        self.slices
            .iter()
            .map(|s| if total > 0.0 { s.value.abs() / total } else { 0.0 })
            .collect()
    }
}

/// Chart lifecycle counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChartStats {
    pub created: usize,
    pub destroyed: usize,
    pub refreshes: usize,
}

/// Shared panel holding both category charts
#[derive(Debug, Clone)]
pub struct ChartPanel {
    pub visible: bool,
    expenses: Option<ChartInstance>,
    income: Option<ChartInstance>,
    next_serial: u64,
    stats: ChartStats,
    colors: ColorPicker,
}

impl Default for ChartPanel {
    fn default() -> Self {
        Self::new(ColorPicker::from_clock())
    }
}

impl ChartPanel {
    pub fn new(colors: ColorPicker) -> Self {
        Self {
            visible: false,
            expenses: None,
            income: None,
            next_serial: 0,
            stats: ChartStats::default(),
            colors,
        }
    }

    fn slot_mut(&mut self, category: Category) -> &mut Option<ChartInstance> {
        match category {
            Category::Expenses => &mut self.expenses,
            Category::Income => &mut self.income,
        }
    }

    pub fn instance(&self, category: Category) -> Option<&ChartInstance> {
        match category {
            Category::Expenses => self.expenses.as_ref(),
            Category::Income => self.income.as_ref(),
        }
    }

    /// Release the chart for a category; no-op when none exists
    pub fn destroy(&mut self, category: Category) {
        if let Some(instance) = self.slot_mut(category).take() {
            debug!(category = %category, serial = instance.serial, "chart destroyed");
            self.stats.destroyed += 1;
        }
    }

    /// Destroy and rebuild both charts from the current lists
    ///
    /// Runs whether or not the panel is visible.
    pub fn refresh(&mut self, ledger: &Ledger) {
        self.stats.refreshes += 1;
        for category in Category::all() {
            self.destroy(category);

            let list = ledger.list(category);
            if list.is_empty() {
                continue;
            }

            let slices = list
                .entries()
                .iter()
                .map(|entry| ChartSlice {
                    label: entry.name.clone(),
                    value: entry.amount,
                    color: self.colors.next_color(),
                })
                .collect();

            let serial = self.next_serial;
            self.next_serial += 1;
            *self.slot_mut(category) = Some(ChartInstance {
                serial,
                category,
                slices,
            });
            self.stats.created += 1;
            debug!(category = %category, serial, "chart created");
        }
    }

    /// Show or hide the panel, rebuilding on every show
    ///
    /// Hiding keeps the current instances in memory.
    pub fn toggle(&mut self, ledger: &Ledger) -> bool {
        self.visible = !self.visible;
        if self.visible {
            self.refresh(ledger);
        }
        self.visible
    }

    pub fn live_instances(&self) -> usize {
        usize::from(self.expenses.is_some()) + usize::from(self.income.is_some())
    }

    pub fn stats(&self) -> ChartStats {
        self.stats
    }
}
