//! Count-up animation for the home page statistics.
//!
//! The counter is a plain state machine driven by discrete ticks. The view
//! owns the timer and feeds ticks in; this module only decides what each
//! tick displays, so the whole animation can be checked without a clock.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatKey {
    Children,
    Satisfaction,
    Years,
    Specialists,
}

impl StatKey {
    pub const ALL: [StatKey; 4] = [
        StatKey::Children,
        StatKey::Satisfaction,
        StatKey::Years,
        StatKey::Specialists,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StatKey::Children => "children",
            StatKey::Satisfaction => "satisfaction",
            StatKey::Years => "years",
            StatKey::Specialists => "specialists",
        }
    }

    /// Suffix shown after the number (`98%`, `500+`).
    pub fn suffix(self) -> &'static str {
        match self {
            StatKey::Satisfaction => "%",
            _ => "+",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatTarget {
    pub key: StatKey,
    pub target: u32,
}

impl StatTarget {
    pub const fn new(key: StatKey, target: u32) -> Self {
        Self { key, target }
    }
}

/// Figures published on the site.
pub fn default_targets() -> Vec<StatTarget> {
    vec![
        StatTarget::new(StatKey::Children, 500),
        StatTarget::new(StatKey::Satisfaction, 98),
        StatTarget::new(StatKey::Years, 10),
        StatTarget::new(StatKey::Specialists, 25),
    ]
}

/// Total duration split into a fixed number of equal steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterPlan {
    pub duration_ms: u64,
    pub steps: u32,
}

impl Default for CounterPlan {
    fn default() -> Self {
        Self {
            duration_ms: 2000,
            steps: 60,
        }
    }
}

impl CounterPlan {
    /// Delay between two ticks (2000 / 60 ≈ 33.3 ms by default).
    pub fn interval_ms(&self) -> f64 {
        self.duration_ms as f64 / self.steps.max(1) as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterPhase {
    Idle,
    Running,
    Finished,
}

/// Result of feeding one tick to the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Values moved forward; keep the timer running.
    Advanced,
    /// Final step reached; values equal their targets and the timer must stop.
    Finished,
    /// Counter is not running; the tick was dropped.
    Ignored,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatsCounter {
    targets: Vec<StatTarget>,
    plan: CounterPlan,
    step: u32,
    values: Vec<u32>,
    phase: CounterPhase,
}

impl StatsCounter {
    pub fn new(targets: Vec<StatTarget>, plan: CounterPlan) -> Self {
        let values = vec![0; targets.len()];
        Self {
            targets,
            plan,
            step: 0,
            values,
            phase: CounterPhase::Idle,
        }
    }

    pub fn plan(&self) -> CounterPlan {
        self.plan
    }

    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    pub fn is_finished(&self) -> bool {
        self.phase == CounterPhase::Finished
    }

    /// Feed the viewport trigger. Returns `true` only for the call that moves
    /// the counter out of `Idle`; that caller owns the one timer.
    pub fn on_trigger(&mut self, triggered: bool) -> bool {
        if !triggered || self.phase != CounterPhase::Idle {
            return false;
        }
        if self.plan.steps == 0 {
            self.finish();
            return false;
        }
        self.phase = CounterPhase::Running;
        true
    }

    pub fn tick(&mut self) -> Tick {
        if self.phase != CounterPhase::Running {
            return Tick::Ignored;
        }

        self.step += 1;
        if self.step >= self.plan.steps {
            self.finish();
            return Tick::Finished;
        }

        let (step, steps) = (u64::from(self.step), u64::from(self.plan.steps));
        for (value, target) in self.values.iter_mut().zip(&self.targets) {
            *value = (u64::from(target.target) * step / steps) as u32;
        }
        Tick::Advanced
    }

    fn finish(&mut self) {
        self.step = self.plan.steps;
        for (value, target) in self.values.iter_mut().zip(&self.targets) {
            *value = target.target;
        }
        self.phase = CounterPhase::Finished;
    }

    /// Displayed value for `key`, or 0 when the key is not configured.
    pub fn value(&self, key: StatKey) -> u32 {
        self.targets
            .iter()
            .position(|t| t.key == key)
            .map(|idx| self.values[idx])
            .unwrap_or(0)
    }

    pub fn values(&self) -> impl Iterator<Item = (StatTarget, u32)> + '_ {
        self.targets.iter().copied().zip(self.values.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_names_match_config_spelling() {
        for key in StatKey::ALL {
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.name()));
        }
    }

    fn running() -> StatsCounter {
        let mut counter = StatsCounter::new(default_targets(), CounterPlan::default());
        assert!(counter.on_trigger(true));
        counter
    }

    #[test]
    fn starts_at_zero_and_waits_for_trigger() {
        let mut counter = StatsCounter::new(default_targets(), CounterPlan::default());
        assert!(!counter.on_trigger(false));
        assert_eq!(counter.phase(), CounterPhase::Idle);
        assert_eq!(counter.tick(), Tick::Ignored);
        for key in StatKey::ALL {
            assert_eq!(counter.value(key), 0);
        }
    }

    #[test]
    fn second_trigger_does_not_start_another_run() {
        let mut counter = running();
        assert!(!counter.on_trigger(true));
        counter.tick();
        assert!(!counter.on_trigger(true));
        assert_eq!(counter.step(), 1);
    }

    #[test]
    fn every_step_is_the_linear_floor() {
        let mut counter = running();
        for s in 1..=60u32 {
            counter.tick();
            for (target, shown) in counter.values() {
                let expected = (target.target as u64 * s as u64 / 60) as u32;
                assert_eq!(shown, expected, "{:?} at step {s}", target.key);
            }
        }
    }

    #[test]
    fn final_frame_lands_exactly_on_targets() {
        let mut counter = running();
        let mut ticks = 0;
        while counter.tick() == Tick::Advanced {
            ticks += 1;
        }
        assert_eq!(ticks + 1, 60);
        assert!(counter.is_finished());
        assert_eq!(counter.value(StatKey::Children), 500);
        assert_eq!(counter.value(StatKey::Satisfaction), 98);
        assert_eq!(counter.value(StatKey::Years), 10);
        assert_eq!(counter.value(StatKey::Specialists), 25);
        assert_eq!(counter.tick(), Tick::Ignored);
    }

    #[test]
    fn values_never_decrease_or_overshoot() {
        let mut counter = running();
        let mut previous: Vec<u32> = counter.values().map(|(_, v)| v).collect();
        while counter.phase() == CounterPhase::Running {
            counter.tick();
            for ((target, now), before) in counter.values().zip(&previous) {
                assert!(now >= *before);
                assert!(now <= target.target);
            }
            previous = counter.values().map(|(_, v)| v).collect();
        }
    }

    #[test]
    fn interval_matches_plan() {
        let plan = CounterPlan::default();
        assert!((plan.interval_ms() - 33.333).abs() < 0.01);
    }

    #[test]
    fn zero_step_plan_jumps_to_targets() {
        let plan = CounterPlan {
            duration_ms: 2000,
            steps: 0,
        };
        let mut counter = StatsCounter::new(default_targets(), plan);
        assert!(!counter.on_trigger(true));
        assert!(counter.is_finished());
        assert_eq!(counter.value(StatKey::Years), 10);
    }

    #[test]
    fn custom_targets_are_honoured() {
        let targets = vec![StatTarget::new(StatKey::Children, 1234)];
        let plan = CounterPlan {
            duration_ms: 100,
            steps: 4,
        };
        let mut counter = StatsCounter::new(targets, plan);
        counter.on_trigger(true);
        counter.tick();
        assert_eq!(counter.value(StatKey::Children), 308);
        assert_eq!(counter.value(StatKey::Years), 0);
    }
}
