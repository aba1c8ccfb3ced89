use std::rc::Rc;

use yew::prelude::*;

/// Click counter owned by a single landing display. Only ever goes up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    value: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterAction {
    Increment,
}

impl Counter {
    pub fn value(&self) -> u64 {
        self.value
    }

    fn incremented(self) -> Self {
        Self { value: self.value.saturating_add(1) }
    }
}

impl Reducible for Counter {
    type Action = CounterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CounterAction::Increment => Rc::new(self.incremented()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clicks(start: Rc<Counter>, n: usize) -> Rc<Counter> {
        (0..n).fold(start, |c, _| c.reduce(CounterAction::Increment))
    }

    #[test]
    fn starts_at_zero() {
        assert_eq!(Counter::default().value(), 0);
    }

    #[test]
    fn one_then_five() {
        let c = clicks(Rc::new(Counter::default()), 1);
        assert_eq!(c.value(), 1);
        let c = clicks(c, 4);
        assert_eq!(c.value(), 5);
    }

    #[test]
    fn n_increments_yield_n() {
        for n in [0usize, 1, 2, 17, 250] {
            assert_eq!(clicks(Rc::new(Counter::default()), n).value(), n as u64);
        }
    }

    #[test]
    fn never_decreases() {
        let mut c = Rc::new(Counter::default());
        for _ in 0..100 {
            let before = c.value();
            c = c.reduce(CounterAction::Increment);
            assert_eq!(c.value(), before + 1);
        }
    }

    #[test]
    fn saturates_instead_of_wrapping() {
        let c = Rc::new(Counter { value: u64::MAX });
        assert_eq!(c.reduce(CounterAction::Increment).value(), u64::MAX);
    }
}
