use super::action::Action;

#[derive(Clone, Debug, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    value: i64,
}

impl Counter {
    #[inline]
    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn increment(&mut self) {
        self.value += 1;
    }

    pub fn decrement(&mut self) {
        self.value -= 1;
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }

    pub fn increment_more(&mut self) {
        self.value += 10;
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Increment => self.increment(),
            Action::Decrement => self.decrement(),
            Action::Reset => self.reset(),
            Action::IncrementMore => self.increment_more(),
        }
    }
}
