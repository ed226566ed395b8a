use crate::engine::Runner;
use crate::traits::Exercise;

pub struct RunnerBuilder<P: Exercise> {
    problem: P,
    verify: Option<bool>,
}

impl<P: Exercise> RunnerBuilder<P> {
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            verify: None,
        }
    }
    pub fn verify(mut self, verify: bool) -> Self {
        self.verify = Some(verify);
        self
    }
    pub fn build(self) -> Runner<P> {
        match self.verify {
            Some(v) => Runner::with_verify(self.problem, v),
            None => Runner::new(self.problem),
        }
    }
}
