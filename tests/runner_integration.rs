use leet_kernels::{
    builder::RunnerBuilder,
    engine::solve_all,
    problems::{no_zero::NoZeroProblem, sqrt::SqrtProblem, two_sum::TwoSumProblem},
    Exercise, Runner, SolveError, Split,
};

#[test]
fn runner_two_sum_demo() {
    let runner = RunnerBuilder::new(TwoSumProblem::new(vec![2, 7, 11, 15], 9))
        .verify(true)
        .build();
    assert_eq!(runner.run(), Ok((0, 1)));
}

#[test]
fn runner_reports_missing_pair() {
    let err = Runner::new(TwoSumProblem::new(vec![1, 2, 3], 7))
        .run()
        .unwrap_err();
    assert!(matches!(
        err,
        SolveError::InvalidInput {
            exercise: "two_sum",
            ..
        }
    ));
}

#[test]
fn runner_no_zero_fallback_passes_verification() {
    let out = Runner::with_verify(NoZeroProblem::new(1), true).run().unwrap();
    assert_eq!(out, Split::Fallback { a: 1, b: 0 });
}

#[test]
fn runner_accepts_borrowed_problems() {
    let problem = SqrtProblem::new(99);
    let runner = Runner::with_verify(&problem, true);
    assert_eq!(runner.run(), Ok(9));
    assert_eq!(problem.name(), "sqrt");
}

#[test]
fn batch_matches_individual_runs() {
    let problems: Vec<NoZeroProblem> = (0..300).map(NoZeroProblem::new).collect();
    let batch = solve_all(&problems, true);
    for (p, got) in problems.iter().zip(&batch) {
        assert_eq!(got, &Runner::with_verify(*p, true).run());
    }
    assert!(batch[0].is_err());
}
