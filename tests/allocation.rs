//! End-to-end allocation on the worked example and on generated instances.

use u_flowshop::generate::InstanceGenerator;
use u_flowshop::models::{Instance, Job};
use u_flowshop::partition::{
    compare_partitioners, DpPartitioner, ExhaustivePartitioner, Partitioner,
};
use u_flowshop::sequencing::completion::{closed_form_objective, recurrence_objective};
use u_flowshop::sequencing::{Sequencer, WsptMci};
use u_flowshop::ScheduleError;

#[test]
fn worked_example_every_allocation() {
    let inst = Instance::demo();
    let sequencer = WsptMci::new();
    let jobs = &inst.jobs;

    // All three in-house: [J1, J3, J2] = 16 + 16 + 13
    assert_eq!(sequencer.sequence(jobs, 2).unwrap().objective, 45);
    // Outsource J2 (cost 30): [J1, J3] = 32
    assert_eq!(
        sequencer.sequence(&[jobs[0], jobs[2]], 2).unwrap().objective,
        32
    );
    // Outsource J3 (cost 100): [J1, J2] = 16 + 10
    assert_eq!(
        sequencer.sequence(&[jobs[0], jobs[1]], 2).unwrap().objective,
        26
    );

    let cmp = compare_partitioners(&inst, &sequencer).unwrap();
    for result in [&cmp.exhaustive, &cmp.dp] {
        assert_eq!(result.objective, 26);
        assert_eq!(result.in_house_ids(), vec![0, 1]);
        assert_eq!(result.outsourced_ids(), vec![2]);
        assert_eq!(result.outsourcing_cost, 100);
    }
}

#[test]
fn empty_instance_has_zero_objective() {
    let inst = Instance::new(vec![], vec![], 3, 0);
    let cmp = compare_partitioners(&inst, &WsptMci::new()).unwrap();
    assert_eq!(cmp.objective(), 0);
    assert!(cmp.dp.in_house.is_empty());
}

#[test]
fn generated_instances_hold_invariants() {
    let sequencer = WsptMci::new();
    for seed in 0..25 {
        let inst = InstanceGenerator::new(6)
            .with_machine_count(1 + (seed as usize % 4))
            .with_outsourcing_cost(0, 15)
            .with_budget_ratio(0.4)
            .with_seed(seed)
            .generate();

        let exhaustive = ExhaustivePartitioner::new(&sequencer).solve(&inst).unwrap();
        let dp = DpPartitioner::new(&sequencer).solve(&inst).unwrap();

        for r in [&exhaustive, &dp] {
            assert!(r.is_within_budget(inst.budget));
            assert!(r.partitions(&inst.jobs));
            assert_eq!(r.objective, closed_form_objective(&r.in_house, inst.machine_count));
            assert_eq!(r.objective, recurrence_objective(&r.in_house, inst.machine_count));
        }
        assert!(exhaustive.objective <= dp.objective);
    }
}

#[test]
fn invalid_inputs_fail_before_solving() {
    let jobs = vec![Job::new(0, 1, 1)];
    let sequencer = WsptMci::new();
    let exhaustive = ExhaustivePartitioner::new(&sequencer);
    let dp = DpPartitioner::new(&sequencer);
    let partitioners: [&dyn Partitioner; 2] = [&exhaustive, &dp];
    let cases: [(Vec<i64>, usize, i64); 4] = [
        (vec![], 2, 1),
        (vec![1], 0, 1),
        (vec![-1], 2, 1),
        (vec![1], 2, -1),
    ];
    for partitioner in partitioners {
        for (costs, m, budget) in &cases {
            let (m, budget) = (*m, *budget);
            let err = partitioner.partition(&jobs, costs, m, budget).unwrap_err();
            assert!(matches!(err, ScheduleError::InvalidArgument { .. }));
        }
    }
}
